// Hand-written explanations for the commonly seen status codes.
// Sorted by code, which `codes_in_class` relies on.
pub const EXPLANATIONS: &[(u16, &str)] = &[
  (100, concat!(
    "The server has received the request headers and the client should proceed\n",
    "to send the request body. Sent in reply to a request carrying\n",
    "\"Expect: 100-continue\" so that a large body is only sent when the server\n",
    "is willing to accept it.",
  )),
  (101, concat!(
    "The server agrees to switch to the protocol named in the Upgrade header of\n",
    "the request. Seen most often when a connection is upgraded to WebSocket.",
  )),
  (102, concat!(
    "WebDAV interim response telling the client that the server has accepted the\n",
    "complete request but has not finished processing it yet. Deprecated.",
  )),
  (103, concat!(
    "Interim response carrying Link headers so the client can start preloading\n",
    "resources while the server is still preparing the final response.",
  )),
  (200, concat!(
    "The request succeeded. For GET the body holds the requested resource, for\n",
    "POST it describes the outcome of the action.",
  )),
  (201, concat!(
    "The request succeeded and a new resource was created. The Location header\n",
    "usually points at the new resource. Typical reply to POST or PUT.",
  )),
  (202, concat!(
    "The request was accepted for processing, but processing has not completed.\n",
    "Used for batch or asynchronous work; the outcome may be reported elsewhere.",
  )),
  (203, concat!(
    "The request succeeded, but the enclosed payload was modified by a\n",
    "transforming proxy from the origin server's 200 response.",
  )),
  (204, concat!(
    "The request succeeded and there is no content to send in the body. Common\n",
    "reply to PUT or DELETE, and to form submissions that keep the current page.",
  )),
  (205, concat!(
    "The request succeeded and the client should reset the document view, for\n",
    "example clear the form that triggered the request.",
  )),
  (206, concat!(
    "The server is delivering only part of the resource because the client sent\n",
    "a Range header. Used for resumable downloads and media seeking.",
  )),
  (207, concat!(
    "WebDAV response whose XML body contains separate status codes for several\n",
    "independent operations.",
  )),
  (208, concat!(
    "Used inside a WebDAV 207 body to avoid enumerating the members of the same\n",
    "collection repeatedly when it is bound more than once.",
  )),
  (226, concat!(
    "The server fulfilled a GET request for the resource and the response is a\n",
    "representation of the result of instance manipulations (delta encoding).",
  )),
  (300, concat!(
    "The resource has several representations and the client, or the user, has\n",
    "to pick one. Rarely used since there is no standard way to choose.",
  )),
  (301, concat!(
    "The resource has a new permanent URI given in the Location header. Clients\n",
    "and search engines should update their links. Clients may change POST to\n",
    "GET when following it.",
  )),
  (302, concat!(
    "The resource temporarily lives under the URI in the Location header. The\n",
    "client should keep using the original URI for future requests.",
  )),
  (303, concat!(
    "The response to the request can be found under another URI using GET. Used\n",
    "after a POST to send the browser to a result page.",
  )),
  (304, concat!(
    "The resource has not changed since the version named by the conditional\n",
    "headers (If-None-Match, If-Modified-Since), so the cached copy can be used.\n",
    "The response has no body.",
  )),
  (305, concat!(
    "The resource must be accessed through the proxy given in the Location\n",
    "header. Deprecated for security reasons and ignored by browsers.",
  )),
  (307, concat!(
    "Like 302, the resource temporarily lives under another URI, but the client\n",
    "must not change the request method or body when following the redirect.",
  )),
  (308, concat!(
    "Like 301, the resource has a new permanent URI, but the client must not\n",
    "change the request method or body when following the redirect.",
  )),
  (400, concat!(
    "The server cannot process the request because of a client error, such as\n",
    "malformed syntax, invalid framing or a deceptive routing.",
  )),
  (401, concat!(
    "The request lacks valid authentication credentials. The response includes\n",
    "a WWW-Authenticate header describing how to authenticate. Despite the name\n",
    "this is about authentication, not authorization.",
  )),
  (402, concat!(
    "Reserved for future use. Some services return it when a payment or quota\n",
    "is required before the request can be served.",
  )),
  (403, concat!(
    "The server understood the request but refuses to authorize it. Unlike 401,\n",
    "authenticating again will not help.",
  )),
  (404, concat!(
    "The server cannot find the requested resource. Links which lead to a 404\n",
    "page are often called broken or dead links. The resource may become\n",
    "available again later.",
  )),
  (405, concat!(
    "The request method is known by the server but not supported by the target\n",
    "resource. The response carries an Allow header listing supported methods.",
  )),
  (406, concat!(
    "The server cannot produce a response matching the Accept headers sent by\n",
    "the client during content negotiation.",
  )),
  (407, concat!(
    "Like 401, but the client has to authenticate with the proxy first. The\n",
    "proxy sends a Proxy-Authenticate header.",
  )),
  (408, concat!(
    "The server timed out waiting for the request. Some servers send it on idle\n",
    "connections before closing them.",
  )),
  (409, concat!(
    "The request conflicts with the current state of the target resource, for\n",
    "example an edit conflict between concurrent updates.",
  )),
  (410, concat!(
    "The resource is no longer available and will not be available again.\n",
    "Clients should remove links to it.",
  )),
  (411, concat!(
    "The server requires a Content-Length header and the request did not\n",
    "include one.",
  )),
  (412, concat!(
    "One or more conditions in the request headers (If-Match,\n",
    "If-Unmodified-Since) evaluated to false on the server.",
  )),
  (413, concat!(
    "The request content is larger than the server is willing or able to\n",
    "process. The server may close the connection.",
  )),
  (414, concat!(
    "The request URI is longer than the server is willing to interpret, often\n",
    "caused by a GET with an oversized query string.",
  )),
  (415, concat!(
    "The payload is in a format the server does not support for this method\n",
    "and resource, judged by Content-Type or Content-Encoding.",
  )),
  (416, concat!(
    "None of the ranges in the Range header can be satisfied, for example a\n",
    "range starting beyond the end of the resource.",
  )),
  (417, concat!(
    "The expectation given in the Expect request header could not be met by the\n",
    "server.",
  )),
  (421, concat!(
    "The request was directed at a server that is not able to produce a\n",
    "response for this combination of scheme and authority, typically after\n",
    "connection reuse across hosts.",
  )),
  (422, concat!(
    "The server understands the content type and the syntax is correct, but it\n",
    "was unable to process the contained instructions (validation errors).",
  )),
  (423, concat!(
    "WebDAV: the source or destination resource is locked.",
  )),
  (424, concat!(
    "WebDAV: the method could not be performed because it depended on another\n",
    "action which failed.",
  )),
  (426, concat!(
    "The server refuses to perform the request using the current protocol, but\n",
    "might after the client upgrades to the protocol named in the Upgrade header.",
  )),
  (428, concat!(
    "The origin server requires the request to be conditional, to prevent the\n",
    "lost update problem when a client overwrites changes it never saw.",
  )),
  (429, concat!(
    "The user has sent too many requests in a given amount of time (rate\n",
    "limiting). A Retry-After header may say how long to wait.",
  )),
  (431, concat!(
    "The server refuses the request because its header fields are too large,\n",
    "either one header or all of them together.",
  )),
  (451, concat!(
    "The resource cannot be served for legal reasons, such as a government\n",
    "censorship order or a court injunction.",
  )),
  (500, concat!(
    "The server encountered an unexpected condition that prevented it from\n",
    "fulfilling the request. Generic catch-all server error.",
  )),
  (501, concat!(
    "The server does not support the functionality required to fulfill the\n",
    "request, for example an unrecognized request method.",
  )),
  (502, concat!(
    "The server, acting as a gateway or proxy, received an invalid response\n",
    "from the upstream server.",
  )),
  (503, concat!(
    "The server is not ready to handle the request, commonly because it is down\n",
    "for maintenance or overloaded. A Retry-After header may say when to retry.",
  )),
  (504, concat!(
    "The server, acting as a gateway or proxy, did not get a response from the\n",
    "upstream server in time.",
  )),
  (505, concat!(
    "The HTTP version used in the request is not supported by the server.",
  )),
  (506, concat!(
    "The server has an internal configuration error: transparent content\n",
    "negotiation results in a circular reference.",
  )),
  (507, concat!(
    "WebDAV: the server is unable to store the representation needed to\n",
    "complete the request.",
  )),
  (508, concat!(
    "WebDAV: the server detected an infinite loop while processing the request.",
  )),
  (511, concat!(
    "The client needs to authenticate to gain network access, as with captive\n",
    "portals on public Wi-Fi.",
  )),
];

pub fn get_explanation(code: i64) -> Option<&'static str> {
  match EXPLANATIONS.binary_search_by_key(&code, |(curated, _)| *curated as i64) {
    Ok(index) => Some(EXPLANATIONS[index].1),
    Err(_) => None,
  }
}
