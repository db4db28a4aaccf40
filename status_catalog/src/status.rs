use super::class::StatusClass;
use super::explanation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
  pub code: u16,
  pub reason: &'static str,
}

impl Status {
  // only registered codes resolve, anything else is None
  pub fn from_standard_code(code: i64) -> Option<Status> {
    let reason = Status::get_standard_reason(code)?;
    return Some(Status {
      code: code as u16,
      reason: reason,
    });
  }

  // every status code with a standard reason phrase, worded as in the common
  // status text tables (RFC 7231 era names, 418 included)
  pub fn get_standard_reason(code: i64) -> Option<&'static str> {
    let reason = match code {
      100 => "Continue",
      101 => "Switching Protocols",
      102 => "Processing",
      103 => "Early Hints",
      200 => "OK",
      201 => "Created",
      202 => "Accepted",
      203 => "Non-Authoritative Information",
      204 => "No Content",
      205 => "Reset Content",
      206 => "Partial Content",
      207 => "Multi-Status",
      208 => "Already Reported",
      226 => "IM Used",
      300 => "Multiple Choices",
      301 => "Moved Permanently",
      302 => "Found",
      303 => "See Other",
      304 => "Not Modified",
      305 => "Use Proxy",
      307 => "Temporary Redirect",
      308 => "Permanent Redirect",
      400 => "Bad Request",
      401 => "Unauthorized",
      402 => "Payment Required",
      403 => "Forbidden",
      404 => "Not Found",
      405 => "Method Not Allowed",
      406 => "Not Acceptable",
      407 => "Proxy Authentication Required",
      408 => "Request Timeout",
      409 => "Conflict",
      410 => "Gone",
      411 => "Length Required",
      412 => "Precondition Failed",
      413 => "Request Entity Too Large",
      414 => "Request URI Too Long",
      415 => "Unsupported Media Type",
      416 => "Requested Range Not Satisfiable",
      417 => "Expectation Failed",
      418 => "I'm a teapot",
      421 => "Misdirected Request",
      422 => "Unprocessable Entity",
      423 => "Locked",
      424 => "Failed Dependency",
      425 => "Too Early",
      426 => "Upgrade Required",
      428 => "Precondition Required",
      429 => "Too Many Requests",
      431 => "Request Header Fields Too Large",
      451 => "Unavailable For Legal Reasons",
      500 => "Internal Server Error",
      501 => "Not Implemented",
      502 => "Bad Gateway",
      503 => "Service Unavailable",
      504 => "Gateway Timeout",
      505 => "HTTP Version Not Supported",
      506 => "Variant Also Negotiates",
      507 => "Insufficient Storage",
      508 => "Loop Detected",
      510 => "Not Extended",
      511 => "Network Authentication Required",
      _ => return None,
    };
    return Some(reason);
  }

  pub fn class(&self) -> StatusClass {
    // registered codes are always within 100..=599
    match StatusClass::of(self.code as i64) {
      Some(class) => class,
      None => unreachable!("registered status {} has no class", self.code),
    }
  }

  pub fn explanation(&self) -> Option<&'static str> {
    explanation::get_explanation(self.code as i64)
  }
}
