use std::fmt;

use serde::Serialize;

/// The class of a status code, given by its first digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
  Informational,
  Successful,
  Redirection,
  ClientError,
  ServerError,
}

pub const ALL_CLASSES: [StatusClass; 5] = [
  StatusClass::Informational,
  StatusClass::Successful,
  StatusClass::Redirection,
  StatusClass::ClientError,
  StatusClass::ServerError,
];

impl StatusClass {
  pub fn from_digit(digit: i64) -> Option<StatusClass> {
    match digit {
      1 => Some(StatusClass::Informational),
      2 => Some(StatusClass::Successful),
      3 => Some(StatusClass::Redirection),
      4 => Some(StatusClass::ClientError),
      5 => Some(StatusClass::ServerError),
      _ => None,
    }
  }

  /// Class of a code, `None` when `code / 100` falls outside 1..=5.
  pub fn of(code: i64) -> Option<StatusClass> {
    if code < 0 {
      return None;
    }
    StatusClass::from_digit(code / 100)
  }

  pub fn digit(&self) -> u8 {
    match self {
      StatusClass::Informational => 1,
      StatusClass::Successful => 2,
      StatusClass::Redirection => 3,
      StatusClass::ClientError => 4,
      StatusClass::ServerError => 5,
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      StatusClass::Informational => "1xx Informational",
      StatusClass::Successful => "2xx Successful",
      StatusClass::Redirection => "3xx Redirection",
      StatusClass::ClientError => "4xx Client Error",
      StatusClass::ServerError => "5xx Server Error",
    }
  }
}

impl fmt::Display for StatusClass {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.label())
  }
}
