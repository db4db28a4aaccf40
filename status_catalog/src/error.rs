use std::fmt;

// The literal argument is kept as given so it can be echoed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
  NotANumber(String), // argument is not an integer
  OutOfRange(String), // an integer, but not a registered status code
}

impl StatusError {
  pub fn input(&self) -> &str {
    match self {
      StatusError::NotANumber(input) => input,
      StatusError::OutOfRange(input) => input,
    }
  }

  pub fn reason(&self) -> &'static str {
    match self {
      StatusError::NotANumber(_) => "not a number",
      StatusError::OutOfRange(_) => "out of range",
    }
  }
}

impl fmt::Display for StatusError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(
      f,
      "\"{}\" is not a valid HTTP status code: {}",
      self.input(),
      self.reason()
    )
  }
}

impl std::error::Error for StatusError {}
