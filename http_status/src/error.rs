use std::fmt;

use status_args::ArgError;
use status_catalog::StatusError;

#[derive(Debug)]
pub enum AppError {
  Args(ArgError),              // command line could not be parsed
  Status(StatusError),         // the requested code is not a valid status
  Json(serde_json::Error),     // failed to serialize an entry
  Output(std::io::Error),      // failed to write to stdout
}

impl From<ArgError> for AppError {
  fn from(err: ArgError) -> AppError {
    AppError::Args(err)
  }
}

impl From<StatusError> for AppError {
  fn from(err: StatusError) -> AppError {
    AppError::Status(err)
  }
}

impl From<serde_json::Error> for AppError {
  fn from(err: serde_json::Error) -> AppError {
    AppError::Json(err)
  }
}

impl From<std::io::Error> for AppError {
  fn from(err: std::io::Error) -> AppError {
    AppError::Output(err)
  }
}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      AppError::Args(err) => write!(f, "{}", err),
      AppError::Status(err) => write!(f, "{}", err),
      AppError::Json(err) => write!(f, "failed to serialize status: {}", err),
      AppError::Output(err) => write!(f, "failed to write output: {}", err),
    }
  }
}

impl std::error::Error for AppError {}
