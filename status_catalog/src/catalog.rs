use std::num::IntErrorKind;

use serde::Serialize;

use super::class::StatusClass;
use super::error::StatusError;
use super::explanation::{self, EXPLANATIONS};
use super::status::Status;

/// One status code with both tiers of data joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
  pub code: u16,
  pub reason: &'static str,
  pub class: StatusClass,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub explanation: Option<&'static str>,
}

impl StatusEntry {
  pub fn lookup(code: i64) -> Option<StatusEntry> {
    let status = Status::from_standard_code(code)?;
    return Some(StatusEntry {
      code: status.code,
      reason: status.reason,
      class: status.class(),
      explanation: status.explanation(),
    });
  }

  // same entry, explanation dropped
  pub fn short(&self) -> StatusEntry {
    StatusEntry {
      explanation: None,
      ..self.clone()
    }
  }
}

pub fn phrase_for(code: i64) -> Option<&'static str> {
  Status::get_standard_reason(code)
}

pub fn is_valid(code: i64) -> bool {
  phrase_for(code).is_some()
}

pub fn long_explanation_for(code: i64) -> Option<&'static str> {
  explanation::get_explanation(code)
}

/// Curated codes of class `n`, ascending. Registered codes without an
/// explanation are never listed.
pub fn codes_in_class(n: i64) -> Vec<u16> {
  match StatusClass::from_digit(n) {
    Some(class) => EXPLANATIONS
      .iter()
      .map(|(code, _)| *code)
      .filter(|code| StatusClass::of(*code as i64) == Some(class))
      .collect(),
    None => Vec::new(),
  }
}

pub fn entries_in_class(class: StatusClass) -> Vec<StatusEntry> {
  codes_in_class(class.digit() as i64)
    .into_iter()
    .filter_map(|code| StatusEntry::lookup(code as i64))
    .collect()
}

/// Parse a literal command line argument and look it up.
pub fn resolve(input: &str) -> Result<StatusEntry, StatusError> {
  let code = match input.parse::<i64>() {
    Ok(code) => code,
    Err(err) => match err.kind() {
      // all digits, just too many of them
      IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
        return Err(StatusError::OutOfRange(input.to_owned()))
      }
      _ => return Err(StatusError::NotANumber(input.to_owned())),
    },
  };
  match StatusEntry::lookup(code) {
    Some(entry) => Ok(entry),
    None => Err(StatusError::OutOfRange(input.to_owned())),
  }
}
