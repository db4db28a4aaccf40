use super::catalog::{entries_in_class, StatusEntry};
use super::class::StatusClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
  Text,
  Json,
}

/// `"<code> <reason>\n"`, followed by the explanation and a blank line when
/// `long` is set and the code has one.
pub fn format_entry(entry: &StatusEntry, long: bool) -> String {
  let mut text = format!("{} {}\n", entry.code, entry.reason);
  if long {
    if let Some(explanation) = entry.explanation {
      text.push_str(explanation);
      text.push_str("\n\n");
    }
  }
  return text;
}

// one JSON object per line, explanation only in long form
pub fn format_entry_json(entry: &StatusEntry, long: bool) -> Result<String, serde_json::Error> {
  let json = if long {
    serde_json::to_string(entry)?
  } else {
    serde_json::to_string(&entry.short())?
  };
  return Ok(json + "\n");
}

pub fn render_entry(
  entry: &StatusEntry,
  long: bool,
  format: Format,
) -> Result<String, serde_json::Error> {
  match format {
    Format::Text => Ok(format_entry(entry, long)),
    Format::Json => format_entry_json(entry, long),
  }
}

pub fn render_class(
  class: StatusClass,
  long: bool,
  format: Format,
) -> Result<String, serde_json::Error> {
  let mut output = String::new();
  for entry in entries_in_class(class) {
    output.push_str(&render_entry(&entry, long, format)?);
  }
  return Ok(output);
}
