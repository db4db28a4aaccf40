use std::io::Write;

use status_catalog::render::{render_class, render_entry};
use status_catalog::resolve;
use status_log::{ConsoleLogger, LogLevel, Logger};

use super::cli::Config;
use super::error::AppError;

// stderr only carries log lines when debug logging was asked for
pub fn build_logger(config: &Config) -> Logger {
  let mut logger = Logger::new(config.log_level);
  if logger.enabled(LogLevel::DEBUG) {
    logger.add_sink(Box::new(ConsoleLogger::new()));
  }
  return logger;
}

// writes text that is not a lookup, like help and version
pub fn write_text<W: Write>(out: &mut W, text: &str) -> Result<(), AppError> {
  out.write_all(text.as_bytes())?;
  out.flush()?;
  return Ok(());
}

// The single code is resolved first; when it fails nothing else is printed.
pub fn run<W: Write>(config: &Config, out: &mut W, logger: &mut Logger) -> Result<(), AppError> {
  if let Some(input) = &config.code {
    logger.debug(&format!("looking up {:?}", input));
    let entry = match resolve(input) {
      Ok(entry) => entry,
      Err(err) => {
        logger.debug(&format!("lookup failed: {}", err.reason()));
        return Err(err.into());
      }
    };
    out.write_all(render_entry(&entry, config.long, config.format)?.as_bytes())?;
  }

  for class in config.classes.iter() {
    logger.debug(&format!("listing {}", class));
    out.write_all(render_class(*class, config.long, config.format)?.as_bytes())?;
  }

  out.flush()?;
  return Ok(());
}

#[cfg(test)]
mod tests {
  use super::*;
  use status_catalog::{Format, StatusClass, StatusError};
  use status_log::MemorySink;
  use std::io;

  // a writer with no room left, like stdout redirected to /dev/full
  struct FullWriter;

  impl Write for FullWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
      Err(io::Error::new(io::ErrorKind::Other, "No space left on device"))
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  fn config() -> Config {
    Config {
      code: None,
      classes: Vec::new(),
      long: false,
      format: Format::Text,
      log_level: LogLevel::WARN,
    }
  }

  fn run_to_string(config: &Config) -> (Result<(), AppError>, String) {
    let mut out = Vec::<u8>::new();
    let mut logger = Logger::new(config.log_level);
    let result = run(config, &mut out, &mut logger);
    (result, String::from_utf8(out).unwrap())
  }

  #[test]
  fn nothing_requested() {
    let (result, output) = run_to_string(&config());
    assert!(result.is_ok());
    assert_eq!(output, "");
  }

  #[test]
  fn failing_code_skips_class_listing() {
    let mut config = config();
    config.code = Some("999".to_owned());
    config.classes = vec![StatusClass::Successful];
    let (result, output) = run_to_string(&config);
    match result {
      Err(AppError::Status(StatusError::OutOfRange(input))) => assert_eq!(input, "999"),
      other => panic!("expected OutOfRange, got {:?}", other),
    }
    assert_eq!(output, "");
  }

  #[test]
  fn code_then_classes() {
    let mut config = config();
    config.code = Some("404".to_owned());
    config.classes = vec![StatusClass::Informational];
    let (result, output) = run_to_string(&config);
    assert!(result.is_ok());
    assert!(output.starts_with("404 Not Found\n100 Continue\n"));
  }

  #[test]
  fn verbose_run_logs_the_lookup() {
    let sink = MemorySink::new();
    let mut logger = Logger::new(LogLevel::DEBUG);
    logger.add_sink(Box::new(sink.clone()));
    let mut config = config();
    config.code = Some("abc".to_owned());
    let mut out = Vec::<u8>::new();

    assert!(run(&config, &mut out, &mut logger).is_err());
    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].ends_with("lookup failed: not a number"));
  }

  #[test]
  fn text_write_failure_is_reported() {
    match write_text(&mut FullWriter, "usage: http-status\n") {
      Err(AppError::Output(err)) => assert_eq!(err.to_string(), "No space left on device"),
      other => panic!("expected an output error, got {:?}", other),
    }
    let mut out = Vec::<u8>::new();
    assert!(write_text(&mut out, "http-status 0.1.0\n").is_ok());
    assert_eq!(out, b"http-status 0.1.0\n");
  }

  #[test]
  fn lookup_write_failure_is_reported() {
    let mut config = config();
    config.code = Some("404".to_owned());
    let mut logger = Logger::new(config.log_level);
    match run(&config, &mut FullWriter, &mut logger) {
      Err(AppError::Output(_)) => {}
      other => panic!("expected an output error, got {:?}", other),
    }
  }

  #[test]
  fn console_sink_only_when_verbose() {
    assert!(build_logger(&config()).is_silent());

    let mut verbose = config();
    verbose.log_level = LogLevel::DEBUG;
    assert!(!build_logger(&verbose).is_silent());
  }
}
