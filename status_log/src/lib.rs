extern crate chrono;
use chrono::prelude::*;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

// ordered from least to most verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
  ERROR,
  WARN,
  INFO,
  DEBUG,
  TRACE,
}

pub struct Logger {
  max_level: LogLevel,
  sinks: Vec<Box<dyn Sink>>,
}

impl Logger {
  pub fn new(max_level: LogLevel) -> Logger {
    Logger {
      max_level: max_level,
      sinks: Vec::new(),
    }
  }

  pub fn enabled(&self, level: LogLevel) -> bool {
    level <= self.max_level
  }

  // nothing would be written anywhere
  pub fn is_silent(&self) -> bool {
    self.sinks.is_empty()
  }

  pub fn log(&mut self, level: LogLevel, msg: &str) {
    if !self.enabled(level) {
      return;
    }
    for sink in &mut self.sinks {
      sink.write(level, msg);
    }
  }

  pub fn error(&mut self, msg: &str) {
    self.log(LogLevel::ERROR, msg);
  }

  pub fn warn(&mut self, msg: &str) {
    self.log(LogLevel::WARN, msg);
  }

  pub fn info(&mut self, msg: &str) {
    self.log(LogLevel::INFO, msg);
  }

  pub fn debug(&mut self, msg: &str) {
    self.log(LogLevel::DEBUG, msg);
  }

  pub fn trace(&mut self, msg: &str) {
    self.log(LogLevel::TRACE, msg);
  }

  pub fn add_sink(&mut self, sink: Box<dyn 'static + Sink>) {
    self.sinks.push(sink);
  }
}

pub trait Sink {
  /* a sink that can't write drops the message, logging must never fail the command */
  fn write(&mut self, level: LogLevel, msg: &str);
}

pub fn format_line(level: LogLevel, msg: &str) -> String {
  let cur_timestamp = Local::now();
  format!("[{}] - [{:?}] {}", cur_timestamp, level, msg)
}

// Writes to stderr, stdout belongs to the command output.
pub struct ConsoleLogger {
  handle: io::Stderr,
}

impl ConsoleLogger {
  pub fn new() -> ConsoleLogger {
    ConsoleLogger {
      handle: io::stderr(),
    }
  }
}

impl Sink for ConsoleLogger {
  // the process is short lived, so every line is flushed right away
  fn write(&mut self, level: LogLevel, msg: &str) {
    let mut std_handle = self.handle.lock();
    writeln!(std_handle, "{}", format_line(level, msg)).unwrap_or_default();
    std_handle.flush().unwrap_or_default();
  }
}

/// Keeps formatted lines in memory; clones share the same buffer.
#[derive(Clone, Default)]
pub struct MemorySink {
  lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
  pub fn new() -> MemorySink {
    MemorySink::default()
  }

  pub fn lines(&self) -> Vec<String> {
    match self.lines.lock() {
      Ok(lines) => lines.clone(),
      Err(poisoned) => poisoned.into_inner().clone(),
    }
  }
}

impl Sink for MemorySink {
  fn write(&mut self, level: LogLevel, msg: &str) {
    let formatted_msg = format_line(level, msg);
    match self.lines.lock() {
      Ok(mut shared_lines) => shared_lines.push(formatted_msg),
      Err(poisoned) => poisoned.into_inner().push(formatted_msg),
    }
  }
}
