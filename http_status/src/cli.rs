use status_args::{ArgError, ArgOpts, Args, Matches, DEFAULT_OPTS};
use status_catalog::{Format, StatusClass, ALL_CLASSES};
use status_log::LogLevel;

pub const PROGRAM: &str = "http-status";

/// Everything a run needs, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub code: Option<String>, // literal positional argument
  pub classes: Vec<StatusClass>,
  pub long: bool,
  pub format: Format,
  pub log_level: LogLevel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
  Normal(Config),
  Help,
  Version,
}

fn flag(short: Option<&str>, description: &str) -> ArgOpts {
  ArgOpts {
    short: short.map(|name| name.to_owned()),
    description: Some(description.to_owned()),
    ..DEFAULT_OPTS
  }
}

pub fn build_args() -> Args {
  let mut args = Args::new();
  args.add_positional(
    "code".to_owned(),
    Some("HTTP status code to look up".to_owned()),
  );
  for class in ALL_CLASSES.iter() {
    let digit = class.digit().to_string();
    args.add(
      digit.clone(),
      flag(Some(&digit), &format!("List the {} codes", class.label())),
    );
  }
  args.add(
    "long".to_owned(),
    flag(Some("l"), "Print the long explanation where available"),
  );
  args.add("json".to_owned(), flag(Some("j"), "Print JSON lines"));
  args.add("verbose".to_owned(), flag(None, "Log what is happening to stderr"));
  args.add("help".to_owned(), flag(Some("h"), "Print this help"));
  args.add("version".to_owned(), flag(Some("V"), "Print the version"));
  return args;
}

impl Config {
  pub fn from_matches(matches: &Matches) -> Config {
    let classes = ALL_CLASSES
      .iter()
      .filter(|class| matches.is_present(&class.digit().to_string()))
      .cloned()
      .collect();
    Config {
      code: matches.positional("code").map(|code| code.to_owned()),
      classes: classes,
      long: matches.is_present("long"),
      format: if matches.is_present("json") {
        Format::Json
      } else {
        Format::Text
      },
      log_level: if matches.is_present("verbose") {
        LogLevel::DEBUG
      } else {
        LogLevel::WARN
      },
    }
  }
}

impl Mode {
  /// Parse the arguments, program name excluded.
  pub fn parse<I>(args: &Args, argv: I) -> Result<Mode, ArgError>
  where
    I: IntoIterator,
    I::Item: Into<String>,
  {
    let matches = args.parse(argv)?;
    if matches.is_present("help") {
      return Ok(Mode::Help);
    }
    if matches.is_present("version") {
      return Ok(Mode::Version);
    }
    return Ok(Mode::Normal(Config::from_matches(&matches)));
  }
}

pub fn version() -> String {
  format!("{} {}\n", PROGRAM, env!("CARGO_PKG_VERSION"))
}
