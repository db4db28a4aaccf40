use std::collections::{HashMap, HashSet};
use std::fmt;

pub struct ArgOpts {
  pub short: Option<String>,
  pub description: Option<String>,
  pub is_required: bool,
  pub is_flag: bool,
  pub validation: Option<Box<dyn Fn(&str) -> bool>>,
}

pub const DEFAULT_OPTS: ArgOpts = ArgOpts {
  short: None,
  description: None,
  is_required: false,
  is_flag: true,
  validation: None,
};

pub fn format_as_long(name: &str) -> String {
  format!("--{}", name)
}

pub fn format_as_short(name: &str) -> String {
  format!("-{}", name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
  NoArgOpt(String),         // There is no definition for this argument.
  RequiredNotFound(String), // Required Arg not found in args
  ValueNotFound(String),    // found arg but no value
  InvalidValue(String),     // validation func returned false
  Unexpected(String),       // found in args but no ArgOpt or positional slot for it
}

impl fmt::Display for ArgError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      ArgError::NoArgOpt(name) => write!(f, "No definition for argument: {}", name),
      ArgError::RequiredNotFound(name) => write!(f, "Missing required argument: {}", name),
      ArgError::ValueNotFound(name) => write!(f, "Expected a value for argument: {}", name),
      ArgError::InvalidValue(name) => {
        write!(f, "An invalid value was provided for argument: {}", name)
      }
      ArgError::Unexpected(arg) => write!(f, "Unexpected argument: {}", arg),
    }
  }
}

impl std::error::Error for ArgError {}

struct Positional {
  name: String,
  description: Option<String>,
}

pub struct Args {
  inner: HashMap<String, ArgOpts>,
  order: Vec<String>, // registration order, used for usage text
  positionals: Vec<Positional>,
}

/// Result of a successful parse.
#[derive(Debug, Default)]
pub struct Matches {
  flags: HashSet<String>,
  values: HashMap<String, String>,
  positionals: HashMap<String, String>,
}

impl Matches {
  pub fn is_present(&self, name: &str) -> bool {
    self.flags.contains(name) || self.values.contains_key(name)
  }

  pub fn value(&self, name: &str) -> Option<&str> {
    self.values.get(name).map(|value| value.as_str())
  }

  pub fn positional(&self, name: &str) -> Option<&str> {
    self.positionals.get(name).map(|value| value.as_str())
  }
}

impl Args {
  pub fn new() -> Args {
    Args {
      inner: HashMap::new(),
      order: Vec::new(),
      positionals: Vec::new(),
    }
  }

  pub fn add(&mut self, name: String, options: ArgOpts) {
    if !self.inner.contains_key(&name) {
      self.order.push(name.clone());
    }
    self.inner.insert(name, options);
  }

  pub fn add_positional(&mut self, name: String, description: Option<String>) {
    self.positionals.push(Positional {
      name: name,
      description: description,
    });
  }

  // finds the definition matching a token like `--long` or `-s`
  fn find(&self, arg: &str) -> Option<(&String, &ArgOpts)> {
    self.inner.iter().find(|(name, argopt)| {
      arg == format_as_long(name)
        || match &argopt.short {
          Some(short_name) => arg == format_as_short(&short_name),
          None => false,
        }
    })
  }

  // gets the definition of an argument by name
  pub fn get(&self, name: &str) -> Result<&ArgOpts, ArgError> {
    match self.inner.get(name) {
      Some(argopt) => Ok(argopt),
      None => Err(ArgError::NoArgOpt(name.to_owned())),
    }
  }

  // parses the arguments (program name excluded) and validates them
  pub fn parse<I>(&self, argv: I) -> Result<Matches, ArgError>
  where
    I: IntoIterator,
    I::Item: Into<String>,
  {
    let mut matches = Matches::default();
    let mut free = Vec::<String>::new();
    let mut only_positionals = false;

    let mut argv = argv.into_iter().map(Into::<String>::into);
    while let Some(arg) = argv.next() {
      if only_positionals || arg == "-" || !arg.starts_with('-') {
        free.push(arg);
        continue;
      }
      if arg == "--" {
        only_positionals = true;
        continue;
      }
      match self.find(&arg) {
        Some((name, argopt)) => {
          if argopt.is_flag {
            matches.flags.insert(name.clone());
          } else {
            match argv.next() {
              Some(val) => {
                if let Some(validation_func) = &argopt.validation {
                  if !validation_func(val.as_str()) {
                    return Err(ArgError::InvalidValue(name.clone()));
                  }
                }
                matches.values.insert(name.clone(), val);
              }
              None => return Err(ArgError::ValueNotFound(name.clone())),
            }
          }
        }
        None => return Err(ArgError::Unexpected(arg)),
      }
    }

    if free.len() > self.positionals.len() {
      return Err(ArgError::Unexpected(free.swap_remove(self.positionals.len())));
    }
    for (slot, val) in self.positionals.iter().zip(free.into_iter()) {
      matches.positionals.insert(slot.name.clone(), val);
    }

    for name in self.order.iter() {
      if let Ok(argopt) = self.get(name) {
        if argopt.is_required && !matches.is_present(name) {
          return Err(ArgError::RequiredNotFound(name.clone()));
        }
      }
    }
    return Ok(matches);
  }

  // renders help text from the argument descriptions
  pub fn usage(&self, program: &str) -> String {
    let mut synopsis = format!("usage: {}", program);
    if !self.order.is_empty() {
      synopsis.push_str(" [OPTIONS]");
    }
    for positional in self.positionals.iter() {
      synopsis.push_str(&format!(" [{}]", positional.name.to_uppercase()));
    }

    let mut rows = Vec::<(String, String)>::new();
    for positional in self.positionals.iter() {
      rows.push((
        positional.name.to_uppercase(),
        positional.description.clone().unwrap_or_default(),
      ));
    }
    for name in self.order.iter() {
      if let Ok(argopt) = self.get(name) {
        let mut left = match &argopt.short {
          Some(short_name) => format!("{}, {}", format_as_short(short_name), format_as_long(name)),
          None => format_as_long(name),
        };
        if !argopt.is_flag {
          left.push_str(" <value>");
        }
        rows.push((left, argopt.description.clone().unwrap_or_default()));
      }
    }

    let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
    let mut usage = synopsis + "\n";
    if !rows.is_empty() {
      usage.push('\n');
    }
    for (left, description) in rows {
      usage.push_str(&format!("    {:width$}  {}\n", left, description, width = width));
    }
    return usage;
  }
}
