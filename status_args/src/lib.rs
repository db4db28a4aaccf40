pub mod args;

pub use args::{ArgError, ArgOpts, Args, Matches, DEFAULT_OPTS};
