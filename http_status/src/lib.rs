extern crate serde_json;

extern crate status_args;
extern crate status_catalog;
extern crate status_log;

pub mod app;
pub mod cli;
pub mod error;

pub use app::run;
pub use cli::{build_args, Config, Mode};
pub use error::AppError;
