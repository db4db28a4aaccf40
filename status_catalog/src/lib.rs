extern crate serde;
extern crate serde_json;

pub mod catalog;
pub mod class;
pub mod error;
pub mod explanation;
pub mod render;
pub mod status;

pub use catalog::{
  codes_in_class, entries_in_class, is_valid, long_explanation_for, phrase_for, resolve,
  StatusEntry,
};
pub use class::{StatusClass, ALL_CLASSES};
pub use error::StatusError;
pub use render::Format;
