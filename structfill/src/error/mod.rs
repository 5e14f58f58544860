//! Error types produced while populating a target value.

mod constructors;
mod types;

pub use types::{FillError, FillResult};
