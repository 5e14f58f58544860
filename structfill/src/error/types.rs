//! Primary error enum for populate calls.

use thiserror::Error;

/// Result alias used throughout the traversal engine.
pub type FillResult<T> = Result<T, FillError>;

/// Errors that can occur while populating a target value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FillError {
    /// The entry point was handed something other than a present record.
    ///
    /// Raised before any traversal starts, so the target is left untouched.
    #[error("invalid populate target: {reason}")]
    InvalidArgument {
        /// Human-readable explanation of the rejected argument.
        reason: String,
    },

    /// A location's type is not one the engine knows how to fill and the
    /// fail-on-unrecognized flag is set.
    #[error("unhandled type encountered at '{path}': {type_name}")]
    UnsupportedType {
        /// Fully qualified name of the unrecognized type.
        type_name: &'static str,
        /// Location of the value within the target.
        path: String,
    },

    /// A configured scalar default does not fit the narrower field type.
    #[error("default value {value} does not fit {type_name} at '{path}'")]
    OutOfRange {
        /// Name of the narrow scalar type.
        type_name: &'static str,
        /// Location of the value within the target.
        path: String,
        /// Rendered default that failed to convert.
        value: String,
    },
}
