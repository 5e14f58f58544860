//! Constructors for `FillError`.

use std::fmt::Display;

use super::FillError;

impl FillError {
    /// Builds [`FillError::InvalidArgument`] from any displayable reason.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Builds [`FillError::UnsupportedType`] for the named type.
    pub fn unsupported_type(type_name: &'static str, path: impl Display) -> Self {
        Self::UnsupportedType {
            type_name,
            path: path.to_string(),
        }
    }

    /// Builds [`FillError::OutOfRange`] for a default rejected by a narrow
    /// scalar type.
    pub fn out_of_range(type_name: &'static str, path: impl Display, value: impl Display) -> Self {
        Self::OutOfRange {
            type_name,
            path: path.to_string(),
            value: value.to_string(),
        }
    }

    /// Returns `true` when the error was raised by boundary validation rather
    /// than by the traversal itself.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
