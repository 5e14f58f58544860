//! Structural classification of populated values.

use std::fmt;

/// The shape of a value as seen by the traversal engine.
///
/// Every [`Populate`](crate::Populate) implementation reports its shape so
/// the entry point can validate targets and trace lines can say what kind of
/// location was visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Shape {
    /// Integer, unsigned, float, string, boolean or complex leaf.
    Scalar,
    /// A struct deriving [`Populate`](crate::Populate).
    Record,
    /// An enum deriving [`Populate`](crate::Populate); the held variant is
    /// populated in place.
    Enum,
    /// `Option<T>` or `Box<T>`.
    Pointer,
    /// Fixed-size sequence such as `[T; N]` or a tuple.
    Array,
    /// Variable-size sequence such as `Vec<T>`.
    Sequence,
    /// Associative container such as `HashMap<K, V>`.
    Map,
    /// A [`Dynamic`](crate::Dynamic) slot holding a type-erased value.
    Dynamic,
    /// A type the engine does not know how to fill.
    Unrecognized,
}

impl Shape {
    /// Returns the lowercase name used in trace output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Record => "record",
            Self::Enum => "enum",
            Self::Pointer => "pointer",
            Self::Array => "array",
            Self::Sequence => "sequence",
            Self::Map => "map",
            Self::Dynamic => "dynamic",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
