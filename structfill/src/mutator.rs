//! Mutators: single-setting changes folded into [`Settings`].
//!
//! Each `with_*` constructor returns a [`Mutator`] that changes exactly one
//! setting when applied. Pass them to [`fill`](crate::fill) or
//! [`Settings::build`] in the order they should take effect.

use std::fmt;

use crate::settings::TypeOverride;
use crate::{Complex, Settings};

/// One pending change to a [`Settings`] record.
#[derive(Debug)]
#[must_use = "mutators do nothing until passed to `fill` or `Settings::build`"]
pub struct Mutator(Change);

#[derive(Debug)]
enum Change {
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    Bool(bool),
    Complex(Complex),
    CustomType(TypeOverride),
    Verbose,
    FailOnUnrecognized,
    MaxDepth(usize),
}

impl Mutator {
    /// Applies the change to `settings`.
    pub fn apply(self, settings: &mut Settings) {
        match self.0 {
            Change::Int(value) => settings.int = value,
            Change::Uint(value) => settings.uint = value,
            Change::Float(value) => settings.float = value,
            Change::String(value) => settings.string = value,
            Change::Bool(value) => settings.boolean = value,
            Change::Complex(value) => settings.complex = value,
            Change::CustomType(entry) => settings.overrides.insert(entry),
            Change::Verbose => settings.verbose = true,
            Change::FailOnUnrecognized => settings.fail_on_unrecognized = true,
            Change::MaxDepth(value) => settings.max_depth = value,
        }
    }
}

/// Sets the default for boolean locations.
pub const fn with_bool(value: bool) -> Mutator {
    Mutator(Change::Bool(value))
}

/// Sets the default for string locations and string map keys.
pub fn with_string(value: impl Into<String>) -> Mutator {
    Mutator(Change::String(value.into()))
}

/// Sets the default for signed integer locations.
pub const fn with_int(value: i64) -> Mutator {
    Mutator(Change::Int(value))
}

/// Sets the default for unsigned integer locations.
pub const fn with_uint(value: u64) -> Mutator {
    Mutator(Change::Uint(value))
}

/// Sets the default for floating point locations.
pub const fn with_float(value: f64) -> Mutator {
    Mutator(Change::Float(value))
}

/// Sets the default for complex locations.
pub const fn with_complex(value: Complex) -> Mutator {
    Mutator(Change::Complex(value))
}

/// Registers `value` as the replacement for every location of type `T`.
///
/// Records and enums of type `T` are overwritten with a clone of `value`
/// and their fields are not visited. Registering the same type again
/// replaces the earlier value.
///
/// # Examples
///
/// ```
/// use structfill::{Populate, fill, with_custom_type};
///
/// #[derive(Debug, Clone, Default, PartialEq, Populate)]
/// struct Inner {
///     pub one: String,
/// }
///
/// #[derive(Debug, Default, Populate)]
/// struct Outer {
///     pub inner: Inner,
///     pub two: String,
/// }
///
/// let mut outer = Outer::default();
/// fill(&mut outer, [with_custom_type(Inner { one: "fixed".into() })])?;
/// assert_eq!(outer.inner.one, "fixed");
/// assert_eq!(outer.two, "string");
/// # Ok::<(), structfill::FillError>(())
/// ```
pub fn with_custom_type<T>(value: T) -> Mutator
where
    T: Clone + fmt::Debug + Send + Sync + 'static,
{
    Mutator(Change::CustomType(TypeOverride::new(value)))
}

/// Enables tracing of the settings and every visited location.
pub const fn with_verbose() -> Mutator {
    Mutator(Change::Verbose)
}

/// Makes unrecognized types abort the call with
/// [`FillError::UnsupportedType`](crate::FillError::UnsupportedType).
pub const fn with_fail_on_unrecognized() -> Mutator {
    Mutator(Change::FailOnUnrecognized)
}

/// Sets the depth beyond which absent optionals and empty containers are no
/// longer materialized.
pub const fn with_max_depth(value: usize) -> Mutator {
    Mutator(Change::MaxDepth(value))
}
