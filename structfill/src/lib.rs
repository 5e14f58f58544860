//! Deterministic, recursive population of test fixtures.
//!
//! `structfill` fills every settable location of a record with a predictable
//! value: scalars take a configured default, absent optionals are allocated,
//! empty sequences and maps gain one representative element, and records of
//! a registered type are replaced wholesale. The traversal is driven by the
//! [`Populate`] trait, which `#[derive(Populate)]` implements for your structs
//! and enums.
//!
//! ```
//! use structfill::{Populate, fill, with_int, with_string};
//!
//! #[derive(Debug, Default, PartialEq, Populate)]
//! struct Inner {
//!     pub c: String,
//! }
//!
//! #[derive(Debug, Default, PartialEq, Populate)]
//! struct Outer {
//!     pub a: i64,
//!     pub b: Inner,
//!     pub d: Vec<bool>,
//! }
//!
//! let mut outer = Outer::default();
//! fill(&mut outer, [with_int(7), with_string("x")])?;
//! assert_eq!(
//!     outer,
//!     Outer {
//!         a: 7,
//!         b: Inner { c: "x".into() },
//!         d: vec![true],
//!     }
//! );
//! # Ok::<(), structfill::FillError>(())
//! ```

extern crate self as structfill;

pub use structfill_macros::{MapKey, Populate};

mod complex;
mod engine;
mod error;
mod mutator;
mod populate;
pub mod settings;
mod shape;

pub use complex::Complex;
pub use engine::{FieldPath, Filler};
pub use error::{FillError, FillResult};
pub use mutator::{
    Mutator, with_bool, with_complex, with_custom_type, with_fail_on_unrecognized, with_float,
    with_int, with_max_depth, with_string, with_uint, with_verbose,
};
pub use populate::{DynValue, Dynamic, MapKey, Populate, Record};
pub use settings::Settings;
pub use shape::Shape;

/// Populates `target` using the built-in defaults refined by `mutators`.
///
/// # Errors
///
/// Returns [`FillError::UnsupportedType`] when an unrecognized type is met
/// with [`with_fail_on_unrecognized`] in effect, and
/// [`FillError::OutOfRange`] when a scalar default does not fit a narrow
/// field type. Locations written before the failure keep their new values.
pub fn fill<T, I>(target: &mut T, mutators: I) -> FillResult<()>
where
    T: Record,
    I: IntoIterator<Item = Mutator>,
{
    let settings = Settings::build(mutators);
    fill_with(target, &settings)
}

/// Populates `target` with prebuilt `settings`.
///
/// # Errors
///
/// Fails for the same reasons as [`fill`].
pub fn fill_with<T>(target: &mut T, settings: &Settings) -> FillResult<()>
where
    T: Record + ?Sized,
{
    run(target, settings)
}

/// Builds a `T::default()` and populates it.
///
/// # Errors
///
/// Fails for the same reasons as [`fill`].
pub fn filled<T, I>(mutators: I) -> FillResult<T>
where
    T: Record + Default,
    I: IntoIterator<Item = Mutator>,
{
    let mut target = T::default();
    fill(&mut target, mutators)?;
    Ok(target)
}

/// Populates a type-erased target after checking it at runtime.
///
/// This is the counterpart of [`fill`] for callers that only hold a
/// `dyn Populate`. The target must be present and must be a record.
///
/// # Errors
///
/// Returns [`FillError::InvalidArgument`] without touching anything when the
/// target is `None` or is not a record. Otherwise fails like [`fill`].
pub fn fill_dyn<I>(target: Option<&mut dyn Populate>, mutators: I) -> FillResult<()>
where
    I: IntoIterator<Item = Mutator>,
{
    let Some(target) = target else {
        return Err(FillError::invalid_argument(
            "target must be a non-null reference",
        ));
    };
    let shape = target.shape();
    if shape != Shape::Record {
        return Err(FillError::invalid_argument(format!(
            "target must reference a record, found {shape} `{}`",
            target.type_name()
        )));
    }
    let settings = Settings::build(mutators);
    run(target, &settings)
}

fn run<T>(target: &mut T, settings: &Settings) -> FillResult<()>
where
    T: Populate + ?Sized,
{
    if settings.verbose() {
        tracing::info!(target: "structfill", settings = %settings.describe(), "populating with settings");
    }
    Filler::new(settings).visit(target)
}
