//! The [`Populate`] trait and its implementations for std shapes.
//!
//! Records and enums get their implementation from `#[derive(Populate)]`;
//! everything else a record may contain is covered here, grouped by shape.

mod dynamic;
mod map;
mod pointer;
mod scalar;
mod sequence;
mod unrecognized;

pub use dynamic::{DynValue, Dynamic};
pub use map::MapKey;

use crate::{FillResult, Filler, Shape};

/// A value the traversal engine can fill in place.
///
/// Implementations report their [`Shape`] and apply the fill rule for that
/// shape, recursing through the [`Filler`] so that paths, tracing and the
/// depth limit stay consistent.
///
/// # Examples
///
/// ```
/// use structfill::{FillResult, Filler, Populate, Shape};
///
/// /// Counts visits instead of taking a default.
/// #[derive(Default)]
/// struct Visits(u32);
///
/// impl Populate for Visits {
///     fn shape(&self) -> Shape {
///         Shape::Scalar
///     }
///
///     fn populate(&mut self, _filler: &mut Filler<'_>) -> FillResult<()> {
///         self.0 += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Populate {
    /// Structural classification of this value.
    fn shape(&self) -> Shape;

    /// Fills `self` according to the rule for its shape.
    ///
    /// # Errors
    ///
    /// Returns the first [`FillError`](crate::FillError) raised by this value
    /// or anything nested inside it.
    fn populate(&mut self, filler: &mut Filler<'_>) -> FillResult<()>;

    /// Name of the concrete type, used in trace output.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Marker for record types: structs deriving [`Populate`].
///
/// Only records are accepted as top-level targets by [`fill`](crate::fill).
pub trait Record: Populate {}
