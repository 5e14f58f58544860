//! Type-erased slots, the counterpart of an interface-typed field.

use std::any::Any;
use std::fmt;

use super::Populate;
use crate::{FillResult, Filler, Shape};

/// Object-safe view of a populatable value that can be downcast again.
pub trait DynValue: Populate + Any + fmt::Debug {
    /// Upcasts to [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Upcasts to [`Any`] for mutable downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T> DynValue for T
where
    T: Populate + Any + fmt::Debug,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A slot holding a value whose concrete type is only known at runtime.
///
/// An empty slot is left empty by the engine, since there is no way to tell
/// which type it should hold. A filled slot has its held value populated in
/// place.
///
/// # Examples
///
/// ```
/// use structfill::{Dynamic, Populate, fill};
///
/// #[derive(Debug, Default, Populate)]
/// struct Holder {
///     pub empty: Dynamic,
///     pub held: Dynamic,
/// }
///
/// let mut holder = Holder {
///     empty: Dynamic::empty(),
///     held: Dynamic::new(0_i64),
/// };
/// fill(&mut holder, [])?;
/// assert!(holder.empty.is_empty());
/// assert_eq!(holder.held.downcast_ref::<i64>(), Some(&1));
/// # Ok::<(), structfill::FillError>(())
/// ```
#[derive(Debug, Default)]
pub struct Dynamic(Option<Box<dyn DynValue>>);

impl Dynamic {
    /// Creates an empty slot.
    #[must_use]
    pub const fn empty() -> Self {
        Self(None)
    }

    /// Creates a slot holding `value`.
    #[must_use]
    pub fn new<T: DynValue>(value: T) -> Self {
        Self(Some(Box::new(value)))
    }

    /// Whether the slot holds no value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Replaces the held value.
    pub fn set<T: DynValue>(&mut self, value: T) {
        self.0 = Some(Box::new(value));
    }

    /// Removes and returns the held value.
    pub fn take(&mut self) -> Option<Box<dyn DynValue>> {
        self.0.take()
    }

    /// Borrows the held value as `T` when that is its concrete type.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_deref()?.as_any().downcast_ref::<T>()
    }

    /// Mutably borrows the held value as `T` when that is its concrete type.
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.0.as_deref_mut()?.as_any_mut().downcast_mut::<T>()
    }
}

impl Populate for Dynamic {
    fn shape(&self) -> Shape {
        Shape::Dynamic
    }

    fn populate(&mut self, filler: &mut Filler<'_>) -> FillResult<()> {
        match self.0.as_deref_mut() {
            Some(held) => filler.visit(held),
            None => {
                if filler.settings().verbose() {
                    tracing::info!(
                        target: "structfill",
                        path = %filler.path(),
                        "empty dynamic slot left untouched"
                    );
                }
                Ok(())
            }
        }
    }
}
