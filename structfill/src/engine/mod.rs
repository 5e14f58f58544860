//! The traversal engine.
//!
//! A [`Filler`] walks a target value through its [`Populate`]
//! implementations. It carries the settings, the current location and the
//! nesting depth, and it owns every policy decision that is independent of a
//! value's shape: tracing, override lookup, when containers may be
//! materialized, narrowing of scalar defaults and the unrecognized-type
//! policy.
//!
//! A value allocated by the engine is visited with its type recorded on a
//! stack. Below it, an absent optional or empty container of the same type is
//! left alone, so every self-referential type is expanded once per path.

mod path;

use std::any::{TypeId, type_name};
use std::fmt;

pub use path::FieldPath;
use path::Segment;

use crate::{FillError, FillResult, Populate, Settings};

/// Recursive visitor handed to every [`Populate::populate`] call.
#[derive(Debug)]
pub struct Filler<'s> {
    settings: &'s Settings,
    path: FieldPath,
    depth: usize,
    materialized: Vec<TypeId>,
}

impl<'s> Filler<'s> {
    /// Creates a filler positioned at the root of a target.
    #[must_use]
    pub const fn new(settings: &'s Settings) -> Self {
        Self {
            settings,
            path: FieldPath::new(),
            depth: 0,
            materialized: Vec::new(),
        }
    }

    /// Settings in effect for this call.
    #[must_use]
    pub const fn settings(&self) -> &'s Settings {
        self.settings
    }

    /// Location currently being visited.
    #[must_use]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Nesting depth of the current location; the root is depth 0.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Populates `value` at the current location.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised anywhere below `value`.
    pub fn visit<T>(&mut self, value: &mut T) -> FillResult<()>
    where
        T: Populate + ?Sized,
    {
        if self.settings.verbose() {
            tracing::info!(
                target: "structfill",
                path = %self.path,
                shape = %value.shape(),
                type_name = value.type_name(),
                "populating"
            );
        }
        value.populate(self)
    }

    /// Populates the named field of a record or enum variant.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised while populating the field.
    pub fn field<T>(&mut self, name: &'static str, value: &mut T) -> FillResult<()>
    where
        T: Populate + ?Sized,
    {
        self.descend(Segment::Field(name), |filler| filler.visit(value))
    }

    /// Populates the element at `index` of a sequence.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised while populating the element.
    pub fn element<T>(&mut self, index: usize, value: &mut T) -> FillResult<()>
    where
        T: Populate + ?Sized,
    {
        self.descend(Segment::Index(index), |filler| filler.visit(value))
    }

    /// Populates the value stored under `key` in a map.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised while populating the value.
    pub fn entry<K, T>(&mut self, key: &K, value: &mut T) -> FillResult<()>
    where
        K: fmt::Debug + ?Sized,
        T: Populate + ?Sized,
    {
        self.descend(Segment::Key(format!("{key:?}")), |filler| {
            filler.visit(value)
        })
    }

    /// Applies the unrecognized-type policy to a field marked opaque.
    ///
    /// # Errors
    ///
    /// Returns [`FillError::UnsupportedType`] when the fail-on-unrecognized
    /// flag is set.
    pub fn opaque_field<T: ?Sized>(&mut self, name: &'static str) -> FillResult<()> {
        self.descend(Segment::Field(name), |filler| filler.unrecognized::<T>())
    }

    fn descend<F>(&mut self, segment: Segment, visit: F) -> FillResult<()>
    where
        F: FnOnce(&mut Self) -> FillResult<()>,
    {
        self.path.push(segment);
        self.depth += 1;
        let outcome = visit(self);
        self.depth -= 1;
        self.path.pop();
        outcome
    }

    /// Whether an absent optional or empty container of `T` at the current
    /// location may be materialized.
    ///
    /// Refused once the depth limit is reached, and while a value of type `T`
    /// allocated by this call is still being visited further up the path.
    #[must_use]
    pub fn may_materialize<T: ?Sized + 'static>(&self) -> bool {
        let max_depth = self.settings.max_depth();
        if self.depth >= max_depth {
            if self.settings.verbose() {
                tracing::info!(
                    target: "structfill",
                    path = %self.path,
                    limit = max_depth,
                    "depth limit reached; leaving container empty"
                );
            }
            return false;
        }
        if self.materialized.contains(&TypeId::of::<T>()) {
            if self.settings.verbose() {
                tracing::info!(
                    target: "structfill",
                    path = %self.path,
                    type_name = type_name::<T>(),
                    "type already materialized on this path; leaving container empty"
                );
            }
            return false;
        }
        true
    }

    /// Runs `visit` over freshly allocated values of type `T`.
    ///
    /// While `visit` runs, [`may_materialize`](Self::may_materialize) refuses
    /// further values of `T`.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `visit`.
    pub fn visit_materialized<T, F>(&mut self, visit: F) -> FillResult<()>
    where
        T: ?Sized + 'static,
        F: FnOnce(&mut Self) -> FillResult<()>,
    {
        self.materialized.push(TypeId::of::<T>());
        let outcome = visit(self);
        self.materialized.pop();
        outcome
    }

    /// Returns a clone of the override registered for `T`, if any.
    #[must_use]
    pub fn take_override<T: 'static>(&self) -> Option<T> {
        let value = self.settings.override_for::<T>()?;
        if self.settings.verbose() {
            tracing::info!(
                target: "structfill",
                path = %self.path,
                type_name = type_name::<T>(),
                "replacing value with supplied custom type"
            );
        }
        Some(value)
    }

    /// Applies the unrecognized-type policy to the current location.
    ///
    /// # Errors
    ///
    /// Returns [`FillError::UnsupportedType`] when the fail-on-unrecognized
    /// flag is set; otherwise the location is left untouched.
    pub fn unrecognized<T: ?Sized>(&self) -> FillResult<()> {
        let name = type_name::<T>();
        if self.settings.verbose() {
            tracing::info!(
                target: "structfill",
                path = %self.path,
                type_name = name,
                "unhandled type encountered"
            );
        }
        if self.settings.fail_on_unrecognized() {
            return Err(FillError::unsupported_type(name, &self.path));
        }
        Ok(())
    }

    /// Converts a configured default into a narrower scalar type.
    ///
    /// # Errors
    ///
    /// Returns [`FillError::OutOfRange`] when `value` does not fit `T`.
    pub fn narrow<T, V>(&self, value: V) -> FillResult<T>
    where
        T: TryFrom<V>,
        V: Copy + fmt::Display,
    {
        T::try_from(value)
            .map_err(|_| FillError::out_of_range(type_name::<T>(), &self.path, value))
    }
}
