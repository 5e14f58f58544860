//! Registry of per-type override values.
//!
//! Overrides are keyed by [`TypeId`], so only a value of the exact registered
//! type is ever substituted. Each entry keeps a type-erased clone source and
//! a `Debug` rendering for the settings dump.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;

trait CloneAny: Any + Send + Sync {
    fn clone_any(&self) -> Box<dyn Any>;
}

impl<T: Any + Clone + Send + Sync> CloneAny for T {
    fn clone_any(&self) -> Box<dyn Any> {
        Box::new(self.clone())
    }
}

/// A replacement value registered for one exact type.
pub struct TypeOverride {
    type_id: TypeId,
    type_name: &'static str,
    rendered: String,
    value: Box<dyn CloneAny>,
}

impl TypeOverride {
    /// Captures `value` as the override for its own type.
    pub fn new<T>(value: T) -> Self
    where
        T: Clone + fmt::Debug + Send + Sync + 'static,
    {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            rendered: format!("{value:?}"),
            value: Box::new(value),
        }
    }

    /// Fully qualified name of the overridden type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// `Debug` rendering of the override value.
    #[must_use]
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    fn instantiate<T: 'static>(&self) -> Option<T> {
        self.value
            .clone_any()
            .downcast::<T>()
            .ok()
            .map(|boxed| *boxed)
    }
}

impl fmt::Debug for TypeOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeOverride")
            .field("type_name", &self.type_name)
            .field("value", &self.rendered)
            .finish()
    }
}

#[derive(Default)]
pub(crate) struct OverrideRegistry {
    entries: HashMap<TypeId, TypeOverride>,
}

impl OverrideRegistry {
    /// Registers `entry`, replacing any earlier override for the same type.
    pub(crate) fn insert(&mut self, entry: TypeOverride) {
        self.entries.insert(entry.type_id, entry);
    }

    pub(crate) fn get<T: 'static>(&self) -> Option<T> {
        self.entries.get(&TypeId::of::<T>())?.instantiate::<T>()
    }

    pub(crate) fn contains<T: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &TypeOverride> {
        self.entries.values()
    }
}

impl fmt::Debug for OverrideRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sorted: Vec<_> = self.entries.values().collect();
        sorted.sort_by_key(|entry| entry.type_name);
        f.debug_map()
            .entries(sorted.iter().map(|entry| (entry.type_name, &entry.rendered)))
            .finish()
    }
}
