//! Associative containers.
//!
//! A map always gains exactly one representative entry: the key comes from
//! [`MapKey`] and the value is a populated `V::default()`. Existing entries
//! are kept and not visited; an existing entry under the representative key
//! is replaced.

use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::path::PathBuf;
use std::time::Duration;

use super::Populate;
use crate::{FillResult, Filler, Shape};

/// Types usable as the key of a populated map.
///
/// Scalar keys take the configured default for their kind, and the std key
/// types without a scalar default use their zero value. Your own key types
/// need an implementation before they can key a map inside a
/// `#[derive(Populate)]` type. `#[derive(MapKey)]` uses the zero value:
///
/// ```
/// use std::collections::BTreeMap;
///
/// use structfill::{MapKey, Populate, filled};
///
/// #[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, MapKey)]
/// struct Region(String);
///
/// #[derive(Debug, Default, Populate)]
/// struct Quotas {
///     pub by_region: BTreeMap<Region, u32>,
/// }
///
/// let quotas: Quotas = filled([])?;
/// assert_eq!(quotas.by_region.get(&Region::default()), Some(&2));
/// # Ok::<(), structfill::FillError>(())
/// ```
///
/// Implement the trait by hand to pick another key:
///
/// ```
/// use structfill::{FillResult, Filler, MapKey};
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct TenantId(u64);
///
/// impl MapKey for TenantId {
///     fn representative_key(filler: &Filler<'_>) -> FillResult<Self> {
///         Ok(Self(filler.settings().uint()))
///     }
/// }
/// ```
pub trait MapKey: Sized {
    /// Builds the single key inserted into a populated map.
    ///
    /// # Errors
    ///
    /// Returns [`FillError::OutOfRange`](crate::FillError::OutOfRange) when a
    /// scalar default does not fit the key type.
    fn representative_key(filler: &Filler<'_>) -> FillResult<Self>;
}

macro_rules! zero_keys {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl MapKey for $ty {
                fn representative_key(_filler: &Filler<'_>) -> FillResult<Self> {
                    Ok(Self::default())
                }
            }
        )+
    };
}

zero_keys!(char, (), PathBuf, OsString, Duration);

impl<T> MapKey for Option<T> {
    fn representative_key(_filler: &Filler<'_>) -> FillResult<Self> {
        Ok(None)
    }
}

fn representative_entry<K, V>(filler: &mut Filler<'_>) -> FillResult<Option<(K, V)>>
where
    K: MapKey + fmt::Debug,
    V: Populate + Default + 'static,
{
    if !filler.may_materialize::<V>() {
        return Ok(None);
    }
    let key = K::representative_key(filler)?;
    let mut value = V::default();
    filler.visit_materialized::<V, _>(|nested| nested.entry(&key, &mut value))?;
    Ok(Some((key, value)))
}

impl<K, V, S> Populate for HashMap<K, V, S>
where
    K: MapKey + Eq + Hash + fmt::Debug,
    V: Populate + Default + 'static,
    S: BuildHasher,
{
    fn shape(&self) -> Shape {
        Shape::Map
    }

    fn populate(&mut self, filler: &mut Filler<'_>) -> FillResult<()> {
        if let Some((key, value)) = representative_entry(filler)? {
            self.insert(key, value);
        }
        Ok(())
    }
}

impl<K, V> Populate for BTreeMap<K, V>
where
    K: MapKey + Ord + fmt::Debug,
    V: Populate + Default + 'static,
{
    fn shape(&self) -> Shape {
        Shape::Map
    }

    fn populate(&mut self, filler: &mut Filler<'_>) -> FillResult<()> {
        if let Some((key, value)) = representative_entry(filler)? {
            self.insert(key, value);
        }
        Ok(())
    }
}
