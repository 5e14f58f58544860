//! The settings record consulted by every populate call.
//!
//! [`Settings`] starts from the compiled-in [`defaults`] and is refined by an
//! ordered list of [`Mutator`]s. Later mutators win: scalar defaults and flags
//! are simply overwritten, and registering a second override for the same
//! type replaces the first. Once built, the settings are only read.

pub mod defaults;
mod describe;
mod overrides;

pub use overrides::TypeOverride;

pub(crate) use overrides::OverrideRegistry;

use crate::{Complex, Mutator};

/// Scalar defaults, type overrides and behaviour flags for one populate call.
#[derive(Debug)]
pub struct Settings {
    pub(crate) int: i64,
    pub(crate) uint: u64,
    pub(crate) float: f64,
    pub(crate) string: String,
    pub(crate) boolean: bool,
    pub(crate) complex: Complex,
    pub(crate) overrides: OverrideRegistry,
    pub(crate) verbose: bool,
    pub(crate) fail_on_unrecognized: bool,
    pub(crate) max_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            int: defaults::INT,
            uint: defaults::UINT,
            float: defaults::FLOAT,
            string: defaults::STRING.to_owned(),
            boolean: defaults::BOOL,
            complex: defaults::COMPLEX,
            overrides: OverrideRegistry::default(),
            verbose: false,
            fail_on_unrecognized: false,
            max_depth: defaults::MAX_DEPTH,
        }
    }
}

impl Settings {
    /// Folds `mutators` over the built-in defaults in iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use structfill::{Settings, with_int, with_string};
    ///
    /// let settings = Settings::build([with_int(7), with_string("a"), with_int(9)]);
    /// assert_eq!(settings.int(), 9);
    /// assert_eq!(settings.string(), "a");
    /// assert_eq!(settings.uint(), 2);
    /// ```
    #[must_use]
    pub fn build<I>(mutators: I) -> Self
    where
        I: IntoIterator<Item = Mutator>,
    {
        mutators
            .into_iter()
            .fold(Self::default(), |mut settings, mutator| {
                mutator.apply(&mut settings);
                settings
            })
    }

    /// Default for signed integer locations.
    #[must_use]
    pub const fn int(&self) -> i64 {
        self.int
    }

    /// Default for unsigned integer locations.
    #[must_use]
    pub const fn uint(&self) -> u64 {
        self.uint
    }

    /// Default for floating point locations.
    #[must_use]
    pub const fn float(&self) -> f64 {
        self.float
    }

    /// Default for string locations.
    #[must_use]
    pub fn string(&self) -> &str {
        &self.string
    }

    /// Default for boolean locations.
    #[must_use]
    pub const fn boolean(&self) -> bool {
        self.boolean
    }

    /// Default for complex locations.
    #[must_use]
    pub const fn complex(&self) -> Complex {
        self.complex
    }

    /// Whether visited locations are traced.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Whether an unrecognized type aborts the call.
    #[must_use]
    pub const fn fail_on_unrecognized(&self) -> bool {
        self.fail_on_unrecognized
    }

    /// Depth beyond which absent containers are left absent.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns a fresh clone of the override registered for `T`, if any.
    #[must_use]
    pub fn override_for<T: 'static>(&self) -> Option<T> {
        self.overrides.get::<T>()
    }

    /// Whether an override is registered for exactly `T`.
    #[must_use]
    pub fn has_override<T: 'static>(&self) -> bool {
        self.overrides.contains::<T>()
    }

    /// Number of registered type overrides.
    #[must_use]
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

#[cfg(test)]
mod tests;
