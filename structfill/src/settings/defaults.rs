//! Built-in scalar defaults applied before any mutator runs.

use crate::Complex;

/// Default written to signed integer locations.
pub const INT: i64 = 1;
/// Default written to unsigned integer locations.
pub const UINT: u64 = 2;
/// Default written to floating point locations.
pub const FLOAT: f64 = 3.0;
/// Default written to string locations.
pub const STRING: &str = "string";
/// Default written to boolean locations.
pub const BOOL: bool = true;
/// Default written to complex locations.
pub const COMPLEX: Complex = Complex::new(4.0, 5.0);
/// Nesting depth beyond which absent containers are no longer materialized.
pub const MAX_DEPTH: usize = 32;
