//! Test helpers shared across crates in the structfill workspace.
//!
//! This crate currently provides capture of `tracing` output.

pub mod trace;
