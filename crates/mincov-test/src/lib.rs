//! Shared test fixtures for mincov crates.
//!
//! This crate provides plain data types and pure functions for testing.
//! It does NOT depend on `mincov-core` to avoid circular dependencies;
//! callers turn an [`Instance`] into a matrix themselves.
//!
//! - [`instance`] - set cover instances, hand-made scenarios and seeded random generation
//! - [`brute`] - exhaustive optimum for small instances
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! mincov-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use mincov_test::{brute_force_optimum, random_instance};
//! ```

pub mod brute;
pub mod instance;

pub use brute::{brute_force_optimum, brute_force_solution};
pub use instance::{random_instance, Instance};
