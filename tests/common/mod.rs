//! Common test utilities for CLI tests.
//!
//! `TestEnv` runs the binary in an isolated workspace with an isolated
//! HOME, so no user config leaks into a test.

pub mod env;

pub use env::*;
