//! Common utilities for the tinta renderer.
//!
//! This crate provides shared infrastructure used by all renderer components:
//! - **Warning System** - colored terminal output for degraded input

pub mod warning;
