//! # TJS Bench
//!
//! Benchmarking utilities for the TJS bindings.

pub mod documents;
pub mod timing;
