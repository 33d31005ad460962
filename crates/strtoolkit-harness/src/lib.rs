//! Exercising and conformance harness for strtoolkit.
//!
//! This crate provides:
//! - Fixture loading: (function, inputs, expected output) cases as JSON
//! - Execution: dispatch fixture cases onto the core string primitives
//! - Verification: compare formatted actual output against expectations
//! - Report generation: human-readable markdown + machine-readable JSON
//!
//! The core library itself performs no I/O; everything printable lives here.

#![forbid(unsafe_code)]

pub mod diff;
pub mod exec;
pub mod fixtures;
pub mod report;
pub mod runner;

pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::{TestRunner, VerificationResult};
