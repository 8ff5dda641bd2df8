//! Conformance testing harness for smallprintf.
//!
//! This crate provides:
//! - Fixtures: JSON reference cases (format, typed arguments, expected output)
//! - Runner: render each case through the engine with an independent sink count
//! - Diff and report generation: byte-escaped diffs, markdown + JSON reports
//! - Structured logging: JSONL records for every verified case
//! - Configuration: `SMALLPRINTF_MODE` / `SMALLPRINTF_LOG` with CLI overrides

#![forbid(unsafe_code)]

pub mod config;
pub mod diff;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use config::{HarnessConfig, RunMode};
pub use error::HarnessError;
pub use fixtures::{FixtureArg, FixtureCase, FixtureSet, WordWidth};
pub use report::ConformanceReport;
pub use runner::{Rendered, TestRunner, render_case};
pub use verify::{VerificationResult, VerificationSummary};
