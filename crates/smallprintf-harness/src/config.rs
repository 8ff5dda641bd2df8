//! Harness configuration.
//!
//! The harness mode is read from `SMALLPRINTF_MODE`:
//! - `lenient` (default): run lenient and `both` cases through [`format`](smallprintf_core::format)
//! - `strict`: run strict and `both` cases through [`try_format`](smallprintf_core::try_format)
//! - `both`: run every case under each mode it declares
//!
//! `SMALLPRINTF_LOG` names a JSONL file for structured logs. Command-line
//! flags override both variables.

use std::path::PathBuf;

use smallprintf_core::Mode;

pub const ENV_MODE: &str = "SMALLPRINTF_MODE";
pub const ENV_LOG: &str = "SMALLPRINTF_LOG";

/// Which engine mode(s) a verification run exercises.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    #[default]
    Lenient,
    Strict,
    Both,
}

impl RunMode {
    /// Parse from string (case-insensitive). Unknown values fall back to
    /// `Lenient`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        if s.eq_ignore_ascii_case("both") || s.eq_ignore_ascii_case("all") {
            Self::Both
        } else {
            match Mode::from_str_loose(s) {
                Mode::Lenient => Self::Lenient,
                Mode::Strict => Self::Strict,
            }
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
            Self::Both => "lenient+strict",
        }
    }

    /// Engine modes to run, in order.
    #[must_use]
    pub const fn modes(self) -> &'static [Mode] {
        match self {
            Self::Lenient => &[Mode::Lenient],
            Self::Strict => &[Mode::Strict],
            Self::Both => &[Mode::Lenient, Mode::Strict],
        }
    }
}

/// Resolved harness settings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub run_mode: RunMode,
    pub log_path: Option<PathBuf>,
}

impl HarnessConfig {
    /// Read settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let run_mode = lookup(ENV_MODE)
            .map(|v| RunMode::from_str_loose(v.trim()))
            .unwrap_or_default();
        let log_path = lookup(ENV_LOG)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        Self { run_mode, log_path }
    }

    /// Apply command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, mode: Option<&str>, log: Option<PathBuf>) -> Self {
        if let Some(mode) = mode {
            self.run_mode = RunMode::from_str_loose(mode);
        }
        if log.is_some() {
            self.log_path = log;
        }
        self
    }
}
