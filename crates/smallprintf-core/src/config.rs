//! Rendering mode.
//!
//! - `lenient` (default): the embedded fast path. Never fails; malformed
//!   directives degrade to stray characters or to nothing.
//! - `strict`: validate the whole call first and report a
//!   [`FormatError`](crate::FormatError) without touching the sink.
//!
//! Host tooling reads the mode from `SMALLPRINTF_MODE`; the engine itself
//! never looks at the environment.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Lenient,
    Strict,
}

impl Mode {
    /// Parse from string (case-insensitive). Unknown values fall back to
    /// `Lenient`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        if s.eq_ignore_ascii_case("strict")
            || s.eq_ignore_ascii_case("checked")
            || s.eq_ignore_ascii_case("validate")
        {
            Self::Strict
        } else {
            Self::Lenient
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }

    /// True if argument and width problems are reported instead of absorbed.
    #[must_use]
    pub const fn validates(self) -> bool {
        matches!(self, Self::Strict)
    }
}
