//! Diagnostics reported by the strict entry points.
//!
//! The lenient [`format`](crate::format) path never produces these; it
//! degrades to printing stray characters or nothing.

use thiserror::Error;

use crate::arg::ArgKind;
use crate::scan::Conversion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("argument {index}: {expected} argument expected, none left")]
    MissingArgument { index: usize, expected: ArgKind },
    #[error("argument {index}: expected {expected}, found {found}")]
    ArgumentMismatch {
        index: usize,
        expected: ArgKind,
        found: ArgKind,
    },
    #[error("argument {index}: null string")]
    NullString { index: usize },
    #[error("{conversion}: width {width} exceeds capacity {capacity}")]
    WidthOutOfRange {
        conversion: Conversion,
        width: u8,
        capacity: usize,
    },
    #[error("unknown conversion {conversion}")]
    UnknownConversion { conversion: Conversion },
    #[error("format ends inside a directive")]
    TruncatedDirective,
    #[error("{supplied} arguments supplied, {consumed} consumed")]
    UnusedArguments { supplied: usize, consumed: usize },
}
