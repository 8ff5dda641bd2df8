//! # smallprintf-core
//!
//! Lightweight printf for microcontrollers.
//!
//! The engine renders a format string and a typed argument list into 8-bit
//! characters pushed one at a time into a caller-supplied [`Sink`]: a UART
//! transmit routine, a character LCD driver, or a closure in tests. Nothing is
//! allocated and nothing outlives the call; all scratch state lives on the
//! stack and is sized by the [`Word`] width at compile time.
//!
//! Supported conversions:
//!
//! | Syntax | Meaning |
//! |---|---|
//! | `%%` | literal `%` |
//! | `%s`, `%Ns`, `%-Ns` | string, right-justified in `N` columns (left with `-`) |
//! | `%x`, `%Nx` | uppercase hex, exactly `N` digits (default and maximum [`Word::HEX_CAPACITY`]) |
//! | `%d`, `%Nd` | signed decimal, at least `N` digits |
//! | `%u`, `%Nu` | unsigned decimal, at least `N` digits |
//!
//! ```
//! use smallprintf_core::smallprintf;
//!
//! let mut out = Vec::new();
//! let n = smallprintf!(|b: u8| out.push(b), "T=%d.%1u C [%4x] %-6s|", -3i16, 5u16, 0xBEEFu16, "ok");
//! assert_eq!(out, b"T=-3.5 C [BEEF] ok    |");
//! assert_eq!(n, out.len());
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod arg;
pub mod config;
pub mod convert;
pub mod error;
pub mod format;
pub mod scan;
pub mod sink;
pub mod word;

pub use arg::{Arg, ArgKind};
pub use config::Mode;
pub use convert::{emit_decimal, emit_hex};
pub use error::FormatError;
pub use format::{format, render, try_format, validate};
pub use scan::{Conversion, Piece, Pieces, Spec};
pub use sink::{Sink, StackSink};
pub use word::{DefaultWord, Word};

/// Render a format string with the default 16-bit word into a sink.
///
/// This is the analogue of wrapping the engine per peripheral, e.g.
/// `uart_printf!(...)` forwarding to `smallprintf!(uart_send_byte, ...)`.
/// The sink expression may be a closure or any `Sink` value; it is borrowed
/// mutably for the duration of the call. Returns the number of characters
/// emitted.
///
/// Each argument goes through `Arg::from`, so integers must carry their
/// type: write `-5i16` and `7u16`, or pass typed variables. A bare literal
/// such as `7` has no single `From` impl to resolve to and will not compile.
///
/// ```
/// use smallprintf_core::smallprintf;
///
/// let mut out = Vec::new();
/// let n = smallprintf!(|b: u8| out.push(b), "%d %3u", -5i16, 7u16);
/// assert_eq!(out, b"-5 007");
/// assert_eq!(n, 6);
///
/// let level: u16 = 42;
/// out.clear();
/// smallprintf!(|b: u8| out.push(b), "lvl=%u", level);
/// assert_eq!(out, b"lvl=42");
/// ```
///
/// ```compile_fail
/// use smallprintf_core::smallprintf;
///
/// let mut out = Vec::new();
/// smallprintf!(|b: u8| out.push(b), "%3u", 7);
/// ```
#[macro_export]
macro_rules! smallprintf {
    ($sink:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        let args: &[$crate::Arg<'_, $crate::DefaultWord>] = &[$($crate::Arg::from($arg)),*];
        $crate::format(&mut $sink, ::core::convert::AsRef::<[u8]>::as_ref($fmt), args)
    }};
}
