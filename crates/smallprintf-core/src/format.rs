//! Entry points: walk the scanned pieces, pull arguments, delegate to the
//! converters.

use core::slice;

use crate::arg::{Arg, ArgKind, c_str};
use crate::config::Mode;
use crate::convert::{emit_decimal, emit_hex};
use crate::error::FormatError;
use crate::scan::{Conversion, Piece, Pieces, Spec};
use crate::sink::Sink;
use crate::word::Word;

/// Render `fmt` with `args` into `sink`. Never fails.
///
/// Returns the number of characters delivered to the sink.
///
/// Malformed input degrades instead of failing:
///
/// - an unknown specifier is echoed (`"%q"` prints `q`), consuming nothing;
/// - a format ending inside a directive echoes the terminating NUL as its
///   stray specifier (`"50%"` prints `5`, `0`, `\0`) and stops;
/// - a directive whose argument is missing, of the wrong kind, or a null
///   string prints nothing (the mismatched argument is still consumed, so
///   later directives keep their pairing);
/// - surplus arguments are ignored.
///
/// `%d` of the most negative value prints its true magnitude
/// (`i16::MIN` renders as `-32768`).
pub fn format<W: Word, S: Sink + ?Sized>(sink: &mut S, fmt: &[u8], args: &[Arg<'_, W>]) -> usize {
    let mut args = args.iter();
    let mut written = 0;
    for piece in Pieces::new(fmt) {
        written += match piece {
            Piece::Literal(bytes) => emit_bytes(sink, bytes),
            Piece::Directive(spec) => emit_directive(sink, &spec, &mut args),
            Piece::Truncated => {
                sink.put(0);
                1
            }
        };
    }
    written
}

/// Validate, then render. Nothing reaches the sink when validation fails.
pub fn try_format<W: Word, S: Sink + ?Sized>(
    sink: &mut S,
    fmt: &[u8],
    args: &[Arg<'_, W>],
) -> Result<usize, FormatError> {
    validate(fmt, args)?;
    Ok(format(sink, fmt, args))
}

/// Render under the given [`Mode`].
pub fn render<W: Word, S: Sink + ?Sized>(
    sink: &mut S,
    fmt: &[u8],
    args: &[Arg<'_, W>],
    mode: Mode,
) -> Result<usize, FormatError> {
    match mode {
        Mode::Lenient => Ok(format(sink, fmt, args)),
        Mode::Strict => try_format(sink, fmt, args),
    }
}

/// Check a format string against its arguments without rendering.
///
/// Reports the first problem found, scanning left to right: stray
/// specifiers, truncated directives, widths above the word's digit capacity,
/// missing or mismatched arguments, null strings, then surplus arguments.
pub fn validate<W: Word>(fmt: &[u8], args: &[Arg<'_, W>]) -> Result<(), FormatError> {
    let mut consumed = 0;
    for piece in Pieces::new(fmt) {
        let spec = match piece {
            Piece::Literal(_) => continue,
            Piece::Truncated => return Err(FormatError::TruncatedDirective),
            Piece::Directive(spec) => spec,
        };

        let expected = match spec.conversion {
            Conversion::Hex => {
                check_width(&spec, W::HEX_CAPACITY)?;
                ArgKind::Unsigned
            }
            Conversion::Unsigned => {
                check_width(&spec, W::DEC_CAPACITY)?;
                ArgKind::Unsigned
            }
            Conversion::Signed => {
                check_width(&spec, W::DEC_CAPACITY)?;
                ArgKind::Signed
            }
            Conversion::Str => ArgKind::Str,
            Conversion::Percent => continue,
            Conversion::Stray(_) => {
                return Err(FormatError::UnknownConversion {
                    conversion: spec.conversion,
                });
            }
        };

        let index = consumed;
        let arg = args
            .get(index)
            .ok_or(FormatError::MissingArgument { index, expected })?;
        consumed += 1;

        let found = arg.kind();
        if found != expected {
            return Err(FormatError::ArgumentMismatch {
                index,
                expected,
                found,
            });
        }
        if matches!(arg, Arg::Str(None)) {
            return Err(FormatError::NullString { index });
        }
    }

    if consumed < args.len() {
        return Err(FormatError::UnusedArguments {
            supplied: args.len(),
            consumed,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn check_width(spec: &Spec, capacity: usize) -> Result<(), FormatError> {
    if usize::from(spec.width) > capacity {
        return Err(FormatError::WidthOutOfRange {
            conversion: spec.conversion,
            width: spec.width,
            capacity,
        });
    }
    Ok(())
}

fn emit_directive<W: Word, S: Sink + ?Sized>(
    sink: &mut S,
    spec: &Spec,
    args: &mut slice::Iter<'_, Arg<'_, W>>,
) -> usize {
    match spec.conversion {
        Conversion::Hex => {
            let digits = match usize::from(spec.width) {
                0 => W::HEX_CAPACITY,
                w => w.min(W::HEX_CAPACITY),
            };
            match args.next() {
                Some(&Arg::Unsigned(value)) => emit_hex(sink, value, digits),
                _ => 0,
            }
        }
        Conversion::Signed => match args.next() {
            Some(&Arg::Signed(value)) => {
                let (negative, magnitude) = W::sign_magnitude(value);
                let mut written = 0;
                if negative {
                    sink.put(b'-');
                    written += 1;
                }
                written + emit_decimal(sink, magnitude, usize::from(spec.width))
            }
            _ => 0,
        },
        Conversion::Unsigned => match args.next() {
            Some(&Arg::Unsigned(value)) => emit_decimal(sink, value, usize::from(spec.width)),
            _ => 0,
        },
        Conversion::Str => match args.next() {
            Some(&Arg::Str(Some(s))) => emit_padded(sink, c_str(s), spec),
            _ => 0,
        },
        Conversion::Percent => {
            sink.put(b'%');
            1
        }
        Conversion::Stray(byte) => {
            sink.put(byte);
            1
        }
    }
}

fn emit_padded<S: Sink + ?Sized>(sink: &mut S, s: &[u8], spec: &Spec) -> usize {
    let pad = usize::from(spec.width).saturating_sub(s.len());
    if spec.left_justify {
        emit_bytes(sink, s) + emit_spaces(sink, pad)
    } else {
        emit_spaces(sink, pad) + emit_bytes(sink, s)
    }
}

fn emit_bytes<S: Sink + ?Sized>(sink: &mut S, bytes: &[u8]) -> usize {
    for &b in bytes {
        sink.put(b);
    }
    bytes.len()
}

fn emit_spaces<S: Sink + ?Sized>(sink: &mut S, count: usize) -> usize {
    for _ in 0..count {
        sink.put(b' ');
    }
    count
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
