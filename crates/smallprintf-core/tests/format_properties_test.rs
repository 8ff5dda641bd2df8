//! Integration test: converter properties over the whole 16-bit range.
//!
//! Every u16 value is checked against the decimal and hex contracts, and the
//! scanner's returned count is cross-checked against an independent count of
//! sink invocations.
//!
//! Run: cargo test -p smallprintf-core --test format_properties_test

use smallprintf_core::{Arg, StackSink, Word, emit_decimal, emit_hex, format, smallprintf};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn collect(f: impl FnOnce(&mut dyn FnMut(u8)) -> usize) -> (Vec<u8>, usize, usize) {
    let mut out = Vec::new();
    let mut calls = 0usize;
    let n = {
        let mut push = |b: u8| {
            out.push(b);
            calls += 1;
        };
        f(&mut push)
    };
    (out, n, calls)
}

// ---------------------------------------------------------------------------
// 1. Decimal converter
// ---------------------------------------------------------------------------

#[test]
fn decimal_round_trips_every_u16_at_every_minimum() {
    for value in 0..=u16::MAX {
        for minimum in 0..=<u16 as Word>::DEC_CAPACITY {
            let (out, n, calls) = collect(|sink| emit_decimal(sink, value, minimum));
            assert_eq!(n, calls);
            assert_eq!(n, out.len());
            assert!(out.len() >= minimum, "{value} min {minimum}: {out:?}");
            assert!(out.iter().all(u8::is_ascii_digit));

            if out.len() > minimum && out.len() > 1 {
                assert_ne!(out[0], b'0', "{value} min {minimum}: unforced leading zero");
            }

            let text = std::str::from_utf8(&out).unwrap();
            assert_eq!(text.parse::<u16>().unwrap(), value);
        }
    }
}

#[test]
fn decimal_natural_length_matches_std() {
    for value in (0..=u16::MAX).step_by(7) {
        let (out, _, _) = collect(|sink| emit_decimal(sink, value, 0));
        assert_eq!(out, value.to_string().into_bytes());
    }
}

// ---------------------------------------------------------------------------
// 2. Hexadecimal converter
// ---------------------------------------------------------------------------

#[test]
fn hex_matches_low_bits_for_every_u16_and_digit_count() {
    for value in 0..=u16::MAX {
        for digits in 1..=<u16 as Word>::HEX_CAPACITY {
            let (out, n, calls) = collect(|sink| emit_hex(sink, value, digits));
            assert_eq!(n, calls);
            assert_eq!(out.len(), digits);
            assert!(
                out.iter()
                    .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(b))
            );

            let mask = (1u32 << (4 * digits)) - 1;
            let expected = format!("{:0width$X}", u32::from(value) & mask, width = digits);
            assert_eq!(out, expected.into_bytes(), "{value:#06x} with {digits} digits");
        }
    }
}

// ---------------------------------------------------------------------------
// 3. Scanner examples
// ---------------------------------------------------------------------------

fn render(fmt: &str, args: &[Arg<'_, u16>]) -> (String, usize) {
    let (out, n, calls) = collect(|sink| format(sink, fmt.as_bytes(), args));
    assert_eq!(n, calls, "count for {fmt:?}");
    (String::from_utf8(out).unwrap(), n)
}

#[test]
fn documented_examples() {
    assert_eq!(render("%%", &[]), ("%".to_string(), 1));
    assert_eq!(render("%5s", &[Arg::from("ab")]), ("   ab".to_string(), 5));
    assert_eq!(render("%-5s", &[Arg::from("ab")]), ("ab   ".to_string(), 5));
    assert_eq!(render("%d", &[Arg::from(-5i16)]), ("-5".to_string(), 2));
    assert_eq!(render("%3u", &[Arg::from(7u16)]), ("007".to_string(), 3));
    assert_eq!(render("%x", &[Arg::from(0x2Fu16)]), ("002F".to_string(), 4));
    assert_eq!(render("%2x", &[Arg::from(0x2Fu16)]), ("2F".to_string(), 2));
    assert_eq!(render("%s", &[Arg::Str(None)]), (String::new(), 0));
}

#[test]
fn signed_decimal_matches_std_for_every_i16() {
    for value in i16::MIN..=i16::MAX {
        let (out, _) = render("%d", &[Arg::from(value)]);
        assert_eq!(out, value.to_string());
    }
}

#[test]
fn count_matches_sink_for_every_byte_after_percent() {
    let args = [Arg::from(1u16), Arg::from(-1i16), Arg::from("s")];
    for byte in 1u8..=255 {
        let fmt = [b'<', b'%', byte, b'>'];
        let (_, n, calls) = collect(|sink| format(sink, &fmt, &args));
        assert_eq!(n, calls, "byte {byte:#04x}");
    }
}

#[test]
fn unfinished_directive_echoes_one_nul() {
    for tail in ["%", "%-", "%4", "%-4", "%12", "%-12"] {
        let fmt = format!("ab{tail}");
        let (out, n) = render(&fmt, &[Arg::from(1u16)]);
        assert_eq!(out, "ab\0", "{fmt:?}");
        assert_eq!(n, 3, "{fmt:?}");
    }
}

#[test]
fn widths_up_to_ninety_nine_pad_strings() {
    for width in 0u8..=99 {
        let fmt = format!("%{width}s");
        let (out, n) = render(&fmt, &[Arg::from("abc")]);
        assert_eq!(n, usize::from(width).max(3));
        assert!(out.ends_with("abc"));
    }
}

#[test]
fn stack_sink_truncates_but_count_does_not() {
    let mut sink = StackSink::<4>::new();
    let n = smallprintf!(sink, "%-10s!", "abc");
    assert_eq!(n, 11);
    assert_eq!(sink.as_bytes(), b"abc ");
    assert_eq!(sink.offered(), 11);
    assert!(sink.truncated());
}

#[test]
fn wider_words_render_full_range() {
    let (out, n, _) = collect(|sink| {
        format::<u64, _>(
            sink,
            b"%u %d %x",
            &[Arg::from(u64::MAX), Arg::from(i64::MIN), Arg::from(u64::MAX)],
        )
    });
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "18446744073709551615 -9223372036854775808 FFFFFFFFFFFFFFFF"
    );
    assert_eq!(n, 20 + 1 + 20 + 1 + 16);
}
