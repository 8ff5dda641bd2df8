#![no_main]
use libfuzzer_sys::fuzz_target;
use smallprintf_core::{Arg, format, try_format};

// First bytes choose the argument list, the rest is the format string.
fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let (seed, fmt) = rest.split_at(rest.len().min(4));

    let mut args: Vec<Arg<'_, u16>> = Vec::new();
    for (i, &b) in seed.iter().enumerate() {
        args.push(match (selector >> (2 * i)) & 0b11 {
            0 => Arg::Unsigned(u16::from(b) * 257),
            1 => Arg::Signed(i16::from(b as i8).wrapping_mul(257)),
            2 => Arg::Str(Some(&seed[..i])),
            _ => Arg::Str(None),
        });
    }

    let mut lenient = Vec::new();
    let n = format(&mut |b: u8| lenient.push(b), fmt, &args);
    assert_eq!(n, lenient.len());

    let mut strict = Vec::new();
    match try_format(&mut |b: u8| strict.push(b), fmt, &args) {
        Ok(m) => {
            assert_eq!(m, n);
            assert_eq!(strict, lenient);
        }
        Err(_) => assert!(strict.is_empty()),
    }
});
