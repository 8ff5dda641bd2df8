//! Test execution engine.
//!
//! Each case is rendered into a byte buffer through a closure sink that also
//! counts its own invocations, so the count the engine returns is checked
//! against what actually reached the sink.

use std::time::Instant;

use smallprintf_core::{Arg, Mode, Word};

use crate::diff;
use crate::fixtures::{FixtureArg, FixtureCase, FixtureSet, WordWidth};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use crate::verify::VerificationResult;
use crate::HarnessError;

// ---------------------------------------------------------------------------
// Argument conversion
// ---------------------------------------------------------------------------

/// Range-checked conversion from fixture integers into an engine word.
trait FixtureWord: Word {
    const NAME: &'static str;
    fn unsigned(value: u64) -> Option<Self>;
    fn signed(value: i64) -> Option<Self::Signed>;
}

macro_rules! impl_fixture_word {
    ($($unsigned:ty => $signed:ty),* $(,)?) => {$(
        impl FixtureWord for $unsigned {
            const NAME: &'static str = stringify!($unsigned);

            fn unsigned(value: u64) -> Option<Self> {
                <$unsigned>::try_from(value).ok()
            }

            fn signed(value: i64) -> Option<$signed> {
                <$signed>::try_from(value).ok()
            }
        }
    )*};
}

impl_fixture_word!(u8 => i8, u16 => i16, u32 => i32, u64 => i64);

fn convert_args<W: FixtureWord>(args: &[FixtureArg]) -> Result<Vec<Arg<'_, W>>, HarnessError> {
    args.iter()
        .enumerate()
        .map(|(index, arg)| {
            let out_of_range = || HarnessError::ArgumentRange {
                index,
                word: W::NAME,
            };
            Ok(match arg {
                FixtureArg::Unsigned(v) => Arg::Unsigned(W::unsigned(*v).ok_or_else(out_of_range)?),
                FixtureArg::Signed(v) => Arg::Signed(W::signed(*v).ok_or_else(out_of_range)?),
                FixtureArg::Str(s) => Arg::Str(s.as_deref().map(str::as_bytes)),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Outcome of rendering one format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Bytes that reached the sink.
    pub output: Vec<u8>,
    /// Count returned by the engine (0 on a strict failure).
    pub returned: usize,
    /// Sink invocations observed independently.
    pub observed: usize,
    /// Strict-mode failure message.
    pub error: Option<String>,
    pub latency_ns: u64,
}

impl Rendered {
    /// Comparable text: the output, or `error:<message>` on failure.
    #[must_use]
    pub fn actual(&self) -> String {
        match &self.error {
            Some(message) => format!("error:{message}"),
            None => String::from_utf8_lossy(&self.output).into_owned(),
        }
    }

    /// True if the engine's count agrees with the sink.
    #[must_use]
    pub fn count_consistent(&self) -> bool {
        self.error.is_some() || self.returned == self.observed
    }
}

/// Render `fmt` with `args` on the requested word width.
pub fn render_case(
    word: WordWidth,
    fmt: &[u8],
    args: &[FixtureArg],
    mode: Mode,
) -> Result<Rendered, HarnessError> {
    match word {
        WordWidth::U8 => render_with::<u8>(fmt, args, mode),
        WordWidth::U16 => render_with::<u16>(fmt, args, mode),
        WordWidth::U32 => render_with::<u32>(fmt, args, mode),
        WordWidth::U64 => render_with::<u64>(fmt, args, mode),
    }
}

fn render_with<W: FixtureWord>(
    fmt: &[u8],
    args: &[FixtureArg],
    mode: Mode,
) -> Result<Rendered, HarnessError> {
    let args = convert_args::<W>(args)?;
    let mut output = Vec::new();
    let mut observed = 0usize;
    let started = Instant::now();
    let result = {
        let mut sink = |byte: u8| {
            output.push(byte);
            observed += 1;
        };
        smallprintf_core::render(&mut sink, fmt, &args, mode)
    };
    let latency_ns = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);

    let (returned, error) = match result {
        Ok(n) => (n, None),
        Err(err) => (0, Some(err.to_string())),
    };
    Ok(Rendered {
        output,
        returned,
        observed,
        error,
        latency_ns,
    })
}

// ---------------------------------------------------------------------------
// Runner
// ---------------------------------------------------------------------------

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    /// Engine mode being tested.
    pub mode: Mode,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>, mode: Mode) -> Self {
        Self {
            campaign: campaign.into(),
            mode,
        }
    }

    /// Run all matching fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        self.cases(fixture_set)
            .map(|case| self.execute(case).0)
            .collect()
    }

    /// Like [`run`](Self::run), also writing one JSONL record per case.
    pub fn run_logged(
        &self,
        fixture_set: &FixtureSet,
        log: &mut LogEmitter,
    ) -> std::io::Result<Vec<VerificationResult>> {
        let mut results = Vec::new();
        for case in self.cases(fixture_set) {
            let (result, rendered) = self.execute(case);
            let mut entry = LogEntry::new(
                "",
                if result.passed {
                    LogLevel::Info
                } else {
                    LogLevel::Error
                },
                "case_result",
            )
            .with_mode(self.mode.as_str())
            .with_case(result.case_name.clone())
            .with_outcome(match (&rendered, result.passed) {
                (None, _) => Outcome::Error,
                (Some(_), true) => Outcome::Pass,
                (Some(_), false) => Outcome::Fail,
            })
            .with_details(serde_json::json!({
                "campaign": self.campaign,
                "family": fixture_set.family,
                "section": result.section,
                "word": case.word.as_str(),
            }));
            if let Some(rendered) = &rendered {
                entry = entry
                    .with_emitted(rendered.returned)
                    .with_latency_ns(rendered.latency_ns);
            }
            log.emit_entry(entry)?;
            results.push(result);
        }
        Ok(results)
    }

    fn cases<'a>(&'a self, fixture_set: &'a FixtureSet) -> impl Iterator<Item = &'a FixtureCase> {
        fixture_set
            .cases
            .iter()
            .filter(|case| mode_matches(self.mode, &case.mode))
    }

    fn execute(&self, case: &FixtureCase) -> (VerificationResult, Option<Rendered>) {
        let case_name = if case.mode.eq_ignore_ascii_case("both") {
            format!("{} [{}]", case.name, self.mode.as_str())
        } else {
            case.name.clone()
        };

        let (actual, diff, rendered) =
            match render_case(case.word, case.format.as_bytes(), &case.args, self.mode) {
                Ok(rendered) => {
                    let actual = rendered.actual();
                    let diff = case_notes(case, &rendered, &actual);
                    (actual, diff, Some(rendered))
                }
                Err(err) => {
                    let actual = format!("unsupported:{err}");
                    let diff = Some(diff::render_diff(&case.expected_output, &actual));
                    (actual, diff, None)
                }
            };

        let result = VerificationResult {
            case_name,
            section: case.section.clone(),
            mode: self.mode.as_str().to_string(),
            passed: diff.is_none(),
            expected: case.expected_output.clone(),
            actual,
            diff,
        };
        (result, rendered)
    }
}

fn mode_matches(active: Mode, case_mode: &str) -> bool {
    case_mode.eq_ignore_ascii_case("both") || case_mode.eq_ignore_ascii_case(active.as_str())
}

/// Everything wrong with a rendered case, or `None` if it passed.
fn case_notes(case: &FixtureCase, rendered: &Rendered, actual: &str) -> Option<String> {
    let mut notes = Vec::new();
    if actual != case.expected_output {
        notes.push(diff::render_diff(&case.expected_output, actual));
    }
    if !rendered.count_consistent() {
        notes.push(format!(
            "count mismatch: returned={}, sink saw {}",
            rendered.returned, rendered.observed
        ));
    }
    if let Some(expected) = case.expected_count
        && rendered.error.is_none()
        && expected != rendered.returned
    {
        notes.push(format!(
            "expected count {expected}, returned {}",
            rendered.returned
        ));
    }
    (!notes.is_empty()).then(|| notes.join("\n"))
}
