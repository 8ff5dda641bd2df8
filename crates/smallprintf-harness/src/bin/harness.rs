//! CLI entrypoint for the smallprintf conformance harness.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use smallprintf_core::Mode;
use smallprintf_harness::structured_log::{self, LogEmitter, LogLevel};
use smallprintf_harness::verify::VerificationSummary;
use smallprintf_harness::{
    ConformanceReport, FixtureArg, FixtureSet, HarnessConfig, TestRunner, WordWidth,
};

/// Conformance tooling for smallprintf.
#[derive(Debug, Parser)]
#[command(name = "smallprintf-harness")]
#[command(about = "Conformance testing harness for smallprintf")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the engine against fixture files.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown; JSON is written alongside).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Mode to verify (`lenient`, `strict` or `both`). Overrides SMALLPRINTF_MODE.
        #[arg(long)]
        mode: Option<String>,
        /// Structured JSONL log path. Overrides SMALLPRINTF_LOG.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Render one format string to stdout.
    Render {
        /// Format string.
        #[arg(long)]
        format: String,
        /// Argument: `u:<n>`, `d:<n>`, `s:<text>` or `s:null`. Repeatable.
        #[arg(long = "arg")]
        args: Vec<FixtureArg>,
        /// Engine word width.
        #[arg(long, default_value = "u16")]
        word: WordWidth,
        /// `lenient` or `strict`.
        #[arg(long, default_value = "lenient")]
        mode: String,
    },
    /// Validate a structured JSONL log file.
    ValidateLog {
        #[arg(long)]
        log: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Verify {
            fixture,
            report,
            mode,
            log,
            timestamp,
        } => {
            let config = HarnessConfig::from_env().with_overrides(mode.as_deref(), log);
            eprintln!(
                "Verifying against fixtures in {} ({})",
                fixture.display(),
                config.run_mode.as_str()
            );

            let mut fixture_sets = Vec::new();
            for path in smallprintf_harness::fixtures::fixture_paths(&fixture)? {
                match FixtureSet::from_file(&path) {
                    Ok(set) => fixture_sets.push(set),
                    Err(err) => eprintln!("Skipping {}: {}", path.display(), err),
                }
            }
            if fixture_sets.is_empty() {
                return Err(format!("No fixture JSON files found in {}", fixture.display()).into());
            }

            let mut emitter = match &config.log_path {
                Some(path) => {
                    eprintln!("Writing structured log to {}", path.display());
                    Some(LogEmitter::to_file(path, "verify", &run_id())?)
                }
                None => None,
            };
            if let Some(emitter) = emitter.as_mut() {
                emitter.emit(LogLevel::Info, "run_start")?;
            }

            let mut results = Vec::new();
            for &mode in config.run_mode.modes() {
                let runner = TestRunner::new("fixture-verify", mode);
                for set in &fixture_sets {
                    match emitter.as_mut() {
                        Some(emitter) => results.extend(runner.run_logged(set, emitter)?),
                        None => results.extend(runner.run(set)),
                    }
                }
            }

            // Stable ordering for reproducible reports.
            results.sort_by(|a, b| {
                a.mode
                    .cmp(&b.mode)
                    .then_with(|| a.section.cmp(&b.section))
                    .then_with(|| a.case_name.cmp(&b.case_name))
            });

            let summary = VerificationSummary::from_results(results);
            let report_doc = ConformanceReport {
                title: String::from("smallprintf Conformance Report"),
                mode: config.run_mode.as_str().to_string(),
                timestamp: timestamp.unwrap_or_else(structured_log::now_utc),
                summary,
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );
            for failed in report_doc.summary.results.iter().filter(|r| !r.passed) {
                eprintln!("FAIL {} ({})", failed.case_name, failed.section);
                if let Some(diff) = &failed.diff {
                    eprintln!("{diff}");
                }
            }

            if let Some(emitter) = emitter.as_mut() {
                emitter.emit(LogLevel::Info, "run_end")?;
                emitter.flush()?;
            }

            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json())?;
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::Render {
            format,
            args,
            word,
            mode,
        } => {
            let mode = Mode::from_str_loose(&mode);
            let rendered =
                smallprintf_harness::render_case(word, format.as_bytes(), &args, mode)?;
            if let Some(message) = rendered.error {
                return Err(message.into());
            }
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&rendered.output)?;
            stdout.flush()?;
            eprintln!("\n[{} characters]", rendered.returned);
        }
        Command::ValidateLog { log } => {
            let (lines, errors) = structured_log::validate_log_file(&log)?;
            for err in &errors {
                eprintln!("{err}");
            }
            eprintln!(
                "{}: {lines} lines, {} errors",
                log.display(),
                errors.len()
            );
            if !errors.is_empty() {
                return Err("Structured log validation failed".into());
            }
        }
    }

    Ok(())
}

fn run_id() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format!("run-{secs}")
}
