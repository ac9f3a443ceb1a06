//! Rendering of verdicts at the CLI boundary.
//!
//! Text output keeps the banner lines CI logs have always shown, with
//! violations on the error stream and the pass line on the standard stream.

use crate::validate::Verdict;
use clap::ValueEnum;
use std::io::{self, Write};

/// Output format for `markgate check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human readable banners and `Line N: message` entries.
    #[default]
    Text,
    /// A single JSON document on stdout.
    Json,
}

/// Write a verdict to the given streams.
pub fn write_verdict(
    verdict: &Verdict,
    format: OutputFormat,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(verdict, out, err),
        OutputFormat::Json => write_json(verdict, out),
    }
}

fn write_text(verdict: &Verdict, out: &mut dyn Write, err: &mut dyn Write) -> io::Result<()> {
    if verdict.passed {
        writeln!(out)?;
        writeln!(out, "--- DIFF VALIDATION PASSED ---")?;
        writeln!(out, "Diff validation successful!")?;
        return Ok(());
    }

    writeln!(err)?;
    writeln!(err, "--- DIFF VALIDATION ERRORS ---")?;
    write!(err, "{}", verdict.format_error())?;
    writeln!(err, "----------------------------")?;
    writeln!(err, "Diff validation failed!")?;
    Ok(())
}

fn write_json(verdict: &Verdict, out: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, verdict)?;
    writeln!(out)
}

/// Write the raw diff framed by banners, before validation output.
pub fn write_raw_diff(diff: &str, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- RAW DIFF CONTENT ---")?;
    writeln!(out, "{}", diff)?;
    writeln!(out, "----------------------")?;
    writeln!(out)
}
