//! Implementation of the `markgate check` command.
//!
//! 1. Resolve config (`--config`, `.markgate.yaml`, or defaults)
//! 2. Read the whole diff from its source
//! 3. Scan it and render the verdict
//! 4. Map a failing verdict to exit code 1

use crate::cli::CheckArgs;
use crate::config::Config;
use crate::diff::{DiffSource, source_for};
use crate::error::{GateError, Result};
use crate::report::{write_raw_diff, write_verdict};
use crate::validate::{ScanOptions, Verdict, scan_diff};
use std::io::Write;
use std::path::Path;

/// Execute the `markgate check` command.
///
/// # Exit Codes
///
/// - 0: No violations
/// - 1: Violations found
/// - 2: Invalid config
/// - 3: Diff could not be read
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let cwd = super::current_dir()?;
    let source = source_for(args.diff.as_deref());

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let verdict = run_check(
        &args,
        &cwd,
        source.as_ref(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;

    if verdict.passed {
        Ok(())
    } else {
        Err(GateError::ValidationFailed(format!(
            "{} violation(s) found",
            verdict.violations.len()
        )))
    }
}

/// Run a check against an explicit source and explicit output streams.
pub fn run_check(
    args: &CheckArgs,
    cwd: &Path,
    source: &dyn DiffSource,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Verdict> {
    let config = Config::discover(args.config.as_deref(), cwd)?;
    let mut options = ScanOptions::from_config(&config);
    if args.reset_region_per_file {
        options.reset_region_per_file = true;
    }

    tracing::info!(source = %source.describe(), "reading diff");
    let diff = source.read_diff()?;

    if args.echo_diff {
        write_raw_diff(&diff, out).map_err(output_error)?;
    }

    let verdict = scan_diff(&diff, &options);
    write_verdict(&verdict, args.format, out, err).map_err(output_error)?;

    Ok(verdict)
}

fn output_error(e: std::io::Error) -> GateError {
    GateError::UserError(format!("failed to write output: {}", e))
}
