//! Entry point for the `markgate` CLI. It parses arguments, sets up logging,
//! dispatches to the command handler, and maps errors to exit codes.

use markgate::cli::Cli;
use markgate::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_logging(&cli.log_level);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Violations were already printed with the report banner
            if !err.already_reported() {
                eprintln!("Error: {}", err);
            }

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
