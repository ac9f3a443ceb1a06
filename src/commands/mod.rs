//! Command implementations for markgate.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod init;
mod syntax;

use crate::cli::Command;
use crate::error::Result;

pub use check::{cmd_check, run_check};
pub use init::cmd_init;
pub use syntax::{cmd_syntax, describe_syntax};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => cmd_check(args),
        Command::Syntax(args) => cmd_syntax(args),
        Command::Init(args) => cmd_init(args),
    }
}

/// Working directory for config discovery.
fn current_dir() -> Result<std::path::PathBuf> {
    std::env::current_dir().map_err(|e| {
        crate::error::GateError::UserError(format!(
            "failed to determine current directory: {}",
            e
        ))
    })
}
