//! Markgate: CI gate for confidentiality and region marker comments.
//!
//! The core is [`validate::scan_diff`], a single pass over a unified diff that
//! pairs `Begin`/`End` marker comments and checks the first line of every
//! added block. Everything else here is boundary glue for the `markgate` CLI.

pub mod cli;
pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod report;
pub mod syntax;
pub mod validate;
