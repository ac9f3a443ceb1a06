//! Configuration model for markgate.
//!
//! This module defines the Config struct that represents `.markgate.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults that reproduce the historical gate behavior, and validation of
//! config values.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use operations::DEFAULT_CONFIG_FILE;
