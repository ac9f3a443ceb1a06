//! Implementation of the `markgate init` command.

use crate::cli::InitArgs;
use crate::config::Config;
use crate::error::{GateError, Result};
use std::path::Path;

/// Write a default config file.
pub fn cmd_init(args: InitArgs) -> Result<()> {
    write_default_config(&args.path, args.force)?;
    println!("Wrote default config to {}", args.path.display());
    Ok(())
}

fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(GateError::UserError(format!(
            "config file '{}' already exists.\n\n\
             Use --force to overwrite it.",
            path.display()
        )));
    }

    let yaml = Config::default().to_yaml()?;
    let content = format!(
        "# markgate configuration\n\
         # comment_syntax overrides the builtin table, e.g.\n\
         #   comment_syntax:\n\
         #     sql: {{ line: \"--\", block_start: \"/*\", block_end: \"*/\" }}\n\
         {}",
        yaml
    );

    std::fs::write(path, content).map_err(|e| {
        GateError::UserError(format!(
            "failed to write config file '{}': {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_loadable_default_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".markgate.yaml");

        write_default_config(&path, false).unwrap();

        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".markgate.yaml");
        std::fs::write(&path, "reset_region_per_file: true\n").unwrap();

        let err = write_default_config(&path, false).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        write_default_config(&path, true).unwrap();
        assert!(!Config::load(&path).unwrap().reset_region_per_file);
    }
}
