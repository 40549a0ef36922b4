//! Init command implementation.
//!
//! Writes a `poster.yaml` with every default spelled out, ready to edit.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{PosterConfig, CONFIG_FILENAME};
use crate::error::{PosterError, Result};
use crate::output::{display_path, Printer};

/// Write a poster.yaml with every setting spelled out
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing poster.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(PosterError::Validation {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let yaml = PosterConfig::default().to_yaml()?;
    fs::write(&config_path, yaml).map_err(|e| PosterError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.success("Created", &display_path(&config_path));
    Ok(())
}
