use crate::core::config::AppConfig;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

const EXAMPLE_CONFIG: &str = include_str!("../../docs/example_config.yaml");

/// Writes the example configuration next to the other fxrates settings.
pub fn setup() -> Result<()> {
    let path = write_example_config(AppConfig::default_config_path()?)?;
    println!("Wrote example configuration to {}", path.display());
    Ok(())
}

/// Creates `path` with the example configuration and returns it.
///
/// Fails without touching the file when it already exists.
pub fn write_example_config<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            anyhow::bail!("Configuration file already exists at {}", path.display())
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to create {}", path.display()));
        }
    };
    file.write_all(EXAMPLE_CONFIG.as_bytes())
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!(path = %path.display(), "Created example configuration");
    Ok(path.to_path_buf())
}
