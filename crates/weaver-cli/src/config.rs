use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::output::OutputFormat;

/// The weaver configuration file structure (weaver.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WeaverConfig {
    /// Logging configuration
    pub log: LogConfig,

    /// Result rendering
    pub output: OutputConfig,

    /// Defaults for the `inc` command
    pub inc: IncConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Logger filter (e.g. "debug" or "weaver_semver=trace")
    pub level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IncConfig {
    /// Release type used when none is given on the command line
    pub release: Option<String>,
}

impl WeaverConfig {
    /// Load configuration from weaver.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join("weaver.toml");

            if config_path.is_file() {
                let content = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("Failed to read {}", config_path.display()))?;
                let config: WeaverConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", config_path.display()))?;
                log::debug!("Loaded configuration from {}", config_path.display());
                return Ok(Some(config));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }
}
