use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_PAGE_SIZE: i32 = 50;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CliConfig {
    /// page size used when a command is not given --page-size
    pub page_size: i32,
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            output: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Reads the config file, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("no config file at {path:?}, using defaults");
            return Ok(Self::default());
        }
        let toml_content = fs::read_to_string(path)
            .with_context(|| format!("could not read config file {path:?}"))?;
        toml::from_str(&toml_content)
            .with_context(|| format!("could not parse config file {path:?}"))
    }
}
