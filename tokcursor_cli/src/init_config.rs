use std::{fs, io::Write, path::Path};

use anyhow::Context;
use clap::Subcommand;
use toml_edit::{DocumentMut, value};
use tracing::info;

use crate::config::{CliConfig, OutputFormat};

#[derive(Subcommand)]
pub enum CmdConfig {
    /// Creates the config file if it doesn't exist and fills in missing defaults
    Init,
    /// Prints the effective config
    Show,
}

impl CmdConfig {
    pub fn run(
        self,
        config_file: &Path,
        output: OutputFormat,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        match self {
            Self::Init => init(config_file),
            Self::Show => {
                let config = CliConfig::load(config_file)?;
                match output {
                    OutputFormat::Text => write!(out, "{}", toml::to_string(&config)?)?,
                    OutputFormat::Json => {
                        writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?
                    }
                }
                Ok(())
            }
        }
    }
}

fn init(config_file: &Path) -> anyhow::Result<()> {
    let mut doc = if config_file.exists() {
        fs::read_to_string(config_file)?
    } else {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        "".to_owned()
    }
    .parse::<DocumentMut>()
    .context("could not parse config file")?;

    let defaults = CliConfig::default();
    doc.entry("page_size")
        .or_insert(value(i64::from(defaults.page_size)));
    doc.entry("output").or_insert(value("text"));

    // existing keys are kept as-is, so make sure they still load
    toml::from_str::<CliConfig>(&doc.to_string())
        .with_context(|| format!("config file {config_file:?} has invalid values"))?;

    info!("writing to config file {config_file:?}");

    let tmp_path = config_file.with_extension("tmp");
    let mut tmp = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&tmp_path)?;
    tmp.write_all(doc.to_string().as_bytes())?;
    tmp.sync_all()?;
    fs::rename(&tmp_path, config_file)?;
    Ok(())
}
