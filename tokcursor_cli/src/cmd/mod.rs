use std::{io::Write, path::Path, path::PathBuf};

use anyhow::Result;

use crate::config::{CliConfig, OutputFormat};

mod inspect;

pub use inspect::{run_decode, run_encode, run_key};

pub fn run_command(
    config_file: PathBuf,
    output: Option<OutputFormat>,
    cmd: crate::Commands,
    out: &mut impl Write,
) -> Result<()> {
    match cmd {
        crate::Commands::Config { cmd } => {
            cmd.run(&config_file, output.unwrap_or_default(), out)
        }
        crate::Commands::Encode {
            plaintext,
            page_size,
        } => {
            let (config, output) = load(&config_file, output)?;
            run_encode(
                &plaintext,
                page_size.unwrap_or(config.page_size),
                output,
                out,
            )
        }
        crate::Commands::Decode { token, page_size } => {
            let (config, output) = load(&config_file, output)?;
            run_decode(&token, page_size.unwrap_or(config.page_size), output, out)
        }
        crate::Commands::Key { token, plain } => {
            let (config, output) = load(&config_file, output)?;
            run_key(&token, plain, config.page_size, output, out)
        }
    }
}

/// The command line output flag wins over the config file.
fn load(config_file: &Path, output: Option<OutputFormat>) -> Result<(CliConfig, OutputFormat)> {
    let config = CliConfig::load(config_file)?;
    let output = output.unwrap_or(config.output);
    Ok((config, output))
}
