use crate::config::OutputFormat;
use crate::init_config::CmdConfig;
use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use clap_verbosity_flag::WarnLevel;
use directories::ProjectDirs;
use std::path::PathBuf;

mod cmd;
mod config;
mod init_config;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// config file to use instead of the default location
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// output format, overrides the config file
    #[arg(short, long, value_enum, global = true)]
    output: Option<OutputFormat>,

    #[command(flatten)]
    verbosity: clap_verbosity_flag::Verbosity<WarnLevel>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Modify the cursor tool's config
    Config {
        #[command(subcommand)]
        cmd: CmdConfig,
    },
    /// Encode a plaintext `key:value,...` token into a raw cursor token
    Encode {
        /// Plaintext token, e.g. "key1:value1,key2:value2"
        plaintext: String,
        /// Page size carried by the cursor; defaults to the configured page size
        #[arg(short, long, value_name = "SIZE", allow_negative_numbers = true)]
        page_size: Option<i32>,
    },
    /// Decode a raw (base64) cursor token and print everything it carries
    Decode {
        /// Raw cursor token as handed to clients
        token: String,
        /// Page size carried by the cursor; defaults to the configured page size
        #[arg(short, long, value_name = "SIZE", allow_negative_numbers = true)]
        page_size: Option<i32>,
    },
    /// Print the identity key of a cursor token
    Key {
        /// Raw cursor token, or a plaintext token with --plain
        token: String,
        /// Treat the token as plaintext instead of base64
        #[arg(long, action = ArgAction::SetTrue)]
        plain: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .with_writer(std::io::stderr)
        .init();

    // Config lives at ~/.config/tokcursor/config.toml unless --config is given
    let config_file = match cli.config {
        Some(path) => path,
        None => ProjectDirs::from("", "", "tokcursor")
            .context("failed to determine config directory path")?
            .config_dir()
            .join("config.toml"),
    };

    let stdout = std::io::stdout();
    cmd::run_command(config_file, cli.output, cli.cmd, &mut stdout.lock())
}
