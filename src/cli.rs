use clap::Parser;
use std::path::PathBuf;

/// Terminal viewer for an inventory service.
#[derive(Debug, Parser)]
#[command(name = "stockview", version, about)]
pub struct Cli {
    /// Config file (default: <config dir>/stockview/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the inventory service base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Fetch stocks once, print `name: quantity` lines and exit
    #[arg(long)]
    pub print: bool,

    /// Override the log file used in interactive mode
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
