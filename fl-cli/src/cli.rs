use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "fl")]
#[command(about = "FarmLink marketplace client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (overrides the configured api.base_url)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Force debug logging
    #[arg(long, global = true)]
    pub(crate) verbose: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
