//! SIE CLI - Command line tool for exploring state and county income data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sie-cli",
    version,
    about = "State Income Explorer data toolkit"
)]
struct Cli {
    #[command(flatten)]
    sources: sie_cmd::SourceArgs,

    #[command(subcommand)]
    command: sie_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    sie_cmd::run(cli.command, cli.sources.into()).await
}
