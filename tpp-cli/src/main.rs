//! TPP CLI - Command line dashboard for trafficking prevention monitoring.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "tpp",
    version,
    about = "Trafficking Prevention Platform: real-time monitoring and analysis"
)]
struct Cli {
    #[command(subcommand)]
    command: tpp_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("tpp {} starting", env!("CARGO_PKG_VERSION"));
    tpp_cmd::run(cli.command).await
}
