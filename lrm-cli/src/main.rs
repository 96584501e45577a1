//! LRM CLI - terminal view of the landslide monitoring dashboard.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "lrm-cli",
    version,
    about = "Landslide risk monitoring dashboard for the terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: lrm_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    lrm_cmd::run(cli.command).await
}
