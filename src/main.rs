use anyhow::Result;
use clap::Parser;
use mkvdualsub::{cli::Cli, run};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
