use anyhow::Result;
use clap::Parser;
use gtrack::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
