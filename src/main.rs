use anyhow::Result;
use clap::Parser;
use kameti::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
