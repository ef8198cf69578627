use anyhow::Context;
use clap::Parser;
use current_rose::cli::{run, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).context("Current rose generation failed") {
        tracing::error!("{:#}", e);
        eprintln!("❌ Error: {:#}", e);
        std::process::exit(1);
    }
}
