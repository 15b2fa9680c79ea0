//! wordflip command-line entry point

use clap::Parser;
use wordflip_cli::commands::Commands;

/// Unicode-aware word extraction and in-place word reversal
#[derive(Debug, Parser)]
#[command(name = "wordflip", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
