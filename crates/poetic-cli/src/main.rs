mod assets;
mod commands;
mod logging;

use clap::Parser;
use commands::Commands;

/// poetic: score text, sentence by sentence.
#[derive(clap::Parser, Debug)]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    logging: logging::LogArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.setup_logging(2)?;

    args.command.run()
}
