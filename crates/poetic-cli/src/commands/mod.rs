use crate::commands::{info::InfoArgs, score::ScoreArgs};

pub mod info;
pub mod score;

/// Subcommands for poetic
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Score a sentence or a file, and report or export the results.
    Score(ScoreArgs),

    /// Print the package version banner.
    Info(InfoArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Score(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
        }
    }
}
