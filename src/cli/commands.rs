use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `fsmbti` - Food safety culture MBTI quiz for the terminal.
#[derive(Parser, Debug)]
#[command(name = "fsmbti")]
#[command(version = "0.1.0")]
#[command(
    about = "A 40-question MBTI-style quiz for food safety culture campaigns.",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Take the quiz interactively (resumes where you left off)
    Start {
        /// Clear saved answers and begin again
        #[arg(long)]
        restart: bool,

        /// Step through every question, not only the unanswered ones
        #[arg(long, conflicts_with = "restart")]
        review: bool,
    },

    /// Record a single answer without the interactive prompt
    Answer {
        /// Question number
        id: u32,

        /// Rating from 1 (strongly disagree) to 5 (strongly agree)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
    },

    /// List every question with its saved answer
    Questions,

    /// Show how many questions have been answered
    Progress,

    /// Show your type (requires all questions answered)
    Result {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Name shown in the result heading (overrides config)
        #[arg(long)]
        nickname: Option<String>,
    },

    /// Clear all saved answers
    Reset {
        /// Delete the saved-answers file instead of emptying it
        #[arg(long)]
        purge: bool,
    },

    /// Print the share link and its QR image address
    Share {
        /// Link to share (overrides config)
        #[arg(long)]
        link: Option<String>,

        /// Download the QR image to this path
        #[arg(long, value_name = "PATH")]
        qr_out: Option<PathBuf>,
    },
}
