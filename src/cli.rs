//! Command-line arguments for the `finsense` binary.

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

/// Financial news with sentiment, in the terminal.
#[derive(Debug, Parser)]
#[command(name = "finsense", author, version, about, propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Base URL of the sentiment service.
    #[arg(long, env = "FINSENSE_BASE_URL", global = true)]
    pub base_url: Option<url::Url>,

    /// Request timeout in seconds.
    #[arg(long, env = "FINSENSE_TIMEOUT_SECS", default_value_t = 15, global = true)]
    pub timeout_secs: u64,

    /// Disable coloured output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print raw JSON instead of rendered text.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive dashboard (the default).
    Dashboard,
    /// Fetch one page of headlines.
    News {
        /// Filter by ticker symbol, e.g. NVDA or BTC.
        #[arg(short, long)]
        ticker: Option<String>,
        /// Maximum number of articles.
        #[arg(short, long, default_value_t = 12)]
        limit: u32,
    },
    /// Classify a piece of text.
    Analyze {
        /// The text to classify.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Check that the service is up.
    Status,
}

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] finsense_rs::FsError),

    #[error("service reported status '{0}'")]
    Inactive(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Api(finsense_rs::FsError::EmptyInput) => 2,
            Self::Api(_) | Self::Inactive(_) => 3,
            Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
