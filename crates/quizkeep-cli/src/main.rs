//! quizkeep CLI: import, validate and play quizzes from the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "quizkeep", version, about = "Import, validate and play multiple-choice quizzes")]
struct Cli {
    #[command(flatten)]
    store: StoreArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Where quiz data lives.
#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory (overrides config and QUIZKEEP_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter config and an example quiz
    Init,

    /// Check a quiz JSON file without importing it
    Validate {
        /// Path to the quiz JSON file
        file: PathBuf,
    },

    /// Validate and store a quiz, resetting its progress
    Import {
        /// Path to the quiz JSON file
        file: PathBuf,
    },

    /// List stored quizzes with their remaining question counts
    List,

    /// Play the remaining questions of a quiz
    Play {
        /// Quiz ID
        quiz_id: String,

        /// Reset progress before playing
        #[arg(long)]
        restart: bool,

        /// Seed for question order
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Mark every question of a quiz as unplayed again
    Reset {
        /// Quiz ID
        quiz_id: String,
    },

    /// Delete a quiz and its progress
    Delete {
        /// Quiz ID
        quiz_id: String,
    },
}

#[tokio::main]
async fn main() {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "quizkeep=warn".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = cli.store;

    let result = match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Validate { file } => commands::validate::execute(file),
        Commands::Import { file } => commands::import::execute(&store, file).await,
        Commands::List => commands::list::execute(&store).await,
        Commands::Play {
            quiz_id,
            restart,
            seed,
        } => commands::play::execute(&store, quiz_id, restart, seed).await,
        Commands::Reset { quiz_id } => commands::manage::reset(&store, quiz_id).await,
        Commands::Delete { quiz_id } => commands::manage::delete(&store, quiz_id).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
