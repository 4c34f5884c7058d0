//! quizkeep-store: storage backends and configuration.
//!
//! Implements the `KeyValueStore` trait on a durable JSON file and wires the
//! configured backend up for the CLI.

pub mod config;
pub mod file;

pub use config::{load_config, load_config_from, open_store, QuizkeepConfig, StoreKind};
pub use file::FileStore;
