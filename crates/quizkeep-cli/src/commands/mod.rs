pub mod import;
pub mod init;
pub mod list;
pub mod manage;
pub mod play;
pub mod validate;

use anyhow::Result;

use quizkeep_core::QuizCatalog;
use quizkeep_store::config::load_config_from;
use quizkeep_store::open_store;

use crate::StoreArgs;

/// Resolve configuration and open the catalog on the configured store.
pub fn open_catalog(args: &StoreArgs) -> Result<QuizCatalog> {
    let mut config = load_config_from(args.config.as_deref())?;
    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }
    let store = open_store(&config)?;
    Ok(QuizCatalog::new(store))
}
