//! The `quizkeep reset` and `quizkeep delete` commands.

use anyhow::Result;

use crate::commands::open_catalog;
use crate::StoreArgs;

pub async fn reset(store: &StoreArgs, quiz_id: String) -> Result<()> {
    let catalog = open_catalog(store)?;
    match catalog.progress().reset_progress(&quiz_id).await? {
        Some(progress) => {
            println!(
                "Progress reset: {} questions remaining in {quiz_id}.",
                progress.remaining()
            );
            Ok(())
        }
        None => anyhow::bail!("quiz not found: {quiz_id}"),
    }
}

pub async fn delete(store: &StoreArgs, quiz_id: String) -> Result<()> {
    let catalog = open_catalog(store)?;
    let existed = catalog.progress().get_stored_quiz(&quiz_id).await?.is_some();
    catalog.delete_quiz(&quiz_id).await?;
    if existed {
        println!("Deleted quiz: {quiz_id}");
    } else {
        println!("No quiz named {quiz_id}; nothing to delete.");
    }
    Ok(())
}
