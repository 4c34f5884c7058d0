//! The `quizkeep import` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizkeep_core::error::{ImportError, QuizError};

use crate::commands::open_catalog;
use crate::StoreArgs;

/// How many validation errors to show before truncating.
const MAX_SHOWN_ERRORS: usize = 3;

pub async fn execute(store: &StoreArgs, path: PathBuf) -> Result<()> {
    let content = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    let catalog = open_catalog(store)?;
    let quiz = match catalog.import_quiz_str(&content).await {
        Ok(quiz) => quiz,
        Err(ImportError::Quiz(QuizError::Parse(message))) => {
            anyhow::bail!("Invalid JSON: {message}")
        }
        Err(ImportError::Quiz(QuizError::Invalid(errors))) => {
            let shown: Vec<&str> = errors
                .iter()
                .take(MAX_SHOWN_ERRORS)
                .map(String::as_str)
                .collect();
            let more = errors.len().saturating_sub(MAX_SHOWN_ERRORS);
            let suffix = if more > 0 {
                format!(" (and {more} more)")
            } else {
                String::new()
            };
            anyhow::bail!("Validation failed: {}{suffix}", shown.join("; "))
        }
        Err(ImportError::Store(e)) => return Err(e).context("failed to store quiz"),
    };

    println!("Imported quiz: {}", quiz.title);
    println!(
        "{} questions ready. Run `quizkeep play {}` to begin.",
        quiz.questions.len(),
        quiz.quiz_id
    );
    Ok(())
}
