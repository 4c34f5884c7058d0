//! The `quizkeep validate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizkeep_core::validation::check_quiz_str;

pub fn execute(path: PathBuf) -> Result<()> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    let check = check_quiz_str(&content);
    match check.quiz {
        Some(quiz) => {
            println!(
                "Quiz: {} ({} questions)",
                quiz.title,
                quiz.questions.len()
            );
            println!("Quiz is valid.");
            Ok(())
        }
        None => {
            println!("{}:", path.display());
            for error in &check.errors {
                println!("  - {error}");
            }
            anyhow::bail!("{} validation error(s) found", check.errors.len())
        }
    }
}
