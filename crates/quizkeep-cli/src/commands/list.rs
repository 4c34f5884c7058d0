//! The `quizkeep list` command.

use anyhow::Result;
use chrono::DateTime;
use comfy_table::{Cell, Table};

use crate::commands::open_catalog;
use crate::StoreArgs;

pub async fn execute(store: &StoreArgs) -> Result<()> {
    let catalog = open_catalog(store)?;
    let mut quizzes = catalog.list_quizzes().await?;

    if quizzes.is_empty() {
        println!("No quizzes yet. Use `quizkeep import` to add one.");
        return Ok(());
    }

    // Most recently imported first; ties keep index order.
    quizzes.sort_by(|a, b| b.last_updated_at.cmp(&a.last_updated_at));

    let mut table = Table::new();
    table.set_header(vec!["Quiz ID", "Title", "Remaining", "Last Imported"]);
    for quiz in &quizzes {
        let imported = DateTime::from_timestamp(quiz.last_updated_at, 0)
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(&quiz.quiz_id),
            Cell::new(&quiz.title),
            Cell::new(format!("{} remaining", quiz.remaining)),
            Cell::new(imported),
        ]);
    }

    println!("{table}");
    Ok(())
}
