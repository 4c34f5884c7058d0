//! Quiz catalog: import, delete and listing.
//!
//! A quiz lives in three records: `quiz:<id>`, `progress:<id>` and its entry
//! in the `quizzesIndex` list. The catalog writes and removes them together.
//! Progress alone changes during play, and the index timestamp only moves on
//! import.

use std::sync::Arc;

use crate::clock::Clock;
use crate::error::{ImportError, StoreError};
use crate::model::{Progress, Quiz, QuizIndexEntry, QuizSummary};
use crate::progress::ProgressTracker;
use crate::traits::{progress_key, quiz_key, KeyValueStore, INDEX_KEY};
use crate::validation::load_quiz;

/// Keeps the quiz records and the summary index consistent.
#[derive(Clone)]
pub struct QuizCatalog {
    store: Arc<dyn KeyValueStore>,
    progress: ProgressTracker,
    clock: Clock,
}

impl QuizCatalog {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            progress: ProgressTracker::new(store.clone()),
            store,
            clock: Clock::System,
        }
    }

    /// Use `clock` for `lastUpdatedAt` stamps.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// The progress tracker sharing this catalog's store.
    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    /// Read the index. A missing or unparsable record reads as empty.
    pub async fn get_quizzes_index(&self) -> Result<Vec<QuizIndexEntry>, StoreError> {
        let Some(raw) = self.store.get_item(INDEX_KEY).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<QuizIndexEntry>>(&raw) {
            Ok(index) => Ok(index),
            Err(e) => {
                tracing::warn!("ignoring unreadable quiz index: {e}");
                Ok(Vec::new())
            }
        }
    }

    /// Overwrite the index.
    pub async fn set_quizzes_index(&self, index: &[QuizIndexEntry]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(index)?;
        self.store.set_item(INDEX_KEY, &raw).await
    }

    /// Store a validated quiz, reseed its progress and upsert its index entry.
    ///
    /// Re-importing an existing ID discards any partial progress. The index
    /// entry keeps its position; new quizzes are appended.
    pub async fn store_quiz(&self, quiz: &Quiz) -> Result<QuizIndexEntry, StoreError> {
        let now = self.clock.now_secs();

        let raw = serde_json::to_string(quiz)?;
        self.store.set_item(&quiz_key(&quiz.quiz_id), &raw).await?;
        self.progress
            .set_progress(&quiz.quiz_id, &Progress::full(quiz))
            .await?;

        let entry = QuizIndexEntry {
            quiz_id: quiz.quiz_id.clone(),
            title: quiz.title.clone(),
            last_updated_at: now,
        };
        let mut index = self.get_quizzes_index().await?;
        match index.iter_mut().find(|e| e.quiz_id == quiz.quiz_id) {
            Some(existing) => *existing = entry.clone(),
            None => index.push(entry.clone()),
        }
        self.set_quizzes_index(&index).await?;

        tracing::info!(
            "imported quiz '{}' with {} questions",
            quiz.quiz_id,
            quiz.questions.len()
        );
        Ok(entry)
    }

    /// Parse, validate and store a quiz from raw JSON text.
    pub async fn import_quiz_str(&self, content: &str) -> Result<Quiz, ImportError> {
        let quiz = load_quiz(content)?;
        self.store_quiz(&quiz).await?;
        Ok(quiz)
    }

    /// Remove a quiz, its progress and its index entry. Absent records are fine.
    pub async fn delete_quiz(&self, quiz_id: &str) -> Result<(), StoreError> {
        self.store.remove_item(&quiz_key(quiz_id)).await?;
        self.store.remove_item(&progress_key(quiz_id)).await?;
        let index = self.get_quizzes_index().await?;
        let next: Vec<QuizIndexEntry> = index.into_iter().filter(|e| e.quiz_id != quiz_id).collect();
        self.set_quizzes_index(&next).await?;
        tracing::info!("deleted quiz '{quiz_id}'");
        Ok(())
    }

    /// Index entries joined with their current remaining counts, in index order.
    ///
    /// Entries whose quiz record is gone are skipped. A missing progress
    /// record counts as zero remaining.
    pub async fn list_quizzes(&self) -> Result<Vec<QuizSummary>, StoreError> {
        let index = self.get_quizzes_index().await?;
        let mut summaries = Vec::with_capacity(index.len());
        for entry in index {
            if self.progress.get_stored_quiz(&entry.quiz_id).await?.is_none() {
                tracing::warn!("skipping index entry '{}' with no quiz record", entry.quiz_id);
                continue;
            }
            let progress = self.progress.get_progress(&entry.quiz_id).await?;
            summaries.push(QuizSummary {
                quiz_id: entry.quiz_id,
                title: entry.title,
                remaining: progress.remaining(),
                last_updated_at: entry.last_updated_at,
            });
        }
        Ok(summaries)
    }
}
