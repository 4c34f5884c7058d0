//! Play progress and random question selection.
//!
//! Each quiz has a `progress:<quizId>` record listing the questions not yet
//! played, in authored order. Picking reads that list and never changes it;
//! only [`ProgressTracker::mark_question_played`] shrinks it and only
//! [`ProgressTracker::reset_progress`] (or a re-import) refills it.

use std::sync::Arc;

use crate::error::StoreError;
use crate::model::{Progress, Quiz, QuizQuestion};
use crate::traits::{progress_key, quiz_key, KeyValueStore};

/// Result of [`ProgressTracker::pick_random_question`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedQuestion {
    /// The stored quiz, `None` when no quiz has that ID.
    pub quiz: Option<Quiz>,
    /// The selected question, `None` when the quiz is finished or unknown.
    pub question: Option<QuizQuestion>,
    /// Unplayed questions before this pick.
    pub remaining: usize,
}

impl PickedQuestion {
    fn empty(quiz: Option<Quiz>) -> Self {
        Self {
            quiz,
            question: None,
            remaining: 0,
        }
    }

    /// True when the quiz exists and every question has been played.
    pub fn is_finished(&self) -> bool {
        self.quiz.is_some() && self.remaining == 0
    }
}

/// Default random source, uniform in `[0, 1)`.
pub fn random_unit() -> f64 {
    rand::random::<f64>()
}

/// Map a `[0, 1)` sample onto an index of a list of `length` items.
///
/// Out-of-range samples are clamped into `0..length`.
pub fn pick_index_randomly(length: usize, rng: &mut impl FnMut() -> f64) -> Option<usize> {
    if length == 0 {
        return None;
    }
    let scaled = (rng() * length as f64).floor();
    // `as` saturates negatives and NaN to 0.
    Some((scaled as usize).min(length - 1))
}

/// Reads and updates per-quiz progress through a [`KeyValueStore`].
#[derive(Clone)]
pub struct ProgressTracker {
    store: Arc<dyn KeyValueStore>,
}

impl ProgressTracker {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load a stored quiz. Missing or unreadable records yield `None`.
    pub async fn get_stored_quiz(&self, quiz_id: &str) -> Result<Option<Quiz>, StoreError> {
        let Some(raw) = self.store.get_item(&quiz_key(quiz_id)).await? else {
            return Ok(None);
        };
        match serde_json::from_str::<Quiz>(&raw) {
            Ok(quiz) => Ok(Some(quiz)),
            Err(e) => {
                tracing::warn!("ignoring unreadable quiz record for '{quiz_id}': {e}");
                Ok(None)
            }
        }
    }

    /// Load progress. Missing or malformed records read as an empty list.
    pub async fn get_progress(&self, quiz_id: &str) -> Result<Progress, StoreError> {
        let Some(raw) = self.store.get_item(&progress_key(quiz_id)).await? else {
            return Ok(Progress::default());
        };
        match serde_json::from_str::<Progress>(&raw) {
            Ok(progress) => Ok(progress),
            Err(e) => {
                tracing::warn!("ignoring malformed progress for '{quiz_id}': {e}");
                Ok(Progress::default())
            }
        }
    }

    /// Overwrite the progress record.
    pub async fn set_progress(&self, quiz_id: &str, progress: &Progress) -> Result<(), StoreError> {
        let raw = serde_json::to_string(progress)?;
        self.store.set_item(&progress_key(quiz_id), &raw).await
    }

    /// Refill progress with every question of the stored quiz.
    ///
    /// Returns `None` and writes nothing if the quiz is unknown.
    pub async fn reset_progress(&self, quiz_id: &str) -> Result<Option<Progress>, StoreError> {
        let Some(quiz) = self.get_stored_quiz(quiz_id).await? else {
            tracing::debug!("reset skipped, no quiz '{quiz_id}'");
            return Ok(None);
        };
        let progress = Progress::full(&quiz);
        self.set_progress(quiz_id, &progress).await?;
        tracing::info!(
            "reset progress for '{quiz_id}' ({} questions)",
            progress.remaining()
        );
        Ok(Some(progress))
    }

    /// Remove `question_id` from the remaining list and persist the result.
    ///
    /// Unknown or already-played IDs leave the list unchanged.
    pub async fn mark_question_played(
        &self,
        quiz_id: &str,
        question_id: &str,
    ) -> Result<Progress, StoreError> {
        let mut progress = self.get_progress(quiz_id).await?;
        progress.remaining_questions.retain(|id| id != question_id);
        self.set_progress(quiz_id, &progress).await?;
        tracing::debug!(
            "marked '{question_id}' played in '{quiz_id}', {} left",
            progress.remaining()
        );
        Ok(progress)
    }

    /// Select one unplayed question using `rng`, a source of samples in `[0, 1)`.
    pub async fn pick_random_question(
        &self,
        quiz_id: &str,
        mut rng: impl FnMut() -> f64,
    ) -> Result<PickedQuestion, StoreError> {
        let Some(quiz) = self.get_stored_quiz(quiz_id).await? else {
            return Ok(PickedQuestion::empty(None));
        };
        let progress = self.get_progress(quiz_id).await?;
        let remaining = progress.remaining();
        let Some(index) = pick_index_randomly(remaining, &mut rng) else {
            return Ok(PickedQuestion::empty(Some(quiz)));
        };

        let question_id = &progress.remaining_questions[index];
        let question = quiz.question(question_id).cloned();
        if question.is_none() {
            tracing::warn!("progress for '{quiz_id}' names unknown question '{question_id}'");
        }

        Ok(PickedQuestion {
            quiz: Some(quiz),
            question,
            remaining,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuestionType, QuizOption};
    use crate::traits::MemoryStore;

    fn question(id: &str, kind: QuestionType, correct: &[&str]) -> QuizQuestion {
        QuizQuestion {
            id: id.into(),
            question: format!("{id}?"),
            kind,
            options: ["A", "B", "C"]
                .iter()
                .map(|k| QuizOption {
                    key: (*k).into(),
                    text: (*k).into(),
                })
                .collect(),
            correct_answers: correct.iter().map(|s| (*s).to_string()).collect(),
            explanation: None,
        }
    }

    fn make_quiz(id: &str) -> Quiz {
        Quiz {
            quiz_id: id.into(),
            title: format!("Quiz {id}"),
            description: None,
            questions: vec![
                question("q1", QuestionType::SingleChoice, &["A"]),
                question("q2", QuestionType::MultipleChoice, &["A", "C"]),
                question("q3", QuestionType::SingleChoice, &["B"]),
            ],
        }
    }

    async fn seeded(quiz: &Quiz) -> (Arc<MemoryStore>, ProgressTracker) {
        let store = Arc::new(MemoryStore::new());
        store
            .set_item(&quiz_key(&quiz.quiz_id), &serde_json::to_string(quiz).unwrap())
            .await
            .unwrap();
        let tracker = ProgressTracker::new(store.clone());
        tracker
            .set_progress(&quiz.quiz_id, &Progress::full(quiz))
            .await
            .unwrap();
        (store, tracker)
    }

    #[test]
    fn pick_index_clamps_and_floors() {
        assert_eq!(pick_index_randomly(3, &mut || 0.5), Some(1));
        assert_eq!(pick_index_randomly(3, &mut || 0.0), Some(0));
        assert_eq!(pick_index_randomly(3, &mut || 0.9999), Some(2));
        assert_eq!(pick_index_randomly(3, &mut || 1.0), Some(2));
        assert_eq!(pick_index_randomly(3, &mut || -0.2), Some(0));
        assert_eq!(pick_index_randomly(0, &mut || 0.5), None);
    }

    #[test]
    fn default_source_stays_in_unit_interval() {
        for _ in 0..100 {
            let r = random_unit();
            assert!((0.0..1.0).contains(&r));
        }
    }

    #[tokio::test]
    async fn pick_is_deterministic_and_does_not_mutate() {
        let quiz = make_quiz("g1");
        let (store, tracker) = seeded(&quiz).await;
        let writes = store.write_count();

        let picked = tracker.pick_random_question("g1", || 0.5).await.unwrap();
        assert_eq!(picked.remaining, 3);
        assert_eq!(picked.question.unwrap().id, "q2");
        assert_eq!(store.write_count(), writes);

        let progress = tracker.get_progress("g1").await.unwrap();
        assert_eq!(progress.remaining_questions, vec!["q1", "q2", "q3"]);
    }

    #[tokio::test]
    async fn play_through_to_completion_and_reset() {
        let quiz = make_quiz("g1");
        let (_store, tracker) = seeded(&quiz).await;

        let updated = tracker.mark_question_played("g1", "q2").await.unwrap();
        assert_eq!(updated.remaining_questions, vec!["q1", "q3"]);

        let next = tracker.pick_random_question("g1", || 0.5).await.unwrap();
        assert_eq!(next.question.unwrap().id, "q3");
        assert_eq!(next.remaining, 2);

        tracker.mark_question_played("g1", "q3").await.unwrap();
        tracker.mark_question_played("g1", "q1").await.unwrap();
        let done = tracker.pick_random_question("g1", || 0.5).await.unwrap();
        assert!(done.question.is_none());
        assert_eq!(done.remaining, 0);
        assert!(done.is_finished());

        let reset = tracker.reset_progress("g1").await.unwrap().unwrap();
        assert_eq!(reset.remaining_questions, vec!["q1", "q2", "q3"]);
        let stored = tracker.get_progress("g1").await.unwrap();
        assert_eq!(stored, reset);
    }

    #[tokio::test]
    async fn mark_played_is_idempotent() {
        let quiz = make_quiz("g1");
        let (_store, tracker) = seeded(&quiz).await;

        let once = tracker.mark_question_played("g1", "q1").await.unwrap();
        let twice = tracker.mark_question_played("g1", "q1").await.unwrap();
        assert_eq!(once, twice);

        let unknown = tracker.mark_question_played("g1", "nope").await.unwrap();
        assert_eq!(unknown.remaining_questions, vec!["q2", "q3"]);
    }

    #[tokio::test]
    async fn unknown_quiz_yields_empty_pick() {
        let tracker = ProgressTracker::new(Arc::new(MemoryStore::new()));
        let picked = tracker.pick_random_question("missing", || 0.5).await.unwrap();
        assert_eq!(picked, PickedQuestion::empty(None));
        assert!(!picked.is_finished());
    }

    #[tokio::test]
    async fn reset_of_unknown_quiz_writes_nothing() {
        let store = Arc::new(MemoryStore::new());
        let tracker = ProgressTracker::new(store.clone());
        assert!(tracker.reset_progress("missing").await.unwrap().is_none());
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn malformed_progress_reads_as_empty() {
        let quiz = make_quiz("g1");
        let (store, tracker) = seeded(&quiz).await;

        for raw in ["not-json", "{}", r#"{"remainingQuestions": "q1"}"#, "null"] {
            store.set_item(&progress_key("g1"), raw).await.unwrap();
            let progress = tracker.get_progress("g1").await.unwrap();
            assert!(progress.is_complete(), "expected empty progress for {raw}");
        }

        let missing = tracker.get_progress("other").await.unwrap();
        assert!(missing.is_complete());
    }

    #[tokio::test]
    async fn unreadable_quiz_record_is_treated_as_missing() {
        let store = Arc::new(MemoryStore::new());
        store.set_item(&quiz_key("bad"), "{").await.unwrap();
        let tracker = ProgressTracker::new(store);
        assert!(tracker.get_stored_quiz("bad").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn stale_progress_entry_selects_no_question() {
        let quiz = make_quiz("g1");
        let (_store, tracker) = seeded(&quiz).await;
        tracker
            .set_progress(
                "g1",
                &Progress {
                    remaining_questions: vec!["gone".into()],
                },
            )
            .await
            .unwrap();

        let picked = tracker.pick_random_question("g1", || 0.0).await.unwrap();
        assert!(picked.quiz.is_some());
        assert!(picked.question.is_none());
        assert_eq!(picked.remaining, 1);
    }
}
