//! quizkeep-core: quiz validation, play progress and catalog maintenance.
//!
//! This crate defines the quiz data model, the validator that gates every
//! import, and the progress engine and catalog that run on top of an injected
//! key-value store.

pub mod catalog;
pub mod clock;
pub mod error;
pub mod evaluator;
pub mod model;
pub mod progress;
pub mod round;
pub mod traits;
pub mod validation;

pub use catalog::QuizCatalog;
pub use clock::Clock;
pub use error::{ImportError, QuizError, StoreError};
pub use evaluator::{evaluate_answer, AnswerEvaluation};
pub use model::{Progress, QuestionType, Quiz, QuizIndexEntry, QuizOption, QuizQuestion, QuizSummary};
pub use progress::{random_unit, PickedQuestion, ProgressTracker};
pub use round::{QuestionRound, RoundError, RoundState};
pub use traits::{KeyValueStore, MemoryStore};
