//! Core data model types for quizkeep.
//!
//! These are the records that pass through the validator and get persisted in
//! the key-value store. Field names serialize in camelCase so stored records
//! keep the `quizId` / `correctAnswers` / `remainingQuestions` shape.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named collection of questions, identified by `quiz_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    /// Unique identifier, also the suffix of the quiz's storage keys.
    pub quiz_id: String,
    /// Human-readable title.
    pub title: String,
    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Questions in their authored order.
    pub questions: Vec<QuizQuestion>,
}

impl Quiz {
    /// Question IDs in authored order.
    pub fn question_ids(&self) -> Vec<String> {
        self.questions.iter().map(|q| q.id.clone()).collect()
    }

    /// Look up a question by ID.
    pub fn question(&self, id: &str) -> Option<&QuizQuestion> {
        self.questions.iter().find(|q| q.id == id)
    }
}

/// A single question with its options and answer key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    /// Identifier, unique within the quiz.
    pub id: String,
    /// The question text.
    pub question: String,
    /// Whether one or several options are correct.
    #[serde(rename = "type")]
    pub kind: QuestionType,
    /// Answer options in display order.
    pub options: Vec<QuizOption>,
    /// Keys of the correct options.
    pub correct_answers: Vec<String>,
    /// Shown to the player once the answer has been evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuizQuestion {
    pub fn is_multiple_choice(&self) -> bool {
        self.kind == QuestionType::MultipleChoice
    }

    pub fn has_option(&self, key: &str) -> bool {
        self.options.iter().any(|o| o.key == key)
    }
}

/// One selectable answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub key: String,
    pub text: String,
}

/// Question types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    /// Exactly one correct option.
    SingleChoice,
    /// Two or more correct options.
    MultipleChoice,
}

impl QuestionType {
    /// Label used when rendering a question.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::SingleChoice => "Single Choice",
            QuestionType::MultipleChoice => "Multiple Choice",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::SingleChoice => write!(f, "single-choice"),
            QuestionType::MultipleChoice => write!(f, "multiple-choice"),
        }
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single-choice" => Ok(QuestionType::SingleChoice),
            "multiple-choice" => Ok(QuestionType::MultipleChoice),
            other => Err(format!("unknown question type: {other}")),
        }
    }
}

/// Unplayed question IDs for one quiz, in authored order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub remaining_questions: Vec<String>,
}

impl Progress {
    /// Progress with every question of `quiz` still to play.
    pub fn full(quiz: &Quiz) -> Self {
        Self {
            remaining_questions: quiz.question_ids(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining_questions.len()
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_questions.is_empty()
    }
}

/// Denormalized catalog entry, upserted on import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizIndexEntry {
    pub quiz_id: String,
    pub title: String,
    /// Epoch seconds of the most recent import.
    pub last_updated_at: i64,
}

/// An index entry joined with its live remaining count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    pub quiz_id: String,
    pub title: String,
    pub remaining: usize,
    pub last_updated_at: i64,
}
