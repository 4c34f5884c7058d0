//! Error types shared across quizkeep.
//!
//! Stored-record anomalies never show up here: a corrupt progress or index
//! record is replaced by an empty default where it is read. What remains are
//! failures of the backing store itself and rejected quiz input.

use thiserror::Error;

/// Failures raised by a [`KeyValueStore`](crate::traits::KeyValueStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing medium failed.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be encoded, or the store's own file is unreadable.
    #[error("store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other backend-specific failure.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Why a quiz candidate was rejected.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The input is not syntactically valid JSON.
    #[error("{0}")]
    Parse(String),

    /// The input parsed but violates the quiz schema.
    #[error("quiz failed validation with {} error(s): {}", .0.len(), .0.join("; "))]
    Invalid(Vec<String>),
}

/// Failures of an import: rejected input or a failing store.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl QuizError {
    /// The individual messages carried by this error.
    pub fn messages(&self) -> Vec<&str> {
        match self {
            QuizError::Parse(message) => vec![message.as_str()],
            QuizError::Invalid(errors) => errors.iter().map(String::as_str).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_lists_every_message() {
        let err = QuizError::Invalid(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "quiz failed validation with 2 error(s): a; b");
        assert_eq!(err.messages(), vec!["a", "b"]);
    }
}
