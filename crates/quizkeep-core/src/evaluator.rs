//! Answer evaluation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Whether a submitted answer was right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerEvaluation {
    pub correct: bool,
}

/// Compare the selected option keys against the correct ones as sets.
///
/// Order and repeated keys in either slice do not matter.
pub fn evaluate_answer<S: AsRef<str>>(correct_answers: &[S], selected: &[S]) -> AnswerEvaluation {
    let correct: HashSet<&str> = correct_answers.iter().map(AsRef::as_ref).collect();
    let selected: HashSet<&str> = selected.iter().map(AsRef::as_ref).collect();
    AnswerEvaluation {
        correct: correct == selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_does_not_matter() {
        assert!(evaluate_answer(&["A", "C"], &["C", "A"]).correct);
    }

    #[test]
    fn missing_or_extra_keys_are_wrong() {
        assert!(!evaluate_answer(&["A", "C"], &["A"]).correct);
        assert!(!evaluate_answer(&["A", "C"], &["A", "B"]).correct);
        assert!(!evaluate_answer(&["A", "C"], &["A", "B", "C"]).correct);
        assert!(!evaluate_answer(&["A"], &[]).correct);
    }

    #[test]
    fn duplicates_are_ignored() {
        assert!(evaluate_answer(&["A", "C"], &["A", "C", "A"]).correct);
        assert!(evaluate_answer(&["B", "B"], &["B"]).correct);
    }

    #[test]
    fn works_with_owned_strings() {
        let correct = vec!["B".to_string()];
        let selected = vec!["B".to_string()];
        assert!(evaluate_answer(&correct, &selected).correct);
    }
}
