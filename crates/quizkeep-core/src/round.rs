//! Answering state for a single picked question.
//!
//! Single-choice questions are evaluated as soon as an option is chosen.
//! Multiple-choice questions collect a selection through toggles and are
//! evaluated on submit.

use thiserror::Error;

use crate::evaluator::evaluate_answer;
use crate::model::QuizQuestion;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("'{0}' is not an option of this question")]
    UnknownOption(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundState {
    Answering { selection: Vec<String> },
    Evaluated { selection: Vec<String>, correct: bool },
}

/// One question being answered.
#[derive(Debug, Clone)]
pub struct QuestionRound {
    question: QuizQuestion,
    state: RoundState,
}

impl QuestionRound {
    pub fn new(question: QuizQuestion) -> Self {
        Self {
            question,
            state: RoundState::Answering {
                selection: Vec::new(),
            },
        }
    }

    pub fn question(&self) -> &QuizQuestion {
        &self.question
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn selection(&self) -> &[String] {
        match &self.state {
            RoundState::Answering { selection } | RoundState::Evaluated { selection, .. } => {
                selection
            }
        }
    }

    /// `Some(correct)` once evaluated.
    pub fn outcome(&self) -> Option<bool> {
        match self.state {
            RoundState::Evaluated { correct, .. } => Some(correct),
            RoundState::Answering { .. } => None,
        }
    }

    pub fn is_evaluated(&self) -> bool {
        self.outcome().is_some()
    }

    /// Select `key`. Single-choice rounds are evaluated immediately; on a
    /// multiple-choice round this behaves like [`toggle`](Self::toggle).
    pub fn choose(&mut self, key: &str) -> Result<(), RoundError> {
        if self.question.is_multiple_choice() {
            return self.toggle(key);
        }
        self.check_option(key)?;
        if self.is_evaluated() {
            return Ok(());
        }
        let selection = vec![key.to_string()];
        let correct = evaluate_answer(&self.question.correct_answers, &selection).correct;
        self.state = RoundState::Evaluated { selection, correct };
        Ok(())
    }

    /// Add or remove `key` from the selection without evaluating.
    pub fn toggle(&mut self, key: &str) -> Result<(), RoundError> {
        self.check_option(key)?;
        if let RoundState::Answering { selection } = &mut self.state {
            match selection.iter().position(|k| k == key) {
                Some(pos) => {
                    selection.remove(pos);
                }
                None => selection.push(key.to_string()),
            }
        }
        Ok(())
    }

    /// Evaluate the current selection. Returns the outcome.
    pub fn submit(&mut self) -> bool {
        match &self.state {
            RoundState::Evaluated { correct, .. } => *correct,
            RoundState::Answering { selection } => {
                let selection = selection.clone();
                let correct = evaluate_answer(&self.question.correct_answers, &selection).correct;
                self.state = RoundState::Evaluated { selection, correct };
                correct
            }
        }
    }

    /// Whether a submit action applies: multiple-choice and not yet evaluated.
    pub fn shows_submit(&self) -> bool {
        self.question.is_multiple_choice() && !self.is_evaluated()
    }

    /// Whether moving to the next question applies.
    pub fn shows_next(&self) -> bool {
        self.is_evaluated()
    }

    /// The explanation, revealed only after evaluation.
    pub fn explanation(&self) -> Option<&str> {
        if !self.is_evaluated() {
            return None;
        }
        self.question
            .explanation
            .as_deref()
            .filter(|e| !e.trim().is_empty())
    }

    fn check_option(&self, key: &str) -> Result<(), RoundError> {
        if self.question.has_option(key) {
            Ok(())
        } else {
            Err(RoundError::UnknownOption(key.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuestionType, QuizOption};

    fn question(kind: QuestionType, correct: &[&str], explanation: Option<&str>) -> QuizQuestion {
        QuizQuestion {
            id: "q1".into(),
            question: "Pick".into(),
            kind,
            options: [("A", "Alpha"), ("B", "Beta"), ("C", "Gamma")]
                .iter()
                .map(|(k, t)| QuizOption {
                    key: (*k).into(),
                    text: (*t).into(),
                })
                .collect(),
            correct_answers: correct.iter().map(|s| (*s).to_string()).collect(),
            explanation: explanation.map(str::to_string),
        }
    }

    #[test]
    fn single_choice_evaluates_on_choose() {
        let mut round = QuestionRound::new(question(QuestionType::SingleChoice, &["B"], None));
        assert!(!round.shows_submit());
        round.choose("A").unwrap();
        assert_eq!(round.outcome(), Some(false));
        assert!(round.shows_next());

        // Further choices do not re-evaluate.
        round.choose("B").unwrap();
        assert_eq!(round.selection(), ["A"]);
        assert_eq!(round.outcome(), Some(false));
    }

    #[test]
    fn multiple_choice_waits_for_submit() {
        let mut round = QuestionRound::new(question(
            QuestionType::MultipleChoice,
            &["A", "C"],
            Some("Because A and C are correct."),
        ));
        round.toggle("A").unwrap();
        assert!(round.shows_submit());
        assert!(!round.shows_next());
        assert_eq!(round.outcome(), None);
        assert_eq!(round.explanation(), None);

        round.choose("C").unwrap();
        round.toggle("B").unwrap();
        round.toggle("B").unwrap();
        assert_eq!(round.selection(), ["A", "C"]);

        assert!(round.submit());
        assert!(!round.shows_submit());
        assert!(round.shows_next());
        assert_eq!(round.explanation(), Some("Because A and C are correct."));
    }

    #[test]
    fn toggles_after_evaluation_are_ignored() {
        let mut round = QuestionRound::new(question(QuestionType::MultipleChoice, &["A", "C"], None));
        round.toggle("A").unwrap();
        assert!(!round.submit());
        round.toggle("C").unwrap();
        assert_eq!(round.selection(), ["A"]);
        assert!(!round.submit());
    }

    #[test]
    fn explanation_shown_regardless_of_correctness() {
        let mut round = QuestionRound::new(question(
            QuestionType::SingleChoice,
            &["B"],
            Some("2 and 2 add up to 4."),
        ));
        assert_eq!(round.explanation(), None);
        round.choose("A").unwrap();
        assert_eq!(round.explanation(), Some("2 and 2 add up to 4."));
    }

    #[test]
    fn blank_explanation_is_hidden() {
        let mut round = QuestionRound::new(question(QuestionType::SingleChoice, &["B"], Some("  ")));
        round.choose("B").unwrap();
        assert_eq!(round.outcome(), Some(true));
        assert_eq!(round.explanation(), None);
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut round = QuestionRound::new(question(QuestionType::SingleChoice, &["B"], None));
        assert_eq!(
            round.choose("Z"),
            Err(RoundError::UnknownOption("Z".into()))
        );
        assert!(!round.is_evaluated());
    }
}
