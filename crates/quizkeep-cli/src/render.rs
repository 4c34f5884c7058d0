//! Plain-text rendering of a question round.

use quizkeep_core::QuestionRound;

/// Render the question, its options and, once evaluated, the verdict.
pub fn render_round(quiz_title: &str, round: &QuestionRound) -> String {
    let question = round.question();
    let selection = round.selection();
    let mut lines = vec![
        format!("# {quiz_title}"),
        String::new(),
        format!("> {}", question.kind.label()),
        String::new(),
        format!("## {}", question.question),
        String::new(),
    ];

    for option in &question.options {
        let marker = if selection.contains(&option.key) {
            "[x]"
        } else {
            "[ ]"
        };
        lines.push(format!("- {marker} ({}) {}", option.key, option.text));
    }

    if let Some(correct) = round.outcome() {
        lines.push(String::new());
        if correct {
            lines.push("✅ Correct".to_string());
        } else {
            lines.push(format!(
                "❌ Incorrect (answer: {})",
                question.correct_answers.join(", ")
            ));
        }
        if let Some(explanation) = round.explanation() {
            lines.push(String::new());
            lines.push(format!("ℹ️ {explanation}"));
        }
    }

    lines.join("\n")
}

/// The input hint shown under an unanswered question.
pub fn prompt_for(round: &QuestionRound) -> &'static str {
    if round.shows_submit() {
        "Select all that apply (e.g. `A C`), or `q` to stop: "
    } else {
        "Your answer (option key), or `q` to stop: "
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizkeep_core::{QuestionType, QuizOption, QuizQuestion};

    fn multiple_choice() -> QuizQuestion {
        QuizQuestion {
            id: "q1".into(),
            question: "Pick all that apply".into(),
            kind: QuestionType::MultipleChoice,
            options: vec![
                QuizOption {
                    key: "A".into(),
                    text: "Alpha".into(),
                },
                QuizOption {
                    key: "B".into(),
                    text: "Beta".into(),
                },
                QuizOption {
                    key: "C".into(),
                    text: "Gamma".into(),
                },
            ],
            correct_answers: vec!["A".into(), "C".into()],
            explanation: Some("Because A and C are correct.".into()),
        }
    }

    #[test]
    fn unanswered_round_shows_selection_only() {
        let mut round = QuestionRound::new(multiple_choice());
        round.toggle("A").unwrap();
        let text = render_round("MC Quiz", &round);

        assert!(text.contains("> Multiple Choice"));
        assert!(text.contains("- [x] (A) Alpha"));
        assert!(text.contains("- [ ] (B) Beta"));
        assert!(!text.contains("Correct"));
        assert!(!text.contains("ℹ️"));
        assert!(prompt_for(&round).starts_with("Select all"));
    }

    #[test]
    fn evaluated_round_shows_verdict_and_explanation() {
        let mut round = QuestionRound::new(multiple_choice());
        round.toggle("A").unwrap();
        round.toggle("C").unwrap();
        round.submit();
        let text = render_round("MC Quiz", &round);

        assert!(text.contains("✅ Correct"));
        assert!(text.contains("ℹ️ Because A and C are correct."));
    }

    #[test]
    fn wrong_answer_reveals_correct_keys() {
        let mut round = QuestionRound::new(multiple_choice());
        round.toggle("B").unwrap();
        round.submit();
        let text = render_round("MC Quiz", &round);

        assert!(text.contains("❌ Incorrect (answer: A, C)"));
        assert!(text.contains("Because A and C are correct."));
    }
}
