//! Quiz JSON parsing and structural validation.
//!
//! Imported quizzes arrive as untyped JSON. [`validate_quiz_structure`] walks
//! the value by hand and collects every schema violation it finds, so a user
//! fixing a quiz file sees all problems at once instead of one per attempt.
//! Only a value with zero violations is turned into a typed [`Quiz`].

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::error::QuizError;
use crate::model::{QuestionType, Quiz, QuizOption, QuizQuestion};

/// Result of the syntactic parse step.
#[derive(Debug, Clone)]
pub struct ParsedJson {
    /// The parsed value, absent on a syntax error.
    pub value: Option<Value>,
    /// Empty on success, otherwise exactly one "not valid JSON" message.
    pub errors: Vec<String>,
}

/// Outcome of checking a quiz candidate end to end.
#[derive(Debug, Clone)]
pub struct QuizCheck {
    /// The typed quiz, present only when `errors` is empty.
    pub quiz: Option<Quiz>,
    /// The untyped value, absent when the input was not valid JSON.
    pub value: Option<Value>,
    pub errors: Vec<String>,
}

impl QuizCheck {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.quiz.is_some()
    }
}

/// Parse raw text as JSON without looking at its shape.
pub fn parse_quiz_json(content: &str) -> ParsedJson {
    match serde_json::from_str::<Value>(content) {
        Ok(value) => ParsedJson {
            value: Some(value),
            errors: Vec::new(),
        },
        Err(e) => ParsedJson {
            value: None,
            errors: vec![format!("File is not valid JSON: {e}")],
        },
    }
}

/// Check a value against the quiz schema, returning every violation found.
///
/// An empty list means the value is a well-formed quiz.
pub fn validate_quiz_structure(value: &Value) -> Vec<String> {
    let Some(root) = value.as_object() else {
        return vec!["Root must be an object".to_string()];
    };

    let mut errors = Vec::new();

    if non_blank(root, "quizId").is_none() {
        errors.push("`quizId` must be a non-empty string".to_string());
    }
    if non_blank(root, "title").is_none() {
        errors.push("`title` must be a non-empty string".to_string());
    }

    match root.get("questions").and_then(Value::as_array) {
        None => errors.push("`questions` must be an array".to_string()),
        Some(questions) if questions.is_empty() => {
            errors.push("`questions` must be a non-empty array".to_string());
        }
        Some(questions) => {
            let mut ids = HashSet::new();
            for (i, question) in questions.iter().enumerate() {
                validate_question(i, question, &mut ids, &mut errors);
            }
        }
    }

    errors
}

fn validate_question<'a>(
    i: usize,
    value: &'a Value,
    ids: &mut HashSet<&'a str>,
    errors: &mut Vec<String>,
) {
    let prefix = format!("questions[{i}]");
    let Some(question) = value.as_object() else {
        errors.push(format!("{prefix} must be an object"));
        return;
    };

    match non_blank(question, "id") {
        None => errors.push(format!("{prefix}.id must be a non-empty string")),
        Some(id) => {
            if !ids.insert(id) {
                errors.push(format!("{prefix}.id must be unique within the quiz"));
            }
        }
    }

    if non_blank(question, "question").is_none() {
        errors.push(format!("{prefix}.question must be a non-empty string"));
    }

    let kind = question
        .get("type")
        .and_then(Value::as_str)
        .and_then(|t| t.parse::<QuestionType>().ok());
    if kind.is_none() {
        errors.push(format!(
            "{prefix}.type must be either \"single-choice\" or \"multiple-choice\""
        ));
    }

    let options = question.get("options").and_then(Value::as_array);
    match options {
        Some(options) if !options.is_empty() => {
            let mut keys = HashSet::new();
            for (j, option) in options.iter().enumerate() {
                validate_option(&prefix, j, option, &mut keys, errors);
            }
        }
        _ => errors.push(format!("{prefix}.options must be a non-empty array")),
    }

    let answers = question.get("correctAnswers").and_then(Value::as_array);
    match answers {
        Some(answers) if !answers.is_empty() => {
            // Distinct valid keys, in first-seen order.
            let mut seen: Vec<&str> = Vec::new();
            for (k, answer) in answers.iter().enumerate() {
                let Some(key) = answer.as_str().filter(|s| !s.trim().is_empty()) else {
                    errors.push(format!(
                        "{prefix}.correctAnswers[{k}] must be a non-empty string"
                    ));
                    continue;
                };
                if seen.contains(&key) {
                    errors.push(format!(
                        "{prefix}.correctAnswers must not contain duplicates"
                    ));
                } else {
                    seen.push(key);
                }
            }

            if let Some(options) = options {
                let option_keys: HashSet<&str> = options
                    .iter()
                    .filter_map(|o| o.get("key").and_then(Value::as_str))
                    .collect();
                for key in seen {
                    if !option_keys.contains(key) {
                        errors.push(format!(
                            "{prefix}.correctAnswers contains unknown key: {key}"
                        ));
                    }
                }
            }
        }
        _ => errors.push(format!("{prefix}.correctAnswers must be a non-empty array")),
    }

    // Cardinality counts raw entries and runs whatever else failed above.
    let count = answers.map_or(0, Vec::len);
    match kind {
        Some(QuestionType::SingleChoice) if count != 1 => errors.push(format!(
            "{prefix}.correctAnswers must have exactly one element for single-choice"
        )),
        Some(QuestionType::MultipleChoice) if count < 2 => errors.push(format!(
            "{prefix}.correctAnswers must have more than one element for multiple-choice"
        )),
        _ => {}
    }
}

fn validate_option<'a>(
    prefix: &str,
    j: usize,
    value: &'a Value,
    keys: &mut HashSet<&'a str>,
    errors: &mut Vec<String>,
) {
    let op = format!("{prefix}.options[{j}]");
    let Some(option) = value.as_object() else {
        errors.push(format!("{op} must be an object"));
        return;
    };

    match non_blank(option, "key") {
        None => errors.push(format!("{op}.key must be a non-empty string")),
        Some(key) => {
            if !keys.insert(key) {
                errors.push(format!("{op}.key must be unique within the question"));
            }
        }
    }

    if non_blank(option, "text").is_none() {
        errors.push(format!("{op}.text must be a non-empty string"));
    }
}

/// The string at `field`, if present and not blank.
fn non_blank<'a>(object: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    object
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// Check an already-parsed value and build the typed quiz when it is valid.
pub fn check_quiz_value(value: Value) -> QuizCheck {
    let errors = validate_quiz_structure(&value);
    let quiz = if errors.is_empty() {
        Some(quiz_from_value(&value))
    } else {
        None
    };
    QuizCheck {
        quiz,
        value: Some(value),
        errors,
    }
}

/// Parse and check raw text. A syntax error stops before any shape checks.
pub fn check_quiz_str(content: &str) -> QuizCheck {
    let parsed = parse_quiz_json(content);
    match parsed.value {
        Some(value) => check_quiz_value(value),
        None => QuizCheck {
            quiz: None,
            value: None,
            errors: parsed.errors,
        },
    }
}

/// Typed entry point: parse and validate, keeping the two failure kinds apart.
pub fn load_quiz(content: &str) -> Result<Quiz, QuizError> {
    let parsed = parse_quiz_json(content);
    let Some(value) = parsed.value else {
        let message = parsed.errors.into_iter().next().unwrap_or_default();
        return Err(QuizError::Parse(message));
    };

    let check = check_quiz_value(value);
    match check.quiz {
        Some(quiz) => Ok(quiz),
        None => Err(QuizError::Invalid(check.errors)),
    }
}

/// Build a quiz from a value that passed [`validate_quiz_structure`].
///
/// Optional text fields that are not strings are dropped.
fn quiz_from_value(value: &Value) -> Quiz {
    let text = |v: &Value, field: &str| -> String {
        v.get(field)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let optional = |v: &Value, field: &str| -> Option<String> {
        v.get(field).and_then(Value::as_str).map(str::to_string)
    };
    let items = |v: &Value, field: &str| -> Vec<Value> {
        v.get(field)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    };

    let questions = items(value, "questions")
        .iter()
        .map(|q| QuizQuestion {
            id: text(q, "id"),
            question: text(q, "question"),
            kind: q
                .get("type")
                .and_then(Value::as_str)
                .and_then(|t| t.parse().ok())
                .unwrap_or(QuestionType::SingleChoice),
            options: items(q, "options")
                .iter()
                .map(|o| QuizOption {
                    key: text(o, "key"),
                    text: text(o, "text"),
                })
                .collect(),
            correct_answers: items(q, "correctAnswers")
                .iter()
                .filter_map(|a| a.as_str().map(str::to_string))
                .collect(),
            explanation: optional(q, "explanation"),
        })
        .collect();

    Quiz {
        quiz_id: text(value, "quizId"),
        title: text(value, "title"),
        description: optional(value, "description"),
        questions,
    }
}
