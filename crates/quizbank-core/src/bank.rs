//! Question bank persistence and validation.
//!
//! A bank is stored as a JSON array of [`Question`] records, the file the
//! quiz UI fetches at startup.

use std::collections::HashSet;
use std::path::Path;

use crate::error::BankError;
use crate::model::{Question, QuestionId};
use crate::parser::{MAX_OPTIONS, MIN_OPTIONS};

/// Save a bank as pretty-printed JSON, creating parent directories.
pub fn save_bank(path: &Path, questions: &[Question]) -> Result<(), BankError> {
    let json = serde_json::to_string_pretty(questions)?;
    let io_err = |source| BankError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, json).map_err(io_err)?;
    tracing::debug!(path = %path.display(), questions = questions.len(), "saved bank");
    Ok(())
}

/// Load a bank from a JSON file. A bank with no questions is an error.
pub fn load_bank(path: &Path) -> Result<Vec<Question>, BankError> {
    let content = std::fs::read_to_string(path).map_err(|source| BankError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_bank_str(&content)
}

/// Parse a bank from a JSON string (useful for testing).
pub fn parse_bank_str(content: &str) -> Result<Vec<Question>, BankError> {
    let questions: Vec<Question> = serde_json::from_str(content)?;
    if questions.is_empty() {
        return Err(BankError::Empty);
    }

    let warnings = validate_bank(&questions);
    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "bank has validation warnings");
    }
    Ok(questions)
}

/// A warning from bank validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<QuestionId>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn new(question_id: QuestionId, message: impl Into<String>) -> Self {
        Self {
            question_id: Some(question_id),
            message: message.into(),
        }
    }
}

/// Validate a bank for records that break the question invariants.
pub fn validate_bank(questions: &[Question]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_ids = HashSet::new();
    for q in questions {
        if !seen_ids.insert(q.id) {
            warnings.push(ValidationWarning::new(
                q.id,
                format!("duplicate question ID: {}", q.id),
            ));
        }
    }

    for q in questions {
        if q.question.trim().is_empty() {
            warnings.push(ValidationWarning::new(q.id, "question text is empty"));
        }

        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&q.options.len()) {
            warnings.push(ValidationWarning::new(
                q.id,
                format!(
                    "has {} options, expected {MIN_OPTIONS} to {MAX_OPTIONS}",
                    q.options.len()
                ),
            ));
        }

        if q.options.iter().any(|o| o.trim().is_empty()) {
            warnings.push(ValidationWarning::new(q.id, "has an empty option"));
        }

        if !q.options.contains(&q.correct_answer) {
            warnings.push(ValidationWarning::new(
                q.id,
                format!("correct answer {:?} is not one of the options", q.correct_answer),
            ));
        }
    }

    warnings
}
