//! Core data model types for quizbank.
//!
//! These are the records the parser produces and the sampler and scorer
//! consume. The serialized field names (`id`, `question`, `options`,
//! `correctAnswer`) are the interchange format the quiz UI reads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Identifier of a question within one parsed bank.
pub type QuestionId = usize;

/// The option string a user picked, keyed by question id.
///
/// Unanswered questions have no entry.
pub type UserAnswers = HashMap<QuestionId, String>;

/// Number of questions drawn for one quiz attempt.
pub const DEFAULT_QUESTIONS_PER_QUIZ: usize = 13;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Sequential id assigned in parse order, starting at 0.
    pub id: QuestionId,
    /// The question text.
    pub question: String,
    /// Answer options in transcript order. Position determines the A/B/C label.
    pub options: Vec<String>,
    /// The correct option. Always one of `options`.
    pub correct_answer: String,
}

impl Question {
    /// Whether `answer` is exactly the correct option.
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }

    /// The positional label (`A`, `B`, `C`, ...) of `answer`, if it is one of the options.
    pub fn label_of(&self, answer: &str) -> Option<char> {
        self.options
            .iter()
            .position(|o| o == answer)
            .and_then(option_label)
    }
}

/// The letter shown next to the option at `index`.
pub fn option_label(index: usize) -> Option<char> {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| char::from(b'A' + i))
}

/// Aggregate result of grading one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Questions answered correctly.
    pub correct: usize,
    /// Questions graded.
    pub total: usize,
    /// `correct / total` as a rounded percentage, 0 when `total` is 0.
    pub percentage: u32,
}

/// Per-question grading outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDetail {
    /// The graded question.
    #[serde(flatten)]
    pub question: Question,
    /// The user's pick, `null` when unanswered.
    pub user_answer: Option<String>,
    /// Whether `user_answer` equals `correct_answer`.
    pub is_correct: bool,
    /// Whether the user picked anything.
    pub was_answered: bool,
}
