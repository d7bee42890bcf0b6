//! Grading a quiz attempt.
//!
//! Both functions are pure over `(answers, questions)`; answers whose id
//! matches no question are ignored.

use crate::model::{Question, ResultDetail, ScoreSummary, UserAnswers};

/// Count correct answers over `questions`.
pub fn score(answers: &UserAnswers, questions: &[Question]) -> ScoreSummary {
    let correct = questions
        .iter()
        .filter(|q| answers.get(&q.id).is_some_and(|a| q.is_correct(a)))
        .count();
    let total = questions.len();

    ScoreSummary {
        correct,
        total,
        percentage: rounded_percentage(correct, total),
    }
}

/// One [`ResultDetail`] per question, in input order.
pub fn detail(answers: &UserAnswers, questions: &[Question]) -> Vec<ResultDetail> {
    questions
        .iter()
        .map(|q| {
            let user_answer = answers.get(&q.id).cloned();
            ResultDetail {
                is_correct: user_answer.as_deref().is_some_and(|a| q.is_correct(a)),
                was_answered: user_answer.is_some(),
                user_answer,
                question: q.clone(),
            }
        })
        .collect()
}

/// `round(100 * correct / total)` with halves rounded up, 0 when `total` is 0.
fn rounded_percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let pct = (200 * correct as u64 + total as u64) / (2 * total as u64);
    pct.min(100) as u32
}
