//! Question bank error types.
//!
//! Parsing, sampling, and scoring never fail. The only fallible surface is
//! reading and writing persisted banks.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or saving a question bank.
#[derive(Debug, Error)]
pub enum BankError {
    /// The bank file could not be read or written.
    #[error("failed to access bank file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bank contents are not a valid JSON array of questions.
    #[error("invalid bank JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The bank parsed but holds no questions.
    #[error("no questions found in quiz file")]
    Empty,
}

impl BankError {
    /// Returns `true` if the bank was readable but contained no records.
    pub fn is_empty_bank(&self) -> bool {
        matches!(self, BankError::Empty)
    }
}
