//! The `quizbank validate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizbank_core::bank::{load_bank, validate_bank};

pub fn execute(bank_path: PathBuf) -> Result<()> {
    let questions = load_bank(&bank_path)
        .with_context(|| format!("failed to load bank: {}", bank_path.display()))?;

    println!(
        "Bank: {} ({} questions)",
        bank_path.display(),
        questions.len()
    );

    let warnings = validate_bank(&questions);
    for w in &warnings {
        let prefix = w
            .question_id
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Bank is valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
