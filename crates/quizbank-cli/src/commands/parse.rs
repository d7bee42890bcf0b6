//! The `quizbank parse` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizbank_core::bank::save_bank;
use quizbank_core::parser::parse_transcript_with_report;

pub fn execute(input: PathBuf, output: PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(&input)
        .with_context(|| format!("failed to read transcript: {}", input.display()))?;

    let report = parse_transcript_with_report(&text);

    if report.questions.is_empty() {
        anyhow::bail!("no questions found in transcript: {}", input.display());
    }

    save_bank(&output, &report.questions)
        .with_context(|| format!("failed to write bank: {}", output.display()))?;

    println!(
        "Parsed {} questions ({} groups skipped) -> {}",
        report.questions.len(),
        report.skipped.len(),
        output.display()
    );

    Ok(())
}
