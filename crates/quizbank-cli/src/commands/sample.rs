//! The `quizbank sample` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizbank_core::bank::{load_bank, save_bank};
use quizbank_core::sampler::select;
use quizbank_core::shuffle::RngSource;

use crate::config::load_config_from;

pub fn execute(
    bank_path: PathBuf,
    count: Option<usize>,
    seed: Option<u64>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let questions = load_bank(&bank_path)
        .with_context(|| format!("failed to load bank: {}", bank_path.display()))?;

    let count = count.unwrap_or(config.questions_per_quiz);
    let attempt = match seed.or(config.seed) {
        Some(seed) => select(&questions, count, &mut RngSource::seeded(seed)),
        None => select(&questions, count, &mut RngSource::thread()),
    };
    tracing::info!(
        drawn = attempt.len(),
        bank = questions.len(),
        "sampled quiz attempt"
    );

    match output {
        Some(path) => {
            save_bank(&path, &attempt)
                .with_context(|| format!("failed to write attempt: {}", path.display()))?;
            println!(
                "Selected {} of {} questions -> {}",
                attempt.len(),
                questions.len(),
                path.display()
            );
        }
        None => println!("{}", serde_json::to_string_pretty(&attempt)?),
    }

    Ok(())
}
