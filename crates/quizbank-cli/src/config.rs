//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizbank_core::model::DEFAULT_QUESTIONS_PER_QUIZ;

/// Top-level quizbank configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizbankConfig {
    /// Questions drawn per quiz attempt.
    #[serde(default = "default_questions_per_quiz")]
    pub questions_per_quiz: usize,
    /// Fixed seed for reproducible draws. Unset means entropy-seeded.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_questions_per_quiz() -> usize {
    DEFAULT_QUESTIONS_PER_QUIZ
}

impl Default for QuizbankConfig {
    fn default() -> Self {
        Self {
            questions_per_quiz: default_questions_per_quiz(),
            seed: None,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizbank.toml` in the current directory
/// 2. `~/.config/quizbank/config.toml`
///
/// Environment variable overrides: `QUIZBANK_QUESTIONS_PER_QUIZ`, `QUIZBANK_SEED`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizbankConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizbank.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizbankConfig::default(),
    };

    if let Ok(count) = std::env::var("QUIZBANK_QUESTIONS_PER_QUIZ") {
        config.questions_per_quiz = count
            .parse()
            .with_context(|| format!("QUIZBANK_QUESTIONS_PER_QUIZ is not a number: {count}"))?;
    }

    if let Ok(seed) = std::env::var("QUIZBANK_SEED") {
        config.seed = Some(
            seed.parse()
                .with_context(|| format!("QUIZBANK_SEED is not a number: {seed}"))?,
        );
    }

    Ok(config)
}

fn parse_config_str(content: &str) -> Result<QuizbankConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizbank"))
}
