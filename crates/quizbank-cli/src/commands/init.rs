//! The `quizbank init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("quizbank.toml").exists() {
        println!("quizbank.toml already exists, skipping.");
    } else {
        std::fs::write("quizbank.toml", SAMPLE_CONFIG)?;
        println!("Created quizbank.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: quizbank parse --input transcript.txt --output quiz.json");
    println!("  2. Run: quizbank validate --bank quiz.json");
    println!("  3. Run: quizbank sample --bank quiz.json --output attempt.json");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizbank configuration

# Questions drawn per quiz attempt
questions_per_quiz = 13

# Uncomment for reproducible draws
# seed = 42
"#;
