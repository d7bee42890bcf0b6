//! The `quizbank grade` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use quizbank_core::bank::load_bank;
use quizbank_core::model::{option_label, ResultDetail, ScoreSummary, UserAnswers};
use quizbank_core::scoring::{detail, score};

/// Everything the results view needs for one attempt.
#[derive(Debug, Serialize)]
struct GradeReport {
    summary: ScoreSummary,
    details: Vec<ResultDetail>,
}

pub fn execute(bank_path: PathBuf, answers_path: PathBuf, format: String) -> Result<()> {
    let questions = load_bank(&bank_path)
        .with_context(|| format!("failed to load bank: {}", bank_path.display()))?;

    let content = std::fs::read_to_string(&answers_path)
        .with_context(|| format!("failed to read answers: {}", answers_path.display()))?;
    let answers: UserAnswers = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse answers JSON: {}", answers_path.display()))?;

    let report = GradeReport {
        summary: score(&answers, &questions),
        details: detail(&answers, &questions),
    };

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "markdown" | "md" => println!("{}", to_markdown(&report)),
        _ => print_text(&report),
    }

    Ok(())
}

/// `B. Paris` for an option in the question, the bare answer otherwise.
fn labeled(detail: &ResultDetail, answer: &str) -> String {
    match detail.question.label_of(answer) {
        Some(label) => format!("{label}. {answer}"),
        None => answer.to_string(),
    }
}

fn verdict(detail: &ResultDetail) -> &'static str {
    if !detail.was_answered {
        "SKIPPED"
    } else if detail.is_correct {
        "OK"
    } else {
        "WRONG"
    }
}

fn print_text(report: &GradeReport) {
    use comfy_table::{Cell, Table};

    println!(
        "Score: {}/{} ({}%)",
        report.summary.correct, report.summary.total, report.summary.percentage
    );

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Your answer", "Correct answer", "Result"]);

    for (n, d) in report.details.iter().enumerate() {
        let yours = d
            .user_answer
            .as_deref()
            .map(|a| labeled(d, a))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(n + 1),
            Cell::new(&d.question.question),
            Cell::new(yours),
            Cell::new(labeled(d, &d.question.correct_answer)),
            Cell::new(verdict(d)),
        ]);
    }

    println!("\n{table}");
}

fn to_markdown(report: &GradeReport) -> String {
    let mut md = String::new();

    md.push_str(&format!(
        "**Score:** {}/{} ({}%)\n\n",
        report.summary.correct, report.summary.total, report.summary.percentage
    ));

    for (n, d) in report.details.iter().enumerate() {
        md.push_str(&format!("### {}. {} ({})\n\n", n + 1, d.question.question, verdict(d)));
        for (i, option) in d.question.options.iter().enumerate() {
            let label = option_label(i).unwrap_or('?');
            let mut marks = Vec::new();
            if *option == d.question.correct_answer {
                marks.push("correct");
            }
            if d.user_answer.as_deref() == Some(option.as_str()) {
                marks.push("your answer");
            }
            if marks.is_empty() {
                md.push_str(&format!("- {label}. {option}\n"));
            } else {
                md.push_str(&format!("- {label}. {option} _({})_\n", marks.join(", ")));
            }
        }
        md.push('\n');
    }

    md
}
