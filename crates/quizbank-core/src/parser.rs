//! Transcript parser.
//!
//! Turns a loosely structured plain-text transcript into a question bank.
//! Each record in the transcript is a group of lines:
//!
//! ```text
//! 1. Paris - thủ đô của Pháp        <- header: answer hint before the dash
//! What is the capital of France?    <- question
//! A. London                         <- 2 or 3 options
//! B. Paris
//! C. Berlin
//! ```
//!
//! Section headers (`TEST ...`), page breaks, blank lines, and any line that
//! does not start a group are noise. Groups that cannot be validated are
//! skipped without error.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::Question;
use crate::resolve::resolve;

/// Most options a single group can carry.
pub const MAX_OPTIONS: usize = 3;

/// Fewest options for a group to become a record.
pub const MIN_OPTIONS: usize = 2;

/// Separator between the answer hint and its description in a header.
static HEADER_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*[-–]\s*").unwrap());

/// `12. ` numbering in front of a hint.
static NUMBERING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s*").unwrap());

/// A question line that is really an option (`A. foo`, `B bar`).
static OPTION_LIKE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-C]\.?\s").unwrap());

/// Positional label in front of an option.
static OPTION_LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-C](?:\.|\s)").unwrap());

/// Outcome of parsing a transcript, including groups that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Validated records, ids assigned sequentially from 0.
    pub questions: Vec<Question>,
    /// Candidate headers that did not produce a record.
    pub skipped: Vec<SkippedGroup>,
}

/// A candidate header that was not turned into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedGroup {
    /// 1-based line number of the header in the raw transcript.
    pub line: usize,
    /// Why the group was dropped.
    pub reason: SkipReason,
}

/// Why a candidate group was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The line after the header looks like an option, so the header was a false positive.
    OptionLikeQuestion,
    /// Fewer than [`MIN_OPTIONS`] options followed the question.
    TooFewOptions { found: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::OptionLikeQuestion => write!(f, "question line looks like an option"),
            SkipReason::TooFewOptions { found } => {
                write!(f, "only {found} option(s), need at least {MIN_OPTIONS}")
            }
        }
    }
}

/// Parse a transcript into questions, discarding skip diagnostics.
pub fn parse_transcript(text: &str) -> Vec<Question> {
    parse_transcript_with_report(text).questions
}

/// Parse a transcript into questions and report every skipped group.
pub fn parse_transcript_with_report(text: &str) -> ParseReport {
    let lines = significant_lines(text);
    let mut report = ParseReport::default();
    let mut cursor = 0;
    let mut state = State::SeekHeader;

    loop {
        state = match state {
            State::SeekHeader => {
                let Some(line) = lines.get(cursor) else {
                    break;
                };
                match classify(line, lines.get(cursor + 1)) {
                    LineKind::Noise => {
                        cursor += 1;
                        State::SeekHeader
                    }
                    LineKind::OptionLikeQuestion => {
                        report.skip(line.number, SkipReason::OptionLikeQuestion);
                        cursor += 1;
                        State::SeekHeader
                    }
                    LineKind::Header { hint, question } => {
                        cursor += 2;
                        State::CollectOptions(PendingGroup {
                            line: line.number,
                            hint,
                            question,
                            options: Vec::with_capacity(MAX_OPTIONS),
                        })
                    }
                }
            }
            State::CollectOptions(mut group) => {
                let next = lines
                    .get(cursor)
                    .filter(|l| group.options.len() < MAX_OPTIONS && !ends_option_block(l.text));
                match next {
                    Some(line) => {
                        if let Some(option) = clean_option(line.text) {
                            group.options.push(option);
                        }
                        cursor += 1;
                        State::CollectOptions(group)
                    }
                    None => {
                        report.finish(group);
                        State::SeekHeader
                    }
                }
            }
        };
    }

    tracing::info!(
        questions = report.questions.len(),
        skipped = report.skipped.len(),
        "parsed transcript"
    );
    report
}

/// Scanner state. Every transition either consumes a line or moves from
/// `CollectOptions` back to `SeekHeader`, so the loop visits each line once.
enum State<'a> {
    SeekHeader,
    CollectOptions(PendingGroup<'a>),
}

struct PendingGroup<'a> {
    line: usize,
    hint: String,
    question: &'a str,
    options: Vec<String>,
}

impl ParseReport {
    fn skip(&mut self, line: usize, reason: SkipReason) {
        tracing::debug!(line, %reason, "skipping group");
        self.skipped.push(SkippedGroup { line, reason });
    }

    fn finish(&mut self, group: PendingGroup<'_>) {
        let found = group.options.len();
        let resolution = match resolve(&group.options, &group.hint) {
            Some(resolution) if found >= MIN_OPTIONS => resolution,
            _ => {
                self.skip(group.line, SkipReason::TooFewOptions { found });
                return;
            }
        };
        tracing::trace!(
            line = group.line,
            hint = %group.hint,
            kind = ?resolution.kind,
            "resolved answer"
        );
        let correct_answer = resolution.answer.to_string();

        self.questions.push(Question {
            id: self.questions.len(),
            question: group.question.to_string(),
            options: group.options,
            correct_answer,
        });
    }
}

/// A trimmed, non-empty transcript line.
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    number: usize,
    text: &'a str,
}

fn significant_lines(text: &str) -> Vec<Line<'_>> {
    text.lines()
        .enumerate()
        .map(|(i, raw)| Line {
            number: i + 1,
            text: trim_line(raw),
        })
        .filter(|l| !l.text.is_empty())
        .collect()
}

/// Trims whitespace and byte-order marks, which editors leave on the first line.
fn trim_line(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

enum LineKind<'a> {
    Noise,
    OptionLikeQuestion,
    Header { hint: String, question: &'a str },
}

fn classify<'a>(line: &Line<'a>, next: Option<&Line<'a>>) -> LineKind<'a> {
    if is_section_header(line.text) || !has_answer_marker(line.text) {
        return LineKind::Noise;
    }
    let Some(next) = next else {
        return LineKind::Noise;
    };
    if OPTION_LIKE.is_match(next.text) {
        return LineKind::OptionLikeQuestion;
    }
    LineKind::Header {
        hint: answer_hint(line.text),
        question: next.text,
    }
}

fn is_section_header(line: &str) -> bool {
    line.get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("TEST "))
}

fn has_answer_marker(line: &str) -> bool {
    line.contains(" - ") || line.contains(" – ")
}

/// A line inside an option block that belongs to the next group instead.
fn ends_option_block(line: &str) -> bool {
    (line.contains(" - ") && line.contains('?')) || is_section_header(line)
}

/// The free-text clue before the first dash, without its numbering.
fn answer_hint(header: &str) -> String {
    let before_dash = HEADER_SPLIT.split(header).next().unwrap_or_default().trim();
    NUMBERING.replace(before_dash, "").trim().to_string()
}

fn clean_option(line: &str) -> Option<String> {
    let cleaned = OPTION_LABEL.replace(line, "");
    let cleaned = cleaned.trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}
