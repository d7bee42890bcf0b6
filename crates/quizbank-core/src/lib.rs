//! quizbank-core — Transcript parsing, sampling, and scoring.
//!
//! This crate turns loosely structured quiz transcripts into a typed
//! question bank, draws quiz attempts from it, and grades user answers.

pub mod bank;
pub mod error;
pub mod model;
pub mod parser;
pub mod resolve;
pub mod sampler;
pub mod scoring;
pub mod shuffle;
