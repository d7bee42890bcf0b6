//! quizbank CLI — build, inspect, sample, and grade quiz banks.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "quizbank", version, about = "Multiple-choice quiz bank builder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a plain-text transcript into a JSON question bank
    Parse {
        /// Transcript text file
        #[arg(long)]
        input: PathBuf,

        /// Where to write the bank JSON
        #[arg(long, default_value = "quiz.json")]
        output: PathBuf,
    },

    /// Check a JSON question bank for broken records
    Validate {
        /// Bank JSON file
        #[arg(long)]
        bank: PathBuf,
    },

    /// Draw a random quiz attempt from a bank
    Sample {
        /// Bank JSON file
        #[arg(long)]
        bank: PathBuf,

        /// Number of questions (default from config)
        #[arg(long)]
        count: Option<usize>,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        /// Write the attempt here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Grade answers against a bank or a sampled attempt
    Grade {
        /// Bank or attempt JSON file
        #[arg(long)]
        bank: PathBuf,

        /// JSON object mapping question id to the chosen option
        #[arg(long)]
        answers: PathBuf,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Create a starter config file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizbank=info".parse().expect("static directive"))
                .add_directive("quizbank_core=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { input, output } => commands::parse::execute(input, output),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Sample {
            bank,
            count,
            seed,
            output,
            config,
        } => commands::sample::execute(bank, count, seed, output, config),
        Commands::Grade {
            bank,
            answers,
            format,
        } => commands::grade::execute(bank, answers, format),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
