use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use faqbot::{FaqBotConfig, FaqEngine, build_engine, load_faqs_from_path};
use tracing_subscriber::EnvFilter;

/// Answer questions from an FAQ file.
#[derive(Debug, Parser)]
#[command(name = "faqbot", version, about)]
struct Cli {
    /// JSON file with an array of {"question", "answer"} objects
    #[arg(long, value_name = "PATH", conflicts_with = "config")]
    faqs: Option<PathBuf>,

    /// YAML configuration file (thresholds, messages, FAQ path)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print compact JSON instead of pretty JSON
    #[arg(long)]
    compact: bool,

    /// Question to answer; reads one question per line from stdin when omitted
    question: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = load_engine(&cli)?;

    if !cli.question.is_empty() {
        let question = cli.question.join(" ");
        return print_answer(&engine, &question, cli.compact);
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read question from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        print_answer(&engine, &line, cli.compact)?;
    }
    Ok(())
}

fn load_engine(cli: &Cli) -> Result<FaqEngine> {
    if let Some(path) = &cli.faqs {
        let faqs = load_faqs_from_path(path)
            .with_context(|| format!("failed to load FAQs from {}", path.display()))?;
        return Ok(FaqEngine::new(faqs));
    }

    let config = match &cli.config {
        Some(path) => FaqBotConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => FaqBotConfig::default(),
    };
    build_engine(&config).context("failed to build engine")
}

fn print_answer(engine: &FaqEngine, question: &str, compact: bool) -> Result<()> {
    let result = engine.query(question);
    let json = if compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
