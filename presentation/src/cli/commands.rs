//! CLI command definitions

use clap::{Parser, ValueEnum};
use duel_domain::ExecutionMode;
use std::path::PathBuf;

/// Output format for a one-shot comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Both answers side by side with timings
    Full,
    /// JSON output
    Json,
}

/// Scheduling of the two model calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Local model runs after the hosted model returns
    Sequential,
    /// Both models run at once
    Concurrent,
}

impl From<ModeArg> for ExecutionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Sequential => ExecutionMode::Sequential,
            ModeArg::Concurrent => ExecutionMode::Concurrent,
        }
    }
}

/// CLI arguments for math-duel
#[derive(Parser, Debug)]
#[command(name = "math-duel")]
#[command(author, version, about = "Compare a hosted LLM and a local LLM on mathematics questions")]
#[command(long_about = r#"
math-duel puts the same mathematics question to a hosted model (Azure OpenAI)
and to a small local model (Ollama) and shows both answers with their latency.

Without a question it serves the evaluation dashboard:
  - Subject Performance: scores of both models per subject
  - Detailed Analysis: per-metric tables and charts
  - Try Models: ask both models a question live

Configuration files are loaded from (in priority order):
1. MATH_DUEL_* environment variables
2. --config <path>      Explicit config file
3. ./math-duel.toml     Project-level config
4. ~/.config/math-duel/config.toml   Global config

Cloud credentials are read from AZURE_ENDPOINT, API_KEY and API_VERSION.

Example:
  math-duel                          # serve the dashboard on 127.0.0.1:8501
  math-duel --port 9000 --mode concurrent
  math-duel "What is the derivative of x^3 + 2x?"
"#)]
pub struct Cli {
    /// Ask this question once and print both answers instead of serving
    pub question: Option<String>,

    /// Address to bind the dashboard server to
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port for the dashboard server
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// How to schedule the two model calls
    #[arg(long, value_enum, value_name = "MODE")]
    pub mode: Option<ModeArg>,

    /// Output format for a one-shot question
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
