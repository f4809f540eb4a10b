//! CLI entrypoint for math-duel
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use duel_application::{RunComparisonUseCase, TimedInvoker};
use duel_domain::{MetricsCatalog, Question};
use duel_infrastructure::{AzureOpenAiGateway, ConfigLoader, FileConfig, OllamaGateway};
use duel_presentation::{Cli, ConsoleFormatter, DashboardServer, OutputFormat, ProgressReporter};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        println!("{}", ConfigLoader::describe_sources(cli.config.as_deref()));
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    apply_overrides(&mut config, &cli);

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting math-duel");

    // === Dependency Injection ===
    // The cloud client is built once; missing credentials stop the process here.
    let cloud_config = config
        .cloud
        .resolve()
        .context("Error initializing API clients")?;
    let cloud = Arc::new(AzureOpenAiGateway::new(cloud_config)?);
    let local = Arc::new(OllamaGateway::new(config.local.to_ollama_config())?);

    let use_case = RunComparisonUseCase::new(
        Arc::new(TimedInvoker::new(cloud)),
        Arc::new(TimedInvoker::new(local)),
    )
    .with_config(config.comparison.to_comparison_config());

    // One-shot mode
    if let Some(question) = cli.question {
        let question = Question::try_from(question)?;

        let result = if cli.quiet || cli.output == OutputFormat::Json {
            use_case.execute(&question).await
        } else {
            let progress = ProgressReporter::new();
            use_case.execute_with_progress(&question, &progress).await
        };

        let output = match cli.output {
            OutputFormat::Full => ConsoleFormatter::format(&result),
            OutputFormat::Json => ConsoleFormatter::format_json(&result),
        };
        println!("{}", output);
        return Ok(());
    }

    // Dashboard mode
    let server = DashboardServer::new(
        config.server.host.clone(),
        config.server.port,
        Arc::new(use_case),
        Arc::new(MetricsCatalog::builtin()),
    );
    if !cli.quiet {
        println!("Math Model Evaluation Dashboard: http://{}", server.address());
    }
    server.run().await?;

    Ok(())
}

/// Command-line flags take precedence over every configuration source
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(mode) = cli.mode {
        config.comparison.mode = mode.into();
    }
}
