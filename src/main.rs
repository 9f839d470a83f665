use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use promptsmith_cli::{
    Report, display_banner, format_analysis, format_rewrite, print_help, read_prompt_line,
};
use promptsmith_core::OptimizerConfig;
use promptsmith_engine::{Optimizer, PromptAnalyzer};
use promptsmith_gemini::GeminiClient;

#[derive(Parser)]
#[command(name = "promptsmith")]
#[command(
    about = "Scores LLM prompts and rewrites them into a more effective form",
    long_about = None
)]
struct Cli {
    /// Prompt to analyze; read from stdin when omitted
    prompt: Option<String>,

    /// Read the prompt from a file
    #[arg(short, long, conflicts_with = "prompt")]
    file: Option<PathBuf>,

    /// Print a JSON report instead of the colored one
    #[arg(long)]
    json: bool,

    /// Only analyze, do not rewrite
    #[arg(long)]
    analyze_only: bool,

    /// Enable remote rewriting (needs GEMINI_API_KEY)
    #[arg(long, conflicts_with = "local")]
    remote: bool,

    /// Never call the remote rewriter
    #[arg(long)]
    local: bool,

    /// Model to try, in order; repeat to build a fallback list
    #[arg(short, long = "model")]
    models: Vec<String>,

    /// Per-call timeout for the remote rewriter, in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

struct Session {
    analyzer: PromptAnalyzer,
    optimizer: Optimizer,
    json: bool,
    analyze_only: bool,
}

impl Session {
    async fn process(&self, prompt: &str) -> Result<()> {
        let analysis = self.analyzer.analyze(prompt);
        let rewrite = if self.analyze_only {
            None
        } else {
            Some(self.optimizer.optimize(prompt, &analysis).await)
        };

        if self.json {
            println!("{}", Report::new(prompt, &analysis, rewrite.as_ref()).to_json()?);
            return Ok(());
        }

        print!("{}", format_analysis(&analysis));
        if let Some(rewrite) = &rewrite {
            println!();
            println!("{}", format_rewrite(rewrite));
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    let mut optimizer = Optimizer::new(config.clone());
    if let Some(provider) = build_provider(&config) {
        optimizer = optimizer.with_provider(provider);
    }

    let session = Session {
        analyzer: PromptAnalyzer::new(),
        optimizer,
        json: cli.json,
        analyze_only: cli.analyze_only,
    };

    if let Some(prompt) = cli.prompt.as_deref() {
        return session.process(prompt).await;
    }

    if let Some(path) = &cli.file {
        let prompt = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read prompt file {}", path.display()))?;
        return session.process(prompt.trim()).await;
    }

    if !io::stdin().is_terminal() {
        let mut prompt = String::new();
        io::stdin()
            .read_to_string(&mut prompt)
            .context("failed to read prompt from stdin")?;
        return session.process(prompt.trim()).await;
    }

    // Interactive mode
    display_banner();
    if !session.optimizer.remote_available() {
        println!("{}", "Remote rewriting is off; using local rules.".dimmed());
        println!();
    }

    while let Some(input) = read_prompt_line()? {
        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "exit" | "quit" => {
                println!("{}", "Goodbye!".green());
                break;
            }
            "help" => {
                print_help();
                continue;
            }
            _ => {}
        }

        session.process(&input).await?;
        println!();
    }

    Ok(())
}

/// Environment configuration with command-line overrides applied
fn build_config(cli: &Cli) -> Result<OptimizerConfig> {
    let mut config = OptimizerConfig::from_env().context("invalid configuration")?;

    if cli.remote {
        config.remote_enabled = true;
    }
    if cli.local {
        config.remote_enabled = false;
    }
    if !cli.models.is_empty() {
        config = config.with_models(cli.models.iter().cloned());
    }
    if let Some(secs) = cli.timeout {
        anyhow::ensure!(secs > 0, "--timeout must be at least one second");
        config = config.with_timeout(Duration::from_secs(secs));
    }

    if config.remote_enabled && !config.has_valid_credential() {
        warn!("Remote rewriting is enabled but no valid Gemini API key is configured");
    }

    Ok(config)
}

fn build_provider(config: &OptimizerConfig) -> Option<Arc<GeminiClient>> {
    if !config.remote_ready() {
        return None;
    }

    match GeminiClient::from_env() {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            warn!(error = %e, "Could not create the Gemini client; using local rules");
            None
        }
    }
}
