use anyhow::{Context, Result};
use clap::Parser;
use influxql_token::config::{InspectorConfig, OutputFormat};
use influxql_token::inspect::{
    keyword_listing, resolve_line, resolve_words, token_listing, Resolution,
};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Shows how InfluxQL identifier text resolves to tokens.
#[derive(Parser)]
#[command(name = "influxql-tokens", version)]
struct Cli {
    /// JSON config file (defaults to ./influxql_tokens.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print one JSON object per word
    #[arg(long)]
    json: bool,

    /// Words to resolve; starts an interactive session when empty
    words: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut config = InspectorConfig::load(cli.config.as_deref())
        .context("failed to load inspector config")?;
    if cli.json {
        config.output = OutputFormat::Json;
    }

    if cli.words.is_empty() {
        run_interactive(&config)
    } else {
        print_lines(&render_all(&resolve_words(&cli.words), config.output)?);
        Ok(())
    }
}

fn render_all(resolutions: &[Resolution], format: OutputFormat) -> Result<Vec<String>> {
    resolutions
        .iter()
        .map(|r| r.render(format).context("failed to render resolution"))
        .collect()
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

fn run_interactive(config: &InspectorConfig) -> Result<()> {
    let rl_config = rustyline::Config::builder()
        .max_history_size(config.max_history)
        .context("invalid history size")?
        .auto_add_history(true)
        .build();
    let mut rl = DefaultEditor::with_config(rl_config).context("failed to start line editor")?;

    if let Some(path) = &config.history_file {
        if let Err(e) = rl.load_history(path) {
            log::info!("no history loaded from {}: {e}", path.display());
        }
    }

    println!("--- InfluxQL token inspector ---");
    println!("type identifiers to resolve them; .tokens, .keywords, .quit");

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => match line.trim() {
                "" => {}
                ".quit" | ".exit" => break,
                ".tokens" => print_lines(&token_listing(config.output)?),
                ".keywords" => print_lines(&keyword_listing(config.output)?),
                words => print_lines(&render_all(&resolve_line(words), config.output)?),
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("failed to read line"),
        }
    }

    if let Some(path) = &config.history_file {
        rl.save_history(path)
            .with_context(|| format!("failed to save history to {}", path.display()))?;
    }
    Ok(())
}
