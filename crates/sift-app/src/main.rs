//! Sift - classify text into sensitive data categories.
//!
//! Classifies each text given on the command line (or read from stdin) and
//! prints the category, confidence and explanation. Without input it runs
//! over a handful of built-in samples.

use std::io::{self, BufRead};

use anyhow::Context;
use clap::Parser;
use sift_core::{ClassificationResult, ClassifierConfig, SensitiveDataClassifier};
use tracing_subscriber::EnvFilter;

/// Texts classified when no input is given.
const SAMPLE_TEXTS: &[&str] = &[
    "Employee SSN: 123-45-6789, Name: John Doe",
    "Company financial report: Q3 revenue $1.2M",
    "Patient diagnosis: Diabetes Type 2",
    "This is a public news article about weather.",
    "Technical specifications for export-restricted software",
];

/// Sift - sensitive data classifier
#[derive(Parser, Debug)]
#[command(name = "sift", version, about)]
struct Args {
    /// Texts to classify (defaults to built-in samples)
    texts: Vec<String>,

    /// Read texts from stdin, one per line
    #[arg(long)]
    stdin: bool,

    /// Print one JSON object per result
    #[arg(long)]
    json: bool,

    /// Override the model identifier
    #[arg(long)]
    model: Option<String>,

    /// Override the sampling temperature
    #[arg(long)]
    temperature: Option<f32>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Initialize logging to stderr so results on stdout stay clean.
fn init_logging(args: &Args) {
    let log_level = if args.debug { "debug" } else { &args.log_level };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sift={0},sift_core={0},warn", log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

/// Build the classifier config from the environment plus CLI overrides.
fn build_config(args: &Args) -> sift_core::Result<ClassifierConfig> {
    let mut config = ClassifierConfig::from_env()?;
    if let Some(model) = &args.model {
        config = config.with_model(model.clone());
    }
    if let Some(temperature) = args.temperature {
        config = config.with_temperature(temperature);
    }
    config.validate()?;
    Ok(config)
}

/// Collect the texts to classify, in order.
fn collect_inputs<R: BufRead>(args: &Args, stdin: R) -> io::Result<Vec<String>> {
    let mut inputs = args.texts.clone();
    if args.stdin {
        for line in stdin.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                inputs.push(line);
            }
        }
    }
    if inputs.is_empty() {
        inputs = SAMPLE_TEXTS.iter().map(|s| s.to_string()).collect();
    }
    Ok(inputs)
}

fn render_text(input: &str, result: &ClassificationResult) -> String {
    format!(
        "\nInput Text: {}\nClassification Result:\nCategory: {}\nConfidence: {:.2}\nExplanation: {}",
        input, result.category, result.confidence, result.explanation
    )
}

fn render_json(input: &str, result: &ClassificationResult) -> serde_json::Result<String> {
    serde_json::to_string(&serde_json::json!({
        "input": input,
        "category": result.category,
        "confidence": result.confidence,
        "explanation": result.explanation,
    }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Missing file is fine, the key may come from the real environment.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e).context("Failed to load .env file");
        }
    }

    init_logging(&args);

    let config = build_config(&args).context("Invalid classifier configuration")?;
    tracing::debug!(?config, "Loaded configuration");
    let classifier = SensitiveDataClassifier::from_config(&config)?;

    let inputs = collect_inputs(&args, io::stdin().lock()).context("Failed to read stdin")?;

    for input in &inputs {
        let result = classifier.classify(input).await;
        if args.json {
            println!("{}", render_json(input, &result)?);
        } else {
            println!("{}", render_text(input, &result));
        }
    }

    Ok(())
}
