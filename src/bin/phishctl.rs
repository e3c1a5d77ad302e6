//! Offline command-line front-end for the URL analysis core.
//!
//! Runs the same pipeline as the HTTP service without starting a server,
//! which is handy for inspecting a suspicious link or debugging features.
//!
//! # Usage
//!
//! ```bash
//! # Show the normalized form and its components
//! cargo run --bin phishctl -- normalize " example.com "
//! cargo run --bin phishctl -- parse "https://[2001:db8::1]/x"
//!
//! # Feature vectors as JSON lines
//! cargo run --bin phishctl -- features example.com secure-login.example.tk
//!
//! # Domain tokens
//! cargo run --bin phishctl -- tokens sub.example.com
//!
//! # Color-coded heuristics
//! cargo run --bin phishctl -- explain secure-login.example.tk --trusted config/trusted_domains.json
//!
//! # Full prediction with a model
//! cargo run --bin phishctl -- predict example.com --model model/phishing_model.json
//! ```

use phishing_detector::analysis::{self, DEFAULT_THRESHOLD};
use phishing_detector::domain::entities::{HeuristicReport, HeuristicValue, Severity};
use phishing_detector::domain::{Classifier, TrustedDomains, ValidTlds};
use phishing_detector::infrastructure::model::LogisticModel;
use phishing_detector::infrastructure::references::{read_trusted_domains, read_valid_tlds};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

/// CLI tool for analysing URLs.
#[derive(Parser)]
#[command(name = "phishctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Print the normalized URL
    Normalize { url: String },

    /// Print URL components as JSON
    Parse { url: String },

    /// Print one feature vector per URL as JSON lines
    Features {
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Print domain tokens, one line per URL
    Tokens {
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Show color-coded heuristic signals
    Explain {
        url: String,

        /// Trusted domains file (`{"trusted_domains": [...]}`)
        #[arg(short, long)]
        trusted: Option<PathBuf>,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Classify a URL with a model file
    Predict {
        url: String,

        /// Model weights file
        #[arg(short, long)]
        model: PathBuf,

        /// Trusted domains file (`{"trusted_domains": [...]}`)
        #[arg(short, long)]
        trusted: Option<PathBuf>,

        /// IANA-format TLD list (built-in fallback when omitted)
        #[arg(long)]
        tlds: Option<PathBuf>,

        /// Decision threshold
        #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { url } => {
            println!("{}", analysis::normalize_url(&url));
        }
        Commands::Parse { url } => {
            let components = analysis::parse_url(&url);
            println!("{}", serde_json::to_string_pretty(&components)?);
        }
        Commands::Features { urls } => {
            for features in analysis::extract_features_batch(&urls) {
                println!("{}", serde_json::to_string(&features)?);
            }
        }
        Commands::Tokens { urls } => {
            for tokens in analysis::tokenize_batch(&urls) {
                println!("{tokens}");
            }
        }
        Commands::Explain { url, trusted, json } => {
            let trusted = load_trusted(trusted)?;
            let report = analysis::explain(&url, &trusted);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&analysis::normalize_url(&url), &report);
            }
        }
        Commands::Predict {
            url,
            model,
            trusted,
            tlds,
            threshold,
        } => predict(&url, model, trusted, tlds, threshold)?,
    }

    Ok(())
}

fn load_trusted(path: Option<PathBuf>) -> Result<TrustedDomains> {
    match path {
        Some(path) => read_trusted_domains(&path)
            .with_context(|| format!("Failed to load trusted domains from {}", path.display())),
        None => Ok(TrustedDomains::default()),
    }
}

/// Runs guards, model and decision, printing the verdict.
fn predict(
    url: &str,
    model_path: PathBuf,
    trusted: Option<PathBuf>,
    tlds: Option<PathBuf>,
    threshold: f64,
) -> Result<()> {
    if !(0.0..=1.0).contains(&threshold) {
        anyhow::bail!("Threshold must be between 0 and 1, got {threshold}");
    }

    let model = LogisticModel::from_path(&model_path)
        .with_context(|| format!("Failed to load model from {}", model_path.display()))?;
    let trusted = load_trusted(trusted)?;
    let tlds = match tlds {
        Some(path) => read_valid_tlds(&path)
            .with_context(|| format!("Failed to load TLD list from {}", path.display()))?,
        None => ValidTlds::fallback(),
    };

    let url = analysis::normalize_url(url);
    analysis::guard(&url, &tlds).with_context(|| format!("Rejected {url}"))?;

    let features = analysis::extract_features(&url);
    let tokens = analysis::tokenize(&url);
    let probability = model.predict_proba(&features, &tokens)?;
    let decision = analysis::decide(&url, probability, threshold, &trusted);

    let verdict = match decision.predicted_label {
        1 => "PHISHING".red().bold(),
        _ => "SAFE".green().bold(),
    };

    println!("{}", "🔎 Prediction".bright_blue().bold());
    println!();
    println!("  URL:         {}", url.cyan());
    println!("  Verdict:     {}", verdict);
    println!("  Probability: {:.4}", decision.probability);
    println!("  Threshold:   {}", decision.threshold);
    if decision.trusted {
        println!("  {}", "Trusted domain (verdict forced to safe)".green());
    }
    println!();

    Ok(())
}

/// Prints the heuristic report as an aligned table.
fn print_report(url: &str, report: &HeuristicReport) {
    println!("{}", "🔎 Heuristic signals".bright_blue().bold());
    println!("  {}", url.cyan());
    println!();
    println!(
        "  {:<26} {:<30} {}",
        "Feature".bright_white().bold(),
        "Value".bright_white().bold(),
        "Severity".bright_white().bold()
    );
    println!("  {}", "─".repeat(66).bright_black());

    for entry in &report.entries {
        let value = format_value(&entry.value);
        let severity = match entry.color {
            Severity::Green => entry.color.as_str().green(),
            Severity::Yellow => entry.color.as_str().yellow(),
            Severity::Red => entry.color.as_str().red().bold(),
        };
        println!("  {:<26} {:<30} {}", entry.feature, value, severity);
    }

    println!();
    println!(
        "  {} red, {} yellow, {} green",
        report.count(Severity::Red).to_string().red(),
        report.count(Severity::Yellow).to_string().yellow(),
        report.count(Severity::Green).to_string().green()
    );
}

fn format_value(value: &HeuristicValue) -> String {
    match value {
        HeuristicValue::Count(n) => n.to_string(),
        HeuristicValue::Score(x) => format!("{x:.3}"),
        HeuristicValue::Flag(b) => b.to_string(),
        HeuristicValue::Matches(items) if items.is_empty() => "-".to_string(),
        HeuristicValue::Matches(items) => items.join(", "),
        HeuristicValue::Text(s) if s.is_empty() => "-".to_string(),
        HeuristicValue::Text(s) => s.clone(),
    }
}
