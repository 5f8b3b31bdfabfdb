use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use config::{Config, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

use extractors::EntityExtractor;
use fraudlens::{ingest, AnomalyDetector, TimezoneAnomalyDetector, TransactionAnomalyDetector};
use shared_types::Detector;

#[derive(Parser, Debug)]
#[command(name = "scan", about = "Scan narrative text for candidate fraud indicators")]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .args(["text", "file"]),
))]
struct Cli {
    /// Raw text chunk to analyze
    #[arg(long, group = "input")]
    text: Option<String>,

    /// Path to a plain-text document
    #[arg(long, value_name = "PATH", group = "input")]
    file: Option<PathBuf>,

    /// Optional TOML config with detection overrides
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Deserialize, Default)]
struct ScanConfig {
    detection: Option<DetectionConfig>,
    /// Location -> IANA zone identifier overrides, replacing the
    /// built-in financial-center mapping when present.
    timezones: Option<HashMap<String, String>>,
}

#[derive(Debug, Deserialize, Default)]
struct DetectionConfig {
    threshold_amount: Option<f64>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_scan_config(path)
            .with_context(|| format!("Failed to load scan config at {path:?}"))?,
        None => ScanConfig::default(),
    };

    let chunk = match (&cli.text, &cli.file) {
        (Some(text), None) => text.clone(),
        (None, Some(path)) => {
            if !ingest::supports(path) {
                anyhow::bail!(
                    "Unsupported document format at {:?}; supported extensions: {}",
                    path,
                    ingest::supported_extensions().join(", ")
                );
            }
            ingest::extract_text(path)
                .with_context(|| format!("Failed to extract text from {path:?}"))?
        }
        _ => unreachable!("clap enforces exactly one input"),
    };

    let engine = build_engine(&config);
    let anomalies = engine.process(&chunk);

    let output = if cli.pretty {
        serde_json::to_string_pretty(&anomalies)?
    } else {
        serde_json::to_string(&anomalies)?
    };
    println!("{output}");
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_scan_config(path: &PathBuf) -> Result<ScanConfig> {
    let builder = Config::builder()
        .add_source(File::from(path.clone()))
        .build()?;
    Ok(builder.try_deserialize()?)
}

fn build_engine(config: &ScanConfig) -> AnomalyDetector {
    let timezone_detector = match &config.timezones {
        Some(mapping) => TimezoneAnomalyDetector::with_mapping(mapping.clone()),
        None => TimezoneAnomalyDetector::new(),
    };

    let threshold = config
        .detection
        .as_ref()
        .and_then(|d| d.threshold_amount)
        .unwrap_or(fraudlens::transaction::DEFAULT_AMOUNT_THRESHOLD);
    let transaction_detector = TransactionAnomalyDetector::with_threshold(threshold);

    let detectors: Vec<Box<dyn Detector + Send + Sync>> =
        vec![Box::new(timezone_detector), Box::new(transaction_detector)];
    AnomalyDetector::with_detectors(EntityExtractor::new(), detectors)
}
