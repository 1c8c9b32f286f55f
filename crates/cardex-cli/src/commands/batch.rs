//! Batch command - extract records from multiple OCR text files.
//!
//! Parsed records are collected into an in-process record store; named
//! records are saved, and the store can be filtered with a substring search
//! before reporting.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use cardex_core::extract::{CardParser, HeuristicCardParser};
use cardex_core::store::RecordStore;
use cardex_core::StoreError;

use super::extract::{format_record, load_config, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file records
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV of all saved records
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Save records even when no name was extracted
    #[arg(long)]
    allow_unnamed: bool,

    /// Only report saved entries matching this substring (any field)
    #[arg(short, long)]
    search: Option<String>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "text" | "ocr")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching text files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let parser =
        HeuristicCardParser::new().with_service_fallback(config.extraction.service_fallback);
    let require_name = config.store.require_name && !args.allow_unnamed;
    let mut store = RecordStore::new().with_require_name(require_name);
    let mut skipped = 0usize;

    for path in &files {
        pb.set_message(path.display().to_string());

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if args.continue_on_error => {
                warn!("Skipping {}: {}", path.display(), e);
                skipped += 1;
                pb.inc(1);
                continue;
            }
            Err(e) => {
                pb.abandon();
                return Err(e.into());
            }
        };

        let result = parser.parse(&text);
        debug!(
            "{}: {} warnings, {} ms",
            path.display(),
            result.warnings.len(),
            result.processing_time_ms
        );

        if let Some(ref output_dir) = args.output_dir {
            let output = format_record(&result.record, args.format)?;
            let file_name = output_file_name(path, args.format);
            fs::write(output_dir.join(file_name), output)?;
        }

        match store.save(result.record) {
            Ok(_) => {}
            Err(StoreError::MissingName) => {
                warn!("{}: no name extracted, not saved", path.display());
                skipped += 1;
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    // Report the store contents, optionally filtered by substring search.
    match &args.search {
        Some(term) => {
            let hits = store.search(term);
            println!(
                "{} {} of {} entries match \"{}\":",
                style("ℹ").blue(),
                hits.len(),
                store.len(),
                term
            );
            for entry in &hits {
                println!(
                    "  #{} {} — {}",
                    entry.id, entry.record.name, entry.record.business
                );
            }
        }
        None => {
            println!("Total entries: {}", store.len());
            if let Some(latest) = store.latest() {
                println!(
                    "Latest entry: {} ({})",
                    latest.record.name,
                    latest.saved_at.format("%Y-%m-%d %H:%M:%S")
                );
            }
        }
    }

    if skipped > 0 {
        println!("{} {} files skipped", style("⚠").yellow(), skipped);
    }

    if let Some(ref summary_path) = args.summary {
        write_summary(summary_path, &store)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!(
        "Processed {} files in {:.1}s",
        files.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn output_file_name(input: &std::path::Path, format: OutputFormat) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("record");
    let ext = match format {
        OutputFormat::Json => "json",
        OutputFormat::Csv => "csv",
        OutputFormat::Text => "txt",
    };
    format!("{}.{}", stem, ext)
}

fn write_summary(path: &std::path::Path, store: &RecordStore) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "id",
        "name",
        "business",
        "address",
        "contact_no",
        "product_service",
        "saved_at",
    ])?;

    for entry in store.entries() {
        writer.write_record([
            entry.id.to_string(),
            entry.record.name.clone(),
            entry.record.business.clone(),
            entry.record.address.clone(),
            entry.record.contact_no.clone(),
            entry.record.product_service.clone(),
            entry.saved_at.to_rfc3339(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
