//! Extract command - parse a single OCR text file into a record.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use cardex_core::extract::{CardParser, ExtractionResult, HeuristicCardParser};
use cardex_core::models::config::CardexConfig;
use cardex_core::models::record::ExtractionRecord;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input text file with OCR output (use "-" for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Echo the raw input text before the record
    #[arg(long)]
    show_raw: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let text = read_input(&args.input)?;
    info!("Read {} characters from {}", text.len(), args.input.display());

    let parser =
        HeuristicCardParser::new().with_service_fallback(config.extraction.service_fallback);
    let result = parser.parse(&text);

    if args.show_raw {
        println!("{}", style("Raw text:").bold());
        println!("{}", result.raw_text.trim_end());
        println!();
    }

    report_warnings(&result);

    let output = format_record(&result.record, args.format)?;
    match &args.output {
        Some(path) => {
            fs::write(path, &output)?;
            println!("{} Record written to {}", style("✓").green(), path.display());
        }
        None => println!("{}", output),
    }

    Ok(())
}

pub fn load_config(config_path: Option<&str>) -> anyhow::Result<CardexConfig> {
    match config_path {
        Some(path) => Ok(CardexConfig::from_file(std::path::Path::new(path))?),
        None => Ok(CardexConfig::default()),
    }
}

fn read_input(input: &PathBuf) -> anyhow::Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }
    Ok(fs::read_to_string(input)?)
}

fn report_warnings(result: &ExtractionResult) {
    for warning in &result.warnings {
        eprintln!("{} {}", style("⚠").yellow(), warning);
    }
}

/// Format a record in the requested output format.
pub fn format_record(record: &ExtractionRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(record.fields().iter().map(|(label, _)| *label))?;
            writer.write_record(record.fields().iter().map(|(_, value)| *value))?;
            Ok(String::from_utf8(writer.into_inner()?)?)
        }
        OutputFormat::Text => {
            let lines: Vec<String> = record
                .fields()
                .iter()
                .map(|(label, value)| format!("{:<16} {}", format!("{}:", label), value))
                .collect();
            Ok(lines.join("\n"))
        }
    }
}
