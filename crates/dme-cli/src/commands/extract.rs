//! Extract command - print the order for a note without submitting it.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use dme_core::extraction::{NoteParser, RuleOrderExtractor};
use dme_core::source::{InlineNoteSource, NoteFormat, NoteSource};
use dme_core::ExtractionError;

use super::load_config;

/// Arguments for the extract command.
///
/// A missing or blank note prints nothing and exits successfully, the same
/// way `dme process` skips it.
#[derive(Args)]
pub struct ExtractArgs {
    /// Note file (plain text or JSON)
    #[arg(required_unless_present = "note", conflicts_with = "note")]
    input: Option<PathBuf>,

    /// Note text given directly
    #[arg(short, long)]
    note: Option<String>,

    /// Note file format (auto, text, json)
    #[arg(short, long)]
    format: Option<NoteFormat>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the order JSON
    #[arg(long)]
    pretty: bool,

    /// Report fields that fell back to defaults and the extraction time
    #[arg(long)]
    show_warnings: bool,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let source: Box<dyn NoteSource> = match (&args.note, &args.input) {
        (Some(note), _) => Box::new(InlineNoteSource::new(note.clone())),
        (None, Some(input)) => args
            .format
            .unwrap_or(config.source.format)
            .open(input, &config.source),
        (None, None) => anyhow::bail!("Either a note file or --note is required"),
    };

    let Some(note) = source.read_note()?.filter(|n| !n.is_empty()) else {
        return nothing_extracted("no note content available");
    };

    let extractor = RuleOrderExtractor::from_config(&config.extraction)?;
    let result = match extractor.parse(&note) {
        Ok(result) => result,
        Err(ExtractionError::EmptyNote) => return nothing_extracted("note is blank"),
        Err(e) => return Err(e.into()),
    };

    let output = if args.pretty {
        result.order.to_json_pretty()?
    } else {
        result.order.to_json()?
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_warnings {
        if !result.warnings.is_empty() {
            eprintln!("{}", style("Extraction warnings:").yellow());
            for warning in &result.warnings {
                eprintln!("  - {}", warning);
            }
        }
        eprintln!("Extraction time: {}ms", result.processing_time_ms);
    }

    Ok(())
}

fn nothing_extracted(why: &str) -> anyhow::Result<()> {
    eprintln!("{} Nothing extracted: {}", style("ℹ").blue(), why);
    Ok(())
}
