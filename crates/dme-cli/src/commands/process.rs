//! Process command - extract an order from a single note and submit it.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use dme_core::extraction::RuleOrderExtractor;
use dme_core::pipeline::{OrderPipeline, RunOutcome, SkipReason};
use dme_core::sink::{HttpOrderSink, OrderSink, StdoutOrderSink};
use dme_core::source::NoteFormat;

use super::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Note file (plain text or JSON)
    #[arg(required = true)]
    input: PathBuf,

    /// Note file format (auto, text, json)
    #[arg(short, long)]
    format: Option<NoteFormat>,

    /// Intake API URL (overrides config)
    #[arg(short, long)]
    url: Option<String>,

    /// Print the order JSON instead of submitting it
    #[arg(long)]
    dry_run: bool,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = load_config(config_path)?;

    let format = args.format.unwrap_or(config.source.format);
    let source = format.open(&args.input, &config.source);
    let extractor = RuleOrderExtractor::from_config(&config.extraction)?;
    let sink: Box<dyn OrderSink> = if args.dry_run {
        Box::new(StdoutOrderSink)
    } else {
        Box::new(HttpOrderSink::new(&config.api)?)
    };
    let destination = args.url.unwrap_or(config.api.url);

    info!("Processing note: {}", args.input.display());

    let pipeline = OrderPipeline::new(source, Box::new(extractor), sink, destination);
    let outcome = pipeline.run();

    debug!("Total processing time: {:?}", start.elapsed());

    match outcome {
        RunOutcome::Submitted(order) => {
            if !args.dry_run {
                eprintln!(
                    "{} Submitted {} order to {}",
                    style("✓").green(),
                    order.device,
                    pipeline.destination()
                );
            }
            Ok(())
        }
        RunOutcome::Skipped(reason) => {
            let why = match reason {
                SkipReason::NoNote => "no note content available",
                SkipReason::EmptyNote => "note is blank",
            };
            eprintln!("{} Nothing submitted: {}", style("ℹ").blue(), why);
            Ok(())
        }
        RunOutcome::Failed(e) => {
            anyhow::bail!("Failed to process physician note {}: {}", args.input.display(), e)
        }
    }
}
