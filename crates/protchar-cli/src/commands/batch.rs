use crate::cli::{BatchArgs, OutputFormat};
use crate::error::Result;
use crate::utils::input;
use crate::utils::progress::CliProgressHandler;
use protchar::engine::aggregate::AggregateDescriptors;
use protchar::engine::progress::ProgressReporter;
use protchar::workflows::export;
use std::io::Write;
use tracing::info;

pub fn run(args: BatchArgs) -> Result<()> {
    let sequences = input::read_sequence_list(&args.input)?;
    info!(
        "Loaded {} sequence(s) from {:?}.",
        sequences.len(),
        args.input
    );

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.callback());

    let mut sink = super::open_sink(args.output.as_deref())?;
    match args.format {
        OutputFormat::Text => {
            export::export_batch(&args.name, &sequences, &reporter, &mut sink)?;
        }
        OutputFormat::Json => {
            let aggregate = AggregateDescriptors::compute_with_progress(&sequences, &reporter)?;
            serde_json::to_writer_pretty(&mut sink, &aggregate)?;
            writeln!(sink)?;
        }
    }
    sink.flush()?;

    if let Some(path) = &args.output {
        info!("Report written to {:?}.", path);
        eprintln!("✓ Report written to: {}", path.display());
    }
    Ok(())
}
