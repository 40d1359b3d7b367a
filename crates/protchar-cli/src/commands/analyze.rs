use crate::cli::{AnalyzeArgs, OutputFormat};
use crate::error::{CliError, Result};
use crate::utils::input;
use protchar::core::chem::charge;
use protchar::core::models::sequence::ProteinSequence;
use protchar::engine::descriptors::DescriptorSet;
use protchar::workflows::export;
use std::io::Write;
use tracing::info;

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let sequence = resolve_sequence(&args)?;
    info!("Analyzing sequence of length {}.", sequence.len());

    if let Some(ph) = args.ph {
        let net = charge::net_charge(&sequence, ph);
        eprintln!("Net charge at pH {ph}: {net}");
    }

    let mut sink = super::open_sink(args.output.as_deref())?;
    match args.format {
        OutputFormat::Text => {
            export::export_single(&args.name, &sequence, &mut sink)?;
        }
        OutputFormat::Json => {
            let descriptors = DescriptorSet::compute(&sequence)?;
            serde_json::to_writer_pretty(&mut sink, &descriptors)?;
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

fn resolve_sequence(args: &AnalyzeArgs) -> Result<ProteinSequence> {
    if let Some(raw) = &args.sequence {
        Ok(ProteinSequence::parse(raw)?)
    } else if let Some(path) = &args.input {
        input::read_single_sequence(path)
    } else {
        Err(CliError::Argument(
            "either a sequence or --input is required".to_string(),
        ))
    }
}
