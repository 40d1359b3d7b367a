use crate::core::chem::composition::AnalysisError;
use crate::core::models::residue::Residue;
use crate::core::models::sequence::ProteinSequence;
use crate::core::properties::ResidueClass;
use crate::engine::aggregate::{AggregateDescriptors, BatchError};
use crate::engine::descriptors::DescriptorSet;
use crate::engine::progress::ProgressReporter;
use std::io::Write;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Batch(#[from] BatchError),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Computes the descriptors of one sequence and writes the single-sequence
/// report into `sink`. Returns the descriptors for further use; the sink is
/// the only side effect.
#[instrument(skip_all, name = "export_single", fields(report = name))]
pub fn export_single<W: Write>(
    name: &str,
    sequence: &ProteinSequence,
    sink: &mut W,
) -> Result<DescriptorSet, ExportError> {
    let descriptors = DescriptorSet::compute(sequence)?;
    info!(length = descriptors.length, "descriptors computed, rendering report");
    render_single(name, &descriptors, sink)?;
    Ok(descriptors)
}

/// Computes the aggregate descriptors of a batch and writes the batch
/// report into `sink`. Per-sequence progress goes through `reporter`.
#[instrument(skip_all, name = "export_batch", fields(report = name))]
pub fn export_batch<W: Write>(
    name: &str,
    sequences: &[ProteinSequence],
    reporter: &ProgressReporter,
    sink: &mut W,
) -> Result<AggregateDescriptors, ExportError> {
    let aggregate = AggregateDescriptors::compute_with_progress(sequences, reporter)?;
    info!(
        sequences = aggregate.sequence_count,
        "aggregate descriptors computed, rendering report"
    );
    render_batch(name, &aggregate, sink)?;
    Ok(aggregate)
}

fn render_single<W: Write>(
    name: &str,
    descriptors: &DescriptorSet,
    sink: &mut W,
) -> Result<(), std::io::Error> {
    let (low, high) = descriptors.isoelectric_point.range();

    writeln!(sink, "Protein name: {name}")?;
    writeln!(sink, "Protein sequence: {}", descriptors.sequence)?;
    writeln!(sink, "Protein length: {}", descriptors.length)?;
    writeln!(
        sink,
        "Protein molecular weight: {}",
        fmt_value(descriptors.molecular_weight)
    )?;
    writeln!(
        sink,
        "Protein net charge at pH = 7: {}",
        fmt_value(descriptors.net_charge)
    )?;
    writeln!(
        sink,
        "Protein isoelectric point range: {low:.1} - {high:.1} | Mean: {}",
        fmt_value(descriptors.isoelectric_point.mean())
    )?;
    writeln!(
        sink,
        "Protein net hydrophobicity: {}",
        fmt_value(descriptors.net_hydrophobicity)
    )?;
    for class in ResidueClass::ALL {
        let breakdown = descriptors.class(class);
        writeln!(
            sink,
            "Number of {} residues: {} and their percentage: {}",
            class.label(),
            breakdown.count,
            fmt_value(breakdown.fraction)
        )?;
    }

    writeln!(sink)?;
    writeln!(sink, "AA\tOccurrence\tComposition")?;
    for residue in Residue::STANDARD {
        writeln!(
            sink,
            "{}\t{}\t{}",
            residue.code(),
            descriptors.residue_occurrence[&residue],
            fmt_value(descriptors.residue_composition[&residue])
        )?;
    }
    Ok(())
}

fn render_batch<W: Write>(
    name: &str,
    aggregate: &AggregateDescriptors,
    sink: &mut W,
) -> Result<(), std::io::Error> {
    writeln!(sink, "Protein list name: {name}")?;
    writeln!(sink, "Dataset protein count: {}", aggregate.sequence_count)?;
    writeln!(
        sink,
        "Average protein length: {}",
        fmt_value(aggregate.mean_length)
    )?;
    writeln!(
        sink,
        "Average protein molecular weight: {}",
        fmt_value(aggregate.mean_molecular_weight)
    )?;
    writeln!(
        sink,
        "Average protein net charge at pH = 7: {}",
        fmt_value(aggregate.mean_net_charge)
    )?;
    writeln!(
        sink,
        "Average protein isoelectric point: {}",
        fmt_value(aggregate.mean_isoelectric_point)
    )?;
    writeln!(
        sink,
        "Average protein hydrophobicity: {}",
        fmt_value(aggregate.mean_net_hydrophobicity)
    )?;
    for class in ResidueClass::ALL {
        let averages = aggregate.class(class);
        writeln!(
            sink,
            "Average number of {} residues: {} and their percentage: {}",
            class.label(),
            fmt_value(averages.count),
            fmt_value(averages.fraction)
        )?;
    }

    writeln!(sink)?;
    writeln!(sink, "AA\tOccurrence\tComposition")?;
    for residue in Residue::STANDARD {
        writeln!(
            sink,
            "{}\t{}\t{}",
            residue.code(),
            fmt_value(aggregate.residue_occurrence[&residue]),
            fmt_value(aggregate.residue_composition[&residue])
        )?;
    }
    Ok(())
}

// Two decimals, trailing zeros trimmed, so integral values print bare
// ("146", not "146.00") and half charges keep their fraction ("-0.5").
fn fmt_value(value: f64) -> String {
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}
