use super::descriptors::DescriptorSet;
use super::progress::{Progress, ProgressReporter};
use crate::core::chem::composition::{AnalysisError, Dipeptide};
use crate::core::models::residue::Residue;
use crate::core::models::sequence::ProteinSequence;
use crate::core::properties::ResidueClass;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("cannot aggregate an empty sequence batch")]
    Empty,

    #[error("sequence {index} in the batch cannot be analyzed: {source}")]
    Member {
        index: usize,
        source: AnalysisError,
    },
}

/// Arithmetic mean of a per-sequence metric over a batch. The metric is any
/// pure function of the sequence, so one reducer serves every scalar the
/// engine knows about instead of one bespoke average per metric.
pub fn batch_mean<F>(sequences: &[ProteinSequence], metric: F) -> Result<f64, BatchError>
where
    F: Fn(&ProteinSequence) -> f64,
{
    if sequences.is_empty() {
        return Err(BatchError::Empty);
    }
    let total: f64 = sequences.iter().map(metric).sum();
    Ok(total / sequences.len() as f64)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassAverages {
    pub count: f64,
    pub fraction: f64,
}

/// Means of every per-sequence descriptor across a batch, tables averaged
/// per key. Computed fresh for every call; combining order cannot matter
/// because the reduction is a plain sum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateDescriptors {
    pub sequence_count: usize,
    pub mean_length: f64,
    pub mean_molecular_weight: f64,
    pub mean_net_charge: f64,
    /// Mean of each sequence's own isoelectric pH list, averaged across the
    /// batch.
    pub mean_isoelectric_point: f64,
    pub mean_net_hydrophobicity: f64,
    pub positively_charged: ClassAverages,
    pub negatively_charged: ClassAverages,
    pub hydrophobic: ClassAverages,
    pub hydrophilic: ClassAverages,
    pub aliphatic: ClassAverages,
    pub aromatic: ClassAverages,
    pub residue_occurrence: BTreeMap<Residue, f64>,
    pub residue_composition: BTreeMap<Residue, f64>,
    pub pair_occurrence: BTreeMap<Dipeptide, f64>,
    pub pair_composition: BTreeMap<Dipeptide, f64>,
}

impl AggregateDescriptors {
    pub fn compute(sequences: &[ProteinSequence]) -> Result<Self, BatchError> {
        Self::compute_with_progress(sequences, &ProgressReporter::new())
    }

    pub fn compute_with_progress(
        sequences: &[ProteinSequence],
        reporter: &ProgressReporter,
    ) -> Result<Self, BatchError> {
        if sequences.is_empty() {
            return Err(BatchError::Empty);
        }

        reporter.report(Progress::BatchStart {
            total_sequences: sequences.len() as u64,
        });

        let mut sets = Vec::with_capacity(sequences.len());
        for (index, sequence) in sequences.iter().enumerate() {
            let set = DescriptorSet::compute(sequence)
                .map_err(|source| BatchError::Member { index, source })?;
            reporter.report(Progress::SequenceAnalyzed);
            sets.push(set);
        }
        reporter.report(Progress::BatchFinish);
        debug!(sequences = sets.len(), "batch descriptor computation done");

        let class_averages = |class| ClassAverages {
            count: mean_of(&sets, |set| set.class(class).count as f64),
            fraction: mean_of(&sets, |set| set.class(class).fraction),
        };

        Ok(Self {
            sequence_count: sets.len(),
            mean_length: mean_of(&sets, |set| set.length as f64),
            mean_molecular_weight: mean_of(&sets, |set| set.molecular_weight),
            mean_net_charge: mean_of(&sets, |set| set.net_charge),
            mean_isoelectric_point: mean_of(&sets, |set| set.isoelectric_point.mean()),
            mean_net_hydrophobicity: mean_of(&sets, |set| set.net_hydrophobicity),
            positively_charged: class_averages(ResidueClass::PositivelyCharged),
            negatively_charged: class_averages(ResidueClass::NegativelyCharged),
            hydrophobic: class_averages(ResidueClass::Hydrophobic),
            hydrophilic: class_averages(ResidueClass::Hydrophilic),
            aliphatic: class_averages(ResidueClass::Aliphatic),
            aromatic: class_averages(ResidueClass::Aromatic),
            residue_occurrence: mean_count_table(&sets, |set| &set.residue_occurrence),
            residue_composition: mean_value_table(&sets, |set| &set.residue_composition),
            pair_occurrence: mean_count_table(&sets, |set| &set.pair_occurrence),
            pair_composition: mean_value_table(&sets, |set| &set.pair_composition),
        })
    }

    pub fn class(&self, class: ResidueClass) -> ClassAverages {
        match class {
            ResidueClass::PositivelyCharged => self.positively_charged,
            ResidueClass::NegativelyCharged => self.negatively_charged,
            ResidueClass::Hydrophobic => self.hydrophobic,
            ResidueClass::Hydrophilic => self.hydrophilic,
            ResidueClass::Aliphatic => self.aliphatic,
            ResidueClass::Aromatic => self.aromatic,
        }
    }
}

fn mean_of<F>(sets: &[DescriptorSet], value: F) -> f64
where
    F: Fn(&DescriptorSet) -> f64,
{
    sets.iter().map(value).sum::<f64>() / sets.len() as f64
}

fn mean_count_table<K, F>(sets: &[DescriptorSet], table: F) -> BTreeMap<K, f64>
where
    K: Ord + Copy,
    F: Fn(&DescriptorSet) -> &BTreeMap<K, usize>,
{
    let mut means: BTreeMap<K, f64> = BTreeMap::new();
    for set in sets {
        for (&key, &count) in table(set) {
            *means.entry(key).or_insert(0.0) += count as f64;
        }
    }
    let n = sets.len() as f64;
    means.values_mut().for_each(|total| *total /= n);
    means
}

fn mean_value_table<K, F>(sets: &[DescriptorSet], table: F) -> BTreeMap<K, f64>
where
    K: Ord + Copy,
    F: Fn(&DescriptorSet) -> &BTreeMap<K, f64>,
{
    let mut means: BTreeMap<K, f64> = BTreeMap::new();
    for set in sets {
        for (&key, &value) in table(set) {
            *means.entry(key).or_insert(0.0) += value;
        }
    }
    let n = sets.len() as f64;
    means.values_mut().for_each(|total| *total /= n);
    means
}
