use crate::core::models::residue::Residue;
use crate::core::models::sequence::ProteinSequence;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("dipeptide composition is undefined for a single-residue sequence")]
    PairCompositionUndefined,
}

/// An ordered two-residue combination, e.g. `AC`. 441 distinct values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dipeptide(pub Residue, pub Residue);

impl Dipeptide {
    /// Every ordered pair over the 21-letter alphabet, in table order.
    pub fn all() -> impl Iterator<Item = Dipeptide> {
        Residue::ALL
            .into_iter()
            .flat_map(|first| Residue::ALL.into_iter().map(move |second| Dipeptide(first, second)))
    }
}

impl fmt::Display for Dipeptide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0.code(), self.1.code())
    }
}

impl Serialize for Dipeptide {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Count of each alphabet member in the sequence. The table always carries
/// all 21 keys, absent residues at zero, and is built fresh per call.
pub fn residue_occurrence(sequence: &ProteinSequence) -> BTreeMap<Residue, usize> {
    let mut table: BTreeMap<Residue, usize> =
        Residue::ALL.into_iter().map(|residue| (residue, 0)).collect();
    for residue in sequence.iter() {
        *table.entry(residue).or_insert(0) += 1;
    }
    table
}

/// Occurrence normalized to a percentage of the sequence length.
pub fn residue_composition(sequence: &ProteinSequence) -> BTreeMap<Residue, f64> {
    let length = sequence.len() as f64;
    residue_occurrence(sequence)
        .into_iter()
        .map(|(residue, count)| (residue, count as f64 * 100.0 / length))
        .collect()
}

/// Count of every ordered residue pair among the overlapping 2-mers of the
/// sequence. All 441 keys are always present. Counting walks the 2-mer
/// windows directly, so runs of identical residues are counted per overlap
/// ("AAA" holds two "AA" pairs).
pub fn pair_occurrence(sequence: &ProteinSequence) -> BTreeMap<Dipeptide, usize> {
    let mut table: BTreeMap<Dipeptide, usize> =
        Dipeptide::all().map(|pair| (pair, 0)).collect();
    for window in sequence.residues().windows(2) {
        *table.entry(Dipeptide(window[0], window[1])).or_insert(0) += 1;
    }
    table
}

/// Pair occurrence normalized by the 2-mer count (length - 1), as a
/// percentage. Fails for single-residue sequences, where no 2-mer exists.
pub fn pair_composition(
    sequence: &ProteinSequence,
) -> Result<BTreeMap<Dipeptide, f64>, AnalysisError> {
    if sequence.len() < 2 {
        return Err(AnalysisError::PairCompositionUndefined);
    }
    let two_mers = (sequence.len() - 1) as f64;
    Ok(pair_occurrence(sequence)
        .into_iter()
        .map(|(pair, count)| (pair, count as f64 * 100.0 / two_mers))
        .collect())
}
