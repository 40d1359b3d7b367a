use crate::core::models::sequence::ProteinSequence;
use crate::core::properties::{self, ResidueClass};

// Mass of the water molecule lost when two residues condense.
const WATER_MASS: f64 = 18.0;

/// Average molecular weight in Daltons: the sum of residue masses minus one
/// water per peptide bond formed.
pub fn molecular_weight(sequence: &ProteinSequence) -> f64 {
    let residue_mass: f64 = sequence.iter().map(properties::average_mass).sum();
    residue_mass - WATER_MASS * (sequence.len() - 1) as f64
}

/// Net Kyte-Doolittle hydrophobicity: the plain sum of per-residue scores.
pub fn net_hydrophobicity(sequence: &ProteinSequence) -> f64 {
    sequence.iter().map(properties::kyte_doolittle).sum()
}

pub fn class_count(sequence: &ProteinSequence, class: ResidueClass) -> usize {
    sequence.iter().filter(|&residue| class.contains(residue)).count()
}

/// Share of the sequence belonging to the class, as a fraction of length.
pub fn class_fraction(sequence: &ProteinSequence, class: ResidueClass) -> f64 {
    class_count(sequence, class) as f64 / sequence.len() as f64
}
