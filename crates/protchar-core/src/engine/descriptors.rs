use crate::core::chem::composition::{self, AnalysisError, Dipeptide};
use crate::core::chem::isoelectric::{self, IsoelectricPoint};
use crate::core::chem::{charge, metrics};
use crate::core::models::residue::Residue;
use crate::core::models::sequence::ProteinSequence;
use crate::core::properties::ResidueClass;
use serde::Serialize;
use std::collections::BTreeMap;

/// The reference pH at which the reported net charge is evaluated.
pub const REFERENCE_PH: f64 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassBreakdown {
    pub count: usize,
    /// Share of the sequence, as a fraction of its length.
    pub fraction: f64,
}

/// Every descriptor computed for one sequence, gathered in a single pass.
/// Value-like: owned by the caller, never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptorSet {
    pub sequence: ProteinSequence,
    pub length: usize,
    pub molecular_weight: f64,
    pub net_charge: f64,
    pub isoelectric_point: IsoelectricPoint,
    pub net_hydrophobicity: f64,
    pub positively_charged: ClassBreakdown,
    pub negatively_charged: ClassBreakdown,
    pub hydrophobic: ClassBreakdown,
    pub hydrophilic: ClassBreakdown,
    pub aliphatic: ClassBreakdown,
    pub aromatic: ClassBreakdown,
    pub residue_occurrence: BTreeMap<Residue, usize>,
    pub residue_composition: BTreeMap<Residue, f64>,
    pub pair_occurrence: BTreeMap<Dipeptide, usize>,
    pub pair_composition: BTreeMap<Dipeptide, f64>,
}

impl DescriptorSet {
    pub fn compute(sequence: &ProteinSequence) -> Result<Self, AnalysisError> {
        let breakdown = |class| ClassBreakdown {
            count: metrics::class_count(sequence, class),
            fraction: metrics::class_fraction(sequence, class),
        };

        Ok(Self {
            sequence: sequence.clone(),
            length: sequence.len(),
            molecular_weight: metrics::molecular_weight(sequence),
            net_charge: charge::net_charge(sequence, REFERENCE_PH),
            isoelectric_point: isoelectric::isoelectric_point(sequence),
            net_hydrophobicity: metrics::net_hydrophobicity(sequence),
            positively_charged: breakdown(ResidueClass::PositivelyCharged),
            negatively_charged: breakdown(ResidueClass::NegativelyCharged),
            hydrophobic: breakdown(ResidueClass::Hydrophobic),
            hydrophilic: breakdown(ResidueClass::Hydrophilic),
            aliphatic: breakdown(ResidueClass::Aliphatic),
            aromatic: breakdown(ResidueClass::Aromatic),
            residue_occurrence: composition::residue_occurrence(sequence),
            residue_composition: composition::residue_composition(sequence),
            pair_occurrence: composition::pair_occurrence(sequence),
            pair_composition: composition::pair_composition(sequence)?,
        })
    }

    pub fn class(&self, class: ResidueClass) -> ClassBreakdown {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> ProteinSequence {
        ProteinSequence::parse(s).unwrap()
    }

    #[test]
    fn compute_gathers_the_scalar_metrics() {
        let set = DescriptorSet::compute(&seq("AG")).unwrap();
        assert_eq!(set.length, 2);
        assert_eq!(set.molecular_weight, 146.0);
        assert_eq!(set.net_charge, 0.0);
        assert!((set.net_hydrophobicity - 1.4).abs() < 1e-9);
    }

    #[test]
    fn compute_fails_on_single_residue_sequences() {
        assert!(matches!(
            DescriptorSet::compute(&seq("A")),
            Err(AnalysisError::PairCompositionUndefined)
        ));
    }

    #[test]
    fn class_accessor_matches_the_named_fields() {
        let set = DescriptorSet::compute(&seq("RHKDE")).unwrap();
        assert_eq!(set.class(ResidueClass::PositivelyCharged), set.positively_charged);
        assert_eq!(set.class(ResidueClass::NegativelyCharged), set.negatively_charged);
        assert_eq!(set.class(ResidueClass::Aromatic), set.aromatic);
        assert_eq!(set.positively_charged.count, 3);
        assert_eq!(set.negatively_charged.count, 2);
        assert_eq!(set.aromatic.count, 0);
    }

    #[test]
    fn tables_carry_their_full_key_sets() {
        let set = DescriptorSet::compute(&seq("AG")).unwrap();
        assert_eq!(set.residue_occurrence.len(), 21);
        assert_eq!(set.residue_composition.len(), 21);
        assert_eq!(set.pair_occurrence.len(), 441);
        assert_eq!(set.pair_composition.len(), 441);
    }

    #[test]
    fn repeated_computation_is_identical() {
        let sequence = seq("MKCYDERHWG");
        assert_eq!(
            DescriptorSet::compute(&sequence).unwrap(),
            DescriptorSet::compute(&sequence).unwrap()
        );
    }

    #[test]
    fn serializes_with_code_keyed_tables() {
        let set = DescriptorSet::compute(&seq("AG")).unwrap();
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["sequence"], "AG");
        assert_eq!(json["residue_occurrence"]["A"], 1);
        assert_eq!(json["pair_occurrence"]["AG"], 1);
    }
}
