//! Static per-residue property tables: side-chain ionization classes,
//! C-terminus pKa classes, average masses, Kyte-Doolittle hydropathy
//! values, and the fixed composition classes. Process-wide, read-only.

use super::models::residue::Residue;
use phf::{Set, phf_set};

/// Ionization behavior of a titratable side chain. Acidic groups lose a
/// proton as pH rises past the pKa (0 -> -0.5 -> -1); basic groups lose
/// their positive charge (+1 -> +0.5 -> 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ionization {
    Acidic { pka: f64 },
    Basic { pka: f64 },
}

/// Side-chain ionization class. Only seven residues titrate; everything
/// else, selenocysteine included, contributes no side-chain charge.
pub fn side_chain_ionization(residue: Residue) -> Option<Ionization> {
    match residue {
        Residue::Cysteine => Some(Ionization::Acidic { pka: 8.4 }),
        Residue::Tyrosine => Some(Ionization::Acidic { pka: 10.5 }),
        Residue::AsparticAcid | Residue::GlutamicAcid => Some(Ionization::Acidic { pka: 4.0 }),
        Residue::Lysine => Some(Ionization::Basic { pka: 10.5 }),
        Residue::Arginine => Some(Ionization::Basic { pka: 12.5 }),
        Residue::Histidine => Some(Ionization::Basic { pka: 6.0 }),
        _ => None,
    }
}

/// pKa of the free carboxyl group when the given residue sits at the
/// C-terminus. Nine classes cover the 20 standard residues; selenocysteine
/// has no entry and receives no terminus adjustment.
pub fn c_terminus_pka(residue: Residue) -> Option<f64> {
    match residue {
        Residue::Glycine
        | Residue::Leucine
        | Residue::Isoleucine
        | Residue::AsparticAcid
        | Residue::Valine => Some(9.6),
        Residue::Alanine | Residue::GlutamicAcid => Some(9.7),
        Residue::Methionine | Residue::Serine | Residue::Histidine => Some(9.2),
        Residue::Proline => Some(10.6),
        Residue::Phenylalanine | Residue::Glutamine | Residue::Threonine | Residue::Tyrosine => {
            Some(9.1)
        }
        Residue::Tryptophan => Some(9.4),
        Residue::Asparagine => Some(8.8),
        Residue::Cysteine => Some(8.2),
        Residue::Lysine | Residue::Arginine => Some(9.0),
        Residue::Selenocysteine => None,
    }
}

/// Average residue mass in Daltons.
pub fn average_mass(residue: Residue) -> f64 {
    match residue {
        Residue::Alanine => 89.0,
        Residue::Glycine => 75.0,
        Residue::Proline => 115.0,
        Residue::Valine => 117.0,
        Residue::Leucine => 131.0,
        Residue::Isoleucine => 131.0,
        Residue::Methionine => 149.0,
        Residue::Cysteine => 121.0,
        Residue::Phenylalanine => 165.0,
        Residue::Tyrosine => 181.0,
        Residue::Tryptophan => 204.0,
        Residue::Histidine => 155.0,
        Residue::Lysine => 146.0,
        Residue::Arginine => 174.0,
        Residue::Glutamine => 146.0,
        Residue::Asparagine => 132.0,
        Residue::GlutamicAcid => 147.0,
        Residue::AsparticAcid => 133.0,
        Residue::Serine => 105.0,
        Residue::Threonine => 119.0,
        Residue::Selenocysteine => 167.0,
    }
}

/// Kyte-Doolittle hydropathy score. Positive means hydrophobic.
pub fn kyte_doolittle(residue: Residue) -> f64 {
    match residue {
        Residue::Isoleucine => 4.5,
        Residue::Valine => 4.2,
        Residue::Leucine => 3.8,
        Residue::Phenylalanine => 2.8,
        Residue::Cysteine => 2.5,
        Residue::Methionine => 1.9,
        Residue::Alanine => 1.8,
        Residue::Glycine => -0.4,
        Residue::Threonine => -0.7,
        Residue::Serine => -0.8,
        Residue::Tryptophan => -0.9,
        Residue::Tyrosine => -1.3,
        Residue::Proline => -1.6,
        Residue::Histidine => -3.2,
        Residue::GlutamicAcid => -3.5,
        Residue::Asparagine => -3.5,
        Residue::Glutamine => -3.5,
        Residue::AsparticAcid => -3.5,
        Residue::Lysine => -3.9,
        Residue::Arginine => -4.5,
        Residue::Selenocysteine => 2.5,
    }
}

static HYDROPHOBIC: Set<char> = phf_set! { 'G', 'A', 'V', 'L', 'I', 'P', 'F', 'M', 'W' };
static HYDROPHILIC: Set<char> = phf_set! { 'H', 'E', 'D', 'N', 'Q', 'K', 'R' };
static ALIPHATIC: Set<char> = phf_set! { 'G', 'A', 'V', 'L', 'I', 'P' };
static AROMATIC: Set<char> = phf_set! { 'F', 'Y', 'W' };
static POSITIVELY_CHARGED: Set<char> = phf_set! { 'R', 'H', 'K' };
static NEGATIVELY_CHARGED: Set<char> = phf_set! { 'D', 'E' };

/// The six fixed composition classes reported for every sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueClass {
    PositivelyCharged,
    NegativelyCharged,
    Hydrophobic,
    Hydrophilic,
    Aliphatic,
    Aromatic,
}

impl ResidueClass {
    /// Report order.
    pub const ALL: [ResidueClass; 6] = [
        ResidueClass::PositivelyCharged,
        ResidueClass::NegativelyCharged,
        ResidueClass::Hydrophobic,
        ResidueClass::Hydrophilic,
        ResidueClass::Aliphatic,
        ResidueClass::Aromatic,
    ];

    pub fn contains(self, residue: Residue) -> bool {
        self.members().contains(&residue.code())
    }

    pub fn label(self) -> &'static str {
        match self {
            ResidueClass::PositivelyCharged => "positively charged",
            ResidueClass::NegativelyCharged => "negatively charged",
            ResidueClass::Hydrophobic => "hydrophobic",
            ResidueClass::Hydrophilic => "hydrophilic",
            ResidueClass::Aliphatic => "aliphatic",
            ResidueClass::Aromatic => "aromatic",
        }
    }

    fn members(self) -> &'static Set<char> {
        match self {
            ResidueClass::PositivelyCharged => &POSITIVELY_CHARGED,
            ResidueClass::NegativelyCharged => &NEGATIVELY_CHARGED,
            ResidueClass::Hydrophobic => &HYDROPHOBIC,
            ResidueClass::Hydrophilic => &HYDROPHILIC,
            ResidueClass::Aliphatic => &ALIPHATIC,
            ResidueClass::Aromatic => &AROMATIC,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_seven_side_chains_titrate() {
        let ionizable: Vec<Residue> = Residue::ALL
            .into_iter()
            .filter(|&r| side_chain_ionization(r).is_some())
            .collect();
        assert_eq!(
            ionizable,
            vec![
                Residue::Cysteine,
                Residue::AsparticAcid,
                Residue::GlutamicAcid,
                Residue::Histidine,
                Residue::Lysine,
                Residue::Arginine,
                Residue::Tyrosine,
            ]
        );
    }

    #[test]
    fn acidic_and_basic_classes_carry_the_expected_pkas() {
        assert_eq!(
            side_chain_ionization(Residue::Cysteine),
            Some(Ionization::Acidic { pka: 8.4 })
        );
        assert_eq!(
            side_chain_ionization(Residue::Arginine),
            Some(Ionization::Basic { pka: 12.5 })
        );
        assert_eq!(
            side_chain_ionization(Residue::AsparticAcid),
            side_chain_ionization(Residue::GlutamicAcid)
        );
    }

    #[test]
    fn every_standard_residue_has_a_c_terminus_pka() {
        for residue in Residue::STANDARD {
            assert!(c_terminus_pka(residue).is_some(), "missing {residue:?}");
        }
    }

    #[test]
    fn selenocysteine_has_no_c_terminus_pka() {
        assert_eq!(c_terminus_pka(Residue::Selenocysteine), None);
    }

    #[test]
    fn c_terminus_table_forms_nine_distinct_classes() {
        let mut pkas: Vec<u64> = Residue::STANDARD
            .into_iter()
            .filter_map(c_terminus_pka)
            .map(f64::to_bits)
            .collect();
        pkas.sort_unstable();
        pkas.dedup();
        assert_eq!(pkas.len(), 9);
    }

    #[test]
    fn average_masses_match_the_reference_values() {
        assert_eq!(average_mass(Residue::Alanine), 89.0);
        assert_eq!(average_mass(Residue::Glycine), 75.0);
        assert_eq!(average_mass(Residue::Tryptophan), 204.0);
        assert_eq!(average_mass(Residue::Selenocysteine), 167.0);
    }

    #[test]
    fn hydropathy_extremes_are_isoleucine_and_arginine() {
        let max = Residue::ALL.into_iter().fold(f64::NEG_INFINITY, |acc, r| {
            acc.max(kyte_doolittle(r))
        });
        let min = Residue::ALL
            .into_iter()
            .fold(f64::INFINITY, |acc, r| acc.min(kyte_doolittle(r)));
        assert_eq!(max, kyte_doolittle(Residue::Isoleucine));
        assert_eq!(min, kyte_doolittle(Residue::Arginine));
    }

    #[test]
    fn class_membership_matches_the_fixed_sets() {
        assert!(ResidueClass::Hydrophobic.contains(Residue::Glycine));
        assert!(!ResidueClass::Hydrophobic.contains(Residue::Tyrosine));
        assert!(ResidueClass::Aromatic.contains(Residue::Tyrosine));
        assert!(ResidueClass::PositivelyCharged.contains(Residue::Histidine));
        assert!(!ResidueClass::NegativelyCharged.contains(Residue::Histidine));
        assert!(!ResidueClass::Aliphatic.contains(Residue::Selenocysteine));
    }

    #[test]
    fn class_sizes_match_the_fixed_definitions() {
        let size = |class: ResidueClass| {
            Residue::ALL
                .into_iter()
                .filter(|&r| class.contains(r))
                .count()
        };
        assert_eq!(size(ResidueClass::Hydrophobic), 9);
        assert_eq!(size(ResidueClass::Hydrophilic), 7);
        assert_eq!(size(ResidueClass::Aliphatic), 6);
        assert_eq!(size(ResidueClass::Aromatic), 3);
        assert_eq!(size(ResidueClass::PositivelyCharged), 3);
        assert_eq!(size(ResidueClass::NegativelyCharged), 2);
    }
}
