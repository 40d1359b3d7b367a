use phf::{Map, phf_map};
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("symbol '{0}' is not one of the 21 recognized amino acid codes")]
pub struct InvalidResidueError(pub char);

/// One amino acid unit, denoted by its one-letter code. Variants are ordered
/// by code so that derived ordering matches the report and table ordering,
/// with selenocysteine sorting after the 20 standard residues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Residue {
    Alanine,        // A
    Cysteine,       // C
    AsparticAcid,   // D
    GlutamicAcid,   // E
    Phenylalanine,  // F
    Glycine,        // G
    Histidine,      // H
    Isoleucine,     // I
    Lysine,         // K
    Leucine,        // L
    Methionine,     // M
    Asparagine,     // N
    Proline,        // P
    Glutamine,      // Q
    Arginine,       // R
    Serine,         // S
    Threonine,      // T
    Valine,         // V
    Tryptophan,     // W
    Tyrosine,       // Y
    Selenocysteine, // U
}

static ONE_LETTER_CODES: Map<char, Residue> = phf_map! {
    'A' => Residue::Alanine,
    'C' => Residue::Cysteine,
    'D' => Residue::AsparticAcid,
    'E' => Residue::GlutamicAcid,
    'F' => Residue::Phenylalanine,
    'G' => Residue::Glycine,
    'H' => Residue::Histidine,
    'I' => Residue::Isoleucine,
    'K' => Residue::Lysine,
    'L' => Residue::Leucine,
    'M' => Residue::Methionine,
    'N' => Residue::Asparagine,
    'P' => Residue::Proline,
    'Q' => Residue::Glutamine,
    'R' => Residue::Arginine,
    'S' => Residue::Serine,
    'T' => Residue::Threonine,
    'V' => Residue::Valine,
    'W' => Residue::Tryptophan,
    'Y' => Residue::Tyrosine,
    'U' => Residue::Selenocysteine,
};

impl Residue {
    /// All 21 alphabet members in code order, selenocysteine last.
    pub const ALL: [Residue; 21] = [
        Residue::Alanine,
        Residue::Cysteine,
        Residue::AsparticAcid,
        Residue::GlutamicAcid,
        Residue::Phenylalanine,
        Residue::Glycine,
        Residue::Histidine,
        Residue::Isoleucine,
        Residue::Lysine,
        Residue::Leucine,
        Residue::Methionine,
        Residue::Asparagine,
        Residue::Proline,
        Residue::Glutamine,
        Residue::Arginine,
        Residue::Serine,
        Residue::Threonine,
        Residue::Valine,
        Residue::Tryptophan,
        Residue::Tyrosine,
        Residue::Selenocysteine,
    ];

    /// The 20 standard residues, excluding selenocysteine. This is the set
    /// printed in report tables.
    pub const STANDARD: [Residue; 20] = [
        Residue::Alanine,
        Residue::Cysteine,
        Residue::AsparticAcid,
        Residue::GlutamicAcid,
        Residue::Phenylalanine,
        Residue::Glycine,
        Residue::Histidine,
        Residue::Isoleucine,
        Residue::Lysine,
        Residue::Leucine,
        Residue::Methionine,
        Residue::Asparagine,
        Residue::Proline,
        Residue::Glutamine,
        Residue::Arginine,
        Residue::Serine,
        Residue::Threonine,
        Residue::Valine,
        Residue::Tryptophan,
        Residue::Tyrosine,
    ];

    pub fn from_code(symbol: char) -> Result<Self, InvalidResidueError> {
        ONE_LETTER_CODES
            .get(&symbol.to_ascii_uppercase())
            .copied()
            .ok_or(InvalidResidueError(symbol))
    }

    pub fn code(self) -> char {
        match self {
            Residue::Alanine => 'A',
            Residue::Cysteine => 'C',
            Residue::AsparticAcid => 'D',
            Residue::GlutamicAcid => 'E',
            Residue::Phenylalanine => 'F',
            Residue::Glycine => 'G',
            Residue::Histidine => 'H',
            Residue::Isoleucine => 'I',
            Residue::Lysine => 'K',
            Residue::Leucine => 'L',
            Residue::Methionine => 'M',
            Residue::Asparagine => 'N',
            Residue::Proline => 'P',
            Residue::Glutamine => 'Q',
            Residue::Arginine => 'R',
            Residue::Serine => 'S',
            Residue::Threonine => 'T',
            Residue::Valine => 'V',
            Residue::Tryptophan => 'W',
            Residue::Tyrosine => 'Y',
            Residue::Selenocysteine => 'U',
        }
    }
}

impl TryFrom<char> for Residue {
    type Error = InvalidResidueError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Residue::from_code(symbol)
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for Residue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
