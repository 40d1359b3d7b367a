use super::residue::Residue;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("protein sequence must contain at least one residue")]
    Empty,

    #[error("invalid residue symbol '{symbol}' at position {position}")]
    InvalidResidue { symbol: char, position: usize },
}

/// An ordered, non-empty run of residues. Validated once at construction;
/// immutable afterwards, so every metric downstream can divide by the length
/// without re-checking it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinSequence {
    residues: Vec<Residue>,
}

impl ProteinSequence {
    pub fn parse(input: &str) -> Result<Self, SequenceError> {
        if input.is_empty() {
            return Err(SequenceError::Empty);
        }

        let residues = input
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Residue::from_code(symbol)
                    .map_err(|_| SequenceError::InvalidResidue { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { residues })
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn iter(&self) -> impl Iterator<Item = Residue> + '_ {
        self.residues.iter().copied()
    }

    /// The C-terminal residue. Total because the sequence is non-empty.
    pub fn last(&self) -> Residue {
        self.residues[self.residues.len() - 1]
    }
}

impl FromStr for ProteinSequence {
    type Err = SequenceError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        ProteinSequence::parse(input)
    }
}

impl fmt::Display for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for residue in &self.residues {
            write!(f, "{}", residue.code())?;
        }
        Ok(())
    }
}

impl Serialize for ProteinSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_the_full_alphabet() {
        let sequence = ProteinSequence::parse("ACDEFGHIKLMNPQRSTVWYU").unwrap();
        assert_eq!(sequence.len(), 21);
        assert_eq!(sequence.residues()[0], Residue::Alanine);
        assert_eq!(sequence.last(), Residue::Selenocysteine);
    }

    #[test]
    fn parse_folds_lowercase_input() {
        let sequence = ProteinSequence::parse("agw").unwrap();
        assert_eq!(sequence.to_string(), "AGW");
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(ProteinSequence::parse(""), Err(SequenceError::Empty));
    }

    #[test]
    fn parse_reports_the_offending_symbol_and_position() {
        let result = ProteinSequence::parse("AGXD");
        assert_eq!(
            result,
            Err(SequenceError::InvalidResidue {
                symbol: 'X',
                position: 2
            })
        );
    }

    #[test]
    fn parse_rejects_whitespace() {
        assert!(matches!(
            ProteinSequence::parse("AG D"),
            Err(SequenceError::InvalidResidue { symbol: ' ', .. })
        ));
    }

    #[test]
    fn from_str_round_trips_through_display() {
        let sequence: ProteinSequence = "MKTAYIAK".parse().unwrap();
        assert_eq!(sequence.to_string(), "MKTAYIAK");
    }

    #[test]
    fn serializes_as_the_plain_sequence_string() {
        let sequence = ProteinSequence::parse("AG").unwrap();
        assert_eq!(serde_json::to_string(&sequence).unwrap(), "\"AG\"");
    }
}
