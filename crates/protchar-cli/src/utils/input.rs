use crate::error::{CliError, Result};
use anyhow::Context;
use protchar::core::models::sequence::ProteinSequence;
use std::fs;
use std::path::Path;

fn is_content(line: &str) -> bool {
    !line.is_empty() && !line.starts_with('#')
}

/// Reads one sequence from a file, joining wrapped lines. Blank lines and
/// '#' comment lines are skipped.
pub fn read_single_sequence(path: &Path) -> Result<ProteinSequence> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read sequence file '{}'", path.display()))?;
    let joined: String = content
        .lines()
        .map(str::trim)
        .filter(|line| is_content(line))
        .collect();
    if joined.is_empty() {
        return Err(CliError::EmptyInput(path.to_path_buf()));
    }
    ProteinSequence::parse(&joined).map_err(|source| CliError::FileSequence {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a sequence list, one sequence per line. Blank lines and '#'
/// comment lines are skipped; parse failures carry the 1-based line number.
pub fn read_sequence_list(path: &Path) -> Result<Vec<ProteinSequence>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read sequence file '{}'", path.display()))?;

    let mut sequences = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if !is_content(line) {
            continue;
        }
        let sequence = ProteinSequence::parse(line).map_err(|source| CliError::InputLine {
            path: path.to_path_buf(),
            line: number + 1,
            source,
        })?;
        sequences.push(sequence);
    }

    if sequences.is_empty() {
        return Err(CliError::EmptyInput(path.to_path_buf()));
    }
    Ok(sequences)
}
