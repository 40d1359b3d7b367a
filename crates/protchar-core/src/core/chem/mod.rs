//! Pure chemistry over validated sequences: the piecewise charge model,
//! the scanning isoelectric point solver, residue and dipeptide
//! composition analysis, and scalar metrics (molecular weight, net
//! hydrophobicity, composition-class counts).

pub mod charge;
pub mod composition;
pub mod isoelectric;
pub mod metrics;
