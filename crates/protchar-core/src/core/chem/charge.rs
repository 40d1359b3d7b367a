use crate::core::models::residue::Residue;
use crate::core::models::sequence::ProteinSequence;
use crate::core::properties::{self, Ionization};

// The free N-terminal amine is modeled as a single basic group titrating at
// the bottom of the working pH range.
const N_TERMINUS_PKA: f64 = 2.0;

fn acidic_contribution(ph: f64, pka: f64) -> f64 {
    if ph < pka {
        0.0
    } else if ph > pka {
        -1.0
    } else {
        -0.5
    }
}

fn basic_contribution(ph: f64, pka: f64) -> f64 {
    if ph < pka {
        1.0
    } else if ph > pka {
        0.0
    } else {
        0.5
    }
}

/// Charge contributed by one side chain at the given pH: a half-integer in
/// {-1, -0.5, 0, +0.5, +1}, with the half values exactly at the pKa.
pub fn side_chain_charge(residue: Residue, ph: f64) -> f64 {
    match properties::side_chain_ionization(residue) {
        Some(Ionization::Acidic { pka }) => acidic_contribution(ph, pka),
        Some(Ionization::Basic { pka }) => basic_contribution(ph, pka),
        None => 0.0,
    }
}

fn terminus_charge(c_terminal: Residue, ph: f64) -> f64 {
    // The two groups never titrate at the same pH: every C-terminal pKa
    // lies above 8, the amine at 2, so both terms can be summed blindly.
    let amine = basic_contribution(ph, N_TERMINUS_PKA);
    let carboxyl = properties::c_terminus_pka(c_terminal)
        .map_or(0.0, |pka| acidic_contribution(ph, pka));
    amine + carboxyl
}

/// Net charge of the whole sequence at the given pH: side-chain
/// contributions plus the terminus adjustment. Pure; no state survives
/// between calls.
pub fn net_charge(sequence: &ProteinSequence, ph: f64) -> f64 {
    let side_chains: f64 = sequence
        .iter()
        .map(|residue| side_chain_charge(residue, ph))
        .sum();
    side_chains + terminus_charge(sequence.last(), ph)
}
