//! Moreau–Broto autocorrelation descriptors.
//!
//! Each descriptor weights atoms by an atomic property and reports
//! [`DistanceMatrix::autocorrelation`](crate::matrix::DistanceMatrix::autocorrelation)
//! for topological lags `0..AUTOCORRELATION_LAGS`.

use crate::atom::Atom;
use crate::bond::Bond;
use crate::charges::gasteiger_charges;
use crate::element::element;
use crate::graph_ops::distance_matrix;
use crate::hybridization::{assign_hybridization, Hybridization};
use crate::hydrogen::{add_hs, remove_hs};
use crate::mol::Mol;

use super::DescriptorError;

pub const AUTOCORRELATION_LAGS: usize = 5;

/// Atomic weight of carbon that scales the mass weights.
const CARBON_SCALE: f64 = 12.010735896788;

fn lagged(mol: &Mol<Atom, Bond>, weights: &[f64]) -> [f64; AUTOCORRELATION_LAGS] {
    let distances = distance_matrix(mol);
    let mut values = [0.0; AUTOCORRELATION_LAGS];
    for (lag, value) in values.iter_mut().enumerate() {
        *value = distances.autocorrelation(weights, lag as u32);
    }
    values
}

/// ATSm: scaled atomic weights on the hydrogen-suppressed graph.
pub fn autocorrelation_mass(
    mol: &Mol<Atom, Bond>,
) -> Result<[f64; AUTOCORRELATION_LAGS], DescriptorError> {
    let heavy = remove_hs(mol);
    let weights = heavy
        .atoms()
        .map(|idx| {
            let atomic_num = heavy.atom(idx).atomic_num;
            element(atomic_num)
                .map(|data| data.atomic_weight / CARBON_SCALE)
                .ok_or(DescriptorError::UnsupportedElement { atomic_num })
        })
        .collect::<Result<Vec<f64>, _>>()?;
    Ok(lagged(&heavy, &weights))
}

/// ATSc: Gasteiger partial charges with every hydrogen explicit.
pub fn autocorrelation_charge(
    mol: &Mol<Atom, Bond>,
) -> Result<[f64; AUTOCORRELATION_LAGS], DescriptorError> {
    let explicit = add_hs(mol);
    let charges = gasteiger_charges(&explicit).inspect_err(|err| log::warn!("{err}"))?;
    Ok(lagged(&explicit, &charges))
}

/// ATSp: Kang–Jhon polarizability factors with every hydrogen explicit.
pub fn autocorrelation_polarizability(
    mol: &Mol<Atom, Bond>,
) -> Result<[f64; AUTOCORRELATION_LAGS], DescriptorError> {
    let explicit = add_hs(mol);
    let hybridization = assign_hybridization(&explicit);
    let weights = explicit
        .atoms()
        .map(|idx| {
            let atom = explicit.atom(idx);
            polarizability_factor(atom, hybridization[idx.index()]).ok_or_else(|| {
                log::warn!("no polarizability factor for atomic number {}", atom.atomic_num);
                DescriptorError::UnsupportedElement {
                    atomic_num: atom.atomic_num,
                }
            })
        })
        .collect::<Result<Vec<f64>, _>>()?;
    Ok(lagged(&explicit, &weights))
}

/// Additive atomic polarizability factor (Å³) by element and hybridization,
/// after Kang & Jhon, Theor. Chim. Acta 61, 41 (1982).
pub fn polarizability_factor(atom: &Atom, hybridization: Hybridization) -> Option<f64> {
    use Hybridization::*;
    let factor = match (atom.atomic_num, hybridization) {
        (1, _) => 0.387,
        (6, SP) => 1.279,
        (6, SP2) if atom.is_aromatic => 1.230,
        (6, SP2) => 1.382,
        (6, _) => 1.064,
        (7, SP) => 0.852,
        (7, SP2) if atom.is_aromatic => 1.090,
        (7, SP2) => 1.030,
        (7, _) => 1.094,
        (8, SP2) => 0.460,
        (8, _) => 0.664,
        (9, _) => 0.296,
        (15, SP3) => 2.63,
        (15, _) => 2.35,
        (16, SP2) if atom.is_aromatic => 3.38,
        (16, SP2) => 3.51,
        (16, _) => 3.20,
        (17, _) => 2.343,
        (35, _) => 3.5,
        (53, _) => 5.79,
        _ => return None,
    };
    Some(factor)
}
