//! Gasteiger–Marsili partial charges.
//!
//! Partial equalization of orbital electronegativity (PEOE): every bond
//! moves charge from the less to the more electronegative end, damped by
//! `0.5^k` on iteration `k`. Orbital electronegativity follows
//! χ = a + b·q + c·q² with parameters from Gasteiger & Marsili,
//! Tetrahedron 36, 3219 (1980).

use petgraph::graph::NodeIndex;
use thiserror::Error;

use crate::hybridization::{assign_hybridization_atom, Hybridization};
use crate::mol::Mol;
use crate::traits::{HasAromaticity, HasAtomicNum, HasBondOrder, HasFormalCharge, HasHydrogenCount};

const ITERATIONS: i32 = 6;

/// Cationic electronegativity of hydrogen; `a + b + c` would be 12.85.
const HYDROGEN_CATION_CHI: f64 = 20.02;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChargeError {
    #[error("no Gasteiger parameters for atom {atom} (atomic number {atomic_num})")]
    UnsupportedElement { atom: usize, atomic_num: u8 },
}

#[derive(Debug, Clone, Copy)]
struct PeoeParams {
    a: f64,
    b: f64,
    c: f64,
}

impl PeoeParams {
    const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    fn chi(&self, q: f64) -> f64 {
        self.a + self.b * q + self.c * q * q
    }

    fn cation_chi(&self, atomic_num: u8) -> f64 {
        if atomic_num == 1 {
            HYDROGEN_CATION_CHI
        } else {
            self.a + self.b + self.c
        }
    }
}

fn peoe_params(atomic_num: u8, hyb: Hybridization) -> Option<PeoeParams> {
    use Hybridization::*;
    let params = match (atomic_num, hyb) {
        (1, _) => PeoeParams::new(7.17, 6.24, -0.56),
        (6, SP2) => PeoeParams::new(8.79, 9.32, 1.51),
        (6, S | SP) => PeoeParams::new(10.39, 9.45, 0.73),
        (6, _) => PeoeParams::new(7.98, 9.18, 1.88),
        (7, SP2) => PeoeParams::new(12.87, 11.15, 0.85),
        (7, S | SP) => PeoeParams::new(15.68, 11.70, -0.27),
        (7, _) => PeoeParams::new(11.54, 10.82, 1.36),
        // no sp table for oxygen
        (8, S | SP | SP2) => PeoeParams::new(17.07, 13.79, 0.47),
        (8, _) => PeoeParams::new(14.18, 12.92, 1.39),
        (9, _) => PeoeParams::new(14.66, 13.85, 2.31),
        (14, _) => PeoeParams::new(7.30, 6.56, 0.66),
        (15, _) => PeoeParams::new(8.90, 8.24, 0.96),
        (16, SP3) => PeoeParams::new(10.14, 9.13, 1.38),
        (16, _) => PeoeParams::new(10.88, 9.49, 1.33),
        (17, _) => PeoeParams::new(11.00, 9.69, 1.35),
        (35, _) => PeoeParams::new(10.08, 8.47, 1.16),
        (53, _) => PeoeParams::new(9.90, 7.96, 0.96),
        _ => return None,
    };
    Some(params)
}

/// Partial charge per atom, in atom index order.
///
/// Charges start from the formal charges, so the total is conserved. Call it
/// on a molecule with explicit hydrogens (see
/// [`add_hs`](crate::hydrogen::add_hs)) to get hydrogen charges too;
/// implicit hydrogens only influence hybridization.
pub fn gasteiger_charges<A, B>(mol: &Mol<A, B>) -> Result<Vec<f64>, ChargeError>
where
    A: HasAtomicNum + HasHydrogenCount + HasFormalCharge + HasAromaticity,
    B: HasBondOrder + HasAromaticity,
{
    let params: Vec<PeoeParams> = mol
        .atoms()
        .map(|idx| {
            let atomic_num = mol.atom(idx).atomic_num();
            peoe_params(atomic_num, assign_hybridization_atom(mol, idx)).ok_or(
                ChargeError::UnsupportedElement {
                    atom: idx.index(),
                    atomic_num,
                },
            )
        })
        .collect::<Result<_, _>>()?;

    let mut charges: Vec<f64> = mol
        .atoms()
        .map(|idx| f64::from(mol.atom(idx).formal_charge()))
        .collect();

    let bonds: Vec<(NodeIndex, NodeIndex)> = mol
        .bonds()
        .filter_map(|e| mol.bond_endpoints(e))
        .collect();

    for k in 1..=ITERATIONS {
        let damping = 0.5_f64.powi(k);
        let chi: Vec<f64> = params
            .iter()
            .zip(&charges)
            .map(|(p, &q)| p.chi(q))
            .collect();

        let mut delta = vec![0.0_f64; charges.len()];
        for &(i, j) in &bonds {
            let (i, j) = (i.index(), j.index());
            let donor = if chi[j] > chi[i] { i } else { j };
            let denom = params[donor].cation_chi(mol.atom(NodeIndex::new(donor)).atomic_num());
            let transfer = damping * (chi[j] - chi[i]) / denom;
            delta[i] += transfer;
            delta[j] -= transfer;
        }

        for (q, d) in charges.iter_mut().zip(&delta) {
            *q += d;
        }
    }

    Ok(charges)
}
