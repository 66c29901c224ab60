use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::element::atomic_num_from_symbol;
use crate::hybridization::{assign_hybridization, Hybridization};
use crate::mol::Mol;
use crate::traits::HasAtomicNum;

use super::{BondKind, DescriptorError};

/// Atom count, optionally restricted to one element symbol.
///
/// `None` and `"*"` count every atom plus every implicit hydrogen; `"H"`
/// counts explicit hydrogen atoms plus implicit ones.
pub fn atom_count(mol: &Mol<Atom, Bond>, element: Option<&str>) -> Result<i64, DescriptorError> {
    let implicit: i64 = mol
        .atoms()
        .map(|idx| i64::from(mol.atom(idx).hydrogen_count))
        .sum();

    let count = match element {
        None | Some("*") => mol.atom_count() as i64 + implicit,
        Some(symbol) => {
            let Some(atomic_num) = atomic_num_from_symbol(symbol) else {
                log::warn!("atom count requested for unknown element {symbol:?}");
                return Err(DescriptorError::UnknownElement(symbol.to_string()));
            };
            let explicit = mol
                .atoms()
                .filter(|&idx| mol.atom(idx).atomic_num == atomic_num)
                .count() as i64;
            if atomic_num == 1 {
                explicit + implicit
            } else {
                explicit
            }
        }
    };
    Ok(count)
}

/// Bonds whose endpoints are both non-hydrogen.
///
/// Aromatic bonds count only as [`BondKind::Aromatic`], so the four kinds
/// partition the total.
pub fn bond_count(mol: &Mol<Atom, Bond>, kind: Option<BondKind>) -> i64 {
    mol.bonds()
        .filter(|&e| {
            mol.bond_endpoints(e)
                .is_some_and(|(a, b)| !mol.atom(a).is_hydrogen() && !mol.atom(b).is_hydrogen())
        })
        .filter(|&e| {
            let bond = mol.bond(e);
            match kind {
                None => true,
                Some(BondKind::Aromatic) => bond.is_aromatic,
                Some(BondKind::Single) => !bond.is_aromatic && bond.order == BondOrder::Single,
                Some(BondKind::Double) => !bond.is_aromatic && bond.order == BondOrder::Double,
                Some(BondKind::Triple) => !bond.is_aromatic && bond.order == BondOrder::Triple,
            }
        })
        .count() as i64
}

pub fn aromatic_atoms_count(mol: &Mol<Atom, Bond>) -> i64 {
    mol.atoms().filter(|&idx| mol.atom(idx).is_aromatic).count() as i64
}

pub fn aromatic_bonds_count(mol: &Mol<Atom, Bond>) -> i64 {
    mol.bonds().filter(|&e| mol.bond(e).is_aromatic).count() as i64
}

/// Fraction of sp3 among sp2 and sp3 carbons; NaN when there are none.
pub fn hybridization_ratio(mol: &Mol<Atom, Bond>) -> f64 {
    let hybridization = assign_hybridization(mol);
    let (mut sp2, mut sp3) = (0u32, 0u32);
    for idx in mol.atoms() {
        if mol.atom(idx).atomic_num != 6 {
            continue;
        }
        match hybridization[idx.index()] {
            Hybridization::SP2 => sp2 += 1,
            Hybridization::SP3 => sp3 += 1,
            _ => {}
        }
    }
    if sp2 + sp3 == 0 {
        return f64::NAN;
    }
    f64::from(sp3) / f64::from(sp2 + sp3)
}
