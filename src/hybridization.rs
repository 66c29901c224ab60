use petgraph::graph::NodeIndex;

use crate::element::outer_shell_electrons;
use crate::mol::Mol;
use crate::traits::{HasAromaticity, HasAtomicNum, HasBondOrder, HasFormalCharge, HasHydrogenCount};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hybridization {
    S,
    SP,
    SP2,
    #[default]
    SP3,
    SP3D,
    SP3D2,
    Other,
}

/// Sum of bond multiplicities plus attached hydrogens.
fn bond_order_valence<A, B>(mol: &Mol<A, B>, idx: NodeIndex) -> i16
where
    A: HasAtomicNum + HasHydrogenCount,
    B: HasBondOrder,
{
    let bonds: i16 = mol
        .bonds_of(idx)
        .map(|e| i16::from(mol.bond(e).bond_order().multiplicity()))
        .sum();
    bonds + i16::from(mol.atom(idx).hydrogen_count())
}

fn lone_pairs<A, B>(mol: &Mol<A, B>, idx: NodeIndex) -> i16
where
    A: HasAtomicNum + HasHydrogenCount + HasFormalCharge,
    B: HasBondOrder,
{
    let atom = mol.atom(idx);
    if atom.atomic_num() <= 2 {
        return 0;
    }
    let nouter = i16::from(outer_shell_electrons(atom.atomic_num()));
    let free = nouter - bond_order_valence(mol, idx) - i16::from(atom.formal_charge());
    (free / 2).max(0)
}

/// A lone pair next to a π system (aromatic ring, multiple bond on a
/// neighbour) delocalises and flattens the atom.
fn lone_pair_is_conjugated<A, B>(mol: &Mol<A, B>, idx: NodeIndex) -> bool
where
    A: HasAromaticity,
    B: HasBondOrder + HasAromaticity,
{
    if mol.atom(idx).is_aromatic() {
        return true;
    }
    mol.neighbors(idx).any(|nb| {
        mol.bonds_of(nb).any(|e| {
            let bond = mol.bond(e);
            bond.is_aromatic() || bond.bond_order().multiplicity() > 1
        })
    })
}

/// Hybridization from the steric number (σ neighbours + lone pairs).
pub fn assign_hybridization_atom<A, B>(mol: &Mol<A, B>, idx: NodeIndex) -> Hybridization
where
    A: HasAtomicNum + HasHydrogenCount + HasFormalCharge + HasAromaticity,
    B: HasBondOrder + HasAromaticity,
{
    let atom = mol.atom(idx);
    if atom.atomic_num() == 0 {
        return Hybridization::Other;
    }

    let sigma = (mol.degree(idx) + usize::from(atom.hydrogen_count())) as i16;
    let pairs = lone_pairs(mol, idx);

    match sigma + pairs {
        i16::MIN..=1 => Hybridization::S,
        2 => Hybridization::SP,
        3 => Hybridization::SP2,
        4 => {
            if pairs > 0 && sigma < 4 && lone_pair_is_conjugated(mol, idx) {
                Hybridization::SP2
            } else {
                Hybridization::SP3
            }
        }
        5 => Hybridization::SP3D,
        6 => Hybridization::SP3D2,
        _ => Hybridization::Other,
    }
}

pub fn assign_hybridization<A, B>(mol: &Mol<A, B>) -> Vec<Hybridization>
where
    A: HasAtomicNum + HasHydrogenCount + HasFormalCharge + HasAromaticity,
    B: HasBondOrder + HasAromaticity,
{
    mol.atoms()
        .map(|idx| assign_hybridization_atom(mol, idx))
        .collect()
}
