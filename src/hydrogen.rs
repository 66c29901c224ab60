use petgraph::graph::NodeIndex;

use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::mol::Mol;
use crate::traits::{HasAtomicNum, HasHydrogenCount};

/// Implicit plus explicit hydrogens attached to `idx`.
pub fn total_hydrogens<A, B>(mol: &Mol<A, B>, idx: NodeIndex) -> u32
where
    A: HasAtomicNum + HasHydrogenCount,
{
    let explicit = mol
        .neighbors(idx)
        .filter(|&nb| mol.atom(nb).is_hydrogen())
        .count() as u32;
    u32::from(mol.atom(idx).hydrogen_count()) + explicit
}

/// Copy of `mol` where every implicit hydrogen is an explicit atom.
///
/// Original atoms keep their indices; new hydrogens are appended after them
/// in parent order, each joined by a single bond.
pub fn add_hs(mol: &Mol<Atom, Bond>) -> Mol<Atom, Bond> {
    let mut result = Mol::new();

    for idx in mol.atoms() {
        result.add_atom(Atom {
            hydrogen_count: 0,
            ..*mol.atom(idx)
        });
    }

    for edge in mol.bonds() {
        if let Some((a, b)) = mol.bond_endpoints(edge) {
            result.add_bond(a, b, *mol.bond(edge));
        }
    }

    for parent in mol.atoms() {
        for _ in 0..mol.atom(parent).hydrogen_count {
            let h = result.add_atom(Atom::new(1));
            result.add_bond(parent, h, Bond::new(BondOrder::Single));
        }
    }

    result
}

/// Copy of `mol` with ordinary hydrogen atoms folded into implicit counts.
///
/// A hydrogen is removed only when it is neutral, has natural isotope
/// abundance and exactly one neighbour that is not itself a hydrogen.
/// Charged, labelled, bridging and H–H hydrogens stay in the graph.
pub fn remove_hs(mol: &Mol<Atom, Bond>) -> Mol<Atom, Bond> {
    let node_count = mol.atom_count();
    let mut removable = vec![false; node_count];
    let mut extra_h: Vec<u8> = vec![0; node_count];

    for idx in mol.atoms() {
        let atom = mol.atom(idx);
        if atom.atomic_num != 1 || atom.isotope != 0 || atom.formal_charge != 0 {
            continue;
        }
        let mut neighbors = mol.neighbors(idx);
        if let (Some(parent), None) = (neighbors.next(), neighbors.next()) {
            if !mol.atom(parent).is_hydrogen() {
                removable[idx.index()] = true;
                extra_h[parent.index()] += 1;
            }
        }
    }

    let mut result = Mol::new();
    let mut index_map: Vec<Option<NodeIndex>> = vec![None; node_count];

    for idx in mol.atoms() {
        if removable[idx.index()] {
            continue;
        }
        let atom = mol.atom(idx);
        let new_idx = result.add_atom(Atom {
            hydrogen_count: atom.hydrogen_count + extra_h[idx.index()],
            ..*atom
        });
        index_map[idx.index()] = Some(new_idx);
    }

    for edge in mol.bonds() {
        let Some((a, b)) = mol.bond_endpoints(edge) else {
            continue;
        };
        if let (Some(new_a), Some(new_b)) = (index_map[a.index()], index_map[b.index()]) {
            result.add_bond(new_a, new_b, *mol.bond(edge));
        }
    }

    result
}
