//! Hand-built molecules shared by the unit tests.
//!
//! Atom indices follow the order of the `atoms` slice, so tests can refer to
//! specific atoms by position.

use petgraph::graph::NodeIndex;

use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::mol::Mol;

pub(crate) fn mol_from(atoms: &[Atom], bonds: &[(usize, usize, Bond)]) -> Mol<Atom, Bond> {
    let mut mol = Mol::new();
    for atom in atoms {
        mol.add_atom(*atom);
    }
    for &(a, b, bond) in bonds {
        mol.add_bond(NodeIndex::new(a), NodeIndex::new(b), bond);
    }
    mol
}

fn c(h: u8) -> Atom {
    Atom::with_hydrogens(6, h)
}

fn ar(atomic_num: u8, h: u8) -> Atom {
    Atom {
        is_aromatic: true,
        ..Atom::with_hydrogens(atomic_num, h)
    }
}

fn charged(atomic_num: u8, h: u8, formal_charge: i8) -> Atom {
    Atom {
        formal_charge,
        ..Atom::with_hydrogens(atomic_num, h)
    }
}

const S: Bond = Bond {
    order: BondOrder::Single,
    is_aromatic: false,
};
const D: Bond = Bond {
    order: BondOrder::Double,
    is_aromatic: false,
};
const T: Bond = Bond {
    order: BondOrder::Triple,
    is_aromatic: false,
};
const AS: Bond = Bond {
    order: BondOrder::Single,
    is_aromatic: true,
};
const AD: Bond = Bond {
    order: BondOrder::Double,
    is_aromatic: true,
};

/// Saturated carbon chain with implicit hydrogens.
pub(crate) fn chain(n: usize) -> Mol<Atom, Bond> {
    let atoms: Vec<Atom> = (0..n)
        .map(|i| match (n, i) {
            (1, _) => c(4),
            (_, 0) => c(3),
            (_, i) if i == n - 1 => c(3),
            _ => c(2),
        })
        .collect();
    let bonds: Vec<_> = (1..n).map(|i| (i - 1, i, S)).collect();
    mol_from(&atoms, &bonds)
}

/// Saturated carbocycle (cyclopropane, cyclobutane, …).
pub(crate) fn cycle(n: usize) -> Mol<Atom, Bond> {
    let atoms = vec![c(2); n];
    let mut bonds: Vec<_> = (1..n).map(|i| (i - 1, i, S)).collect();
    bonds.push((n - 1, 0, S));
    mol_from(&atoms, &bonds)
}

pub(crate) fn methane() -> Mol<Atom, Bond> {
    chain(1)
}

pub(crate) fn ethane() -> Mol<Atom, Bond> {
    chain(2)
}

/// C0 - C1 - O2
pub(crate) fn ethanol() -> Mol<Atom, Bond> {
    mol_from(
        &[c(3), c(2), Atom::with_hydrogens(8, 1)],
        &[(0, 1, S), (1, 2, S)],
    )
}

/// C0 = C1 - C2
pub(crate) fn propene() -> Mol<Atom, Bond> {
    mol_from(&[c(2), c(1), c(3)], &[(0, 1, D), (1, 2, S)])
}

/// H-C0 # C1-H
pub(crate) fn acetylene() -> Mol<Atom, Bond> {
    mol_from(&[c(1), c(1)], &[(0, 1, T)])
}

/// C0 - C1(=O2) - O3H
pub(crate) fn acetic_acid() -> Mol<Atom, Bond> {
    mol_from(
        &[c(3), c(0), Atom::new(8), Atom::with_hydrogens(8, 1)],
        &[(0, 1, S), (1, 2, D), (1, 3, S)],
    )
}

/// C0 - C1(=O2) - O3(-)
pub(crate) fn acetate() -> Mol<Atom, Bond> {
    mol_from(
        &[c(3), c(0), Atom::new(8), charged(8, 0, -1)],
        &[(0, 1, S), (1, 2, D), (1, 3, S)],
    )
}

/// C0 - N1H2
pub(crate) fn methylamine() -> Mol<Atom, Bond> {
    mol_from(&[c(3), Atom::with_hydrogens(7, 2)], &[(0, 1, S)])
}

/// C0 - N1H3(+)
pub(crate) fn methylammonium() -> Mol<Atom, Bond> {
    mol_from(&[c(3), charged(7, 3, 1)], &[(0, 1, S)])
}

/// N0 bonded to three methyls C1..C3.
pub(crate) fn trimethylamine() -> Mol<Atom, Bond> {
    mol_from(
        &[Atom::new(7), c(3), c(3), c(3)],
        &[(0, 1, S), (0, 2, S), (0, 3, S)],
    )
}

/// C0 - C1(=N2H) - N3H2
pub(crate) fn acetamidine() -> Mol<Atom, Bond> {
    mol_from(
        &[
            c(3),
            c(0),
            Atom::with_hydrogens(7, 1),
            Atom::with_hydrogens(7, 2),
        ],
        &[(0, 1, S), (1, 2, D), (1, 3, S)],
    )
}

/// C0(H) n1(H) n2 n3 n4, aromatic 1H-tetrazole.
pub(crate) fn tetrazole() -> Mol<Atom, Bond> {
    mol_from(
        &[ar(6, 1), ar(7, 1), ar(7, 0), ar(7, 0), ar(7, 0)],
        &[(0, 1, AS), (1, 2, AS), (2, 3, AD), (3, 4, AS), (4, 0, AD)],
    )
}

/// C0 bonded to four methyls C1..C4.
pub(crate) fn neopentane() -> Mol<Atom, Bond> {
    mol_from(
        &[c(0), c(3), c(3), c(3), c(3)],
        &[(0, 1, S), (0, 2, S), (0, 3, S), (0, 4, S)],
    )
}

/// Kekulé benzene with aromatic flags on every atom and bond.
pub(crate) fn benzene() -> Mol<Atom, Bond> {
    mol_from(
        &[ar(6, 1); 6],
        &[(0, 1, AD), (1, 2, AS), (2, 3, AD), (3, 4, AS), (4, 5, AD), (5, 0, AS)],
    )
}

/// Ring A 0..5, ring B 4,6,7,8,9,5; atoms 4 and 5 are the fusion atoms.
pub(crate) fn naphthalene() -> Mol<Atom, Bond> {
    let mut atoms = [ar(6, 1); 10];
    atoms[4] = ar(6, 0);
    atoms[5] = ar(6, 0);
    mol_from(
        &atoms,
        &[
            (0, 1, AS),
            (1, 2, AD),
            (2, 3, AS),
            (3, 4, AD),
            (4, 5, AS),
            (5, 0, AD),
            (4, 6, AS),
            (6, 7, AD),
            (7, 8, AS),
            (8, 9, AD),
            (9, 5, AS),
        ],
    )
}

/// Toluene: benzene ring 0..5 with a methyl C6 on atom 0.
pub(crate) fn toluene() -> Mol<Atom, Bond> {
    let mut atoms = vec![ar(6, 1); 6];
    atoms[0] = ar(6, 0);
    atoms.push(c(3));
    mol_from(
        &atoms,
        &[
            (0, 1, AD),
            (1, 2, AS),
            (2, 3, AD),
            (3, 4, AS),
            (4, 5, AD),
            (5, 0, AS),
            (0, 6, S),
        ],
    )
}

/// Spiro[4.4]nonane: C0 is the spiro atom, rings 0-1-2-3-4 and 0-5-6-7-8.
pub(crate) fn spiro_nonane() -> Mol<Atom, Bond> {
    let mut atoms = vec![c(2); 9];
    atoms[0] = c(0);
    mol_from(
        &atoms,
        &[
            (0, 1, S),
            (1, 2, S),
            (2, 3, S),
            (3, 4, S),
            (4, 0, S),
            (0, 5, S),
            (5, 6, S),
            (6, 7, S),
            (7, 8, S),
            (8, 0, S),
        ],
    )
}

/// Disconnected Na(+) and Cl(-).
pub(crate) fn sodium_chloride() -> Mol<Atom, Bond> {
    mol_from(&[charged(11, 0, 1), charged(17, 0, -1)], &[])
}

/// Methane with four explicit hydrogen atoms (C0, H1..H4).
pub(crate) fn explicit_methane() -> Mol<Atom, Bond> {
    mol_from(
        &[c(0), Atom::new(1), Atom::new(1), Atom::new(1), Atom::new(1)],
        &[(0, 1, S), (0, 2, S), (0, 3, S), (0, 4, S)],
    )
}

/// Cisplatin: Pt0 bonded to Cl1, Cl2 and the ammine nitrogens N3, N4.
pub(crate) fn cisplatin() -> Mol<Atom, Bond> {
    mol_from(
        &[
            Atom::new(78),
            Atom::new(17),
            Atom::new(17),
            Atom::with_hydrogens(7, 3),
            Atom::with_hydrogens(7, 3),
        ],
        &[(0, 1, S), (0, 2, S), (0, 3, S), (0, 4, S)],
    )
}
