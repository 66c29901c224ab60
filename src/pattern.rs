//! Named functional-group queries for acid/base counting.
//!
//! Each pattern is a small query graph whose nodes are atom predicates and
//! whose edges are bond predicates, anchored at a root atom. A molecule
//! "contains" a pattern once per distinct target atom the root maps to.
//! The registry is built on first use and is read-only afterwards.

use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

use petgraph::graph::NodeIndex;

use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::hydrogen::total_hydrogens;
use crate::mol::Mol;
use crate::substruct::get_substruct_matches_with;

/// Predicate on one target atom in its molecular context.
pub type AtomTest = fn(&Mol<Atom, Bond>, NodeIndex) -> bool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondTest {
    /// Non-aromatic single bond.
    Single,
    /// Non-aromatic double bond.
    Double,
    SingleOrAromatic,
    Any,
}

impl BondTest {
    pub fn matches(self, bond: &Bond) -> bool {
        match self {
            BondTest::Single => bond.order == BondOrder::Single && !bond.is_aromatic,
            BondTest::Double => bond.order == BondOrder::Double && !bond.is_aromatic,
            BondTest::SingleOrAromatic => bond.order == BondOrder::Single || bond.is_aromatic,
            BondTest::Any => true,
        }
    }
}

pub struct Pattern {
    name: &'static str,
    query: Mol<AtomTest, BondTest>,
    root: NodeIndex,
}

impl Pattern {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn query(&self) -> &Mol<AtomTest, BondTest> {
        &self.query
    }

    /// Distinct target atoms the root maps to, in ascending order.
    pub fn root_matches(&self, mol: &Mol<Atom, Bond>) -> Vec<NodeIndex> {
        let roots: BTreeSet<NodeIndex> = get_substruct_matches_with(
            mol,
            &self.query,
            |target, idx, test: &AtomTest| test(target, idx),
            |bond, test: &BondTest| test.matches(bond),
        )
        .into_iter()
        .filter_map(|mapping| {
            mapping
                .into_iter()
                .find(|&(q, _)| q == self.root)
                .map(|(_, t)| t)
        })
        .collect();
        roots.into_iter().collect()
    }
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pattern")
            .field("name", &self.name)
            .field("atoms", &self.query.atom_count())
            .field("root", &self.root.index())
            .finish()
    }
}

pub const ACIDIC_GROUPS: [&str; 4] = [
    "acid_hydroxyl",
    "isolated_anion",
    "triflyl_sulfonamide",
    "tetrazole_nitrogen",
];

pub const BASIC_GROUPS: [&str; 6] = [
    "primary_amine",
    "secondary_amine",
    "tertiary_amine",
    "isolated_cation",
    "imine_amidine",
    "amine_amidine",
];

static PATTERNS: OnceLock<HashMap<&'static str, Pattern>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, Pattern> {
    PATTERNS.get_or_init(|| {
        let patterns = build_patterns();
        log::debug!("built {} functional-group patterns", patterns.len());
        patterns
            .into_iter()
            .map(|pattern| (pattern.name, pattern))
            .collect()
    })
}

pub fn pattern(name: &str) -> Option<&'static Pattern> {
    registry().get(name)
}

/// Sum over `names` of distinct root atoms matched; unknown names count 0.
pub fn count_matches(mol: &Mol<Atom, Bond>, names: &[&str]) -> usize {
    names
        .iter()
        .map(|&name| match pattern(name) {
            Some(p) => p.root_matches(mol).len(),
            None => {
                log::warn!("unknown functional-group pattern {name:?}");
                0
            }
        })
        .sum()
}

struct QueryBuilder {
    mol: Mol<AtomTest, BondTest>,
}

impl QueryBuilder {
    fn new() -> Self {
        Self { mol: Mol::new() }
    }

    fn atom(&mut self, test: AtomTest) -> NodeIndex {
        self.mol.add_atom(test)
    }

    fn bond(&mut self, a: NodeIndex, b: NodeIndex, test: BondTest) -> &mut Self {
        self.mol.add_bond(a, b, test);
        self
    }

    fn finish(self, name: &'static str, root: NodeIndex) -> Pattern {
        Pattern {
            name,
            query: self.mol,
            root,
        }
    }
}

fn is_aliphatic(mol: &Mol<Atom, Bond>, idx: NodeIndex, atomic_num: u8) -> bool {
    let atom = mol.atom(idx);
    atom.atomic_num == atomic_num && !atom.is_aromatic
}

fn is_aromatic(mol: &Mol<Atom, Bond>, idx: NodeIndex, atomic_num: u8) -> bool {
    let atom = mol.atom(idx);
    atom.atomic_num == atomic_num && atom.is_aromatic
}

/// Charged atom with no neighbour of the opposite unit charge.
fn is_isolated_ion(mol: &Mol<Atom, Bond>, idx: NodeIndex, charge: i8) -> bool {
    mol.atom(idx).formal_charge == charge
        && !mol
            .neighbors(idx)
            .any(|nb| mol.atom(nb).formal_charge == -charge)
}

fn aliphatic_carbon(mol: &Mol<Atom, Bond>, idx: NodeIndex) -> bool {
    is_aliphatic(mol, idx, 6)
}

/// Aliphatic carbon with four connections, hydrogens included.
fn tetrahedral_carbon(mol: &Mol<Atom, Bond>, idx: NodeIndex) -> bool {
    aliphatic_carbon(mol, idx)
        && mol.degree(idx) + usize::from(mol.atom(idx).hydrogen_count) == 4
}

fn aliphatic_nitrogen(mol: &Mol<Atom, Bond>, idx: NodeIndex) -> bool {
    is_aliphatic(mol, idx, 7)
}

fn aliphatic_oxygen(mol: &Mol<Atom, Bond>, idx: NodeIndex) -> bool {
    is_aliphatic(mol, idx, 8)
}

fn aliphatic_sulfur(mol: &Mol<Atom, Bond>, idx: NodeIndex) -> bool {
    is_aliphatic(mol, idx, 16)
}

fn aliphatic_fluorine(mol: &Mol<Atom, Bond>, idx: NodeIndex) -> bool {
    is_aliphatic(mol, idx, 9)
}

fn hydroxyl_oxygen(mol: &Mol<Atom, Bond>, idx: NodeIndex) -> bool {
    aliphatic_oxygen(mol, idx) && total_hydrogens(mol, idx) == 1
}

fn oxo_acid_center(mol: &Mol<Atom, Bond>, idx: NodeIndex) -> bool {
    [6, 15, 16].into_iter().any(|z| is_aliphatic(mol, idx, z))
}

fn nh_nitrogen(mol: &Mol<Atom, Bond>, idx: NodeIndex) -> bool {
    aliphatic_nitrogen(mol, idx) && total_hydrogens(mol, idx) == 1
}

fn nh2_nitrogen(mol: &Mol<Atom, Bond>, idx: NodeIndex) -> bool {
    aliphatic_nitrogen(mol, idx) && total_hydrogens(mol, idx) == 2
}

fn aromatic_nitrogen(mol: &Mol<Atom, Bond>, idx: NodeIndex) -> bool {
    is_aromatic(mol, idx, 7)
}

fn aromatic_carbon(mol: &Mol<Atom, Bond>, idx: NodeIndex) -> bool {
    is_aromatic(mol, idx, 6)
}

fn isolated_anion(mol: &Mol<Atom, Bond>, idx: NodeIndex) -> bool {
    is_isolated_ion(mol, idx, -1)
}

fn isolated_cation(mol: &Mol<Atom, Bond>, idx: NodeIndex) -> bool {
    is_isolated_ion(mol, idx, 1)
}

fn build_patterns() -> Vec<Pattern> {
    use BondTest::*;
    let mut patterns = Vec::new();

    // [OH1]-[C,S,P]=O
    let mut q = QueryBuilder::new();
    let o = q.atom(hydroxyl_oxygen);
    let center = q.atom(oxo_acid_center);
    let oxo = q.atom(aliphatic_oxygen);
    q.bond(o, center, Single).bond(center, oxo, Double);
    patterns.push(q.finish("acid_hydroxyl", o));

    let mut q = QueryBuilder::new();
    let root = q.atom(isolated_anion);
    patterns.push(q.finish("isolated_anion", root));

    // [NH](S(=O)=O)C(F)(F)F
    let mut q = QueryBuilder::new();
    let n = q.atom(nh_nitrogen);
    let s = q.atom(aliphatic_sulfur);
    let o1 = q.atom(aliphatic_oxygen);
    let o2 = q.atom(aliphatic_oxygen);
    let c = q.atom(aliphatic_carbon);
    let f1 = q.atom(aliphatic_fluorine);
    let f2 = q.atom(aliphatic_fluorine);
    let f3 = q.atom(aliphatic_fluorine);
    q.bond(n, s, Single)
        .bond(s, o1, Double)
        .bond(s, o2, Double)
        .bond(n, c, Single)
        .bond(c, f1, Single)
        .bond(c, f2, Single)
        .bond(c, f3, Single);
    patterns.push(q.finish("triflyl_sulfonamide", n));

    // n1nnnc1
    let mut q = QueryBuilder::new();
    let n1 = q.atom(aromatic_nitrogen);
    let n2 = q.atom(aromatic_nitrogen);
    let n3 = q.atom(aromatic_nitrogen);
    let n4 = q.atom(aromatic_nitrogen);
    let c5 = q.atom(aromatic_carbon);
    q.bond(n1, n2, SingleOrAromatic)
        .bond(n2, n3, SingleOrAromatic)
        .bond(n3, n4, SingleOrAromatic)
        .bond(n4, c5, SingleOrAromatic)
        .bond(c5, n1, SingleOrAromatic);
    patterns.push(q.finish("tetrazole_nitrogen", n1));

    // [NH2]-[CX4]
    let mut q = QueryBuilder::new();
    let n = q.atom(nh2_nitrogen);
    let c = q.atom(tetrahedral_carbon);
    q.bond(n, c, Single);
    patterns.push(q.finish("primary_amine", n));

    // [NH](-[CX4])-[CX4]
    let mut q = QueryBuilder::new();
    let n = q.atom(nh_nitrogen);
    let c1 = q.atom(tetrahedral_carbon);
    let c2 = q.atom(tetrahedral_carbon);
    q.bond(n, c1, Single).bond(n, c2, Single);
    patterns.push(q.finish("secondary_amine", n));

    // N(-[CX4])(-[CX4])-[CX4]
    let mut q = QueryBuilder::new();
    let n = q.atom(aliphatic_nitrogen);
    let c1 = q.atom(tetrahedral_carbon);
    let c2 = q.atom(tetrahedral_carbon);
    let c3 = q.atom(tetrahedral_carbon);
    q.bond(n, c1, Single).bond(n, c2, Single).bond(n, c3, Single);
    patterns.push(q.finish("tertiary_amine", n));

    let mut q = QueryBuilder::new();
    let root = q.atom(isolated_cation);
    patterns.push(q.finish("isolated_cation", root));

    // N=C-N
    let mut q = QueryBuilder::new();
    let n = q.atom(aliphatic_nitrogen);
    let c = q.atom(aliphatic_carbon);
    let n2 = q.atom(aliphatic_nitrogen);
    q.bond(n, c, Double).bond(c, n2, Single);
    patterns.push(q.finish("imine_amidine", n));

    // N-C=N
    let mut q = QueryBuilder::new();
    let n = q.atom(aliphatic_nitrogen);
    let c = q.atom(aliphatic_carbon);
    let n2 = q.atom(aliphatic_nitrogen);
    q.bond(n, c, Single).bond(c, n2, Double);
    patterns.push(q.finish("amine_amidine", n));

    patterns
}
