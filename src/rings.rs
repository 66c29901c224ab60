use petgraph::algo::connected_components;
use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::graph_ops::distance_matrix;
use crate::matrix::DistanceMatrix;
use crate::mol::Mol;

/// Smallest set of smallest rings plus per-bond ring membership.
#[derive(Debug, Clone)]
pub struct RingInfo {
    rings: Vec<Vec<NodeIndex>>,
    ring_bonds: Vec<bool>,
}

impl RingInfo {
    /// Horton candidate cycles reduced to an independent basis over GF(2).
    pub fn sssr<A, B>(mol: &Mol<A, B>) -> Self {
        let num_edges = mol.bond_count();
        let num_expected = Self::expected_ring_count(mol);
        if num_expected == 0 {
            return Self {
                rings: vec![],
                ring_bonds: vec![false; num_edges],
            };
        }

        let candidates = horton_candidates(mol);
        let rings = select_independent_rings(&candidates, num_expected, num_edges, mol);

        let mut ring_bonds = vec![false; num_edges];
        for ring in &rings {
            for edge in ring_edges(ring, mol) {
                ring_bonds[edge.index()] = true;
            }
        }

        Self { rings, ring_bonds }
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    pub fn rings(&self) -> &[Vec<NodeIndex>] {
        &self.rings
    }

    pub fn is_ring_atom(&self, atom: NodeIndex) -> bool {
        self.rings.iter().any(|ring| ring.contains(&atom))
    }

    /// Every cycle bond lies on some SSSR ring, so this is exact ring
    /// membership, not just SSSR membership.
    pub fn is_ring_bond(&self, bond: EdgeIndex) -> bool {
        self.ring_bonds.get(bond.index()).copied().unwrap_or(false)
    }

    pub fn smallest_ring_size(&self, atom: NodeIndex) -> Option<usize> {
        self.rings
            .iter()
            .filter(|ring| ring.contains(&atom))
            .map(|ring| ring.len())
            .min()
    }

    pub fn atom_rings(&self, atom: NodeIndex) -> Vec<&Vec<NodeIndex>> {
        self.rings
            .iter()
            .filter(|ring| ring.contains(&atom))
            .collect()
    }

    /// Cyclomatic number `E - V + C`.
    pub fn expected_ring_count<A, B>(mol: &Mol<A, B>) -> usize {
        let v = mol.atom_count();
        let e = mol.bond_count();
        let c = connected_components(mol.graph());
        (e + c).saturating_sub(v)
    }
}

fn ring_edges<'a, A, B>(
    ring: &'a [NodeIndex],
    mol: &'a Mol<A, B>,
) -> impl Iterator<Item = EdgeIndex> + 'a {
    let len = ring.len();
    (0..len).filter_map(move |i| mol.bond_between(ring[i], ring[(i + 1) % len]))
}

/// Shortest path `from -> to`, stepping to the lowest-indexed neighbour one
/// bond closer at each hop. Empty if `to` is unreachable.
fn walk_shortest_path<A, B>(
    mol: &Mol<A, B>,
    dist: &DistanceMatrix,
    from: NodeIndex,
    to: NodeIndex,
) -> Vec<NodeIndex> {
    let Some(mut remaining) = dist.get(from.index(), to.index()) else {
        return vec![];
    };
    let mut path = vec![from];
    let mut cur = from;
    while remaining > 0 {
        let step = mol
            .neighbors(cur)
            .filter(|nb| dist.get(nb.index(), to.index()) == Some(remaining - 1))
            .min();
        match step {
            Some(next) => {
                path.push(next);
                cur = next;
                remaining -= 1;
            }
            None => return vec![],
        }
    }
    path
}

/// Horton's candidate set: for every bond `(u, v)` and root `w`, the cycle
/// `w ~> u - v ~> w` when the two shortest paths meet only at `w`.
fn horton_candidates<A, B>(mol: &Mol<A, B>) -> Vec<Vec<NodeIndex>> {
    let dist = distance_matrix(mol);
    let mut candidates: Vec<Vec<NodeIndex>> = Vec::new();

    for edge in mol.bonds() {
        let Some((u, v)) = mol.bond_endpoints(edge) else {
            continue;
        };
        for w in mol.atoms() {
            let du = dist.get(w.index(), u.index());
            let dv = dist.get(w.index(), v.index());
            let (Some(du), Some(dv)) = (du, dv) else {
                continue;
            };
            if du + dv < 2 {
                continue;
            }
            let to_u = walk_shortest_path(mol, &dist, w, u);
            let to_v = walk_shortest_path(mol, &dist, w, v);
            if to_u.is_empty() || to_v.is_empty() {
                continue;
            }
            if to_u[1..].iter().any(|a| to_v[1..].contains(a)) {
                continue;
            }
            let mut ring = to_u;
            ring.extend(to_v.into_iter().skip(1).rev());
            candidates.push(canonical_ring(ring));
        }
    }

    candidates.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    candidates.dedup();
    candidates
}

/// Bitset of bond indices, one bit per edge.
#[derive(Clone, PartialEq, Eq)]
struct EdgeSet(Vec<u64>);

impl EdgeSet {
    fn of_ring<A, B>(ring: &[NodeIndex], num_edges: usize, mol: &Mol<A, B>) -> Self {
        let mut words = vec![0u64; num_edges.div_ceil(64)];
        for edge in ring_edges(ring, mol) {
            words[edge.index() / 64] ^= 1 << (edge.index() % 64);
        }
        Self(words)
    }

    fn lowest(&self) -> Option<usize> {
        self.0
            .iter()
            .position(|&w| w != 0)
            .map(|i| i * 64 + self.0[i].trailing_zeros() as usize)
    }

    fn has(&self, bit: usize) -> bool {
        self.0[bit / 64] & (1 << (bit % 64)) != 0
    }

    fn xor(&mut self, other: &EdgeSet) {
        for (a, b) in self.0.iter_mut().zip(&other.0) {
            *a ^= b;
        }
    }
}

/// Cycle space over GF(2), each row stored with its pivot bit.
#[derive(Default)]
struct CycleBasis {
    rows: Vec<(usize, EdgeSet)>,
}

impl CycleBasis {
    /// Adds `cycle` if it is independent of the rows so far.
    fn insert(&mut self, mut cycle: EdgeSet) -> bool {
        for (pivot, row) in &self.rows {
            if cycle.has(*pivot) {
                cycle.xor(row);
            }
        }
        match cycle.lowest() {
            Some(pivot) => {
                self.rows.push((pivot, cycle));
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Greedy smallest-first selection of `num_needed` independent rings.
fn select_independent_rings<A, B>(
    candidates: &[Vec<NodeIndex>],
    num_needed: usize,
    num_edges: usize,
    mol: &Mol<A, B>,
) -> Vec<Vec<NodeIndex>> {
    let mut basis = CycleBasis::default();
    let mut selected = Vec::with_capacity(num_needed);
    for ring in candidates {
        if basis.len() == num_needed {
            break;
        }
        if basis.insert(EdgeSet::of_ring(ring, num_edges, mol)) {
            selected.push(ring.clone());
        }
    }
    selected
}

/// Starts the ring at its smallest atom and walks toward the smaller of
/// that atom's two ring neighbours.
fn canonical_ring(mut ring: Vec<NodeIndex>) -> Vec<NodeIndex> {
    let Some(start) = (0..ring.len()).min_by_key(|&i| ring[i]) else {
        return ring;
    };
    ring.rotate_left(start);
    if ring.len() > 2 && ring[1] > ring[ring.len() - 1] {
        ring[1..].reverse();
    }
    ring
}
