use petgraph::graph::NodeIndex;

use crate::mol::Mol;

/// `(query atom, target atom)` pairs of one embedding.
pub type AtomMapping = Vec<(NodeIndex, NodeIndex)>;

/// Every embedding of `query` into `target`, automorphisms included.
///
/// `atom_match` receives the whole target so it can inspect the
/// environment of the candidate atom, not just its payload.
pub fn get_substruct_matches_with<A1, B1, A2, B2>(
    target: &Mol<A1, B1>,
    query: &Mol<A2, B2>,
    atom_match: impl Fn(&Mol<A1, B1>, NodeIndex, &A2) -> bool,
    bond_match: impl Fn(&B1, &B2) -> bool,
) -> Vec<AtomMapping> {
    Vf2::new(target, query, atom_match, bond_match).run()
}

struct Vf2<'a, A1, B1, A2, B2, FA, FB> {
    target: &'a Mol<A1, B1>,
    query: &'a Mol<A2, B2>,
    atom_match: FA,
    bond_match: FB,
    query_order: Vec<NodeIndex>,
    query_map: Vec<Option<NodeIndex>>,
    target_used: Vec<bool>,
}

impl<'a, A1, B1, A2, B2, FA, FB> Vf2<'a, A1, B1, A2, B2, FA, FB>
where
    FA: Fn(&Mol<A1, B1>, NodeIndex, &A2) -> bool,
    FB: Fn(&B1, &B2) -> bool,
{
    fn new(
        target: &'a Mol<A1, B1>,
        query: &'a Mol<A2, B2>,
        atom_match: FA,
        bond_match: FB,
    ) -> Self {
        Self {
            target,
            query,
            atom_match,
            bond_match,
            query_order: connected_order(query),
            query_map: vec![None; query.atom_count()],
            target_used: vec![false; target.atom_count()],
        }
    }

    fn run(&mut self) -> Vec<AtomMapping> {
        let mut results = Vec::new();
        if self.query.atom_count() <= self.target.atom_count() {
            self.recurse(0, &mut results);
        }
        results
    }

    fn recurse(&mut self, depth: usize, results: &mut Vec<AtomMapping>) {
        if depth == self.query_order.len() {
            let mapping = self
                .query_order
                .iter()
                .filter_map(|&qn| self.query_map[qn.index()].map(|tn| (qn, tn)))
                .collect();
            results.push(mapping);
            return;
        }

        let query_node = self.query_order[depth];

        for t_idx in 0..self.target_used.len() {
            if self.target_used[t_idx] {
                continue;
            }

            let target_node = NodeIndex::new(t_idx);
            if !self.is_feasible(query_node, target_node) {
                continue;
            }

            self.query_map[query_node.index()] = Some(target_node);
            self.target_used[t_idx] = true;

            self.recurse(depth + 1, results);

            self.query_map[query_node.index()] = None;
            self.target_used[t_idx] = false;
        }
    }

    fn is_feasible(&self, query_node: NodeIndex, target_node: NodeIndex) -> bool {
        if self.target.degree(target_node) < self.query.degree(query_node) {
            return false;
        }
        if !(self.atom_match)(self.target, target_node, self.query.atom(query_node)) {
            return false;
        }

        for q_bond in self.query.bonds_of(query_node) {
            let Some(q_neighbor) = self.query.other_end(q_bond, query_node) else {
                continue;
            };
            let Some(t_mapped) = self.query_map[q_neighbor.index()] else {
                continue;
            };
            match self.target.bond_between(target_node, t_mapped) {
                Some(t_bond) => {
                    if !(self.bond_match)(self.target.bond(t_bond), self.query.bond(q_bond)) {
                        return false;
                    }
                }
                None => return false,
            }
        }

        true
    }
}

/// Breadth-first order from the highest-degree atom of each component, so
/// every atom after the first in a component already has a mapped neighbour.
fn connected_order<A, B>(query: &Mol<A, B>) -> Vec<NodeIndex> {
    let mut seeds: Vec<NodeIndex> = query.atoms().collect();
    seeds.sort_by_key(|&a| std::cmp::Reverse(query.degree(a)));

    let mut seen = vec![false; query.atom_count()];
    let mut order = Vec::with_capacity(query.atom_count());
    for seed in seeds {
        if seen[seed.index()] {
            continue;
        }
        seen[seed.index()] = true;
        let start = order.len();
        order.push(seed);
        let mut head = start;
        while head < order.len() {
            let cur = order[head];
            head += 1;
            for nb in query.neighbors(cur) {
                if !seen[nb.index()] {
                    seen[nb.index()] = true;
                    order.push(nb);
                }
            }
        }
    }
    order
}
