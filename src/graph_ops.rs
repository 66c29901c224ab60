use petgraph::graph::NodeIndex;

use crate::matrix::{shortest_paths, AdjacencyMatrix, DistanceMatrix};
use crate::mol::Mol;
use crate::traits::HasBondOrder;

/// 0/1 adjacency matrix of the molecular graph.
pub fn adjacency_matrix<A, B>(mol: &Mol<A, B>) -> AdjacencyMatrix {
    weighted_adjacency(mol, |_| 1)
}

/// Adjacency matrix holding the bond multiplicity (1, 2 or 3).
pub fn bond_order_matrix<A, B: HasBondOrder>(mol: &Mol<A, B>) -> AdjacencyMatrix {
    weighted_adjacency(mol, |bond| u32::from(bond.bond_order().multiplicity()))
}

fn weighted_adjacency<A, B>(mol: &Mol<A, B>, weight: impl Fn(&B) -> u32) -> AdjacencyMatrix {
    let mut matrix = AdjacencyMatrix::zeros(mol.atom_count());
    for edge in mol.bonds() {
        if let Some((a, b)) = mol.bond_endpoints(edge) {
            if a != b {
                matrix.set_symmetric(a.index(), b.index(), weight(mol.bond(edge)));
            }
        }
    }
    matrix
}

/// Topological distance (bond count) between every pair of atoms.
pub fn distance_matrix<A, B>(mol: &Mol<A, B>) -> DistanceMatrix {
    shortest_paths(&adjacency_matrix(mol))
}

pub fn connected_components<A, B>(mol: &Mol<A, B>) -> Vec<Vec<NodeIndex>> {
    let n = mol.atom_count();
    let mut visited = vec![false; n];
    let mut components = Vec::new();
    for node in mol.atoms() {
        if visited[node.index()] {
            continue;
        }
        let mut component = Vec::new();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if visited[current.index()] {
                continue;
            }
            visited[current.index()] = true;
            component.push(current);
            for neighbor in mol.neighbors(current) {
                if !visited[neighbor.index()] {
                    stack.push(neighbor);
                }
            }
        }
        component.sort();
        components.push(component);
    }
    components
}

pub fn num_components<A, B>(mol: &Mol<A, B>) -> usize {
    connected_components(mol).len()
}
