use petgraph::graph::NodeIndex;

use crate::atom::Atom;
use crate::bond::Bond;
use crate::graph_ops::{distance_matrix, num_components};
use crate::hydrogen::remove_hs;
use crate::matrix::DistanceMatrix;
use crate::mol::Mol;
use crate::rings::RingInfo;

use super::DescriptorError;

/// Distance matrix of a non-empty, single-fragment molecule.
fn connected_distances(mol: &Mol<Atom, Bond>) -> Result<DistanceMatrix, DescriptorError> {
    if mol.is_empty() {
        return Err(DescriptorError::EmptyMolecule);
    }
    let distances = distance_matrix(mol);
    if !distances.is_connected() {
        let components = num_components(mol);
        log::warn!("rejecting molecule with {components} fragments");
        return Err(DescriptorError::Disconnected { components });
    }
    Ok(distances)
}

/// `[WPATH, WPOL]` of the hydrogen-suppressed graph.
///
/// WPATH sums the topological distance of every connected atom pair; WPOL
/// counts pairs exactly three bonds apart.
pub fn wiener_numbers(mol: &Mol<Atom, Bond>) -> [f64; 2] {
    let distances = distance_matrix(&remove_hs(mol));
    [distances.path_sum() as f64, distances.count_at(3) as f64]
}

/// Σ eccentricity × heavy-atom degree over the hydrogen-suppressed graph.
pub fn eccentric_connectivity_index(mol: &Mol<Atom, Bond>) -> Result<i64, DescriptorError> {
    let heavy = remove_hs(mol);
    let distances = connected_distances(&heavy)?;
    let eccentricities = distances
        .eccentricities()
        .ok_or(DescriptorError::Disconnected {
            components: num_components(&heavy),
        })?;
    Ok(heavy
        .atoms()
        .map(|idx| i64::from(eccentricities[idx.index()]) * heavy.degree(idx) as i64)
        .sum())
}

/// `(diameter − radius) / diameter`, or 0 for a single atom.
pub fn petitjean_number(mol: &Mol<Atom, Bond>) -> Result<f64, DescriptorError> {
    let heavy = remove_hs(mol);
    let distances = connected_distances(&heavy)?;
    let (Some(radius), Some(diameter)) = (distances.radius(), distances.diameter()) else {
        return Err(DescriptorError::Disconnected {
            components: num_components(&heavy),
        });
    };
    if diameter == 0 {
        return Ok(0.0);
    }
    Ok(f64::from(diameter - radius) / f64::from(diameter))
}

/// Atoms shared by two rings that have no bond in common.
///
/// A spiro atom carries at least four ring bonds, and deleting it leaves
/// its ring neighbours in at least two groups that no ring bond connects.
pub fn spiro_atom_count(mol: &Mol<Atom, Bond>) -> i64 {
    let rings = RingInfo::sssr(mol);
    if rings.num_rings() < 2 {
        return 0;
    }
    mol.atoms()
        .filter(|&idx| is_spiro_atom(mol, &rings, idx))
        .count() as i64
}

fn is_spiro_atom(mol: &Mol<Atom, Bond>, rings: &RingInfo, center: NodeIndex) -> bool {
    let ring_neighbors: Vec<NodeIndex> = mol
        .bonds_of(center)
        .filter(|&e| rings.is_ring_bond(e))
        .filter_map(|e| mol.other_end(e, center))
        .collect();
    if ring_neighbors.len() < 4 {
        return false;
    }

    // flood the ring-bond graph from one neighbour without passing `center`
    let mut seen = vec![false; mol.atom_count()];
    seen[center.index()] = true;
    seen[ring_neighbors[0].index()] = true;
    let mut stack = vec![ring_neighbors[0]];
    while let Some(cur) = stack.pop() {
        for e in mol.bonds_of(cur).filter(|&e| rings.is_ring_bond(e)) {
            if let Some(next) = mol.other_end(e, cur) {
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    stack.push(next);
                }
            }
        }
    }
    ring_neighbors.iter().any(|nb| !seen[nb.index()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bond::BondOrder;
    use crate::hydrogen::add_hs;
    use crate::testing;

    #[test]
    fn wiener_numbers_of_butane() {
        assert_eq!(wiener_numbers(&testing::chain(4)), [10.0, 1.0]);
    }

    #[test]
    fn wiener_numbers_ignore_hydrogens() {
        let mol = testing::ethanol();
        assert_eq!(wiener_numbers(&mol), wiener_numbers(&add_hs(&mol)));
        assert_eq!(wiener_numbers(&mol), [4.0, 0.0]);
    }

    #[test]
    fn wiener_numbers_of_neopentane() {
        // 4 centre–methyl pairs at 1, 6 methyl–methyl pairs at 2
        assert_eq!(wiener_numbers(&testing::neopentane()), [16.0, 0.0]);
    }

    #[test]
    fn wiener_numbers_of_benzene() {
        // 6 pairs at 1, 6 at 2, 3 at 3
        assert_eq!(wiener_numbers(&testing::benzene()), [27.0, 3.0]);
    }

    #[test]
    fn wiener_numbers_skip_disconnected_pairs() {
        assert_eq!(wiener_numbers(&testing::sodium_chloride()), [0.0, 0.0]);
    }

    #[test]
    fn eccentric_connectivity_of_chains() {
        // ecc 3,2,2,3 with degree 1,2,2,1
        assert_eq!(eccentric_connectivity_index(&testing::chain(4)), Ok(14));
        assert_eq!(eccentric_connectivity_index(&testing::methane()), Ok(0));
        assert_eq!(eccentric_connectivity_index(&testing::neopentane()), Ok(12));
    }

    #[test]
    fn eccentric_connectivity_of_cycle() {
        assert_eq!(eccentric_connectivity_index(&testing::cycle(4)), Ok(16));
    }

    #[test]
    fn eccentric_connectivity_rejects_fragments() {
        assert_eq!(
            eccentric_connectivity_index(&testing::sodium_chloride()),
            Err(DescriptorError::Disconnected { components: 2 })
        );
        assert_eq!(
            eccentric_connectivity_index(&Mol::new()),
            Err(DescriptorError::EmptyMolecule)
        );
    }

    #[test]
    fn petitjean_values() {
        assert_eq!(petitjean_number(&testing::cycle(4)), Ok(0.0));
        assert_eq!(petitjean_number(&testing::methane()), Ok(0.0));
        // radius 2, diameter 3
        assert_eq!(petitjean_number(&testing::chain(4)), Ok(1.0 / 3.0));
        // radius 1, diameter 2
        assert_eq!(petitjean_number(&testing::neopentane()), Ok(0.5));
        assert_eq!(petitjean_number(&add_hs(&testing::neopentane())), Ok(0.5));
    }

    #[test]
    fn petitjean_rejects_fragments() {
        assert_eq!(
            petitjean_number(&testing::sodium_chloride()),
            Err(DescriptorError::Disconnected { components: 2 })
        );
        assert_eq!(petitjean_number(&Mol::new()), Err(DescriptorError::EmptyMolecule));
    }

    #[test]
    fn spiro_counts() {
        assert_eq!(spiro_atom_count(&testing::spiro_nonane()), 1);
        assert_eq!(spiro_atom_count(&testing::naphthalene()), 0);
        assert_eq!(spiro_atom_count(&testing::cycle(6)), 0);
        assert_eq!(spiro_atom_count(&testing::chain(5)), 0);
    }

    #[test]
    fn ring_linked_by_chain_is_not_spiro() {
        // two cyclopropanes joined by a single bond C0-C3
        let s = Bond::new(BondOrder::Single);
        let mol = testing::mol_from(
            &[
                Atom::with_hydrogens(6, 1),
                Atom::with_hydrogens(6, 2),
                Atom::with_hydrogens(6, 2),
                Atom::with_hydrogens(6, 1),
                Atom::with_hydrogens(6, 2),
                Atom::with_hydrogens(6, 2),
            ],
            &[
                (0, 1, s),
                (1, 2, s),
                (2, 0, s),
                (3, 4, s),
                (4, 5, s),
                (5, 3, s),
                (0, 3, s),
            ],
        );
        assert_eq!(spiro_atom_count(&mol), 0);
    }
}
