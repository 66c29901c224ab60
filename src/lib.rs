//! Molecular descriptors on petgraph molecular graphs.
//!
//! The core is a topological distance matrix engine:
//! [`adjacency_matrix`] builds the bond adjacency of a [`Mol`],
//! [`shortest_paths`] runs Floyd–Warshall over it, and [`DistanceMatrix`]
//! exposes the derived quantities (path sums, eccentricities,
//! autocorrelation) that topological descriptors are built from.
//!
//! ```
//! use chemcrab_descriptors::{distance_matrix, Atom, Bond, Descriptor, DescriptorResult, Mol};
//!
//! let mut mol = Mol::<Atom, Bond>::new();
//! let atoms: Vec<_> = (0..4).map(|_| mol.add_atom(Atom::with_hydrogens(6, 2))).collect();
//! for pair in atoms.windows(2) {
//!     mol.add_bond(pair[0], pair[1], Bond::default());
//! }
//!
//! assert_eq!(distance_matrix(&mol).path_sum(), 10);
//!
//! let wiener = Descriptor::WienerNumbers.calculate(&mol).unwrap();
//! assert_eq!(wiener.names, ["WPATH", "WPOL"]);
//! assert_eq!(wiener.result, DescriptorResult::DoubleArray(vec![10.0, 1.0]));
//! ```

pub mod atom;
pub mod bond;
pub mod charges;
pub mod descriptor;
pub mod element;
pub mod graph_ops;
pub mod hybridization;
pub mod hydrogen;
pub mod matrix;
pub mod mol;
pub mod pattern;
pub mod rings;
pub mod substruct;
pub mod traits;

pub use atom::Atom;
pub use bond::{Bond, BondOrder};
pub use charges::{gasteiger_charges, ChargeError};
pub use descriptor::{
    calculate_all, BondKind, Descriptor, DescriptorConfig, DescriptorError, DescriptorResult,
    DescriptorValue,
};
pub use element::{atomic_num_from_symbol, element, ElementData};
pub use graph_ops::{
    adjacency_matrix, bond_order_matrix, connected_components, distance_matrix, num_components,
};
pub use hybridization::{assign_hybridization, Hybridization};
pub use hydrogen::{add_hs, remove_hs, total_hydrogens};
pub use matrix::{shortest_paths, AdjacencyMatrix, DistanceMatrix, MatrixError};
pub use mol::Mol;
pub use rings::RingInfo;
pub use traits::{
    HasAromaticity, HasAtomicNum, HasBondOrder, HasFormalCharge, HasHydrogenCount, HasIsotope,
};

#[cfg(test)]
mod testing;
