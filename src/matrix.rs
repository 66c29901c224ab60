//! Topological matrices of a molecular graph.
//!
//! [`AdjacencyMatrix`] records which atoms are bonded (optionally with the
//! bond multiplicity), [`shortest_paths`] turns it into a [`DistanceMatrix`]
//! of bond counts with Floyd–Warshall relaxation. Unreachable pairs are
//! `None`; nothing that sums distances ever treats `None` as a number.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("matrix must be square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// Square, row-major matrix of bond weights. Zero means "not bonded".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    n: usize,
    cells: Vec<u32>,
}

impl AdjacencyMatrix {
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            cells: vec![0; n * n],
        }
    }

    /// Builds a matrix from caller-supplied rows.
    ///
    /// Only the shape is checked. Symmetry and a zero diagonal are the
    /// caller's responsibility; [`shortest_paths`] ignores the diagonal.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, MatrixError> {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != n {
                return Err(MatrixError::NotSquare {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
            cells.extend_from_slice(values);
        }
        Ok(Self { n, cells })
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.n + j]
    }

    pub fn is_bonded(&self, i: usize, j: usize) -> bool {
        self.get(i, j) != 0
    }

    pub fn row(&self, i: usize) -> &[u32] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        (0..self.n).map(|i| self.row(i).to_vec()).collect()
    }

    pub(crate) fn set_symmetric(&mut self, i: usize, j: usize, value: u32) {
        self.cells[i * self.n + j] = value;
        self.cells[j * self.n + i] = value;
    }
}

/// All-pairs shortest-path lengths. `None` marks an unreachable pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceMatrix {
    n: usize,
    cells: Vec<Option<u32>>,
}

/// Floyd–Warshall all-pairs shortest paths over `adjacency`.
///
/// A non-zero entry `w` at `(i, j)` is an edge of length `w`; with a 0/1
/// matrix the result is the topological (hop-count) distance. The diagonal
/// is always `Some(0)`.
///
/// # Examples
///
/// ```
/// use chemcrab_descriptors::matrix::{shortest_paths, AdjacencyMatrix};
///
/// let adj = AdjacencyMatrix::from_rows(&[
///     vec![0, 1, 0],
///     vec![1, 0, 1],
///     vec![0, 1, 0],
/// ])
/// .unwrap();
/// let dist = shortest_paths(&adj);
/// assert_eq!(dist.get(0, 2), Some(2));
/// ```
pub fn shortest_paths(adjacency: &AdjacencyMatrix) -> DistanceMatrix {
    let n = adjacency.size();
    let mut cells = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            cells.push(match adjacency.get(i, j) {
                _ if i == j => Some(0),
                0 => None,
                w => Some(w),
            });
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(d_ik) = cells[i * n + k] else {
                continue;
            };
            for j in 0..n {
                let Some(d_kj) = cells[k * n + j] else {
                    continue;
                };
                let through = d_ik.saturating_add(d_kj);
                let cell = &mut cells[i * n + j];
                if cell.map_or(true, |d| through < d) {
                    *cell = Some(through);
                }
            }
        }
    }

    DistanceMatrix { n, cells }
}

impl DistanceMatrix {
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> Option<u32> {
        self.cells[i * self.n + j]
    }

    pub fn row(&self, i: usize) -> &[Option<u32>] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }

    pub fn to_rows(&self) -> Vec<Vec<Option<u32>>> {
        (0..self.n).map(|i| self.row(i).to_vec()).collect()
    }

    /// True when every pair is reachable. Vacuously true for 0 atoms.
    pub fn is_connected(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Unordered pairs `i < j` with a finite distance.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        (0..self.n).flat_map(move |i| {
            ((i + 1)..self.n).filter_map(move |j| self.get(i, j).map(|d| (i, j, d)))
        })
    }

    /// Sum of finite distances over unordered pairs (Wiener path number).
    pub fn path_sum(&self) -> u64 {
        self.pairs().map(|(_, _, d)| u64::from(d)).sum()
    }

    /// Number of unordered pairs exactly `distance` apart.
    pub fn count_at(&self, distance: u32) -> usize {
        self.pairs().filter(|&(_, _, d)| d == distance).count()
    }

    /// Largest distance from `i`, or `None` if some atom is unreachable.
    pub fn eccentricity(&self, i: usize) -> Option<u32> {
        self.row(i)
            .iter()
            .try_fold(0, |acc, d| d.map(|d| acc.max(d)))
    }

    pub fn eccentricities(&self) -> Option<Vec<u32>> {
        (0..self.n).map(|i| self.eccentricity(i)).collect()
    }

    /// Smallest eccentricity. `None` for an empty or disconnected graph.
    pub fn radius(&self) -> Option<u32> {
        self.eccentricities()?.into_iter().min()
    }

    /// Largest eccentricity. `None` for an empty or disconnected graph.
    pub fn diameter(&self) -> Option<u32> {
        self.eccentricities()?.into_iter().max()
    }

    /// Moreau–Broto autocorrelation at topological lag `lag`.
    ///
    /// Sums `w[i] * w[j]` over ordered pairs exactly `lag` bonds apart. For
    /// `lag > 0` each unordered pair is seen twice, so the sum is halved;
    /// lag 0 pairs every atom with itself once.
    ///
    /// # Panics
    ///
    /// Panics if `weights.len() != self.size()`.
    pub fn autocorrelation(&self, weights: &[f64], lag: u32) -> f64 {
        assert_eq!(weights.len(), self.n, "one weight per atom");
        let mut sum = 0.0;
        for i in 0..self.n {
            for j in 0..self.n {
                if self.get(i, j) == Some(lag) {
                    sum += weights[i] * weights[j];
                }
            }
        }
        if lag > 0 {
            sum / 2.0
        } else {
            sum
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(n: usize) -> AdjacencyMatrix {
        let mut adj = AdjacencyMatrix::zeros(n);
        for i in 1..n {
            adj.set_symmetric(i - 1, i, 1);
        }
        adj
    }

    fn cycle(n: usize) -> AdjacencyMatrix {
        let mut adj = path(n);
        adj.set_symmetric(n - 1, 0, 1);
        adj
    }

    #[test]
    fn empty_matrix() {
        let dist = shortest_paths(&AdjacencyMatrix::zeros(0));
        assert_eq!(dist.size(), 0);
        assert_eq!(dist.path_sum(), 0);
        assert!(dist.radius().is_none());
        assert!(dist.diameter().is_none());
        assert!(dist.is_connected());
    }

    #[test]
    fn four_vertex_path() {
        let dist = shortest_paths(&path(4));
        let expected: Vec<Vec<Option<u32>>> =
            [[0, 1, 2, 3], [1, 0, 1, 2], [2, 1, 0, 1], [3, 2, 1, 0]]
                .iter()
                .map(|row| row.iter().map(|&d| Some(d)).collect())
                .collect();
        assert_eq!(dist.to_rows(), expected);
        assert_eq!(dist.path_sum(), 10);
        assert_eq!(dist.count_at(3), 1);
    }

    #[test]
    fn path_wiener_closed_form() {
        for n in 1..12u64 {
            let dist = shortest_paths(&path(n as usize));
            assert_eq!(dist.path_sum(), n * (n * n - 1) / 6, "path of {n}");
            assert_eq!(dist.get(0, n as usize - 1), Some(n as u32 - 1));
        }
    }

    #[test]
    fn isolated_pair_is_unreachable() {
        let dist = shortest_paths(&AdjacencyMatrix::zeros(2));
        assert_eq!(dist.get(0, 1), None);
        assert_eq!(dist.get(1, 0), None);
        assert_eq!(dist.get(0, 0), Some(0));
        assert!(!dist.is_connected());
        assert_eq!(dist.eccentricity(0), None);
        assert_eq!(dist.radius(), None);
        assert_eq!(dist.path_sum(), 0);
    }

    #[test]
    fn four_cycle_eccentricities() {
        let dist = shortest_paths(&cycle(4));
        assert_eq!(dist.eccentricities(), Some(vec![2, 2, 2, 2]));
        assert_eq!(dist.radius(), Some(2));
        assert_eq!(dist.diameter(), Some(2));
    }

    #[test]
    fn star_radius_and_diameter() {
        let mut adj = AdjacencyMatrix::zeros(5);
        for leaf in 1..5 {
            adj.set_symmetric(0, leaf, 1);
        }
        let dist = shortest_paths(&adj);
        assert_eq!(dist.eccentricity(0), Some(1));
        assert_eq!(dist.eccentricity(3), Some(2));
        assert_eq!(dist.radius(), Some(1));
        assert_eq!(dist.diameter(), Some(2));
    }

    #[test]
    fn sums_skip_unreachable_pairs() {
        // 0-1-2   3-4
        let mut adj = AdjacencyMatrix::zeros(5);
        adj.set_symmetric(0, 1, 1);
        adj.set_symmetric(1, 2, 1);
        adj.set_symmetric(3, 4, 1);
        let dist = shortest_paths(&adj);
        assert_eq!(dist.path_sum(), 1 + 2 + 1 + 1);
        assert_eq!(dist.pairs().count(), 4);
        assert_eq!(dist.eccentricity(0), None);
    }

    #[test]
    fn weighted_edges() {
        // 0 =2= 1 -1- 2, plus a direct 0-2 edge of weight 5
        let adj =
            AdjacencyMatrix::from_rows(&[vec![0, 2, 5], vec![2, 0, 1], vec![5, 1, 0]]).unwrap();
        let dist = shortest_paths(&adj);
        assert_eq!(dist.get(0, 2), Some(3));
        assert_eq!(dist.get(2, 0), Some(3));
    }

    #[test]
    fn idempotent() {
        let adj = cycle(7);
        assert_eq!(shortest_paths(&adj), shortest_paths(&adj));
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = AdjacencyMatrix::from_rows(&[vec![0, 1], vec![1]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn from_rows_round_trip() {
        let rows = vec![vec![0, 1, 0], vec![1, 0, 2], vec![0, 2, 0]];
        let adj = AdjacencyMatrix::from_rows(&rows).unwrap();
        assert_eq!(adj.to_rows(), rows);
        assert!(adj.is_bonded(1, 2));
        assert!(!adj.is_bonded(0, 2));
    }

    #[test]
    fn autocorrelation_lags() {
        // weights 1, 2, 3 on a 3-path
        let dist = shortest_paths(&path(3));
        let w = [1.0, 2.0, 3.0];
        assert_eq!(dist.autocorrelation(&w, 0), 1.0 + 4.0 + 9.0);
        assert_eq!(dist.autocorrelation(&w, 1), 1.0 * 2.0 + 2.0 * 3.0);
        assert_eq!(dist.autocorrelation(&w, 2), 1.0 * 3.0);
        assert_eq!(dist.autocorrelation(&w, 3), 0.0);
    }

    #[test]
    #[should_panic(expected = "one weight per atom")]
    fn autocorrelation_weight_count_mismatch() {
        shortest_paths(&path(3)).autocorrelation(&[1.0], 0);
    }
}
