use std::fmt;

use serde::Serialize;

/// An immutable N-by-N sliding-tile configuration.
///
/// Tiles are stored row-major; the value 0 is the blank. A non-blank value
/// `v` belongs at row `(v-1)/n`, column `(v-1)%n`. Every transformation
/// (`twin`, `neighbors`) returns a fresh `Board`; nothing mutates in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    dim: usize,
    tiles: Box<[u32]>,
}

impl Board {
    /// Construct a board from an N-by-N grid of tile values.
    ///
    /// The grid is copied, so the caller's buffer cannot alias solver state.
    /// Fails unless the input is square, at least 2x2, and its values are
    /// exactly a permutation of `0..n*n` (one blank, each tile once).
    pub fn new(grid: Vec<Vec<u32>>) -> Result<Self, String> {
        let dim = grid.len();
        if dim < 2 {
            return Err(format!("Board must be at least 2x2, got dimension {dim}"));
        }
        let mut tiles = Vec::with_capacity(dim * dim);
        for (r, row) in grid.iter().enumerate() {
            if row.len() != dim {
                return Err(format!(
                    "Board is not square: row {r} has {} cells, expected {dim}",
                    row.len()
                ));
            }
            tiles.extend_from_slice(row);
        }

        let mut seen = vec![false; dim * dim];
        for &v in &tiles {
            let v = v as usize;
            if v >= dim * dim {
                return Err(format!(
                    "Tile value {v} out of range for a {dim}x{dim} board"
                ));
            }
            if seen[v] {
                return Err(format!("Duplicate tile value {v}"));
            }
            seen[v] = true;
        }

        Ok(Self {
            dim,
            tiles: tiles.into_boxed_slice(),
        })
    }

    /// The solved configuration: tiles in row-major order, blank last.
    pub fn goal(dim: usize) -> Self {
        debug_assert!(dim >= 2);
        let mut tiles: Vec<u32> = (1..(dim * dim) as u32).collect();
        tiles.push(0);
        Self {
            dim,
            tiles: tiles.into_boxed_slice(),
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dim
    }

    #[inline]
    fn at(&self, r: usize, c: usize) -> u32 {
        self.tiles[r * self.dim + c]
    }

    /// Number of non-blank tiles that are not on their goal cell.
    pub fn hamming(&self) -> u32 {
        let mut out = 0;
        for (i, &v) in self.tiles.iter().enumerate() {
            if v != 0 && v as usize != i + 1 {
                out += 1;
            }
        }
        out
    }

    /// Sum of taxicab distances from each non-blank tile to its goal cell.
    /// Admissible and consistent under single-tile slides; this is the
    /// search heuristic.
    pub fn manhattan(&self) -> u32 {
        let n = self.dim;
        let mut out = 0u32;
        for (i, &v) in self.tiles.iter().enumerate() {
            if v == 0 {
                continue;
            }
            let (r, c) = (i / n, i % n);
            let goal = (v - 1) as usize;
            let (gr, gc) = (goal / n, goal % n);
            out += r.abs_diff(gr) as u32 + c.abs_diff(gc) as u32;
        }
        out
    }

    #[inline]
    pub fn is_goal(&self) -> bool {
        self.hamming() == 0
    }

    #[inline]
    fn blank_index(&self) -> usize {
        // Exactly one 0 exists by the constructor invariant.
        self.tiles.iter().position(|&v| v == 0).unwrap_or(0)
    }

    fn with_swap(&self, a: usize, b: usize) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(a, b);
        Self {
            dim: self.dim,
            tiles,
        }
    }

    /// A board obtained by exchanging two adjacent non-blank tiles in the
    /// same row: cells (0,0)/(0,1) when both hold tiles, else (1,0)/(1,1).
    ///
    /// The single swap flips permutation parity, so exactly one of
    /// {`self`, `self.twin()`} is solvable.
    pub fn twin(&self) -> Self {
        if self.at(0, 0) != 0 && self.at(0, 1) != 0 {
            self.with_swap(0, 1)
        } else {
            self.with_swap(self.dim, self.dim + 1)
        }
    }

    /// All configurations reachable by sliding one tile into the blank.
    /// Returns 2 boards for a corner blank, 3 for an edge, 4 for the
    /// interior. Order is not part of the contract.
    pub fn neighbors(&self) -> Vec<Board> {
        let n = self.dim;
        let blank = self.blank_index();
        let (r, c) = (blank / n, blank % n);

        let mut out = Vec::with_capacity(4);
        if r > 0 {
            out.push(self.with_swap(blank, blank - n));
        }
        if r < n - 1 {
            out.push(self.with_swap(blank, blank + n));
        }
        if c > 0 {
            out.push(self.with_swap(blank, blank - 1));
        }
        if c < n - 1 {
            out.push(self.with_swap(blank, blank + 1));
        }
        out
    }

    /// Direct solvability check via inversion parity.
    ///
    /// Odd N: solvable iff the inversion count is even. Even N: solvable
    /// iff inversions plus the blank's row index is odd. Agrees with the
    /// dual-search verdict at a fraction of the cost; the solver keeps the
    /// dual search as its canonical mechanism and this as a cross-check.
    pub fn parity_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.dim % 2 == 1 {
            inversions % 2 == 0
        } else {
            let blank_row = self.blank_index() / self.dim;
            (inversions + blank_row) % 2 == 1
        }
    }

    fn inversions(&self) -> usize {
        let mut out = 0;
        for (i, &a) in self.tiles.iter().enumerate() {
            if a == 0 {
                continue;
            }
            out += self.tiles[i + 1..]
                .iter()
                .filter(|&&b| b != 0 && b < a)
                .count();
        }
        out
    }
}

impl fmt::Display for Board {
    /// Text form consumed by `parse::parse_board`: the dimension on the
    /// first line, then one row of width-2 values per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.dim)?;
        for r in 0..self.dim {
            for c in 0..self.dim {
                write!(f, "{:2} ", self.at(r, c))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_square_grid() {
        let err = Board::new(vec![vec![1, 2], vec![0]]).unwrap_err();
        assert!(err.contains("not square"), "{err}");
    }

    #[test]
    fn rejects_duplicate_and_out_of_range_values() {
        assert!(Board::new(vec![vec![1, 1], vec![2, 0]]).is_err());
        assert!(Board::new(vec![vec![1, 9], vec![2, 0]]).is_err());
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        assert!(Board::new(vec![]).is_err());
        assert!(Board::new(vec![vec![0]]).is_err());
    }

    #[test]
    fn twin_swaps_row_one_when_blank_in_row_zero() {
        let b = Board::new(vec![vec![0, 1], vec![3, 2]]).unwrap();
        let tw = b.twin();
        assert_eq!(tw, Board::new(vec![vec![0, 1], vec![2, 3]]).unwrap());
    }

    #[test]
    fn inversion_parity_matches_known_boards() {
        let solvable = Board::new(vec![vec![8, 1, 3], vec![4, 0, 2], vec![7, 6, 5]]).unwrap();
        assert!(solvable.parity_solvable());
        assert!(!solvable.twin().parity_solvable());

        let unsolvable = Board::new(vec![vec![1, 2, 3], vec![4, 5, 6], vec![8, 7, 0]]).unwrap();
        assert!(!unsolvable.parity_solvable());
    }
}
