//! Occupancy grid for one construction attempt.

use crate::Square;

/// A legal next square together with its Warnsdorff degree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub square: Square,
    /// Legal squares reachable from `square` on the current grid
    pub degree: usize,
}

/// N×N grid recording the step at which each square was visited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<usize>>,
}

impl Board {
    /// Create an empty board. `size` must be at least 1.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Total number of squares
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Mark every square unvisited
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Step index at which `square` was visited, if any
    pub fn step_at(&self, square: Square) -> Option<usize> {
        if !square.in_bounds(self.size) {
            return None;
        }
        self.cells[square.index(self.size)]
    }

    /// On the board and not yet visited
    pub fn is_legal(&self, square: Square) -> bool {
        square.in_bounds(self.size) && self.cells[square.index(self.size)].is_none()
    }

    /// Record `square` as visited at `step`. Caller checks legality first.
    pub fn visit(&mut self, square: Square, step: usize) {
        debug_assert!(self.is_legal(square), "{} is not a legal square", square);
        let idx = square.index(self.size);
        self.cells[idx] = Some(step);
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of legal knight moves out of `square` (its Warnsdorff degree)
    pub fn onward_moves(&self, square: Square) -> usize {
        square.knight_targets().filter(|&t| self.is_legal(t)).count()
    }

    /// Legal knight moves from `from`, each scored by onward-move count
    pub fn candidates(&self, from: Square) -> Vec<Candidate> {
        from.knight_targets()
            .filter(|&t| self.is_legal(t))
            .map(|square| Candidate {
                square,
                degree: self.onward_moves(square),
            })
            .collect()
    }

    /// Every candidate sharing the minimum degree, in offset order.
    /// Empty when `from` is a dead end.
    pub fn tie_set(&self, from: Square) -> Vec<Square> {
        let candidates = self.candidates(from);
        let Some(min_degree) = candidates.iter().map(|c| c.degree).min() else {
            return Vec::new();
        };
        candidates
            .into_iter()
            .filter(|c| c.degree == min_degree)
            .map(|c| c.square)
            .collect()
    }
}
