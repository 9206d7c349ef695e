use crate::{PathDefect, Square};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A completed knight's tour
///
/// Deserializing checks the path with [`verify_path`] and recomputes `closed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTour")]
pub struct Tour {
    /// Board width and height
    pub size: usize,
    /// Visited squares in order, `path[0]` is the start
    pub path: Vec<Square>,
    /// Whether the last square is a knight move from the start
    pub closed: bool,
    /// 1-based attempt that produced this tour
    pub attempt: usize,
}

impl Tour {
    pub(crate) fn new(size: usize, path: Vec<Square>, attempt: usize) -> Self {
        let closed = is_closed(&path);
        Self {
            size,
            path,
            closed,
            attempt,
        }
    }

    pub fn start(&self) -> Option<Square> {
        self.path.first().copied()
    }

    pub fn last(&self) -> Option<Square> {
        self.path.last().copied()
    }

    /// Number of knight moves made (one less than the squares visited)
    pub fn move_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Consecutive `(from, to)` pairs along the path
    pub fn moves(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.path.windows(2).map(|w| (w[0], w[1]))
    }

    /// Step index of every square, indexed `[y][x]`. Squares off the board
    /// are skipped.
    pub fn step_grid(&self) -> Vec<Vec<usize>> {
        let mut grid = vec![vec![0; self.size]; self.size];
        for (step, sq) in self.path.iter().enumerate() {
            if sq.in_bounds(self.size) {
                grid[sq.y as usize][sq.x as usize] = step;
            }
        }
        grid
    }
}

/// Wire form of [`Tour`] before validation
#[derive(Deserialize)]
struct RawTour {
    size: usize,
    path: Vec<Square>,
    #[serde(default = "first_attempt")]
    attempt: usize,
}

fn first_attempt() -> usize {
    1
}

impl TryFrom<RawTour> for Tour {
    type Error = PathDefect;

    fn try_from(raw: RawTour) -> Result<Self, Self::Error> {
        verify_path(raw.size, &raw.path)?;
        Ok(Tour::new(raw.size, raw.path, raw.attempt))
    }
}

/// A path is closed when its last square is a knight move from its first.
/// Empty and single-square paths are open.
pub fn is_closed(path: &[Square]) -> bool {
    match (path.first(), path.last()) {
        (Some(&first), Some(&last)) => first.is_knight_move_from(last),
        _ => false,
    }
}

/// Check that `path` is a complete knight's tour of a `size`×`size` board
pub fn verify_path(size: usize, path: &[Square]) -> Result<(), PathDefect> {
    let Some(expected) = size.checked_mul(size) else {
        return Err(PathDefect::UnaddressableSize { size });
    };
    if path.len() != expected {
        return Err(PathDefect::WrongLength {
            expected,
            actual: path.len(),
        });
    }

    let mut seen = HashSet::with_capacity(expected);
    for (step, &square) in path.iter().enumerate() {
        if !square.in_bounds(size) {
            return Err(PathDefect::OutOfBounds { step, square });
        }
        if !seen.insert(square) {
            return Err(PathDefect::Revisited { step, square });
        }
        if step > 0 {
            let from = path[step - 1];
            if !square.is_knight_move_from(from) {
                return Err(PathDefect::NotAKnightMove {
                    step,
                    from,
                    to: square,
                });
            }
        }
    }
    Ok(())
}
