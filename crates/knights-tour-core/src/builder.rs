use crate::{Board, SimpleRng, Square, TieBreaker, Tour, TourError, TourResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Default board width and height
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Default number of attempts before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Configuration for tour construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    /// Board is `board_size`×`board_size`
    pub board_size: usize,
    /// Maximum attempts before giving up
    pub max_attempts: usize,
    /// Only accept tours that end a knight move from the start
    pub require_closed: bool,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            require_closed: false,
        }
    }
}

impl TourConfig {
    /// Default budget on a board of the given size
    pub fn for_board(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    /// Closed tours only. Warnsdorff rarely closes on the first try, so the
    /// budget is much larger.
    pub fn closed(board_size: usize) -> Self {
        Self {
            board_size,
            max_attempts: 5000,
            require_closed: true,
        }
    }

    /// Reject configurations no attempt could run under
    pub fn validate(&self, start: Square) -> TourResult<()> {
        let size = self.board_size;
        // Coordinates are i32 and the grid holds size² cells
        let addressable = i32::try_from(size).is_ok() && size.checked_mul(size).is_some();
        if size == 0 || !addressable {
            return Err(TourError::InvalidBoardSize { size });
        }
        if !start.in_bounds(size) {
            return Err(TourError::StartOutOfBounds { start, size });
        }
        if self.max_attempts == 0 {
            return Err(TourError::InvalidAttemptBudget);
        }
        Ok(())
    }
}

/// Result of a single construction attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Every square visited
    Complete(Vec<Square>),
    /// No legal move after visiting `visited` squares
    DeadEnd { visited: usize },
}

/// Run one greedy Warnsdorff attempt from `start`, reusing `board`.
///
/// The board is reset first. Each step collects the minimal-degree tie set and
/// asks `rng` for an index into it, so a tie set of one still consumes a pick.
pub fn run_attempt<R: TieBreaker + ?Sized>(
    board: &mut Board,
    start: Square,
    rng: &mut R,
) -> AttemptOutcome {
    board.reset();
    board.visit(start, 0);

    let area = board.area();
    let mut path = Vec::with_capacity(area);
    path.push(start);
    let mut current = start;

    for step in 1..area {
        let ties = board.tie_set(current);
        if ties.is_empty() {
            return AttemptOutcome::DeadEnd { visited: path.len() };
        }

        let next = ties[rng.pick(ties.len())];
        board.visit(next, step);
        path.push(next);
        current = next;
    }

    AttemptOutcome::Complete(path)
}

/// Knight's tour builder
pub struct TourBuilder<R = SimpleRng> {
    config: TourConfig,
    rng: R,
}

impl Default for TourBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TourBuilder {
    /// Create a builder with the default configuration and an entropy-seeded RNG
    pub fn new() -> Self {
        Self::with_rng(TourConfig::default(), SimpleRng::new())
    }

    /// Create a builder with custom configuration
    pub fn with_config(config: TourConfig) -> Self {
        Self::with_rng(config, SimpleRng::new())
    }

    /// Create a builder with a specific seed for reproducibility
    pub fn with_seed(config: TourConfig, seed: u64) -> Self {
        Self::with_rng(config, SimpleRng::with_seed(seed))
    }
}

impl<R: TieBreaker> TourBuilder<R> {
    pub fn with_rng(config: TourConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &TourConfig {
        &self.config
    }

    /// Build a tour starting at `start`
    pub fn build(&mut self, start: Square) -> TourResult<Tour> {
        build_with_config(start, &self.config, &mut self.rng)
    }
}

/// Build a knight's tour.
///
/// Runs up to `max_attempts` randomized Warnsdorff attempts and returns the
/// first one that visits all `board_size`² squares, open or closed.
pub fn build_tour<R: TieBreaker + ?Sized>(
    start: Square,
    board_size: usize,
    max_attempts: usize,
    rng: &mut R,
) -> TourResult<Tour> {
    let config = TourConfig {
        board_size,
        max_attempts,
        require_closed: false,
    };
    build_with_config(start, &config, rng)
}

/// Retry driver shared by [`build_tour`] and [`TourBuilder::build`]
pub fn build_with_config<R: TieBreaker + ?Sized>(
    start: Square,
    config: &TourConfig,
    rng: &mut R,
) -> TourResult<Tour> {
    config.validate(start)?;

    let mut board = Board::new(config.board_size);
    for attempt in 1..=config.max_attempts {
        match run_attempt(&mut board, start, rng) {
            AttemptOutcome::Complete(path) => {
                let tour = Tour::new(config.board_size, path, attempt);
                if config.require_closed && !tour.closed {
                    debug!(attempt, "open tour rejected");
                    continue;
                }
                info!(attempt, closed = tour.closed, size = config.board_size, "knight's tour found");
                return Ok(tour);
            }
            AttemptOutcome::DeadEnd { visited } => {
                debug!(attempt, visited, "dead end");
            }
        }
    }

    warn!(
        attempts = config.max_attempts,
        size = config.board_size,
        %start,
        "no knight's tour found"
    );
    Err(TourError::NotFound {
        attempts: config.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify_path;

    /// Always picks the same index (clamped to the tie set), counting calls
    struct FixedPick {
        index: usize,
        calls: usize,
    }

    impl FixedPick {
        fn new(index: usize) -> Self {
            Self { index, calls: 0 }
        }
    }

    impl TieBreaker for FixedPick {
        fn pick(&mut self, len: usize) -> usize {
            self.calls += 1;
            self.index.min(len - 1)
        }
    }

    #[test]
    fn test_default_config() {
        let config = TourConfig::default();
        assert_eq!(config.board_size, 8);
        assert_eq!(config.max_attempts, 10);
        assert!(!config.require_closed);
    }

    #[test]
    fn test_config_errors() {
        let mut rng = SimpleRng::with_seed(1);
        assert_eq!(
            build_tour(Square::new(0, 0), 0, 10, &mut rng),
            Err(TourError::InvalidBoardSize { size: 0 })
        );
        assert_eq!(
            build_tour(Square::new(8, 0), 8, 10, &mut rng),
            Err(TourError::StartOutOfBounds { start: Square::new(8, 0), size: 8 })
        );
        assert_eq!(
            build_tour(Square::new(-1, 2), 8, 10, &mut rng),
            Err(TourError::StartOutOfBounds { start: Square::new(-1, 2), size: 8 })
        );
        assert_eq!(
            build_tour(Square::new(0, 0), 8, 0, &mut rng),
            Err(TourError::InvalidAttemptBudget)
        );
        assert!(TourError::InvalidAttemptBudget.is_config_error());
    }

    #[test]
    fn test_config_error_runs_no_attempt() {
        let mut rng = FixedPick::new(0);
        let _ = build_tour(Square::new(9, 9), 8, 10, &mut rng);
        assert_eq!(rng.calls, 0);
    }

    #[test]
    fn test_single_square_board() {
        let mut rng = FixedPick::new(0);
        let tour = build_tour(Square::new(0, 0), 1, 1, &mut rng).unwrap();
        assert_eq!(tour.path, vec![Square::new(0, 0)]);
        assert!(!tour.closed);
        assert_eq!(tour.attempt, 1);
        assert_eq!(rng.calls, 0);
    }

    #[test]
    fn test_eight_by_eight_tour_is_valid() {
        let mut rng = SimpleRng::with_seed(42);
        let start = Square::new(3, 4);
        let tour = build_tour(start, 8, 10, &mut rng).unwrap();
        assert_eq!(tour.path.len(), 64);
        assert_eq!(tour.start(), Some(start));
        assert_eq!(verify_path(8, &tour.path), Ok(()));
        assert_eq!(tour.closed, tour.path[63].is_knight_move_from(start));
    }

    #[test]
    fn test_success_rate_over_seeds() {
        let mut successes = 0;
        for seed in 0..40u64 {
            let mut rng = SimpleRng::with_seed(seed);
            let start = Square::new((seed % 8) as i32, (seed / 5 % 8) as i32);
            if let Ok(tour) = build_tour(start, 8, 10, &mut rng) {
                assert_eq!(verify_path(8, &tour.path), Ok(()));
                successes += 1;
            }
        }
        assert!(successes >= 38, "only {} of 40 seeds found a tour", successes);
    }

    #[test]
    fn test_various_sizes_produce_valid_tours() {
        for size in [5usize, 6, 7, 10, 12] {
            let mut rng = SimpleRng::with_seed(size as u64);
            let tour = build_tour(Square::new(0, 0), size, 200, &mut rng)
                .unwrap_or_else(|e| panic!("{}x{}: {}", size, size, e));
            assert_eq!(verify_path(size, &tour.path), Ok(()));
        }
    }

    #[test]
    fn test_exhaustion_on_two_by_two() {
        let mut rng = FixedPick::new(0);
        let result = build_tour(Square::new(0, 0), 2, 4, &mut rng);
        assert_eq!(result, Err(TourError::NotFound { attempts: 4 }));
        assert_eq!(rng.calls, 0);
    }

    #[test]
    fn test_exhaustion_runs_every_attempt() {
        // From a 3x3 corner each attempt walks the outer ring: seven picks,
        // then the centre is unreachable
        for max_attempts in [1usize, 3, 10] {
            let mut rng = FixedPick::new(1);
            let result = build_tour(Square::new(0, 0), 3, max_attempts, &mut rng);
            assert_eq!(result, Err(TourError::NotFound { attempts: max_attempts }));
            assert_eq!(rng.calls, 7 * max_attempts);
        }
    }

    #[test]
    fn test_dead_end_outcome() {
        let mut board = Board::new(3);
        let mut rng = FixedPick::new(0);
        assert_eq!(
            run_attempt(&mut board, Square::new(0, 0), &mut rng),
            AttemptOutcome::DeadEnd { visited: 8 }
        );
        assert_eq!(
            run_attempt(&mut board, Square::new(1, 1), &mut rng),
            AttemptOutcome::DeadEnd { visited: 1 }
        );
    }

    #[test]
    fn test_attempt_keeps_board_and_path_consistent() {
        let mut board = Board::new(8);
        let mut rng = SimpleRng::with_seed(9);
        if let AttemptOutcome::Complete(path) = run_attempt(&mut board, Square::new(0, 0), &mut rng) {
            for (step, &sq) in path.iter().enumerate() {
                assert_eq!(board.step_at(sq), Some(step));
            }
        }
        // Dead ends leave a consistent prefix too
        let mut board = Board::new(3);
        run_attempt(&mut board, Square::new(0, 0), &mut FixedPick::new(0));
        assert_eq!(board.visited_count(), 8);
        assert_eq!(board.step_at(Square::new(1, 1)), None);
    }

    #[test]
    fn test_tie_break_reaches_each_minimal_square() {
        let start = Square::new(0, 0);
        let mut board = Board::new(8);
        board.visit(start, 0);
        let ties = board.tie_set(start);
        assert_eq!(ties.len(), 2);

        for (i, &expected) in ties.iter().enumerate() {
            let mut board = Board::new(8);
            let mut rng = FixedPick::new(i);
            // The board keeps its marks whichever way the attempt ends
            run_attempt(&mut board, start, &mut rng);
            assert_eq!(board.step_at(expected), Some(1));
        }
    }

    #[test]
    fn test_every_choice_is_minimal_degree() {
        // Replay seeded attempts and check each chosen square against a
        // freshly computed tie set
        let mut checked = 0;
        for seed in 0..20u64 {
            let mut board = Board::new(8);
            let mut rng = SimpleRng::with_seed(seed);
            let path = match run_attempt(&mut board, Square::new(2, 5), &mut rng) {
                AttemptOutcome::Complete(path) => path,
                AttemptOutcome::DeadEnd { .. } => continue,
            };

            let mut replay = Board::new(8);
            replay.visit(path[0], 0);
            for step in 1..path.len() {
                let ties = replay.tie_set(path[step - 1]);
                assert!(ties.contains(&path[step]), "seed {} step {} left the tie set", seed, step);
                replay.visit(path[step], step);
            }
            checked += 1;
        }
        assert!(checked > 0);
    }

    #[test]
    fn test_seeded_builder_is_reproducible() {
        let config = TourConfig::default();
        let a = TourBuilder::with_seed(config, 77).build(Square::new(1, 1));
        let b = TourBuilder::with_seed(config, 77).build(Square::new(1, 1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_require_closed_finds_closed_tour() {
        let mut builder = TourBuilder::with_seed(TourConfig::closed(8), 2024);
        let tour = builder.build(Square::new(0, 0)).unwrap();
        assert!(tour.closed);
        assert!(tour.path[63].is_knight_move_from(tour.path[0]));
        assert_eq!(verify_path(8, &tour.path), Ok(()));
    }

    #[test]
    fn test_require_closed_impossible_on_odd_board() {
        // An odd board has an odd square count, so the last square shares the
        // start's colour and can never be a knight move away
        let config = TourConfig {
            board_size: 5,
            max_attempts: 25,
            require_closed: true,
        };
        let result = TourBuilder::with_seed(config, 3).build(Square::new(0, 0));
        assert_eq!(result, Err(TourError::NotFound { attempts: 25 }));
    }

    #[test]
    fn test_config_from_json_defaults() {
        let config: TourConfig = serde_json::from_str(r#"{"board_size": 6}"#).unwrap();
        assert_eq!(config, TourConfig::for_board(6));
    }
}
