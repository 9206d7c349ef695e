//! Knight's tour construction.
//!
//! Tours are built greedily with Warnsdorff's rule: always move to the
//! reachable square with the fewest onward moves. Ties are broken by an
//! injected [`TieBreaker`], and a dead end restarts the walk until the attempt
//! budget runs out.
//!
//! ```
//! use knights_tour_core::{build_tour, SimpleRng, Square};
//!
//! let mut rng = SimpleRng::with_seed(7);
//! let tour = build_tour(Square::new(0, 0), 8, 50, &mut rng).unwrap();
//! assert_eq!(tour.path.len(), 64);
//! ```

mod board;
mod builder;
mod error;
mod rng;
mod square;
mod tour;

pub use board::{Board, Candidate};
pub use builder::{
    build_tour, build_with_config, run_attempt, AttemptOutcome, TourBuilder, TourConfig,
    DEFAULT_BOARD_SIZE, DEFAULT_MAX_ATTEMPTS,
};
pub use error::{PathDefect, TourError, TourResult};
pub use rng::{entropy_seed, SimpleRng, TieBreaker};
pub use square::{Square, KNIGHT_OFFSETS};
pub use tour::{is_closed, verify_path, Tour};
