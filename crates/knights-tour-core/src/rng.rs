use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of uniform choices over a finite tie set.
pub trait TieBreaker {
    /// Pick an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<T: TieBreaker + ?Sized> TieBreaker for &mut T {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// A fresh 64-bit seed from the OS.
///
/// If the OS source is unavailable, seeds still differ between calls within
/// a process: a process-wide counter is mixed with the wall clock.
pub fn entropy_seed() -> u64 {
    let mut bytes = [0u8; 8];
    if getrandom::getrandom(&mut bytes).is_ok() {
        return u64::from_le_bytes(bytes);
    }

    static CALLS: AtomicU64 = AtomicU64::new(0);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let calls = CALLS.fetch_add(1, Ordering::Relaxed);
    nanos ^ calls.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Small PCG-style PRNG, seedable for reproducible tours
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleRng {
    /// Seed from [`entropy_seed`]
    pub fn new() -> Self {
        Self::with_seed(entropy_seed())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Uniform value in `0..bound` (Lemire's multiply-shift, rejection on the biased zone)
    fn next_below(&mut self, bound: u32) -> u32 {
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let m = u64::from(self.next_u32()) * u64::from(bound);
            if (m as u32) >= threshold {
                return (m >> 32) as u32;
            }
        }
    }
}

impl TieBreaker for SimpleRng {
    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "tie set must not be empty");
        if len <= 1 {
            return 0;
        }
        // Tie sets hold at most eight squares
        let bound = u32::try_from(len).unwrap_or(u32::MAX);
        self.next_below(bound) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = SimpleRng::with_seed(7);
        let mut b = SimpleRng::with_seed(7);
        for len in 1..=8 {
            assert_eq!(a.pick(len), b.pick(len));
        }
    }

    #[test]
    fn test_pick_in_range() {
        let mut rng = SimpleRng::with_seed(42);
        for len in 1..=8 {
            for _ in 0..500 {
                assert!(rng.pick(len) < len);
            }
        }
    }

    #[test]
    fn test_pick_reaches_every_index() {
        let mut rng = SimpleRng::with_seed(3);
        let mut seen = [false; 8];
        for _ in 0..1000 {
            seen[rng.pick(8)] = true;
        }
        assert!(seen.iter().all(|&s| s), "indices never picked: {:?}", seen);
    }

    #[test]
    fn test_entropy_seeds_differ() {
        let seeds: Vec<u64> = (0..4).map(|_| entropy_seed()).collect();
        assert!(seeds.windows(2).any(|w| w[0] != w[1]), "{:?}", seeds);
    }

    #[test]
    fn test_pick_through_mut_ref() {
        fn pick_twice(mut t: impl TieBreaker) -> (usize, usize) {
            (t.pick(5), t.pick(5))
        }
        let mut a = SimpleRng::with_seed(11);
        let mut b = SimpleRng::with_seed(11);
        let first = pick_twice(&mut a);
        assert_eq!(first, (b.pick(5), b.pick(5)));
        // the borrowed generator advanced
        assert_eq!(a.pick(5), b.pick(5));
    }
}
