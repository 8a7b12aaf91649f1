//! Per-session state.
//!
//! The interactive shell owns exactly one [`Session`] for its lifetime and
//! threads it into handlers explicitly: `&mut Session` for actions that
//! mutate state (picking a ball, resampling), `&Session` for recomputing
//! display values on every other event.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::demos::probability::BallCounts;

/// Outcome of one pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ball {
    Red,
    Blue,
}

/// Running pick counts for the probability demo.
///
/// Fields are private so `total == red_picked + blue_picked` holds after any
/// sequence of [`SessionCounters::record`] calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionCounters {
    red_picked: u64,
    blue_picked: u64,
    total: u64,
}

impl SessionCounters {
    pub fn red_picked(&self) -> u64 {
        self.red_picked
    }

    pub fn blue_picked(&self) -> u64 {
        self.blue_picked
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn record(&mut self, ball: Ball) {
        match ball {
            Ball::Red => self.red_picked += 1,
            Ball::Blue => self.blue_picked += 1,
        }
        self.total += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Stream identifiers for [`Session::sample_rng`], one per generated dataset.
pub mod streams {
    pub const REGRESSION_NOISE: u64 = 1;
    pub const COIN_FLIPS: u64 = 2;
    pub const HEIGHTS: u64 = 3;
}

pub struct Session {
    counters: SessionCounters,
    rng: StdRng,
    sample_seed: u64,
}

impl Session {
    /// Creates a session. A fixed seed makes every pick and sample reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let sample_seed = rng.random();
        log::debug!("Session created (fixed seed: {})", seed.is_some());
        Self {
            counters: SessionCounters::default(),
            rng,
            sample_seed,
        }
    }

    pub fn counters(&self) -> &SessionCounters {
        &self.counters
    }

    /// Draws one ball uniformly from `counts.red` reds and `counts.blue` blues
    /// and records it.
    pub fn pick_ball(&mut self, counts: BallCounts) -> Ball {
        let slot = self.rng.random_range(0..counts.total());
        let ball = if slot < counts.red() { Ball::Red } else { Ball::Blue };
        self.counters.record(ball);
        log::debug!("Picked {:?}; counters now {:?}", ball, self.counters);
        ball
    }

    pub fn reset_counters(&mut self) {
        self.counters.reset();
    }

    /// Draws a fresh sample seed so generated datasets change.
    pub fn resample(&mut self) {
        self.sample_seed = self.rng.random();
        log::debug!("Sample seed rotated");
    }

    /// Deterministic generator for one dataset. Repeated calls with the same
    /// stream return identical sequences until the next [`Session::resample`].
    pub fn sample_rng(&self, stream: u64) -> StdRng {
        StdRng::seed_from_u64(self.sample_seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn test_counters_start_at_zero() {
        let session = Session::new(Some(1));
        assert_eq!(*session.counters(), SessionCounters::default());
        assert_eq!(session.counters().total(), 0);
    }

    #[test]
    fn test_total_is_sum_after_any_number_of_picks() {
        let mut session = Session::new(Some(42));
        let counts = BallCounts::new(3, 7).unwrap();
        for n in 0..200u64 {
            let c = session.counters();
            assert_eq!(c.total(), n);
            assert_eq!(c.total(), c.red_picked() + c.blue_picked());
            session.pick_ball(counts);
        }
    }

    #[test]
    fn test_one_of_each_eventually_picks_both_colours() {
        let mut session = Session::new(Some(7));
        let counts = BallCounts::new(1, 1).unwrap();
        let mut seen_red = false;
        let mut seen_blue = false;
        for _ in 0..100 {
            match session.pick_ball(counts) {
                Ball::Red => seen_red = true,
                Ball::Blue => seen_blue = true,
            }
        }
        assert!(seen_red && seen_blue);
    }

    #[test]
    fn test_pick_frequency_matches_bag_composition() {
        let mut session = Session::new(Some(2024));
        let counts = BallCounts::new(3, 7).unwrap();
        for _ in 0..10_000 {
            session.pick_ball(counts);
        }
        let red_share = session.counters().red_picked() as f64 / session.counters().total() as f64;
        assert!((red_share - 0.3).abs() < 0.02, "red share was {red_share}");
    }

    #[test]
    fn test_reset_clears_all_counters() {
        let mut session = Session::new(Some(3));
        let counts = BallCounts::default();
        session.pick_ball(counts);
        session.pick_ball(counts);
        session.reset_counters();
        assert_eq!(*session.counters(), SessionCounters::default());
    }

    #[test]
    fn test_sample_rng_is_stable_until_resample() {
        let mut session = Session::new(Some(9));
        let a = session.sample_rng(streams::COIN_FLIPS).next_u64();
        let b = session.sample_rng(streams::COIN_FLIPS).next_u64();
        assert_eq!(a, b);

        let other_stream = session.sample_rng(streams::HEIGHTS).next_u64();
        assert_ne!(a, other_stream);

        session.resample();
        let c = session.sample_rng(streams::COIN_FLIPS).next_u64();
        assert_ne!(a, c);
    }
}
