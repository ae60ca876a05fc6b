use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use replay_core::DelayRange;

/// Turns a pacing range into a concrete suspension.
pub trait DelayPicker {
    fn pick(&mut self, range: DelayRange) -> Duration;
}

/// Uniform draw from `[min, max)`; fixed ranges return their bound.
#[derive(Debug, Clone)]
pub struct RandomDelay {
    rng: StdRng,
}

impl RandomDelay {
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible pacing for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DelayPicker for RandomDelay {
    fn pick(&mut self, range: DelayRange) -> Duration {
        if range.is_fixed() {
            return range.min();
        }
        Duration::from_millis(self.rng.random_range(range.min_ms..range.max_ms))
    }
}

/// Always the lower bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowerBoundDelay;

impl DelayPicker for LowerBoundDelay {
    fn pick(&mut self, range: DelayRange) -> Duration {
        range.min()
    }
}

/// Zero-duration suspensions; event order is unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantDelay;

impl DelayPicker for InstantDelay {
    fn pick(&mut self, _range: DelayRange) -> Duration {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_delay_stays_in_half_open_range() {
        let mut picker = RandomDelay::seeded(7);
        let range = DelayRange::between(100, 200);
        for _ in 0..1000 {
            let ms = picker.pick(range).as_millis();
            assert!((100..200).contains(&ms), "{ms} out of range");
        }
    }

    #[test]
    fn fixed_range_is_exact() {
        let mut picker = RandomDelay::seeded(1);
        assert_eq!(
            picker.pick(DelayRange::fixed(1500)),
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn same_seed_same_pacing() {
        let range = DelayRange::between(800, 1200);
        let mut a = RandomDelay::seeded(42);
        let mut b = RandomDelay::seeded(42);
        let left: Vec<_> = (0..16).map(|_| a.pick(range)).collect();
        let right: Vec<_> = (0..16).map(|_| b.pick(range)).collect();
        assert_eq!(left, right);
    }
}
