//! White noise from a linear congruential generator.
//!
//! Seeded, so a render is reproducible.

pub const DEFAULT_SEED: u32 = 0x5EED;

#[derive(Debug, Clone)]
pub struct WhiteNoise {
    state: u32,
}

impl WhiteNoise {
    pub fn new(seed: u32) -> Self {
        WhiteNoise {
            state: seed % (1 << 31),
        }
    }

    /// Next sample, uniform in [-1, 1).
    pub fn next_sample(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1103515245).wrapping_add(12345) % (1 << 31);
        self.state as f64 / (1u32 << 30) as f64 - 1.0
    }
}

impl Default for WhiteNoise {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_and_mean() {
        let mut noise = WhiteNoise::default();
        let mut sum = 0.0;
        for _ in 0..44100 {
            let s = noise.next_sample();
            assert!((-1.0..1.0).contains(&s), "Noise out of range: {s}");
            sum += s;
        }
        let mean = sum / 44100.0;
        assert!(mean.abs() < 0.05, "Noise should be roughly centred, mean {mean}");
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = WhiteNoise::new(7);
        let mut b = WhiteNoise::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_sample(), b.next_sample());
        }
    }
}
