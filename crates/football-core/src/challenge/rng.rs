//! Random draws for the AI goalkeeper.
//! The machine only sees `RandomSource`, so tests can force a save or a goal.

/// A source of uniform values in [0, 1).
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;

    /// Bernoulli draw: true with probability `chance`.
    fn chance(&mut self, chance: f32) -> bool {
        self.next_unit() < chance
    }
}

/// Seedable xorshift64 generator. Deterministic per seed.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl RandomSource for Xorshift64 {
    fn next_unit(&mut self) -> f32 {
        // top 24 bits fill an f32 mantissa exactly
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }
}
