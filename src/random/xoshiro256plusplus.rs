use crate::random::split_mix_64::SplitMix64;

/// xoshiro256++
///
/// Fast, well distributed pseudorandom generator. Fixture inputs only need
/// to be reproducible, so it is NOT cryptographically secure and doesn't try to be.
///
/// Reference:
///   David Blackman & Sebastiano Vigna
///   https://prng.di.unimi.it/xoshiro256plusplus.c
#[derive(Clone, Debug)]
pub struct Xoshiro256PlusPlus {
    s: [u64; 4],
}

impl Xoshiro256PlusPlus {
    /// Seed through SplitMix64 so the state is never all zero.
    pub fn from_seed(seed: u64) -> Self {
        let mut sm64 = SplitMix64::new(seed);
        Self {
            s: [
                sm64.next_u64(),
                sm64.next_u64(),
                sm64.next_u64(),
                sm64.next_u64(),
            ],
        }
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let result = self.s[0]
            .wrapping_add(self.s[3])
            .rotate_left(23)
            .wrapping_add(self.s[0]);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }

    /// Uniform in [0, 1) from the high 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (1u64 << 53) as f64;
        ((self.next_u64() >> 11) as f64) * SCALE
    }
}
