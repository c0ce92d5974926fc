//! Minimal standard Lehmer generator (Park, Miller & Stockmeyer 1993)
//!
//! `x = 48271 * x mod (2^31 - 1)`. Four bytes of state, used for local
//! one-shot engines that are seeded, drained and discarded.

use rand::{RngCore, SeedableRng};

const MULTIPLIER: u64 = 48_271;
const MODULUS: u64 = 2_147_483_647;

pub const DEFAULT_SEED: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinstdRand {
    state: u32,
}

impl MinstdRand {
    pub fn new(seed: u32) -> Self {
        let mut engine = Self { state: 1 };
        engine.reseed(seed);
        engine
    }

    // A zero state would be absorbing, so it maps to 1
    pub fn reseed(&mut self, seed: u32) {
        let s = (seed as u64 % MODULUS) as u32;
        self.state = if s == 0 { 1 } else { s };
    }

    /// Next value in `[1, 2^31 - 2]`.
    pub fn next_raw(&mut self) -> u32 {
        self.state = ((self.state as u64 * MULTIPLIER) % MODULUS) as u32;
        self.state
    }
}

impl Default for MinstdRand {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RngCore for MinstdRand {
    // Each raw draw carries 31 bits; the low halves of two draws form one word
    fn next_u32(&mut self) -> u32 {
        let hi = self.next_raw() & 0xFFFF;
        let lo = self.next_raw() & 0xFFFF;
        (hi << 16) | lo
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for MinstdRand {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
