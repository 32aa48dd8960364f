//! Deterministic pseudo-random numbers for game logic.
//!
//! Every engine takes a `GameRng` instead of reaching for ambient randomness,
//! so tests can inject a fixed seed and replay an exact sequence of AI moves,
//! food spawns, and shuffles.

/// Small LCG (Knuth MMIX constants). Not cryptographic, but fast, tiny,
/// and identical on wasm and native.
pub struct GameRng {
    seed: u64,
}

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from wall-clock time. On wasm `Date.now()` is the only clock
    /// that never panics under `wasm32-unknown-unknown`.
    #[cfg(target_arch = "wasm32")]
    pub fn from_entropy() -> Self {
        Self::seeded(js_sys::Date::now() as u64)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_entropy() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos() as u64 ^ d.as_secs())
            .unwrap_or(0x9E3779B97F4A7C15);
        Self::seeded(nanos)
    }

    pub fn next(&mut self) -> u64 {
        self.seed = self
            .seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.seed
    }

    /// Uniform value in `0..max`. `max` must be non-zero.
    pub fn range(&mut self, max: u32) -> u32 {
        // High bits have much better quality than low bits for an LCG.
        ((self.next() >> 33) % max as u64) as u32
    }

    /// In-place Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.range(i as u32 + 1) as usize;
            slice.swap(i, j);
        }
    }
}
