//! Seeded pseudo-random source for layout generation.
//!
//! **Seed-based determinism:** layout placement derives every sample from
//! this hash of the world seed and the tile coordinates, so the same seed
//! always produces the same buildings and terrain regardless of call order.

/// Deterministic hash of a seed into `[0, 1)`.
///
/// Pure function: the same seed always yields the same value. The math runs
/// in f64 so large tile products (x*z for big worlds) hash identically on
/// every platform with IEEE-754 `sin`.
#[inline]
pub fn seeded_random(seed: f64) -> f64 {
    let x = seed.sin() * 10_000.0;
    x - x.floor()
}
