//! Uniform randomness sources
//!
//! Every sampler in the engine draws through [`UniformSource`], so a seeded
//! ChaCha stream or a scripted [`FixedSource`] can be swapped in for the
//! entropy-seeded default.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniformly distributed values
pub trait UniformSource {
    /// Uniform float in `[0, 1)`
    fn unit_f64(&mut self) -> f64;

    /// Uniform integer in `[0, upper)`. Callers guarantee `upper > 0`.
    fn below(&mut self, upper: u64) -> u64;

    /// Uniform index into a collection of `len` elements (`len > 0`)
    fn index(&mut self, len: usize) -> usize {
        self.below(len as u64) as usize
    }

    /// Uniform byte in `[0, 255]`
    fn byte(&mut self) -> u8 {
        self.below(256) as u8
    }

    /// `lo + (hi - lo) * u` with `u` in `[0, 1)`
    fn float_between(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.unit_f64()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn unit_f64(&mut self) -> f64 {
        (**self).unit_f64()
    }

    fn below(&mut self, upper: u64) -> u64 {
        (**self).below(upper)
    }
}

/// [`UniformSource`] backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R: RngCore = ChaCha8Rng> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    /// Wrap an existing generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ChaCha8Rng> {
    /// Reproducible stream for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_os_rng())
    }

    /// Seeded when `seed` is given, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }
}

impl<R: RngCore> UniformSource for RngSource<R> {
    fn unit_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn below(&mut self, upper: u64) -> u64 {
        self.rng.random_range(0..upper)
    }
}

/// Scripted source replaying a fixed cycle of unit floats
///
/// Integer draws map a unit value `v` to `floor(v * upper)`.
#[derive(Debug, Clone)]
pub struct FixedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedSource {
    /// Values are clamped into `[0, 1)`. An empty list behaves like `[0.0]`.
    pub fn new(values: Vec<f64>) -> Self {
        let mut values: Vec<f64> = values
            .into_iter()
            .map(|v| if v.is_finite() { v.clamp(0.0, 1.0 - f64::EPSILON) } else { 0.0 })
            .collect();
        if values.is_empty() {
            values.push(0.0);
        }
        Self { values, cursor: 0 }
    }

    /// Source that always yields the same value
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for FixedSource {
    fn unit_f64(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }

    fn below(&mut self, upper: u64) -> u64 {
        let scaled = (self.unit_f64() * upper as f64) as u64;
        scaled.min(upper.saturating_sub(1))
    }
}

/// Partial Fisher-Yates: afterwards `pool[..count]` holds a uniform sample
/// without replacement, in draw order. `count` is clamped to `pool.len()`.
pub fn partial_shuffle<T, S>(source: &mut S, pool: &mut [T], count: usize)
where
    S: UniformSource + ?Sized,
{
    let len = pool.len();
    for i in 0..count.min(len) {
        let j = i + source.index(len - i);
        pool.swap(i, j);
    }
}
