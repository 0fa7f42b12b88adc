//! Seeded continuous noise sampler over three coordinates.
//!
//! [`NoiseField`] wraps a Perlin generator constructed once from an integer
//! seed and immutable thereafter. Two spatial coordinates plus one animation
//! axis feed every flow-grid cell; continuity of the underlying noise is what
//! keeps the resulting field spatially coherent frame to frame.
//!
//! Deterministic: same seed, same inputs, same output, on every call.

use noise::{NoiseFn, Perlin};

/// Seeded scalar noise sampler. Pure function of (x, y, z) -> [0, 1].
#[derive(Debug, Clone)]
pub struct NoiseField {
    noise: Perlin,
}

impl NoiseField {
    /// Creates a sampler from an integer seed.
    pub fn new(seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
        }
    }

    /// Samples the noise at (x, y, z), returning a value in [0, 1].
    ///
    /// Perlin output is nominally in [-1, 1]; the affine remap is clamped
    /// because the generator can overshoot its nominal bounds slightly.
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        (0.5 * (self.noise.get([x, y, z]) + 1.0)).clamp(0.0, 1.0)
    }

    /// Samples the noise and scales it to an 8-bit intensity.
    pub fn intensity(&self, x: f64, y: f64, z: f64) -> u8 {
        (self.sample(x, y, z) * 255.0).round() as u8
    }
}
