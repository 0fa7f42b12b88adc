//! Reproducible run specification for a simulation.
//!
//! A [`SimConfig`] captures everything needed to replay a run: surface
//! dimensions, grid divisor, noise seed, particle count, and the integration
//! constants. Two identical configs fed to [`crate::Simulator`] produce
//! bit-identical trajectories.

use crate::error::SimError;
use crate::grid::{DEFAULT_FREQUENCY, DEFAULT_SPEED_SCALE};
use crate::params::{param_f64, param_u64, param_usize};
use crate::particle::{DEFAULT_ACCEL_SCALE, DEFAULT_MAX_SPEED};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default surface width in pixels.
pub const DEFAULT_WIDTH: usize = 640;
/// Default surface height in pixels.
pub const DEFAULT_HEIGHT: usize = 460;
/// Default grid divisor: cells per axis = floor(surface_dim / divisor).
pub const DEFAULT_DIVISOR: usize = 20;
/// Default noise seed.
pub const DEFAULT_SEED: u64 = 227;
/// Default particle count.
pub const DEFAULT_PARTICLE_COUNT: usize = 10;
/// Default animation-time increment per tick.
pub const DEFAULT_DT: f64 = 0.005;

/// Reproducible specification for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Render surface width in pixels.
    pub width: usize,
    /// Render surface height in pixels.
    pub height: usize,
    /// Grid coarseness: cells per axis = floor(surface_dim / divisor).
    pub divisor: usize,
    /// Seed for both the noise field and the particle spawn PRNG.
    pub seed: u64,
    /// Number of particles in the fixed population.
    pub particle_count: usize,
    /// Spatial frequency applied to normalized grid coordinates.
    pub frequency: f64,
    /// Magnitude of every flow vector.
    pub speed_scale: f64,
    /// Fraction of the sampled flow vector fed into acceleration per tick.
    pub accel_scale: f64,
    /// Speed limit applied after each velocity update.
    pub max_speed: f64,
    /// Animation-time increment per tick. Frame-locked: the animation runs
    /// at whatever rate the caller steps it.
    pub dt: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            divisor: DEFAULT_DIVISOR,
            seed: DEFAULT_SEED,
            particle_count: DEFAULT_PARTICLE_COUNT,
            frequency: DEFAULT_FREQUENCY,
            speed_scale: DEFAULT_SPEED_SCALE,
            accel_scale: DEFAULT_ACCEL_SCALE,
            max_speed: DEFAULT_MAX_SPEED,
            dt: DEFAULT_DT,
        }
    }
}

impl SimConfig {
    /// Extracts a config from a JSON object, falling back to defaults for
    /// missing or mistyped keys.
    pub fn from_json(params: &Value) -> Self {
        let d = Self::default();
        Self {
            width: param_usize(params, "width", d.width),
            height: param_usize(params, "height", d.height),
            divisor: param_usize(params, "divisor", d.divisor),
            seed: param_u64(params, "seed", d.seed),
            particle_count: param_usize(params, "particle_count", d.particle_count),
            frequency: param_f64(params, "frequency", d.frequency),
            speed_scale: param_f64(params, "speed_scale", d.speed_scale),
            accel_scale: param_f64(params, "accel_scale", d.accel_scale),
            max_speed: param_f64(params, "max_speed", d.max_speed),
            dt: param_f64(params, "dt", d.dt),
        }
    }

    /// Grid cell counts implied by the surface dimensions and divisor.
    pub fn grid_dimensions(&self) -> (usize, usize) {
        (self.width / self.divisor.max(1), self.height / self.divisor.max(1))
    }

    /// Validates the configuration before a run starts.
    ///
    /// Fatal cases: zero divisor, a surface dimension smaller than the
    /// divisor (zero grid cells), and negative or non-finite numeric
    /// parameters.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.divisor == 0 {
            return Err(SimError::InvalidDivisor);
        }
        if self.width < self.divisor || self.height < self.divisor {
            return Err(SimError::SurfaceTooSmall {
                width: self.width,
                height: self.height,
                divisor: self.divisor,
            });
        }
        for (name, value) in [
            ("frequency", self.frequency),
            ("speed_scale", self.speed_scale),
            ("accel_scale", self.accel_scale),
            ("max_speed", self.max_speed),
            ("dt", self.dt),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}
