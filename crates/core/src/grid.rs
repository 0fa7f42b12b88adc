//! Coarse grid of flow vectors derived from noise samples.
//!
//! A [`FlowGrid`] overlays the render surface with `floor(surface_dim /
//! divisor)` cells per axis. Each tick the whole grid is rebuilt from the
//! current animation time: one noise sample per cell becomes both a
//! direction vector (for particle advection) and an 8-bit intensity (for
//! background rendering). Nothing persists across ticks beyond being
//! overwritten.

use crate::error::SimError;
use crate::noise_field::NoiseField;
use glam::DVec2;
use std::f64::consts::TAU;

/// Default spatial frequency applied to normalized cell coordinates.
pub const DEFAULT_FREQUENCY: f64 = 5.0;
/// Default magnitude of every derived flow vector.
pub const DEFAULT_SPEED_SCALE: f64 = 20.0;

/// A 2D grid of direction vectors, row-major, rebuilt in full every tick.
#[derive(Debug, Clone)]
pub struct FlowGrid {
    width: usize,
    height: usize,
    frequency: f64,
    speed_scale: f64,
    vectors: Vec<DVec2>,
    intensities: Vec<u8>,
}

impl FlowGrid {
    /// Creates a zeroed grid of the given cell dimensions.
    ///
    /// Returns `SimError::InvalidDimensions` if either dimension is zero or
    /// `width * height` overflows `usize`.
    pub fn new(
        width: usize,
        height: usize,
        frequency: f64,
        speed_scale: f64,
    ) -> Result<Self, SimError> {
        if width == 0 || height == 0 {
            return Err(SimError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .ok_or(SimError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            frequency,
            speed_scale,
            vectors: vec![DVec2::ZERO; len],
            intensities: vec![0; len],
        })
    }

    /// Sizes a grid from surface dimensions and a divisor:
    /// `floor(surface_dim / divisor)` cells per axis.
    ///
    /// Returns `SimError::InvalidDivisor` for a zero divisor and
    /// `SimError::SurfaceTooSmall` when either surface dimension is smaller
    /// than the divisor (the grid would have zero cells).
    pub fn from_surface(
        surface_width: usize,
        surface_height: usize,
        divisor: usize,
        frequency: f64,
        speed_scale: f64,
    ) -> Result<Self, SimError> {
        if divisor == 0 {
            return Err(SimError::InvalidDivisor);
        }
        if surface_width < divisor || surface_height < divisor {
            return Err(SimError::SurfaceTooSmall {
                width: surface_width,
                height: surface_height,
                divisor,
            });
        }
        Self::new(
            surface_width / divisor,
            surface_height / divisor,
            frequency,
            speed_scale,
        )
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Spatial frequency applied to normalized cell coordinates.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Magnitude of every derived flow vector.
    pub fn speed_scale(&self) -> f64 {
        self.speed_scale
    }

    /// Row-major direction vectors, one per cell.
    pub fn vectors(&self) -> &[DVec2] {
        &self.vectors
    }

    /// Row-major 8-bit noise intensities, one per cell.
    pub fn intensities(&self) -> &[u8] {
        &self.intensities
    }

    /// Rebuilds every cell from the noise field at animation time `t`.
    ///
    /// Per cell: normalized coordinates scaled by the frequency select the
    /// noise sample `n`, the direction is `(cos, sin)` of `n * TAU` scaled
    /// to `speed_scale`, and the intensity is `n` scaled to a byte.
    /// Idempotent for identical `(noise, t)`.
    pub fn regenerate(&mut self, noise: &NoiseField, t: f64) {
        let w = self.width as f64;
        let h = self.height as f64;
        for gy in 0..self.height {
            for gx in 0..self.width {
                let nx = gx as f64 / w * self.frequency;
                let ny = gy as f64 / h * self.frequency;
                let n = noise.sample(nx, ny, t);
                let angle = n * TAU;
                let idx = gy * self.width + gx;
                self.vectors[idx] = DVec2::new(angle.cos(), angle.sin()) * self.speed_scale;
                self.intensities[idx] = (n * 255.0).round() as u8;
            }
        }
    }

    /// Direction vector at cell (gx, gy). Indices must be in range.
    pub fn vector_at_cell(&self, gx: usize, gy: usize) -> DVec2 {
        self.vectors[gy * self.width + gx]
    }

    /// Maps a surface position to a cell index pair.
    ///
    /// The divisor on each axis is the grid's cell count, which keeps the
    /// lookup coarse relative to the surface. Indices are clamped into
    /// range so positions at the exact surface boundary stay valid.
    pub fn cell_at(&self, position: DVec2) -> (usize, usize) {
        let gx = (position.x / self.width as f64).floor();
        let gy = (position.y / self.height as f64).floor();
        let gx = (gx.max(0.0) as usize).min(self.width - 1);
        let gy = (gy.max(0.0) as usize).min(self.height - 1);
        (gx, gy)
    }

    /// Direction vector under a surface position, via [`Self::cell_at`].
    pub fn vector_at(&self, position: DVec2) -> DVec2 {
        let (gx, gy) = self.cell_at(position);
        self.vector_at_cell(gx, gy)
    }
}
