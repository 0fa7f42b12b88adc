//! Particle population advected through the flow grid.
//!
//! Particles carry position, a one-tick-old position for trail rendering,
//! velocity, and a transient acceleration that is accumulated from the flow
//! grid once per tick and fully reset after integration. The population is
//! fixed for the lifetime of a run: nothing is spawned or destroyed while
//! the simulation steps.

use crate::grid::FlowGrid;
use crate::prng::Xorshift64;
use glam::DVec2;

/// Default fraction of the sampled flow vector fed into acceleration.
pub const DEFAULT_ACCEL_SCALE: f64 = 0.01;
/// Default speed limit applied after each velocity update.
pub const DEFAULT_MAX_SPEED: f64 = 4.0;

/// A single point particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub current_position: DVec2,
    pub last_position: DVec2,
    pub velocity: DVec2,
    pub acceleration: DVec2,
}

impl Particle {
    /// Creates a particle at `position` with a unit velocity at a
    /// PRNG-drawn heading and zero acceleration.
    pub fn new(position: DVec2, rng: &mut Xorshift64) -> Self {
        let heading = rng.next_angle();
        Self {
            current_position: position,
            last_position: position,
            velocity: DVec2::new(heading.cos(), heading.sin()),
            acceleration: DVec2::ZERO,
        }
    }
}

/// An ordered, fixed-size population of particles.
///
/// Order is irrelevant to the physics but fixed, so a given seed replays
/// the same trajectories element for element.
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    accel_scale: f64,
    max_speed: f64,
}

impl ParticleSystem {
    /// Spawns `count` particles at uniformly random in-bounds positions.
    pub fn new_random(
        count: usize,
        surface_width: f64,
        surface_height: f64,
        accel_scale: f64,
        max_speed: f64,
        rng: &mut Xorshift64,
    ) -> Self {
        let particles = (0..count)
            .map(|_| {
                let position = DVec2::new(
                    rng.next_range(0.0, surface_width),
                    rng.next_range(0.0, surface_height),
                );
                Particle::new(position, rng)
            })
            .collect();
        Self {
            particles,
            accel_scale,
            max_speed,
        }
    }

    /// Spawns one particle per explicit position.
    pub fn from_positions(
        positions: &[DVec2],
        accel_scale: f64,
        max_speed: f64,
        rng: &mut Xorshift64,
    ) -> Self {
        let particles = positions.iter().map(|&p| Particle::new(p, rng)).collect();
        Self {
            particles,
            accel_scale,
            max_speed,
        }
    }

    /// Number of particles in the population.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// True when the population is empty.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Read-only access to the particles in replay order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// `(last_position, current_position)` per particle, for trail drawing.
    pub fn trail_segments(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        self.particles
            .iter()
            .map(|p| (p.last_position, p.current_position))
    }

    /// Advances every particle one tick against the current grid.
    ///
    /// Per particle, in fixed order: wrap against the surface bounds,
    /// sample the flow grid under the (wrapped) position, record the trail
    /// position, then integrate. The wrap is a hard snap to the opposite
    /// edge, not a modulo: any overshoot past a bound lands exactly on the
    /// far boundary.
    pub fn update_all(&mut self, grid: &FlowGrid, surface_width: f64, surface_height: f64) {
        for p in &mut self.particles {
            wrap(&mut p.current_position, surface_width, surface_height);

            let flow = grid.vector_at(p.current_position);

            p.last_position = p.current_position;

            p.acceleration += flow * self.accel_scale;
            p.velocity += p.acceleration;
            p.velocity = p.velocity.clamp_length_max(self.max_speed);
            p.current_position += p.velocity;
            p.acceleration = DVec2::ZERO;
        }
    }
}

/// Snaps an out-of-bounds coordinate to the opposite edge.
fn wrap(position: &mut DVec2, surface_width: f64, surface_height: f64) {
    if position.x < 0.0 {
        position.x = surface_width;
    } else if position.x > surface_width {
        position.x = 0.0;
    }
    if position.y < 0.0 {
        position.y = surface_height;
    } else if position.y > surface_height {
        position.y = 0.0;
    }
}
