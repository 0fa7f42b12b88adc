//! The simulation orchestrator.
//!
//! A [`Simulator`] exclusively owns the noise field, flow grid, and particle
//! population for the lifetime of a run, plus the animation-time
//! accumulator. Each [`Simulator::step`] regenerates the grid at the current
//! time and only then advances every particle, so the grid a particle reads
//! is always the one written this tick.

use crate::config::SimConfig;
use crate::error::SimError;
use crate::grid::FlowGrid;
use crate::noise_field::NoiseField;
use crate::particle::ParticleSystem;
use crate::prng::Xorshift64;
use glam::DVec2;

/// Owns and orders the simulation state; steps are frame-locked.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimConfig,
    noise: NoiseField,
    grid: FlowGrid,
    particles: ParticleSystem,
    time: f64,
}

impl Simulator {
    /// Builds a simulator with randomly placed particles.
    ///
    /// Validates the config first; this is the only fallible stage of a
    /// run. The noise generator keeps the low 32 bits of the seed, the
    /// spawn PRNG the full 64.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let mut rng = Xorshift64::new(config.seed);
        let particles = ParticleSystem::new_random(
            config.particle_count,
            config.width as f64,
            config.height as f64,
            config.accel_scale,
            config.max_speed,
            &mut rng,
        );
        Self::with_particles(config, particles)
    }

    /// Builds a simulator with particles at explicit spawn positions.
    pub fn with_positions(config: SimConfig, positions: &[DVec2]) -> Result<Self, SimError> {
        config.validate()?;
        let mut rng = Xorshift64::new(config.seed);
        let particles = ParticleSystem::from_positions(
            positions,
            config.accel_scale,
            config.max_speed,
            &mut rng,
        );
        Self::with_particles(config, particles)
    }

    fn with_particles(config: SimConfig, particles: ParticleSystem) -> Result<Self, SimError> {
        let grid = FlowGrid::from_surface(
            config.width,
            config.height,
            config.divisor,
            config.frequency,
            config.speed_scale,
        )?;
        Ok(Self {
            noise: NoiseField::new(config.seed as u32),
            grid,
            particles,
            time: 0.0,
            config,
        })
    }

    /// Advances the simulation one tick.
    ///
    /// Regenerates the flow grid at the current animation time, advects
    /// every particle through it, then advances the time accumulator.
    /// Infallible: everything that can go wrong is rejected at
    /// construction.
    pub fn step(&mut self) {
        self.grid.regenerate(&self.noise, self.time);
        self.particles.update_all(
            &self.grid,
            self.config.width as f64,
            self.config.height as f64,
        );
        self.time += self.config.dt;
    }

    /// Runs `steps` ticks back to back.
    pub fn run(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// The run configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The flow grid as of the most recent tick.
    pub fn grid(&self) -> &FlowGrid {
        &self.grid
    }

    /// The particle population.
    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    /// `(last_position, current_position)` per particle, for trail drawing.
    pub fn trail_segments(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        self.particles.trail_segments()
    }

    /// Current animation time.
    pub fn time(&self) -> f64 {
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(config: SimConfig) -> Simulator {
        Simulator::new(config).unwrap()
    }

    fn positions(sim: &Simulator) -> Vec<(u64, u64)> {
        sim.particles()
            .particles()
            .iter()
            .map(|p| {
                (
                    p.current_position.x.to_bits(),
                    p.current_position.y.to_bits(),
                )
            })
            .collect()
    }

    // -- Construction --

    #[test]
    fn new_validates_config() {
        let config = SimConfig {
            divisor: 0,
            ..SimConfig::default()
        };
        assert!(matches!(
            Simulator::new(config),
            Err(SimError::InvalidDivisor)
        ));
    }

    #[test]
    fn new_sizes_grid_from_config() {
        let s = sim(SimConfig::default());
        assert_eq!(s.grid().width(), 32);
        assert_eq!(s.grid().height(), 23);
        assert_eq!(s.particles().len(), 10);
        assert_eq!(s.time(), 0.0);
    }

    #[test]
    fn with_positions_spawns_exactly_there() {
        let spawns = [DVec2::new(320.0, 230.0), DVec2::new(5.0, 5.0)];
        let s = Simulator::with_positions(SimConfig::default(), &spawns).unwrap();
        assert_eq!(s.particles().len(), 2);
        assert_eq!(s.particles().particles()[0].current_position, spawns[0]);
    }

    // -- Stepping --

    #[test]
    fn step_regenerates_grid_before_moving_particles() {
        let mut s = sim(SimConfig::default());
        assert!(s.grid().vectors().iter().all(|v| *v == DVec2::ZERO));
        let before = positions(&s);
        s.step();
        // Grid was freshly written this tick...
        assert!(s.grid().vectors().iter().any(|v| *v != DVec2::ZERO));
        // ...and the particles moved against it.
        assert_ne!(positions(&s), before);
    }

    #[test]
    fn step_advances_time_by_dt() {
        let mut s = sim(SimConfig::default());
        s.step();
        assert!((s.time() - 0.005).abs() < 1e-15);
        s.step();
        assert!((s.time() - 0.010).abs() < 1e-15);
    }

    #[test]
    fn run_steps_the_given_count() {
        let mut a = sim(SimConfig::default());
        let mut b = sim(SimConfig::default());
        a.run(25);
        for _ in 0..25 {
            b.step();
        }
        assert_eq!(positions(&a), positions(&b));
        assert_eq!(a.time().to_bits(), b.time().to_bits());
    }

    // -- Determinism --

    #[test]
    fn identical_configs_replay_bit_identical_runs() {
        let mut a = sim(SimConfig::default());
        let mut b = sim(SimConfig::default());
        a.run(100);
        b.run(100);
        assert_eq!(positions(&a), positions(&b));
        for (va, vb) in a.grid().vectors().iter().zip(b.grid().vectors()) {
            assert_eq!(va.x.to_bits(), vb.x.to_bits());
            assert_eq!(va.y.to_bits(), vb.y.to_bits());
        }
        assert_eq!(a.grid().intensities(), b.grid().intensities());
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = sim(SimConfig::default());
        let mut b = sim(SimConfig {
            seed: 228,
            ..SimConfig::default()
        });
        a.run(10);
        b.run(10);
        assert_ne!(positions(&a), positions(&b));
    }

    // -- Invariants over long runs --

    #[test]
    fn speed_and_containment_hold_over_a_long_run() {
        let config = SimConfig {
            particle_count: 200,
            ..SimConfig::default()
        };
        let mut s = sim(config);
        for _ in 0..1000 {
            s.step();
            for p in s.particles().particles() {
                assert!(
                    p.velocity.length() <= s.config().max_speed + 1e-9,
                    "speed limit violated: {}",
                    p.velocity.length()
                );
            }
        }
    }

    #[test]
    fn stress_population_constructs_and_steps() {
        let config = SimConfig {
            particle_count: 10_000,
            ..SimConfig::default()
        };
        let mut s = sim(config);
        s.run(5);
        assert_eq!(s.particles().len(), 10_000);
    }

    #[test]
    fn trail_segments_expose_one_pair_per_particle() {
        let mut s = sim(SimConfig::default());
        s.step();
        let segments: Vec<_> = s.trail_segments().collect();
        assert_eq!(segments.len(), s.particles().len());
        for (last, current) in segments {
            assert_ne!(last, current, "trail segment collapsed to a point");
        }
    }
}
