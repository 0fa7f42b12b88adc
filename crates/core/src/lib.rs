#![deny(unsafe_code)]
//! Core types for the flowfield particle simulation.
//!
//! Provides the seeded [`NoiseField`] scalar sampler, the per-tick
//! regenerated [`FlowGrid`] of direction vectors, the [`ParticleSystem`]
//! advected through it, the [`Simulator`] that owns and orders all of them,
//! plus the [`Xorshift64`] PRNG, [`SimConfig`] run specification, and
//! [`DisplayMode`] output selector.

pub mod config;
pub mod display;
pub mod error;
pub mod grid;
pub mod noise_field;
pub mod params;
pub mod particle;
pub mod prng;
pub mod sim;

pub use config::SimConfig;
pub use display::DisplayMode;
pub use error::SimError;
pub use grid::FlowGrid;
pub use noise_field::NoiseField;
pub use particle::{Particle, ParticleSystem};
pub use prng::Xorshift64;
pub use sim::Simulator;
