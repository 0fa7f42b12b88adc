#![deny(unsafe_code)]
//! CPU-side rendering of the flowfield simulation's three output surfaces.
//!
//! This crate sits between `flowfield-core` (which produces vectors,
//! intensities, and trail segments) and whatever presents the pixels. The
//! CLI uses it for PNG snapshots; an interactive front end would composite
//! the same buffers into textures.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

use flowfield_core::{DisplayMode, Simulator};

/// Renders the selected display mode to an RGBA8 buffer.
///
/// The background renders at grid resolution; field lines and trails at
/// surface resolution. Pair with [`buffer_dimensions`] for the pixel size.
pub fn render(sim: &Simulator, mode: DisplayMode) -> Vec<u8> {
    match mode {
        DisplayMode::Background => pixel::background_rgba(sim.grid()),
        DisplayMode::FieldLines => {
            pixel::field_lines_rgba(sim.grid(), sim.config().width, sim.config().height)
        }
        DisplayMode::Trails => {
            pixel::trails_rgba(sim.trail_segments(), sim.config().width, sim.config().height)
        }
    }
}

/// Pixel dimensions of the buffer [`render`] produces for `mode`.
pub fn buffer_dimensions(sim: &Simulator, mode: DisplayMode) -> (usize, usize) {
    match mode {
        DisplayMode::Background => (sim.grid().width(), sim.grid().height()),
        DisplayMode::FieldLines | DisplayMode::Trails => {
            (sim.config().width, sim.config().height)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowfield_core::SimConfig;

    fn stepped_sim() -> Simulator {
        let mut sim = Simulator::new(SimConfig::default()).unwrap();
        sim.step();
        sim
    }

    #[test]
    fn render_matches_buffer_dimensions_for_every_mode() {
        let sim = stepped_sim();
        let mut mode = DisplayMode::Background;
        for _ in 0..3 {
            let (w, h) = buffer_dimensions(&sim, mode);
            let buf = render(&sim, mode);
            assert_eq!(buf.len(), w * h * 4, "length mismatch for {}", mode.name());
            mode = mode.cycle();
        }
    }

    #[test]
    fn background_mode_uses_grid_resolution() {
        let sim = stepped_sim();
        assert_eq!(buffer_dimensions(&sim, DisplayMode::Background), (32, 23));
    }

    #[test]
    fn surface_modes_use_surface_resolution() {
        let sim = stepped_sim();
        assert_eq!(
            buffer_dimensions(&sim, DisplayMode::FieldLines),
            (640, 460)
        );
        assert_eq!(buffer_dimensions(&sim, DisplayMode::Trails), (640, 460));
    }

    #[test]
    fn render_is_deterministic_for_a_deterministic_sim() {
        let a = render(&stepped_sim(), DisplayMode::Trails);
        let b = render(&stepped_sim(), DisplayMode::Trails);
        assert_eq!(a, b);
    }
}
