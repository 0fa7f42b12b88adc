//! Selector for which rendered surface a presentation layer shows.
//!
//! The simulation produces three renderable outputs per tick; which one is
//! on screen is purely a presentation choice. The core only defines the
//! tag and the cycling order.

use crate::error::SimError;

/// All mode names, in cycling order.
const MODE_NAMES: &[&str] = &["background", "field-lines", "trails"];

/// Which rendered output a presentation layer displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Greyscale noise intensities at grid resolution.
    Background,
    /// The flow vectors drawn as a line per cell at surface resolution.
    FieldLines,
    /// Particle motion trails at surface resolution.
    Trails,
}

impl DisplayMode {
    /// The next mode in cycling order, wrapping after [`DisplayMode::Trails`].
    pub fn cycle(self) -> Self {
        match self {
            DisplayMode::Background => DisplayMode::FieldLines,
            DisplayMode::FieldLines => DisplayMode::Trails,
            DisplayMode::Trails => DisplayMode::Background,
        }
    }

    /// The canonical name of this mode.
    pub fn name(self) -> &'static str {
        match self {
            DisplayMode::Background => "background",
            DisplayMode::FieldLines => "field-lines",
            DisplayMode::Trails => "trails",
        }
    }

    /// Constructs a mode by name.
    ///
    /// Returns `SimError::UnknownMode` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, SimError> {
        match name {
            "background" => Ok(DisplayMode::Background),
            "field-lines" => Ok(DisplayMode::FieldLines),
            "trails" => Ok(DisplayMode::Trails),
            _ => Err(SimError::UnknownMode(name.to_string())),
        }
    }

    /// Returns a slice of all recognized mode names.
    pub fn list_names() -> &'static [&'static str] {
        MODE_NAMES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_all_three_modes_and_wraps() {
        let start = DisplayMode::Background;
        assert_eq!(start.cycle(), DisplayMode::FieldLines);
        assert_eq!(start.cycle().cycle(), DisplayMode::Trails);
        assert_eq!(start.cycle().cycle().cycle(), start);
    }

    #[test]
    fn from_name_round_trips_every_listed_name() {
        for &name in DisplayMode::list_names() {
            let mode = DisplayMode::from_name(name).unwrap();
            assert_eq!(mode.name(), name);
        }
    }

    #[test]
    fn from_name_unknown_returns_error() {
        let result = DisplayMode::from_name("plasma");
        assert!(matches!(result, Err(SimError::UnknownMode(_))));
    }

    #[test]
    fn list_names_matches_cycle_order() {
        let mut mode = DisplayMode::Background;
        for &name in DisplayMode::list_names() {
            assert_eq!(mode.name(), name);
            mode = mode.cycle();
        }
    }
}
