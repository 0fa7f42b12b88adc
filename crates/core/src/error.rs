//! Error types for the flowfield core.

use thiserror::Error;

/// Errors produced by simulation setup and the output pipeline.
///
/// Steady-state simulation has no recoverable errors: everything here is
/// either caught once at configuration time or raised on the snapshot/CLI
/// path outside the per-tick loop.
#[derive(Debug, Error)]
pub enum SimError {
    /// The grid divisor was zero; the flow grid cannot be sized.
    #[error("invalid divisor: must be greater than zero")]
    InvalidDivisor,

    /// A surface dimension was smaller than the divisor, yielding a grid
    /// with zero cells.
    #[error("surface {width}x{height} too small for divisor {divisor}: flow grid would have zero cells")]
    SurfaceTooSmall {
        width: usize,
        height: usize,
        divisor: usize,
    },

    /// Grid width or height was zero, or `width * height` overflowed.
    #[error("invalid grid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A numeric configuration parameter was negative or non-finite.
    #[error("invalid parameter '{name}': {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A display-mode name was not recognized.
    #[error("unknown display mode: {0}")]
    UnknownMode(String),

    /// An I/O failure while writing a snapshot.
    #[error("i/o error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_too_small_includes_dimensions_and_divisor() {
        let err = SimError::SurfaceTooSmall {
            width: 15,
            height: 460,
            divisor: 20,
        };
        let msg = format!("{err}");
        assert!(msg.contains("15"), "missing width in: {msg}");
        assert!(msg.contains("460"), "missing height in: {msg}");
        assert!(msg.contains("20"), "missing divisor in: {msg}");
    }

    #[test]
    fn invalid_parameter_includes_name_and_value() {
        let err = SimError::InvalidParameter {
            name: "max_speed",
            value: -4.0,
        };
        let msg = format!("{err}");
        assert!(msg.contains("max_speed"), "missing name in: {msg}");
        assert!(msg.contains("-4"), "missing value in: {msg}");
    }

    #[test]
    fn unknown_mode_includes_name() {
        let err = SimError::UnknownMode("plasma".into());
        let msg = format!("{err}");
        assert!(msg.contains("plasma"), "missing mode name in: {msg}");
    }

    #[test]
    fn sim_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SimError>();
    }

    #[test]
    fn sim_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<SimError>();
    }
}
