//! PNG export of a rendered RGBA8 buffer.
//!
//! Feature-gated behind `png` (default on) so front ends that composite the
//! raw buffers themselves can depend on this crate without pulling in the
//! `image` crate.

use flowfield_core::SimError;
use std::path::Path;

/// Writes an RGBA8 buffer as a PNG image.
///
/// Returns `SimError::InvalidDimensions` if the dimensions overflow `u32`,
/// and `SimError::Io` if the buffer does not match `width * height * 4` or
/// the file cannot be written.
pub fn write_png(
    rgba: &[u8],
    width: usize,
    height: usize,
    path: &Path,
) -> Result<(), SimError> {
    let w = u32::try_from(width).map_err(|_| SimError::InvalidDimensions)?;
    let h = u32::try_from(height).map_err(|_| SimError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba.to_vec())
        .ok_or_else(|| SimError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| SimError::Io(e.to_string()))
}
