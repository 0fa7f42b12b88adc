//! Pure-computation RGBA8 buffer builders for the three display modes.
//!
//! This module is always available (no feature gate) so the PNG snapshot
//! path and any interactive front end can share the same conversion. All
//! drawing clips at the buffer edge; nothing here can index out of range.

use flowfield_core::FlowGrid;
use glam::DVec2;

/// Slate color of the field-line overlay.
const FIELD_LINE_RGB: [u8; 3] = [60, 70, 86];
/// White, used for grid points and trails.
const WHITE: [u8; 3] = [255, 255, 255];

/// Renders the grid's noise intensities as a greyscale RGBA8 buffer at
/// grid resolution. The buffer length is `grid_w * grid_h * 4`.
pub fn background_rgba(grid: &FlowGrid) -> Vec<u8> {
    grid.intensities()
        .iter()
        .flat_map(|&n| [n, n, n, 255u8])
        .collect()
}

/// Renders the flow vectors as a line per cell over a black surface-sized
/// buffer, with a white point at each cell's anchor.
///
/// Each line starts half a cell step back from the anchor and extends along
/// the cell's vector, so the overlay reads as a field of oriented strokes.
pub fn field_lines_rgba(grid: &FlowGrid, surface_width: usize, surface_height: usize) -> Vec<u8> {
    let mut buf = black_rgba(surface_width, surface_height);
    let xstep = surface_width as f64 / grid.width() as f64;
    let ystep = surface_height as f64 / grid.height() as f64;

    for gy in 0..grid.height() {
        for gx in 0..grid.width() {
            let anchor_x = gx as f64 * xstep;
            let anchor_y = gy as f64 * ystep;
            put_pixel(
                &mut buf,
                surface_width,
                surface_height,
                anchor_x as isize,
                anchor_y as isize,
                WHITE,
            );

            let v = grid.vector_at_cell(gx, gy);
            let x1 = anchor_x - xstep / 2.0;
            let y1 = anchor_y - ystep / 2.0;
            draw_line(
                &mut buf,
                surface_width,
                surface_height,
                x1 as isize,
                y1 as isize,
                (x1 + v.x) as isize,
                (y1 + v.y) as isize,
                FIELD_LINE_RGB,
            );
        }
    }
    buf
}

/// Renders one frame of particle trails on a black surface-sized buffer.
pub fn trails_rgba(
    segments: impl Iterator<Item = (DVec2, DVec2)>,
    surface_width: usize,
    surface_height: usize,
) -> Vec<u8> {
    let mut buf = black_rgba(surface_width, surface_height);
    draw_trails(&mut buf, surface_width, surface_height, segments);
    buf
}

/// Draws trail segments into an existing buffer without clearing it.
///
/// Calling this over the same buffer frame after frame accumulates the
/// ghosting effect a compositing front end would otherwise build from a
/// persistent texture.
pub fn draw_trails(
    buf: &mut [u8],
    surface_width: usize,
    surface_height: usize,
    segments: impl Iterator<Item = (DVec2, DVec2)>,
) {
    for (last, current) in segments {
        draw_line(
            buf,
            surface_width,
            surface_height,
            last.x as isize,
            last.y as isize,
            current.x as isize,
            current.y as isize,
            WHITE,
        );
    }
}

/// An opaque black RGBA8 buffer of `width * height` pixels.
fn black_rgba(width: usize, height: usize) -> Vec<u8> {
    let mut buf = vec![0u8; width * height * 4];
    for px in buf.chunks_exact_mut(4) {
        px[3] = 255;
    }
    buf
}

/// Writes one pixel if it lies inside the buffer.
fn put_pixel(buf: &mut [u8], width: usize, height: usize, x: isize, y: isize, rgb: [u8; 3]) {
    if x < 0 || y < 0 || x as usize >= width || y as usize >= height {
        return;
    }
    let idx = (y as usize * width + x as usize) * 4;
    buf[idx] = rgb[0];
    buf[idx + 1] = rgb[1];
    buf[idx + 2] = rgb[2];
    buf[idx + 3] = 255;
}

/// Bresenham line from (x0, y0) to (x1, y1), clipped per pixel.
#[allow(clippy::too_many_arguments)]
fn draw_line(
    buf: &mut [u8],
    width: usize,
    height: usize,
    mut x0: isize,
    mut y0: isize,
    x1: isize,
    y1: isize,
    rgb: [u8; 3],
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put_pixel(buf, width, height, x0, y0, rgb);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
