// Software line rasterization.
// Visual effects provided here:
// 1) A solid 1-pixel line between two points.
// 2) A dotted variant of the same line (2 pixels on, 8 off).
// 3) Axis snapping that pulls an endpoint onto horizontal/vertical/45°.
// These functions only write pixels into a FrameBuffer; they know nothing
// about windows or input.

use crate::types::FrameBuffer;

/// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
/// Visual: a straight 1-pixel line appears, both endpoints included.
pub fn draw_line_solid(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy; // error value e_xy
    loop {
        fb.put_pixel(x0, y0, color);
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

/// Same traversal as `draw_line_solid`, but only every 10-step cycle starts
/// with 2 plotted pixels; the other 8 are skipped.
/// Visual: a dashed line. The dash cycle counts traversal steps, not
/// distance, so dashes pack tighter on diagonals — accepted behavior.
pub fn draw_line_dotted(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut counter = 0u32;

    loop {
        if (counter % 10) < 2 {
            fb.put_pixel(x0, y0, color);
        }
        counter += 1;

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

/// Snap the free endpoint (x1,y1) to the nearest axis relative to the fixed
/// anchor (x0,y0): horizontal, vertical, or 45° diagonal.
/// Visual: with snap held, the rubber-band line only takes those 8 directions.
pub fn snap_to_axis(x0: i32, y0: i32, x1: i32, y1: i32) -> (i32, i32) {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let abs_dx = dx.abs();
    let abs_dy = dy.abs();

    // Find which axis is closest
    if abs_dx < abs_dy / 2 {
        // Vertical
        (x0, y1)
    } else if abs_dy < abs_dx / 2 {
        // Horizontal
        (x1, y0)
    } else {
        // 45° diagonal - make dx == dy
        let min_dist = abs_dx.min(abs_dy);
        (
            x0 + if dx > 0 { min_dist } else { -min_dist },
            y0 + if dy > 0 { min_dist } else { -min_dist },
        )
    }
}
