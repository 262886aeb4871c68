// Core types shared by the drawing engine and the window.

/// Canvas background (what `clear` paints).
pub const BACKGROUND: u32 = rgb(0, 0, 0);
/// Drawing color for anchors and line segments.
pub const FOREGROUND: u32 = rgb(255, 255, 255);

/// Pack three 8-bit channels as 0x00RRGGBB, the layout minifb expects.
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// The canvas pixels plus one saved copy of them.
/// Visual: `pixels` is the image you see on screen; `saved` is invisible and
/// only exists so a preview line can be drawn and then erased again.
pub struct FrameBuffer {
    width: usize,       // how wide the canvas is (pixels)
    height: usize,      // how tall the canvas is (pixels)
    pixels: Vec<u32>,   // each entry is 0x00RRGGBB, row-major from top-left
    saved: Vec<u32>,    // same length as `pixels`, last committed state
}

impl FrameBuffer {
    /// Allocate both buffers filled with the background color.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; width * height],
            saved: vec![BACKGROUND; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only view of the pixel storage, for blitting to a window.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Set every pixel to `color`.
    /// Visual: the whole canvas becomes one flat color.
    pub fn fill(&mut self, color: u32) {
        for px in &mut self.pixels {
            *px = color;
        }
    }

    /// Put one pixel if (x,y) is inside bounds, otherwise do nothing.
    /// Line traversal routinely lands slightly outside the canvas and must
    /// not be punished for it.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        self.pixels[y * self.width + x] = color;
    }

    /// Read one pixel; None when (x,y) is outside the canvas.
    pub fn pixel_at(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Copy the live canvas into the saved buffer.
    pub fn snapshot(&mut self) {
        self.saved.copy_from_slice(&self.pixels);
    }

    /// Copy the saved buffer back over the live canvas.
    /// Visual: any preview drawn since the last snapshot disappears.
    pub fn restore(&mut self) {
        self.pixels.copy_from_slice(&self.saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_pixel_out_of_bounds_is_noop() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.put_pixel(-1, 0, FOREGROUND);
        fb.put_pixel(0, -1, FOREGROUND);
        fb.put_pixel(4, 0, FOREGROUND);
        fb.put_pixel(0, 4, FOREGROUND);
        assert!(fb.pixels().iter().all(|&px| px == BACKGROUND));
    }

    #[test]
    fn test_pixel_at_matches_put_pixel() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.put_pixel(2, 3, rgb(10, 20, 30));
        assert_eq!(fb.pixel_at(2, 3), Some(rgb(10, 20, 30)));
        assert_eq!(fb.pixel_at(4, 0), None);
        assert_eq!(fb.pixel_at(0, -1), None);
    }

    #[test]
    fn test_restore_reverts_to_snapshot() {
        let mut fb = FrameBuffer::new(8, 8);
        fb.put_pixel(1, 1, FOREGROUND);
        fb.snapshot();
        let before: Vec<u32> = fb.pixels().to_vec();

        fb.put_pixel(5, 5, FOREGROUND);
        fb.fill(rgb(9, 9, 9));
        fb.restore();

        assert_eq!(fb.pixels(), &before[..]);
    }

    #[test]
    fn test_restore_without_writes_is_identity() {
        let mut fb = FrameBuffer::new(8, 8);
        fb.put_pixel(3, 4, FOREGROUND);
        let before: Vec<u32> = fb.pixels().to_vec();
        fb.snapshot();
        fb.restore();
        assert_eq!(fb.pixels(), &before[..]);
    }

    #[test]
    fn test_fill_sets_every_pixel() {
        let mut fb = FrameBuffer::new(3, 5);
        fb.fill(rgb(1, 2, 3));
        assert!(fb.pixels().iter().all(|&px| px == rgb(1, 2, 3)));
    }
}
