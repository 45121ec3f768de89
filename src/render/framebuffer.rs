//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a borrowed, bounds-checked view into a color buffer that can be
//! used directly as a [`PixelSink`]. Pixel coordinates map 1:1 to buffer
//! cells with the origin at the top-left.

use super::buffer_len;
use crate::colors::Color;
use crate::raster::PixelSink;

/// A view into a color buffer.
///
/// Wraps a 1D slice with width/height metadata to enable safe 2D pixel
/// access. This is a borrowed view, not an owning type; create it when a
/// rasterizer needs to draw straight into an existing buffer.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [Color],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from a buffer slice and dimensions.
    ///
    /// # Panics
    /// Panics in debug builds if the buffer length doesn't match width * height
    pub fn new(color_buffer: &'a mut [Color], width: u32, height: u32) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            buffer_len(width, height),
            "Color buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Set a pixel. Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }
}

impl PixelSink for FrameBuffer<'_> {
    #[inline]
    fn put(&mut self, x: i32, y: i32, color: Color) {
        self.set_pixel(x, y, color);
    }
}
