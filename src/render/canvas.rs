//! Owning, zoomable canvas for visualizing rasterizer output.
//!
//! Algorithms emit pixels in a logical, y-up coordinate system centered on
//! the origin. The [`Canvas`] maps every logical pixel to a `scale × scale`
//! block of screen pixels through its [`Viewport`]:
//!
//! ```text
//! screen_left = center_x + x·scale
//! screen_top  = center_y - y·scale - scale
//! ```
//!
//! so logical pixel `(0, 0)` is the block just up-right of the screen center
//! and a grid drawn at multiples of `scale` lines up with block edges.

use std::path::Path;

use image::{ImageError, RgbaImage};

use super::buffer_len;
use crate::clipper::ClipBox;
use crate::colors::{self, Color};
use crate::error::GeometryError;
use crate::raster::PixelSink;

/// Mapping from logical pixel coordinates to screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub center_x: i64,
    pub center_y: i64,
    /// Edge length of one logical pixel in screen pixels, at least 1.
    pub scale: u32,
}

impl Viewport {
    /// Viewport with the origin at the center of a `width × height` screen.
    pub fn centered(width: u32, height: u32, scale: u32) -> Self {
        Self {
            center_x: (width / 2) as i64,
            center_y: (height / 2) as i64,
            scale: scale.max(1),
        }
    }

    /// Top-left screen pixel of the block for logical pixel `(x, y)`.
    #[inline]
    pub fn to_screen(&self, x: i32, y: i32) -> (i64, i64) {
        let s = self.scale as i64;
        (
            self.center_x + x as i64 * s,
            self.center_y - y as i64 * s - s,
        )
    }

    /// Logical pixel containing screen pixel `(sx, sy)`.
    pub fn to_logical(&self, sx: i64, sy: i64) -> (i64, i64) {
        let s = self.scale as i64;
        (
            (sx - self.center_x).div_euclid(s),
            (self.center_y - sy - 1).div_euclid(s),
        )
    }
}

pub struct Canvas {
    color_buffer: Vec<Color>,
    width: u32,
    height: u32,
    viewport: Viewport,
}

impl Canvas {
    pub fn new(width: u32, height: u32, scale: u32) -> Self {
        Self {
            color_buffer: vec![colors::BACKGROUND; buffer_len(width, height)],
            width,
            height,
            viewport: Viewport::centered(width, height, scale),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Logical-space box covering every visible block, padded by one pixel
    /// so that anything snapping onto the screen lies inside it.
    pub fn visible_box(&self) -> Result<ClipBox, GeometryError> {
        let right = self.width as i64 - 1;
        let bottom = self.height as i64 - 1;
        let (xmin, ymin) = self.viewport.to_logical(0, bottom);
        let (xmax, ymax) = self.viewport.to_logical(right, 0);
        ClipBox::new(
            (xmin - 1) as f64,
            (ymin - 1) as f64,
            (xmax + 1) as f64,
            (ymax + 1) as f64,
        )
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x >= 0 && x < self.width as i64 && y >= 0 && y < self.height as i64 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Set a single screen pixel. Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = color;
        }
    }

    /// Get a screen pixel, or None if out of bounds.
    pub fn get_pixel(&self, x: i64, y: i64) -> Option<Color> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    /// Screen-space rectangle, clipped to the canvas.
    pub fn draw_rect(&mut self, x: i64, y: i64, width: i64, height: i64, color: Color) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + width).min(self.width as i64);
        let y1 = (y + height).min(self.height as i64);
        for sy in y0..y1 {
            for sx in x0..x1 {
                self.set_pixel(sx, sy, color);
            }
        }
    }

    /// Grid lines on logical pixel boundaries, plus the two axes.
    pub fn draw_grid(&mut self, color: Color, axis_color: Color) {
        let s = self.viewport.scale as i64;
        let (cx, cy) = (self.viewport.center_x, self.viewport.center_y);
        for y in 0..self.height as i64 {
            for x in 0..self.width as i64 {
                if x == cx || y == cy {
                    self.set_pixel(x, y, axis_color);
                } else if s > 1 && ((x - cx) % s == 0 || (y - cy) % s == 0) {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Copy of the canvas as an RGBA image.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(colors::to_rgba_bytes(
                self.color_buffer[y as usize * self.width as usize + x as usize],
            ))
        })
    }

    /// Write the canvas to `path`; the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageError> {
        self.to_image().save(path)
    }
}

/// Logical pixels become `scale × scale` blocks.
impl PixelSink for Canvas {
    fn put(&mut self, x: i32, y: i32, color: Color) {
        let (left, top) = self.viewport.to_screen(x, y);
        let s = self.viewport.scale as i64;
        self.draw_rect(left, top, s, s, color);
    }
}
