//! Color tags passed through to pixel sinks.
//!
//! Colors are packed ARGB8888 `u32` values. The algorithms never interpret
//! them; they only forward the tag with every emitted pixel.

/// Packed ARGB8888 color.
pub type Color = u32;

pub const BACKGROUND: Color = 0xFFFFFFFF;
pub const GRID: Color = 0xFFE0E0E0;
pub const AXIS: Color = 0xFF616161;

pub const BLACK: Color = 0xFF000000;
pub const RED: Color = 0xFFFF0000;
pub const GREEN: Color = 0xFF008000;
pub const BLUE: Color = 0xFF0000FF;
pub const PURPLE: Color = 0xFF800080;
pub const LIGHT_GREY: Color = 0xFFCCCCCC;

// Defaults used when comparing algorithms on one canvas
pub const STEP_BY_STEP: Color = RED;
pub const DDA: Color = GREEN;
pub const BRESENHAM_LINE: Color = BLUE;
pub const BRESENHAM_CIRCLE: Color = PURPLE;

pub const CLIP_REGION: Color = BLUE;
pub const UNCLIPPED: Color = LIGHT_GREY;
pub const CLIPPED: Color = RED;

/// Reorder an ARGB8888 color into the RGBA byte order image encoders expect.
#[inline]
pub fn to_rgba_bytes(color: Color) -> [u8; 4] {
    let [a, r, g, b] = color.to_be_bytes();
    [r, g, b, a]
}
