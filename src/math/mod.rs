//! Minimal 2D math used by the rasterizers and clippers.

pub mod vec2;

pub use vec2::Vec2;

/// Real-valued point in the plane. Rasterizers snap these to integers,
/// clippers keep them as is.
pub type Point = Vec2;
