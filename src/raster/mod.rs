//! Line and circle rasterization algorithms.
//!
//! Four classic algorithms turn continuous geometry into an ordered sequence
//! of integer pixels, each with its own rounding and tie-breaking contract:
//!
//! - [`StepByStepRasterizer`]: naive slope stepping, `y = round(m·x + b)`
//! - [`DdaRasterizer`]: Digital Differential Analyzer, floating-point
//!   accumulation of per-step increments
//! - [`BresenhamLineRasterizer`]: integer-only error accumulation
//! - [`BresenhamCircleRasterizer`]: midpoint circle over one octant with
//!   8-way symmetry
//!
//! All of them can be run on identical input through [`RasterAlgorithm`],
//! which is how the comparison harness and the CLI select them.
//!
//! # Input domain
//!
//! Coordinates are real-valued [`Point`]s and are snapped to integers with
//! round-half-away-from-zero before the algorithm starts. Non-finite values,
//! coordinates beyond [`MAX_COORD`] and negative radii are rejected with
//! [`GeometryError::InvalidGeometry`] before any pixel or trace entry is
//! emitted.
//!
//! # Emission order
//!
//! Pixels are handed to the [`PixelSink`] in step order. The order is part of
//! each algorithm's contract, not just the resulting set.

mod bresenham_circle;
mod bresenham_line;
mod dda;
mod step_by_step;

pub use bresenham_circle::BresenhamCircleRasterizer;
pub use bresenham_line::BresenhamLineRasterizer;
pub use dda::DdaRasterizer;
pub use step_by_step::StepByStepRasterizer;

use serde::{Deserialize, Serialize};

use crate::colors::{self, Color};
use crate::error::GeometryError;
use crate::math::Point;
use crate::trace::TraceSink;

/// Largest accepted magnitude for any coordinate or radius.
///
/// Keeps `center ± radius` and every intermediate Bresenham term well inside
/// `i32`/`i64`.
pub const MAX_COORD: f64 = (1u32 << 28) as f64;

/// An emitted pixel: integer position plus the caller's color tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Pixel {
    pub fn new(x: i32, y: i32, color: Color) -> Self {
        Self { x, y, color }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

/// Write-only destination for emitted pixels.
///
/// Called exactly once per emitted pixel. The algorithms never read from
/// the sink and never retain it beyond one call.
pub trait PixelSink {
    fn put(&mut self, x: i32, y: i32, color: Color);
}

/// Records pixels in emission order.
impl PixelSink for Vec<Pixel> {
    fn put(&mut self, x: i32, y: i32, color: Color) {
        self.push(Pixel::new(x, y, color));
    }
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    #[inline]
    fn put(&mut self, x: i32, y: i32, color: Color) {
        (**self).put(x, y, color);
    }
}

/// Trait for line rasterization algorithms.
pub trait LineRasterizer {
    /// Rasterize the segment from `start` to `end`.
    ///
    /// Emits exactly one pixel when both endpoints snap to the same integer
    /// point.
    fn draw_line<S: PixelSink + ?Sized>(
        &self,
        start: Point,
        end: Point,
        color: Color,
        sink: &mut S,
        trace: Option<&mut dyn TraceSink>,
    ) -> Result<(), GeometryError>;
}

/// Trait for circle rasterization algorithms.
pub trait CircleRasterizer {
    /// Rasterize the circle of radius `radius` around `center`.
    fn draw_circle<S: PixelSink + ?Sized>(
        &self,
        center: Point,
        radius: f64,
        color: Color,
        sink: &mut S,
        trace: Option<&mut dyn TraceSink>,
    ) -> Result<(), GeometryError>;
}

/// Geometry a rasterizer can consume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Line { start: Point, end: Point },
    Circle { center: Point, radius: f64 },
}

/// Available rasterization algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RasterAlgorithm {
    /// Naive slope stepping along the dominant axis.
    StepByStep,
    /// Digital Differential Analyzer.
    Dda,
    /// Integer Bresenham line.
    BresenhamLine,
    /// Integer midpoint (Bresenham) circle.
    BresenhamCircle,
}

impl RasterAlgorithm {
    pub const ALL: [RasterAlgorithm; 4] = [
        RasterAlgorithm::StepByStep,
        RasterAlgorithm::Dda,
        RasterAlgorithm::BresenhamLine,
        RasterAlgorithm::BresenhamCircle,
    ];

    /// Color used for this algorithm when several share one canvas.
    pub fn default_color(&self) -> Color {
        match self {
            RasterAlgorithm::StepByStep => colors::STEP_BY_STEP,
            RasterAlgorithm::Dda => colors::DDA,
            RasterAlgorithm::BresenhamLine => colors::BRESENHAM_LINE,
            RasterAlgorithm::BresenhamCircle => colors::BRESENHAM_CIRCLE,
        }
    }

    /// Whether this algorithm can rasterize `shape`.
    pub fn accepts(&self, shape: &Shape) -> bool {
        matches!(
            (self, shape),
            (RasterAlgorithm::BresenhamCircle, Shape::Circle { .. })
                | (
                    RasterAlgorithm::StepByStep
                        | RasterAlgorithm::Dda
                        | RasterAlgorithm::BresenhamLine,
                    Shape::Line { .. }
                )
        )
    }

    /// Run this algorithm on `shape`.
    ///
    /// Fails with [`GeometryError::InvalidGeometry`] if the shape is of the
    /// wrong kind for the algorithm (see [`accepts`](Self::accepts)).
    pub fn draw<S: PixelSink + ?Sized>(
        &self,
        shape: &Shape,
        color: Color,
        sink: &mut S,
        trace: Option<&mut dyn TraceSink>,
    ) -> Result<(), GeometryError> {
        match (*self, *shape) {
            (RasterAlgorithm::StepByStep, Shape::Line { start, end }) => {
                StepByStepRasterizer.draw_line(start, end, color, sink, trace)
            }
            (RasterAlgorithm::Dda, Shape::Line { start, end }) => {
                DdaRasterizer.draw_line(start, end, color, sink, trace)
            }
            (RasterAlgorithm::BresenhamLine, Shape::Line { start, end }) => {
                BresenhamLineRasterizer.draw_line(start, end, color, sink, trace)
            }
            (RasterAlgorithm::BresenhamCircle, Shape::Circle { center, radius }) => {
                BresenhamCircleRasterizer.draw_circle(center, radius, color, sink, trace)
            }
            (algorithm, shape) => Err(GeometryError::InvalidGeometry(format!(
                "{} cannot rasterize {:?}",
                algorithm, shape
            ))),
        }
    }
}

impl std::fmt::Display for RasterAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterAlgorithm::StepByStep => write!(f, "StepByStep"),
            RasterAlgorithm::Dda => write!(f, "DDA"),
            RasterAlgorithm::BresenhamLine => write!(f, "BresenhamLine"),
            RasterAlgorithm::BresenhamCircle => write!(f, "BresenhamCircle"),
        }
    }
}

fn check_coord(value: f64, what: &str) -> Result<(), GeometryError> {
    if !value.is_finite() {
        return Err(GeometryError::InvalidGeometry(format!(
            "{} is not finite ({})",
            what, value
        )));
    }
    if value.abs() > MAX_COORD {
        return Err(GeometryError::InvalidGeometry(format!(
            "{} out of range: |{}| > {}",
            what, value, MAX_COORD
        )));
    }
    Ok(())
}

/// Validate a point and snap it to the integer grid (round half away from zero).
pub(crate) fn snap_point(p: Point, what: &str) -> Result<(i64, i64), GeometryError> {
    check_coord(p.x, what)?;
    check_coord(p.y, what)?;
    Ok((p.x.round() as i64, p.y.round() as i64))
}

/// Validate a radius and snap it to an integer.
pub(crate) fn snap_radius(r: f64) -> Result<i64, GeometryError> {
    check_coord(r, "radius")?;
    if r < 0.0 {
        return Err(GeometryError::InvalidGeometry(format!(
            "negative radius {}",
            r
        )));
    }
    Ok(r.round() as i64)
}
