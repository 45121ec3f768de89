//! Integer Bresenham line rasterization.
//!
//! Bresenham's algorithm decides which pixels to light using only integer
//! additions and comparisons. It keeps a single error term that measures how
//! far the current pixel is from the ideal line, in units scaled so that no
//! division is ever needed.
//!
//! ```text
//! dx = |x2 - x1|      dy = -|y2 - y1|
//! sx = sign(x2 - x1)  sy = sign(y2 - y1)
//! err = dx + dy
//! loop:
//!     plot(x, y)
//!     if (x, y) == (x2, y2): stop
//!     e2 = 2·err
//!     if e2 >= dy: err += dy; x += sx
//!     if e2 <= dx: err += dx; y += sy
//! ```
//!
//! Both conditions can hold in the same iteration, which produces a diagonal
//! move. That is what distinguishes it from DDA at 45°: Bresenham never
//! needs a fractional accumulator to get there.
//!
//! Each iteration moves at least one axis closer to the end point and never
//! overshoots it, so the loop terminates after at most `|dx| + |dy|`
//! iterations for any integer input.

use super::{snap_point, LineRasterizer, PixelSink};
use crate::colors::Color;
use crate::error::GeometryError;
use crate::math::Point;
use crate::trace::{TraceSink, Tracer};

/// Line rasterizer using Bresenham's integer error accumulation.
pub struct BresenhamLineRasterizer;

impl BresenhamLineRasterizer {
    pub fn new() -> Self {
        BresenhamLineRasterizer {}
    }
}

impl Default for BresenhamLineRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRasterizer for BresenhamLineRasterizer {
    fn draw_line<S: PixelSink + ?Sized>(
        &self,
        start: Point,
        end: Point,
        color: Color,
        sink: &mut S,
        trace: Option<&mut dyn TraceSink>,
    ) -> Result<(), GeometryError> {
        let (mut x, mut y) = snap_point(start, "start point")?;
        let (x2, y2) = snap_point(end, "end point")?;
        let mut tracer = Tracer::new(trace);

        let dx = (x2 - x).abs();
        let dy = -(y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx + dy;
        tracer.note(|| {
            format!(
                "start ({},{}) end ({},{}), dx={}, dy={}",
                x, y, x2, y2, dx, -dy
            )
        });

        loop {
            let (px, py) = (x as i32, y as i32);
            sink.put(px, py, color);
            tracer.plot(px, py, || format!("plot ({},{}), err={}", px, py, err));

            if x == x2 && y == y2 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
                tracer.note(|| format!("e2>=dy, err={}, x={}", err, x));
            }
            if e2 <= dx {
                err += dx;
                y += sy;
                tracer.note(|| format!("e2<=dx, err={}, y={}", err, y));
            }
        }

        Ok(())
    }
}
