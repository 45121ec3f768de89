//! Midpoint (Bresenham) circle rasterization.
//!
//! The algorithm walks one octant, from the top of the circle `(0, r)`
//! clockwise to the diagonal `x == y`, and mirrors every step into the other
//! seven octants:
//!
//! ```text
//!          (-x,+y) | (+x,+y)
//!     (-y,+x)  \   |   /  (+y,+x)
//!     ----------- c -----------
//!     (-y,-x)  /   |   \  (+y,-x)
//!          (-x,-y) | (+x,-y)
//! ```
//!
//! The integer decision variable `d` tracks whether the midpoint between the
//! two pixel candidates lies inside or outside the ideal circle:
//!
//! ```text
//! x = 0, y = r, d = 3 - 2r
//! while y >= x:
//!     plot 8 symmetric points
//!     x += 1
//!     if d > 0: y -= 1; d += 4(x - y) + 10
//!     else:             d += 4x + 6
//! ```
//!
//! On the axes (`x == 0`) and on the diagonal (`x == y`) some mirror images
//! coincide; they are emitted only once, so `r = 0` yields a single pixel at
//! the center and no call emits the same pixel twice.

use super::{snap_point, snap_radius, CircleRasterizer, PixelSink};
use crate::colors::Color;
use crate::error::GeometryError;
use crate::math::Point;
use crate::trace::{TraceSink, Tracer};

/// Circle rasterizer using the integer midpoint decision variable.
pub struct BresenhamCircleRasterizer;

impl BresenhamCircleRasterizer {
    pub fn new() -> Self {
        BresenhamCircleRasterizer {}
    }

    /// The 8-way mirror images of octant point `(x, y)` in emission order,
    /// with coincident images removed.
    fn symmetric_points(x: i64, y: i64) -> impl Iterator<Item = (i64, i64)> {
        let images = [
            (x, y),
            (-x, y),
            (x, -y),
            (-x, -y),
            (y, x),
            (-y, x),
            (y, -x),
            (-y, -x),
        ];
        images
            .into_iter()
            .enumerate()
            .filter(move |&(i, p)| !images[..i].contains(&p))
            .map(|(_, p)| p)
    }
}

impl Default for BresenhamCircleRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CircleRasterizer for BresenhamCircleRasterizer {
    fn draw_circle<S: PixelSink + ?Sized>(
        &self,
        center: Point,
        radius: f64,
        color: Color,
        sink: &mut S,
        trace: Option<&mut dyn TraceSink>,
    ) -> Result<(), GeometryError> {
        let (xc, yc) = snap_point(center, "center")?;
        let r = snap_radius(radius)?;
        let mut tracer = Tracer::new(trace);

        let mut x: i64 = 0;
        let mut y: i64 = r;
        let mut d: i64 = 3 - 2 * r;
        tracer.note(|| format!("center ({},{}), r={}, x=0, y={}, d={}", xc, yc, r, y, d));

        while y >= x {
            tracer.note(|| format!("symmetric points for (x,y)=({},{}), d={}", x, y, d));
            for (ox, oy) in Self::symmetric_points(x, y) {
                let (px, py) = ((xc + ox) as i32, (yc + oy) as i32);
                sink.put(px, py, color);
                tracer.plot(px, py, || format!("plot ({},{})", px, py));
            }

            x += 1;
            if d > 0 {
                y -= 1;
                d += 4 * (x - y) + 10;
                tracer.note(|| format!("d>0, y={}, d={}", y, d));
            } else {
                d += 4 * x + 6;
                tracer.note(|| format!("d<=0, d={}", d));
            }
        }

        Ok(())
    }
}
