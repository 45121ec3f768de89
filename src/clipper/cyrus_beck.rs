//! Cyrus-Beck line clipping against a convex polygon.
//!
//! Generalizes Liang-Barsky from the four sides of a box to every edge of a
//! convex polygon. For edge `P_i -> P_{i+1}` (wrapping from the last vertex
//! to the first) the edge normal is
//!
//! ```text
//! N = (P_i.y - P_{i+1}.y, P_{i+1}.x - P_i.x)
//! ```
//!
//! which points into a counter-clockwise polygon. With `D = P2 - P1` and
//! `W = P1 - P_i`:
//!
//! - `D·N != 0`: the line crosses the edge at `t = -(W·N) / (D·N)`; it is
//!   entering when `D·N > 0` (`t_enter = max(t_enter, t)`) and leaving
//!   otherwise (`t_leave = min(t_leave, t)`).
//! - `D·N == 0`: the segment is parallel to the edge; `W·N < 0` means it
//!   runs on the outer side, so it is rejected immediately.
//!
//! The segment is rejected if `t_enter > t_leave`.
//!
//! The polygon's winding is a precondition, not something this clipper
//! checks: a clockwise polygon turns every normal outward and inverts the
//! inside test. See [`ConvexPolygon::to_counter_clockwise`].

use super::{ClipResult, ConvexPolygon, LineClipper, Segment};
use crate::error::GeometryError;
use crate::math::Vec2;
use crate::trace::{TraceSink, Tracer};

/// Parametric clipper for convex polygons.
pub struct CyrusBeckClipper;

impl CyrusBeckClipper {
    pub fn new() -> Self {
        CyrusBeckClipper {}
    }
}

impl Default for CyrusBeckClipper {
    fn default() -> Self {
        Self::new()
    }
}

impl LineClipper for CyrusBeckClipper {
    type Region = ConvexPolygon;

    fn clip(
        &self,
        segment: Segment,
        region: &ConvexPolygon,
        trace: Option<&mut dyn TraceSink>,
    ) -> Result<ClipResult, GeometryError> {
        segment.validate()?;
        let mut tracer = Tracer::new(trace);

        let d = segment.direction();
        tracer.note(|| {
            format!(
                "segment ({},{}) - ({},{}), D=({},{}), {} edges",
                segment.start.x,
                segment.start.y,
                segment.end.x,
                segment.end.y,
                d.x,
                d.y,
                region.vertices().len()
            )
        });

        let mut t_enter: f64 = 0.0;
        let mut t_leave: f64 = 1.0;

        for (i, (a, b)) in region.edges().enumerate() {
            let normal = Vec2::new(a.y - b.y, b.x - a.x);
            let w = segment.start - a;
            let d_dot_n = d.dot(normal);
            let w_dot_n = w.dot(normal);

            if d_dot_n != 0.0 {
                let t = -w_dot_n / d_dot_n;
                if d_dot_n > 0.0 {
                    t_enter = t_enter.max(t);
                } else {
                    t_leave = t_leave.min(t);
                }
                tracer.note(|| {
                    format!(
                        "edge {}: N=({},{}), D·N={:.3}, W·N={:.3}, t={:.3} ({}), t_enter={:.3}, t_leave={:.3}",
                        i,
                        normal.x,
                        normal.y,
                        d_dot_n,
                        w_dot_n,
                        t,
                        if d_dot_n > 0.0 { "entering" } else { "leaving" },
                        t_enter,
                        t_leave
                    )
                });
            } else if w_dot_n < 0.0 {
                tracer.note(|| {
                    format!(
                        "edge {}: parallel and outside (W·N={:.3}), rejected",
                        i, w_dot_n
                    )
                });
                return Ok(ClipResult::Rejected);
            } else {
                tracer.note(|| format!("edge {}: parallel and inside (W·N={:.3})", i, w_dot_n));
            }
        }

        if t_enter > t_leave {
            tracer.note(|| {
                format!(
                    "t_enter={:.3} > t_leave={:.3}, rejected",
                    t_enter, t_leave
                )
            });
            return Ok(ClipResult::Rejected);
        }

        let clipped = Segment::new(segment.point_at(t_enter), segment.point_at(t_leave));
        tracer.note(|| {
            format!(
                "accepted ({:.3},{:.3}) - ({:.3},{:.3})",
                clipped.start.x, clipped.start.y, clipped.end.x, clipped.end.y
            )
        });
        Ok(ClipResult::Accepted(clipped))
    }
}
