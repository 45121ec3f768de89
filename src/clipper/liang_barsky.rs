//! Liang-Barsky line clipping against an axis-aligned box.
//!
//! Each side of the box gives one inequality `p_i · t <= q_i` on the
//! segment parameter:
//!
//! ```text
//! side     p_i     q_i
//! left     -dx     x1 - xmin
//! right     dx     xmax - x1
//! bottom   -dy     y1 - ymin
//! top       dy     ymax - y1
//! ```
//!
//! - `p_i == 0`: the segment is parallel to that side; `q_i < 0` puts it
//!   wholly outside, so it is rejected immediately.
//! - `p_i < 0`: the segment enters through that side at `t = q_i / p_i`,
//!   tightening `t0 = max(t0, t)`.
//! - `p_i > 0`: the segment leaves through that side, tightening
//!   `t1 = min(t1, t)`.
//!
//! The result is rejected if `t0 > t1`, otherwise it is the sub-segment
//! `[P(t0), P(t1)]`. An endpoint cut by a side is placed exactly on that
//! side (`x = xmin` for the left side, and so on), so clipping the result
//! again returns it bit for bit.

use super::{ClipBox, ClipResult, LineClipper, Segment};
use crate::error::GeometryError;
use crate::math::Point;
use crate::trace::{TraceSink, Tracer};

const SIDES: [&str; 4] = ["left", "right", "bottom", "top"];

/// Move `p` onto side `side` of `region`.
fn snap_to_side(p: Point, side: usize, region: &ClipBox) -> Point {
    match side {
        0 => Point::new(region.xmin(), p.y),
        1 => Point::new(region.xmax(), p.y),
        2 => Point::new(p.x, region.ymin()),
        _ => Point::new(p.x, region.ymax()),
    }
}

/// Parametric clipper for axis-aligned boxes.
pub struct LiangBarskyClipper;

impl LiangBarskyClipper {
    pub fn new() -> Self {
        LiangBarskyClipper {}
    }
}

impl Default for LiangBarskyClipper {
    fn default() -> Self {
        Self::new()
    }
}

impl LineClipper for LiangBarskyClipper {
    type Region = ClipBox;

    fn clip(
        &self,
        segment: Segment,
        region: &ClipBox,
        trace: Option<&mut dyn TraceSink>,
    ) -> Result<ClipResult, GeometryError> {
        segment.validate()?;
        let mut tracer = Tracer::new(trace);

        let Segment { start, .. } = segment;
        let d = segment.direction();
        let p = [-d.x, d.x, -d.y, d.y];
        let q = [
            start.x - region.xmin(),
            region.xmax() - start.x,
            start.y - region.ymin(),
            region.ymax() - start.y,
        ];
        tracer.note(|| {
            format!(
                "segment ({},{}) - ({},{}), box ({},{}) - ({},{})",
                segment.start.x,
                segment.start.y,
                segment.end.x,
                segment.end.y,
                region.xmin(),
                region.ymin(),
                region.xmax(),
                region.ymax()
            )
        });

        let mut t0: f64 = 0.0;
        let mut t1: f64 = 1.0;
        // sides that set the current bounds
        let mut enter_side = None;
        let mut leave_side = None;

        for i in 0..4 {
            if p[i] == 0.0 {
                if q[i] < 0.0 {
                    tracer.note(|| {
                        format!(
                            "{}: parallel and outside (q={:.3}), rejected",
                            SIDES[i], q[i]
                        )
                    });
                    return Ok(ClipResult::Rejected);
                }
                tracer.note(|| format!("{}: parallel and inside (q={:.3})", SIDES[i], q[i]));
                continue;
            }

            let t = q[i] / p[i];
            if p[i] < 0.0 {
                if t > t0 {
                    t0 = t;
                    enter_side = Some(i);
                }
            } else if t < t1 {
                t1 = t;
                leave_side = Some(i);
            }
            tracer.note(|| {
                format!(
                    "{}: p={:.3}, q={:.3}, t={:.3} ({}), t0={:.3}, t1={:.3}",
                    SIDES[i],
                    p[i],
                    q[i],
                    t,
                    if p[i] < 0.0 { "entering" } else { "leaving" },
                    t0,
                    t1
                )
            });
        }

        if t0 > t1 {
            tracer.note(|| format!("t0={:.3} > t1={:.3}, rejected", t0, t1));
            return Ok(ClipResult::Rejected);
        }

        let mut start = segment.point_at(t0);
        let mut end = segment.point_at(t1);
        if let Some(side) = enter_side {
            start = snap_to_side(start, side, region);
        }
        if let Some(side) = leave_side {
            end = snap_to_side(end, side, region);
        }
        let clipped = Segment::new(start, end);
        tracer.note(|| {
            format!(
                "accepted ({:.3},{:.3}) - ({:.3},{:.3})",
                clipped.start.x, clipped.start.y, clipped.end.x, clipped.end.y
            )
        });
        Ok(ClipResult::Accepted(clipped))
    }
}
