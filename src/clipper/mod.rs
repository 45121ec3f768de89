//! Parametric line clipping against convex regions.
//!
//! Both clippers describe the segment parametrically,
//!
//! ```text
//! P(t) = P1 + t·(P2 - P1),   t ∈ [0, 1]
//! ```
//!
//! and shrink the interval `[t_enter, t_leave]` with one half-plane
//! constraint per region boundary. If the interval becomes empty the segment
//! is [`ClipResult::Rejected`]; otherwise the sub-segment between the two
//! parameters is returned. Direction is preserved: the accepted segment runs
//! the same way as the input.
//!
//! - [`LiangBarskyClipper`]: axis-aligned [`ClipBox`], four constraints
//! - [`CyrusBeckClipper`]: arbitrary [`ConvexPolygon`], one constraint per edge
//!
//! [`ClipAlgorithm`] selects between them at runtime.

mod cyrus_beck;
mod liang_barsky;
mod region;

pub use cyrus_beck::CyrusBeckClipper;
pub use liang_barsky::LiangBarskyClipper;
pub use region::{ClipBox, ConvexPolygon, ConvexRegion, Winding};

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::math::{Point, Vec2};
use crate::trace::TraceSink;

/// Directed line segment from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    /// Point at parameter `t`. The endpoints are returned exactly for
    /// `t == 0` and `t == 1`.
    pub fn point_at(&self, t: f64) -> Point {
        if t <= 0.0 {
            self.start
        } else if t >= 1.0 {
            self.end
        } else {
            self.start.lerp(self.end, t)
        }
    }

    pub(crate) fn validate(&self) -> Result<(), GeometryError> {
        if self.start.is_finite() && self.end.is_finite() {
            Ok(())
        } else {
            Err(GeometryError::InvalidGeometry(format!(
                "segment ({}, {}) - ({}, {}) is not finite",
                self.start.x, self.start.y, self.end.x, self.end.y
            )))
        }
    }
}

impl AbsDiffEq for Segment {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.start.abs_diff_eq(&other.start, epsilon) && self.end.abs_diff_eq(&other.end, epsilon)
    }
}

impl RelativeEq for Segment {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.start.relative_eq(&other.start, epsilon, max_relative)
            && self.end.relative_eq(&other.end, epsilon, max_relative)
    }
}

/// Outcome of clipping one segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClipResult {
    /// The visible part of the segment (possibly the whole segment).
    Accepted(Segment),
    /// The segment lies entirely outside the region.
    Rejected,
}

impl ClipResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ClipResult::Accepted(_))
    }

    pub fn segment(&self) -> Option<Segment> {
        match self {
            ClipResult::Accepted(segment) => Some(*segment),
            ClipResult::Rejected => None,
        }
    }
}

/// Trait for line clipping algorithms.
pub trait LineClipper {
    /// Region type this algorithm clips against.
    type Region;

    /// Clip `segment` against `region`.
    ///
    /// Fails with [`GeometryError::InvalidGeometry`] for non-finite
    /// segment endpoints; an outside segment is `Ok(ClipResult::Rejected)`.
    fn clip(
        &self,
        segment: Segment,
        region: &Self::Region,
        trace: Option<&mut dyn TraceSink>,
    ) -> Result<ClipResult, GeometryError>;
}

/// Available clipping algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClipAlgorithm {
    /// Liang-Barsky, axis-aligned boxes only.
    #[default]
    LiangBarsky,
    /// Cyrus-Beck, any counter-clockwise convex polygon.
    CyrusBeck,
}

impl ClipAlgorithm {
    pub const ALL: [ClipAlgorithm; 2] = [ClipAlgorithm::LiangBarsky, ClipAlgorithm::CyrusBeck];

    /// Clip `segment` against `region` with this algorithm.
    ///
    /// Cyrus-Beck accepts a box region by converting it to its
    /// counter-clockwise polygon. Liang-Barsky only handles boxes and fails
    /// with [`GeometryError::InvalidRegion`] for a polygon.
    ///
    /// Clipping an accepted segment again is exact for Liang-Barsky, whose
    /// cut endpoints sit exactly on the box sides. Cyrus-Beck endpoints on a
    /// slanted edge carry rounding, so a second pass may move them in the
    /// last bits (well within `1e-9` relative) but never rejects them.
    pub fn clip(
        &self,
        segment: Segment,
        region: &ConvexRegion,
        trace: Option<&mut dyn TraceSink>,
    ) -> Result<ClipResult, GeometryError> {
        match (self, region) {
            (ClipAlgorithm::LiangBarsky, ConvexRegion::Box(clip_box)) => {
                LiangBarskyClipper.clip(segment, clip_box, trace)
            }
            (ClipAlgorithm::LiangBarsky, ConvexRegion::Polygon(_)) => {
                Err(GeometryError::InvalidRegion(
                    "Liang-Barsky clips against axis-aligned boxes only".to_string(),
                ))
            }
            (ClipAlgorithm::CyrusBeck, ConvexRegion::Box(clip_box)) => {
                CyrusBeckClipper.clip(segment, &clip_box.to_polygon()?, trace)
            }
            (ClipAlgorithm::CyrusBeck, ConvexRegion::Polygon(polygon)) => {
                CyrusBeckClipper.clip(segment, polygon, trace)
            }
        }
    }
}

impl std::fmt::Display for ClipAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipAlgorithm::LiangBarsky => write!(f, "Liang-Barsky"),
            ClipAlgorithm::CyrusBeck => write!(f, "Cyrus-Beck"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn point_at_returns_exact_endpoints() {
        let s = seg(0.1, 0.7, 0.3, -0.9);
        assert_eq!(s.point_at(0.0), s.start);
        assert_eq!(s.point_at(1.0), s.end);
        assert_relative_eq!(s.point_at(0.5), Point::new(0.2, -0.1), epsilon = 1e-12);
    }

    #[test]
    fn liang_barsky_and_cyrus_beck_agree_on_boxes() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..200 {
            let xmin = rng.gen_range(-10.0..0.0);
            let ymin = rng.gen_range(-10.0..0.0);
            let clip_box = ClipBox::new(
                xmin,
                ymin,
                xmin + rng.gen_range(0.5..12.0),
                ymin + rng.gen_range(0.5..12.0),
            )
            .unwrap();
            let box_region = ConvexRegion::Box(clip_box);
            let polygon_region = ConvexRegion::Polygon(clip_box.to_polygon().unwrap());

            for _ in 0..20 {
                let s = seg(
                    rng.gen_range(-20.0..20.0),
                    rng.gen_range(-20.0..20.0),
                    rng.gen_range(-20.0..20.0),
                    rng.gen_range(-20.0..20.0),
                );
                let lb = ClipAlgorithm::LiangBarsky.clip(s, &box_region, None).unwrap();
                let cb = ClipAlgorithm::CyrusBeck.clip(s, &polygon_region, None).unwrap();
                match (lb, cb) {
                    (ClipResult::Rejected, ClipResult::Rejected) => {}
                    (ClipResult::Accepted(a), ClipResult::Accepted(b)) => {
                        assert_relative_eq!(a, b, epsilon = 1e-9);
                    }
                    (a, b) => panic!("{:?} vs {:?} for {:?} in {:?}", a, b, s, clip_box),
                }
            }
        }
    }

    #[test]
    fn clipping_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(99);
        let clip_box = ClipBox::new(-4.0, -3.0, 6.0, 5.0).unwrap();
        let pentagon = ConvexPolygon::new(vec![
            Point::new(0.0, -5.0),
            Point::new(5.0, -1.0),
            Point::new(3.0, 5.0),
            Point::new(-3.0, 5.0),
            Point::new(-5.0, -1.0),
        ])
        .unwrap();
        let cases = [
            (ClipAlgorithm::LiangBarsky, ConvexRegion::Box(clip_box)),
            (ClipAlgorithm::CyrusBeck, ConvexRegion::Polygon(pentagon)),
        ];
        for (algorithm, region) in &cases {
            let mut accepted = 0;
            for _ in 0..2000 {
                let s = seg(
                    rng.gen_range(-15.0..15.0),
                    rng.gen_range(-15.0..15.0),
                    rng.gen_range(-15.0..15.0),
                    rng.gen_range(-15.0..15.0),
                );
                if let ClipResult::Accepted(once) = algorithm.clip(s, region, None).unwrap() {
                    accepted += 1;
                    match algorithm.clip(once, region, None).unwrap() {
                        ClipResult::Accepted(twice) if *algorithm == ClipAlgorithm::LiangBarsky => {
                            assert_eq!(once, twice, "re-clip of {:?}", s)
                        }
                        ClipResult::Accepted(twice) => {
                            assert_relative_eq!(once, twice, epsilon = 1e-9)
                        }
                        ClipResult::Rejected => panic!("{} re-rejected {:?}", algorithm, once),
                    }
                }
            }
            assert!(accepted > 100, "{} accepted only {}", algorithm, accepted);
        }
    }

    #[test]
    fn liang_barsky_refuses_polygon_region() {
        let polygon = ClipBox::new(0.0, 0.0, 1.0, 1.0)
            .unwrap()
            .to_polygon()
            .unwrap();
        let result = ClipAlgorithm::LiangBarsky.clip(
            seg(0.0, 0.0, 1.0, 1.0),
            &ConvexRegion::Polygon(polygon),
            None,
        );
        assert!(matches!(result, Err(GeometryError::InvalidRegion(_))));
    }

    #[test]
    fn clip_result_accessors() {
        let s = seg(0.0, 0.0, 1.0, 0.0);
        assert!(ClipResult::Accepted(s).is_accepted());
        assert_eq!(ClipResult::Accepted(s).segment(), Some(s));
        assert_eq!(ClipResult::Rejected.segment(), None);
    }
}
