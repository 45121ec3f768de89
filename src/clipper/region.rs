//! Convex clip regions.

use crate::error::GeometryError;
use crate::math::Point;

fn check_finite(value: f64, what: &str) -> Result<(), GeometryError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::InvalidGeometry(format!(
            "{} is not finite ({})",
            what, value
        )))
    }
}

/// Axis-aligned clip rectangle with `xmin <= xmax` and `ymin <= ymax`.
///
/// A box may be degenerate (zero width or height); it then clips to a
/// line or a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipBox {
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
}

impl ClipBox {
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self, GeometryError> {
        check_finite(xmin, "xmin")?;
        check_finite(ymin, "ymin")?;
        check_finite(xmax, "xmax")?;
        check_finite(ymax, "ymax")?;
        if xmin > xmax || ymin > ymax {
            return Err(GeometryError::InvalidRegion(format!(
                "inverted box ({}, {}) - ({}, {})",
                xmin, ymin, xmax, ymax
            )));
        }
        Ok(Self {
            xmin,
            ymin,
            xmax,
            ymax,
        })
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    /// The box as a counter-clockwise polygon, starting at `(xmin, ymin)`.
    ///
    /// Fails with [`GeometryError::InvalidRegion`] for a zero-area box, which
    /// has no polygon equivalent under the edge-normal construction.
    pub fn to_polygon(&self) -> Result<ConvexPolygon, GeometryError> {
        if self.xmin == self.xmax || self.ymin == self.ymax {
            return Err(GeometryError::InvalidRegion(
                "zero-area box has no polygon form".to_string(),
            ));
        }
        ConvexPolygon::new(vec![
            Point::new(self.xmin, self.ymin),
            Point::new(self.xmax, self.ymin),
            Point::new(self.xmax, self.ymax),
            Point::new(self.xmin, self.ymax),
        ])
    }
}

/// Vertex order of a polygon in a y-up frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    /// Zero signed area (all vertices collinear).
    Degenerate,
}

/// Convex polygon given by at least three vertices in order.
///
/// The edge list wraps from the last vertex back to the first. Convexity is
/// not checked.
///
/// # Winding
///
/// Cyrus-Beck clipping derives the edge normal of `P_i -> P_{i+1}` as
/// `(P_i.y - P_{i+1}.y, P_{i+1}.x - P_i.x)`, which points into the polygon
/// only for counter-clockwise vertex order. A clockwise polygon inverts the
/// inside/outside test. The winding is not normalized automatically; use
/// [`winding`](Self::winding) to inspect it and
/// [`to_counter_clockwise`](Self::to_counter_clockwise) to fix it explicitly.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    vertices: Vec<Point>,
}

impl ConvexPolygon {
    pub fn new(vertices: Vec<Point>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::InvalidRegion(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        for (i, v) in vertices.iter().enumerate() {
            if !v.is_finite() {
                return Err(GeometryError::InvalidGeometry(format!(
                    "vertex {} is not finite ({}, {})",
                    i, v.x, v.y
                )));
            }
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Edges `(P_i, P_{i+1})`, including the closing edge back to `P_0`.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Shoelace signed area; positive for counter-clockwise order.
    pub fn signed_area(&self) -> f64 {
        self.edges().map(|(a, b)| a.cross(b)).sum::<f64>() / 2.0
    }

    pub fn winding(&self) -> Winding {
        let area = self.signed_area();
        if area > 0.0 {
            Winding::CounterClockwise
        } else if area < 0.0 {
            Winding::Clockwise
        } else {
            Winding::Degenerate
        }
    }

    /// A copy with counter-clockwise vertex order.
    pub fn to_counter_clockwise(&self) -> Self {
        let mut vertices = self.vertices.clone();
        if self.winding() == Winding::Clockwise {
            vertices.reverse();
        }
        Self { vertices }
    }
}

/// A convex region a segment can be clipped against.
#[derive(Clone, Debug, PartialEq)]
pub enum ConvexRegion {
    Box(ClipBox),
    Polygon(ConvexPolygon),
}

impl From<ClipBox> for ConvexRegion {
    fn from(clip_box: ClipBox) -> Self {
        ConvexRegion::Box(clip_box)
    }
}

impl From<ConvexPolygon> for ConvexRegion {
    fn from(polygon: ConvexPolygon) -> Self {
        ConvexRegion::Polygon(polygon)
    }
}
