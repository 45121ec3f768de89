//! Naive slope-stepping line rasterization.
//!
//! The textbook starting point: evaluate the line equation directly at every
//! integer position of the dominant axis and round the other coordinate.
//!
//! ```text
//! |dx| >= |dy|:  for x in x1..=x2   y = round(m·x + b),         m = dy/dx
//! |dx| <  |dy|:  for y in y1..=y2   x = round(m_inv·y + b_inv), m_inv = dx/dy
//! ```
//!
//! Endpoints are normalized first (`x1 <= x2`, and `y1 <= y2` in the steep
//! branch), so the pixel set does not depend on which endpoint comes first.
//! Rounding is half away from zero.

use super::{snap_point, LineRasterizer, PixelSink};
use crate::colors::Color;
use crate::error::GeometryError;
use crate::math::Point;
use crate::trace::{TraceSink, Tracer};

/// Line rasterizer that solves the line equation per pixel.
///
/// Uses one floating-point multiply-add and one rounding per pixel. Kept as a
/// baseline for comparing against the incremental algorithms.
pub struct StepByStepRasterizer;

impl StepByStepRasterizer {
    pub fn new() -> Self {
        StepByStepRasterizer {}
    }
}

impl Default for StepByStepRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRasterizer for StepByStepRasterizer {
    fn draw_line<S: PixelSink + ?Sized>(
        &self,
        start: Point,
        end: Point,
        color: Color,
        sink: &mut S,
        trace: Option<&mut dyn TraceSink>,
    ) -> Result<(), GeometryError> {
        let (mut x1, mut y1) = snap_point(start, "start point")?;
        let (mut x2, mut y2) = snap_point(end, "end point")?;
        let mut tracer = Tracer::new(trace);

        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
            std::mem::swap(&mut y1, &mut y2);
        }
        let dx = x2 - x1;
        let dy = y2 - y1;
        tracer.note(|| {
            format!(
                "start ({},{}) end ({},{}), dx={}, dy={}",
                x1, y1, x2, y2, dx, dy
            )
        });

        if dx == 0 && dy == 0 {
            let (x, y) = (x1 as i32, y1 as i32);
            sink.put(x, y, color);
            tracer.plot(x, y, || format!("single point, plot ({},{})", x, y));
            return Ok(());
        }

        if dx.abs() >= dy.abs() {
            let m = dy as f64 / dx as f64;
            let b = y1 as f64 - m * x1 as f64;
            tracer.note(|| format!("iterate over x, slope m = {:.2}", m));

            for x in x1..=x2 {
                let exact = m * x as f64 + b;
                let (px, py) = (x as i32, exact.round() as i32);
                sink.put(px, py, color);
                tracer.plot(px, py, || {
                    format!("x={}, y={:.2} -> {}, plot ({},{})", x, exact, py, px, py)
                });
            }
        } else {
            if y1 > y2 {
                std::mem::swap(&mut x1, &mut x2);
                std::mem::swap(&mut y1, &mut y2);
            }
            let m_inv = (x2 - x1) as f64 / (y2 - y1) as f64;
            let b_inv = x1 as f64 - m_inv * y1 as f64;
            tracer.note(|| format!("iterate over y, inverse slope m_inv = {:.2}", m_inv));

            for y in y1..=y2 {
                let exact = m_inv * y as f64 + b_inv;
                let (px, py) = (exact.round() as i32, y as i32);
                sink.put(px, py, color);
                tracer.plot(px, py, || {
                    format!("y={}, x={:.2} -> {}, plot ({},{})", y, exact, px, px, py)
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::*;
    use super::super::RasterAlgorithm;
    use super::*;
    use crate::colors;
    use crate::trace::TraceLog;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn draw(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<(i32, i32)> {
        positions(&line(RasterAlgorithm::StepByStep, x1, y1, x2, y2))
    }

    #[test]
    fn shallow_line_rounds_half_up_on_positive_values() {
        // y = x/2: 0.5 -> 1 and 1.5 -> 2
        assert_eq!(
            draw(0, 0, 4, 2),
            vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]
        );
    }

    #[test]
    fn negative_half_rounds_away_from_zero() {
        // y = -x/2: -0.5 -> -1 and -1.5 -> -2
        assert_eq!(
            draw(0, 0, 4, -2),
            vec![(0, 0), (1, -1), (2, -1), (3, -2), (4, -2)]
        );
    }

    #[test]
    fn reversed_shallow_line_still_iterates_left_to_right() {
        assert_eq!(draw(4, 2, 0, 0), draw(0, 0, 4, 2));
    }

    #[test]
    fn steep_line_iterates_over_y_upwards() {
        assert_eq!(
            draw(1, 4, 0, 0),
            vec![(0, 0), (0, 1), (1, 2), (1, 3), (1, 4)]
        );
    }

    #[test]
    fn vertical_line_covers_every_row() {
        assert_eq!(draw(3, 2, 3, -1), vec![(3, -1), (3, 0), (3, 1), (3, 2)]);
    }

    #[test]
    fn swapping_endpoints_keeps_pixel_set() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let (x1, y1, x2, y2) = (
                rng.gen_range(-40..=40),
                rng.gen_range(-40..=40),
                rng.gen_range(-40..=40),
                rng.gen_range(-40..=40),
            );
            let forward = line(RasterAlgorithm::StepByStep, x1, y1, x2, y2);
            let backward = line(RasterAlgorithm::StepByStep, x2, y2, x1, y1);
            assert_eq!(
                position_set(&forward),
                position_set(&backward),
                "({},{})-({},{})",
                x1,
                y1,
                x2,
                y2
            );
        }
    }

    #[test]
    fn trace_reports_branch_and_every_pixel() {
        let mut pixels = Vec::new();
        let mut log = TraceLog::new();
        StepByStepRasterizer::new()
            .draw_line(
                Point::new(0.0, 0.0),
                Point::new(4.0, 2.0),
                colors::RED,
                &mut pixels,
                Some(&mut log),
            )
            .unwrap();
        assert_eq!(log.len(), 2 + pixels.len());
        assert!(log.entries()[1].message.contains("m = 0.50"));
        assert_eq!(
            log.entries()[3].message,
            "x=1, y=0.50 -> 1, plot (1,1)"
        );
    }
}
