//! Digital Differential Analyzer (DDA) line rasterization.
//!
//! Instead of evaluating the line equation at every pixel, DDA walks the line
//! in `steps = max(|dx|, |dy|)` equal increments and accumulates position in
//! floating point:
//!
//! ```text
//! x_inc = dx / steps        y_inc = dy / steps
//! (x, y) = (x1, y1)
//! repeat steps + 1 times:
//!     plot(round(x), round(y))
//!     x += x_inc; y += y_inc
//! ```
//!
//! The dominant axis advances by exactly one pixel per step, so the output is
//! monotonic along it and always holds `steps + 1` pixels, both endpoints
//! included. The minor axis carries the accumulated floating-point error,
//! which is the behavior this rasterizer exists to demonstrate.

use super::{snap_point, LineRasterizer, PixelSink};
use crate::colors::Color;
use crate::error::GeometryError;
use crate::math::Point;
use crate::trace::{TraceSink, Tracer};

/// Line rasterizer using floating-point incremental accumulation.
pub struct DdaRasterizer;

impl DdaRasterizer {
    pub fn new() -> Self {
        DdaRasterizer {}
    }
}

impl Default for DdaRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRasterizer for DdaRasterizer {
    fn draw_line<S: PixelSink + ?Sized>(
        &self,
        start: Point,
        end: Point,
        color: Color,
        sink: &mut S,
        trace: Option<&mut dyn TraceSink>,
    ) -> Result<(), GeometryError> {
        let (x1, y1) = snap_point(start, "start point")?;
        let (x2, y2) = snap_point(end, "end point")?;
        let mut tracer = Tracer::new(trace);

        let dx = x2 - x1;
        let dy = y2 - y1;
        let steps = dx.abs().max(dy.abs());
        tracer.note(|| format!("start ({},{}) end ({},{}), steps={}", x1, y1, x2, y2, steps));

        // A zero-length line has no direction to step along
        let (x_inc, y_inc) = if steps == 0 {
            (0.0, 0.0)
        } else {
            (dx as f64 / steps as f64, dy as f64 / steps as f64)
        };
        tracer.note(|| format!("increments: x_inc={:.3}, y_inc={:.3}", x_inc, y_inc));

        let mut x = x1 as f64;
        let mut y = y1 as f64;
        for i in 0..=steps {
            let (px, py) = (x.round() as i32, y.round() as i32);
            sink.put(px, py, color);
            tracer.plot(px, py, || {
                format!("i={}, (x,y)=({:.2},{:.2}), plot ({},{})", i, x, y, px, py)
            });
            x += x_inc;
            y += y_inc;
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

    #[test]
    fn emits_steps_plus_one_pixels() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let (x1, y1, x2, y2): (i32, i32, i32, i32) = (
                rng.gen_range(-60..=60),
                rng.gen_range(-60..=60),
                rng.gen_range(-60..=60),
                rng.gen_range(-60..=60),
            );
            let steps = (x2 - x1).abs().max((y2 - y1).abs()) as usize;
            let pixels = line(RasterAlgorithm::Dda, x1, y1, x2, y2);
            assert_eq!(pixels.len(), steps + 1);
        }
    }

    #[test]
    fn monotonic_in_dominant_axis_and_hits_both_endpoints() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..300 {
            let (x1, y1, x2, y2): (i32, i32, i32, i32) = (
                rng.gen_range(-50..=50),
                rng.gen_range(-50..=50),
                rng.gen_range(-50..=50),
                rng.gen_range(-50..=50),
            );
            let pixels = positions(&line(RasterAlgorithm::Dda, x1, y1, x2, y2));
            assert_eq!(pixels.first(), Some(&(x1, y1)));
            assert_eq!(pixels.last(), Some(&(x2, y2)));

            let x_major = (x2 - x1).abs() >= (y2 - y1).abs();
            for pair in pixels.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let step = if x_major { b.0 - a.0 } else { b.1 - a.1 };
                assert_eq!(step.abs(), 1);
            }
        }
    }

    #[test]
    fn diagonal_steps_both_axes_each_time() {
        assert_eq!(
            positions(&line(RasterAlgorithm::Dda, 0, 0, 3, -3)),
            vec![(0, 0), (1, -1), (2, -2), (3, -3)]
        );
    }

    #[test]
    fn shallow_line_sequence() {
        // increments (1, 0.4): y = 0, 0.4, 0.8, 1.2, 1.6, 2.0
        assert_eq!(
            positions(&line(RasterAlgorithm::Dda, 0, 0, 5, 2)),
            vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]
        );
    }

    #[test]
    fn trace_lists_increments() {
        let mut pixels = Vec::new();
        let mut log = TraceLog::new();
        DdaRasterizer::new()
            .draw_line(
                Point::new(0.0, 0.0),
                Point::new(4.0, 1.0),
                colors::GREEN,
                &mut pixels,
                Some(&mut log),
            )
            .unwrap();
        assert_eq!(log.entries()[0].message, "start (0,0) end (4,1), steps=4");
        assert_eq!(log.entries()[1].message, "increments: x_inc=1.000, y_inc=0.250");
        assert_eq!(log.pixels().count(), 5);
    }
}
