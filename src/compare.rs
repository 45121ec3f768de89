//! Side-by-side runs of several algorithms on identical input.
//!
//! Each algorithm gets its own recording sink and, optionally, its own trace,
//! so runs never observe each other. Reports keep the pixels in emission
//! order together with the wall-clock time of the call.

use std::time::{Duration, Instant};

use crate::clipper::{ClipAlgorithm, ClipResult, ConvexRegion, Segment};
use crate::colors::Color;
use crate::error::GeometryError;
use crate::raster::{Pixel, PixelSink, RasterAlgorithm, Shape};
use crate::trace::{TraceLog, TraceSink};

/// Result of one rasterizer run.
#[derive(Debug, Clone)]
pub struct RasterReport {
    pub algorithm: RasterAlgorithm,
    pub shape: Shape,
    pub color: Color,
    /// Pixels in emission order.
    pub pixels: Vec<Pixel>,
    pub elapsed: Duration,
    pub trace: Option<TraceLog>,
}

impl RasterReport {
    /// Re-emit the recorded pixels into `sink`, in emission order.
    pub fn replay<S: PixelSink + ?Sized>(&self, sink: &mut S) {
        for pixel in &self.pixels {
            sink.put(pixel.x, pixel.y, pixel.color);
        }
    }
}

/// Result of one clipper run.
#[derive(Debug, Clone)]
pub struct ClipReport {
    pub algorithm: ClipAlgorithm,
    pub segment: Segment,
    pub result: ClipResult,
    pub elapsed: Duration,
    pub trace: Option<TraceLog>,
}

/// Run every algorithm in `algorithms` that accepts `shape`.
///
/// Algorithms that cannot draw the shape (a circle algorithm given a line,
/// and vice versa) are skipped. Each report uses the algorithm's
/// [default color](RasterAlgorithm::default_color).
pub fn run_rasterizers(
    shape: &Shape,
    algorithms: &[RasterAlgorithm],
    trace: bool,
) -> Result<Vec<RasterReport>, GeometryError> {
    algorithms
        .iter()
        .filter(|algorithm| algorithm.accepts(shape))
        .map(|&algorithm| run_rasterizer(algorithm, shape, algorithm.default_color(), trace))
        .collect()
}

/// Run a single rasterizer and record its output.
pub fn run_rasterizer(
    algorithm: RasterAlgorithm,
    shape: &Shape,
    color: Color,
    trace: bool,
) -> Result<RasterReport, GeometryError> {
    let mut pixels = Vec::new();
    let mut log = trace.then(TraceLog::new);

    let started = Instant::now();
    algorithm.draw(
        shape,
        color,
        &mut pixels,
        log.as_mut().map(|l| l as &mut dyn TraceSink),
    )?;
    let elapsed = started.elapsed();

    Ok(RasterReport {
        algorithm,
        shape: *shape,
        color,
        pixels,
        elapsed,
        trace: log,
    })
}

/// Clip `segment` against `region` with each algorithm in `algorithms`.
pub fn run_clippers(
    segment: Segment,
    region: &ConvexRegion,
    algorithms: &[ClipAlgorithm],
    trace: bool,
) -> Result<Vec<ClipReport>, GeometryError> {
    algorithms
        .iter()
        .map(|&algorithm| run_clipper(algorithm, segment, region, trace))
        .collect()
}

/// Run a single clipper and record its outcome.
pub fn run_clipper(
    algorithm: ClipAlgorithm,
    segment: Segment,
    region: &ConvexRegion,
    trace: bool,
) -> Result<ClipReport, GeometryError> {
    let mut log = trace.then(TraceLog::new);

    let started = Instant::now();
    let result = algorithm.clip(
        segment,
        region,
        log.as_mut().map(|l| l as &mut dyn TraceSink),
    )?;
    let elapsed = started.elapsed();

    Ok(ClipReport {
        algorithm,
        segment,
        result,
        elapsed,
        trace: log,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipper::ClipBox;
    use crate::colors;
    use crate::math::Point;

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Shape {
        Shape::Line {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
        }
    }

    #[test]
    fn line_runs_skip_the_circle_algorithm() {
        let reports = run_rasterizers(&line(0.0, 0.0, 8.0, 3.0), &RasterAlgorithm::ALL, false)
            .unwrap();
        let names: Vec<_> = reports.iter().map(|r| r.algorithm).collect();
        assert_eq!(
            names,
            vec![
                RasterAlgorithm::StepByStep,
                RasterAlgorithm::Dda,
                RasterAlgorithm::BresenhamLine
            ]
        );
        assert!(reports.iter().all(|r| r.trace.is_none()));
        assert!(reports.iter().all(|r| r.pixels.len() == 9));
        assert_eq!(reports[1].pixels[0].color, colors::DDA);
    }

    #[test]
    fn circle_run_records_trace() {
        let circle = Shape::Circle {
            center: Point::new(1.0, 1.0),
            radius: 5.0,
        };
        let reports = run_rasterizers(&circle, &RasterAlgorithm::ALL, true).unwrap();
        assert_eq!(reports.len(), 1);
        let trace = reports[0].trace.as_ref().unwrap();
        assert_eq!(trace.pixels().count(), reports[0].pixels.len());
    }

    #[test]
    fn replay_reproduces_emission_order() {
        let report =
            run_rasterizer(RasterAlgorithm::BresenhamLine, &line(3.0, -2.0, -4.0, 5.0), colors::BLUE, false)
                .unwrap();
        let mut replayed: Vec<Pixel> = Vec::new();
        report.replay(&mut replayed);
        assert_eq!(replayed, report.pixels);
    }

    #[test]
    fn invalid_input_aborts_the_run() {
        let result = run_rasterizers(&line(f64::NAN, 0.0, 1.0, 1.0), &RasterAlgorithm::ALL, false);
        assert!(matches!(result, Err(GeometryError::InvalidGeometry(_))));
    }

    #[test]
    fn clippers_agree_on_a_box() {
        let region = ConvexRegion::Box(ClipBox::new(-5.0, -5.0, 5.0, 5.0).unwrap());
        let segment = Segment::new(Point::new(-10.0, 0.0), Point::new(10.0, 0.0));
        let reports = run_clippers(segment, &region, &ClipAlgorithm::ALL, true).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].result, reports[1].result);
        assert!(reports.iter().all(|r| r.trace.as_ref().is_some_and(|t| !t.is_empty())));
    }
}
