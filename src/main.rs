//! Command-line front end: render a RON scene and report every run.
//!
//! Usage:
//!   rastclip scene.ron              # print timings, pixel counts, clip results
//!   rastclip scene.ron out.png      # ... and write the canvas
//!   rastclip --example              # print a sample scene

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use rastclip::clipper::{
    ClipBox, ClipResult, ConvexRegion, LiangBarskyClipper, LineClipper, Segment,
};
use rastclip::colors::{self, Color};
use rastclip::compare::{self, ClipReport, RasterReport};
use rastclip::math::Point;
use rastclip::raster::{BresenhamLineRasterizer, LineRasterizer};
use rastclip::render::Canvas;
use rastclip::scene::{self, ClipConfig, Scene, SceneError};
use rastclip::TraceLog;

#[derive(Parser, Debug)]
#[command(name = "rastclip")]
#[command(about = "Compare line/circle rasterizers and line clippers on a scene")]
struct Cli {
    /// Scene file (RON)
    #[arg(required_unless_present = "example")]
    scene: Option<PathBuf>,
    /// Write the rendered canvas to this image file
    output: Option<PathBuf>,
    /// Print a sample scene and exit
    #[arg(long, conflicts_with_all = ["scene", "output"])]
    example: bool,
}

fn print_trace(trace: Option<&TraceLog>) {
    if let Some(log) = trace {
        for line in log.lines() {
            println!("    {}", line);
        }
    }
}

fn print_raster_report(report: &RasterReport) {
    println!(
        "  {:<16} {:>6} pixels  {:>10.3?}",
        report.algorithm.to_string(),
        report.pixels.len(),
        report.elapsed
    );
    print_trace(report.trace.as_ref());
}

fn print_clip_report(report: &ClipReport) {
    let Segment { start, end } = report.segment;
    let outcome = match report.result {
        ClipResult::Accepted(s) => format!(
            "accepted ({:.3},{:.3}) - ({:.3},{:.3})",
            s.start.x, s.start.y, s.end.x, s.end.y
        ),
        ClipResult::Rejected => "rejected".to_string(),
    };
    println!(
        "  ({},{}) - ({},{}): {}  {:.3?}",
        start.x, start.y, end.x, end.y, outcome, report.elapsed
    );
    print_trace(report.trace.as_ref());
}

/// Boundary edges of a clip region, in vertex order.
fn region_edges(region: &ConvexRegion) -> Vec<Segment> {
    let vertices = match region {
        ConvexRegion::Box(b) => vec![
            Point::new(b.xmin(), b.ymin()),
            Point::new(b.xmax(), b.ymin()),
            Point::new(b.xmax(), b.ymax()),
            Point::new(b.xmin(), b.ymax()),
        ],
        ConvexRegion::Polygon(polygon) => polygon.vertices().to_vec(),
    };
    let n = vertices.len();
    (0..n)
        .map(|i| Segment::new(vertices[i], vertices[(i + 1) % n]))
        .collect()
}

/// Draw the part of `segment` that lands on the canvas.
///
/// Clip jobs accept any finite segment, far beyond what the rasterizers
/// take, so everything is cut to the visible area first.
fn draw_visible(
    canvas: &mut Canvas,
    visible: &ClipBox,
    segment: Segment,
    color: Color,
) -> Result<(), SceneError> {
    if let ClipResult::Accepted(s) = LiangBarskyClipper::new().clip(segment, visible, None)? {
        BresenhamLineRasterizer::new().draw_line(s.start, s.end, color, canvas, None)?;
    }
    Ok(())
}

fn run_clip_job(clip: &ClipConfig, trace: bool, canvas: &mut Canvas) -> Result<(), SceneError> {
    let region = clip.region.to_region()?;
    let visible = canvas.visible_box()?;

    for edge in region_edges(&region) {
        draw_visible(canvas, &visible, edge, colors::CLIP_REGION)?;
    }

    println!("{}:", clip.algorithm);
    let segments = clip.segments();
    let mut reports = Vec::with_capacity(segments.len());
    for segment in segments {
        draw_visible(canvas, &visible, segment, colors::UNCLIPPED)?;
        let report = compare::run_clipper(clip.algorithm, segment, &region, trace)?;
        print_clip_report(&report);
        reports.push(report);
    }

    // Accepted pieces go on top of every input segment
    for report in &reports {
        if let Some(s) = report.result.segment() {
            draw_visible(canvas, &visible, s, colors::CLIPPED)?;
        }
    }
    Ok(())
}

fn render(scene: &Scene) -> Result<Canvas, SceneError> {
    let mut canvas = Canvas::new(scene.canvas.width, scene.canvas.height, scene.canvas.scale);
    if scene.show_grid {
        canvas.draw_grid(colors::GRID, colors::AXIS);
    }

    for shape in scene.shapes() {
        println!("{:?}", shape);
        for report in compare::run_rasterizers(&shape, &scene.algorithms, scene.trace)? {
            print_raster_report(&report);
            report.replay(&mut canvas);
        }
    }

    if let Some(clip) = &scene.clip {
        run_clip_job(clip, scene.trace, &mut canvas)?;
    }
    Ok(canvas)
}

fn run(cli: &Cli) -> Result<(), SceneError> {
    if cli.example {
        print!("{}", Scene::example().to_ron()?);
        return Ok(());
    }

    let Some(path) = &cli.scene else {
        return Err(SceneError::ValidationError("no scene file given".to_string()));
    };
    let scene = scene::load_scene(path)?;
    let canvas = render(&scene)?;

    if let Some(output) = &cli.output {
        canvas.save(output)?;
        println!(
            "wrote {}x{} canvas to {}",
            canvas.width(),
            canvas.height(),
            output.display()
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("rastclip: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_accepts_scene_and_optional_output() {
        let cli = Cli::try_parse_from(["rastclip", "scene.ron"]).unwrap();
        assert_eq!(cli.scene, Some(PathBuf::from("scene.ron")));
        assert_eq!(cli.output, None);
        assert!(!cli.example);

        let cli = Cli::try_parse_from(["rastclip", "scene.ron", "out.png"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out.png")));
    }

    #[test]
    fn cli_rejects_missing_or_extra_arguments() {
        assert!(Cli::try_parse_from(["rastclip"]).is_err());
        assert!(Cli::try_parse_from(["rastclip", "a.ron", "b.png", "c"]).is_err());
        assert!(Cli::try_parse_from(["rastclip", "--example", "extra"]).is_err());
        assert!(Cli::try_parse_from(["rastclip", "--example"]).unwrap().example);
    }

    #[test]
    fn far_clip_segment_renders_its_visible_part() {
        let scene = scene::load_scene_from_str(
            r#"(clip: Some((
                region: Box(xmin: -5.0, ymin: -5.0, xmax: 5.0, ymax: 5.0),
                segments: [((-1000000000.0, 0.0), (1000000000.0, 0.0))],
            )))"#,
        )
        .unwrap();
        let canvas = render(&scene).unwrap();
        let viewport = canvas.viewport();

        let (sx, sy) = viewport.to_screen(0, 0);
        assert_eq!(canvas.get_pixel(sx + 1, sy + 1), Some(colors::CLIPPED));
        // outside the box the input stays grey, right up to the canvas edge
        let (sx, sy) = viewport.to_screen(15, 0);
        assert_eq!(canvas.get_pixel(sx + 1, sy + 1), Some(colors::UNCLIPPED));
        assert_eq!(
            canvas.get_pixel(canvas.width() as i64 - 1, sy + 1),
            Some(colors::UNCLIPPED)
        );
    }

    #[test]
    fn region_edges_wrap_around() {
        let region = ConvexRegion::Box(ClipBox::new(0.0, 0.0, 2.0, 1.0).unwrap());
        let edges = region_edges(&region);
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].end, edges[0].start);
    }
}
