//! Scene files: what to draw and clip, in RON.
//!
//! A scene lists lines and circles for the rasterizers, the algorithms to
//! compare on them, and an optional clipping job. Every field has a default,
//! so a minimal file can be as short as `(lines: [((0.0, 0.0), (10.0, 4.0))])`.
//!
//! ```ron
//! (
//!     canvas: (width: 800, height: 600, scale: 20),
//!     trace: true,
//!     lines: [((-10.0, -4.0), (12.0, 7.0))],
//!     circles: [((0.0, 0.0), 8.0)],
//!     algorithms: [StepByStep, Dda, BresenhamLine, BresenhamCircle],
//!     clip: Some((
//!         algorithm: CyrusBeck,
//!         region: Polygon([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
//!         segments: [((-5.0, 5.0), (15.0, 5.0))],
//!     )),
//! )
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::clipper::{ClipAlgorithm, ClipBox, ConvexPolygon, ConvexRegion, Segment};
use crate::error::GeometryError;
use crate::math::Point;
use crate::raster::{RasterAlgorithm, Shape};

/// Validation limits for scene files
pub mod limits {
    /// Maximum canvas width or height in screen pixels
    pub const MAX_CANVAS_SIZE: u32 = 8192;
    /// Maximum screen pixels per logical pixel
    pub const MAX_SCALE: u32 = 200;
    /// Maximum number of lines, circles or clip segments in one scene
    pub const MAX_ITEMS: usize = 10_000;
    /// Maximum magnitude of a line endpoint, circle center or radius, in
    /// logical pixels. Bounds the pixel count of every rasterizer run.
    pub const MAX_EXTENT: f64 = 65_536.0;
}

/// Check that `value` is finite and within [`limits::MAX_EXTENT`].
fn check_extent(value: f64, what: &str, index: usize) -> Result<(), SceneError> {
    if !value.is_finite() || value.abs() > limits::MAX_EXTENT {
        return Err(SceneError::ValidationError(format!(
            "{} {} out of range: {} (limit ±{})",
            what,
            index,
            value,
            limits::MAX_EXTENT
        )));
    }
    Ok(())
}

/// Error type for scene loading, validation and output
#[derive(Debug)]
pub enum SceneError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    GeometryError(GeometryError),
    ValidationError(String),
    ImageError(image::ImageError),
}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        SceneError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for SceneError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneError::ParseError(e)
    }
}

impl From<ron::Error> for SceneError {
    fn from(e: ron::Error) -> Self {
        SceneError::SerializeError(e)
    }
}

impl From<GeometryError> for SceneError {
    fn from(e: GeometryError) -> Self {
        SceneError::GeometryError(e)
    }
}

impl From<image::ImageError> for SceneError {
    fn from(e: image::ImageError) -> Self {
        SceneError::ImageError(e)
    }
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::IoError(e) => write!(f, "IO error: {}", e),
            SceneError::ParseError(e) => write!(f, "Parse error: {}", e),
            SceneError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            SceneError::GeometryError(e) => write!(f, "Geometry error: {}", e),
            SceneError::ValidationError(e) => write!(f, "Validation error: {}", e),
            SceneError::ImageError(e) => write!(f, "Image error: {}", e),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::IoError(e) => Some(e),
            SceneError::ParseError(e) => Some(e),
            SceneError::SerializeError(e) => Some(e),
            SceneError::GeometryError(e) => Some(e),
            SceneError::ImageError(e) => Some(e),
            SceneError::ValidationError(_) => None,
        }
    }
}

/// Output canvas size and zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Screen pixels per logical pixel.
    pub scale: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            scale: 20,
        }
    }
}

/// Segment as `(start, end)`.
pub type LineConfig = ((f64, f64), (f64, f64));

/// Circle as `(center, radius)`.
pub type CircleConfig = ((f64, f64), f64);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RegionConfig {
    Box {
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
    },
    Polygon(Vec<(f64, f64)>),
}

impl RegionConfig {
    pub fn to_region(&self) -> Result<ConvexRegion, GeometryError> {
        match self {
            RegionConfig::Box {
                xmin,
                ymin,
                xmax,
                ymax,
            } => Ok(ClipBox::new(*xmin, *ymin, *xmax, *ymax)?.into()),
            RegionConfig::Polygon(vertices) => Ok(ConvexPolygon::new(
                vertices.iter().map(|&v| Point::from(v)).collect(),
            )?
            .into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipConfig {
    #[serde(default)]
    pub algorithm: ClipAlgorithm,
    pub region: RegionConfig,
    #[serde(default)]
    pub segments: Vec<LineConfig>,
}

impl ClipConfig {
    pub fn segments(&self) -> Vec<Segment> {
        self.segments
            .iter()
            .map(|&(a, b)| Segment::new(Point::from(a), Point::from(b)))
            .collect()
    }
}

fn default_true() -> bool {
    true
}

fn default_algorithms() -> Vec<RasterAlgorithm> {
    RasterAlgorithm::ALL.to_vec()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default = "default_true")]
    pub show_grid: bool,
    #[serde(default)]
    pub trace: bool,
    #[serde(default)]
    pub lines: Vec<LineConfig>,
    #[serde(default)]
    pub circles: Vec<CircleConfig>,
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<RasterAlgorithm>,
    #[serde(default)]
    pub clip: Option<ClipConfig>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            show_grid: true,
            trace: false,
            lines: Vec::new(),
            circles: Vec::new(),
            algorithms: default_algorithms(),
            clip: None,
        }
    }
}

impl Scene {
    /// A small scene exercising every algorithm.
    pub fn example() -> Self {
        Self {
            lines: vec![((-15.0, -6.0), (12.0, 5.0)), ((-4.0, 12.0), (3.0, -10.0))],
            circles: vec![((0.0, 0.0), 9.0)],
            clip: Some(ClipConfig {
                algorithm: ClipAlgorithm::LiangBarsky,
                region: RegionConfig::Box {
                    xmin: -5.0,
                    ymin: -5.0,
                    xmax: 5.0,
                    ymax: 5.0,
                },
                segments: vec![((-10.0, 0.0), (10.0, 0.0)), ((10.0, 10.0), (20.0, 20.0))],
            }),
            ..Self::default()
        }
    }

    /// Rasterizer input: every line, then every circle.
    pub fn shapes(&self) -> Vec<Shape> {
        let lines = self.lines.iter().map(|&(a, b)| Shape::Line {
            start: Point::from(a),
            end: Point::from(b),
        });
        let circles = self.circles.iter().map(|&(c, radius)| Shape::Circle {
            center: Point::from(c),
            radius,
        });
        lines.chain(circles).collect()
    }

    /// Check limits and clip region invariants.
    pub fn validate(&self) -> Result<(), SceneError> {
        let CanvasConfig {
            width,
            height,
            scale,
        } = self.canvas;
        if width == 0 || height == 0 {
            return Err(SceneError::ValidationError(format!(
                "canvas must not be empty ({}x{})",
                width, height
            )));
        }
        if width > limits::MAX_CANVAS_SIZE || height > limits::MAX_CANVAS_SIZE {
            return Err(SceneError::ValidationError(format!(
                "canvas too large ({}x{} > {})",
                width,
                height,
                limits::MAX_CANVAS_SIZE
            )));
        }
        if scale == 0 || scale > limits::MAX_SCALE {
            return Err(SceneError::ValidationError(format!(
                "scale must be in 1..={} (got {})",
                limits::MAX_SCALE,
                scale
            )));
        }

        let clip_segments = self.clip.as_ref().map_or(0, |c| c.segments.len());
        for (what, count) in [
            ("lines", self.lines.len()),
            ("circles", self.circles.len()),
            ("clip segments", clip_segments),
        ] {
            if count > limits::MAX_ITEMS {
                return Err(SceneError::ValidationError(format!(
                    "too many {} ({} > {})",
                    what,
                    count,
                    limits::MAX_ITEMS
                )));
            }
        }

        for (i, &((x1, y1), (x2, y2))) in self.lines.iter().enumerate() {
            for v in [x1, y1, x2, y2] {
                check_extent(v, "line", i)?;
            }
        }
        for (i, &((x, y), radius)) in self.circles.iter().enumerate() {
            for v in [x, y, radius] {
                check_extent(v, "circle", i)?;
            }
            if radius < 0.0 {
                return Err(SceneError::ValidationError(format!(
                    "circle {} has negative radius {}",
                    i, radius
                )));
            }
        }

        // Clip segments only need to be finite; the renderer draws their
        // visible part.
        if let Some(clip) = &self.clip {
            clip.region.to_region()?;
            for segment in clip.segments() {
                segment.validate()?;
            }
        }
        Ok(())
    }

    pub fn to_ron(&self) -> Result<String, SceneError> {
        let config = ron::ser::PrettyConfig::new().depth_limit(4);
        Ok(ron::ser::to_string_pretty(self, config)?)
    }
}

/// Parse and validate a scene from RON text.
pub fn load_scene_from_str(s: &str) -> Result<Scene, SceneError> {
    let scene: Scene = ron::from_str(s)?;
    scene.validate()?;
    Ok(scene)
}

/// Load and validate a scene file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, SceneError> {
    let contents = fs::read_to_string(path)?;
    load_scene_from_str(&contents)
}
