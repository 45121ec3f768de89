//! Classic raster graphics algorithms, side by side.
//!
//! Four rasterizers turn continuous geometry into integer pixels and two
//! parametric clippers cut line segments against convex regions. Every
//! algorithm can optionally narrate its work into a trace, one entry per
//! step, so the runs can be compared and explained.
//!
//! # Quick Start
//!
//! ```
//! use rastclip::prelude::*;
//!
//! let mut pixels: Vec<Pixel> = Vec::new();
//! BresenhamLineRasterizer::new()
//!     .draw_line(Point::new(0.0, 0.0), Point::new(6.0, 4.0), colors::BLUE, &mut pixels, None)
//!     .unwrap();
//! assert_eq!(pixels.len(), 7);
//!
//! let clip_box = ClipBox::new(-5.0, -5.0, 5.0, 5.0).unwrap();
//! let segment = Segment::new(Point::new(-10.0, 0.0), Point::new(10.0, 0.0));
//! let result = LiangBarskyClipper::new().clip(segment, &clip_box, None).unwrap();
//! assert!(result.is_accepted());
//! ```

// Public API - exposed to library consumers
pub mod clipper;
pub mod colors;
pub mod compare;
pub mod error;
pub mod math;
pub mod raster;
pub mod render;
pub mod scene;
pub mod trace;

// Re-export commonly needed types at crate root for convenience
pub use clipper::{ClipAlgorithm, ClipResult, Segment};
pub use error::GeometryError;
pub use raster::{Pixel, PixelSink, RasterAlgorithm, Shape};
pub use scene::{load_scene, Scene, SceneError};
pub use trace::{TraceEntry, TraceLog, TraceSink};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use rastclip::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use crate::math::{Point, Vec2};

    // Rasterizers
    pub use crate::raster::{
        BresenhamCircleRasterizer, BresenhamLineRasterizer, CircleRasterizer, DdaRasterizer,
        LineRasterizer, Pixel, PixelSink, RasterAlgorithm, Shape, StepByStepRasterizer,
    };

    // Clippers
    pub use crate::clipper::{
        ClipAlgorithm, ClipBox, ClipResult, ConvexPolygon, ConvexRegion, CyrusBeckClipper,
        LiangBarskyClipper, LineClipper, Segment, Winding,
    };

    // Tracing & errors
    pub use crate::error::GeometryError;
    pub use crate::trace::{TraceEntry, TraceLog, TraceSink};

    // Output
    pub use crate::colors::{self, Color};
    pub use crate::render::{Canvas, FrameBuffer, Viewport};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::clipper::{
        ClipBox, ConvexPolygon, CyrusBeckClipper, LiangBarskyClipper, LineClipper, Segment,
    };
    pub use crate::math::Point;
    pub use crate::raster::{
        BresenhamCircleRasterizer, BresenhamLineRasterizer, CircleRasterizer, DdaRasterizer,
        LineRasterizer, StepByStepRasterizer,
    };
    pub use crate::render::FrameBuffer;
}
