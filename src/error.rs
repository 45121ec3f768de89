//! Error type shared by the rasterizers and clippers.

use std::fmt;

/// Rejection of malformed input. Raised before any pixel or trace entry is
/// emitted, so a failed call never leaves partial output behind.
///
/// A clip segment that lies outside its region is *not* an error; see
/// [`ClipResult::Rejected`](crate::clipper::ClipResult::Rejected).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Non-finite or out-of-range coordinates, or a negative radius.
    InvalidGeometry(String),
    /// A clip region that breaks its own invariants (inverted box, polygon
    /// with fewer than three vertices, or a region of the wrong kind).
    InvalidRegion(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidGeometry(msg) => write!(f, "invalid geometry: {}", msg),
            GeometryError::InvalidRegion(msg) => write!(f, "invalid region: {}", msg),
        }
    }
}

impl std::error::Error for GeometryError {}
