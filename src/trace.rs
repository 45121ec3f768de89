//! Step-by-step trace recording.
//!
//! Every algorithm accepts an optional [`TraceSink`]. When one is supplied,
//! the algorithm appends a human-readable snapshot of its internal state at
//! each step: derived parameters, accumulated error or decision variables,
//! and the pixel (or clip decision) produced. The trace is purely diagnostic:
//! the algorithms never read it back, and pixels/segments are identical with
//! or without it.
//!
//! ```text
//! [0] start (0,0) end (4,2), dx=4, dy=2
//! [1] iterate over x, slope m = 0.50
//! [2] x=0, y=0.00 -> 0, plot (0,0)
//! ...
//! ```

use std::fmt;

/// One recorded state snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceEntry {
    /// Position of this entry within its invocation, starting at 0.
    pub step: usize,
    pub message: String,
    /// Pixel emitted at this step, if any.
    pub pixel: Option<(i32, i32)>,
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.step, self.message)
    }
}

/// Append-only receiver for trace entries.
pub trait TraceSink {
    fn record(&mut self, entry: TraceEntry);
}

impl TraceSink for Vec<TraceEntry> {
    fn record(&mut self, entry: TraceEntry) {
        self.push(entry);
    }
}

/// The trace of a single algorithm invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceLog {
    entries: Vec<TraceEntry>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Formatted entries, one per line.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|e| e.to_string())
    }

    /// Pixels in the order they were reported.
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.entries.iter().filter_map(|e| e.pixel)
    }
}

impl TraceSink for TraceLog {
    fn record(&mut self, entry: TraceEntry) {
        self.entries.push(entry);
    }
}

impl fmt::Display for TraceLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// Per-invocation front end for an optional sink.
///
/// Messages are built by closures so that nothing is formatted when tracing
/// is off.
pub(crate) struct Tracer<'a> {
    sink: Option<&'a mut dyn TraceSink>,
    step: usize,
}

impl<'a> Tracer<'a> {
    pub(crate) fn new(sink: Option<&'a mut dyn TraceSink>) -> Self {
        Self { sink, step: 0 }
    }

    #[inline]
    pub(crate) fn note(&mut self, message: impl FnOnce() -> String) {
        self.push(None, message);
    }

    #[inline]
    pub(crate) fn plot(&mut self, x: i32, y: i32, message: impl FnOnce() -> String) {
        self.push(Some((x, y)), message);
    }

    #[inline]
    fn push(&mut self, pixel: Option<(i32, i32)>, message: impl FnOnce() -> String) {
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.record(TraceEntry {
                step: self.step,
                message: message(),
                pixel,
            });
            self.step += 1;
        }
    }
}
