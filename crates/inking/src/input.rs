//! Input event types for the drawing surface.

use serde::{Deserialize, Serialize};

/// Stroke-lifecycle input events.
///
/// Samples arrive already translated into the surface's local coordinate
/// space, in FIFO order within a stroke. The embedding layer maps its
/// pointer events and commands onto this enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PadEvent {
    /// Pointer down: begin a new stroke in the current pen color.
    StrokeStart,
    /// Pointer sample within the active stroke.
    Sample { x: f64, y: f64, time: i64 },
    /// Pointer up: process the final sample, then commit the stroke.
    StrokeEnd { x: f64, y: f64, time: i64 },
    /// Abandon the active stroke without committing it.
    StrokeAbort,
    /// Drop every committed stroke and reset per-stroke state.
    Clear,
    /// Reset per-stroke state without touching committed strokes.
    Reset,
}
