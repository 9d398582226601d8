//! Events emitted around stroke recording.

use crate::types::PointGroup;

/// Stroke lifecycle events for external hooks.
///
/// Listeners (sync, autosave, export) can react to stroke lifecycle changes
/// without coupling to the log implementation.
#[derive(Debug, Clone)]
pub enum StrokeEvent {
    /// A new stroke has started recording.
    StrokeStarted { color: String },
    /// A finished stroke has been committed to the log.
    StrokeCompleted { group: PointGroup },
    /// A stroke was abandoned before completion.
    StrokeAborted { reason: String },
}
