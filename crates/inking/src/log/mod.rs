//! Stroke recording and session storage.
//!
//! This module provides:
//! - [`StrokeRecorder`] - builds one [`PointGroup`](crate::types::PointGroup)
//!   per stroke
//! - [`StrokeLog`] - ordered storage for committed strokes with event hooks
//! - [`StrokeEvent`] - lifecycle events for external listeners
//!
//! The log is what export encoders read: groups come back in drawing order,
//! so replaying them through the pipeline reproduces the session.

mod events;
mod recorder;
mod storage;

pub use events::StrokeEvent;
pub use recorder::{RecorderError, StrokeRecorder};
pub use storage::StrokeLog;
