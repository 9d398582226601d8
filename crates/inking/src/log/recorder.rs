//! Stroke recorder building one point group per stroke.

use crate::types::{Point, PointGroup};

use super::events::StrokeEvent;

/// Error type for stroke recording operations.
#[derive(Debug, thiserror::Error)]
pub enum RecorderError {
    #[error("Stroke not started - call start() first")]
    NotStarted,
    #[error("Stroke already started - call finish() or abort() first")]
    AlreadyStarted,
}

/// Builds the point group for the stroke currently being drawn.
///
/// Accepted samples are appended in arrival order; the group is handed over
/// on `finish` and discarded on `abort`. An empty group is still a valid
/// stroke: a pointer-down/up pair whose every sample was decimated commits
/// with no points.
#[derive(Debug, Default)]
pub struct StrokeRecorder {
    /// Group under construction (None if not recording)
    group: Option<PointGroup>,
}

impl StrokeRecorder {
    /// Create a new stroke recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if currently recording a stroke.
    pub fn is_recording(&self) -> bool {
        self.group.is_some()
    }

    /// Start recording a stroke in the given pen color.
    ///
    /// Returns a `StrokeStarted` event that can be forwarded to listeners.
    pub fn start(&mut self, color: impl Into<String>) -> Result<StrokeEvent, RecorderError> {
        if self.group.is_some() {
            return Err(RecorderError::AlreadyStarted);
        }
        let color = color.into();
        self.group = Some(PointGroup::new(color.clone()));
        Ok(StrokeEvent::StrokeStarted { color })
    }

    /// Append an accepted sample to the current group.
    pub fn record_point(&mut self, point: Point) -> Result<(), RecorderError> {
        let group = self.group.as_mut().ok_or(RecorderError::NotStarted)?;
        group.points.push(point);
        Ok(())
    }

    /// Most recently recorded sample of the current group, if any.
    pub fn last_point(&self) -> Option<&Point> {
        self.group.as_ref().and_then(|g| g.last_point())
    }

    /// Pen color of the current group, if recording.
    pub fn color(&self) -> Option<&str> {
        self.group.as_ref().map(|g| g.color.as_str())
    }

    /// Number of samples recorded so far.
    pub fn point_count(&self) -> usize {
        self.group.as_ref().map(|g| g.points.len()).unwrap_or(0)
    }

    /// Finish recording and hand over the completed group.
    pub fn finish(&mut self) -> Result<PointGroup, RecorderError> {
        self.group.take().ok_or(RecorderError::NotStarted)
    }

    /// Abort the current stroke without completing it.
    ///
    /// Returns a `StrokeAborted` event that can be forwarded to listeners.
    pub fn abort(&mut self, reason: String) -> Result<StrokeEvent, RecorderError> {
        self.group.take().ok_or(RecorderError::NotStarted)?;
        Ok(StrokeEvent::StrokeAborted { reason })
    }
}
