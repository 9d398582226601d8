//! Core data types for the inking system

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// An immutable timestamped 2D input sample.
///
/// Created once per pointer sample and never mutated. Two points are equal
/// iff position and timestamp all match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X in surface-local units
    pub x: f64,
    /// Y in surface-local units
    pub y: f64,
    /// Monotonic timestamp in milliseconds
    pub time: i64,
}

impl Point {
    /// Create a new sample.
    pub fn new(x: f64, y: f64, time: i64) -> Self {
        Self { x, y, time }
    }

    /// Position as a glam vector for geometry math.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Euclidean distance to another sample.
    pub fn distance_to(&self, other: &Point) -> f64 {
        self.position().distance(other.position())
    }

    /// Average speed from `start` to this sample, in surface units per
    /// millisecond.
    ///
    /// Two samples with the same timestamp have velocity 0; this is a
    /// defined result, not an error.
    pub fn velocity_from(&self, start: &Point) -> f64 {
        if self.time != start.time {
            self.distance_to(start) / (self.time - start.time) as f64
        } else {
            0.0
        }
    }
}

/// Pen width endpoints for one curve segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Width {
    pub start: f64,
    pub end: f64,
}

/// One continuous stroke: pen color plus accepted samples in arrival order.
///
/// Points are only ever appended; a drawing session is an ordered sequence
/// of groups (insertion order = drawing order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGroup {
    pub color: String,
    pub points: Vec<Point>,
}

impl PointGroup {
    /// Create an empty group for a stroke in the given color.
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            points: Vec::new(),
        }
    }

    /// Most recently recorded sample, if any.
    pub fn last_point(&self) -> Option<&Point> {
        self.points.last()
    }
}

/// A single filled-circle stamp.
///
/// Field layout is flat and bytemuck-compatible so stamp runs can be handed
/// to a GPU renderer without repacking.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable,
)]
#[repr(C)]
pub struct Stamp {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}
