//! Render sink boundary.
//!
//! The engine decides where ink goes and how wide; something else owns the
//! pixels. A sink receives dot and curve commands and rasterizes each stamp
//! as a filled circle however it likes (vector fill, bitmap, GPU instancing).

use serde::{Deserialize, Serialize};

use crate::types::Stamp;

/// Receiver for ink render commands.
pub trait StampSink {
    /// Draw a single filled circle (the opening dot of a stroke).
    fn draw_dot(&mut self, color: &str, stamp: Stamp);

    /// Draw one curve segment as an overlapping run of filled circles.
    fn draw_curve(&mut self, color: &str, stamps: &[Stamp]);
}

/// A render command in serializable form.
///
/// The command stream is enough to reproduce a drawing on any sink, which
/// is what replay and export tooling consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    Dot { color: String, stamp: Stamp },
    Curve { color: String, stamps: Vec<Stamp> },
}

/// Sink that records commands instead of drawing them.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub commands: Vec<RenderCommand>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of dot commands recorded.
    pub fn dot_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::Dot { .. }))
            .count()
    }

    /// Number of curve commands recorded.
    pub fn curve_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::Curve { .. }))
            .count()
    }
}

impl StampSink for RecordingSink {
    fn draw_dot(&mut self, color: &str, stamp: Stamp) {
        self.commands.push(RenderCommand::Dot {
            color: color.to_string(),
            stamp,
        });
    }

    fn draw_curve(&mut self, color: &str, stamps: &[Stamp]) {
        self.commands.push(RenderCommand::Curve {
            color: color.to_string(),
            stamps: stamps.to_vec(),
        });
    }
}

/// Sink that discards every command.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl StampSink for NullSink {
    fn draw_dot(&mut self, _color: &str, _stamp: Stamp) {}

    fn draw_curve(&mut self, _color: &str, _stamps: &[Stamp]) {}
}
