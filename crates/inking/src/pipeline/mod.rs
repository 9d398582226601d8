//! Complete inking pipeline
//!
//! This module provides the main stroke pipeline that connects:
//! - Input handling (pad events from the embedding layer)
//! - Curve fitting (rolling-window cubic segments)
//! - Width dynamics (velocity-driven taper)
//! - Curve flattening (circle stamps)
//! - Stroke recording (for export and replay)
//!
//! The pipeline decides where ink goes and how wide; the [`StampSink`]
//! handed to each call decides how the circles reach pixels.
//!
//! [`StampSink`]: crate::sink::StampSink

mod stroke;

use inkpad_config::PadConfig;

use crate::constants::CURVE_WINDOW;
use crate::log::{StrokeLog, StrokeRecorder};
use crate::types::{Point, PointGroup};
use crate::width::WidthEngine;

/// Complete stroke pipeline for one drawing surface.
///
/// This struct manages the full inking workflow:
/// 1. Input comes in via `begin_stroke`, `sample`, `end_stroke` (or
///    `handle_event`)
/// 2. Samples closer than `min_distance` to the previous one are dropped
/// 3. Accepted samples slide through the curve-fit window
/// 4. Each full window yields a tapered curve, flattened into stamps
/// 5. Dot/curve commands go to the sink; accepted samples are recorded
/// 6. Completed strokes are committed to the log
pub struct InkPipeline {
    /// Active configuration, read at each decision point
    pub(crate) config: PadConfig,
    /// Rolling curve-fit window (at most CURVE_WINDOW samples)
    pub(crate) window: Vec<Point>,
    /// Velocity/width state for the active stroke
    pub(crate) widths: WidthEngine,
    /// Recorder for the stroke currently being drawn
    pub(crate) recorder: StrokeRecorder,
    /// Committed strokes of this session
    pub(crate) log: StrokeLog,
    /// Form-empty state: true until a stroke commits, re-armed by reset
    pub(crate) empty: bool,
}

impl InkPipeline {
    /// Create a new pipeline with the given configuration.
    pub fn new(config: PadConfig) -> Self {
        let widths = WidthEngine::new(config.min_width, config.max_width);
        Self {
            config,
            window: Vec::with_capacity(CURVE_WINDOW),
            widths,
            recorder: StrokeRecorder::new(),
            log: StrokeLog::new(),
            empty: true,
        }
    }

    /// Create a pipeline with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(PadConfig::default())
    }

    /// Get the active configuration.
    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// Intended between strokes; a change landing mid-stroke takes effect
    /// wherever the pipeline next reads the config.
    pub fn set_config(&mut self, config: PadConfig) {
        self.widths.set_band(config.min_width, config.max_width);
        self.config = config;
    }

    /// Set the pen color for subsequent strokes.
    pub fn set_pen_color(&mut self, color: impl Into<String>) {
        self.config.pen_color = color.into();
    }

    /// Get the current pen color.
    pub fn pen_color(&self) -> &str {
        &self.config.pen_color
    }

    /// Get reference to the stroke log.
    pub fn log(&self) -> &StrokeLog {
        &self.log
    }

    /// All committed groups in drawing order (the export boundary).
    pub fn groups(&self) -> Vec<PointGroup> {
        self.log.groups()
    }

    /// Check if a stroke is currently in progress.
    pub fn is_stroking(&self) -> bool {
        self.recorder.is_recording()
    }

    /// Form-empty state: cleared when a stroke commits, re-armed by
    /// `reset` and `clear`.
    ///
    /// Session data emptiness is separately readable via
    /// [`StrokeLog::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PadEvent;
    use crate::sink::{NullSink, RecordingSink, RenderCommand};

    fn config_with_min_distance(min_distance: f64) -> PadConfig {
        PadConfig {
            min_distance,
            ..Default::default()
        }
    }

    #[test]
    fn test_pipeline_stroke_lifecycle() {
        let mut pipeline = InkPipeline::with_defaults();
        let mut sink = NullSink;

        pipeline.begin_stroke();
        assert!(pipeline.is_stroking());

        pipeline.sample(0.0, 0.0, 0, &mut sink);
        pipeline.end_stroke(10.0, 0.0, 10, &mut sink);

        assert!(!pipeline.is_stroking());
        assert_eq!(pipeline.log().group_count(), 1);
        assert!(!pipeline.is_empty());
    }

    #[test]
    fn test_straight_stroke_emits_dot_then_two_curves() {
        let mut pipeline = InkPipeline::new(config_with_min_distance(0.0));
        let mut sink = RecordingSink::new();

        pipeline.begin_stroke();
        pipeline.sample(0.0, 0.0, 0, &mut sink);
        pipeline.sample(10.0, 0.0, 10, &mut sink);
        pipeline.sample(20.0, 0.0, 20, &mut sink);
        pipeline.sample(30.0, 0.0, 30, &mut sink);

        assert_eq!(sink.dot_count(), 1);
        assert_eq!(sink.curve_count(), 2);

        match &sink.commands[0] {
            RenderCommand::Dot { stamp, .. } => {
                assert_eq!(stamp.x, 0.0);
                assert_eq!(stamp.y, 0.0);
            }
            other => panic!("Expected leading dot, got {other:?}"),
        }

        // Horizontal input stays a horizontal band with widths strictly
        // inside the configured band.
        for command in &sink.commands[1..] {
            let RenderCommand::Curve { stamps, .. } = command else {
                panic!("Expected curve command, got {command:?}");
            };
            assert!(!stamps.is_empty());
            for stamp in stamps {
                assert_eq!(stamp.y, 0.0);
                assert!(stamp.radius > 0.5 && stamp.radius < 2.5);
            }
        }
    }

    #[test]
    fn test_single_point_stroke_renders_one_dot() {
        let mut pipeline = InkPipeline::with_defaults();
        let mut sink = RecordingSink::new();

        pipeline.begin_stroke();
        pipeline.end_stroke(5.0, 5.0, 0, &mut sink);

        assert_eq!(sink.dot_count(), 1);
        assert_eq!(sink.curve_count(), 0);
        match &sink.commands[0] {
            RenderCommand::Dot { stamp, .. } => {
                assert_eq!(stamp.x, 5.0);
                assert_eq!(stamp.y, 5.0);
                assert!((stamp.radius - 1.5).abs() < 1e-12);
            }
            other => panic!("Expected dot command, got {other:?}"),
        }

        let groups = pipeline.groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].points.len(), 1);
    }

    #[test]
    fn test_decimation_drops_close_samples() {
        let mut pipeline = InkPipeline::new(config_with_min_distance(5.0));
        let mut sink = RecordingSink::new();

        pipeline.begin_stroke();
        pipeline.sample(0.0, 0.0, 0, &mut sink);
        // Distance ~1.41 <= 5: dropped with no command and no state change.
        pipeline.sample(1.0, 1.0, 1, &mut sink);

        assert_eq!(sink.dot_count(), 1);
        assert_eq!(sink.curve_count(), 0);
        assert_eq!(
            pipeline.recorder.last_point(),
            Some(&Point::new(0.0, 0.0, 0))
        );

        pipeline.end_stroke(1.0, 1.0, 1, &mut sink);
        assert_eq!(sink.dot_count(), 1);
        assert_eq!(sink.curve_count(), 0);
        assert_eq!(pipeline.groups()[0].points.len(), 1);
    }

    #[test]
    fn test_bootstrap_three_points_emit_one_curve() {
        let mut pipeline = InkPipeline::new(config_with_min_distance(0.0));
        let mut sink = RecordingSink::new();

        pipeline.begin_stroke();
        pipeline.sample(0.0, 0.0, 0, &mut sink);
        pipeline.sample(10.0, 0.0, 10, &mut sink);
        pipeline.sample(20.0, 0.0, 20, &mut sink);

        assert_eq!(sink.dot_count(), 1);
        assert_eq!(sink.curve_count(), 1);
    }

    #[test]
    fn test_cancel_keeps_committed_strokes() {
        let mut pipeline = InkPipeline::with_defaults();
        let mut sink = NullSink;

        pipeline.begin_stroke();
        pipeline.end_stroke(0.0, 0.0, 0, &mut sink);
        assert_eq!(pipeline.log().group_count(), 1);

        pipeline.begin_stroke();
        pipeline.sample(100.0, 100.0, 100, &mut sink);
        pipeline.cancel_stroke();

        assert!(!pipeline.is_stroking());
        assert_eq!(pipeline.log().group_count(), 1);
    }

    #[test]
    fn test_clear_drops_committed_strokes() {
        let mut pipeline = InkPipeline::with_defaults();
        let mut sink = NullSink;

        pipeline.begin_stroke();
        pipeline.end_stroke(0.0, 0.0, 0, &mut sink);
        assert!(!pipeline.log().is_empty());

        pipeline.clear();
        assert!(pipeline.log().is_empty());
        assert!(pipeline.is_empty());
        assert!(!pipeline.is_stroking());
    }

    #[test]
    fn test_restart_commits_in_flight_stroke() {
        let mut pipeline = InkPipeline::with_defaults();
        let mut sink = NullSink;

        pipeline.begin_stroke();
        pipeline.sample(0.0, 0.0, 0, &mut sink);
        // Stray second pointer-down: what was drawn so far is kept.
        pipeline.begin_stroke();

        assert!(pipeline.is_stroking());
        assert_eq!(pipeline.log().group_count(), 1);
    }

    #[test]
    fn test_strokes_keep_their_own_color() {
        let mut pipeline = InkPipeline::new(config_with_min_distance(0.0));
        let mut sink = RecordingSink::new();

        pipeline.begin_stroke();
        pipeline.end_stroke(0.0, 0.0, 0, &mut sink);

        pipeline.set_pen_color("#f00");
        pipeline.begin_stroke();
        pipeline.end_stroke(50.0, 0.0, 50, &mut sink);

        let groups = pipeline.groups();
        assert_eq!(groups[0].color, "#000");
        assert_eq!(groups[1].color, "#f00");
        match &sink.commands[1] {
            RenderCommand::Dot { color, .. } => assert_eq!(color, "#f00"),
            other => panic!("Expected dot command, got {other:?}"),
        }
    }

    #[test]
    fn test_handle_event_dispatch() {
        let mut pipeline = InkPipeline::new(config_with_min_distance(0.0));
        let mut sink = RecordingSink::new();

        let events = [
            PadEvent::StrokeStart,
            PadEvent::Sample {
                x: 0.0,
                y: 0.0,
                time: 0,
            },
            PadEvent::Sample {
                x: 10.0,
                y: 0.0,
                time: 10,
            },
            PadEvent::Sample {
                x: 20.0,
                y: 0.0,
                time: 20,
            },
            PadEvent::StrokeEnd {
                x: 30.0,
                y: 0.0,
                time: 30,
            },
        ];
        for event in events {
            pipeline.handle_event(event, &mut sink);
        }

        assert_eq!(sink.dot_count(), 1);
        assert_eq!(sink.curve_count(), 2);
        assert_eq!(pipeline.log().group_count(), 1);
        assert_eq!(pipeline.groups()[0].points.len(), 4);

        pipeline.handle_event(PadEvent::Clear, &mut sink);
        assert!(pipeline.log().is_empty());
    }

    #[test]
    fn test_sample_without_active_stroke_is_ignored() {
        let mut pipeline = InkPipeline::with_defaults();
        let mut sink = RecordingSink::new();

        pipeline.sample(0.0, 0.0, 0, &mut sink);
        pipeline.end_stroke(10.0, 0.0, 10, &mut sink);

        assert!(sink.commands.is_empty());
        assert_eq!(pipeline.log().group_count(), 0);
    }

    #[test]
    fn test_reset_rearms_empty_flag_only() {
        let mut pipeline = InkPipeline::with_defaults();
        let mut sink = NullSink;

        pipeline.begin_stroke();
        pipeline.end_stroke(0.0, 0.0, 0, &mut sink);
        assert!(!pipeline.is_empty());

        pipeline.reset();
        assert!(pipeline.is_empty());
        // Committed data survives a reset.
        assert_eq!(pipeline.log().group_count(), 1);
    }
}
