//! Stroke handling for the inking pipeline

use tracing::debug;

use crate::constants::CURVE_WINDOW;
use crate::curve::Curve;
use crate::input::PadEvent;
use crate::raster;
use crate::sink::StampSink;
use crate::types::{Point, Stamp};

use super::InkPipeline;

impl InkPipeline {
    /// Begin a stroke with the current pen color.
    ///
    /// A stray second pointer-down commits the in-flight stroke first, so
    /// a missed pointer-up never loses drawn ink.
    pub fn begin_stroke(&mut self) {
        if self.recorder.is_recording() {
            debug!("begin_stroke: stroke already active, committing it first");
            self.commit_stroke();
        }
        if let Ok(event) = self.recorder.start(self.config.pen_color.clone()) {
            debug!("begin_stroke: {:?}", event);
        }
        self.reset();
    }

    /// Feed one pointer sample to the active stroke.
    ///
    /// The first accepted sample of a stroke renders as a dot; later ones
    /// slide through the curve-fit window and render as tapered curves once
    /// the window fills. Samples within `min_distance` of the previous
    /// accepted sample are dropped without any command or state change.
    pub fn sample(&mut self, x: f64, y: f64, time: i64, sink: &mut dyn StampSink) {
        if !self.recorder.is_recording() {
            debug!("sample: no active stroke, ignoring");
            return;
        }
        let point = Point::new(x, y, time);

        let first = match self.recorder.last_point() {
            Some(last) if point.distance_to(last) <= self.config.min_distance => {
                debug!(
                    "sample: ({:.1}, {:.1}) within min_distance of previous point, dropped",
                    point.x, point.y
                );
                return;
            }
            Some(_) => false,
            None => true,
        };

        let curve = self.push_window(point);
        let color = self.recorder.color().unwrap_or_default().to_string();
        if first {
            sink.draw_dot(
                &color,
                Stamp {
                    x: point.x,
                    y: point.y,
                    radius: self.config.dot_size(),
                },
            );
        } else if let Some(curve) = curve {
            let stamps: Vec<Stamp> = raster::stamps(&curve, self.config.max_width).collect();
            debug!(
                "sample: curve from ({:.1}, {:.1}) to ({:.1}, {:.1}), {} stamps",
                curve.start.x,
                curve.start.y,
                curve.end.x,
                curve.end.y,
                stamps.len()
            );
            sink.draw_curve(&color, &stamps);
        }
        let _ = self.recorder.record_point(point);
    }

    /// Process the final sample, then commit the stroke.
    pub fn end_stroke(&mut self, x: f64, y: f64, time: i64, sink: &mut dyn StampSink) {
        if !self.recorder.is_recording() {
            debug!("end_stroke: no active stroke, ignoring");
            return;
        }
        self.sample(x, y, time, sink);
        self.commit_stroke();
    }

    /// Abandon the active stroke without committing it.
    ///
    /// Previously committed strokes are untouched.
    pub fn cancel_stroke(&mut self) {
        match self.recorder.abort("Cancelled".to_string()) {
            Ok(event) => debug!("cancel_stroke: {:?}", event),
            Err(_) => debug!("cancel_stroke: no active stroke, ignoring"),
        }
        self.reset();
    }

    /// Clear per-stroke state without touching committed strokes.
    ///
    /// The pad reads as empty again until the next stroke commits.
    pub fn reset(&mut self) {
        self.window.clear();
        self.widths.begin_stroke();
        self.empty = true;
    }

    /// Drop every committed stroke and reset.
    ///
    /// Repainting the cleared surface is the embedder's concern.
    pub fn clear(&mut self) {
        if self.recorder.is_recording() {
            let _ = self.recorder.abort("Cleared".to_string());
        }
        self.log.clear();
        self.reset();
    }

    /// Dispatch one input event to the matching stroke operation.
    pub fn handle_event(&mut self, event: PadEvent, sink: &mut dyn StampSink) {
        match event {
            PadEvent::StrokeStart => self.begin_stroke(),
            PadEvent::Sample { x, y, time } => self.sample(x, y, time, sink),
            PadEvent::StrokeEnd { x, y, time } => self.end_stroke(x, y, time, sink),
            PadEvent::StrokeAbort => self.cancel_stroke(),
            PadEvent::Clear => self.clear(),
            PadEvent::Reset => self.reset(),
        }
    }

    /// Commit the in-flight group to the log.
    pub(crate) fn commit_stroke(&mut self) {
        if let Ok(group) = self.recorder.finish() {
            debug!("commit_stroke: {} points", group.points.len());
            self.log.append(group);
            self.empty = false;
        }
    }

    /// Slide the sample into the rolling window, fitting a curve once the
    /// window is full.
    ///
    /// The third accepted sample duplicates the first to the window front
    /// so the opening segment can be fitted; after every fit the window
    /// slides left by one.
    fn push_window(&mut self, point: Point) -> Option<Curve> {
        self.window.push(point);
        if self.window.len() < 3 {
            return None;
        }
        if self.window.len() == 3 {
            let first = self.window[0];
            self.window.insert(0, first);
        }
        debug_assert_eq!(self.window.len(), CURVE_WINDOW);

        // Widths run between the segment's endpoints, window[1] -> window[2].
        let width = self
            .widths
            .widths_between(&self.window[1], &self.window[2]);
        let window = [self.window[0], self.window[1], self.window[2], self.window[3]];
        let curve = Curve::from_window(&window, width);
        self.window.remove(0);
        Some(curve)
    }
}
