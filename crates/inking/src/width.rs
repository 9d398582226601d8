//! Velocity-driven pen width dynamics.
//!
//! Pen width follows stroke speed: fast motion thins the line and slow
//! motion thickens it, bounded by the configured band. Raw velocity is
//! exponentially smoothed so one jittery sample cannot kink the taper.

use crate::constants::VELOCITY_FILTER_WEIGHT;
use crate::types::{Point, Width};

/// Running velocity/width state for one stroke.
///
/// The engine hands out a `Width` pair per curve segment: the previous
/// segment's end width becomes the new segment's start width, so the taper
/// is continuous across segments.
#[derive(Debug, Clone)]
pub struct WidthEngine {
    min_width: f64,
    max_width: f64,
    /// Smoothed velocity of the previous segment
    last_velocity: f64,
    /// End width of the previous segment
    last_width: f64,
}

impl WidthEngine {
    /// Create an engine for the given width band.
    pub fn new(min_width: f64, max_width: f64) -> Self {
        Self {
            min_width,
            max_width,
            last_velocity: 0.0,
            last_width: (min_width + max_width) / 2.0,
        }
    }

    /// Reset per-stroke state. Called at stroke start.
    pub fn begin_stroke(&mut self) {
        self.last_velocity = 0.0;
        self.last_width = (self.min_width + self.max_width) / 2.0;
    }

    /// Update the width band. Takes effect from the next segment.
    pub fn set_band(&mut self, min_width: f64, max_width: f64) {
        self.min_width = min_width;
        self.max_width = max_width;
    }

    /// Width endpoints for the segment from `start` to `end`.
    pub fn widths_between(&mut self, start: &Point, end: &Point) -> Width {
        let velocity = VELOCITY_FILTER_WEIGHT * end.velocity_from(start)
            + (1.0 - VELOCITY_FILTER_WEIGHT) * self.last_velocity;
        let end_width = self.stroke_width(velocity);
        let widths = Width {
            start: self.last_width,
            end: end_width,
        };
        self.last_velocity = velocity;
        self.last_width = end_width;
        widths
    }

    /// Map a smoothed velocity to a pen width inside the band.
    ///
    /// Inversely proportional to velocity plus one: width is `max_width`
    /// at rest and shrinks toward `min_width` as the pen speeds up.
    fn stroke_width(&self, velocity: f64) -> f64 {
        (self.max_width / (velocity + 1.0)).clamp(self.min_width, self.max_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_segment_starts_at_band_midpoint() {
        let mut engine = WidthEngine::new(0.5, 2.5);
        let widths = engine.widths_between(&Point::new(0.0, 0.0, 0), &Point::new(10.0, 0.0, 10));
        assert!((widths.start - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_width_at_rest_is_max() {
        let mut engine = WidthEngine::new(0.5, 2.5);
        // Equal timestamps define velocity 0.
        let widths = engine.widths_between(&Point::new(0.0, 0.0, 0), &Point::new(0.0, 0.0, 0));
        assert!((widths.end - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_width_always_clamped_to_band() {
        let mut engine = WidthEngine::new(0.5, 2.5);
        // Very fast segment: raw width would fall below the band.
        let widths = engine.widths_between(&Point::new(0.0, 0.0, 0), &Point::new(1000.0, 0.0, 1));
        assert!(widths.end >= 0.5 && widths.end <= 2.5);
        assert!((widths.end - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_velocity_smoothing_carries_across_segments() {
        let mut engine = WidthEngine::new(0.5, 2.5);
        let a = Point::new(0.0, 0.0, 0);
        let b = Point::new(10.0, 0.0, 10);
        let c = Point::new(20.0, 0.0, 20);

        // First segment: v = 1, smoothed = 0.7 * 1 + 0.3 * 0 = 0.7
        let first = engine.widths_between(&a, &b);
        assert!((first.end - 2.5 / 1.7).abs() < 1e-12);

        // Second segment: smoothed = 0.7 * 1 + 0.3 * 0.7 = 0.91
        let second = engine.widths_between(&b, &c);
        assert!((second.start - first.end).abs() < 1e-12);
        assert!((second.end - 2.5 / 1.91).abs() < 1e-12);
    }

    #[test]
    fn test_begin_stroke_resets_state() {
        let mut engine = WidthEngine::new(0.5, 2.5);
        engine.widths_between(&Point::new(0.0, 0.0, 0), &Point::new(100.0, 0.0, 1));
        engine.begin_stroke();
        let widths = engine.widths_between(&Point::new(0.0, 0.0, 0), &Point::new(10.0, 0.0, 10));
        assert!((widths.start - 1.5).abs() < 1e-12);
        assert!((widths.end - 2.5 / 1.7).abs() < 1e-12);
    }
}
