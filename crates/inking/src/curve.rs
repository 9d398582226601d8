//! Cubic curve fitting over a rolling sample window.
//!
//! Four consecutive samples produce one cubic Bezier segment that starts at
//! the second sample and ends at the third; the outer two only steer the
//! tangents. Control points come from a chord-length-weighted midpoint
//! construction, which keeps neighboring segments tangent-continuous
//! (a Catmull-Rom-style fit).

use glam::DVec2;

use crate::constants::LENGTH_SAMPLE_STEPS;
use crate::types::{Point, Width};

/// One cubic Bezier segment of a stroke with a linearly-interpolatable
/// width pair.
///
/// Control points are plain positions; only the endpoints are timestamped
/// samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve {
    pub start: Point,
    pub control1: DVec2,
    pub control2: DVec2,
    pub end: Point,
    pub start_width: f64,
    pub end_width: f64,
}

/// Evaluate one cubic Bezier coordinate at parameter `t`.
fn cubic_blend(t: f64, start: f64, c1: f64, c2: f64, end: f64) -> f64 {
    let u = 1.0 - t;
    start * u * u * u + 3.0 * c1 * u * u * t + 3.0 * c2 * u * t * t + end * t * t * t
}

/// Control points for the middle sample of a triple.
///
/// Midpoints of the two chords are blended by relative chord length and the
/// blend is translated onto `s2`, so the curve through `s2` stays tangent to
/// the chord direction. A triple whose samples all coincide has no chord to
/// weight; the midpoints are returned untranslated, which keeps the controls
/// collinear with the degenerate segment instead of going NaN.
pub fn control_points(s1: &Point, s2: &Point, s3: &Point) -> (DVec2, DVec2) {
    let m1 = (s1.position() + s2.position()) / 2.0;
    let m2 = (s2.position() + s3.position()) / 2.0;
    let l1 = s1.distance_to(s2);
    let l2 = s2.distance_to(s3);
    if l1 + l2 == 0.0 {
        return (m1, m2);
    }
    let k = l2 / (l1 + l2);
    let cm = m2 + (m1 - m2) * k;
    let t = s2.position() - cm;
    (m1 + t, m2 + t)
}

impl Curve {
    /// Fit a curve to a full sample window.
    ///
    /// The segment runs from `window[1]` to `window[2]`. Its trailing
    /// control comes from the leading triple and its leading control from
    /// the trailing triple, so consecutive windows share tangents.
    pub fn from_window(window: &[Point; 4], width: Width) -> Self {
        let (_, control2) = control_points(&window[0], &window[1], &window[2]);
        let (control1, _) = control_points(&window[1], &window[2], &window[3]);
        Self {
            start: window[1],
            control1,
            control2,
            end: window[2],
            start_width: width.start,
            end_width: width.end,
        }
    }

    /// Position on the curve at parameter `t` in `[0, 1]`.
    pub fn point_at(&self, t: f64) -> DVec2 {
        DVec2::new(
            cubic_blend(t, self.start.x, self.control1.x, self.control2.x, self.end.x),
            cubic_blend(t, self.start.y, self.control1.y, self.control2.y, self.end.y),
        )
    }

    /// Polyline-approximated arc length.
    ///
    /// Samples the cubic at 10 equally spaced parameters and sums the
    /// distances between consecutive samples. Fixed resolution, so lengths
    /// are reproducible bit-for-bit.
    pub fn length(&self) -> f64 {
        let mut length = 0.0;
        let mut prev = self.point_at(0.0);
        for i in 1..=LENGTH_SAMPLE_STEPS {
            let t = f64::from(i) / f64::from(LENGTH_SAMPLE_STEPS);
            let current = self.point_at(t);
            length += prev.distance(current);
            prev = current;
        }
        length
    }
}
