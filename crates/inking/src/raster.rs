//! Curve flattening into filled-circle stamps.
//!
//! A tapered curve is rendered as a run of overlapping circles along the
//! cubic. The stamp count scales with arc length so neighboring circles
//! overlap at any pen width in range.

use crate::constants::STAMPS_PER_LENGTH_UNIT;
use crate::curve::Curve;
use crate::types::Stamp;

/// Lazy stamp sequence along one curve.
///
/// Finite and restartable: a pure function of the curve, so calling
/// [`stamps`] again yields the identical sequence.
#[derive(Debug, Clone)]
pub struct Stamps {
    curve: Curve,
    max_width: f64,
    steps: usize,
    index: usize,
}

/// Flatten `curve` into circle stamps, capping every radius at `max_width`.
///
/// A zero-length curve yields no stamps; continuity of the stroke is
/// carried by the preceding dot or curve, so an empty run is expected
/// there, not a defect.
pub fn stamps(curve: &Curve, max_width: f64) -> Stamps {
    let steps = curve.length().floor() as usize * STAMPS_PER_LENGTH_UNIT;
    Stamps {
        curve: *curve,
        max_width,
        steps,
        index: 0,
    }
}

impl Iterator for Stamps {
    type Item = Stamp;

    fn next(&mut self) -> Option<Stamp> {
        if self.index >= self.steps {
            return None;
        }
        let t = self.index as f64 / self.steps as f64;
        let position = self.curve.point_at(t);
        // Width blends with t cubed, matching the end-weighted cubic
        // coefficient: growth is biased toward the curve's end.
        let width_delta = self.curve.end_width - self.curve.start_width;
        let radius = (self.curve.start_width + t * t * t * width_delta).min(self.max_width);
        self.index += 1;
        Some(Stamp {
            x: position.x,
            y: position.y,
            radius,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Stamps {}
