//! Shared configuration for Inkpad
//!
//! This crate provides the single source of truth for the pen width band,
//! input decimation distance, and colors shared between the stroke engine
//! and whatever hosts it (widget shell, replay tools, exporters).

use serde::{Deserialize, Serialize};

/// Default minimum pen width in surface units
pub const DEFAULT_MIN_WIDTH: f64 = 0.5;

/// Default maximum pen width in surface units
pub const DEFAULT_MAX_WIDTH: f64 = 2.5;

/// Default decimation distance in surface units
pub const DEFAULT_MIN_DISTANCE: f64 = 5.0;

/// Default pen color
pub const DEFAULT_PEN_COLOR: &str = "#000";

/// Default background color
pub const DEFAULT_BACKGROUND_COLOR: &str = "#fff";

/// Pad configuration for input filtering and stroke appearance
///
/// May change between strokes; a change that lands mid-stroke takes effect
/// wherever the engine next reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PadConfig {
    /// Minimum pen width in surface units
    pub min_width: f64,
    /// Maximum pen width in surface units
    pub max_width: f64,
    /// Samples closer than this to the previous accepted sample are dropped
    pub min_distance: f64,
    /// Dot radius for single-point strokes; band midpoint when unset
    pub dot_size: Option<f64>,
    /// Pen color for new strokes
    pub pen_color: String,
    /// Background color, used by embedders when repainting a cleared surface
    pub background_color: String,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            min_distance: DEFAULT_MIN_DISTANCE,
            dot_size: None,
            pen_color: DEFAULT_PEN_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

impl PadConfig {
    /// Create a config with the given width band and defaults elsewhere
    pub fn new(min_width: f64, max_width: f64) -> Self {
        Self {
            min_width,
            max_width,
            ..Default::default()
        }
    }

    /// Dot radius for single-point strokes
    ///
    /// Resolves to the explicit value when set, otherwise the middle of the
    /// width band.
    pub fn dot_size(&self) -> f64 {
        self.dot_size
            .unwrap_or((self.min_width + self.max_width) / 2.0)
    }
}
