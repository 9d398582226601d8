/// Exponential smoothing weight for stroke velocity (0..1, higher tracks
/// the raw velocity more closely).
pub const VELOCITY_FILTER_WEIGHT: f64 = 0.7;

/// Segment count for the fixed-resolution arc-length approximation.
pub const LENGTH_SAMPLE_STEPS: u32 = 10;

/// Stamps per unit of arc length when flattening a curve.
pub const STAMPS_PER_LENGTH_UNIT: usize = 2;

/// Capacity of the rolling curve-fit window.
pub const CURVE_WINDOW: usize = 4;
