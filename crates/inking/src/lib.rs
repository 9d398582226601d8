//! Inkpad stroke engine - smoothing and variable-width ink pipeline
//!
//! This crate turns raw pointer samples into smooth, tapered ink:
//! - [`types`] - points, widths, point groups, and circle stamps
//! - [`curve`] - window-based cubic curve fitting
//! - [`width`] - velocity-driven pen width dynamics
//! - [`raster`] - curve flattening into circle stamps
//! - [`sink`] - render sink boundary
//! - [`log`] - stroke recording and session storage
//! - [`input`] - stroke lifecycle input events
//! - [`pipeline`] - the complete inking pipeline

pub mod constants;
pub mod curve;
pub mod input;
pub mod log;
pub mod pipeline;
pub mod raster;
pub mod sink;
pub mod types;
pub mod width;

pub use constants::*;
pub use curve::*;
pub use input::*;
pub use log::*;
pub use pipeline::*;
pub use raster::*;
pub use sink::*;
pub use types::*;
pub use width::*;
