//! Constants for ParcelSort Core
//!
//! Centralized classification thresholds. The values are fixed for the
//! lifetime of the process and shared read-only by every caller.
//!
//! ## Units
//!
//! Thresholds carry no physical unit. They are expressed in whatever
//! length and mass units the caller measures in:
//! - **Length-units** for single dimensions
//! - **Cubic length-units** for volume
//! - **Mass-units** for mass

/// Bulky and heavy thresholds used by the classifier.
pub mod thresholds;

pub use thresholds::{
    DIMENSION_THRESHOLD, MASS_THRESHOLD, VOLUME_THRESHOLD, VOLUME_THRESHOLD_WHOLE,
};
