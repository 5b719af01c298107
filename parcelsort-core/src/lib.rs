//! Core classification engine for ParcelSort
//!
//! Sorts a parcel into one of three handling tiers (STANDARD, SPECIAL,
//! REJECTED) from its three linear dimensions and its mass.
//! Designed to sit inside a sorting robot or conveyor controller.
//!
//! Key constraints:
//! - Pure and deterministic: no state, no I/O
//! - No heap allocation
//! - Every measurement validated before any decision is made
//!
//! ```no_run
//! use parcelsort_core::{sort, ClassificationError, Label};
//!
//! // Classify a scanned parcel
//! match sort(100, 100, 99, 19.9) {
//!     Ok(Label::Standard) => {}, // Regular belt
//!     Ok(Label::Special) => {},  // Manual handling lane
//!     Ok(Label::Rejected) => {}, // Refuse at intake
//!     Err(ClassificationError::TypeMismatch { .. }) => {}, // Upstream integration bug
//!     Err(ClassificationError::InvalidRange { .. }) => {}, // Re-measure
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod classifier;
pub mod constants;
pub mod errors;
pub mod measurement;
pub mod validators;
pub mod volume;

// Public API
pub use classifier::{sort, sort_str, Label, Parcel, ParseLabelError, Predicates};
pub use errors::{ClassificationError, ClassificationResult, ErrorKind};
pub use measurement::{Field, Measurement, Quantity};
pub use validators::validate;
pub use volume::volume_exceeds_threshold;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
