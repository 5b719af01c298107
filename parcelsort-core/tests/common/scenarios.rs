//! Pre-built parcel scenarios
//!
//! Covers normal parcels, exact threshold boundaries and the shapes a
//! conveyor actually sees (flat boxes, long tubes, dense small items).

use parcelsort_core::{Label, Measurement};

/// A parcel with its expected handling tier
pub struct ParcelCase {
    pub name: &'static str,
    pub width: Measurement,
    pub height: Measurement,
    pub length: Measurement,
    pub mass: Measurement,
    pub expected: Label,
}

impl ParcelCase {
    pub fn new(
        name: &'static str,
        dims: (impl Into<Measurement>, impl Into<Measurement>, impl Into<Measurement>),
        mass: impl Into<Measurement>,
        expected: Label,
    ) -> Self {
        Self {
            name,
            width: dims.0.into(),
            height: dims.1.into(),
            length: dims.2.into(),
            mass: mass.into(),
            expected,
        }
    }
}

/// Reference scenarios with known outcomes
pub fn reference_cases() -> Vec<ParcelCase> {
    vec![
        ParcelCase::new("small_light", (100, 100, 99), 19.9, Label::Standard),
        ParcelCase::new("volume_boundary", (100, 100, 100), 0, Label::Special),
        ParcelCase::new("dimension_boundary", (150, 1, 1), 0, Label::Special),
        ParcelCase::new("mass_boundary", (1, 1, 1), 20, Label::Special),
        ParcelCase::new("bulky_and_heavy", (150, 1, 1), 20, Label::Rejected),
    ]
}

/// Shapes seen on a real line
pub fn conveyor_cases() -> Vec<ParcelCase> {
    vec![
        ParcelCase::new("envelope", (32.4, 22.9, 0.5), 0.1, Label::Standard),
        ParcelCase::new("shoe_box", (33.0, 19.0, 12.0), 1.2, Label::Standard),
        ParcelCase::new("flat_panel", (149.5, 90.0, 80.0), 15.0, Label::Special),
        ParcelCase::new("poster_tube", (8, 8, 160), 0.8, Label::Special),
        ParcelCase::new("dumbbell", (30, 15, 15), 25.0, Label::Special),
        ParcelCase::new("pallet", (120, 100, 100), 300, Label::Rejected),
        ParcelCase::new("sofa", (220.0, 90.0, 95.0), 85.5, Label::Rejected),
    ]
}
