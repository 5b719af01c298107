//! Parcel Classifier
//!
//! ## Decision
//!
//! A parcel is **bulky** when its volume reaches
//! [`VOLUME_THRESHOLD`](crate::constants::VOLUME_THRESHOLD) or any
//! single dimension reaches [`DIMENSION_THRESHOLD`]. It is **heavy** when its
//! mass reaches [`MASS_THRESHOLD`]. The predicate pair picks the label:
//!
//! ```text
//! bulky  heavy   label
//! true   true    REJECTED
//! true   false   SPECIAL
//! false  true    SPECIAL
//! false  false   STANDARD
//! ```
//!
//! All four measurements are validated before either predicate is
//! evaluated, so a negative mass is reported even for a parcel that is
//! obviously bulky.
//!
//! ```rust
//! use parcelsort_core::{sort, Label, Parcel};
//!
//! assert_eq!(sort(100, 100, 99, 19.9), Ok(Label::Standard));
//! assert_eq!(sort(150, 1, 1, 20), Ok(Label::Rejected));
//!
//! let parcel = Parcel::new(100, 100, 100, 0)?;
//! assert!(parcel.is_bulky());
//! assert!(!parcel.is_heavy());
//! assert_eq!(parcel.label().as_str(), "SPECIAL");
//! # Ok::<(), parcelsort_core::ClassificationError>(())
//! ```

use core::{fmt, str::FromStr};

use crate::{
    constants::{DIMENSION_THRESHOLD, MASS_THRESHOLD},
    errors::ClassificationResult,
    measurement::{Field, Measurement, Quantity},
    validators::validate,
    volume::volume_exceeds_threshold,
};

/// Handling tier, ordered by how much special handling it needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Label {
    /// Neither bulky nor heavy
    Standard,
    /// Bulky or heavy, but not both
    Special,
    /// Both bulky and heavy
    Rejected,
}

impl Label {
    /// Every label, in increasing severity
    pub const ALL: [Label; 3] = [Label::Standard, Label::Special, Label::Rejected];

    /// Pick the label for a (bulky, heavy) pair
    pub const fn from_predicates(bulky: bool, heavy: bool) -> Self {
        match (bulky, heavy) {
            (true, true) => Label::Rejected,
            (true, false) | (false, true) => Label::Special,
            (false, false) => Label::Standard,
        }
    }

    /// Canonical uppercase label
    pub const fn as_str(self) -> &'static str {
        match self {
            Label::Standard => "STANDARD",
            Label::Special => "SPECIAL",
            Label::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLabelError;

impl fmt::Display for ParseLabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of STANDARD, SPECIAL, REJECTED")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseLabelError {}

impl FromStr for Label {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Label::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseLabelError)
    }
}

/// Bulky/heavy predicate pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Predicates {
    /// Volume or a single dimension reached its threshold
    pub bulky: bool,
    /// Mass reached its threshold
    pub heavy: bool,
}

impl Predicates {
    /// Label for this pair
    pub const fn label(self) -> Label {
        Label::from_predicates(self.bulky, self.heavy)
    }
}

/// A parcel whose four measurements have all passed validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parcel {
    width: Quantity,
    height: Quantity,
    length: Quantity,
    mass: Quantity,
}

impl Parcel {
    /// Validate all four measurements, in `Field::ALL` order
    ///
    /// The first failing measurement is returned; no partial parcel exists.
    pub fn new(
        width: impl Into<Measurement>,
        height: impl Into<Measurement>,
        length: impl Into<Measurement>,
        mass: impl Into<Measurement>,
    ) -> ClassificationResult<Self> {
        Ok(Self {
            width: validate(width, Field::Width)?,
            height: validate(height, Field::Height)?,
            length: validate(length, Field::Length)?,
            mass: validate(mass, Field::Mass)?,
        })
    }

    /// Validated width
    pub fn width(&self) -> Quantity {
        self.width
    }

    /// Validated height
    pub fn height(&self) -> Quantity {
        self.height
    }

    /// Validated length
    pub fn length(&self) -> Quantity {
        self.length
    }

    /// Validated mass
    pub fn mass(&self) -> Quantity {
        self.mass
    }

    /// Volume reaches the volume threshold, or any dimension reaches the
    /// dimension threshold
    pub fn is_bulky(&self) -> bool {
        volume_exceeds_threshold(self.width, self.height, self.length)
            || [self.width, self.height, self.length]
                .into_iter()
                .any(|dimension| dimension.meets(DIMENSION_THRESHOLD))
    }

    /// Mass reaches the mass threshold
    pub fn is_heavy(&self) -> bool {
        self.mass.meets(MASS_THRESHOLD)
    }

    /// Both predicates
    pub fn predicates(&self) -> Predicates {
        Predicates {
            bulky: self.is_bulky(),
            heavy: self.is_heavy(),
        }
    }

    /// Handling tier
    pub fn label(&self) -> Label {
        let predicates = self.predicates();
        let label = predicates.label();
        log_debug!("bulky={} heavy={} -> {}", predicates.bulky, predicates.heavy, label);
        label
    }
}

/// Classify a parcel from its raw measurements
pub fn sort(
    width: impl Into<Measurement>,
    height: impl Into<Measurement>,
    length: impl Into<Measurement>,
    mass: impl Into<Measurement>,
) -> ClassificationResult<Label> {
    Parcel::new(width, height, length, mass).map(|parcel| parcel.label())
}

/// Same as [`sort`], returning the canonical string label
pub fn sort_str(
    width: impl Into<Measurement>,
    height: impl Into<Measurement>,
    length: impl Into<Measurement>,
    mass: impl Into<Measurement>,
) -> ClassificationResult<&'static str> {
    sort(width, height, length, mass).map(Label::as_str)
}
