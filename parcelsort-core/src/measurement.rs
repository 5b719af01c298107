//! Measurement Types at the Classifier Boundary
//!
//! Parcels arrive from scanners, scales and upstream services that don't all
//! agree on numeric representation. [`Measurement`] is the tagged, raw input:
//! it records exactly what kind of value was handed over so validation can
//! inspect the kind explicitly instead of coercing.
//!
//! [`Quantity`] is what survives validation: finite, non-negative and either
//! an integer or a real.
//!
//! ```rust
//! use parcelsort_core::{Measurement, Quantity};
//!
//! assert_eq!(Measurement::from(42), Measurement::Int(42));
//! assert_eq!(Measurement::from(true).kind(), "bool");
//! assert_eq!(Quantity::Real(150.0).to_whole(), Some(150));
//! assert_eq!(Quantity::Real(19.9).to_whole(), None);
//! ```

use core::fmt;

/// Role of a measurement within a parcel, used for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Field {
    /// First linear dimension
    Width,
    /// Second linear dimension
    Height,
    /// Third linear dimension
    Length,
    /// Parcel mass
    Mass,
}

impl Field {
    /// Validation order. The first failing field in this order is reported.
    pub const ALL: [Field; 4] = [Field::Width, Field::Height, Field::Length, Field::Mass];

    /// Lowercase role name
    pub const fn name(self) -> &'static str {
        match self {
            Field::Width => "width",
            Field::Height => "height",
            Field::Length => "length",
            Field::Mass => "mass",
        }
    }

    /// True for the three linear dimensions
    pub const fn is_dimension(self) -> bool {
        !matches!(self, Field::Mass)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw measurement as received, tagged with its representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    UInt(u64),
    /// Floating point (may be NaN or infinite until validated)
    Float(f64),
    /// Boolean. Never accepted as a number.
    Bool(bool),
    /// Anything else, carrying the name of its kind (`"str"`, `"none"`, ...)
    NonNumeric(&'static str),
}

impl Measurement {
    /// Name of the representation, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Measurement::Int(_) => "int",
            Measurement::UInt(_) => "uint",
            Measurement::Float(_) => "float",
            Measurement::Bool(_) => "bool",
            Measurement::NonNumeric(kind) => *kind,
        }
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Measurement {
            fn from(value: $t) -> Self {
                Measurement::Int(i64::from(value))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Measurement {
            fn from(value: $t) -> Self {
                Measurement::UInt(u64::from(value))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<f32> for Measurement {
    fn from(value: f32) -> Self {
        Measurement::Float(f64::from(value))
    }
}

impl From<f64> for Measurement {
    fn from(value: f64) -> Self {
        Measurement::Float(value)
    }
}

impl From<bool> for Measurement {
    fn from(value: bool) -> Self {
        Measurement::Bool(value)
    }
}

impl From<&'static str> for Measurement {
    fn from(_: &'static str) -> Self {
        Measurement::NonNumeric("str")
    }
}

impl<T: Into<Measurement>> From<Option<T>> for Measurement {
    fn from(value: Option<T>) -> Self {
        value.map_or(Measurement::NonNumeric("none"), Into::into)
    }
}

impl From<Quantity> for Measurement {
    fn from(value: Quantity) -> Self {
        match value {
            Quantity::Integer(v) => Measurement::UInt(v),
            Quantity::Real(v) => Measurement::Float(v),
        }
    }
}

/// Validated measurement: finite and non-negative
///
/// Only [`crate::validate`] produces quantities from raw input; constructing
/// one by hand with a negative or non-finite real breaks the classifier's
/// assumptions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    /// Whole number
    Integer(u64),
    /// Real number, possibly with a zero fractional part
    Real(f64),
}

impl Quantity {
    /// Value as `f64` (large integers round to the nearest representable)
    pub fn as_f64(self) -> f64 {
        match self {
            Quantity::Integer(v) => v as f64,
            Quantity::Real(v) => v,
        }
    }

    /// Exact integral value, if the quantity is whole
    ///
    /// Reals with a zero fractional part count as whole. Reals beyond
    /// `u128::MAX` saturate, which keeps every `>=` comparison against a
    /// smaller threshold intact.
    pub fn to_whole(self) -> Option<u128> {
        match self {
            Quantity::Integer(v) => Some(u128::from(v)),
            Quantity::Real(v) if libm::trunc(v) == v => Some(v as u128),
            Quantity::Real(_) => None,
        }
    }

    /// True when the quantity meets or exceeds `threshold`
    pub fn meets(self, threshold: f64) -> bool {
        self.as_f64() >= threshold
    }
}
