//! Overflow-safe volume check
//!
//! ## Whole path
//!
//! When all three dimensions are whole (integers, or reals with a zero
//! fractional part) the product is computed exactly in `u128`. A
//! `checked_mul` overflow means the product exceeds `u128::MAX`, which is
//! already far above the threshold, so overflow resolves to "exceeds" and is
//! never silently wrapped. A zero factor short-circuits first, since it makes
//! the volume zero whatever the other two are.
//!
//! ```text
//! 1_000_000 × 1_000_000 × 1   → 10^12      exact, exceeds
//! 2^64-1 × 2^64-1 × 2          → overflow   exceeds
//! 0 × 2^64-1 × 2^64-1          → 0          below
//! ```
//!
//! ## Fractional path
//!
//! If any dimension is genuinely fractional the product is computed in
//! `f64`. Near the threshold, very large fractional inputs can round; that
//! residual precision risk is accepted.

use crate::{
    constants::{VOLUME_THRESHOLD, VOLUME_THRESHOLD_WHOLE},
    measurement::Quantity,
};

/// True when `width × height × length >= VOLUME_THRESHOLD`
pub fn volume_exceeds_threshold(width: Quantity, height: Quantity, length: Quantity) -> bool {
    match (width.to_whole(), height.to_whole(), length.to_whole()) {
        (Some(w), Some(h), Some(l)) => whole_volume_exceeds(w, h, l),
        _ => width.as_f64() * height.as_f64() * length.as_f64() >= VOLUME_THRESHOLD,
    }
}

fn whole_volume_exceeds(width: u128, height: u128, length: u128) -> bool {
    if width == 0 || height == 0 || length == 0 {
        return false;
    }

    match width.checked_mul(height).and_then(|area| area.checked_mul(length)) {
        Some(volume) => volume >= VOLUME_THRESHOLD_WHOLE,
        // All factors are >= 1 here, so the true product is at least u128::MAX
        None => true,
    }
}
