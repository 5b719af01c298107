//! Common test utilities for integration tests
//!
//! This module provides:
//! - Reference parcel scenarios with their expected labels
//! - Boundary fixtures sitting exactly on each threshold
//! - Assertion helpers for classification results

#![allow(dead_code)]

pub mod scenarios;

use parcelsort_core::{ClassificationResult, ErrorKind, Label};

/// Assert that a classification produced the expected label
#[macro_export]
macro_rules! assert_label {
    ($result:expr, $expected:expr) => {
        match $result {
            Ok(label) => assert_eq!(
                label, $expected,
                "Expected {}, got {}", $expected, label
            ),
            Err(e) => panic!("Expected {}, classification failed: {}", $expected, e),
        }
    };
}

/// Assert that a classification failed with the given error tier
#[macro_export]
macro_rules! assert_rejected_input {
    ($result:expr, $kind:expr) => {
        match $result {
            Ok(label) => panic!("Expected {:?} error, got label {}", $kind, label),
            Err(e) => assert_eq!(e.kind(), $kind, "Unexpected error: {}", e),
        }
    };
}

/// Count labels across a batch of results, ignoring errors
pub fn count_labels(results: &[ClassificationResult<Label>]) -> [usize; 3] {
    let mut counts = [0; 3];
    for label in results.iter().flatten() {
        counts[*label as usize] += 1;
    }
    counts
}

/// Count errors of one tier across a batch of results
pub fn count_errors(results: &[ClassificationResult<Label>], kind: ErrorKind) -> usize {
    results
        .iter()
        .filter(|r| matches!(r, Err(e) if e.kind() == kind))
        .count()
}
