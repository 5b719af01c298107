//! Basic Parcel Sorting Example
//!
//! This example demonstrates the simplest use case of ParcelSort:
//! classifying parcels from a scanner feed into handling tiers.
//!
//! ## What You'll Learn
//!
//! - Classifying raw measurements with `sort`
//! - Inspecting the bulky/heavy predicates of a validated `Parcel`
//! - Telling type failures apart from value failures
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_sort
//! ```

use parcelsort_core::{
    constants::{DIMENSION_THRESHOLD, MASS_THRESHOLD, VOLUME_THRESHOLD},
    sort, ErrorKind, Parcel,
    Measurement::{Bool, Float, Int},
};

fn main() {
    println!("ParcelSort Basic Sorting Example");
    println!("================================\n");

    println!("Thresholds:");
    println!("  Volume:    {}", VOLUME_THRESHOLD);
    println!("  Dimension: {}", DIMENSION_THRESHOLD);
    println!("  Mass:      {}", MASS_THRESHOLD);
    println!();

    // Simulated scanner feed: (width, height, length, mass)
    let feed = [
        (Int(100), Int(100), Int(99), Float(19.9), "Small and light"),
        (Int(100), Int(100), Int(100), Int(0), "Volume exactly at threshold"),
        (Int(150), Int(1), Int(1), Int(0), "Dimension exactly at threshold"),
        (Int(1), Int(1), Int(1), Int(20), "Mass exactly at threshold"),
        (Int(150), Int(1), Int(1), Int(20), "Bulky and heavy"),
        (Int(-1), Int(1), Int(1), Int(1), "Negative width"),
        (Bool(true), Int(1), Int(1), Int(1), "Boolean width"),
        (Float(f64::NAN), Int(1), Int(1), Int(1), "NaN width"),
    ];

    for (w, h, l, m, description) in feed {
        print!("{:32} ", description);
        match sort(w, h, l, m) {
            Ok(label) => println!("-> {}", label),
            Err(e) if e.kind() == ErrorKind::Type => println!("-> TYPE ERROR ({})", e),
            Err(e) => println!("-> RANGE ERROR ({})", e),
        }
    }

    println!("\nInspecting a parcel:");
    match Parcel::new(220.0, 90.0, 95.0, 85.5) {
        Ok(parcel) => {
            let predicates = parcel.predicates();
            println!("  bulky: {}", predicates.bulky);
            println!("  heavy: {}", predicates.heavy);
            println!("  label: {}", parcel.label());
        }
        Err(e) => println!("  invalid parcel: {}", e),
    }
}
