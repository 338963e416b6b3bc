//! Breakpoint tables and point lookup
//!
//! All tables are per 100g and ascending.

/// Energy breakpoints (negative)
pub const CALORIE_THRESHOLDS: [f64; 10] = [
    335.0, 670.0, 1005.0, 1340.0, 1675.0, 2010.0, 2345.0, 2680.0, 3015.0, 3350.0,
];
/// Sugar breakpoints in grams (negative)
pub const SUGAR_THRESHOLDS: [f64; 10] = [
    4.5, 9.0, 13.5, 18.0, 22.5, 27.0, 31.0, 36.0, 40.0, 45.0,
];
/// Saturated fat breakpoints in grams (negative)
pub const SATURATED_FAT_THRESHOLDS: [f64; 10] = [
    1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0,
];
/// Salt breakpoints in grams (negative)
pub const SALT_THRESHOLDS: [f64; 10] = [
    0.09, 0.18, 0.27, 0.36, 0.45, 0.54, 0.63, 0.72, 0.81, 0.9,
];

/// Protein breakpoints in grams (positive)
pub const PROTEIN_THRESHOLDS: [f64; 5] = [1.6, 3.2, 4.8, 6.4, 8.0];
/// Fiber breakpoints in grams (positive)
pub const FIBER_THRESHOLDS: [f64; 5] = [0.9, 1.9, 2.8, 3.7, 4.7];

/// Points for a value against an ascending breakpoint table
///
/// Returns the index of the first breakpoint the value does not exceed, or the
/// table length when it exceeds them all. A value equal to a breakpoint lands in
/// that breakpoint's bucket.
pub fn points(value: f64, thresholds: &[f64]) -> u32 {
    thresholds
        .iter()
        .position(|&threshold| value <= threshold)
        .unwrap_or(thresholds.len()) as u32
}
