//! # Parameter Validation
//!
//! Shared rejection rule for generator inputs.

/// Returns `true` when a generator must reject its inputs.
///
/// Inputs are rejected when `points` is below `min`, or when any of `values`
/// is not strictly positive. NaN is not positive and is rejected too.
///
/// # Example
///
/// ```rust
/// use shape_generator::validation::preconditions_check;
///
/// assert!(preconditions_check(3, 4, &[10.0, 5.0]));
/// assert!(preconditions_check(8, 4, &[10.0, -5.0]));
/// assert!(!preconditions_check(8, 4, &[10.0, 5.0]));
/// ```
pub fn preconditions_check(points: u32, min: u32, values: &[f64]) -> bool {
    points < min || values.iter().any(|value| value.is_nan() || *value <= 0.0)
}
