//! Numeric helpers returning [`Maybe`] instead of sentinels.

use outcome_shared::Maybe;

/// Arithmetic mean of `values`, absent for an empty slice.
///
/// The integer sum is divided by the count in floating point, so `[1, 2]`
/// yields `1.5` rather than a truncated `1`.
#[expect(
    clippy::cast_precision_loss,
    reason = "mean is defined as a floating-point quotient of the exact integer sum"
)]
pub fn mean(values: &[i64]) -> Maybe<f64> {
    if values.is_empty() {
        return Maybe::Absent;
    }

    let sum: i128 = values.iter().map(|value| i128::from(*value)).sum();
    Maybe::Present(sum as f64 / values.len() as f64)
}
