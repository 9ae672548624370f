//! Periodic down-sampling of record streams.
//!
//! A keep fraction is approximated by a ratio `n/d` with a bounded
//! denominator. Within every run of `d` consecutive records the first `n` are
//! kept, so the result is deterministic and preserves order.

use gens_core::{GensError, Result};

/// Largest denominator used when approximating a keep fraction.
pub const MAX_DENOMINATOR: u64 = 1000;

///
/// Closest fraction to `value` with a denominator of at most
/// `max_denominator`, found with the continued fraction expansion of the
/// exact binary value of `value`.
///
/// `value` must be within `[0, 1]`. Values too small to reach the first
/// convergent come back as `(0, 1)`.
///
pub fn limit_denominator(value: f64, max_denominator: u64) -> (u64, u64) {
    let max_denominator = max_denominator.max(1) as u128;
    let Some((numerator, denominator)) = exact_ratio(value) else {
        return (0, 1);
    };
    if denominator <= max_denominator {
        return (numerator as u64, denominator as u64);
    }

    let (mut p0, mut q0, mut p1, mut q1) = (0u128, 1u128, 1u128, 0u128);
    let (mut n, mut d) = (numerator, denominator);
    loop {
        let a = n / d;
        let q2 = match a.checked_mul(q1).and_then(|aq| aq.checked_add(q0)) {
            Some(q2) if q2 <= max_denominator => q2,
            _ => break,
        };
        let p2 = p0 + a * p1;
        (p0, q0, p1, q1) = (p1, q1, p2, q2);
        (n, d) = (d, n - a * d);
    }

    // pick between the last convergent and the best semiconvergent
    let k = (max_denominator - q0) / q1;
    let semi = (p0 + k * p1, q0 + k * q1);
    match d.checked_mul(2 * semi.1) {
        Some(distance) if distance <= denominator => (p1 as u64, q1 as u64),
        _ => (semi.0 as u64, semi.1 as u64),
    }
}

/// `value` as `numerator / 2^k` in lowest terms.
fn exact_ratio(value: f64) -> Option<(u128, u128)> {
    if value <= 0.0 || !value.is_finite() {
        return None;
    }

    let bits = value.to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
    if biased_exponent == 0 {
        return None;
    }
    let mut mantissa = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);
    let mut exponent = biased_exponent - 1075;

    if exponent >= 0 {
        return Some(((mantissa as u128) << exponent, 1));
    }

    let shift = (mantissa.trailing_zeros() as i32).min(-exponent);
    mantissa >>= shift;
    exponent += shift;
    if -exponent > 120 {
        return None;
    }
    Some((mantissa as u128, 1u128 << -exponent))
}

///
/// Validate a keep fraction and turn it into the `(n, d)` ratio used for
/// decimation. A fraction that rounds to zero keeps one record in
/// [`MAX_DENOMINATOR`].
///
pub fn keep_ratio(keep_fraction: f64) -> Result<(u64, u64)> {
    if !(keep_fraction > 0.0 && keep_fraction <= 1.0) {
        return Err(GensError::InvalidReduceFraction(keep_fraction));
    }

    match limit_denominator(keep_fraction, MAX_DENOMINATOR) {
        (0, _) => Ok((1, MAX_DENOMINATOR)),
        ratio => Ok(ratio),
    }
}

///
/// Keep approximately `keep_fraction` of the records, in order.
///
/// Record `i` is kept when `i mod d < n`, where `n/d` is the bounded
/// approximation of `keep_fraction`. `None` and `1` return the records
/// unchanged.
///
/// # Arguments
/// - records: records in position order
/// - keep_fraction: share of records to keep, within (0, 1]
///
pub fn decimate<T>(records: Vec<T>, keep_fraction: Option<f64>) -> Result<Vec<T>> {
    let Some(keep_fraction) = keep_fraction else {
        return Ok(records);
    };

    let (n, d) = keep_ratio(keep_fraction)?;
    if n == d {
        return Ok(records);
    }

    let mask: Vec<bool> = (0..d).map(|i| i < n).collect();
    Ok(records
        .into_iter()
        .zip(mask.into_iter().cycle())
        .filter_map(|(record, keep)| keep.then_some(record))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(0.5, (1, 2))]
    #[case(1.0 / 3.0, (1, 3))]
    #[case(0.1, (1, 10))]
    #[case(0.001, (1, 1000))]
    #[case(0.75, (3, 4))]
    #[case(1.0, (1, 1))]
    #[case(std::f64::consts::PI - 3.0, (16, 113))]
    fn test_limit_denominator(#[case] value: f64, #[case] expected: (u64, u64)) {
        assert_eq!(limit_denominator(value, MAX_DENOMINATOR), expected);
    }

    #[rstest]
    fn test_limit_denominator_smaller_bound() {
        assert_eq!(limit_denominator(std::f64::consts::PI - 3.0, 10), (1, 7));
    }

    #[rstest]
    fn test_every_third_record() {
        let records: Vec<u32> = (0..9).collect();
        let kept = decimate(records, Some(1.0 / 3.0)).unwrap();
        assert_eq!(kept, vec![0, 3, 6]);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(1.0))]
    fn test_identity(#[case] keep_fraction: Option<f64>) {
        let records: Vec<u32> = (0..17).collect();
        let kept = decimate(records.clone(), keep_fraction).unwrap();
        assert_eq!(kept, records);
    }

    #[rstest]
    fn test_kept_share_is_exact_over_periods() {
        let records: Vec<u32> = (0..700).collect();
        let kept = decimate(records, Some(2.0 / 7.0)).unwrap();
        assert_eq!(kept.len(), 200);

        // every window of 7 consecutive input records keeps 2
        for window in kept.chunks(2) {
            assert_eq!(window[0] % 7, 0);
            assert_eq!(window[1] % 7, 1);
        }
    }

    #[rstest]
    fn test_order_preserved() {
        let records: Vec<u32> = (0..100).collect();
        let kept = decimate(records, Some(0.6)).unwrap();
        assert!(kept.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(kept.len(), 60);
    }

    #[rstest]
    fn test_tiny_fraction_keeps_one_per_thousand() {
        assert_eq!(keep_ratio(1e-6).unwrap(), (1, MAX_DENOMINATOR));

        let records: Vec<u32> = (0..2500).collect();
        let kept = decimate(records, Some(1e-6)).unwrap();
        assert_eq!(kept, vec![0, 1000, 2000]);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-0.5)]
    #[case(1.5)]
    #[case(f64::NAN)]
    fn test_invalid_fraction(#[case] keep_fraction: f64) {
        let result = decimate(vec![1, 2, 3], Some(keep_fraction));
        assert!(matches!(result, Err(GensError::InvalidReduceFraction(_))));
    }

    #[rstest]
    fn test_empty_input() {
        let kept: Vec<u32> = decimate(Vec::new(), Some(0.5)).unwrap();
        assert!(kept.is_empty());
    }
}
