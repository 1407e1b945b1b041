//! Exclusion-aware integer and float sampling

use std::collections::BTreeSet;

use crate::error::{GenError, GenResult};
use crate::source::{UniformSource, partial_shuffle};

/// Draw `count` distinct integers from `{min..=max} \ exclude`, in draw order.
///
/// The full candidate domain is built before sampling, so failure is decided
/// up front and no partial result is ever returned. `max_domain` caps the
/// size of `{min..=max}` that may be materialized.
pub fn sample_integers<S: UniformSource + ?Sized>(
    source: &mut S,
    min: i64,
    max: i64,
    exclude: &BTreeSet<i64>,
    count: usize,
    max_domain: u64,
) -> GenResult<Vec<i64>> {
    let span = if min > max {
        0
    } else {
        (i128::from(max) - i128::from(min) + 1) as u128
    };
    if span > u128::from(max_domain) {
        return Err(GenError::DomainTooLarge {
            size: span,
            limit: max_domain,
        });
    }

    let mut available: Vec<i64> = if span == 0 {
        Vec::new()
    } else {
        (min..=max).filter(|x| !exclude.contains(x)).collect()
    };

    if available.len() < count {
        return Err(GenError::InsufficientDomain {
            needed: count,
            available: available.len(),
        });
    }

    log::debug!(
        "Sampling {} of {} integers in [{}, {}] ({} excluded)",
        count,
        available.len(),
        min,
        max,
        span as usize - available.len()
    );

    partial_shuffle(source, &mut available, count);
    available.truncate(count);
    Ok(available)
}

/// Draw `count` floats as `min + (max - min) * u`, `u` in `[0, 1)`, each
/// rounded to `decimals` fractional digits (half-to-even on the exact value).
pub fn sample_floats<S: UniformSource + ?Sized>(
    source: &mut S,
    min: f64,
    max: f64,
    decimals: u32,
    count: usize,
) -> GenResult<Vec<f64>> {
    if !min.is_finite() || !max.is_finite() {
        return Err(GenError::InvalidRange(format!(
            "float bounds must be finite, got [{min}, {max}]"
        )));
    }

    Ok((0..count)
        .map(|_| round_to_decimals(source.float_between(min, max), decimals))
        .collect())
}

/// Round to `decimals` fractional digits, ties to even.
///
/// Formatting works on the exact binary value, so a draw like `2.675`
/// (stored as `2.67499999...`) rounds down exactly as decimal rounding of
/// the stored value must.
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // No f64 has more than 1074 fractional digits.
    if decimals > 1074 {
        return value;
    }
    format!("{:.*}", decimals as usize, value)
        .parse()
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RngSource;

    const LIMIT: u64 = 10_000_000;

    #[test]
    fn test_integers_distinct_in_range_not_excluded() {
        let mut source = RngSource::seeded(2024);
        for trial in 0..200u64 {
            let min = (trial as i64 % 17) - 8;
            let max = min + (trial as i64 % 40);
            let exclude: BTreeSet<i64> = (min..=max).filter(|x| x % 3 == 0).collect();
            let available = (max - min + 1) as usize - exclude.len();
            let count = available / 2;

            let values = sample_integers(&mut source, min, max, &exclude, count, LIMIT).unwrap();
            assert_eq!(values.len(), count);
            let distinct: BTreeSet<i64> = values.iter().copied().collect();
            assert_eq!(distinct.len(), count);
            for v in values {
                assert!(v >= min && v <= max);
                assert!(!exclude.contains(&v));
            }
        }
    }

    #[test]
    fn test_integers_whole_domain_is_permutation() {
        let mut source = RngSource::seeded(5);
        let mut values = sample_integers(&mut source, 1, 10, &BTreeSet::new(), 10, LIMIT).unwrap();
        values.sort_unstable();
        assert_eq!(values, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_integers_insufficient_domain() {
        let mut source = RngSource::seeded(5);
        let exclude: BTreeSet<i64> = [2, 3].into_iter().collect();
        let err = sample_integers(&mut source, 1, 4, &exclude, 3, LIMIT).unwrap_err();
        assert!(matches!(
            err,
            GenError::InsufficientDomain {
                needed: 3,
                available: 2
            }
        ));
    }

    #[test]
    fn test_integers_exclusions_outside_bounds_ignored() {
        let mut source = RngSource::seeded(5);
        let exclude: BTreeSet<i64> = [-100, 100].into_iter().collect();
        let values = sample_integers(&mut source, 1, 3, &exclude, 3, LIMIT).unwrap();
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_integers_inverted_bounds() {
        let mut source = RngSource::seeded(5);
        assert!(
            sample_integers(&mut source, 10, 1, &BTreeSet::new(), 0, LIMIT)
                .unwrap()
                .is_empty()
        );
        assert!(matches!(
            sample_integers(&mut source, 10, 1, &BTreeSet::new(), 1, LIMIT),
            Err(GenError::InsufficientDomain { .. })
        ));
    }

    #[test]
    fn test_integers_domain_too_large() {
        let mut source = RngSource::seeded(5);
        let err = sample_integers(&mut source, i64::MIN, i64::MAX, &BTreeSet::new(), 1, LIMIT)
            .unwrap_err();
        assert!(matches!(err, GenError::DomainTooLarge { .. }));
    }

    #[test]
    fn test_floats_in_range_and_rounded() {
        let mut source = RngSource::seeded(77);
        let values = sample_floats(&mut source, -5.0, 5.0, 2, 500).unwrap();
        assert_eq!(values.len(), 500);
        for v in values {
            assert!((-5.0..=5.0).contains(&v));
            assert_eq!(round_to_decimals(v, 2), v);
        }
    }

    #[test]
    fn test_floats_zero_decimals_are_whole() {
        let mut source = RngSource::seeded(3);
        for v in sample_floats(&mut source, 0.0, 100.0, 0, 100).unwrap() {
            assert_eq!(v.fract(), 0.0);
        }
    }

    #[test]
    fn test_floats_reject_non_finite() {
        let mut source = RngSource::seeded(3);
        assert!(matches!(
            sample_floats(&mut source, 0.0, f64::INFINITY, 2, 1),
            Err(GenError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_round_half_to_even() {
        assert_eq!(round_to_decimals(0.5, 0), 0.0);
        assert_eq!(round_to_decimals(1.5, 0), 2.0);
        assert_eq!(round_to_decimals(2.5, 0), 2.0);
        assert_eq!(round_to_decimals(0.125, 2), 0.12);
        assert_eq!(round_to_decimals(0.375, 2), 0.38);
        // 2.675 is stored slightly below the midpoint
        assert_eq!(round_to_decimals(2.675, 2), 2.67);
        assert_eq!(round_to_decimals(-1.5, 0), -2.0);
    }
}
