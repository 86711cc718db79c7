//! Deterministic value fixtures.
//!
//! [`seeded_values`] draws from a seeded ChaCha8 stream so benches and
//! tests see identical data on every run and every platform.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `len` finite, non-zero doubles with mixed signs, full 52-bit mantissas
/// and magnitudes spread over `1e-12..2e12`.
pub fn seeded_values(seed: u64, len: usize) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let bits = rng.next_u64();
            let unit = (bits >> 11) as f64 / (1u64 << 53) as f64;
            let exponent = (rng.next_u32() % 25) as i32 - 12;
            let sign = if bits & 1 == 0 { 1.0 } else { -1.0 };
            sign * (1.0 + unit) * 10f64.powi(exponent)
        })
        .collect()
}

/// Edge-case doubles: signed zeros, subnormals, extremes, infinities and
/// values whose tails are non-zero.
#[allow(clippy::approx_constant)]
pub fn awkward_values() -> Vec<f64> {
    vec![
        0.0,
        -0.0,
        1.0,
        -1.0,
        0.1,
        1.0 / 3.0,
        std::f64::consts::PI,
        -std::f64::consts::E,
        3.14159265358979,
        f64::EPSILON,
        1.0 + f64::EPSILON,
        f64::MIN_POSITIVE,
        f64::MIN_POSITIVE / 2.0,
        f64::from_bits(1),
        f64::MAX,
        f64::MIN,
        f64::INFINITY,
        f64::NEG_INFINITY,
    ]
}

/// Doubles whose tail segment is zero, so a head-only write stores them
/// exactly.
pub fn head_exact_values() -> Vec<f64> {
    vec![0.0, 1.0, -2.0, 0.5, 0.25, 99.0, 1024.0, -3.0, 1.5, 8.5]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_values_are_deterministic() {
        assert_eq!(seeded_values(42, 64), seeded_values(42, 64));
        assert_ne!(seeded_values(42, 64), seeded_values(43, 64));
    }

    #[test]
    fn seeded_values_are_finite_and_non_zero() {
        assert!(seeded_values(1, 1000)
            .iter()
            .all(|v| v.is_finite() && *v != 0.0));
    }

    #[test]
    fn head_exact_values_have_zero_tail() {
        for v in head_exact_values() {
            assert_eq!(v.to_bits() & 0xFFFF_FFFF, 0, "{v} has a tail");
        }
    }
}
