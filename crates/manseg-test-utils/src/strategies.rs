//! Proptest strategies for doubles.

use proptest::prelude::*;

/// Any finite double, including zeros and subnormals.
pub fn finite_f64() -> impl Strategy<Value = f64> {
    prop::num::f64::POSITIVE
        | prop::num::f64::NEGATIVE
        | prop::num::f64::NORMAL
        | prop::num::f64::SUBNORMAL
        | prop::num::f64::ZERO
}

/// Normal-range doubles of either sign (no zeros, subnormals, inf or NaN).
pub fn normal_f64() -> impl Strategy<Value = f64> {
    prop::num::f64::POSITIVE | prop::num::f64::NEGATIVE | prop::num::f64::NORMAL
}

/// Finite doubles whose tail segment is zero.
pub fn head_exact_f64() -> impl Strategy<Value = f64> {
    any::<u32>()
        .prop_map(|head| f64::from_bits((head as u64) << 32))
        .prop_filter("finite", |v| v.is_finite())
}
