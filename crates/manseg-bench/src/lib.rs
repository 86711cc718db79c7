//! Shared setup for manseg benchmarks.
//!
//! Benchmarks live in `benches/`; this library holds the array builders
//! they share so every bench measures the same data.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use manseg_array::{ArrayConfig, ArrayError, DualPrecisionArray};
use manseg_core::PrecisionMode;
use manseg_test_utils::seeded_values;

/// Element count used by the sweep benchmarks (8MB of segments).
pub const SWEEP_LEN: usize = 1 << 20;

/// Seed for benchmark data.
pub const BENCH_SEED: u64 = 0x5EED;

/// Build a dual-precision array of `len` elements holding seeded values at
/// full precision.
pub fn make_filled(len: usize, config: ArrayConfig) -> Result<DualPrecisionArray, ArrayError> {
    let array = DualPrecisionArray::with_config(len, config)?;
    for (i, v) in seeded_values(BENCH_SEED, len).into_iter().enumerate() {
        array.set(i, v, PrecisionMode::Full)?;
    }
    Ok(array)
}

/// One Jacobi-style relaxation step `x[i] = 0.5 * (x[i-1] + x[i+1])` over
/// the interior, read and written at `mode`. Returns the sum of updates.
pub fn relax_step(array: &DualPrecisionArray, mode: PrecisionMode) -> Result<f64, ArrayError> {
    let mut total = 0.0;
    for i in 1..array.len().saturating_sub(1) {
        let v = 0.5 * (array.read(i - 1, mode)? + array.read(i + 1, mode)?);
        array.set(i, v, mode)?;
        total += v;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_filled_populates_every_element() {
        let array = make_filled(16, ArrayConfig::default()).unwrap();
        let expected = seeded_values(BENCH_SEED, 16);
        assert_eq!(array.combined().to_vec().unwrap(), expected);
    }

    #[test]
    fn relax_step_smooths_interior() {
        let array = DualPrecisionArray::new(3).unwrap();
        array.set(0, 2.0, PrecisionMode::Full).unwrap();
        array.set(2, 4.0, PrecisionMode::Full).unwrap();
        let total = relax_step(&array, PrecisionMode::Reduced).unwrap();
        assert_eq!(total, 3.0);
        assert_eq!(array.read(1, PrecisionMode::Full).unwrap(), 3.0);
    }
}
