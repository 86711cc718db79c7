//! One-shot copy from segment storage into a plain `f64` buffer.
//!
//! Materialization decodes every head with a zero tail, i.e. the value the
//! reduced view currently sees, and writes it into an independent buffer.
//! Elements have no cross-dependency, so large arrays are split across the
//! rayon pool; short ones are copied on the calling thread.

use rayon::prelude::*;

use manseg_core::layout::from_head;

use crate::config::ArrayConfig;
use crate::error::ArrayError;
use crate::storage::SegmentBuffers;
use crate::ReducedArray;

/// Copy the reduced-precision values of `source` into a new buffer.
pub fn materialize(source: &ReducedArray, config: &ArrayConfig) -> Result<Vec<f64>, ArrayError> {
    let mut out = Vec::new();
    materialize_into(source, config, &mut out)?;
    Ok(out)
}

/// Copy the reduced-precision values of `source` into `out`, reusing its
/// allocation when possible. `out` is resized to `source.len()`.
pub fn materialize_into(
    source: &ReducedArray,
    config: &ArrayConfig,
    out: &mut Vec<f64>,
) -> Result<(), ArrayError> {
    config.validate()?;
    let buffers = source.buffers()?;
    let len = buffers.len();

    out.clear();
    out.try_reserve_exact(len)
        .map_err(|_| ArrayError::AllocationFailed {
            requested: len.saturating_mul(std::mem::size_of::<f64>()),
        })?;
    out.resize(len, 0.0);

    if config.is_parallel_for(len) {
        copy_parallel(buffers, out, config.min_chunk_len);
    } else {
        copy_sequential(buffers, out);
    }
    log::debug!(
        "manseg: materialized {len} values ({})",
        if config.is_parallel_for(len) {
            "parallel"
        } else {
            "sequential"
        }
    );
    Ok(())
}

fn copy_sequential(buffers: &SegmentBuffers, out: &mut [f64]) {
    for (index, slot) in out.iter_mut().enumerate() {
        *slot = from_head(buffers.load_head(index));
    }
}

fn copy_parallel(buffers: &SegmentBuffers, out: &mut [f64], min_chunk_len: usize) {
    out.par_iter_mut()
        .enumerate()
        .with_min_len(min_chunk_len)
        .for_each(|(index, slot)| {
            *slot = from_head(buffers.load_head(index));
        });
}
