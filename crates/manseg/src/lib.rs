//! manseg: mantissa-segmented double arrays with zero-copy precision switching.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the manseg sub-crates. For most users, adding `manseg` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use manseg::prelude::*;
//!
//! let mut array = DualPrecisionArray::new(4).unwrap();
//!
//! // Early iterations: head segment only.
//! array.reduced().set(2, std::f64::consts::PI).unwrap();
//! let approx = array.reduced().read(2).unwrap();
//! assert!(relative_error(approx, std::f64::consts::PI) < MAX_SINGLE_SEGMENT_PRECISION);
//!
//! // Switch to full precision in place: same buffers, no copy.
//! let x = array.combined().at(2).unwrap();
//! x.write(std::f64::consts::PI);
//! assert_eq!(x.read(), std::f64::consts::PI);
//!
//! // Or snapshot into a plain f64 buffer for the fastest access.
//! let full = array.materialize_full_precision().unwrap();
//! assert_eq!(full.len(), 4);
//!
//! array.release_segments();
//! array.release_materialized();
//! assert_eq!(array.state(), ArrayState::Released);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `manseg-core` | Bit layout, precision constants, accessor traits |
//! | [`array`] | `manseg-array` | Segment storage, views, accessors, orchestrator |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Segment storage, reduced/combined views and the orchestrator
/// (`manseg-array`).
pub use manseg_array as array;

/// Bit layout, precision constants and accessor traits (`manseg-core`).
pub use manseg_core as types;

/// Common imports for working with segmented arrays.
///
/// ```rust
/// use manseg::prelude::*;
/// ```
pub mod prelude {
    pub use manseg_array::{
        ArrayConfig, ArrayError, ArrayState, CombinedAccessor, CombinedArray,
        DualPrecisionArray, HeadsArray, PairsArray, ReducedAccessor, ReducedArray,
    };
    pub use manseg_core::{
        relative_error, PrecisionMode, SegmentPair, SegmentRead, SegmentWrite,
        ADAPTIVE_PRECISION_BOUND, MAX_SINGLE_SEGMENT_PRECISION,
    };
}
