//! Core types and traits for mantissa-segmented doubles.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! bit-layout contract that splits an `f64` into a 32-bit "head" and a
//! 32-bit "tail", the published precision constants, and the accessor
//! traits implemented by the storage types in `manseg-array`.
//!
//! ```text
//! f64 bits:  [ sign(1) | exponent(11) | mantissa hi(20) ][ mantissa lo(32) ]
//!            └────────────── head (u32) ─────────────────┘└── tail (u32) ───┘
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod layout;
pub mod precision;
pub mod traits;

pub use layout::SegmentPair;
pub use precision::{
    relative_error, PrecisionMode, ADAPTIVE_PRECISION_BOUND, MAX_SINGLE_SEGMENT_PRECISION,
    REDUCED_RELATIVE_ERROR,
};
pub use traits::{SegmentRead, SegmentWrite};
