//! Aliased reduced/full-precision segmented `f64` arrays.
//!
//! Each double is stored as a 32-bit head and a 32-bit tail in two parallel
//! buffers. A reduced view touches only the heads, halving memory traffic
//! for early, memory-bound iterations; a combined view over the very same
//! buffers reconstructs exact doubles once full precision is needed.
//!
//! # Architecture
//!
//! ```text
//! DualPrecisionArray (orchestrator)
//! ├── ReducedArray  ──┐
//! │                   ├── Arc<SegmentBuffers> (heads + tails + live flag)
//! ├── CombinedArray ──┘
//! └── Option<Vec<f64>> (materialized snapshot, independent)
//! ```
//!
//! Accessors ([`ReducedAccessor`], [`CombinedAccessor`]) are short-lived
//! element bindings implementing [`SegmentRead`]/[`SegmentWrite`].
//!
//! # Safety model
//!
//! No `unsafe`. Buffers are `AtomicU32` with relaxed ordering so aliasing
//! views and data-parallel workers can write through shared references.
//! Memory is freed once, when the last alias goes; a released flag turns
//! stale access through a surviving alias into
//! [`ArrayError::StorageReleased`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod accessor;
pub mod array;
pub mod config;
pub mod dual;
pub mod error;
pub mod kind;
pub mod materialize;
pub mod storage;

// Public re-exports for the primary API surface.
pub use accessor::{CombinedAccessor, ReducedAccessor};
pub use array::{CombinedArray, HeadsArray, PairsArray, ReducedArray, SegmentedArray};
pub use config::ArrayConfig;
pub use dual::{ArrayState, DualPrecisionArray};
pub use error::ArrayError;
pub use kind::{Combined, Precision, Reduced};
pub use manseg_core::{SegmentPair, SegmentRead, SegmentWrite};
pub use storage::{SegmentBuffers, SharedSegments};
