//! Precision kinds selecting which accessor an array hands out.

use std::fmt;

use manseg_core::{PrecisionMode, SegmentWrite};

use crate::accessor::{CombinedAccessor, ReducedAccessor};
use crate::storage::SegmentBuffers;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Reduced {}
    impl Sealed for super::Combined {}
}

/// Type-level precision of a [`SegmentedArray`](crate::SegmentedArray).
///
/// Sealed: the only kinds are [`Reduced`] and [`Combined`].
pub trait Precision: sealed::Sealed + Send + Sync + 'static {
    /// Runtime tag for this kind.
    const MODE: PrecisionMode;

    /// Accessor bound to one element.
    type Accessor<'a>: SegmentWrite + Copy + fmt::Debug;

    /// Bind an accessor to `index`. The caller has validated the index.
    fn bind(buffers: &SegmentBuffers, index: usize) -> Self::Accessor<'_>;
}

/// Head-only precision.
#[derive(Debug)]
pub enum Reduced {}

/// Head-and-tail precision.
#[derive(Debug)]
pub enum Combined {}

impl Precision for Reduced {
    const MODE: PrecisionMode = PrecisionMode::Reduced;

    type Accessor<'a> = ReducedAccessor<'a>;

    fn bind(buffers: &SegmentBuffers, index: usize) -> ReducedAccessor<'_> {
        ReducedAccessor::new(buffers, index)
    }
}

impl Precision for Combined {
    const MODE: PrecisionMode = PrecisionMode::Full;

    type Accessor<'a> = CombinedAccessor<'a>;

    fn bind(buffers: &SegmentBuffers, index: usize) -> CombinedAccessor<'_> {
        CombinedAccessor::new(buffers, index)
    }
}
