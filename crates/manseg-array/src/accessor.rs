//! Element accessors for reduced and combined views.
//!
//! An accessor is a copyable, non-owning binding to one element of a
//! [`SegmentBuffers`] allocation. The index is validated by the array that
//! hands the accessor out; the accessor itself only checks, in debug
//! builds, that the storage has not been released through another view.
//!
//! Read and write go through [`SegmentRead`] / [`SegmentWrite`]:
//!
//! ```rust
//! use manseg_array::ReducedArray;
//! use manseg_core::{SegmentRead, SegmentWrite};
//!
//! let heads = ReducedArray::new(2).unwrap();
//! let x = heads.at(0).unwrap();
//! x.write(3.0);
//! x.mul_assign(0.5);
//! assert_eq!(x.read(), 1.5);
//! ```

use std::fmt;

use manseg_core::{SegmentPair, SegmentRead, SegmentWrite};

use crate::storage::SegmentBuffers;

/// Head-only view of one element.
///
/// Reads decode the head with a zero tail; writes store the truncated head
/// and never touch the tail.
#[derive(Clone, Copy)]
pub struct ReducedAccessor<'a> {
    buffers: &'a SegmentBuffers,
    index: usize,
}

impl<'a> ReducedAccessor<'a> {
    pub(crate) fn new(buffers: &'a SegmentBuffers, index: usize) -> Self {
        Self { buffers, index }
    }

    /// The element index this accessor is bound to.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl SegmentRead for ReducedAccessor<'_> {
    fn segments(&self) -> SegmentPair {
        debug_assert!(self.buffers.is_live(), "read through released storage");
        SegmentPair::from_head(self.buffers.load_head(self.index))
    }
}

impl SegmentWrite for ReducedAccessor<'_> {
    fn write_segments(&self, pair: SegmentPair) {
        debug_assert!(self.buffers.is_live(), "write through released storage");
        self.buffers.store_head(self.index, pair.head);
    }
}

impl fmt::Debug for ReducedAccessor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReducedAccessor")
            .field("index", &self.index)
            .field("head", &format_args!("{:#010x}", self.head_bits()))
            .finish()
    }
}

/// Head-and-tail view of one element.
///
/// Reads reconstruct the exact double; writes store both segments.
#[derive(Clone, Copy)]
pub struct CombinedAccessor<'a> {
    buffers: &'a SegmentBuffers,
    index: usize,
}

impl<'a> CombinedAccessor<'a> {
    pub(crate) fn new(buffers: &'a SegmentBuffers, index: usize) -> Self {
        Self { buffers, index }
    }

    /// The element index this accessor is bound to.
    pub fn index(&self) -> usize {
        self.index
    }

    /// A head-only view of the same element.
    pub fn as_reduced(&self) -> ReducedAccessor<'a> {
        ReducedAccessor::new(self.buffers, self.index)
    }
}

impl SegmentRead for CombinedAccessor<'_> {
    fn segments(&self) -> SegmentPair {
        debug_assert!(self.buffers.is_live(), "read through released storage");
        self.buffers.load(self.index)
    }
}

impl SegmentWrite for CombinedAccessor<'_> {
    fn write_segments(&self, pair: SegmentPair) {
        debug_assert!(self.buffers.is_live(), "write through released storage");
        self.buffers.store(self.index, pair);
    }
}

impl fmt::Debug for CombinedAccessor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pair = self.segments();
        f.debug_struct("CombinedAccessor")
            .field("index", &self.index)
            .field("head", &format_args!("{:#010x}", pair.head))
            .field("tail", &format_args!("{:#010x}", pair.tail))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manseg_core::layout::truncate;
    use manseg_core::REDUCED_RELATIVE_ERROR;

    fn buffers(len: usize) -> SegmentBuffers {
        SegmentBuffers::zeroed(len).unwrap()
    }

    #[test]
    fn combined_round_trip_is_exact() {
        let b = buffers(1);
        let acc = CombinedAccessor::new(&b, 0);
        acc.write(std::f64::consts::PI);
        assert_eq!(acc.read(), std::f64::consts::PI);
    }

    #[test]
    fn reduced_write_truncates_and_keeps_tail() {
        let b = buffers(1);
        b.store(0, SegmentPair::new(0, 0xABCD_EF01));
        let acc = ReducedAccessor::new(&b, 0);
        acc.write(std::f64::consts::PI);
        assert_eq!(acc.read(), truncate(std::f64::consts::PI));
        assert_eq!(b.load(0).tail, 0xABCD_EF01);
    }

    #[test]
    fn reduced_read_is_deterministic() {
        let b = buffers(1);
        let acc = ReducedAccessor::new(&b, 0);
        acc.write(1.0 / 3.0);
        let first = acc.read();
        for _ in 0..4 {
            assert_eq!(acc.read().to_bits(), first.to_bits());
        }
        assert!((first - 1.0 / 3.0).abs() / (1.0 / 3.0) <= REDUCED_RELATIVE_ERROR);
    }

    #[test]
    fn reduced_compound_update_truncates_on_write_back() {
        let b = buffers(1);
        let acc = ReducedAccessor::new(&b, 0);
        acc.write(2.0);
        let computed = acc.div_assign(3.0);
        assert_eq!(computed, 2.0 / 3.0);
        assert_eq!(acc.read(), truncate(2.0 / 3.0));
    }

    #[test]
    fn combined_compound_updates_are_exact() {
        let b = buffers(1);
        let acc = CombinedAccessor::new(&b, 0);
        acc.write(1.0);
        acc.add_assign(0.25);
        acc.sub_assign(0.5);
        acc.mul_assign(4);
        assert_eq!(acc.read(), 3.0);
    }

    #[test]
    fn reduced_into_combined_zeroes_tail() {
        let b = buffers(2);
        let src = ReducedAccessor::new(&b, 0);
        src.write(std::f64::consts::E);
        let dst = CombinedAccessor::new(&b, 1);
        dst.write(std::f64::consts::PI);
        assert_ne!(dst.tail_bits(), 0);

        dst.assign(&src);
        assert_eq!(dst.tail_bits(), 0);
        assert_eq!(dst.read(), truncate(std::f64::consts::E));
    }

    #[test]
    fn combined_into_reduced_copies_head_only() {
        let b = buffers(2);
        let src = CombinedAccessor::new(&b, 0);
        src.write(std::f64::consts::PI);
        b.store(1, SegmentPair::new(0, 7));
        let dst = ReducedAccessor::new(&b, 1);

        dst.assign(&src);
        assert_eq!(dst.head_bits(), src.head_bits());
        assert_eq!(b.load(1).tail, 7);
    }

    #[test]
    fn combined_into_combined_copies_both() {
        let b = buffers(2);
        let src = CombinedAccessor::new(&b, 0);
        src.write(-0.1);
        let dst = CombinedAccessor::new(&b, 1);
        dst.assign(&src);
        assert_eq!(dst.read(), -0.1);
    }

    #[test]
    fn accessors_alias_the_same_element() {
        let b = buffers(1);
        let a = CombinedAccessor::new(&b, 0);
        let c = a;
        a.write(42.0);
        assert_eq!(c.read(), 42.0);
        assert_eq!(a.as_reduced().read(), 42.0);
    }

    #[test]
    fn debug_shows_segments() {
        let b = buffers(1);
        let acc = CombinedAccessor::new(&b, 0);
        acc.write(1.0);
        let text = format!("{acc:?}");
        assert!(text.contains("0x3ff00000"));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "released storage")]
    fn access_after_release_panics_in_debug() {
        let b = buffers(1);
        b.mark_released();
        ReducedAccessor::new(&b, 0).read();
    }
}
