//! Segmented arrays: reduced and combined views over head/tail buffers.
//!
//! [`SegmentedArray<P>`] is one view onto a [`SegmentBuffers`] allocation.
//! The precision kind `P` decides which accessor [`SegmentedArray::at`]
//! returns. A reduced array can be upgraded in place with
//! [`SegmentedArray::derive_combined_view`], which shares the buffers rather
//! than copying them.
//!
//! # Release authority
//!
//! Any view may call [`SegmentedArray::release`]. It clears the shared
//! `live` flag, so every other alias starts returning
//! [`ArrayError::StorageReleased`]. Callers should still designate one view
//! as the release authority; the buffers themselves are freed when the last
//! alias is dropped or released.

use std::fmt;
use std::marker::PhantomData;

use manseg_core::{PrecisionMode, SegmentPair, SegmentRead, SegmentWrite};

use crate::error::ArrayError;
use crate::kind::{Combined, Precision, Reduced};
use crate::storage::{SegmentBuffers, StorageHandle};

/// One precision view of a segmented `f64` array.
pub struct SegmentedArray<P: Precision> {
    storage: StorageHandle,
    _precision: PhantomData<P>,
}

/// Array whose accessors read and write the head segment only.
pub type ReducedArray = SegmentedArray<Reduced>;

/// Array whose accessors read and write head and tail.
pub type CombinedArray = SegmentedArray<Combined>;

/// Alias for [`ReducedArray`].
pub type HeadsArray = ReducedArray;

/// Alias for [`CombinedArray`].
pub type PairsArray = CombinedArray;

// Compile-time assertion: views can be shared across worker threads.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<ReducedArray>();
    assert::<CombinedArray>();
};

impl<P: Precision> SegmentedArray<P> {
    /// An array with no storage. Call [`allocate`](Self::allocate) before use.
    pub fn unallocated() -> Self {
        Self::from_storage(StorageHandle::default())
    }

    /// Allocate an array of `len` zeroed elements.
    pub fn new(len: usize) -> Result<Self, ArrayError> {
        let mut array = Self::unallocated();
        array.allocate(len)?;
        Ok(array)
    }

    pub(crate) fn from_storage(storage: StorageHandle) -> Self {
        Self {
            storage,
            _precision: PhantomData,
        }
    }

    /// Allocate zeroed head and tail buffers of length `len`.
    ///
    /// Allocating over live storage detaches this view from it; the old
    /// buffers stay alive for any other alias until that alias is released
    /// or dropped. Doing so while aliases still expect to share storage with
    /// this view is a caller error.
    pub fn allocate(&mut self, len: usize) -> Result<(), ArrayError> {
        self.storage.allocate(len)
    }

    /// Whether this view has live storage.
    pub fn is_allocated(&self) -> bool {
        self.storage.is_allocated()
    }

    /// Number of elements, or 0 when unallocated or released.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the array holds no readable elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Precision of the accessors this array returns.
    pub fn precision(&self) -> PrecisionMode {
        P::MODE
    }

    /// Accessor bound to element `index`.
    pub fn at(&self, index: usize) -> Result<P::Accessor<'_>, ArrayError> {
        let buffers = self.storage.checked(index)?;
        Ok(P::bind(buffers, index))
    }

    /// Read element `index` at this view's precision.
    pub fn read(&self, index: usize) -> Result<f64, ArrayError> {
        Ok(self.at(index)?.read())
    }

    /// Write element `index` at this view's precision.
    pub fn set<T: Into<f64>>(&self, index: usize, value: T) -> Result<(), ArrayError> {
        self.at(index)?.write(value);
        Ok(())
    }

    /// Write both segments of element `index`, whatever this view's precision.
    ///
    /// Lets a reduced view seed full-precision values that a later combined
    /// view reads back exactly.
    pub fn set_pair<T: Into<f64>>(&self, index: usize, value: T) -> Result<(), ArrayError> {
        let buffers = self.storage.checked(index)?;
        buffers.store(index, SegmentPair::split(value.into()));
        Ok(())
    }

    /// Raw head and tail words stored at `index`, independent of precision.
    pub fn segments(&self, index: usize) -> Result<SegmentPair, ArrayError> {
        Ok(self.storage.checked(index)?.load(index))
    }

    /// Copy every element, at this view's precision, into `out`.
    pub fn read_into(&self, out: &mut [f64]) -> Result<(), ArrayError> {
        let buffers = self.storage.buffers()?;
        if out.len() != buffers.len() {
            return Err(ArrayError::LengthMismatch {
                expected: buffers.len(),
                actual: out.len(),
            });
        }
        for (index, slot) in out.iter_mut().enumerate() {
            *slot = P::bind(buffers, index).read();
        }
        Ok(())
    }

    /// Every element at this view's precision.
    pub fn to_vec(&self) -> Result<Vec<f64>, ArrayError> {
        let buffers = self.storage.buffers()?;
        Ok((0..buffers.len())
            .map(|index| P::bind(buffers, index).read())
            .collect())
    }

    /// Write `value` to every element at this view's precision.
    pub fn fill<T: Into<f64>>(&self, value: T) -> Result<(), ArrayError> {
        let buffers = self.storage.buffers()?;
        let pair = SegmentPair::split(value.into());
        for index in 0..buffers.len() {
            P::bind(buffers, index).write_segments(pair);
        }
        Ok(())
    }

    /// A combined view over the same buffers. Nothing is copied.
    pub fn derive_combined_view(&self) -> Result<CombinedArray, ArrayError> {
        let alias = self.storage.alias()?;
        log::debug!("manseg: derived combined view, len={}", alias.len());
        Ok(CombinedArray::from_storage(alias))
    }

    /// A reduced view over the same buffers. Nothing is copied.
    pub fn derive_reduced_view(&self) -> Result<ReducedArray, ArrayError> {
        Ok(ReducedArray::from_storage(self.storage.alias()?))
    }

    /// Whether `other` aliases the same buffers as this view.
    pub fn shares_storage_with<Q: Precision>(&self, other: &SegmentedArray<Q>) -> bool {
        self.storage.ptr_eq(&other.storage)
    }

    /// Number of views holding this storage, including this one.
    pub fn alias_count(&self) -> usize {
        self.storage.alias_count()
    }

    /// Release the storage for every alias and detach this view.
    ///
    /// Idempotent: releasing an unallocated or already released view is a
    /// no-op.
    pub fn release(&mut self) {
        if !self.storage.release() {
            log::trace!("manseg: release on {:?} view without storage", P::MODE);
        }
    }

    /// Memory held by the buffers behind this view, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.storage
            .buffers()
            .map_or(0, SegmentBuffers::memory_bytes)
    }

    pub(crate) fn buffers(&self) -> Result<&SegmentBuffers, ArrayError> {
        self.storage.buffers()
    }
}

impl<P: Precision> Default for SegmentedArray<P> {
    fn default() -> Self {
        Self::unallocated()
    }
}

impl<P: Precision> fmt::Debug for SegmentedArray<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentedArray")
            .field("precision", &P::MODE)
            .field("len", &self.len())
            .field("allocated", &self.is_allocated())
            .finish()
    }
}
