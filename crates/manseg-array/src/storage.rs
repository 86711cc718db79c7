//! Head/tail word buffers shared by aliasing array views.
//!
//! [`SegmentBuffers`] holds two equal-length `AtomicU32` buffers and a
//! `live` flag. Views hold it through an `Arc`, so deriving a combined view
//! from a reduced one is a reference-count bump and the memory is freed
//! exactly once, when the last alias drops. Releasing through one view
//! clears `live`; every other alias then reports
//! [`ArrayError::StorageReleased`] instead of touching the buffers.
//!
//! All loads and stores use `Relaxed` ordering. Words are independent and
//! the caller partitions indices across workers, so no ordering between
//! words is promised.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use manseg_core::SegmentPair;

use crate::error::ArrayError;

/// Zero-initialised head and tail buffers for `len` segmented doubles.
pub struct SegmentBuffers {
    heads: Box<[AtomicU32]>,
    tails: Box<[AtomicU32]>,
    live: AtomicBool,
}

/// Shared handle to a [`SegmentBuffers`] allocation.
pub type SharedSegments = Arc<SegmentBuffers>;

impl SegmentBuffers {
    /// Allocate zeroed buffers for `len` elements.
    ///
    /// Returns [`ArrayError::AllocationFailed`] instead of aborting when the
    /// allocator refuses either buffer.
    pub fn zeroed(len: usize) -> Result<Self, ArrayError> {
        Ok(Self {
            heads: zeroed_words(len)?,
            tails: zeroed_words(len)?,
            live: AtomicBool::new(true),
        })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.heads.len()
    }

    /// Whether the buffers hold zero elements.
    pub fn is_empty(&self) -> bool {
        self.heads.is_empty()
    }

    /// Whether the release authority has not yet released this storage.
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    pub(crate) fn mark_released(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Load the head word at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn load_head(&self, index: usize) -> u32 {
        self.heads[index].load(Ordering::Relaxed)
    }

    /// Load both words at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn load(&self, index: usize) -> SegmentPair {
        SegmentPair::new(
            self.heads[index].load(Ordering::Relaxed),
            self.tails[index].load(Ordering::Relaxed),
        )
    }

    /// Store the head word at `index`, leaving the tail untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn store_head(&self, index: usize, head: u32) {
        self.heads[index].store(head, Ordering::Relaxed);
    }

    /// Store both words at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn store(&self, index: usize, pair: SegmentPair) {
        self.heads[index].store(pair.head, Ordering::Relaxed);
        self.tails[index].store(pair.tail, Ordering::Relaxed);
    }

    /// Memory usage of both buffers in bytes.
    pub fn memory_bytes(&self) -> usize {
        2 * self.len() * std::mem::size_of::<u32>()
    }
}

impl fmt::Debug for SegmentBuffers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentBuffers")
            .field("len", &self.len())
            .field("live", &self.is_live())
            .finish()
    }
}

fn zeroed_words(len: usize) -> Result<Box<[AtomicU32]>, ArrayError> {
    let mut words = Vec::new();
    words
        .try_reserve_exact(len)
        .map_err(|_| ArrayError::AllocationFailed {
            requested: len.saturating_mul(std::mem::size_of::<u32>()),
        })?;
    words.resize_with(len, || AtomicU32::new(0));
    Ok(words.into_boxed_slice())
}

/// One view's reference to shared segment storage.
///
/// Empty until allocated; emptied again by [`StorageHandle::release`].
#[derive(Clone, Debug, Default)]
pub(crate) struct StorageHandle {
    shared: Option<SharedSegments>,
}

impl StorageHandle {
    /// Replace this handle's storage with fresh zeroed buffers.
    pub(crate) fn allocate(&mut self, len: usize) -> Result<(), ArrayError> {
        if self.is_allocated() {
            log::warn!("manseg: allocating {len} elements over live segment storage");
        }
        let buffers = SegmentBuffers::zeroed(len)?;
        log::debug!(
            "manseg: allocated segment storage, len={len}, bytes={}",
            buffers.memory_bytes()
        );
        self.shared = Some(Arc::new(buffers));
        Ok(())
    }

    /// A second handle onto the same buffers.
    pub(crate) fn alias(&self) -> Result<Self, ArrayError> {
        self.buffers()?;
        Ok(self.clone())
    }

    /// Mark the storage released for every alias and drop this reference.
    ///
    /// Returns `false` when there was nothing to release.
    pub(crate) fn release(&mut self) -> bool {
        match self.shared.take() {
            Some(buffers) => {
                if buffers.is_live() {
                    log::debug!("manseg: released segment storage, len={}", buffers.len());
                }
                buffers.mark_released();
                true
            }
            None => false,
        }
    }

    pub(crate) fn is_allocated(&self) -> bool {
        self.shared.as_ref().is_some_and(|b| b.is_live())
    }

    /// The live buffers behind this handle.
    pub(crate) fn buffers(&self) -> Result<&SegmentBuffers, ArrayError> {
        match &self.shared {
            None => Err(ArrayError::NotAllocated),
            Some(buffers) if !buffers.is_live() => Err(ArrayError::StorageReleased),
            Some(buffers) => Ok(buffers.as_ref()),
        }
    }

    /// The live buffers, after checking `index` against their length.
    pub(crate) fn checked(&self, index: usize) -> Result<&SegmentBuffers, ArrayError> {
        let buffers = self.buffers()?;
        if index >= buffers.len() {
            return Err(ArrayError::IndexOutOfBounds {
                index,
                len: buffers.len(),
            });
        }
        Ok(buffers)
    }

    /// Length of the live storage, or 0.
    pub(crate) fn len(&self) -> usize {
        self.buffers().map_or(0, SegmentBuffers::len)
    }

    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.shared, &other.shared) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Number of handles referencing this storage, including this one.
    pub(crate) fn alias_count(&self) -> usize {
        self.shared.as_ref().map_or(0, Arc::strong_count)
    }
}
