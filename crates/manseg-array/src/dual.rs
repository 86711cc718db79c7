//! Orchestrator bundling reduced, combined and materialized representations.
//!
//! A [`DualPrecisionArray`] owns one segment allocation and two views onto
//! it: a reduced view for early, memory-bound sweeps and a combined view
//! for in-place full-precision work later on. It can additionally
//! materialize an independent `f64` buffer for the fastest full-precision
//! access once reduced precision is no longer needed.
//!
//! # State machine
//!
//! ```text
//! Unallocated ─allocate─▶ SegmentsAllocated ◀─release_materialized─┐
//!                              │        │                           │
//!                              │    materialize ──▶ SegmentsAndMaterialized
//!                     release_segments                     │
//!                              │                   release_segments
//!                              ▼                           ▼
//!                          Released ◀─release_materialized─ MaterializedOnly
//! ```
//!
//! `allocate` from `Released` starts a fresh cycle.

use std::fmt;

use manseg_core::PrecisionMode;

use crate::array::{CombinedArray, ReducedArray};
use crate::config::ArrayConfig;
use crate::error::ArrayError;
use crate::materialize::materialize_into;

/// Lifecycle state of a [`DualPrecisionArray`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayState {
    /// Nothing has been allocated yet.
    Unallocated,
    /// Segment storage is live; no materialized buffer.
    SegmentsAllocated,
    /// Segment storage is live and a materialized buffer exists.
    SegmentsAndMaterialized,
    /// Segments have been released; the materialized buffer remains.
    MaterializedOnly,
    /// Both representations have been released.
    Released,
}

/// Reduced and combined views over shared segment storage, plus an
/// optional materialized `f64` buffer, under one shared length.
///
/// The array is the single owner of the segment storage: the two views it
/// exposes alias it, and [`release_segments`](Self::release_segments) is the
/// only release path callers need. Dropping the array releases everything;
/// views derived from it report [`ArrayError::StorageReleased`] afterwards.
#[derive(Default)]
pub struct DualPrecisionArray {
    heads: ReducedArray,
    pairs: CombinedArray,
    full: Option<Vec<f64>>,
    len: usize,
    config: ArrayConfig,
    ever_allocated: bool,
}

impl DualPrecisionArray {
    /// Allocate an array of `len` zeroed elements with the default config.
    pub fn new(len: usize) -> Result<Self, ArrayError> {
        Self::with_config(len, ArrayConfig::default())
    }

    /// Allocate an array of `len` zeroed elements.
    pub fn with_config(len: usize, config: ArrayConfig) -> Result<Self, ArrayError> {
        let mut array = Self::unallocated(config)?;
        array.allocate(len)?;
        Ok(array)
    }

    /// An array with no storage yet.
    pub fn unallocated(config: ArrayConfig) -> Result<Self, ArrayError> {
        config.validate()?;
        Ok(Self {
            heads: ReducedArray::unallocated(),
            pairs: CombinedArray::unallocated(),
            full: None,
            len: 0,
            config,
            ever_allocated: false,
        })
    }

    /// Allocate segment storage of length `len` and derive the combined view.
    ///
    /// Any previous segment storage is released and any materialized buffer
    /// is discarded: allocation starts a fresh cycle.
    pub fn allocate(&mut self, len: usize) -> Result<(), ArrayError> {
        if self.state() != ArrayState::Unallocated && self.state() != ArrayState::Released {
            log::warn!("manseg: re-allocating dual-precision array in state {:?}", self.state());
        }
        self.heads.release();
        self.pairs.release();
        self.full = None;
        self.len = 0;

        self.heads.allocate(len)?;
        self.pairs = self.heads.derive_combined_view()?;
        self.len = len;
        self.ever_allocated = true;
        Ok(())
    }

    /// Reduced-precision view (head segment only).
    pub fn reduced(&self) -> &ReducedArray {
        &self.heads
    }

    /// Full-precision view over the same storage (head and tail).
    pub fn combined(&self) -> &CombinedArray {
        &self.pairs
    }

    /// Alias for [`reduced`](Self::reduced).
    pub fn heads(&self) -> &ReducedArray {
        &self.heads
    }

    /// Alias for [`combined`](Self::combined).
    pub fn pairs(&self) -> &CombinedArray {
        &self.pairs
    }

    /// Read element `index` through the requested view.
    pub fn read(&self, index: usize, mode: PrecisionMode) -> Result<f64, ArrayError> {
        match mode {
            PrecisionMode::Reduced => self.heads.read(index),
            PrecisionMode::Full => self.pairs.read(index),
        }
    }

    /// Write element `index` through the requested view.
    pub fn set<T: Into<f64>>(
        &self,
        index: usize,
        value: T,
        mode: PrecisionMode,
    ) -> Result<(), ArrayError> {
        match mode {
            PrecisionMode::Reduced => self.heads.set(index, value),
            PrecisionMode::Full => self.pairs.set(index, value),
        }
    }

    /// Snapshot the current reduced-precision values into an independent
    /// `f64` buffer and return it.
    ///
    /// Later writes through either view are not reflected in the buffer;
    /// call this again to refresh it. The existing buffer is reused when
    /// there is one; if the new allocation fails, the old snapshot is gone.
    pub fn materialize_full_precision(&mut self) -> Result<&mut [f64], ArrayError> {
        // Fail before touching an existing snapshot.
        self.heads.buffers()?;
        if self.heads.is_empty() {
            log::warn!("manseg: materializing an empty array");
        }
        let mut buffer = self.full.take().unwrap_or_default();
        materialize_into(&self.heads, &self.config, &mut buffer)?;
        Ok(self.full.insert(buffer).as_mut_slice())
    }

    /// The materialized buffer, if one exists.
    pub fn materialized(&self) -> Option<&[f64]> {
        self.full.as_deref()
    }

    /// Mutable access to the materialized buffer, if one exists.
    pub fn materialized_mut(&mut self) -> Option<&mut [f64]> {
        self.full.as_deref_mut()
    }

    /// Whether a materialized buffer exists.
    pub fn has_materialized(&self) -> bool {
        self.full.is_some()
    }

    /// Release the segment storage. Idempotent.
    ///
    /// The length is kept while a materialized buffer still depends on it.
    pub fn release_segments(&mut self) {
        self.heads.release();
        self.pairs.release();
        if self.full.is_none() {
            self.len = 0;
        }
    }

    /// Drop the materialized buffer, if any. Idempotent.
    ///
    /// The length resets once the segment storage is gone too.
    pub fn release_materialized(&mut self) {
        if let Some(buffer) = self.full.take() {
            log::debug!("manseg: released materialized buffer, len={}", buffer.len());
        }
        if !self.heads.is_allocated() {
            self.len = 0;
        }
    }

    /// Whether segment storage is live.
    pub fn is_allocated(&self) -> bool {
        self.heads.is_allocated()
    }

    /// Shared length of all live representations.
    ///
    /// 0 once both are gone, including when the segments were released
    /// through a derived view.
    pub fn len(&self) -> usize {
        if self.heads.is_allocated() || self.full.is_some() {
            self.len
        } else {
            0
        }
    }

    /// Whether the shared length is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ArrayState {
        match (self.heads.is_allocated(), self.full.is_some()) {
            (true, false) => ArrayState::SegmentsAllocated,
            (true, true) => ArrayState::SegmentsAndMaterialized,
            (false, true) => ArrayState::MaterializedOnly,
            (false, false) if self.ever_allocated => ArrayState::Released,
            (false, false) => ArrayState::Unallocated,
        }
    }

    /// Materialization config.
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// Memory held by segment storage and the materialized buffer, in bytes.
    pub fn memory_bytes(&self) -> usize {
        let full = self
            .full
            .as_ref()
            .map_or(0, |b| b.len() * std::mem::size_of::<f64>());
        self.heads.memory_bytes() + full
    }
}

impl fmt::Debug for DualPrecisionArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DualPrecisionArray")
            .field("state", &self.state())
            .field("len", &self.len())
            .field("config", &self.config)
            .finish()
    }
}

impl Drop for DualPrecisionArray {
    fn drop(&mut self) {
        self.release_segments();
    }
}
