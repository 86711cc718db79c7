//! Accessor traits for reading and writing one segmented element.
//!
//! Implemented by the accessor types in `manseg-array`. A reduced accessor
//! reports a zero tail and only ever stores the head; a combined accessor
//! covers both segments. All arithmetic is carried out in `f64` and written
//! back through the same accessor, so a reduced accessor truncates on every
//! write-back.

use crate::layout::SegmentPair;

/// Read access to one segmented element.
pub trait SegmentRead {
    /// The segments visible through this accessor.
    ///
    /// Reduced accessors always report a zero tail.
    fn segments(&self) -> SegmentPair;

    /// Head segment bits.
    fn head_bits(&self) -> u32 {
        self.segments().head
    }

    /// Tail segment bits as seen by this accessor.
    fn tail_bits(&self) -> u32 {
        self.segments().tail
    }

    /// Decode the element as a double.
    fn read(&self) -> f64 {
        self.segments().join()
    }
}

/// Write access to one segmented element.
///
/// Writes take `&self`: accessors are non-owning views and the storage
/// behind them tolerates shared mutation. Concurrent writes to the same
/// element are a caller error.
pub trait SegmentWrite: SegmentRead {
    /// Store the segments this accessor covers, ignoring the rest.
    fn write_segments(&self, pair: SegmentPair);

    /// Store `value`. Reduced accessors keep only the truncated head.
    fn write<T: Into<f64>>(&self, value: T) {
        self.write_segments(SegmentPair::split(value.into()));
    }

    /// Copy `src`'s visible segments into this element.
    ///
    /// Reduced into combined clears the tail; combined into reduced copies
    /// the head and drops the tail.
    fn assign<S: SegmentRead + ?Sized>(&self, src: &S) {
        self.write_segments(src.segments());
    }

    /// Read, apply `f` in `f64`, write back. Returns the computed value
    /// before any truncation on write-back.
    fn update<F: FnOnce(f64) -> f64>(&self, f: F) -> f64 {
        let value = f(self.read());
        self.write(value);
        value
    }

    /// `self += rhs`.
    fn add_assign<T: Into<f64>>(&self, rhs: T) -> f64 {
        let rhs = rhs.into();
        self.update(|v| v + rhs)
    }

    /// `self -= rhs`.
    fn sub_assign<T: Into<f64>>(&self, rhs: T) -> f64 {
        let rhs = rhs.into();
        self.update(|v| v - rhs)
    }

    /// `self *= rhs`.
    fn mul_assign<T: Into<f64>>(&self, rhs: T) -> f64 {
        let rhs = rhs.into();
        self.update(|v| v * rhs)
    }

    /// `self /= rhs`.
    fn div_assign<T: Into<f64>>(&self, rhs: T) -> f64 {
        let rhs = rhs.into();
        self.update(|v| v / rhs)
    }
}
