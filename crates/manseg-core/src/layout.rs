//! Head/tail split of an IEEE-754 double.
//!
//! The split is defined on the integer bit pattern returned by
//! [`f64::to_bits`], so it does not depend on the platform's byte order:
//! `head = bits >> 32` and `tail = bits & 0xFFFF_FFFF`. The head alone is a
//! self-contained lower-precision encoding (sign, full exponent, 20 mantissa
//! bits); the tail carries only the low 32 mantissa bits.

/// Number of bits the head is shifted left in the 64-bit pattern.
pub const HEAD_SHIFT: u32 = 32;

/// Mask selecting the tail bits of a 64-bit pattern.
pub const TAIL_MASK: u64 = 0x0000_0000_FFFF_FFFF;

/// Mask selecting the head bits of a 64-bit pattern.
pub const HEAD_MASK: u64 = 0xFFFF_FFFF_0000_0000;

/// Mantissa bits kept by the head segment.
pub const HEAD_MANTISSA_BITS: u32 = 20;

/// Mantissa bits carried by the tail segment.
pub const TAIL_MANTISSA_BITS: u32 = 32;

/// A double split into its two 32-bit segments.
///
/// `SegmentPair::split(v).join()` reproduces `v` bit for bit, including
/// signed zeros, infinities and NaN payloads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SegmentPair {
    /// Sign, exponent and top 20 mantissa bits.
    pub head: u32,
    /// Low 32 mantissa bits.
    pub tail: u32,
}

impl SegmentPair {
    /// The all-zero pair, encoding `+0.0`.
    pub const ZERO: Self = Self { head: 0, tail: 0 };

    /// Build a pair from explicit segments.
    pub const fn new(head: u32, tail: u32) -> Self {
        Self { head, tail }
    }

    /// Build a pair with the given head and a zero tail.
    pub const fn from_head(head: u32) -> Self {
        Self { head, tail: 0 }
    }

    /// Split a raw 64-bit pattern.
    pub const fn from_bits(bits: u64) -> Self {
        Self {
            head: (bits >> HEAD_SHIFT) as u32,
            tail: (bits & TAIL_MASK) as u32,
        }
    }

    /// Recombine into a raw 64-bit pattern.
    pub const fn to_bits(self) -> u64 {
        ((self.head as u64) << HEAD_SHIFT) | self.tail as u64
    }

    /// Split a double into head and tail.
    pub fn split(value: f64) -> Self {
        Self::from_bits(value.to_bits())
    }

    /// Reconstruct the double encoded by both segments.
    pub fn join(self) -> f64 {
        f64::from_bits(self.to_bits())
    }

    /// The same pair with the tail discarded.
    pub const fn truncated(self) -> Self {
        Self::from_head(self.head)
    }
}

impl From<f64> for SegmentPair {
    fn from(value: f64) -> Self {
        Self::split(value)
    }
}

impl From<SegmentPair> for f64 {
    fn from(pair: SegmentPair) -> Self {
        pair.join()
    }
}

/// Head segment of `value`.
pub fn head_of(value: f64) -> u32 {
    SegmentPair::split(value).head
}

/// Tail segment of `value`.
pub fn tail_of(value: f64) -> u32 {
    SegmentPair::split(value).tail
}

/// Decode a head segment on its own, treating the tail as zero.
pub fn from_head(head: u32) -> f64 {
    SegmentPair::from_head(head).join()
}

/// Truncate `value` to head precision (toward zero in magnitude, no rounding).
pub fn truncate(value: f64) -> f64 {
    f64::from_bits(value.to_bits() & HEAD_MASK)
}

/// Whether this platform stores the tail word before the head word in memory.
///
/// The split itself never relies on this; it is reported so callers that
/// reinterpret `f64` buffers as `u32` pairs can check their assumption.
pub fn native_tail_first() -> bool {
    let bytes = f64::from_bits(TAIL_MASK).to_ne_bytes();
    bytes[0] == 0xFF
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_has_known_head_and_zero_tail() {
        let pair = SegmentPair::split(1.0);
        assert_eq!(pair.head, 0x3FF0_0000);
        assert_eq!(pair.tail, 0);
    }

    #[test]
    fn negative_two_sets_sign_in_head() {
        let pair = SegmentPair::split(-2.0);
        assert_eq!(pair.head, 0xC000_0000);
        assert_eq!(pair.tail, 0);
    }

    #[test]
    fn low_mantissa_bits_land_in_tail() {
        let bits = 0x3FF0_0000_DEAD_BEEFu64;
        let pair = SegmentPair::from_bits(bits);
        assert_eq!(pair.head, 0x3FF0_0000);
        assert_eq!(pair.tail, 0xDEAD_BEEF);
        assert_eq!(pair.to_bits(), bits);
    }

    #[test]
    fn join_is_bit_exact_for_special_values() {
        for v in [0.0, -0.0, f64::INFINITY, f64::NEG_INFINITY, f64::MIN_POSITIVE, f64::MAX] {
            assert_eq!(SegmentPair::split(v).join().to_bits(), v.to_bits());
        }
        let nan = f64::from_bits(0x7FF8_0000_0000_1234);
        assert_eq!(SegmentPair::split(nan).join().to_bits(), nan.to_bits());
    }

    #[test]
    fn truncate_drops_only_tail() {
        let v = std::f64::consts::PI;
        let t = truncate(v);
        assert_eq!(head_of(t), head_of(v));
        assert_eq!(tail_of(t), 0);
        assert!(t.abs() <= v.abs());
        assert_eq!(from_head(head_of(v)), t);
    }

    #[test]
    fn truncate_is_toward_zero_for_negatives() {
        let v = -std::f64::consts::E;
        let t = truncate(v);
        assert!(t >= v);
        assert!(t < 0.0);
    }

    #[test]
    fn truncated_pair_clears_tail() {
        let pair = SegmentPair::new(7, 9).truncated();
        assert_eq!(pair, SegmentPair::from_head(7));
    }

    #[test]
    fn native_word_order_matches_target_endianness() {
        // Pins the in-memory layout: on little-endian targets the tail word
        // comes first, on big-endian the head word does.
        assert_eq!(native_tail_first(), cfg!(target_endian = "little"));

        let v = 1.5f64 + f64::EPSILON;
        let bytes = v.to_ne_bytes();
        let first = u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let second = u32::from_ne_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        let pair = SegmentPair::split(v);
        if native_tail_first() {
            assert_eq!((first, second), (pair.tail, pair.head));
        } else {
            assert_eq!((first, second), (pair.head, pair.tail));
        }
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn split_join_round_trips_any_bit_pattern(bits in any::<u64>()) {
                let pair = SegmentPair::from_bits(bits);
                prop_assert_eq!(pair.to_bits(), bits);
                prop_assert_eq!(SegmentPair::split(f64::from_bits(bits)).to_bits(), bits);
            }

            #[test]
            fn head_matches_upper_word(bits in any::<u64>()) {
                prop_assert_eq!(head_of(f64::from_bits(bits)), (bits >> 32) as u32);
                prop_assert_eq!(tail_of(f64::from_bits(bits)), bits as u32);
            }
        }
    }
}
