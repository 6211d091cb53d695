//! Leading-zero and leading-sign bit counting.
//!
//! These counts drive every rescaling decision in the crate: `clz` over
//! unsigned values, `cls` over signed values. `cls(x)` is the number of bits
//! `x` can be left-shifted without changing sign, so it is exactly the
//! headroom of a single mantissa.
//!
//! The vector forms report the worst case across all elements. Rather than
//! taking a per-element minimum, they OR the element magnitudes into one
//! accumulator and count once: OR never discards a high set bit, so the
//! result equals `min_i clz(|x_i|)` at a fraction of the cost. The signed
//! reductions then subtract one guard bit and the element-width offset to
//! express the count relative to the element's own width.

use crate::complex::{ChPairI16, ChPairI32, ComplexI16, ComplexI32};

/// Leading zero count of a 16-bit unsigned value. `clz(0) == 16`.
#[inline(always)]
pub fn clz_u16(d: u16) -> u32 {
    d.leading_zeros()
}

/// Leading zero count of a 32-bit unsigned value. `clz(0) == 32`.
#[inline(always)]
pub fn clz_u32(d: u32) -> u32 {
    d.leading_zeros()
}

/// Leading zero count of a 64-bit unsigned value. `clz(0) == 64`.
#[inline(always)]
pub fn clz_u64(d: u64) -> u32 {
    d.leading_zeros()
}

/// Redundant sign bits of an 8-bit signed value.
#[inline(always)]
pub fn cls_i8(d: i8) -> u32 {
    (d ^ (d << 1)).leading_zeros()
}

/// Redundant sign bits of a 16-bit signed value.
///
/// The count of bits `d` can be left-shifted without flipping its sign;
/// `cls(d) == cls(!d)`, `cls(-1) == 15`, `cls(0) == 16`.
#[inline(always)]
pub fn cls_i16(d: i16) -> u32 {
    (d ^ (d << 1)).leading_zeros()
}

/// Redundant sign bits of a 32-bit signed value.
#[inline(always)]
pub fn cls_i32(d: i32) -> u32 {
    (d ^ (d << 1)).leading_zeros()
}

/// Redundant sign bits of a 64-bit signed value.
#[inline(always)]
pub fn cls_i64(d: i64) -> u32 {
    (d ^ (d << 1)).leading_zeros()
}

/// Joint headroom of a 16-bit complex element.
///
/// The OR of both components' magnitudes bounds the worst case, so the
/// returned count is safe for shifting re and im simultaneously.
#[inline(always)]
pub fn cls_complex_i16(d: ComplexI16) -> u32 {
    let mag = u32::from(d.re.unsigned_abs()) | u32::from(d.im.unsigned_abs());
    clz_u32(mag).saturating_sub(1 + 16)
}

/// Joint headroom of a 32-bit complex element.
#[inline(always)]
pub fn cls_complex_i32(d: ComplexI32) -> u32 {
    let mag = d.re.unsigned_abs() | d.im.unsigned_abs();
    clz_u32(mag).saturating_sub(1)
}

/// Redundant sign bits of one channel of a 16-bit channel pair.
///
/// # Panics
///
/// Panics if `channel > 1`.
#[inline(always)]
pub fn cls_ch_pair_i16(d: ChPairI16, channel: usize) -> u32 {
    cls_i16(d.channel(channel))
}

/// Redundant sign bits of one channel of a 32-bit channel pair.
///
/// # Panics
///
/// Panics if `channel > 1`.
#[inline(always)]
pub fn cls_ch_pair_i32(d: ChPairI32, channel: usize) -> u32 {
    cls_i32(d.channel(channel))
}

/// Worst-case `clz` across a slice of 16-bit unsigned values.
///
/// An empty slice reports the maximal count, 16.
pub fn clz_vect_u16(d: &[u16]) -> u32 {
    let mut acc: u16 = 0;
    for &x in d {
        acc |= x;
    }
    acc.leading_zeros()
}

/// Worst-case `clz` across a slice of 32-bit unsigned values.
pub fn clz_vect_u32(d: &[u32]) -> u32 {
    let mut acc: u32 = 0;
    for &x in d {
        acc |= x;
    }
    acc.leading_zeros()
}

/// Worst-case `clz` across a slice of 64-bit unsigned values.
pub fn clz_vect_u64(d: &[u64]) -> u32 {
    let mut acc: u64 = 0;
    for &x in d {
        acc |= x;
    }
    acc.leading_zeros()
}

/// Worst-case headroom across a slice of 8-bit mantissas.
///
/// An empty or all-zero slice reports the maximal usable headroom, 7.
pub fn cls_vect_i8(d: &[i8]) -> u32 {
    let mut mask: u32 = 0;
    for &x in d {
        mask |= u32::from(x.unsigned_abs());
    }
    clz_u32(mask).saturating_sub(1 + 24)
}

/// Worst-case headroom across a slice of 16-bit mantissas.
///
/// Never overstates the shift-safety margin of any element. An empty or
/// all-zero slice reports the maximal usable headroom, 15.
pub fn cls_vect_i16(d: &[i16]) -> u32 {
    let mut mask: u32 = 0;
    for &x in d {
        mask |= u32::from(x.unsigned_abs());
    }
    clz_u32(mask).saturating_sub(1 + 16)
}

/// Worst-case headroom across a slice of 32-bit mantissas.
///
/// An empty or all-zero slice reports the maximal usable headroom, 31.
pub fn cls_vect_i32(d: &[i32]) -> u32 {
    let mut mask: u32 = 0;
    for &x in d {
        mask |= x.unsigned_abs();
    }
    clz_u32(mask).saturating_sub(1)
}

/// Worst-case joint headroom across a slice of 16-bit complex elements.
///
/// Reduces across both components of every element, so the count is safe
/// for scaling re and im together.
pub fn cls_vect_complex_i16(d: &[ComplexI16]) -> u32 {
    let mut mask: u32 = 0;
    for &x in d {
        mask |= u32::from(x.re.unsigned_abs()) | u32::from(x.im.unsigned_abs());
    }
    clz_u32(mask).saturating_sub(1 + 16)
}

/// Worst-case joint headroom across a slice of 32-bit complex elements.
pub fn cls_vect_complex_i32(d: &[ComplexI32]) -> u32 {
    let mut mask: u32 = 0;
    for &x in d {
        mask |= x.re.unsigned_abs() | x.im.unsigned_abs();
    }
    clz_u32(mask).saturating_sub(1)
}

/// Worst-case headroom of one channel across a slice of 16-bit pairs.
///
/// # Panics
///
/// Panics if `channel > 1`.
pub fn cls_vect_ch_pair_i16(d: &[ChPairI16], channel: usize) -> u32 {
    assert!(channel < 2, "channel index must be 0 or 1");
    let mut mask: u32 = 0;
    for &x in d {
        mask |= u32::from(x.channel(channel).unsigned_abs());
    }
    clz_u32(mask).saturating_sub(1 + 16)
}

/// Worst-case headroom of one channel across a slice of 32-bit pairs.
///
/// # Panics
///
/// Panics if `channel > 1`.
pub fn cls_vect_ch_pair_i32(d: &[ChPairI32], channel: usize) -> u32 {
    assert!(channel < 2, "channel index must be 0 or 1");
    let mut mask: u32 = 0;
    for &x in d {
        mask |= x.channel(channel).unsigned_abs();
    }
    clz_u32(mask).saturating_sub(1)
}
