//! Vector multiplication, real and complex.

use crate::complex::ComplexI32;
use crate::element::Mantissa;
use crate::kernels::{headroom_from_mask, Scale, MUL_GUARD_BITS};
use crate::shift::ArithShift;
use crate::ZERO_EXP;

/// Plain elementwise fixed-point multiplication.
///
/// Each product is formed in a 64-bit accumulator and shifted right by
/// `BITS - 2` to fold the fixed-point scaling back into the element width,
/// truncating on narrow.
///
/// # Panics
///
/// Panics if the three slices differ in length.
pub fn mul<T: Mantissa>(a: &mut [T], b: &[T], c: &[T]) {
    assert_eq!(a.len(), b.len(), "output and first input differ in length");
    assert_eq!(a.len(), c.len(), "output and second input differ in length");

    for ((a, &b), &c) in a.iter_mut().zip(b).zip(c) {
        *a = T::narrow((b.widen() * c.widen()) >> T::PRODUCT_SHIFT);
    }
}

/// Block-floating-point vector multiplication.
///
/// Unlike add/sub there is no alignment step: scales simply add. Each
/// operand is pre-shifted right by its headroom plus one guard bit, the
/// widened product is shifted back by `BITS - 2`, and the output exponent
/// accounts for every shift applied:
/// `b_exp + c_exp + shr_b + shr_c + BITS - 2`.
///
/// A zero-length input yields a zero-length output with the maximal
/// headroom for the width and the [`ZERO_EXP`](crate::ZERO_EXP) exponent.
///
/// # Panics
///
/// Panics if the three slices differ in length.
pub fn mul_bfp<T: Mantissa>(
    a: &mut [T],
    b: &[T],
    b_exp: i32,
    b_hr: u32,
    c: &[T],
    c_exp: i32,
    c_hr: u32,
) -> Scale {
    assert_eq!(a.len(), b.len(), "output and first input differ in length");
    assert_eq!(a.len(), c.len(), "output and second input differ in length");

    let shr_b = b_hr as i32 + MUL_GUARD_BITS as i32;
    let shr_c = c_hr as i32 + MUL_GUARD_BITS as i32;
    let exp = b_exp + c_exp + shr_b + shr_c + T::BITS as i32 - 2 * MUL_GUARD_BITS as i32;

    let mut mask: u32 = 0;
    for ((a, &b), &c) in a.iter_mut().zip(b).zip(c) {
        let v = T::narrow((b.shr(shr_b).widen() * c.shr(shr_c).widen()) >> T::PRODUCT_SHIFT);
        *a = v;
        mask |= v.magnitude();
    }

    Scale {
        exp: if a.is_empty() { ZERO_EXP } else { exp },
        hr: headroom_from_mask::<T>(mask),
    }
}

/// Block-floating-point complex vector multiplication (32-bit components).
///
/// `re = br*cr - bi*ci`, `im = br*ci + bi*cr`, every term a 64-bit product
/// of pre-shifted operands and each final component shifted right by 30.
/// The input headrooms must hold jointly for both components (as reported
/// by [`cls_vect_complex_i32`](crate::bitcount::cls_vect_complex_i32));
/// the output headroom is likewise reduced across re and im of every
/// element.
///
/// # Panics
///
/// Panics if the three slices differ in length.
pub fn mul_bfp_complex(
    a: &mut [ComplexI32],
    b: &[ComplexI32],
    b_exp: i32,
    b_hr: u32,
    c: &[ComplexI32],
    c_exp: i32,
    c_hr: u32,
) -> Scale {
    assert_eq!(a.len(), b.len(), "output and first input differ in length");
    assert_eq!(a.len(), c.len(), "output and second input differ in length");

    let shr_b = b_hr as i32 + MUL_GUARD_BITS as i32;
    let shr_c = c_hr as i32 + MUL_GUARD_BITS as i32;
    let exp = b_exp + c_exp + shr_b + shr_c + 32 - 2 * MUL_GUARD_BITS as i32;

    let mut mask: u32 = 0;
    for ((a, &b), &c) in a.iter_mut().zip(b).zip(c) {
        let br = i64::from(b.re.shr(shr_b));
        let bi = i64::from(b.im.shr(shr_b));
        let cr = i64::from(c.re.shr(shr_c));
        let ci = i64::from(c.im.shr(shr_c));

        let re = ((br * cr - bi * ci) >> 30) as i32;
        let im = ((br * ci + bi * cr) >> 30) as i32;

        *a = ComplexI32 { re, im };
        mask |= re.unsigned_abs() | im.unsigned_abs();
    }

    Scale {
        exp: if a.is_empty() { ZERO_EXP } else { exp },
        hr: headroom_from_mask::<i32>(mask),
    }
}
