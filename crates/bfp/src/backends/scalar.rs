//! Portable scalar backend.
//!
//! Reference implementation of the whole-array complex operations; any
//! accelerated backend must match its results bit for bit.

use crate::backends::ComplexBlockOps;
use crate::bitcount::cls_vect_complex_i32;
use crate::complex::ComplexI32;
use crate::shift::ArithShift;

/// The always-available scalar backend.
#[derive(Debug, Clone, Copy)]
pub struct ScalarBlockOps;

impl ComplexBlockOps for ScalarBlockOps {
    #[inline]
    fn headroom(pts: &[ComplexI32]) -> u32 {
        cls_vect_complex_i32(pts)
    }

    fn rescale(pts: &mut [ComplexI32], shift: i32) {
        for p in pts {
            p.re = p.re.shr(-shift);
            p.im = p.im.shr(-shift);
        }
    }

    fn rescale_split(pts: &mut [ComplexI32], shift_re: i32, shift_im: i32) {
        for p in pts {
            p.re = p.re.shr(-shift_re);
            p.im = p.im.shr(-shift_im);
        }
    }

    fn rescale_bit_reverse(pts: &mut [ComplexI32], shift: i32) {
        assert!(
            pts.len().is_power_of_two(),
            "block length must be a power of two"
        );
        Self::rescale(pts, shift);

        let bits = pts.len().trailing_zeros();
        if bits == 0 {
            return;
        }
        for i in 0..pts.len() {
            let j = i.reverse_bits() >> (usize::BITS - bits);
            if i < j {
                pts.swap(i, j);
            }
        }
    }

    #[inline]
    fn name() -> &'static str {
        "scalar"
    }
}
