//! Whole-array complex block operations.
//!
//! The original hardware exposes headroom query, in-place power-of-two
//! rescale and rescale-with-bit-reversal over a complex array as a platform
//! capability. Here that surface is a trait so an accelerated backend can be
//! slotted in at build time; the portable scalar implementation is always
//! available and is the reference for observable behavior.
//!
//! # Contract requirements
//!
//! 1. **Functional equivalence**: every backend must produce results
//!    identical to [`ScalarBlockOps`].
//! 2. **No allocations**: all operations work in place on the caller's
//!    buffer.
//! 3. **Copy semantics**: backends are zero-sized types.

pub mod scalar;

pub use scalar::ScalarBlockOps;

use crate::complex::ComplexI32;

/// Whole-array operations over complex 32-bit blocks.
///
/// Note the sign convention: `shift` here is a LEFT shift when positive
/// (increase magnitude, consume headroom), the opposite of the kernels'
/// [`shr`](crate::shift::ArithShift::shr) request direction. A sequence
///
/// ```
/// use altair_bfp::{ComplexBlockOps, ComplexI32, DefaultBlockOps};
///
/// let mut pts = [ComplexI32::new(3 << 8, -(1 << 10)); 4];
/// let hr = DefaultBlockOps::headroom(&pts);
/// DefaultBlockOps::rescale(&mut pts, hr as i32);
/// assert_eq!(DefaultBlockOps::headroom(&pts), 0);
/// ```
///
/// leaves the block with no redundant sign bits, maximizing dynamic range.
pub trait ComplexBlockOps: Copy {
    /// Joint headroom of the whole array; agrees with
    /// [`cls_vect_complex_i32`](crate::bitcount::cls_vect_complex_i32).
    fn headroom(pts: &[ComplexI32]) -> u32;

    /// In-place rescale of every element by `2^shift` (positive = left).
    ///
    /// The caller must ensure a positive `shift` does not exceed the
    /// array's headroom.
    fn rescale(pts: &mut [ComplexI32], shift: i32);

    /// In-place rescale with independent real and imaginary shifts.
    fn rescale_split(pts: &mut [ComplexI32], shift_re: i32, shift_im: i32);

    /// Rescale combined with the bit-reversal index permutation used to
    /// prepare a block for a radix transform.
    ///
    /// # Panics
    ///
    /// Panics if the length is not a power of two.
    fn rescale_bit_reverse(pts: &mut [ComplexI32], shift: i32);

    /// Backend identifier for debugging and logging.
    fn name() -> &'static str;
}

/// The backend selected for this build.
///
/// Accelerated implementations replace this alias behind their feature
/// flags; the portable scalar backend is the default.
pub type DefaultBlockOps = ScalarBlockOps;
