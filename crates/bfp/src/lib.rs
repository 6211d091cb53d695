#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! altair-bfp: block-floating-point vector arithmetic for fixed-point DSP
//!
//! A BFP vector is a slice of same-width integer mantissas paired with one
//! exponent and one headroom count. The represented value of element `i` is
//! `mantissa[i] * 2^exponent`; the headroom is the number of bits every
//! element can be left-shifted without changing sign or overflowing. The
//! kernels in this crate combine two such vectors into a correctly rescaled
//! result and report the output's exponent/headroom pair, so a caller can
//! chain operations without ever losing track of scale.
//!
//! Layering, leaf first:
//!
//! - [`bitcount`] - leading-zero (`clz`) and leading-sign (`cls`) counts,
//!   scalar and vector, including complex and channel-pair variants
//! - [`shift`] - the signed-direction shift primitive all kernels share
//! - [`kernels`] - plain and BFP add/sub/mul for 8/16/32-bit mantissas,
//!   plus the complex 32-bit multiply
//! - [`backends`] - the whole-array complex rescale capability surface

// Bit counting primitives
pub mod bitcount;

// Signed-direction shifting
pub mod shift;

// Mantissa element abstraction
pub mod element;

// Complex and channel-pair element types
pub mod complex;

// Arithmetic kernels
pub mod kernels;

// Whole-array complex block backends
pub mod backends;

// Public re-exports for convenience
pub use backends::{ComplexBlockOps, DefaultBlockOps, ScalarBlockOps};
pub use complex::{ChPairI16, ChPairI32, ComplexI16, ComplexI32};
pub use element::Mantissa;
pub use kernels::{add, add_bfp, mul, mul_bfp, mul_bfp_complex, sub, sub_bfp, Scale};
pub use shift::{shl_vect, ArithShift};

/// Exponent reported for a zero-length (empty-range) vector.
///
/// A vector with no elements has no finite dynamic range in use; kernels
/// report this sentinel instead of a computed exponent.
pub const ZERO_EXP: i32 = -1024;

pub(crate) mod sealed {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}
