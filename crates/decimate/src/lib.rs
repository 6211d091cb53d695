//! Decimation-by-3 FIR filtering.
//!
//! [`FirDs3`] consumes three input samples per call and produces one output
//! sample by convolving its delay-line history against a caller-supplied
//! coefficient table (canonically [`N_COEFFS`] taps in Q1.31). The delay
//! line is circular; it is stored twice, mirrored, so every convolution
//! reads a single contiguous window with no wraparound branch in the inner
//! loop.
//!
//! Lifecycle: construct with [`FirDs3::new`] (the only fallible step -
//! configuration validation), call [`FirDs3::sync`] to realign after a
//! stream discontinuity, then [`FirDs3::process`] once per output sample.

use thiserror::Error;

/// Canonical number of filter taps.
pub const N_COEFFS: usize = 144;

/// Configuration errors reported at construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FirDs3Error {
    /// The coefficient table was empty.
    #[error("coefficient table is empty")]
    EmptyCoefficients,

    /// The coefficient count does not divide into the filter's phase
    /// structure.
    #[error("coefficient count {0} is not a multiple of 6")]
    CountNotMultipleOfSix(usize),
}

/// A decimate-by-3 FIR filter over 32-bit fixed-point samples.
///
/// Coefficients are Q1.31; the accumulated 64-bit convolution is shifted
/// back by 31 on output. The table's gain must not exceed unity
/// (`sum |coeff| <= 2^31`), or the accumulator can wrap.
#[derive(Debug, Clone)]
pub struct FirDs3<'a> {
    coeffs: &'a [i32],
    /// Mirrored circular history: `delay[i + taps] == delay[i]`.
    delay: Vec<i32>,
    /// Index of the newest sample, always in `0..taps`.
    pos: usize,
}

impl<'a> FirDs3<'a> {
    /// Validate the coefficient table and configure a filter with a zeroed
    /// delay line.
    pub fn new(coeffs: &'a [i32]) -> Result<Self, FirDs3Error> {
        if coeffs.is_empty() {
            return Err(FirDs3Error::EmptyCoefficients);
        }
        if coeffs.len() % 6 != 0 {
            return Err(FirDs3Error::CountNotMultipleOfSix(coeffs.len()));
        }
        Ok(Self {
            coeffs,
            delay: vec![0; 2 * coeffs.len()],
            pos: 0,
        })
    }

    /// Number of taps this filter was configured with.
    pub fn taps(&self) -> usize {
        self.coeffs.len()
    }

    /// Re-align the filter state: zero the delay line and reset the write
    /// position, e.g. after a discontinuity in the input stream.
    pub fn sync(&mut self) {
        self.delay.fill(0);
        self.pos = 0;
    }

    /// Consume three input samples, produce one output sample.
    ///
    /// The samples are pushed oldest-first; the convolution then runs over
    /// the full tap history with `coeffs[0]` against the newest sample.
    pub fn process(&mut self, input: &[i32; 3]) -> i32 {
        let taps = self.coeffs.len();

        for &x in input {
            self.pos = if self.pos == 0 { taps - 1 } else { self.pos - 1 };
            self.delay[self.pos] = x;
            self.delay[self.pos + taps] = x;
        }

        let window = &self.delay[self.pos..self.pos + taps];
        let mut acc: i64 = 0;
        for (&h, &x) in self.coeffs.iter().zip(window) {
            acc += i64::from(h) * i64::from(x);
        }
        (acc >> 31) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_table() {
        assert_eq!(
            FirDs3::new(&[]).unwrap_err(),
            FirDs3Error::EmptyCoefficients
        );
    }

    #[test]
    fn rejects_count_not_divisible_by_six() {
        let coeffs = [0i32; 100];
        assert_eq!(
            FirDs3::new(&coeffs).unwrap_err(),
            FirDs3Error::CountNotMultipleOfSix(100)
        );
    }

    #[test]
    fn accepts_the_canonical_table_size() {
        let coeffs = [0i32; N_COEFFS];
        let ds3 = FirDs3::new(&coeffs).unwrap();
        assert_eq!(ds3.taps(), N_COEFFS);
    }
}
