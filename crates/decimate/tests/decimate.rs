//! End-to-end filter tests: impulse response readout, DC gain, and delay
//! line wraparound across many frames.

use altair_decimate::{FirDs3, N_COEFFS};

/// A table whose k-th tap decodes to `k` when hit by an impulse of 2^20:
/// `((k << 11) * 2^20) >> 31 == k`.
fn ramp_taps() -> Vec<i32> {
    (0..N_COEFFS as i32).map(|k| k << 11).collect()
}

#[test]
fn impulse_reads_out_every_third_coefficient() {
    let coeffs = ramp_taps();
    let mut ds3 = FirDs3::new(&coeffs).unwrap();

    // Impulse as the oldest sample of the first frame: after the frame is
    // pushed it sits two taps deep, so frame n sees it at tap 3n + 2.
    let first = ds3.process(&[1 << 20, 0, 0]);
    assert_eq!(first, 2);

    for n in 1..N_COEFFS / 3 {
        let y = ds3.process(&[0, 0, 0]);
        assert_eq!(y, 3 * n as i32 + 2, "frame {n}");
    }

    // The impulse has left the history; everything from here is zero.
    for _ in 0..8 {
        assert_eq!(ds3.process(&[0, 0, 0]), 0);
    }
}

#[test]
fn dc_input_sees_the_table_gain() {
    // 144 equal taps of 2^24: total gain 144 * 2^24 / 2^31 = 1.125.
    let coeffs = vec![1 << 24; N_COEFFS];
    let mut ds3 = FirDs3::new(&coeffs).unwrap();

    // Prime the delay line until the constant fills all 144 taps.
    let mut y = 0;
    for _ in 0..N_COEFFS / 3 {
        y = ds3.process(&[128, 128, 128]);
    }
    assert_eq!(y, 144);

    // Steady state holds across further wraparounds of the ring.
    for _ in 0..N_COEFFS {
        assert_eq!(ds3.process(&[128, 128, 128]), 144);
    }
}

#[test]
fn sync_clears_history() {
    let coeffs = vec![1 << 24; N_COEFFS];
    let mut ds3 = FirDs3::new(&coeffs).unwrap();

    for _ in 0..10 {
        ds3.process(&[1000, -1000, 500]);
    }
    ds3.sync();

    // With a zeroed delay line, one frame of input only reaches the three
    // newest taps: 3 * 2^24 * 96 / 2^31 = 2.25, truncated.
    assert_eq!(ds3.process(&[96, 96, 96]), 2);
}

#[test]
fn negative_samples_convolve_sign_correctly() {
    let mut coeffs = vec![0i32; N_COEFFS];
    coeffs[0] = 1 << 30; // pick off the newest sample at half gain
    let mut ds3 = FirDs3::new(&coeffs).unwrap();

    assert_eq!(ds3.process(&[0, 0, -64]), -32);
    assert_eq!(ds3.process(&[0, 0, 63]), 31);
}

#[test]
fn smaller_tables_follow_the_same_contract() {
    // Any multiple of six is accepted; a 6-tap ramp wraps much sooner.
    let coeffs: Vec<i32> = (0..6).map(|k| k << 11).collect();
    let mut ds3 = FirDs3::new(&coeffs).unwrap();
    assert_eq!(ds3.taps(), 6);

    let first = ds3.process(&[1 << 20, 0, 0]);
    assert_eq!(first, 2);
    assert_eq!(ds3.process(&[0, 0, 0]), 5);
    assert_eq!(ds3.process(&[0, 0, 0]), 0);
}
