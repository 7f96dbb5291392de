use std::f64::consts::PI;

use crate::{
    dsp::windows::WindowType,
    prelude::ErrorsOracle,
};

/// Windowed ideal Hilbert transformer: h[k] = 2 / (k pi) for odd k, 0 for even k, with k centered on the middle tap.
pub fn fir_hilbert_transform(num_taps: usize, window: WindowType) -> Result<Vec<f32>, ErrorsOracle> {
    if num_taps % 2 != 1 {
        return Err(ErrorsOracle::precondition("Number of taps must be odd."));
    }
    let half = ((num_taps - 1) / 2) as i64;
    let w = window.taps(num_taps);
    Ok((0..num_taps)
        .map(|i| {
            let k = i as i64 - half;
            let ideal = if k % 2 == 0 { 0.0 } else { 2.0 / (k as f64 * PI) };
            (ideal * w[i]) as f32
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hilbert_hamming_9() {
        let h = fir_hilbert_transform(9, WindowType::Hamming).unwrap();
        let golden = [
            0.0,
            -0.04556730812078652,
            0.0,
            -0.5508474297946283,
            0.0,
            0.5508474297946284,
            0.0,
            0.04556730812078653,
            0.0,
        ];
        for (a, g) in h.iter().zip(golden.iter()) {
            assert!((*a as f64 - g).abs() < 1e-7, "actual={a}, golden={g}");
        }
    }

    #[test]
    fn test_antisymmetric() {
        let h = fir_hilbert_transform(129, WindowType::Hamming).unwrap();
        for i in 0..64 {
            assert!((h[i] + h[128 - i]).abs() < 1e-7);
        }
        assert_eq!(h[64], 0.0);
    }

    #[test]
    fn test_even_taps_rejected() {
        assert!(fir_hilbert_transform(8, WindowType::Hamming).is_err());
    }
}
