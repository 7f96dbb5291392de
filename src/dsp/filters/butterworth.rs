/// Digital Butterworth lowpass design, following scipy.signal.butter(N, Wn) with the default fs = 2:
/// analog prototype poles, frequency pre-warping, lowpass scaling, bilinear transform and finally
/// expansion of the zeros/poles/gain into transfer function coefficients.
use std::f64::consts::PI;

use num::Complex;

use crate::prelude::ErrorsOracle;

/// Coefficients of prod(x - r), highest power first.
fn poly(roots: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let mut c = vec![Complex::new(1.0, 0.0)];
    for r in roots {
        let mut next = vec![Complex::new(0.0, 0.0); c.len() + 1];
        for (i, v) in c.iter().enumerate() {
            next[i] += *v;
            next[i + 1] -= *v * *r;
        }
        c = next;
    }
    c
}

/// Returns (b, a) for an order-`order` lowpass with cutoff `wn` relative to Nyquist.
/// Poles come in conjugate pairs, so the imaginary parts of the expanded polynomials are dropped.
pub fn butter_lowpass(order: usize, wn: f64) -> Result<(Vec<f64>, Vec<f64>), ErrorsOracle> {
    if order == 0 {
        return Err(ErrorsOracle::precondition("Butterworth order must be at least 1"));
    }
    if !(wn > 0.0 && wn < 1.0) {
        return Err(ErrorsOracle::precondition(
            "Butterworth cutoff must be between 0 and 1 (Nyquist)",
        ));
    }

    let n = order as f64;
    let fs = 2.0;
    let warped = 2.0 * fs * (PI * wn / fs).tan();

    // Analog prototype poles on the left half of the unit circle, scaled to the warped cutoff
    let analog_poles: Vec<Complex<f64>> = (0..order)
        .map(|i| {
            let m = -(n - 1.0) + 2.0 * i as f64;
            -Complex::from_polar(1.0, PI * m / (2.0 * n)) * warped
        })
        .collect();
    let analog_gain = warped.powi(order as i32);

    // Bilinear transform; every analog zero at infinity lands on z = -1
    let fs2 = 2.0 * fs;
    let digital_poles: Vec<Complex<f64>> = analog_poles
        .iter()
        .map(|&p| (fs2 + p) / (fs2 - p))
        .collect();
    let digital_zeros = vec![Complex::new(-1.0, 0.0); order];
    let denominator = analog_poles
        .iter()
        .fold(Complex::new(1.0, 0.0), |acc, &p| acc * (fs2 - p));
    let gain = analog_gain * denominator.inv().re;

    let b = poly(&digital_zeros).iter().map(|c| gain * c.re).collect();
    let a = poly(&digital_poles).iter().map(|c| c.re).collect();
    Ok((b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close_vec(actual: &[f64], expected: &[f64], tol: f64) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < tol, "actual={a}, expected={e}");
        }
    }

    #[test]
    fn test_butter_half_band() {
        // scipy.signal.butter(2, 0.5)
        let (b, a) = butter_lowpass(2, 0.5).unwrap();
        assert_close_vec(&b, &[0.29289322, 0.58578644, 0.29289322], 1e-8);
        assert_close_vec(&a, &[1.0, 0.0, 0.17157288], 1e-8);
    }

    #[test]
    fn test_butter_third_order() {
        // scipy.signal.butter(3, 0.2)
        let (b, a) = butter_lowpass(3, 0.2).unwrap();
        assert_close_vec(&b, &[0.01809893, 0.0542968, 0.0542968, 0.01809893], 1e-8);
        assert_close_vec(&a, &[1.0, -1.76004188, 1.18289326, -0.27805992], 1e-8);
    }

    #[test]
    fn test_butter_unity_dc_gain() {
        let (b, a) = butter_lowpass(9, 0.5).unwrap();
        let dc = b.iter().sum::<f64>() / a.iter().sum::<f64>();
        assert!((dc - 1.0).abs() < 1e-9, "dc={dc}");
    }

    #[test]
    fn test_butter_rejects_bad_arguments() {
        assert!(butter_lowpass(0, 0.5).is_err());
        assert!(butter_lowpass(2, 1.0).is_err());
    }
}
