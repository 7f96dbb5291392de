//! Symmetric tapering windows, as exported in the shared filter constants and applied by the FIR designs.
//! Values match scipy.signal.get_window(..., fftbins=False).
use std::f64::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowType {
    Boxcar,
    Bartlett,
    Blackman,
    Hamming,
    Hann,
}

impl WindowType {
    /// Coefficients a_k of w(x) = sum_k (-1)^k a_k cos(2 pi k x) for the raised-cosine family.
    fn cosine_terms(&self) -> &'static [f64] {
        match self {
            WindowType::Blackman => &[0.42, 0.5, 0.08],
            WindowType::Hamming => &[0.54, 0.46],
            WindowType::Hann => &[0.5, 0.5],
            WindowType::Boxcar | WindowType::Bartlett => &[],
        }
    }

    /// Window value at `x` in [0, 1], the position of a tap across the window.
    fn value_at(&self, x: f64) -> f64 {
        match self {
            WindowType::Boxcar => 1.0,
            WindowType::Bartlett => 1.0 - (2.0 * x - 1.0).abs(),
            _ => self
                .cosine_terms()
                .iter()
                .enumerate()
                .map(|(k, a)| {
                    let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
                    sign * a * (2.0 * PI * k as f64 * x).cos()
                })
                .sum(),
        }
    }

    /// `len` taps with both end points on the window edges. Lengths 0 and 1 are all ones.
    pub fn taps(&self, len: usize) -> Vec<f64> {
        if len <= 1 {
            return vec![1.0; len];
        }
        let span = (len - 1) as f64;
        (0..len).map(|n| self.value_at(n as f64 / span)).collect()
    }
}
