use crate::{
    dsp::{sinc::sinc, windows::WindowType},
    prelude::ErrorsOracle,
};

/// Hamming-windowed, unscaled FIR design with band edges relative to Nyquist.
///
/// Same taps as scipy.signal.firwin(num_taps, cutoffs, pass_zero=pass_dc, scale=False). The passbands
/// alternate starting at DC when `pass_dc` is set, so one cutoff gives a lowpass or highpass and two a
/// bandstop or bandpass.
pub fn firwin(num_taps: usize, cutoffs: &[f64], pass_dc: bool) -> Result<Vec<f64>, ErrorsOracle> {
    if num_taps == 0 {
        return Err(ErrorsOracle::precondition("Number of taps must be positive."));
    }
    if cutoffs.is_empty() {
        return Err(ErrorsOracle::precondition("At least one cutoff is required."));
    }
    if cutoffs.iter().any(|&c| c <= 0.0 || c >= 1.0) {
        return Err(ErrorsOracle::precondition("Cutoffs must lie strictly between 0 and Nyquist."));
    }
    if cutoffs.windows(2).any(|pair| pair[1] <= pair[0]) {
        return Err(ErrorsOracle::precondition("Cutoffs must be strictly increasing."));
    }
    let passes_nyquist = (cutoffs.len() % 2 == 1) != pass_dc;
    if passes_nyquist && num_taps % 2 == 0 {
        return Err(ErrorsOracle::precondition(
            "A passband at Nyquist needs an odd number of taps.",
        ));
    }

    let mut edges = Vec::with_capacity(cutoffs.len() + 2);
    if pass_dc {
        edges.push(0.0);
    }
    edges.extend_from_slice(cutoffs);
    if passes_nyquist {
        edges.push(1.0);
    }

    // Each passband [lo, hi] is the difference of two ideal lowpass responses
    let center = (num_taps - 1) as f64 / 2.0;
    let window = WindowType::Hamming.taps(num_taps);
    Ok(window
        .iter()
        .enumerate()
        .map(|(n, w)| {
            let m = n as f64 - center;
            let ideal: f64 = edges
                .chunks_exact(2)
                .map(|band| band[1] * sinc(band[1] * m) - band[0] * sinc(band[0] * m))
                .sum();
            ideal * w
        })
        .collect())
}
