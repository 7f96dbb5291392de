/// Filtering oracles: raw FIR/IIR application plus the design-backed filter blocks, which design
/// their taps from block arguments and then run the same linear filter.
use num::Complex;

use crate::{
    dsp::{
        filters::{
            discrete_linear_filter::DiscreteLinearFilter,
            firwin::firwin,
            hilbert::fir_hilbert_transform,
            root_raised_cosine::fir_root_raised_cosine,
        },
        stream_operator::StreamOperator,
        windows::WindowType,
    },
    oracles::{narrow_complex, narrow_float, widen_complex, widen_float},
    prelude::ErrorsOracle,
    typed_array::TypedArray,
};

/// Linear filter over a real or complex vector, output kind and length equal to the input's.
pub fn lfilter(b: &[f64], a: &[f64], x: &TypedArray) -> Result<TypedArray, ErrorsOracle> {
    match x {
        TypedArray::ComplexFloat32(v) => {
            let mut filter = DiscreteLinearFilter::<Complex<f64>>::new(b, a)?;
            Ok(narrow_complex(filter.process(&widen_complex(v))?).into())
        }
        TypedArray::Float32(v) => {
            let mut filter = DiscreteLinearFilter::<f64>::new(b, a)?;
            Ok(narrow_float(filter.process(&widen_float(v))?).into())
        }
        other => Err(ErrorsOracle::precondition(format!(
            "cannot filter a {} vector",
            other.kind().name()
        ))),
    }
}

pub fn fir_filter(taps: &[f64], x: &TypedArray) -> Result<TypedArray, ErrorsOracle> {
    lfilter(taps, &[1.0], x)
}

pub fn iir_filter(b: &[f64], a: &[f64], x: &TypedArray) -> Result<TypedArray, ErrorsOracle> {
    lfilter(b, a, x)
}

fn windowed_fir(
    num_taps: usize,
    cutoffs: &[f64],
    pass_dc: bool,
    x: &TypedArray,
) -> Result<TypedArray, ErrorsOracle> {
    let taps = firwin(num_taps, cutoffs, pass_dc)?;
    fir_filter(&taps, x)
}

/// Cutoffs for the design-backed filters are relative to Nyquist.
pub fn lowpass_filter(num_taps: usize, cutoff: f64, x: &TypedArray) -> Result<TypedArray, ErrorsOracle> {
    windowed_fir(num_taps, &[cutoff], true, x)
}

pub fn highpass_filter(num_taps: usize, cutoff: f64, x: &TypedArray) -> Result<TypedArray, ErrorsOracle> {
    windowed_fir(num_taps, &[cutoff], false, x)
}

pub fn bandpass_filter(num_taps: usize, cutoffs: &[f64], x: &TypedArray) -> Result<TypedArray, ErrorsOracle> {
    windowed_fir(num_taps, cutoffs, false, x)
}

pub fn bandstop_filter(num_taps: usize, cutoffs: &[f64], x: &TypedArray) -> Result<TypedArray, ErrorsOracle> {
    windowed_fir(num_taps, cutoffs, true, x)
}

/// Bilinear transform of 1 / (1 + s tau) at the normalized sample rate of 2 used by the other designs.
/// Real input only.
pub fn fm_deemphasis_filter(tau: f64, x: &TypedArray) -> Result<TypedArray, ErrorsOracle> {
    let x = x.as_float()?;
    let gain = 1.0 / (1.0 + 4.0 * tau);
    let b = [gain, gain];
    let a = [1.0, (1.0 - 4.0 * tau) / (1.0 + 4.0 * tau)];
    lfilter(&b, &a, &TypedArray::Float32(x.clone()))
}

/// Root raised cosine matched filter at two samples per unit of `symbol_rate`.
pub fn root_raised_cosine_filter(
    num_taps: usize,
    beta: f64,
    symbol_rate: f64,
    x: &TypedArray,
) -> Result<TypedArray, ErrorsOracle> {
    if symbol_rate <= 0.0 {
        return Err(ErrorsOracle::precondition("Symbol rate must be positive."));
    }
    let taps = fir_root_raised_cosine(num_taps, 2.0, beta, 1.0 / symbol_rate)?;
    let taps: Vec<f64> = taps.iter().map(|&t| t as f64).collect();
    fir_filter(&taps, x)
}

/// Real to analytic signal: the imaginary part is the Hilbert-filtered input, the real part is the
/// input delayed by the filter's group delay.
pub fn hilbert_modulate(num_taps: usize, x: &TypedArray) -> Result<TypedArray, ErrorsOracle> {
    let real = x.as_float()?;
    let taps: Vec<f64> = fir_hilbert_transform(num_taps, WindowType::Hamming)?
        .iter()
        .map(|&t| t as f64)
        .collect();
    let imag = fir_filter(&taps, x)?;
    let imag = imag.as_float()?;
    let delay = (num_taps - 1) / 2;
    let out: Vec<Complex<f32>> = (0..real.len())
        .map(|i| {
            let re = if i >= delay { real[i - delay] } else { 0.0 };
            Complex::new(re, imag[i])
        })
        .collect();
    Ok(out.into())
}
