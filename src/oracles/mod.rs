/// Reference computations for every block under test.
///
/// Oracles see the whole finite input at once. Real and complex samples are widened to double
/// precision for the computation and narrowed back to single precision on output.
use ndarray::Array1;
use num::Complex;

use crate::prelude::{ErrorsOracle, C1D, R1D};

pub mod arithmetic;
pub mod bits;
pub mod demodulation;
pub mod filtering;
pub mod rds;
pub mod sample_format;
pub mod timing;

pub(crate) fn widen_complex(x: &C1D) -> Vec<Complex<f64>> {
    x.iter()
        .map(|z| Complex::new(z.re as f64, z.im as f64))
        .collect()
}

pub(crate) fn narrow_complex(x: Vec<Complex<f64>>) -> C1D {
    Array1::from_iter(x.into_iter().map(|z| Complex::new(z.re as f32, z.im as f32)))
}

pub(crate) fn widen_float(x: &R1D) -> Vec<f64> {
    x.iter().map(|&v| v as f64).collect()
}

pub(crate) fn narrow_float(x: Vec<f64>) -> R1D {
    Array1::from_iter(x.into_iter().map(|v| v as f32))
}

pub(crate) fn check_same_length(a: usize, b: usize) -> Result<(), ErrorsOracle> {
    if a != b {
        return Err(ErrorsOracle::IncompatibleArraySizes((a, b)));
    }
    Ok(())
}
