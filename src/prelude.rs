use std::ops::{Mul, Sub};

use ndarray::prelude::*;
use num::{Complex, Zero};

/// Number of fractional digits every floating point value is rounded to before it is serialized.
pub const PRECISION: usize = 8;

/// Default absolute comparison tolerance handed to the consuming harness.
pub const EPSILON: f64 = 1e-6;

/// Base seed every generator's sampler is derived from.
pub const DEFAULT_SEED: u64 = 1;

pub type C1D = Array1<Complex<f32>>;
pub type R1D = Array1<f32>;
pub type I1D = Array1<i32>;
pub type B1D = Array1<bool>;

#[derive(Debug, thiserror::Error)]
pub enum ErrorsOracle {
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),
    #[error("incompatible array sizes {0:?}")]
    IncompatibleArraySizes((usize, usize)),
    #[error("no literal formatter for {0}")]
    UnsupportedType(String),
    #[error("failed to write {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("misconfiguration: {0}")]
    Misconfiguration(&'static str),
}

impl ErrorsOracle {
    pub fn precondition(message: impl Into<String>) -> Self {
        ErrorsOracle::PreconditionViolation(message.into())
    }
}

/// Sample types a linear filter can run over with real coefficients.
pub trait IsLinearOperatable: Copy + Zero + Sub<Output = Self> + Mul<f64, Output = Self> {}

impl<T> IsLinearOperatable for T where T: Copy + Zero + Sub<Output = T> + Mul<f64, Output = T> {}

/// Round half-to-even at `PRECISION` fractional digits, the way the consumer's fixtures were always rounded.
pub fn round_precision(x: f64) -> f64 {
    let scale = 10f64.powi(PRECISION as i32);
    (x * scale).round_ties_even() / scale
}

/// Round to `PRECISION` digits and narrow to the single precision the blocks under test run in.
pub fn quantize(x: f64) -> f32 {
    round_precision(x) as f32
}
