/// Direct Form II transposed linear filter with real coefficients, following scipy.signal.lfilter:
/// coefficients are normalized by a[0] and the filter starts from rest.
/// Samples can be anything that scales by a real coefficient, so the same filter serves the
/// real and complex oracles.
use std::collections::VecDeque;

use crate::{
    dsp::stream_operator::StreamOperator,
    prelude::{ErrorsOracle, IsLinearOperatable},
};

pub struct DiscreteLinearFilter<T: IsLinearOperatable> {
    /// Feed-forward (numerator) coefficients, normalized by a[0]
    b: Vec<f64>,

    /// Feedback (denominator) coefficients, normalized so a[0] == 1
    a: Vec<f64>,

    /// Delay line of size = max(b.len(), a.len()) - 1
    delay: VecDeque<T>,
}

impl<T: IsLinearOperatable> DiscreteLinearFilter<T> {
    pub fn new(b: &[f64], a: &[f64]) -> Result<Self, ErrorsOracle> {
        if b.is_empty() || a.is_empty() {
            return Err(ErrorsOracle::precondition("filter needs at least one b and one a tap"));
        }
        let a0 = a[0];
        if a0 == 0.0 {
            return Err(ErrorsOracle::precondition("a[0] must be nonzero"));
        }
        let order = usize::max(b.len(), a.len()) - 1;
        Ok(Self {
            b: b.iter().map(|x| x / a0).collect(),
            a: a.iter().map(|x| x / a0).collect(),
            delay: VecDeque::from(vec![T::zero(); order]),
        })
    }

    /// FIR shorthand, a = [1]
    pub fn fir(taps: &[f64]) -> Result<Self, ErrorsOracle> {
        Self::new(taps, &[1.0])
    }

    pub fn step(&mut self, sample: T) -> T {
        let order = self.delay.len();
        // d[0] is added directly to output
        let d0 = if order > 0 { self.delay[0] } else { T::zero() };

        let y = sample * self.b[0] + d0;

        // d[k] = d[k+1] + b[k+1]*x - a[k+1]*y
        for k in 0..order {
            let next_d = if k + 1 < order {
                self.delay[k + 1]
            } else {
                T::zero()
            };
            let bkp1 = self.b.get(k + 1).copied().unwrap_or(0.0);
            let akp1 = self.a.get(k + 1).copied().unwrap_or(0.0);
            self.delay[k] = next_d + sample * bkp1 - y * akp1;
        }
        y
    }
}

impl<T: IsLinearOperatable> StreamOperator<T, T> for DiscreteLinearFilter<T> {
    fn reset(&mut self) {
        for d in self.delay.iter_mut() {
            *d = T::zero();
        }
    }

    fn process(&mut self, samples: &[T]) -> Result<Vec<T>, ErrorsOracle> {
        Ok(samples.iter().map(|&x| self.step(x)).collect())
    }
}
