/// Phase-domain blocks: FM discrimination, BPSK phase correction and frequency translation.
///
/// The two stateful blocks are `StreamOperator`s so their state machines can be checked chunk by chunk;
/// the oracle functions reset one, feed it the whole input and narrow the result.
use std::{collections::VecDeque, f64::consts::PI};

use num::Complex;

use crate::{
    dsp::stream_operator::StreamOperator,
    oracles::{narrow_complex, narrow_float, widen_complex},
    prelude::ErrorsOracle,
    typed_array::TypedArray,
};

/// Instantaneous frequency: angle(x[i] conj(x[i-1])) / gain. The first sample has no predecessor and yields 0.
pub fn frequency_discriminator(gain: f64, x: &TypedArray) -> Result<TypedArray, ErrorsOracle> {
    if gain == 0.0 {
        return Err(ErrorsOracle::precondition("Discriminator gain must be nonzero."));
    }
    let samples = widen_complex(x.as_complex()?);
    let mut prev: Option<Complex<f64>> = None;
    let out: Vec<f64> = samples
        .iter()
        .map(|&z| {
            let angle = match prev {
                Some(p) => (z * p.conj()).arg() / gain,
                None => 0.0,
            };
            prev = Some(z);
            angle
        })
        .collect();
    Ok(narrow_float(out).into())
}

/// Removes a slowly varying carrier phase from a BPSK constellation.
///
/// Each sample's phase is folded into [-pi/2, pi/2] so both symbols agree, averaged over a sliding
/// window of the last `num_samples` folded phases (initially all zero), and the sample is rotated back by
/// the average.
pub struct BinaryPhaseCorrector {
    num_samples: usize,
    phases: VecDeque<f64>,
}

impl BinaryPhaseCorrector {
    pub fn new(num_samples: usize) -> Result<Self, ErrorsOracle> {
        if num_samples == 0 {
            return Err(ErrorsOracle::precondition("Phase window must hold at least one sample."));
        }
        Ok(Self {
            num_samples,
            phases: VecDeque::from(vec![0.0; num_samples]),
        })
    }

    fn fold(phi: f64) -> f64 {
        let phi = if phi < -PI / 2.0 { phi + PI } else { phi };
        if phi > PI / 2.0 {
            phi - PI
        } else {
            phi
        }
    }

    fn step(&mut self, z: Complex<f64>) -> Complex<f64> {
        self.phases.pop_front();
        self.phases.push_back(Self::fold(z.arg()));
        let average = self.phases.iter().sum::<f64>() / self.num_samples as f64;
        z * Complex::from_polar(1.0, -average)
    }
}

impl StreamOperator<Complex<f64>, Complex<f64>> for BinaryPhaseCorrector {
    fn reset(&mut self) {
        self.phases = VecDeque::from(vec![0.0; self.num_samples]);
    }

    fn process(&mut self, data_in: &[Complex<f64>]) -> Result<Vec<Complex<f64>>, ErrorsOracle> {
        Ok(data_in.iter().map(|&z| self.step(z)).collect())
    }
}

pub fn binary_phase_correct(num_samples: usize, x: &TypedArray) -> Result<TypedArray, ErrorsOracle> {
    let samples = widen_complex(x.as_complex()?);
    let mut corrector = BinaryPhaseCorrector::new(num_samples)?;
    Ok(narrow_complex(corrector.process(&samples)?).into())
}

/// Multiplies by e^{j 2 pi (offset / 2) n}, with `offset` relative to Nyquist.
///
/// The phase is recomputed from the sample index instead of being accumulated, so long inputs do not
/// drift.
pub struct FrequencyTranslator {
    cycles_per_sample: f64,
    index: u64,
}

impl FrequencyTranslator {
    pub fn new(offset: f64) -> Self {
        Self {
            cycles_per_sample: offset / 2.0,
            index: 0,
        }
    }

    fn rotator(&self) -> Complex<f64> {
        let turns = (self.cycles_per_sample * self.index as f64).fract();
        Complex::from_polar(1.0, 2.0 * PI * turns)
    }
}

impl StreamOperator<Complex<f64>, Complex<f64>> for FrequencyTranslator {
    fn reset(&mut self) {
        self.index = 0;
    }

    fn process(&mut self, data_in: &[Complex<f64>]) -> Result<Vec<Complex<f64>>, ErrorsOracle> {
        Ok(data_in
            .iter()
            .map(|&z| {
                let y = z * self.rotator();
                self.index += 1;
                y
            })
            .collect())
    }
}

pub fn frequency_translate(offset: f64, x: &TypedArray) -> Result<TypedArray, ErrorsOracle> {
    let samples = widen_complex(x.as_complex()?);
    let mut translator = FrequencyTranslator::new(offset);
    Ok(narrow_complex(translator.process(&samples)?).into())
}
