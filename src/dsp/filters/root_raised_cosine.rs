use std::f64::consts::PI;

use crate::prelude::ErrorsOracle;

/// numpy.isclose with its default tolerances
fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-8 + 1e-5 * b.abs()
}

/// Root raised cosine FIR taps, normalized to unit sum.
///
/// `t = 0` and `t = ±T/(4 beta)` are removable singularities of the closed form and use their analytic limits.
pub fn fir_root_raised_cosine(
    num_taps: usize,
    sample_rate: f64,
    beta: f64,
    symbol_period: f64,
) -> Result<Vec<f32>, ErrorsOracle> {
    if num_taps % 2 != 1 {
        return Err(ErrorsOracle::precondition("Number of taps must be odd."));
    }
    if !(beta > 0.0 && beta <= 1.0) {
        return Err(ErrorsOracle::precondition("Roll-off must be in (0, 1]."));
    }
    if sample_rate <= 0.0 || symbol_period <= 0.0 {
        return Err(ErrorsOracle::precondition(
            "Sample rate and symbol period must be positive.",
        ));
    }

    let big_t = symbol_period;
    let singular = big_t / (4.0 * beta);
    let center = (num_taps - 1) as f64 / 2.0;

    let h: Vec<f64> = (0..num_taps)
        .map(|i| {
            let t = (i as f64 - center) / sample_rate;
            if t == 0.0 {
                (1.0 / big_t.sqrt()) * (1.0 - beta + 4.0 * beta / PI)
            } else if is_close(t, -singular) || is_close(t, singular) {
                (beta / (2.0 * big_t).sqrt())
                    * ((1.0 + 2.0 / PI) * (PI / (4.0 * beta)).sin()
                        + (1.0 - 2.0 / PI) * (PI / (4.0 * beta)).cos())
            } else {
                let x = 4.0 * beta * t / big_t;
                let num = ((1.0 + beta) * PI * t / big_t).cos()
                    + ((1.0 - beta) * PI * t / big_t).sin() / x;
                let denom = 1.0 - x * x;
                ((4.0 * beta) / (PI * big_t.sqrt())) * num / denom
            }
        })
        .collect();

    let total: f64 = h.iter().sum();
    Ok(h.iter().map(|x| (x / total) as f32).collect())
}
