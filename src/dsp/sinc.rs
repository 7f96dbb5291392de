use std::f64::consts::PI;

/// Normalized sinc, sin(pi x) / (pi x), equal to 1 at x = 0.
pub fn sinc(x: f64) -> f64 {
    if x.abs() < 1e-15 {
        1.0
    } else {
        (PI * x).sin() / (PI * x)
    }
}
