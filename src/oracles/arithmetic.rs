/// Elementwise two-input blocks and complex-to-real extraction.
use ndarray::Zip;

use crate::{
    oracles::check_same_length,
    prelude::{ErrorsOracle, C1D},
    typed_array::TypedArray,
};

fn kinds_differ(x: &TypedArray, y: &TypedArray, block: &str) -> ErrorsOracle {
    ErrorsOracle::precondition(format!(
        "{block} does not support {} x {} inputs",
        x.kind().name(),
        y.kind().name()
    ))
}

fn complex_pairwise(
    x: &C1D,
    y: &C1D,
    f: impl Fn(num::Complex<f64>, num::Complex<f64>) -> num::Complex<f64>,
) -> C1D {
    Zip::from(x).and(y).map_collect(|a, b| {
        let a = num::Complex::new(a.re as f64, a.im as f64);
        let b = num::Complex::new(b.re as f64, b.im as f64);
        let z = f(a, b);
        num::Complex::new(z.re as f32, z.im as f32)
    })
}

pub fn multiply(x: &TypedArray, y: &TypedArray) -> Result<TypedArray, ErrorsOracle> {
    check_same_length(x.len(), y.len())?;
    match (x, y) {
        (TypedArray::ComplexFloat32(a), TypedArray::ComplexFloat32(b)) => {
            Ok(complex_pairwise(a, b, |p, q| p * q).into())
        }
        (TypedArray::Float32(a), TypedArray::Float32(b)) => Ok(Zip::from(a)
            .and(b)
            .map_collect(|&p, &q| (p as f64 * q as f64) as f32)
            .into()),
        _ => Err(kinds_differ(x, y, "multiply")),
    }
}

/// x * conj(y), complex only
pub fn multiply_conjugate(x: &TypedArray, y: &TypedArray) -> Result<TypedArray, ErrorsOracle> {
    check_same_length(x.len(), y.len())?;
    match (x, y) {
        (TypedArray::ComplexFloat32(a), TypedArray::ComplexFloat32(b)) => {
            Ok(complex_pairwise(a, b, |p, q| p * q.conj()).into())
        }
        _ => Err(kinds_differ(x, y, "multiply_conjugate")),
    }
}

/// Integer sums wrap in two's complement like the 32-bit type they model.
pub fn sum(x: &TypedArray, y: &TypedArray) -> Result<TypedArray, ErrorsOracle> {
    check_same_length(x.len(), y.len())?;
    match (x, y) {
        (TypedArray::ComplexFloat32(a), TypedArray::ComplexFloat32(b)) => {
            Ok(complex_pairwise(a, b, |p, q| p + q).into())
        }
        (TypedArray::Float32(a), TypedArray::Float32(b)) => Ok(Zip::from(a)
            .and(b)
            .map_collect(|&p, &q| (p as f64 + q as f64) as f32)
            .into()),
        (TypedArray::Integer32(a), TypedArray::Integer32(b)) => Ok(Zip::from(a)
            .and(b)
            .map_collect(|&p, &q| p.wrapping_add(q))
            .into()),
        _ => Err(kinds_differ(x, y, "sum")),
    }
}

pub fn complex_to_real(x: &TypedArray) -> Result<TypedArray, ErrorsOracle> {
    Ok(x.as_complex()?.mapv(|z| z.re).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::Complex;

    #[test]
    fn test_multiply_complex() {
        let x = TypedArray::from(vec![Complex::new(1.0f32, 2.0), Complex::new(0.5, -0.5)]);
        let y = TypedArray::from(vec![Complex::new(3.0f32, -1.0), Complex::new(2.0, 2.0)]);
        let out = multiply(&x, &y).unwrap();
        assert_eq!(
            out,
            TypedArray::from(vec![Complex::new(5.0f32, 5.0), Complex::new(2.0, 0.0)])
        );
        let out = multiply_conjugate(&x, &y).unwrap();
        assert_eq!(
            out,
            TypedArray::from(vec![Complex::new(1.0f32, 7.0), Complex::new(0.0, -2.0)])
        );
    }

    #[test]
    fn test_sum_integer_wraps() {
        let x = TypedArray::from(vec![i32::MAX, -5]);
        let y = TypedArray::from(vec![1, 7]);
        assert_eq!(sum(&x, &y).unwrap(), TypedArray::from(vec![i32::MIN, 2]));
    }

    #[test]
    fn test_mismatches() {
        let x = TypedArray::from(vec![1.0f32, 2.0]);
        let y = TypedArray::from(vec![1.0f32]);
        assert!(matches!(
            multiply(&x, &y),
            Err(ErrorsOracle::IncompatibleArraySizes((2, 1)))
        ));
        let z = TypedArray::from(vec![1, 2]);
        assert!(matches!(sum(&x, &z), Err(ErrorsOracle::PreconditionViolation(_))));
        assert!(multiply_conjugate(&x, &x).is_err());
    }

    #[test]
    fn test_complex_to_real() {
        let x = TypedArray::from(vec![Complex::new(0.25f32, -1.0), Complex::new(-0.5, 1.0)]);
        assert_eq!(complex_to_real(&x).unwrap(), TypedArray::from(vec![0.25f32, -0.5]));
        assert!(complex_to_real(&TypedArray::from(vec![0.25f32])).is_err());
    }
}
