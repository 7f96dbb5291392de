/// Real-to-bit decisions and bit-level decoding.
use crate::{prelude::ErrorsOracle, typed_array::TypedArray};

/// 1 where the sample is strictly above `threshold`.
pub fn slicer(threshold: f64, x: &TypedArray) -> Result<TypedArray, ErrorsOracle> {
    Ok(x.as_float()?.mapv(|v| v as f64 > threshold).into())
}

/// out[i] = x[i] ^ x[i-1], with a false bit before the first sample.
pub fn differential_decode(x: &TypedArray) -> Result<TypedArray, ErrorsOracle> {
    let bits = x.as_bit()?;
    let mut prev = false;
    let out: Vec<bool> = bits
        .iter()
        .map(|&b| {
            let decoded = b ^ prev;
            prev = b;
            decoded
        })
        .collect();
    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slicer_is_strict() {
        let x = TypedArray::from(vec![0.0f32, 0.25, 0.3, -0.25, -0.3]);
        assert_eq!(
            slicer(0.0, &x).unwrap(),
            TypedArray::from(vec![false, true, true, false, false])
        );
        assert_eq!(
            slicer(0.25, &x).unwrap(),
            TypedArray::from(vec![false, false, true, false, false])
        );
        assert_eq!(
            slicer(-0.25, &x).unwrap(),
            TypedArray::from(vec![true, true, true, false, false])
        );
    }

    #[test]
    fn test_differential_decode() {
        let x = TypedArray::from(vec![true, true, false, false, true]);
        assert_eq!(
            differential_decode(&x).unwrap(),
            TypedArray::from(vec![true, false, true, false, true])
        );
        assert!(differential_decode(&TypedArray::from(vec![1])).is_err());
    }
}
