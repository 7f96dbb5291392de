/// Binary sample formats read by the file source blocks.
///
/// Integers normalize to roughly [-1, 1] as (v - offset) / scale with scale = (2^bits - 1) / 2, where the
/// offset is the scale for unsigned formats and 0 for signed ones. Floats pass through unscaled.
/// Decoded values are rounded to `PRECISION` digits and narrowed to single precision.
use std::{fmt, str::FromStr};

use ndarray::Array1;
use num::Complex;

use crate::{
    prelude::{quantize, ErrorsOracle, C1D, R1D},
    random::sampler::Sampler,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleFormat {
    U8,
    S8,
    U16Le,
    U16Be,
    S16Le,
    S16Be,
    U32Le,
    U32Be,
    S32Le,
    S32Be,
    F32Le,
    F32Be,
    F64Le,
    F64Be,
}

impl SampleFormat {
    pub const ALL: [SampleFormat; 14] = [
        SampleFormat::U8,
        SampleFormat::S8,
        SampleFormat::U16Le,
        SampleFormat::U16Be,
        SampleFormat::S16Le,
        SampleFormat::S16Be,
        SampleFormat::U32Le,
        SampleFormat::U32Be,
        SampleFormat::S32Le,
        SampleFormat::S32Be,
        SampleFormat::F32Le,
        SampleFormat::F32Be,
        SampleFormat::F64Le,
        SampleFormat::F64Be,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SampleFormat::U8 => "u8",
            SampleFormat::S8 => "s8",
            SampleFormat::U16Le => "u16le",
            SampleFormat::U16Be => "u16be",
            SampleFormat::S16Le => "s16le",
            SampleFormat::S16Be => "s16be",
            SampleFormat::U32Le => "u32le",
            SampleFormat::U32Be => "u32be",
            SampleFormat::S32Le => "s32le",
            SampleFormat::S32Be => "s32be",
            SampleFormat::F32Le => "f32le",
            SampleFormat::F32Be => "f32be",
            SampleFormat::F64Le => "f64le",
            SampleFormat::F64Be => "f64be",
        }
    }

    pub fn bits(&self) -> u32 {
        match self {
            SampleFormat::U8 | SampleFormat::S8 => 8,
            SampleFormat::U16Le | SampleFormat::U16Be | SampleFormat::S16Le | SampleFormat::S16Be => 16,
            SampleFormat::F64Le | SampleFormat::F64Be => 64,
            _ => 32,
        }
    }

    /// Bytes per sample
    pub fn width(&self) -> usize {
        (self.bits() / 8) as usize
    }

    pub fn is_float(&self) -> bool {
        matches!(
            self,
            SampleFormat::F32Le | SampleFormat::F32Be | SampleFormat::F64Le | SampleFormat::F64Be
        )
    }

    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            SampleFormat::S8 | SampleFormat::S16Le | SampleFormat::S16Be | SampleFormat::S32Le | SampleFormat::S32Be
        )
    }

    /// Single-byte formats have no byte order and count as little endian.
    pub fn is_big_endian(&self) -> bool {
        matches!(
            self,
            SampleFormat::U16Be
                | SampleFormat::S16Be
                | SampleFormat::U32Be
                | SampleFormat::S32Be
                | SampleFormat::F32Be
                | SampleFormat::F64Be
        )
    }

    /// (scale, offset) for integer formats
    fn scale_offset(&self) -> Option<(f64, f64)> {
        if self.is_float() {
            return None;
        }
        let scale = ((1u64 << self.bits()) - 1) as f64 / 2.0;
        let offset = if self.is_signed() { 0.0 } else { scale };
        Some((scale, offset))
    }

    pub fn normalize(&self, raw: f64) -> f64 {
        match self.scale_offset() {
            Some((scale, offset)) => (raw - offset) / scale,
            None => raw,
        }
    }

    fn check_buffer(&self, bytes: &[u8], group: usize) -> Result<(), ErrorsOracle> {
        let stride = self.width() * group;
        if bytes.len() % stride != 0 {
            return Err(ErrorsOracle::precondition(format!(
                "{} byte buffer is not a whole number of {}-byte {} frames",
                bytes.len(),
                stride,
                self.name()
            )));
        }
        Ok(())
    }

    fn decode_one(&self, chunk: &[u8]) -> f64 {
        // chunk.len() == self.width(), enforced by chunks_exact in the callers
        let mut word = [0u8; 8];
        let width = chunk.len();
        if self.is_big_endian() {
            word[8 - width..].copy_from_slice(chunk);
            word.reverse();
        } else {
            word[..width].copy_from_slice(chunk);
        }
        let unsigned = u64::from_le_bytes(word);
        match self {
            SampleFormat::U8 | SampleFormat::U16Le | SampleFormat::U16Be | SampleFormat::U32Le | SampleFormat::U32Be => {
                unsigned as f64
            }
            SampleFormat::S8 => unsigned as u8 as i8 as f64,
            SampleFormat::S16Le | SampleFormat::S16Be => unsigned as u16 as i16 as f64,
            SampleFormat::S32Le | SampleFormat::S32Be => unsigned as u32 as i32 as f64,
            SampleFormat::F32Le | SampleFormat::F32Be => f32::from_bits(unsigned as u32) as f64,
            SampleFormat::F64Le | SampleFormat::F64Be => f64::from_bits(unsigned),
        }
    }

    /// Raw sample values as stored, before normalization.
    pub fn decode_raw(&self, bytes: &[u8]) -> Result<Vec<f64>, ErrorsOracle> {
        self.check_buffer(bytes, 1)?;
        Ok(bytes.chunks_exact(self.width()).map(|c| self.decode_one(c)).collect())
    }

    fn encode_one(&self, raw: f64, out: &mut Vec<u8>) {
        let word: u64 = match self {
            SampleFormat::F32Le | SampleFormat::F32Be => (raw as f32).to_bits() as u64,
            SampleFormat::F64Le | SampleFormat::F64Be => raw.to_bits(),
            // Signed values are stored two's complement in the low `bits` bits.
            _ => (raw as i64) as u64,
        };
        let le = word.to_le_bytes();
        let bytes = &le[..self.width()];
        if self.is_big_endian() {
            out.extend(bytes.iter().rev());
        } else {
            out.extend_from_slice(bytes);
        }
    }

    /// Inverse of `decode_raw` for values representable in the format.
    pub fn encode_raw(&self, raw: &[f64]) -> Vec<u8> {
        let mut out = Vec::with_capacity(raw.len() * self.width());
        for &v in raw {
            self.encode_one(v, &mut out);
        }
        out
    }

    /// Random raw samples covering the format's full range, one draw each.
    /// Float formats get unit-interval values rounded to `PRECISION` digits.
    pub fn random_raw(&self, sampler: &mut Sampler, n: usize) -> Vec<f64> {
        match self {
            SampleFormat::F32Le | SampleFormat::F32Be => sampler
                .unit_float(n)
                .into_iter()
                .map(|v| quantize(v) as f64)
                .collect(),
            SampleFormat::F64Le | SampleFormat::F64Be => sampler
                .unit_float(n)
                .into_iter()
                .map(crate::prelude::round_precision)
                .collect(),
            _ => {
                let bits = self.bits();
                sampler
                    .words(bits, n)
                    .into_iter()
                    .map(|w| {
                        if self.is_signed() {
                            // sign extend from `bits`
                            (((w << (64 - bits)) as i64) >> (64 - bits)) as f64
                        } else {
                            w as f64
                        }
                    })
                    .collect()
            }
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SampleFormat {
    type Err = ErrorsOracle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SampleFormat::ALL
            .iter()
            .copied()
            .find(|format| format.name() == s)
            .ok_or_else(|| ErrorsOracle::precondition(format!("unknown sample format {s:?}")))
    }
}

fn decode_normalized(format: SampleFormat, bytes: &[u8]) -> Result<Vec<f32>, ErrorsOracle> {
    Ok(format
        .decode_raw(bytes)?
        .into_iter()
        .map(|raw| quantize(format.normalize(raw) as f32 as f64))
        .collect())
}

/// One real sample per stored value.
pub fn decode_real(format: SampleFormat, bytes: &[u8]) -> Result<R1D, ErrorsOracle> {
    Ok(Array1::from_vec(decode_normalized(format, bytes)?))
}

/// Interleaved I/Q: adjacent stored values form one complex sample.
pub fn decode_complex(format: SampleFormat, bytes: &[u8]) -> Result<C1D, ErrorsOracle> {
    format.check_buffer(bytes, 2)?;
    let values = decode_normalized(format, bytes)?;
    Ok(Array1::from_iter(
        values.chunks_exact(2).map(|pair| Complex::new(pair[0], pair[1])),
    ))
}

/// Normalized samples back to bytes, rounding integer formats to the nearest code and clamping to
/// the format's range.
pub fn encode_samples(format: SampleFormat, samples: &[f64]) -> Vec<u8> {
    let raw: Vec<f64> = match format.scale_offset() {
        None => samples.to_vec(),
        Some((scale, offset)) => {
            let bits = format.bits();
            let (low, high) = if format.is_signed() {
                (-((1i64 << (bits - 1)) as f64), ((1i64 << (bits - 1)) - 1) as f64)
            } else {
                (0.0, ((1u64 << bits) - 1) as f64)
            };
            samples
                .iter()
                .map(|&v| (v * scale + offset).round().clamp(low, high))
                .collect()
        }
    };
    format.encode_raw(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for format in SampleFormat::ALL {
            assert_eq!(format.name().parse::<SampleFormat>().unwrap(), format);
            assert_eq!(format.to_string(), format.name());
        }
        assert!("u24le".parse::<SampleFormat>().is_err());
    }

    #[test]
    fn test_widths() {
        assert_eq!(SampleFormat::U8.width(), 1);
        assert_eq!(SampleFormat::S16Be.width(), 2);
        assert_eq!(SampleFormat::F32Le.width(), 4);
        assert_eq!(SampleFormat::F64Be.width(), 8);
        assert_eq!(SampleFormat::S32Le.width(), 4);
    }

    /// Normalized values are narrowed before rounding
    fn expected(v: f64) -> f32 {
        quantize(v as f32 as f64)
    }

    #[test]
    fn test_integer_normalization() {
        let out = decode_real(SampleFormat::U8, &[0, 255, 128]).unwrap();
        assert_eq!(out.to_vec(), vec![-1.0, 1.0, expected(0.5 / 127.5)]);
        let out = decode_real(SampleFormat::S8, &[0x80, 0x7f]).unwrap();
        assert_eq!(out.to_vec(), vec![expected(-128.0 / 127.5), expected(127.0 / 127.5)]);
        let out = decode_real(SampleFormat::U16Be, &[0xff, 0xff, 0x00, 0x00]).unwrap();
        assert_eq!(out.to_vec(), vec![1.0, -1.0]);
    }

    #[test]
    fn test_endianness() {
        let le = decode_raw_of(SampleFormat::S16Le, &[0x01, 0x80]);
        let be = decode_raw_of(SampleFormat::S16Be, &[0x80, 0x01]);
        assert_eq!(le, vec![-32767.0]);
        assert_eq!(le, be);
        let f = decode_raw_of(SampleFormat::F32Be, &1.5f32.to_be_bytes());
        assert_eq!(f, vec![1.5]);
        let f = decode_raw_of(SampleFormat::F64Le, &(-0.25f64).to_le_bytes());
        assert_eq!(f, vec![-0.25]);
    }

    fn decode_raw_of(format: SampleFormat, bytes: &[u8]) -> Vec<f64> {
        format.decode_raw(bytes).unwrap()
    }

    #[test]
    fn test_complex_pairs_adjacent_values() {
        let bytes = encode_samples(SampleFormat::F32Le, &[0.5, -0.5, 0.25, 1.0]);
        let out = decode_complex(SampleFormat::F32Le, &bytes).unwrap();
        assert_eq!(
            out.to_vec(),
            vec![Complex::new(0.5, -0.5), Complex::new(0.25, 1.0)]
        );
    }

    #[test]
    fn test_misaligned_buffers_rejected() {
        assert!(decode_real(SampleFormat::U16Le, &[0, 1, 2]).is_err());
        // Whole samples but an odd count of them
        assert!(decode_complex(SampleFormat::U16Le, &[0, 1, 2, 3, 4, 5]).is_err());
        assert!(decode_complex(SampleFormat::U8, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_raw_round_trip_for_random_samples() {
        let mut sampler = Sampler::from_seed(11);
        for format in SampleFormat::ALL {
            let raw = format.random_raw(&mut sampler, 64);
            let bytes = format.encode_raw(&raw);
            assert_eq!(bytes.len(), 64 * format.width());
            assert_eq!(format.decode_raw(&bytes).unwrap(), raw, "{format}");
            if !format.is_float() {
                // The most negative signed code lands just below -1.
                assert!(decode_real(format, &bytes)
                    .unwrap()
                    .iter()
                    .all(|v| v.abs() <= 1.004));
            }
        }
    }
}
