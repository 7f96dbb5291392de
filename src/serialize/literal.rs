/// Encoding of fixture values as Lua literal text.
///
/// Dispatch is on explicit tags only: a `Literal` says whether it is a scalar, a list, a typed sample
/// vector or a custom composite, and a `TypedArray` says which element kind it holds. Floating point
/// elements are written with exactly `PRECISION` fractional digits; they were rounded to that precision
/// when produced, so the consumer re-parses the same values the oracle saw.
use std::fmt::{self, Write};

use num::Complex;

use crate::{
    prelude::{ErrorsOracle, PRECISION},
    typed_array::TypedArray,
};

/// Values with their own literal form, e.g. protocol frames or harness helper calls.
pub trait CustomLiteral: fmt::Debug {
    fn to_literal(&self) -> Result<String, ErrorsOracle>;
}

#[derive(Debug)]
pub enum Literal {
    Integer(i64),
    Float(f64),
    Str(String),
    List(Vec<Literal>),
    Array(TypedArray),
    Custom(Box<dyn CustomLiteral>),
}

impl Literal {
    pub fn custom(value: impl CustomLiteral + 'static) -> Self {
        Literal::Custom(Box::new(value))
    }

    pub fn serialize(&self) -> Result<String, ErrorsOracle> {
        match self {
            Literal::Integer(v) => Ok(v.to_string()),
            Literal::Float(v) => serialize_scalar_float(*v),
            Literal::Str(s) => Ok(quote_string(s)),
            Literal::List(items) => serialize_sequence(items),
            Literal::Array(array) => serialize_typed_array(array),
            Literal::Custom(custom) => custom.to_literal(),
        }
    }

    pub fn as_f64(&self) -> Result<f64, ErrorsOracle> {
        match self {
            Literal::Float(v) => Ok(*v),
            Literal::Integer(v) => Ok(*v as f64),
            other => Err(ErrorsOracle::precondition(format!("expected a number, got {other:?}"))),
        }
    }

    pub fn as_usize(&self) -> Result<usize, ErrorsOracle> {
        match self {
            Literal::Integer(v) if *v >= 0 => Ok(*v as usize),
            other => Err(ErrorsOracle::precondition(format!(
                "expected a non-negative integer, got {other:?}"
            ))),
        }
    }

    /// A single number or a list of numbers, e.g. one or two filter cutoffs.
    pub fn as_f64_list(&self) -> Result<Vec<f64>, ErrorsOracle> {
        match self {
            Literal::List(items) => items.iter().map(Literal::as_f64).collect(),
            other => Ok(vec![other.as_f64()?]),
        }
    }

    pub fn as_array(&self) -> Result<&TypedArray, ErrorsOracle> {
        match self {
            Literal::Array(array) => Ok(array),
            other => Err(ErrorsOracle::precondition(format!(
                "expected a typed vector, got {other:?}"
            ))),
        }
    }
}

impl From<i64> for Literal {
    fn from(v: i64) -> Self {
        Literal::Integer(v)
    }
}

impl From<usize> for Literal {
    fn from(v: usize) -> Self {
        Literal::Integer(v as i64)
    }
}

impl From<f64> for Literal {
    fn from(v: f64) -> Self {
        Literal::Float(v)
    }
}

impl From<&str> for Literal {
    fn from(v: &str) -> Self {
        Literal::Str(v.to_string())
    }
}

impl From<TypedArray> for Literal {
    fn from(v: TypedArray) -> Self {
        Literal::Array(v)
    }
}

impl From<Vec<Literal>> for Literal {
    fn from(v: Vec<Literal>) -> Self {
        Literal::List(v)
    }
}

impl From<Vec<f64>> for Literal {
    fn from(v: Vec<f64>) -> Self {
        Literal::List(v.into_iter().map(Literal::Float).collect())
    }
}

fn check_finite(x: f64) -> Result<(), ErrorsOracle> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(ErrorsOracle::UnsupportedType(format!("non-finite float {x}")))
    }
}

/// Shortest text that reads back as the same double.
pub fn serialize_scalar_float(x: f64) -> Result<String, ErrorsOracle> {
    check_finite(x)?;
    Ok(format!("{x:?}"))
}

pub fn format_float_element(x: f32) -> Result<String, ErrorsOracle> {
    check_finite(x as f64)?;
    Ok(format!("{:.*}", PRECISION, x))
}

pub fn format_complex_element(z: Complex<f32>) -> Result<String, ErrorsOracle> {
    Ok(format!(
        "{{{}, {}}}",
        format_float_element(z.re)?,
        format_float_element(z.im)?
    ))
}

fn brace_join(parts: Vec<String>) -> String {
    format!("{{{}}}", parts.join(", "))
}

pub fn serialize_sequence(items: &[Literal]) -> Result<String, ErrorsOracle> {
    let parts = items
        .iter()
        .map(Literal::serialize)
        .collect::<Result<Vec<String>, ErrorsOracle>>()?;
    Ok(brace_join(parts))
}

pub fn serialize_typed_array(array: &TypedArray) -> Result<String, ErrorsOracle> {
    let parts = match array {
        TypedArray::ComplexFloat32(v) => v
            .iter()
            .map(|z| format_complex_element(*z))
            .collect::<Result<Vec<String>, ErrorsOracle>>()?,
        TypedArray::Float32(v) => v
            .iter()
            .map(|x| format_float_element(*x))
            .collect::<Result<Vec<String>, ErrorsOracle>>()?,
        TypedArray::Integer32(v) => v.iter().map(|x| x.to_string()).collect(),
        TypedArray::Bit(v) => v.iter().map(|&b| u8::from(b).to_string()).collect(),
    };
    Ok(format!("{}({})", array.kind().constructor(), brace_join(parts)))
}

/// `%.1e` with a signed two-digit exponent, e.g. `1.0e-06`.
pub fn format_epsilon(epsilon: f64) -> String {
    let formatted = format!("{epsilon:.1e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => formatted,
    }
}

/// Lua string literal escaping every byte as `\xNN`.
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 4);
    for b in bytes {
        let _ = write!(out, "\\x{b:02x}");
    }
    out
}

/// Double-quoted Lua string. Control characters are written as `\xNN` escapes of their UTF-8 bytes.
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            c if c.is_control() => {
                let mut utf8 = [0u8; 4];
                out.push_str(&escape_bytes(c.encode_utf8(&mut utf8).as_bytes()));
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
