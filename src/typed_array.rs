/// Sample vectors as the blocks under test see them: one element kind per vector, carried as an explicit tag.
/// Oracles match on the tag instead of inspecting element types, and the encoder uses it to pick
/// the constructor the consuming harness needs to rebuild the vector.
use ndarray::Array1;
use num::Complex;

use crate::prelude::{ErrorsOracle, B1D, C1D, I1D, R1D};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    ComplexFloat32,
    Float32,
    Integer32,
    Bit,
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::ComplexFloat32 => "ComplexFloat32",
            ElementKind::Float32 => "Float32",
            ElementKind::Integer32 => "Integer32",
            ElementKind::Bit => "Bit",
        }
    }

    /// Harness expression that turns a brace list back into a typed vector.
    pub fn constructor(&self) -> &'static str {
        match self {
            ElementKind::ComplexFloat32 => "radio.ComplexFloat32Type.vector_from_array",
            ElementKind::Float32 => "radio.Float32Type.vector_from_array",
            ElementKind::Integer32 => "radio.Integer32Type.vector_from_array",
            ElementKind::Bit => "radio.BitType.vector_from_array",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TypedArray {
    ComplexFloat32(C1D),
    Float32(R1D),
    Integer32(I1D),
    Bit(B1D),
}

/// Apply a kind-generic expression to whichever array a `TypedArray` holds and rewrap the result in the same kind.
/// The body is monomorphized once per arm, so it can call functions generic over the element type.
#[macro_export]
macro_rules! map_typed_array {
    ($array:expr, |$v:ident| $body:expr) => {
        match $array {
            $crate::typed_array::TypedArray::ComplexFloat32($v) => {
                $crate::typed_array::TypedArray::ComplexFloat32($body)
            }
            $crate::typed_array::TypedArray::Float32($v) => {
                $crate::typed_array::TypedArray::Float32($body)
            }
            $crate::typed_array::TypedArray::Integer32($v) => {
                $crate::typed_array::TypedArray::Integer32($body)
            }
            $crate::typed_array::TypedArray::Bit($v) => $crate::typed_array::TypedArray::Bit($body),
        }
    };
}

impl TypedArray {
    pub fn kind(&self) -> ElementKind {
        match self {
            TypedArray::ComplexFloat32(_) => ElementKind::ComplexFloat32,
            TypedArray::Float32(_) => ElementKind::Float32,
            TypedArray::Integer32(_) => ElementKind::Integer32,
            TypedArray::Bit(_) => ElementKind::Bit,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TypedArray::ComplexFloat32(v) => v.len(),
            TypedArray::Float32(v) => v.len(),
            TypedArray::Integer32(v) => v.len(),
            TypedArray::Bit(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_complex(&self) -> Result<&C1D, ErrorsOracle> {
        match self {
            TypedArray::ComplexFloat32(v) => Ok(v),
            other => Err(other.kind_mismatch(ElementKind::ComplexFloat32)),
        }
    }

    pub fn as_float(&self) -> Result<&R1D, ErrorsOracle> {
        match self {
            TypedArray::Float32(v) => Ok(v),
            other => Err(other.kind_mismatch(ElementKind::Float32)),
        }
    }

    pub fn as_integer(&self) -> Result<&I1D, ErrorsOracle> {
        match self {
            TypedArray::Integer32(v) => Ok(v),
            other => Err(other.kind_mismatch(ElementKind::Integer32)),
        }
    }

    pub fn as_bit(&self) -> Result<&B1D, ErrorsOracle> {
        match self {
            TypedArray::Bit(v) => Ok(v),
            other => Err(other.kind_mismatch(ElementKind::Bit)),
        }
    }

    fn kind_mismatch(&self, expected: ElementKind) -> ErrorsOracle {
        ErrorsOracle::precondition(format!(
            "expected a {} vector, got {}",
            expected.name(),
            self.kind().name()
        ))
    }

    /// Concatenate vectors of one kind, e.g. padding a bit pattern with random bits.
    pub fn concatenate(parts: &[TypedArray]) -> Result<TypedArray, ErrorsOracle> {
        let first = parts
            .first()
            .ok_or_else(|| ErrorsOracle::precondition("nothing to concatenate"))?;
        let joined = match first.kind() {
            ElementKind::ComplexFloat32 => TypedArray::ComplexFloat32(join(parts, TypedArray::as_complex)?),
            ElementKind::Float32 => TypedArray::Float32(join(parts, TypedArray::as_float)?),
            ElementKind::Integer32 => TypedArray::Integer32(join(parts, TypedArray::as_integer)?),
            ElementKind::Bit => TypedArray::Bit(join(parts, TypedArray::as_bit)?),
        };
        Ok(joined)
    }
}

fn join<T: Clone>(
    parts: &[TypedArray],
    view: fn(&TypedArray) -> Result<&Array1<T>, ErrorsOracle>,
) -> Result<Array1<T>, ErrorsOracle> {
    let mut out = Vec::new();
    for part in parts {
        out.extend(view(part)?.iter().cloned());
    }
    Ok(Array1::from_vec(out))
}

impl From<C1D> for TypedArray {
    fn from(v: C1D) -> Self {
        TypedArray::ComplexFloat32(v)
    }
}

impl From<R1D> for TypedArray {
    fn from(v: R1D) -> Self {
        TypedArray::Float32(v)
    }
}

impl From<I1D> for TypedArray {
    fn from(v: I1D) -> Self {
        TypedArray::Integer32(v)
    }
}

impl From<B1D> for TypedArray {
    fn from(v: B1D) -> Self {
        TypedArray::Bit(v)
    }
}

impl From<Vec<Complex<f32>>> for TypedArray {
    fn from(v: Vec<Complex<f32>>) -> Self {
        TypedArray::ComplexFloat32(Array1::from_vec(v))
    }
}

impl From<Vec<f32>> for TypedArray {
    fn from(v: Vec<f32>) -> Self {
        TypedArray::Float32(Array1::from_vec(v))
    }
}

impl From<Vec<i32>> for TypedArray {
    fn from(v: Vec<i32>) -> Self {
        TypedArray::Integer32(Array1::from_vec(v))
    }
}

impl From<Vec<bool>> for TypedArray {
    fn from(v: Vec<bool>) -> Self {
        TypedArray::Bit(Array1::from_vec(v))
    }
}
