/// Sample-timing blocks: delay lines, decimation and clocked sampling.
/// All three accept any element kind and return the kind they were given.
use ndarray::Array1;

use crate::{
    map_typed_array,
    oracles::check_same_length,
    prelude::ErrorsOracle,
    typed_array::TypedArray,
};

fn shift_right<T: Clone + Default>(x: &Array1<T>, n: usize) -> Array1<T> {
    let len = x.len();
    Array1::from_iter(
        std::iter::repeat(T::default())
            .take(n.min(len))
            .chain(x.iter().take(len.saturating_sub(n)).cloned()),
    )
}

/// Shift right by `n` with zero fill, keeping the input length.
pub fn delay(n: usize, x: &TypedArray) -> TypedArray {
    map_typed_array!(x, |v| shift_right(v, n))
}

fn every_nth<T: Clone>(x: &Array1<T>, factor: usize) -> Array1<T> {
    if factor > x.len() {
        return Array1::from_vec(Vec::new());
    }
    Array1::from_iter(x.iter().step_by(factor).cloned())
}

/// Every `factor`-th element starting at index 0. A factor larger than the input yields nothing.
pub fn downsample(factor: usize, x: &TypedArray) -> Result<TypedArray, ErrorsOracle> {
    if factor == 0 {
        return Err(ErrorsOracle::precondition("Downsampling factor must be at least 1."));
    }
    Ok(map_typed_array!(x, |v| every_nth(v, factor)))
}

/// Indices at which a hysteresis latch on `clock` fires: a strictly positive sample fires and arms the
/// latch, which only rearms after a strictly negative sample.
pub fn clock_edges(clock: &[f32]) -> Vec<usize> {
    let mut high = false;
    let mut edges = Vec::new();
    for (i, &c) in clock.iter().enumerate() {
        if !high && c > 0.0 {
            edges.push(i);
            high = true;
        } else if high && c < 0.0 {
            high = false;
        }
    }
    edges
}

fn pick<T: Clone>(x: &Array1<T>, indices: &[usize]) -> Array1<T> {
    Array1::from_iter(indices.iter().map(|&i| x[i].clone()))
}

/// Data samples taken at the clock's rising edges. Output length depends on the clock.
pub fn edge_sampler(data: &TypedArray, clock: &TypedArray) -> Result<TypedArray, ErrorsOracle> {
    let clock = clock.as_float()?;
    check_same_length(data.len(), clock.len())?;
    let edges = clock_edges(&clock.to_vec());
    Ok(map_typed_array!(data, |v| pick(v, &edges)))
}
