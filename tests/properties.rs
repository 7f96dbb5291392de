//! Property tests for the oracle suite and the literal encoder.
//!
//! Reproduce a failure: `PROPTEST_SEED=<seed> cargo test --test properties`

use ndarray::Array1;
use num::Complex;
use proptest::prelude::*;
use radio_block_oracles::{
    dsp::{
        filters::{hilbert::fir_hilbert_transform, root_raised_cosine::fir_root_raised_cosine},
        windows::WindowType,
    },
    oracles::{
        filtering,
        sample_format::{decode_real, encode_samples, SampleFormat},
        timing,
    },
    serialize::literal::serialize_typed_array,
    typed_array::TypedArray,
};

fn floats(max_len: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-1.0f32..1.0, 0..max_len)
}

/// Element tokens inside a `Constructor({...})` literal, braces and separators stripped.
fn parse_tokens<'a>(literal: &'a str, constructor: &str) -> Vec<&'a str> {
    let body = literal
        .strip_prefix(constructor)
        .and_then(|rest| rest.strip_prefix("({"))
        .and_then(|rest| rest.strip_suffix("})"))
        .unwrap_or_else(|| panic!("not a {constructor} literal: {literal}"));
    body.split(|c| c == ',' || c == '{' || c == '}')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_numbers(literal: &str, constructor: &str) -> Vec<f64> {
    parse_tokens(literal, constructor)
        .into_iter()
        .map(|s| s.parse::<f64>().unwrap())
        .collect()
}

/// Random integers with both extremes of the range always present.
fn integers_with_extremes() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..64).prop_map(|mut values| {
        values.push(i32::MIN);
        values.insert(0, i32::MAX);
        values
    })
}

proptest! {
    #[test]
    fn test_filtering_preserves_length(
        taps in prop::collection::vec(-1.0f64..1.0, 1..40),
        x in floats(300),
        feedback in -0.9f64..0.9,
    ) {
        let input = TypedArray::from(x.clone());
        prop_assert_eq!(filtering::fir_filter(&taps, &input).unwrap().len(), x.len());
        prop_assert_eq!(filtering::iir_filter(&taps, &[1.0, feedback], &input).unwrap().len(), x.len());
        let complex: Vec<Complex<f32>> = x.iter().map(|&v| Complex::new(v, -v)).collect();
        let output = filtering::fir_filter(&taps, &TypedArray::from(complex)).unwrap();
        prop_assert_eq!(output.len(), x.len());
    }

    #[test]
    fn test_downsample_cardinality(len in 0usize..600, factor in 1usize..700) {
        let x = TypedArray::from(vec![0i32; len]);
        let expected = if factor > len { 0 } else { (len + factor - 1) / factor };
        prop_assert_eq!(timing::downsample(factor, &x).unwrap().len(), expected);
    }

    #[test]
    fn test_sampler_emission_bound_and_hysteresis(clock in floats(400)) {
        let edges = timing::clock_edges(&clock);
        prop_assert!(edges.len() <= clock.len());
        for pair in edges.windows(2) {
            let between = &clock[pair[0] + 1..pair[1]];
            prop_assert!(between.iter().any(|&c| c < 0.0), "no rearm between {:?}", pair);
        }
        for &i in &edges {
            prop_assert!(clock[i] > 0.0);
        }
        let data = TypedArray::from(Array1::from_iter((0..clock.len() as i32).map(|i| i * 3)));
        let sampled = timing::edge_sampler(&data, &TypedArray::from(clock.clone())).unwrap();
        let expected: Vec<i32> = edges.iter().map(|&i| i as i32 * 3).collect();
        prop_assert_eq!(sampled, TypedArray::from(expected));
    }

    #[test]
    fn test_delay_shifts_with_zero_fill(x in floats(300), n in 0usize..320) {
        let out = timing::delay(n, &TypedArray::from(x.clone()));
        let out = out.as_float().unwrap();
        prop_assert_eq!(out.len(), x.len());
        for (i, v) in out.iter().enumerate() {
            let expected = if i < n { 0.0 } else { x[i - n] };
            prop_assert_eq!(*v, expected);
        }
    }

    #[test]
    fn test_tap_designs_reject_even_counts(half in 1usize..200) {
        let even = 2 * half;
        prop_assert!(fir_root_raised_cosine(even, 1e6, 0.5, 1e-3).is_err());
        prop_assert!(fir_hilbert_transform(even, WindowType::Hamming).is_err());
        let odd = even + 1;
        prop_assert_eq!(fir_root_raised_cosine(odd, 1e6, 0.5, 1e-3).unwrap().len(), odd);
        prop_assert_eq!(fir_hilbert_transform(odd, WindowType::Hamming).unwrap().len(), odd);
    }

    #[test]
    fn test_sample_format_symmetry(
        samples in prop::collection::vec(-1.0f64..=1.0, 0..64),
        index in 0usize..SampleFormat::ALL.len(),
    ) {
        let format = SampleFormat::ALL[index];
        let bytes = encode_samples(format, &samples);
        prop_assert_eq!(bytes.len(), samples.len() * format.width());
        let decoded = decode_real(format, &bytes).unwrap();
        let step = if format.is_float() {
            0.0
        } else {
            2.0 / ((1u64 << format.bits()) - 1) as f64
        };
        for (d, s) in decoded.iter().zip(samples.iter()) {
            prop_assert!((*d as f64 - s).abs() <= step + 2e-7, "{} {} vs {}", format, d, s);
        }
    }

    #[test]
    fn test_encoded_vectors_reparse_within_epsilon(x in floats(64)) {
        let literal = serialize_typed_array(&TypedArray::from(x.clone())).unwrap();
        let parsed = parse_numbers(&literal, "radio.Float32Type.vector_from_array");
        prop_assert_eq!(parsed.len(), x.len());
        for (p, v) in parsed.iter().zip(x.iter()) {
            prop_assert!((p - *v as f64).abs() < 1e-6);
        }

        let complex: Vec<Complex<f32>> = x.iter().map(|&v| Complex::new(v, v / 2.0)).collect();
        let literal = serialize_typed_array(&TypedArray::from(complex)).unwrap();
        let parsed = parse_numbers(&literal, "radio.ComplexFloat32Type.vector_from_array");
        prop_assert_eq!(parsed.len(), 2 * x.len());
        for (pair, v) in parsed.chunks(2).zip(x.iter()) {
            prop_assert!((pair[0] - *v as f64).abs() < 1e-6);
            prop_assert!((pair[1] - (*v / 2.0) as f64).abs() < 1e-6);
        }
    }

    #[test]
    fn test_integer_vectors_reparse_exactly(x in integers_with_extremes()) {
        let literal = serialize_typed_array(&TypedArray::from(x.clone())).unwrap();
        let parsed: Vec<i32> = parse_tokens(&literal, "radio.Integer32Type.vector_from_array")
            .into_iter()
            .map(|s| s.parse::<i32>().unwrap())
            .collect();
        prop_assert_eq!(parsed, x);
    }

    #[test]
    fn test_bit_vectors_reparse_exactly(x in prop::collection::vec(any::<bool>(), 0..128)) {
        let literal = serialize_typed_array(&TypedArray::from(x.clone())).unwrap();
        let parsed: Vec<bool> = parse_tokens(&literal, "radio.BitType.vector_from_array")
            .into_iter()
            .map(|s| match s {
                "0" => false,
                "1" => true,
                other => panic!("not a bit: {other}"),
            })
            .collect();
        prop_assert_eq!(parsed, x);
    }
}

#[test]
fn test_rrc_scenario_has_unit_sum() {
    let taps = fir_root_raised_cosine(101, 1e6, 0.5, 1e-3).unwrap();
    assert_eq!(taps.len(), 101);
    let total: f64 = taps.iter().map(|&t| t as f64).sum();
    assert!((total - 1.0).abs() < 1e-5);
}

#[test]
fn test_delay_scenario() {
    let x: Vec<f32> = (1..=256).map(|i| i as f32).collect();
    let out = timing::delay(15, &TypedArray::from(x));
    let out = out.as_float().unwrap();
    assert!(out.iter().take(15).all(|&v| v == 0.0));
    assert_eq!(out[15], 1.0);
    assert_eq!(out[255], 241.0);
}
