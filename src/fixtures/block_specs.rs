/// Generators for the per-block fixtures. Each one draws its inputs from its own sampler, in a fixed
/// order, and pairs them with oracle outputs.
use crate::{
    dsp::filters::butterworth::butter_lowpass,
    fixtures::{
        registry::Registry,
        test_vector::{arg, input, taps_arg, TestVector},
    },
    oracles::{
        arithmetic, bits, demodulation, filtering,
        rds::{self, RdsFrame, RdsFrameVector},
        timing,
    },
    prelude::{quantize, ErrorsOracle, EPSILON, R1D},
    random::sampler::Sampler,
    serialize::literal::Literal,
    typed_array::TypedArray,
};

type Vectors = Result<Vec<TestVector>, ErrorsOracle>;
type Outputs = Result<Vec<Literal>, ErrorsOracle>;

const SIGNAL: &str = "tests/blocks/signal";

fn signal_path(name: &str) -> String {
    format!("{SIGNAL}/{name}_spec.lua")
}

fn single(output: TypedArray) -> Vec<Literal> {
    vec![Literal::Array(output)]
}

fn complex_then_float(sampler: &mut Sampler, n: usize) -> [TypedArray; 2] {
    let complex = sampler.complex_float32(n).into();
    let float = sampler.float32(n).into();
    [complex, float]
}

/// Random taps scaled to unit absolute sum, rounded like every other float.
fn normalized_taps(sampler: &mut Sampler, n: usize) -> R1D {
    let taps = sampler.float32(n);
    let total: f64 = taps.iter().map(|&t| (t as f64).abs()).sum();
    taps.mapv(|t| quantize(t as f64 / total))
}

fn firfilter(sampler: &mut Sampler) -> Vectors {
    let oracle = |args: &[Literal], inputs: &[TypedArray]| -> Outputs {
        Ok(single(filtering::fir_filter(&taps_arg(args, 0)?, input(inputs, 0)?)?))
    };
    let mut vectors = Vec::new();
    for complex in [true, false] {
        let x: TypedArray = if complex {
            sampler.complex_float32(256).into()
        } else {
            sampler.float32(256).into()
        };
        for n in [1, 8, 15, 128] {
            let taps = normalized_taps(sampler, n);
            let kind = x.kind().name();
            let note = format!("{n} Float32 tap, 256 {kind} input, 256 {kind} output");
            vectors.push(TestVector::generate(
                oracle,
                vec![Literal::Array(taps.into())],
                vec![x.clone()],
                Some(note.as_str()),
            )?);
        }
    }
    Ok(vectors)
}

/// butter(n - 1, 0.5) with both tap vectors rounded to single precision.
fn butterworth_taps(n: usize) -> Result<Vec<Literal>, ErrorsOracle> {
    let (b, a) = butter_lowpass(n - 1, 0.5)?;
    let round = |v: Vec<f64>| Literal::Array(v.into_iter().map(quantize).collect::<Vec<f32>>().into());
    Ok(vec![round(b), round(a)])
}

fn iirfilter(sampler: &mut Sampler) -> Vectors {
    let oracle = |args: &[Literal], inputs: &[TypedArray]| -> Outputs {
        Ok(single(filtering::iir_filter(
            &taps_arg(args, 0)?,
            &taps_arg(args, 1)?,
            input(inputs, 0)?,
        )?))
    };
    let mut vectors = Vec::new();
    for x in complex_then_float(sampler, 256) {
        for n in [3, 5, 10] {
            let kind = x.kind().name();
            let note = format!("{n} Float32 b taps, {n} Float32 a taps, 256 {kind} input, 256 {kind} output");
            vectors.push(TestVector::generate(oracle, butterworth_taps(n)?, vec![x.clone()], Some(note.as_str()))?);
        }
    }
    Ok(vectors)
}

/// Two-input vectors for each requested kind, both inputs drawn before the next kind.
fn binary_vectors(
    sampler: &mut Sampler,
    kinds: &[&str],
    op: fn(&TypedArray, &TypedArray) -> Result<TypedArray, ErrorsOracle>,
) -> Vectors {
    let oracle =
        |_: &[Literal], inputs: &[TypedArray]| -> Outputs { Ok(single(op(input(inputs, 0)?, input(inputs, 1)?)?)) };
    let mut vectors = Vec::new();
    for &kind in kinds {
        let (x, y): (TypedArray, TypedArray) = match kind {
            "ComplexFloat32" => (sampler.complex_float32(256).into(), sampler.complex_float32(256).into()),
            "Float32" => (sampler.float32(256).into(), sampler.float32(256).into()),
            _ => (sampler.integer32(256).into(), sampler.integer32(256).into()),
        };
        let note = format!("2 256 {kind} inputs, 256 {kind} output");
        vectors.push(TestVector::generate(oracle, vec![], vec![x, y], Some(note.as_str()))?);
    }
    Ok(vectors)
}

fn multiply(sampler: &mut Sampler) -> Vectors {
    binary_vectors(sampler, &["ComplexFloat32", "Float32"], arithmetic::multiply)
}

fn multiplyconjugate(sampler: &mut Sampler) -> Vectors {
    binary_vectors(sampler, &["ComplexFloat32"], arithmetic::multiply_conjugate)
}

fn sum(sampler: &mut Sampler) -> Vectors {
    binary_vectors(sampler, &["ComplexFloat32", "Float32", "Integer32"], arithmetic::sum)
}

fn complextoreal(sampler: &mut Sampler) -> Vectors {
    let x: TypedArray = sampler.complex_float32(256).into();
    Ok(vec![TestVector::generate(
        |_, inputs| Ok(single(arithmetic::complex_to_real(input(inputs, 0)?)?)),
        vec![],
        vec![x],
        Some("256 ComplexFloat32 input, 256 Float32 output"),
    )?])
}

fn slicer(sampler: &mut Sampler) -> Vectors {
    let x: TypedArray = sampler.float32(256).into();
    let oracle = |args: &[Literal], inputs: &[TypedArray]| -> Outputs {
        Ok(single(bits::slicer(arg(args, 0)?.as_f64()?, input(inputs, 0)?)?))
    };
    [(0.0, "Default"), (0.25, "0.25"), (-0.25, "-0.25")]
        .into_iter()
        .map(|(threshold, label)| {
            let note = format!("{label} threshold, 256 Float32 input, 256 Bit output");
            TestVector::generate(oracle, vec![Literal::Float(threshold)], vec![x.clone()], Some(note.as_str()))
        })
        .collect()
}

fn differentialdecoder(sampler: &mut Sampler) -> Vectors {
    let x: TypedArray = sampler.bit(256).into();
    Ok(vec![TestVector::generate(
        |_, inputs| Ok(single(bits::differential_decode(input(inputs, 0)?)?)),
        vec![],
        vec![x],
        Some("256 Bit input, 256 Bit output"),
    )?])
}

fn delay(sampler: &mut Sampler) -> Vectors {
    let oracle = |args: &[Literal], inputs: &[TypedArray]| -> Outputs {
        Ok(single(timing::delay(arg(args, 0)?.as_usize()?, input(inputs, 0)?)))
    };
    let mut vectors = Vec::new();
    let mut inputs: Vec<TypedArray> = complex_then_float(sampler, 256).into();
    inputs.push(sampler.integer32(256).into());
    for x in inputs {
        for n in [1usize, 15, 100] {
            let kind = x.kind().name();
            let note = format!("{n} Sample Delay, 256 {kind} input, 256 {kind} output");
            vectors.push(TestVector::generate(oracle, vec![n.into()], vec![x.clone()], Some(note.as_str()))?);
        }
    }
    Ok(vectors)
}

fn frequencydiscriminator(sampler: &mut Sampler) -> Vectors {
    let x: TypedArray = sampler.complex_float32(256).into();
    let oracle = |args: &[Literal], inputs: &[TypedArray]| -> Outputs {
        Ok(single(demodulation::frequency_discriminator(
            arg(args, 0)?.as_f64()?,
            input(inputs, 0)?,
        )?))
    };
    [1.0, 5.0, 10.0]
        .into_iter()
        .map(|gain: f64| {
            let note = format!("{gain:.1} Gain, 256 ComplexFloat32 input, 256 Float32 output");
            TestVector::generate(oracle, vec![Literal::Float(gain)], vec![x.clone()], Some(note.as_str()))
        })
        .collect()
}

fn sampler_block(sampler: &mut Sampler) -> Vectors {
    let oracle = |_: &[Literal], inputs: &[TypedArray]| -> Outputs {
        Ok(single(timing::edge_sampler(input(inputs, 0)?, input(inputs, 1)?)?))
    };
    let mut vectors = Vec::new();
    for complex_data in [true, false] {
        let data: TypedArray = if complex_data {
            sampler.complex_float32(256).into()
        } else {
            sampler.float32(256).into()
        };
        let clock: TypedArray = sampler.float32(256).into();
        let kind = data.kind().name();
        let note = format!("256 {kind} data, 256 Float32 clock, {kind} output");
        vectors.push(TestVector::generate(oracle, vec![], vec![data, clock], Some(note.as_str()))?);
    }
    Ok(vectors)
}

fn downsampler(sampler: &mut Sampler) -> Vectors {
    let oracle = |args: &[Literal], inputs: &[TypedArray]| -> Outputs {
        Ok(single(timing::downsample(arg(args, 0)?.as_usize()?, input(inputs, 0)?)?))
    };
    let mut inputs: Vec<TypedArray> = complex_then_float(sampler, 256).into();
    inputs.push(sampler.integer32(256).into());
    let mut vectors = Vec::new();
    for x in inputs {
        for factor in [1usize, 2, 3, 4, 7, 16, 128, 200, 256, 257] {
            let produced = timing::downsample(factor, &x)?.len();
            let kind = x.kind().name();
            let note = format!("{factor} Factor, 256 {kind} input, {produced} {kind} output");
            vectors.push(TestVector::generate(oracle, vec![factor.into()], vec![x.clone()], Some(note.as_str()))?);
        }
    }
    Ok(vectors)
}

fn hilberttransform(sampler: &mut Sampler) -> Vectors {
    let x: TypedArray = sampler.float32(256).into();
    let oracle = |args: &[Literal], inputs: &[TypedArray]| -> Outputs {
        Ok(single(filtering::hilbert_modulate(arg(args, 0)?.as_usize()?, input(inputs, 0)?)?))
    };
    [9usize, 65, 129, 257]
        .into_iter()
        .map(|taps| {
            let note = format!("{taps} taps, 256 Float32 input, 256 ComplexFloat32 output");
            TestVector::generate(oracle, vec![taps.into()], vec![x.clone()], Some(note.as_str()))
        })
        .collect()
}

fn binaryphasecorrector(sampler: &mut Sampler) -> Vectors {
    let x: TypedArray = sampler.complex_float32(256).into();
    let oracle = |args: &[Literal], inputs: &[TypedArray]| -> Outputs {
        Ok(single(demodulation::binary_phase_correct(
            arg(args, 0)?.as_usize()?,
            input(inputs, 0)?,
        )?))
    };
    [4usize, 17, 64, 100]
        .into_iter()
        .map(|n| {
            let note = format!("{n} sample average, 256 ComplexFloat32 input, 256 ComplexFloat32 output");
            TestVector::generate(oracle, vec![n.into()], vec![x.clone()], Some(note.as_str()))
        })
        .collect()
}

fn frequencytranslator(sampler: &mut Sampler) -> Vectors {
    let x: TypedArray = sampler.complex_float32(256).into();
    let oracle = |args: &[Literal], inputs: &[TypedArray]| -> Outputs {
        Ok(single(demodulation::frequency_translate(arg(args, 0)?.as_f64()?, input(inputs, 0)?)?))
    };
    [0.2, 0.5, 0.7]
        .into_iter()
        .map(|offset: f64| {
            let note = format!("{offset} offset, 256 ComplexFloat32 input, 256 ComplexFloat32 output");
            TestVector::generate(oracle, vec![Literal::Float(offset)], vec![x.clone()], Some(note.as_str()))
        })
        .collect()
}

/// Design-backed filter vectors: every argument set runs over a complex input, then over a real one.
fn designed_filter_vectors<O>(sampler: &mut Sampler, arg_sets: Vec<(Vec<Literal>, String)>, oracle: O) -> Vectors
where
    O: Fn(&[Literal], &[TypedArray]) -> Result<Vec<Literal>, ErrorsOracle> + Copy,
{
    let mut vectors = Vec::new();
    let x: TypedArray = sampler.complex_float32(256).into();
    push_designed(&mut vectors, &arg_sets, &x, oracle)?;
    let x: TypedArray = sampler.float32(256).into();
    push_designed(&mut vectors, &arg_sets, &x, oracle)?;
    Ok(vectors)
}

fn push_designed<O>(
    vectors: &mut Vec<TestVector>,
    arg_sets: &[(Vec<Literal>, String)],
    x: &TypedArray,
    oracle: O,
) -> Result<(), ErrorsOracle>
where
    O: Fn(&[Literal], &[TypedArray]) -> Result<Vec<Literal>, ErrorsOracle> + Copy,
{
    let kind = x.kind().name();
    for (args, label) in arg_sets {
        let args = args.iter().map(clone_design_arg).collect::<Result<Vec<Literal>, ErrorsOracle>>()?;
        let note = format!("{label}, 256 {kind} input, 256 {kind} output");
        vectors.push(TestVector::generate(oracle, args, vec![x.clone()], Some(note.as_str()))?);
    }
    Ok(())
}

/// Copy of a numeric argument tree. Design arguments are plain numbers and lists of numbers.
fn clone_design_arg(literal: &Literal) -> Result<Literal, ErrorsOracle> {
    match literal {
        Literal::Integer(v) => Ok(Literal::Integer(*v)),
        Literal::Float(v) => Ok(Literal::Float(*v)),
        Literal::List(items) => Ok(Literal::List(
            items.iter().map(clone_design_arg).collect::<Result<Vec<Literal>, ErrorsOracle>>()?,
        )),
        other => Err(ErrorsOracle::precondition(format!("not a design argument: {other:?}"))),
    }
}

fn cutoff_sets(num_taps: usize, cutoffs: &[f64]) -> Vec<(Vec<Literal>, String)> {
    cutoffs
        .iter()
        .map(|&c| {
            (
                vec![num_taps.into(), Literal::Float(c)],
                format!("{num_taps} taps, {c} cutoff"),
            )
        })
        .collect()
}

fn band_sets(num_taps: usize, bands: &[[f64; 2]]) -> Vec<(Vec<Literal>, String)> {
    bands
        .iter()
        .map(|&[low, high]| {
            (
                vec![num_taps.into(), Literal::from(vec![low, high])],
                format!("{num_taps} taps, {{{low}, {high}}} cutoff"),
            )
        })
        .collect()
}

fn lowpassfilter(sampler: &mut Sampler) -> Vectors {
    designed_filter_vectors(sampler, cutoff_sets(128, &[0.2, 0.5, 0.7]), |args, inputs| {
        Ok(single(filtering::lowpass_filter(
            arg(args, 0)?.as_usize()?,
            arg(args, 1)?.as_f64()?,
            input(inputs, 0)?,
        )?))
    })
}

fn highpassfilter(sampler: &mut Sampler) -> Vectors {
    designed_filter_vectors(sampler, cutoff_sets(129, &[0.2, 0.5, 0.7]), |args, inputs| {
        Ok(single(filtering::highpass_filter(
            arg(args, 0)?.as_usize()?,
            arg(args, 1)?.as_f64()?,
            input(inputs, 0)?,
        )?))
    })
}

fn bandpassfilter(sampler: &mut Sampler) -> Vectors {
    designed_filter_vectors(sampler, band_sets(129, &[[0.1, 0.3], [0.4, 0.6]]), |args, inputs| {
        Ok(single(filtering::bandpass_filter(
            arg(args, 0)?.as_usize()?,
            &arg(args, 1)?.as_f64_list()?,
            input(inputs, 0)?,
        )?))
    })
}

fn bandstopfilter(sampler: &mut Sampler) -> Vectors {
    designed_filter_vectors(sampler, band_sets(129, &[[0.1, 0.3], [0.4, 0.6]]), |args, inputs| {
        Ok(single(filtering::bandstop_filter(
            arg(args, 0)?.as_usize()?,
            &arg(args, 1)?.as_f64_list()?,
            input(inputs, 0)?,
        )?))
    })
}

fn fmdeemphasisfilter(sampler: &mut Sampler) -> Vectors {
    let x: TypedArray = sampler.float32(256).into();
    let oracle = |args: &[Literal], inputs: &[TypedArray]| -> Outputs {
        Ok(single(filtering::fm_deemphasis_filter(arg(args, 0)?.as_f64()?, input(inputs, 0)?)?))
    };
    [(75e-6, "75e-6"), (50e-6, "50e-6")]
        .into_iter()
        .map(|(tau, label)| {
            let note = format!("{label} tau, 256 Float32 input, 256 Float32 output");
            TestVector::generate(oracle, vec![Literal::Float(tau)], vec![x.clone()], Some(note.as_str()))
        })
        .collect()
}

fn rootraisedcosinefilter(sampler: &mut Sampler) -> Vectors {
    let sets = [(0.5, 1e-3, "1e-3"), (0.7, 1e-3, "1e-3"), (1.0, 5e-3, "5e-3")]
        .into_iter()
        .map(|(beta, rate, label)| {
            (
                vec![101usize.into(), Literal::Float(beta), Literal::Float(rate)],
                format!("101 taps, {beta:.1} beta, {label} symbol rate"),
            )
        })
        .collect();
    designed_filter_vectors(sampler, sets, |args, inputs| {
        Ok(single(filtering::root_raised_cosine_filter(
            arg(args, 0)?.as_usize()?,
            arg(args, 1)?.as_f64()?,
            arg(args, 2)?.as_f64()?,
            input(inputs, 0)?,
        )?))
    })
}

/// Bit stream for one RDS case, after confirming every group in it decodes to its expected frame.
fn rds_case(
    sampler: &mut Sampler,
    groups: &[(Vec<bool>, RdsFrame)],
    pad: usize,
) -> Result<TypedArray, ErrorsOracle> {
    for (group_bits, frame) in groups {
        rds::confirm_group(group_bits, *frame)?;
    }
    let mut parts: Vec<TypedArray> = Vec::new();
    if pad > 0 {
        parts.push(sampler.bit(pad).into());
    }
    parts.extend(groups.iter().map(|(group_bits, _)| TypedArray::from(group_bits.clone())));
    if pad > 0 {
        parts.push(sampler.bit(pad).into());
    }
    TypedArray::concatenate(&parts)
}

fn flipped(mut group_bits: Vec<bool>, index: usize) -> Vec<bool> {
    group_bits[index] = !group_bits[index];
    group_bits
}

fn rdsframe(sampler: &mut Sampler) -> Vectors {
    let group_1 = rds::parse_bits(rds::GROUP_1_BITS)?;
    let group_2 = rds::parse_bits(rds::GROUP_2_BITS)?;
    let group_3 = rds::parse_bits(rds::GROUP_3_BITS)?;

    let cases = vec![
        ("Valid frame 1", vec![(group_1.clone(), rds::GROUP_1_FRAME)], 20),
        ("Valid frame 2", vec![(group_2.clone(), rds::GROUP_2_FRAME)], 20),
        ("Valid frame 3", vec![(group_3.clone(), rds::GROUP_3_FRAME)], 20),
        (
            "Frame 1 with message bit error",
            vec![(flipped(group_1.clone(), 7), rds::GROUP_1_FRAME)],
            20,
        ),
        (
            "Frame 2 with crc bit error",
            vec![(flipped(group_2.clone(), 19), rds::GROUP_2_FRAME)],
            20,
        ),
        (
            "Three contiguous frames",
            vec![
                (group_1, rds::GROUP_1_FRAME),
                (group_2, rds::GROUP_2_FRAME),
                (group_3, rds::GROUP_3_FRAME),
            ],
            0,
        ),
    ];

    let mut vectors = Vec::new();
    for (note, groups, pad) in cases {
        let x = rds_case(sampler, &groups, pad)?;
        let frames: Vec<RdsFrame> = groups.iter().map(|(_, frame)| *frame).collect();
        let oracle = move |_: &[Literal], _: &[TypedArray]| -> Outputs {
            Ok(vec![Literal::custom(RdsFrameVector(frames))])
        };
        vectors.push(TestVector::generate(oracle, vec![], vec![x], Some(note))?);
    }
    Ok(vectors)
}

/// Every per-block fixture, in generation order.
pub fn register(registry: &mut Registry) {
    let blocks: [(&str, &str, fn(&mut Sampler) -> Vectors); 14] = [
        ("FIRFilterBlock", "firfilter", firfilter),
        ("IIRFilterBlock", "iirfilter", iirfilter),
        ("MultiplyBlock", "multiply", multiply),
        ("MultiplyConjugateBlock", "multiplyconjugate", multiplyconjugate),
        ("SumBlock", "sum", sum),
        ("ComplexToRealBlock", "complextoreal", complextoreal),
        ("SlicerBlock", "slicer", slicer),
        ("DifferentialDecoderBlock", "differentialdecoder", differentialdecoder),
        ("DelayBlock", "delay", delay),
        ("FrequencyDiscriminatorBlock", "frequencydiscriminator", frequencydiscriminator),
        ("SamplerBlock", "sampler", sampler_block),
        ("DownsamplerBlock", "downsampler", downsampler),
        ("HilbertTransformBlock", "hilberttransform", hilberttransform),
        ("BinaryPhaseCorrectorBlock", "binaryphasecorrector", binaryphasecorrector),
    ];
    for (block_name, name, generator) in blocks {
        registry.block_spec(block_name, &signal_path(name), EPSILON, generator);
    }
}

/// Fixtures registered after the shared filter constants.
pub fn register_designed(registry: &mut Registry) {
    registry.block_spec(
        "FrequencyTranslatorBlock",
        &signal_path("frequencytranslator"),
        1e-5,
        frequencytranslator,
    );
    let blocks: [(&str, &str, fn(&mut Sampler) -> Vectors); 6] = [
        ("LowpassFilterBlock", "lowpassfilter", lowpassfilter),
        ("HighpassFilterBlock", "highpassfilter", highpassfilter),
        ("BandpassFilterBlock", "bandpassfilter", bandpassfilter),
        ("BandstopFilterBlock", "bandstopfilter", bandstopfilter),
        ("FMDeemphasisFilterBlock", "fmdeemphasisfilter", fmdeemphasisfilter),
        ("RootRaisedCosineFilterBlock", "rootraisedcosinefilter", rootraisedcosinefilter),
    ];
    for (block_name, name, generator) in blocks {
        registry.block_spec(block_name, &signal_path(name), EPSILON, generator);
    }
    registry.block_spec(
        "RDSFrameBlock",
        "tests/blocks/protocol/rdsframe_spec.lua",
        EPSILON,
        rdsframe,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_array(vector: &TestVector) -> &TypedArray {
        match vector.outputs().first() {
            Some(Literal::Array(out)) => out,
            other => panic!("unexpected output {other:?}"),
        }
    }

    #[test]
    fn test_firfilter_taps_are_normalized() {
        let mut sampler = Sampler::from_seed(1);
        let vectors = firfilter(&mut sampler).unwrap();
        assert_eq!(vectors.len(), 8);
        for vector in &vectors {
            let taps = taps_arg(vector.args(), 0).unwrap();
            let total: f64 = taps.iter().map(|t| t.abs()).sum();
            assert!((total - 1.0).abs() < 1e-6, "{total}");
            assert_eq!(output_array(vector).len(), 256);
        }
    }

    #[test]
    fn test_iir_taps_come_from_butterworth() {
        let taps = butterworth_taps(3).unwrap();
        let b = taps[0].as_array().unwrap().as_float().unwrap();
        for (got, want) in b.iter().zip([0.29289322, 0.58578644, 0.29289322]) {
            assert!((*got as f64 - want).abs() < 1e-7);
        }
        assert_eq!(taps[1].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_downsampler_notes_report_output_length() {
        let mut sampler = Sampler::from_seed(1);
        let vectors = downsampler(&mut sampler).unwrap();
        assert_eq!(vectors.len(), 30);
        assert_eq!(vectors[8].note(), Some("256 Factor, 256 ComplexFloat32 input, 1 ComplexFloat32 output"));
        assert_eq!(vectors[9].note(), Some("257 Factor, 256 ComplexFloat32 input, 0 ComplexFloat32 output"));
        assert!(output_array(&vectors[9]).is_empty());
    }

    #[test]
    fn test_sampler_output_is_variable_length() {
        let mut sampler = Sampler::from_seed(1);
        let vectors = sampler_block(&mut sampler).unwrap();
        let clock = vectors[0].inputs()[1].as_float().unwrap();
        let out = output_array(&vectors[0]);
        assert!(out.len() <= clock.len());
        assert_eq!(out.kind(), crate::typed_array::ElementKind::ComplexFloat32);
    }

    #[test]
    fn test_rds_inputs_are_padded() {
        let mut sampler = Sampler::from_seed(1);
        let vectors = rdsframe(&mut sampler).unwrap();
        assert_eq!(vectors.len(), 6);
        assert_eq!(vectors[0].inputs()[0].len(), 144);
        assert_eq!(vectors[5].inputs()[0].len(), 312);
        let rendered = vectors[5].render().unwrap();
        assert!(rendered.contains("RDSFrameType.vector_from_array({{{{0x3aab, 0x02c9, 0x0608, 0x6469}}}, "));
    }

    #[test]
    fn test_design_argument_rendering() {
        let mut sampler = Sampler::from_seed(1);
        let vectors = bandpassfilter(&mut sampler).unwrap();
        let rendered = vectors[0].render().unwrap();
        assert!(rendered.starts_with("    { -- 129 taps, {0.1, 0.3} cutoff, 256 ComplexFloat32 input"));
        assert!(rendered.contains("args = {129, {0.1, 0.3}},"));
    }

    #[test]
    fn test_registration_order() {
        let mut registry = Registry::new();
        register(&mut registry);
        register_designed(&mut registry);
        let paths: Vec<&str> = registry.paths().collect();
        assert_eq!(paths.len(), 22);
        assert_eq!(paths[0], "tests/blocks/signal/firfilter_spec.lua");
        assert_eq!(paths[14], "tests/blocks/signal/frequencytranslator_spec.lua");
        assert_eq!(paths[21], "tests/blocks/protocol/rdsframe_spec.lua");
    }
}
