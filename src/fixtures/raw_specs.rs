/// Fixtures written as literal lines instead of block test vectors: the shared filter-design constants
/// and the file source blocks, whose inputs are byte buffers rather than typed vectors.
use crate::{
    dsp::{
        filters::{
            firwin::firwin,
            hilbert::fir_hilbert_transform,
            root_raised_cosine::fir_root_raised_cosine,
        },
        windows::WindowType,
    },
    fixtures::registry::Registry,
    oracles::sample_format::{decode_complex, decode_real, SampleFormat},
    prelude::{ErrorsOracle, EPSILON},
    random::sampler::Sampler,
    serialize::literal::{escape_bytes, format_epsilon, serialize_typed_array, CustomLiteral, Literal},
    typed_array::TypedArray,
};

type Lines = Result<Vec<String>, ErrorsOracle>;

fn single_precision(values: Vec<f64>) -> TypedArray {
    values.into_iter().map(|v| v as f32).collect::<Vec<f32>>().into()
}

fn constant(name: &str, values: TypedArray) -> Result<String, ErrorsOracle> {
    Ok(format!("M.{name} = {}", serialize_typed_array(&values)?))
}

fn filter_utils(_: &mut Sampler) -> Lines {
    let mut lines = vec![
        "local radio = require('radio')".to_string(),
        String::new(),
        "local M = {}".to_string(),
    ];

    for (name, window) in [
        ("window_rectangular", WindowType::Boxcar),
        ("window_hamming", WindowType::Hamming),
        ("window_hanning", WindowType::Hann),
        ("window_bartlett", WindowType::Bartlett),
        ("window_blackman", WindowType::Blackman),
    ] {
        lines.push(constant(name, single_precision(window.taps(128)))?);
    }
    lines.push(String::new());

    let designs: [(&str, usize, &[f64], bool); 4] = [
        ("firwin_lowpass", 128, &[0.5], true),
        ("firwin_highpass", 129, &[0.5], false),
        ("firwin_bandpass", 129, &[0.4, 0.6], false),
        ("firwin_bandstop", 129, &[0.4, 0.6], true),
    ];
    for (name, num_taps, cutoffs, pass_dc) in designs {
        let taps = firwin(num_taps, cutoffs, pass_dc)?;
        lines.push(constant(name, single_precision(taps))?);
    }
    lines.push(String::new());

    lines.push(constant(
        "fir_root_raised_cosine",
        fir_root_raised_cosine(101, 1e6, 0.5, 1e3)?.into(),
    )?);
    lines.push(String::new());

    lines.push(constant(
        "fir_hilbert_transform",
        fir_hilbert_transform(129, WindowType::Hamming)?.into(),
    )?);
    lines.push(String::new());

    lines.push("return M".to_string());
    Ok(lines)
}

/// `buffer.open("...")` over raw bytes, the harness's in-memory file.
#[derive(Debug)]
pub struct BufferOpen(pub Vec<u8>);

impl CustomLiteral for BufferOpen {
    fn to_literal(&self) -> Result<String, ErrorsOracle> {
        Ok(format!("buffer.open(\"{}\")", escape_bytes(&self.0)))
    }
}

/// A file source case: random samples of one format, their bytes, and what the source should emit.
#[derive(Debug)]
pub struct SourceVector {
    pub format: SampleFormat,
    pub bytes: Vec<u8>,
    pub expected: TypedArray,
}

impl SourceVector {
    /// `num_values` stored values, decoded as interleaved I/Q when `complex` is set.
    pub fn generate(
        sampler: &mut Sampler,
        format: SampleFormat,
        num_values: usize,
        complex: bool,
    ) -> Result<Self, ErrorsOracle> {
        let raw = format.random_raw(sampler, num_values);
        let bytes = format.encode_raw(&raw);
        let expected = if complex {
            decode_complex(format, &bytes)?.into()
        } else {
            decode_real(format, &bytes)?.into()
        };
        Ok(Self {
            format,
            bytes,
            expected,
        })
    }

    pub fn render(&self) -> Result<Vec<String>, ErrorsOracle> {
        let args = Literal::List(vec![
            Literal::custom(BufferOpen(self.bytes.clone())),
            Literal::from(self.format.name()),
            Literal::Integer(1),
        ]);
        Ok(vec![
            "\t{".to_string(),
            format!("\t\targs = {},", args.serialize()?),
            format!("\t\toutputs = {{{}}},", serialize_typed_array(&self.expected)?),
            "\t},".to_string(),
        ])
    }
}

fn source_fixture(sampler: &mut Sampler, block_name: &str, complex: bool) -> Lines {
    let mut lines = vec![
        "local radio = require('radio')".to_string(),
        String::new(),
        "local jigs = require('tests.jigs')".to_string(),
        "local buffer = require('tests.buffer')".to_string(),
        String::new(),
        format!("jigs.TestSourceBlock(radio.{block_name}, {{"),
    ];
    for format in SampleFormat::ALL {
        let vector = SourceVector::generate(sampler, format, 256 * 2, complex)?;
        lines.extend(vector.render()?);
    }
    lines.push(format!("}}, {{epsilon = {}}})", format_epsilon(EPSILON)));
    Ok(lines)
}

fn fileiqdescriptor(sampler: &mut Sampler) -> Lines {
    source_fixture(sampler, "FileIQDescriptorSource", true)
}

fn filedescriptor(sampler: &mut Sampler) -> Lines {
    source_fixture(sampler, "FileDescriptorSource", false)
}

pub fn register_filter_utils(registry: &mut Registry) {
    registry.raw_spec("tests/blocks/signal/filter_utils_vectors.lua", filter_utils);
}

pub fn register_sources(registry: &mut Registry) {
    registry.raw_spec("tests/blocks/sources/fileiqdescriptor_spec.lua", fileiqdescriptor);
    registry.raw_spec("tests/blocks/sources/filedescriptor_spec.lua", filedescriptor);
}
