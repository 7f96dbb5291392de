/// Test vectors and the block fixture text the `jigs` harness loads.
use crate::{
    prelude::ErrorsOracle,
    serialize::literal::{format_epsilon, serialize_typed_array, Literal},
    typed_array::TypedArray,
};

const TAB: &str = "    ";

/// One args/inputs/outputs triple. Outputs are computed by the oracle when the vector is generated
/// and never change afterwards.
#[derive(Debug)]
pub struct TestVector {
    args: Vec<Literal>,
    inputs: Vec<TypedArray>,
    outputs: Vec<Literal>,
    note: Option<String>,
}

impl TestVector {
    pub fn generate<F>(
        oracle: F,
        args: Vec<Literal>,
        inputs: Vec<TypedArray>,
        note: Option<&str>,
    ) -> Result<Self, ErrorsOracle>
    where
        F: FnOnce(&[Literal], &[TypedArray]) -> Result<Vec<Literal>, ErrorsOracle>,
    {
        let outputs = oracle(&args, &inputs)?;
        Ok(Self {
            args,
            inputs,
            outputs,
            note: note.map(str::to_string),
        })
    }

    pub fn args(&self) -> &[Literal] {
        &self.args
    }

    pub fn inputs(&self) -> &[TypedArray] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Literal] {
        &self.outputs
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn render(&self) -> Result<String, ErrorsOracle> {
        let args = join(self.args.iter().map(Literal::serialize))?;
        let inputs = join(self.inputs.iter().map(serialize_typed_array))?;
        let outputs = join(self.outputs.iter().map(Literal::serialize))?;

        let mut s = String::new();
        s.push_str(TAB);
        s.push('{');
        match &self.note {
            Some(note) => s.push_str(&format!(" -- {note}\n")),
            None => s.push('\n'),
        }
        s.push_str(&format!("{TAB}{TAB}args = {{{args}}},\n"));
        s.push_str(&format!("{TAB}{TAB}inputs = {{{inputs}}},\n"));
        s.push_str(&format!("{TAB}{TAB}outputs = {{{outputs}}}\n"));
        s.push_str(&format!("{TAB}}},\n"));
        Ok(s)
    }
}

fn join(parts: impl Iterator<Item = Result<String, ErrorsOracle>>) -> Result<String, ErrorsOracle> {
    Ok(parts.collect::<Result<Vec<String>, ErrorsOracle>>()?.join(", "))
}

/// A block's whole fixture: its vectors and the comparison tolerance.
#[derive(Debug)]
pub struct BlockSpec {
    pub block_name: String,
    pub vectors: Vec<TestVector>,
    pub epsilon: f64,
}

impl BlockSpec {
    pub fn render(&self) -> Result<String, ErrorsOracle> {
        let mut s = String::new();
        s.push_str("local radio = require('radio')\n");
        s.push_str("local jigs = require('tests.jigs')\n");
        s.push('\n');
        s.push_str(&format!("jigs.TestBlock(radio.{}, {{\n", self.block_name));
        for vector in &self.vectors {
            s.push_str(&vector.render()?);
        }
        s.push_str(&format!("}}, {{epsilon = {}}})\n", format_epsilon(self.epsilon)));
        Ok(s)
    }
}

/// Positional argument lookup for oracle closures.
pub fn arg(args: &[Literal], index: usize) -> Result<&Literal, ErrorsOracle> {
    args.get(index)
        .ok_or_else(|| ErrorsOracle::precondition(format!("missing argument {index}")))
}

pub fn input(inputs: &[TypedArray], index: usize) -> Result<&TypedArray, ErrorsOracle> {
    inputs
        .get(index)
        .ok_or_else(|| ErrorsOracle::precondition(format!("missing input {index}")))
}

/// Float32 vector argument (taps) widened for filter design.
pub fn taps_arg(args: &[Literal], index: usize) -> Result<Vec<f64>, ErrorsOracle> {
    Ok(arg(args, index)?
        .as_array()?
        .as_float()?
        .iter()
        .map(|&t| t as f64)
        .collect())
}
