use crate::prelude::ErrorsOracle;

/// Sample-by-sample reference processors. The oracles never stream for real: they reset an operator,
/// hand it the whole finite input in one call and take whatever comes back as the expected output.
/// Keeping the state machine behind this trait lets the same operator be checked in tests
/// chunk by chunk, which is how the blocks under test will see the data.
pub trait StreamOperator<Input, Output> {
    /// Return to the initial state, as if no sample had been seen.
    fn reset(&mut self);
    /// Consume a chunk of input and return the output it produces. Output length may differ from input length.
    fn process(&mut self, data_in: &[Input]) -> Result<Vec<Output>, ErrorsOracle>;
}
