/// A raw model output head, dequantized to `f32` by the runtime.
///
/// Shape is `[grid_h, grid_w, channels]` (a leading batch dimension of 1
/// is tolerated and skipped by consumers).
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTensor {
    pub shape: Vec<usize>,
    pub data: Vec<f32>,
}

impl OutputTensor {
    pub fn new(shape: Vec<usize>, data: Vec<f32>) -> Self {
        Self { shape, data }
    }
}

/// The accelerator runtime boundary.
///
/// The pipeline validates `input_shape()` once at startup, scales each
/// frame into a scratch buffer matching that shape, quantizes it when
/// `is_data_signed()` reports signed input, and hands the buffer to
/// `run_inference`. A `false` return is a recoverable per-frame failure:
/// the frame's results stay empty and the pipeline carries on.
pub trait ModelRuntime: Send {
    /// Input tensor shape, HWC with an optional leading batch dimension.
    fn input_shape(&self) -> &[usize];

    /// Whether the input tensor expects signed fixed-point data.
    fn is_data_signed(&self) -> bool;

    /// Run one inference over `input`. Returns false on failure.
    fn run_inference(&mut self, input: &[u8]) -> bool;

    /// Output head produced by the last successful inference.
    fn output_tensor(&self, index: usize) -> Option<&OutputTensor>;
}
