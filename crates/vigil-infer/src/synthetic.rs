use crate::runtime::{ModelRuntime, OutputTensor};

const ANCHORS_PER_HEAD: usize = 3;
const NUM_CLASSES: usize = 80;
const HOT_LOGIT: f32 = 6.0;

/// A deterministic stand-in for the accelerator runtime, used by the demo
/// binary and tests. Each inference lights up one grid cell of the fine
/// output head, with the cell and class derived from the mean brightness
/// of the input buffer, so the reported box tracks the frame content.
pub struct SyntheticModel {
    shape: Vec<usize>,
    signed: bool,
    out0: OutputTensor,
    out1: OutputTensor,
}

impl SyntheticModel {
    /// Create a model with an HWC input of `rows` x `cols` x 3.
    ///
    /// `rows` and `cols` must be multiples of 32 so both output grids are
    /// well-formed.
    pub fn new(rows: usize, cols: usize) -> Self {
        let channels = ANCHORS_PER_HEAD * (5 + NUM_CLASSES);
        let (coarse_h, coarse_w) = (rows / 32, cols / 32);
        let (fine_h, fine_w) = (rows / 16, cols / 16);
        Self {
            shape: vec![rows, cols, 3],
            signed: false,
            out0: OutputTensor::new(
                vec![coarse_h, coarse_w, channels],
                vec![0.0; coarse_h * coarse_w * channels],
            ),
            out1: OutputTensor::new(
                vec![fine_h, fine_w, channels],
                vec![0.0; fine_h * fine_w * channels],
            ),
        }
    }

    /// Mark the input tensor as signed fixed-point.
    pub fn with_signed_input(mut self) -> Self {
        self.signed = true;
        self
    }
}

impl ModelRuntime for SyntheticModel {
    fn input_shape(&self) -> &[usize] {
        &self.shape
    }

    fn is_data_signed(&self) -> bool {
        self.signed
    }

    fn run_inference(&mut self, input: &[u8]) -> bool {
        let channels = ANCHORS_PER_HEAD * (5 + NUM_CLASSES);
        let (gh, gw) = (self.out1.shape[0], self.out1.shape[1]);

        // Push every cell well below threshold, then light one hot cell
        // derived from the frame content.
        for v in self.out1.data.iter_mut() {
            *v = -HOT_LOGIT;
        }
        for v in self.out0.data.iter_mut() {
            *v = -HOT_LOGIT;
        }

        let sum: u64 = input.iter().map(|&b| b as u64).sum();
        let mean = if input.is_empty() {
            0
        } else {
            (sum / input.len() as u64) as usize
        };

        let cell = mean % (gh * gw);
        let class = mean % NUM_CLASSES;
        let base = cell * channels;
        self.out1.data[base] = 0.0; // tx
        self.out1.data[base + 1] = 0.0; // ty
        self.out1.data[base + 2] = 0.0; // tw
        self.out1.data[base + 3] = 0.0; // th
        self.out1.data[base + 4] = HOT_LOGIT;
        self.out1.data[base + 5 + class] = HOT_LOGIT;

        true
    }

    fn output_tensor(&self, index: usize) -> Option<&OutputTensor> {
        match index {
            0 => Some(&self.out0),
            1 => Some(&self.out1),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::DetectorConfig;
    use crate::postprocess::{DetectorPostprocess, Postprocess};

    #[test]
    fn test_input_shape() {
        let model = SyntheticModel::new(192, 192);
        assert_eq!(model.input_shape(), &[192, 192, 3]);
        assert!(!model.is_data_signed());
        assert!(SyntheticModel::new(192, 192).with_signed_input().is_data_signed());
    }

    #[test]
    fn test_output_grids() {
        let model = SyntheticModel::new(192, 192);
        assert_eq!(model.output_tensor(0).unwrap().shape[..2], [6, 6]);
        assert_eq!(model.output_tensor(1).unwrap().shape[..2], [12, 12]);
        assert!(model.output_tensor(2).is_none());
    }

    #[test]
    fn test_inference_is_deterministic() {
        let input = vec![100u8; 192 * 192 * 3];
        let mut a = SyntheticModel::new(192, 192);
        let mut b = SyntheticModel::new(192, 192);
        assert!(a.run_inference(&input));
        assert!(b.run_inference(&input));
        assert_eq!(a.output_tensor(1), b.output_tensor(1));
    }

    #[test]
    fn test_produces_one_detection() {
        let mut model = SyntheticModel::new(192, 192);
        let input = vec![100u8; 192 * 192 * 3];
        assert!(model.run_inference(&input));

        let post = DetectorPostprocess::new(DetectorConfig::default());
        let mut results = Vec::new();
        post.run(
            192,
            192,
            240,
            320,
            model.output_tensor(0).unwrap(),
            model.output_tensor(1).unwrap(),
            &mut results,
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].class, 100 % 80);
        assert!(results[0].confidence > 0.9);
    }
}
