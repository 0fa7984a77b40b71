//! Model-runtime and post-processing boundaries for the perception
//! pipeline, plus the YOLO-fastest style detector post-processing used by
//! the default configuration.
//!
//! The accelerator runtime itself is an external collaborator; this crate
//! only defines the seam (`ModelRuntime`) and ships a deterministic
//! `SyntheticModel` for demo and test runs.

pub mod detection;
pub mod labels;
pub mod postprocess;
pub mod runtime;
pub mod synthetic;

pub use detection::{Detection, DetectorConfig};
pub use labels::default_labels;
pub use postprocess::{DetectorPostprocess, Postprocess};
pub use runtime::{ModelRuntime, OutputTensor};
pub use synthetic::SyntheticModel;
