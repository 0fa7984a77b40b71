//! The frame-buffer pipeline and inference scheduling core.
//!
//! A fixed pool of frame slots cycles empty → full → in-flight → empty,
//! driven by a single-threaded tick scheduler. Inference runs on one
//! dedicated worker, connected through a capacity-1 request/response
//! channel pair, so at most one inference is ever in flight and frame
//! capture never stalls behind the accelerator.

pub mod config;
pub mod control;
pub mod error;
pub mod handoff;
pub mod pipeline;
pub mod slot;
pub mod stats;
pub mod worker;

pub use config::PipelineConfig;
pub use control::{CaptureGate, ControlCommand, ControlHandle};
pub use error::PipelineError;
pub use handoff::{Handoff, InferenceJob, WorkerEnd, handoff};
pub use pipeline::Pipeline;
pub use slot::{FrameSlot, SlotPool, SlotState};
pub use stats::FrameStats;
pub use worker::spawn_worker;
