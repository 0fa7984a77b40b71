//! Capture and display boundaries for the perception pipeline.
//!
//! Real deployments put a camera driver behind `FrameSource` and an LCD or
//! USB video sink behind `DisplaySink`; this crate ships a deterministic
//! baked-frame source and a console sink for demo and test runs.

pub mod baked;
pub mod console;
pub mod error;
pub mod traits;

pub use baked::BakedSource;
pub use console::ConsoleSink;
pub use error::SensorError;
pub use traits::{DisplaySink, FrameSource};
