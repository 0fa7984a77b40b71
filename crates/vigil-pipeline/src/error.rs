use std::fmt;
use vigil_image::ImageError;
use vigil_sensor::SensorError;

#[derive(Debug)]
pub enum PipelineError {
    /// Startup validation failed: the model input tensor is missing or
    /// under-ranked. Fatal; the pipeline never starts.
    BadModel(String),
    /// The capture source failed or ran out of frames. Fatal in demo mode.
    Capture(SensorError),
    /// The display sink rejected a frame.
    Display(SensorError),
    /// A hand-off queue closed underneath the scheduler, which means the
    /// worker is gone.
    ChannelClosed,
    Image(ImageError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::BadModel(msg) => write!(f, "bad model: {msg}"),
            PipelineError::Capture(err) => write!(f, "capture error: {err}"),
            PipelineError::Display(err) => write!(f, "display error: {err}"),
            PipelineError::ChannelClosed => write!(f, "inference hand-off channel closed"),
            PipelineError::Image(err) => write!(f, "image error: {err}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<ImageError> for PipelineError {
    fn from(err: ImageError) -> Self {
        PipelineError::Image(err)
    }
}
