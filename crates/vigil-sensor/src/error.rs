use std::fmt;
use vigil_image::ImageError;

#[derive(Debug)]
pub enum SensorError {
    Device(String),
    Exhausted { index: usize, count: usize },
    Image(ImageError),
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::Device(msg) => write!(f, "device error: {msg}"),
            SensorError::Exhausted { index, count } => {
                write!(f, "frame source exhausted: index {index} (max: {})", count.saturating_sub(1))
            }
            SensorError::Image(err) => write!(f, "image error: {err}"),
        }
    }
}

impl std::error::Error for SensorError {}

impl From<ImageError> for SensorError {
    fn from(err: ImageError) -> Self {
        SensorError::Image(err)
    }
}
