use std::fmt;

#[derive(Debug, PartialEq)]
pub enum ImageError {
    Geometry(String),
    BufferSize { expected: usize, got: usize },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Geometry(msg) => write!(f, "geometry error: {msg}"),
            ImageError::BufferSize { expected, got } => {
                write!(f, "buffer size mismatch: expected {expected} bytes, got {got}")
            }
        }
    }
}

impl std::error::Error for ImageError {}
