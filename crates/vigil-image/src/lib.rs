//! Pixel buffer types and the handful of raster operations the perception
//! pipeline needs: nearest-neighbor scaling between formats, in-place
//! quantization of a model input buffer, and detection overlay drawing.

pub mod draw;
pub mod error;
pub mod format;
pub mod image;
pub mod quantize;

pub use draw::{draw_box, draw_tag};
pub use error::ImageError;
pub use format::PixelFormat;
pub use image::Image;
pub use quantize::quantize_to_i8;
