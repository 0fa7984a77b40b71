use crate::SensorError;
use vigil_image::Image;

/// The capture boundary: fills a frame slot's pixel buffer in place.
///
/// The destination geometry is fixed by the slot pool; sources scale or
/// convert as needed to fill it.
#[allow(async_fn_in_trait)]
pub trait FrameSource {
    /// Acquire the next frame into `dest`.
    async fn capture(&mut self, dest: &mut Image) -> Result<(), SensorError>;
}

/// The display boundary: consumes annotated frames and status text.
pub trait DisplaySink {
    /// Present one annotated frame.
    fn present(&mut self, image: &Image) -> Result<(), SensorError>;

    /// Present a status line (frame rate, prompts).
    fn present_status(&mut self, line: &str) -> Result<(), SensorError>;
}
