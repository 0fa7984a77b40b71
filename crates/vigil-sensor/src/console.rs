use crate::{DisplaySink, SensorError};
use vigil_image::Image;

/// A display sink that reports through the log instead of driving a panel.
#[derive(Default)]
pub struct ConsoleSink {
    frames: u64,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }
}

impl DisplaySink for ConsoleSink {
    fn present(&mut self, image: &Image) -> Result<(), SensorError> {
        self.frames += 1;
        log::debug!(
            "presented frame {} ({}x{} {:?})",
            self.frames,
            image.width(),
            image.height(),
            image.format()
        );
        Ok(())
    }

    fn present_status(&mut self, line: &str) -> Result<(), SensorError> {
        log::info!("{line}");
        Ok(())
    }
}
