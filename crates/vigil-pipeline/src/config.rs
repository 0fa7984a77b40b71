use std::time::Duration;
use vigil_image::PixelFormat;

/// Pipeline configuration.
///
/// Defaults mirror the reference hardware: two frame slots over a 320x240
/// RGB565 frame buffer, a 1 ms cooperative tick, and a frame-rate report
/// every 5 seconds.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    slot_count: usize,
    frame_width: usize,
    frame_height: usize,
    frame_format: PixelFormat,
    tick: Duration,
    stats_period: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            slot_count: 2,
            frame_width: 320,
            frame_height: 240,
            frame_format: PixelFormat::Rgb565,
            tick: Duration::from_millis(1),
            stats_period: Duration::from_secs(5),
        }
    }
}

impl PipelineConfig {
    /// Set the number of frame slots in the pool (at least 1).
    pub fn with_slot_count(mut self, slot_count: usize) -> Self {
        self.slot_count = slot_count;
        self
    }

    /// Set the frame buffer width in pixels.
    pub fn with_frame_width(mut self, frame_width: usize) -> Self {
        self.frame_width = frame_width;
        self
    }

    /// Set the frame buffer height in pixels.
    pub fn with_frame_height(mut self, frame_height: usize) -> Self {
        self.frame_height = frame_height;
        self
    }

    /// Set the frame buffer pixel format.
    pub fn with_frame_format(mut self, frame_format: PixelFormat) -> Self {
        self.frame_format = frame_format;
        self
    }

    /// Set the cooperative tick period.
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Set the frame-rate reporting period.
    pub fn with_stats_period(mut self, stats_period: Duration) -> Self {
        self.stats_period = stats_period;
        self
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    pub fn frame_width(&self) -> usize {
        self.frame_width
    }

    pub fn frame_height(&self) -> usize {
        self.frame_height
    }

    pub fn frame_format(&self) -> PixelFormat {
        self.frame_format
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    pub fn stats_period(&self) -> Duration {
        self.stats_period
    }
}
