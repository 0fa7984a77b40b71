use std::time::{Duration, Instant};

/// Rolling frame-rate accounting: counts rendered frames and reports the
/// rate once per period, then resets the window.
#[derive(Debug)]
pub struct FrameStats {
    period: Duration,
    window_start: Instant,
    frames: u64,
}

impl FrameStats {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            window_start: Instant::now(),
            frames: 0,
        }
    }

    /// Record one rendered frame. Returns the measured frames/second when
    /// the reporting window just closed, `None` otherwise.
    pub fn record_frame(&mut self) -> Option<f32> {
        self.frames += 1;

        let elapsed = self.window_start.elapsed();
        if elapsed < self.period {
            return None;
        }

        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.frames = 0;
        self.window_start = Instant::now();
        Some(fps)
    }

    pub fn frames_in_window(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_report_inside_window() {
        let mut stats = FrameStats::new(Duration::from_secs(3600));
        assert!(stats.record_frame().is_none());
        assert!(stats.record_frame().is_none());
        assert_eq!(stats.frames_in_window(), 2);
    }

    #[test]
    fn test_report_after_window_closes() {
        let mut stats = FrameStats::new(Duration::from_millis(10));
        for _ in 0..5 {
            stats.record_frame();
        }
        std::thread::sleep(Duration::from_millis(15));
        let fps = stats.record_frame().expect("window should have closed");
        assert!(fps > 0.0);
        // Window reset
        assert_eq!(stats.frames_in_window(), 0);
    }
}
