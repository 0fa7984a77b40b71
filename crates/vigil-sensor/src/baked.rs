use crate::{FrameSource, SensorError};
use vigil_image::{Image, PixelFormat};

/// A deterministic frame source backed by a fixed set of images, served
/// round-robin. Stands in for the camera in demo and test builds, the way
/// firmware images bake in a test clip.
pub struct BakedSource {
    frames: Vec<Image>,
    index: usize,
}

impl BakedSource {
    pub fn new(frames: Vec<Image>) -> Self {
        Self { frames, index: 0 }
    }

    /// Generate `count` distinguishable RGB888 test frames: each frame is
    /// a solid color unique to its index with a white square whose
    /// position moves frame to frame.
    pub fn test_frames(
        count: usize,
        width: usize,
        height: usize,
    ) -> Result<Vec<Image>, SensorError> {
        let mut frames = Vec::with_capacity(count);
        for k in 0..count {
            let mut img = Image::zeroed(width, height, PixelFormat::Rgb888)?;
            let shade = (8 * (k + 1)) as u8;
            for y in 0..height {
                for x in 0..width {
                    img.set_pixel(x, y, (shade, shade, shade));
                }
            }
            // Moving marker square
            let side = (width / 8).max(1);
            let off_x = (k * side) % width.saturating_sub(side).max(1);
            let off_y = height / 3;
            for y in off_y..(off_y + side).min(height) {
                for x in off_x..(off_x + side).min(width) {
                    img.set_pixel(x, y, (248, 248, 248));
                }
            }
            frames.push(img);
        }
        Ok(frames)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Index of the frame the next capture will serve.
    pub fn next_index(&self) -> usize {
        self.index
    }
}

impl FrameSource for BakedSource {
    async fn capture(&mut self, dest: &mut Image) -> Result<(), SensorError> {
        let Some(frame) = self.frames.get(self.index) else {
            return Err(SensorError::Exhausted {
                index: self.index,
                count: self.frames.len(),
            });
        };

        frame.scale_into(dest)?;

        self.index += 1;
        if self.index >= self.frames.len() {
            self.index = 0;
        }
        Ok(())
    }
}
