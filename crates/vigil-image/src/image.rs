use crate::error::ImageError;
use crate::format::{PixelFormat, pack_rgb565, unpack_rgb565};

/// An owned pixel buffer with fixed geometry.
///
/// Geometry is set at construction and never changes; the pipeline allocates
/// its frame buffers once at startup and recycles them for the lifetime of
/// the process.
#[derive(Clone, PartialEq)]
pub struct Image {
    width: usize,
    height: usize,
    format: PixelFormat,
    pub data: Vec<u8>,
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format)
            .field("data", &format_args!("<{} bytes>", self.data.len()))
            .finish()
    }
}

impl Image {
    /// Wrap an existing buffer. The buffer length must match the geometry.
    pub fn new(
        width: usize,
        height: usize,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::Geometry(format!(
                "image dimensions must be non-zero, got {width}x{height}"
            )));
        }
        let expected = width * height * format.bytes_per_pixel();
        if data.len() != expected {
            return Err(ImageError::BufferSize {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    /// Allocate a zero-filled buffer of the given geometry.
    pub fn zeroed(width: usize, height: usize, format: PixelFormat) -> Result<Self, ImageError> {
        let data = vec![0u8; width * height * format.bytes_per_pixel()];
        Self::new(width, height, format, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Read a pixel as an 8-bit RGB triple.
    ///
    /// Callers must stay in bounds; drawing code clamps before calling.
    pub fn get_pixel(&self, x: usize, y: usize) -> (u8, u8, u8) {
        let idx = (y * self.width + x) * self.format.bytes_per_pixel();
        match self.format {
            PixelFormat::Rgb565 => {
                let v = u16::from_le_bytes([self.data[idx], self.data[idx + 1]]);
                unpack_rgb565(v)
            }
            PixelFormat::Rgb888 => (self.data[idx], self.data[idx + 1], self.data[idx + 2]),
        }
    }

    /// Write a pixel from an 8-bit RGB triple.
    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: (u8, u8, u8)) {
        let idx = (y * self.width + x) * self.format.bytes_per_pixel();
        match self.format {
            PixelFormat::Rgb565 => {
                let v = pack_rgb565(rgb.0, rgb.1, rgb.2).to_le_bytes();
                self.data[idx] = v[0];
                self.data[idx + 1] = v[1];
            }
            PixelFormat::Rgb888 => {
                self.data[idx] = rgb.0;
                self.data[idx + 1] = rgb.1;
                self.data[idx + 2] = rgb.2;
            }
        }
    }

    /// Scale this image into `dest` with nearest-neighbor sampling,
    /// converting pixel format as needed. Full-frame only; the pipeline
    /// always scales whole frames into the model input buffer.
    pub fn scale_into(&self, dest: &mut Image) -> Result<(), ImageError> {
        let (dw, dh) = (dest.width, dest.height);
        for dy in 0..dh {
            let sy = dy * self.height / dh;
            for dx in 0..dw {
                let sx = dx * self.width / dw;
                let rgb = self.get_pixel(sx, sy);
                dest.set_pixel(dx, dy, rgb);
            }
        }
        Ok(())
    }
}
