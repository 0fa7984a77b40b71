/// Pixel layouts the pipeline deals with: RGB565 frame buffers on the
/// capture/display side, RGB888 on the model input side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb565,
    Rgb888,
}

impl PixelFormat {
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelFormat::Rgb565 => 2,
            PixelFormat::Rgb888 => 3,
        }
    }
}

/// Pack an 8-bit RGB triple into a little-endian RGB565 word.
pub fn pack_rgb565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xf8) << 8) | ((g as u16 & 0xfc) << 3) | (b as u16 >> 3)
}

/// Unpack an RGB565 word into an 8-bit RGB triple, replicating the high
/// bits into the low bits so full white stays full white.
pub fn unpack_rgb565(v: u16) -> (u8, u8, u8) {
    let r5 = ((v >> 11) & 0x1f) as u8;
    let g6 = ((v >> 5) & 0x3f) as u8;
    let b5 = (v & 0x1f) as u8;
    (
        (r5 << 3) | (r5 >> 2),
        (g6 << 2) | (g6 >> 4),
        (b5 << 3) | (b5 >> 2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_per_pixel() {
        assert_eq!(PixelFormat::Rgb565.bytes_per_pixel(), 2);
        assert_eq!(PixelFormat::Rgb888.bytes_per_pixel(), 3);
    }

    #[test]
    fn test_pack_unpack_extremes() {
        assert_eq!(unpack_rgb565(pack_rgb565(0, 0, 0)), (0, 0, 0));
        assert_eq!(unpack_rgb565(pack_rgb565(255, 255, 255)), (255, 255, 255));
    }

    #[test]
    fn test_pack_unpack_roundtrip_tolerance() {
        // RGB565 drops 3/2/3 low bits; round trip error is bounded by that.
        let (r, g, b) = unpack_rgb565(pack_rgb565(100, 150, 200));
        assert!((100_i16 - r as i16).abs() < 8);
        assert!((150_i16 - g as i16).abs() < 4);
        assert!((200_i16 - b as i16).abs() < 8);
    }
}
