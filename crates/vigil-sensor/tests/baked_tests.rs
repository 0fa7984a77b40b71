use vigil_image::{Image, PixelFormat};
use vigil_sensor::{BakedSource, FrameSource, SensorError};

fn solid(shade: u8, width: usize, height: usize) -> Image {
    let mut img = Image::zeroed(width, height, PixelFormat::Rgb888).unwrap();
    for y in 0..height {
        for x in 0..width {
            img.set_pixel(x, y, (shade, shade, shade));
        }
    }
    img
}

#[tokio::test]
async fn test_round_robin_order() {
    // Three baked frames, captured five times: indices 0,1,2,0,1.
    let frames = vec![solid(8, 4, 4), solid(16, 4, 4), solid(24, 4, 4)];
    let mut source = BakedSource::new(frames);
    let mut dest = Image::zeroed(4, 4, PixelFormat::Rgb888).unwrap();

    let expected = [8u8, 16, 24, 8, 16];
    for &shade in &expected {
        source.capture(&mut dest).await.unwrap();
        assert_eq!(dest.get_pixel(0, 0), (shade, shade, shade));
    }
}

#[tokio::test]
async fn test_capture_converts_geometry_and_format() {
    // 8x8 RGB888 source into a 4x4 RGB565 slot buffer.
    let mut source = BakedSource::new(vec![solid(248, 8, 8)]);
    let mut dest = Image::zeroed(4, 4, PixelFormat::Rgb565).unwrap();
    source.capture(&mut dest).await.unwrap();
    assert_eq!(dest.get_pixel(3, 3), (248, 248, 248));
}

#[tokio::test]
async fn test_empty_source_is_exhausted() {
    let mut source = BakedSource::new(Vec::new());
    let mut dest = Image::zeroed(4, 4, PixelFormat::Rgb565).unwrap();
    match source.capture(&mut dest).await {
        Err(SensorError::Exhausted { index: 0, count: 0 }) => {}
        other => panic!("expected Exhausted, got {other:?}"),
    }
}

#[test]
fn test_test_frames_are_distinguishable() {
    let frames = BakedSource::test_frames(3, 32, 24).unwrap();
    assert_eq!(frames.len(), 3);
    let first: Vec<_> = frames.iter().map(|f| f.get_pixel(0, 0)).collect();
    assert_ne!(first[0], first[1]);
    assert_ne!(first[1], first[2]);
}
