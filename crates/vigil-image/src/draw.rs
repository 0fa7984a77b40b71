use crate::image::Image;
use vigil_base::Rect;

/// Draw a one-pixel rectangle outline, clamped to the image bounds.
pub fn draw_box(image: &mut Image, rect: Rect<i32>, color: (u8, u8, u8)) {
    let (w, h) = (image.width() as i32, image.height() as i32);

    let x0 = rect.origin.x.clamp(0, w - 1);
    let y0 = rect.origin.y.clamp(0, h - 1);
    let x1 = (rect.origin.x + rect.size.x - 1).clamp(0, w - 1);
    let y1 = (rect.origin.y + rect.size.y - 1).clamp(0, h - 1);

    if x1 < x0 || y1 < y0 {
        return;
    }

    for x in x0..=x1 {
        image.set_pixel(x as usize, y0 as usize, color);
        image.set_pixel(x as usize, y1 as usize, color);
    }
    for y in y0..=y1 {
        image.set_pixel(x0 as usize, y as usize, color);
        image.set_pixel(x1 as usize, y as usize, color);
    }
}

/// Draw a small filled tag bar at (x, y), used as a class marker above a
/// detection box. `width` is in pixels; anything outside the image is
/// clipped away.
pub fn draw_tag(image: &mut Image, x: i32, y: i32, width: i32, color: (u8, u8, u8)) {
    const TAG_HEIGHT: i32 = 4;
    let (w, h) = (image.width() as i32, image.height() as i32);

    for dy in 0..TAG_HEIGHT {
        let py = y + dy;
        if py < 0 || py >= h {
            continue;
        }
        for dx in 0..width {
            let px = x + dx;
            if px < 0 || px >= w {
                continue;
            }
            image.set_pixel(px as usize, py as usize, color);
        }
    }
}
