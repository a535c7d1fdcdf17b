//! Canvas state → RGBA frame.
//!
//! Software compositor: solid fill, background image centered on the frame,
//! then every placed item in slot order. Images are drawn centered on their
//! anchor point and rotated about it, sampled nearest-neighbour and blended
//! source-over.

use crate::assets::Assets;
use dd_core::{PlacedItem, Rgba, Rotation, Slots};
use image::RgbaImage;
use kurbo::{Affine, Point, Rect};

/// Paint a full frame. Call once per tick with a frame of canvas size.
pub fn paint_frame(frame: &mut RgbaImage, assets: &Assets, slots: &Slots, background_color: Rgba) {
    fill(frame, background_color);

    let center = Point::new(
        f64::from(frame.width()) / 2.0,
        f64::from(frame.height()) / 2.0,
    );
    draw_image(frame, assets.background(), center, Rotation::Deg0);

    for (index, item) in slots.iter() {
        log::trace!(
            "PAINT slot {index} {:?} at {:?} {:?}",
            item.sprite(),
            item.center(),
            item.rotation()
        );
        paint_item(frame, assets, item);
    }
}

/// Draw one placed item at its center with its rotation.
pub fn paint_item(frame: &mut RgbaImage, assets: &Assets, item: &PlacedItem) {
    let (x, y) = item.center();
    draw_image(
        frame,
        assets.sprite(item.sprite()),
        Point::new(f64::from(x), f64::from(y)),
        item.rotation(),
    );
}

pub fn fill(frame: &mut RgbaImage, color: Rgba) {
    let px = image::Rgba(color.to_array());
    for p in frame.pixels_mut() {
        *p = px;
    }
}

/// Draw `src` centered on `center`, rotated clockwise by `rotation`.
/// Pixels falling outside the frame are clipped.
pub fn draw_image(frame: &mut RgbaImage, src: &RgbaImage, center: Point, rotation: Rotation) {
    let (w, h) = (f64::from(src.width()), f64::from(src.height()));
    if w == 0.0 || h == 0.0 {
        return;
    }

    let transform = Affine::translate(center.to_vec2())
        * Affine::rotate(rotation.radians())
        * Affine::translate((-w / 2.0, -h / 2.0));
    let inverse = transform.inverse();
    let bbox = transform.transform_rect_bbox(Rect::new(0.0, 0.0, w, h));

    let Some((x0, y0, x1, y1)) = clip(bbox, frame.width(), frame.height()) else {
        return;
    };

    for y in y0..y1 {
        for x in x0..x1 {
            let p = inverse * Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            if p.x < 0.0 || p.y < 0.0 || p.x >= w || p.y >= h {
                continue;
            }
            let s = *src.get_pixel(p.x as u32, p.y as u32);
            blend_over(frame.get_pixel_mut(x, y), s);
        }
    }
}

/// Integer pixel range covered by `rect`, intersected with the frame.
fn clip(rect: Rect, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
    let x0 = rect.x0.floor().max(0.0);
    let y0 = rect.y0.floor().max(0.0);
    let x1 = rect.x1.ceil().min(f64::from(width));
    let y1 = rect.y1.ceil().min(f64::from(height));
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
}

fn blend_over(dst: &mut image::Rgba<u8>, src: image::Rgba<u8>) {
    let a = u32::from(src[3]);
    match a {
        0 => {}
        255 => *dst = src,
        _ => {
            let inv = 255 - a;
            for c in 0..3 {
                dst[c] = ((u32::from(src[c]) * a + u32::from(dst[c]) * inv + 127) / 255) as u8;
            }
            dst[3] = (a + (u32::from(dst[3]) * inv + 127) / 255) as u8;
        }
    }
}
