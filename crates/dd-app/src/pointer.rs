//! Window cursor → canvas pixel coordinates.
//!
//! Canvas coordinates are whole pixels, so positions are floored before
//! they reach the controller.

/// Floor a physical cursor position to whole pixels.
pub fn floor_position(x: f64, y: f64) -> (f32, f32) {
    (x.floor() as f32, y.floor() as f32)
}

/// Convert the result of `Pixels::window_pos_to_pixel`. Positions outside
/// the buffer come back as `Err` and are kept so drags can leave the canvas.
pub fn from_buffer_pos(pos: Result<(usize, usize), (isize, isize)>) -> (f32, f32) {
    match pos {
        Ok((x, y)) => (x as f32, y as f32),
        Err((x, y)) => (x as f32, y as f32),
    }
}
