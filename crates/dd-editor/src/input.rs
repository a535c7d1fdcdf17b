//! Input abstraction layer.
//!
//! Normalizes window-system mouse and keyboard callbacks into a single
//! `InputEvent` enum consumed by the canvas controller.

/// A normalized input event. Coordinates are canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed.
    PointerDown { x: f32, y: f32 },

    /// Cursor moved, with or without a button held.
    PointerMove { x: f32, y: f32 },

    /// Primary button released.
    PointerUp { x: f32, y: f32 },

    /// Key pressed while the cursor was at `(x, y)`.
    ///
    /// `key` is either the typed character (`"b"`, `"R"`) or a named key
    /// such as `"Backspace"`.
    Key { key: String, x: f32, y: f32 },
}

impl InputEvent {
    pub fn from_pointer_down(x: f32, y: f32) -> Self {
        Self::PointerDown { x, y }
    }

    pub fn from_pointer_move(x: f32, y: f32) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up(x: f32, y: f32) -> Self {
        Self::PointerUp { x, y }
    }

    pub fn key(key: impl Into<String>, x: f32, y: f32) -> Self {
        Self::Key {
            key: key.into(),
            x,
            y,
        }
    }
}
