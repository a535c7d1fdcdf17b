//! Core data model for a DormDraw canvas.
//!
//! A canvas holds furniture sprites placed by the user. Each placed item
//! knows its sprite kind, its center on the canvas, a quarter-turn rotation,
//! and whether it is currently following the pointer. Item size comes from
//! the loaded sprite image and never changes after placement.

use serde::{Deserialize, Serialize};

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

// ─── Sprites ─────────────────────────────────────────────────────────────

/// The furniture kinds a user can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sprite {
    Bed,
    Chair,
    Dresser,
    Desk,
    Sofa,
    Rug,
    Plant,
}

impl Sprite {
    pub const ALL: [Sprite; 7] = [
        Sprite::Bed,
        Sprite::Chair,
        Sprite::Dresser,
        Sprite::Desk,
        Sprite::Sofa,
        Sprite::Rug,
        Sprite::Plant,
    ];

    /// Lowercase key letter that places this sprite.
    pub const fn key(self) -> char {
        match self {
            Sprite::Bed => 'b',
            Sprite::Chair => 'c',
            Sprite::Dresser => 'd',
            Sprite::Desk => 'k',
            Sprite::Sofa => 'f',
            Sprite::Rug => 'g',
            Sprite::Plant => 'p',
        }
    }

    /// Look up a sprite by key letter, ignoring case.
    pub fn from_key(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        Self::ALL.into_iter().find(|s| s.key() == c)
    }

    /// Image file name inside the asset directory.
    pub const fn file_name(self) -> &'static str {
        match self {
            Sprite::Bed => "bed.png",
            Sprite::Chair => "chair.png",
            Sprite::Dresser => "dresser.png",
            Sprite::Desk => "desk.png",
            Sprite::Sofa => "sofa.png",
            Sprite::Rug => "rug.png",
            Sprite::Plant => "plant.png",
        }
    }

    /// Position in [`Sprite::ALL`], used to index per-sprite tables.
    pub const fn index(self) -> usize {
        self as usize
    }
}

// ─── Rotation ────────────────────────────────────────────────────────────

/// Clockwise quarter-turn rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// The next step in the cycle, wrapping 270° back to 0°.
    pub const fn next(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    pub const fn quarter_turns(self) -> u8 {
        self as u8
    }

    pub fn radians(self) -> f64 {
        f64::from(self.quarter_turns()) * std::f64::consts::FRAC_PI_2
    }
}

// ─── Bounds ──────────────────────────────────────────────────────────────

/// Axis-aligned box in canvas coordinates (top-left + size).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ItemBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ItemBounds {
    pub fn from_center(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
        }
    }

    /// Strict containment: points on the edge are outside.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px > self.x && px < self.x + self.width && py > self.y && py < self.y + self.height
    }
}

// ─── Placed items ────────────────────────────────────────────────────────

/// Pointer offset captured when a drag starts: `pointer - center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOffset {
    pub dx: f32,
    pub dy: f32,
}

/// A furniture sprite placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem {
    sprite: Sprite,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    rotation: Rotation,
    drag: Option<DragOffset>,
}

impl PlacedItem {
    /// Place a sprite centered at `(x, y)`. `width`/`height` are the
    /// dimensions of the loaded sprite image.
    pub fn new(sprite: Sprite, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            sprite,
            x,
            y,
            width,
            height,
            rotation: Rotation::Deg0,
            drag: None,
        }
    }

    pub fn sprite(&self) -> Sprite {
        self.sprite
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Unrotated hit box centered on the item.
    pub fn bounds(&self) -> ItemBounds {
        ItemBounds::from_center(self.x, self.y, self.width, self.height)
    }

    pub fn rotate(&mut self) {
        self.rotation = self.rotation.next();
    }

    /// Begin following the pointer, keeping the grab point fixed under it.
    pub fn start_dragging(&mut self, px: f32, py: f32) {
        self.drag = Some(DragOffset {
            dx: px - self.x,
            dy: py - self.y,
        });
    }

    /// Move the center to `pointer - offset` while dragging.
    pub fn track_pointer(&mut self, px: f32, py: f32) {
        if let Some(offset) = self.drag {
            self.x = px - offset.dx;
            self.y = py - offset.dy;
        }
    }

    pub fn stop_dragging(&mut self) {
        self.drag = None;
    }
}
