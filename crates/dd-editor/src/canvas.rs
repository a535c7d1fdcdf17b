//! The canvas controller.
//!
//! `DormCanvas` owns the slot arena, the loaded images, and the last known
//! pointer position. The window layer feeds it `InputEvent`s through
//! [`DormCanvas::dispatch`] and paints with [`DormCanvas::render_frame`].

use crate::input::InputEvent;
use crate::shortcuts::{CanvasAction, ShortcutMap};
use dd_core::{CanvasConfig, PlacedItem, Slots, Sprite};
use dd_render::hit::{hit_test, is_under_pointer};
use dd_render::paint::paint_frame;
use dd_render::snapshot::save_png;
use dd_render::{AssetError, Assets, SnapshotError};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// What the window layer should do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Nothing changed.
    Ignored,
    /// Canvas state changed; request a redraw.
    Redraw,
    /// The user asked for a snapshot at this path.
    Snapshot(PathBuf),
}

pub struct DormCanvas {
    config: CanvasConfig,
    assets: Assets,
    slots: Slots,
    pointer: (f32, f32),
}

impl DormCanvas {
    /// Load every image named by `config` and start with an empty canvas.
    ///
    /// # Errors
    /// Returns the first asset that could not be loaded.
    pub fn initialize(config: CanvasConfig) -> Result<Self, AssetError> {
        let assets = Assets::load(&config)?;
        log::info!(
            "canvas ready: {}x{}, assets from {}",
            config.width,
            config.height,
            config.asset_dir.display()
        );
        Ok(Self::with_assets(assets, config))
    }

    pub fn with_assets(assets: Assets, config: CanvasConfig) -> Self {
        Self {
            config,
            assets,
            slots: Slots::new(),
            pointer: (0.0, 0.0),
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    pub fn pointer(&self) -> (f32, f32) {
        self.pointer
    }

    // ─── Event dispatch ──────────────────────────────────────────────────

    pub fn dispatch(&mut self, event: &InputEvent) -> Response {
        match event {
            InputEvent::Key { key, x, y } => self.handle_key(key, *x, *y),
            InputEvent::PointerDown { x, y } => self.handle_pointer_down(*x, *y),
            InputEvent::PointerMove { x, y } => self.handle_pointer_move(*x, *y),
            InputEvent::PointerUp { x, y } => {
                self.pointer = (*x, *y);
                self.handle_pointer_up()
            }
        }
    }

    /// Resolve and apply a key press at `(x, y)`. Every key is ignored
    /// while all slots are occupied.
    pub fn handle_key(&mut self, key: &str, x: f32, y: f32) -> Response {
        self.pointer = (x, y);
        if self.slots.is_full() {
            log::debug!("canvas full, ignoring key {key:?}");
            return Response::Ignored;
        }
        let Some(action) = ShortcutMap::resolve(key) else {
            log::trace!("unbound key {key:?}");
            return Response::Ignored;
        };

        match action {
            CanvasAction::Add(sprite) => self.add_item(sprite),
            CanvasAction::Rotate => self.rotate_under_pointer(),
            CanvasAction::Delete => self.delete_under_pointer(),
            CanvasAction::Save => Response::Snapshot(self.config.snapshot_file.clone()),
        }
    }

    /// Start dragging the first item under the pointer.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> Response {
        self.pointer = (x, y);
        let Some(index) = hit_test(&self.slots, x, y) else {
            return Response::Ignored;
        };
        if let Some(item) = self.slots.get_mut(index) {
            item.start_dragging(x, y);
            log::debug!("drag start slot {index} {:?}", item.sprite());
        }
        Response::Redraw
    }

    /// Move every dragging item so its grab point stays under the pointer.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> Response {
        self.pointer = (x, y);
        let mut moved = false;
        for (_, item) in self.slots.iter_mut().filter(|(_, i)| i.is_dragging()) {
            item.track_pointer(x, y);
            moved = true;
        }
        if moved {
            Response::Redraw
        } else {
            Response::Ignored
        }
    }

    /// Stop dragging on every item, not only the one that was grabbed.
    pub fn handle_pointer_up(&mut self) -> Response {
        let mut was_dragging = false;
        for (_, item) in self.slots.iter_mut() {
            was_dragging |= item.is_dragging();
            item.stop_dragging();
        }
        if was_dragging {
            Response::Redraw
        } else {
            Response::Ignored
        }
    }

    /// Whether the current pointer is strictly inside `item`'s box.
    pub fn is_under_pointer(&self, item: Option<&PlacedItem>) -> bool {
        let (px, py) = self.pointer;
        is_under_pointer(item, px, py)
    }

    // ─── Actions ─────────────────────────────────────────────────────────

    fn add_item(&mut self, sprite: Sprite) -> Response {
        let (x, y) = self.pointer;
        let (w, h) = self.assets.sprite_size(sprite);
        match self.slots.insert(PlacedItem::new(sprite, x, y, w, h)) {
            Some(index) => {
                log::debug!("placed {sprite:?} in slot {index} at ({x}, {y})");
                Response::Redraw
            }
            None => Response::Ignored,
        }
    }

    fn rotate_under_pointer(&mut self) -> Response {
        let (px, py) = self.pointer;
        let Some(index) = hit_test(&self.slots, px, py) else {
            return Response::Ignored;
        };
        if let Some(item) = self.slots.get_mut(index) {
            item.rotate();
            log::debug!("rotated slot {index} to {:?}", item.rotation());
        }
        Response::Redraw
    }

    fn delete_under_pointer(&mut self) -> Response {
        let (px, py) = self.pointer;
        let Some(index) = hit_test(&self.slots, px, py) else {
            return Response::Ignored;
        };
        if let Some(item) = self.slots.remove(index) {
            log::debug!("removed {:?} from slot {index}", item.sprite());
        }
        Response::Redraw
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    /// A transparent frame of canvas size.
    pub fn new_frame(&self) -> RgbaImage {
        RgbaImage::new(self.config.width, self.config.height)
    }

    /// Paint background and every placed item into `frame`.
    pub fn render_frame(&self, frame: &mut RgbaImage) {
        paint_frame(
            frame,
            &self.assets,
            &self.slots,
            self.config.background_color,
        );
    }

    /// Render a fresh frame and write it as PNG to `path`.
    pub fn save_snapshot(&self, path: &Path) -> Result<(), SnapshotError> {
        let mut frame = self.new_frame();
        self.render_frame(&mut frame);
        save_png(&frame, path)
    }
}
