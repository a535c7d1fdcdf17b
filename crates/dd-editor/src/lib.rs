pub mod canvas;
pub mod input;
pub mod shortcuts;

pub use canvas::{DormCanvas, Response};
pub use input::InputEvent;
pub use shortcuts::{CanvasAction, ShortcutMap};
