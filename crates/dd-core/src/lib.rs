pub mod config;
pub mod model;
pub mod slots;

pub use config::CanvasConfig;
pub use model::*;
pub use slots::{CAPACITY, Slots};
