pub mod assets;
pub mod hit;
pub mod paint;
pub mod snapshot;

pub use assets::{AssetError, Assets};
pub use snapshot::SnapshotError;
