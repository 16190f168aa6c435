// UI Components

pub mod icons;
pub mod modal;
pub mod overlay_host;

pub use modal::{CloseVariant, Modal};
