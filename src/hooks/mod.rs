pub mod use_draggable;

pub use use_draggable::use_draggable;
