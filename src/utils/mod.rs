// Utility functions
// Pure helpers with no DOM access, covered by unit tests

pub mod drag;
pub mod errors;
pub mod layout;
pub mod modal_style;
