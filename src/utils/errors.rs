//! Modal error types
//!
//! DOM access in the browser can fail in a handful of ways. None of them
//! are fatal to the page, so callers log the error and carry on.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalError {
    /// No `window` or `document` (non-browser target)
    DomUnavailable,
    /// The dialog node was not mounted yet
    ElementUnavailable,
    /// The mounted node could not be used as an HTML element
    NotAnHtmlElement,
    /// `aria_hide_app` was requested but the app element does not exist
    AppElementMissing(String),
    /// Registering a document listener failed
    ListenerAttach(String),
    /// Stored settings could not be parsed
    InvalidSettings(String),
}

impl ModalError {
    /// True if the error just means "not in a browser", which is expected
    /// during tests and server-side rendering
    pub fn is_environmental(&self) -> bool {
        matches!(self, Self::DomUnavailable)
    }
}

impl fmt::Display for ModalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DomUnavailable => write!(f, "Browser document is not available"),
            Self::ElementUnavailable => write!(f, "Dialog element has not been mounted"),
            Self::NotAnHtmlElement => write!(f, "Mounted dialog node is not an HTML element"),
            Self::AppElementMissing(id) => write!(f, "App element '#{}' not found", id),
            Self::ListenerAttach(msg) => write!(f, "Failed to attach document listener: {}", msg),
            Self::InvalidSettings(msg) => write!(f, "Invalid modal settings: {}", msg),
        }
    }
}

impl std::error::Error for ModalError {}
