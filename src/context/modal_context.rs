//! Modal Context
//!
//! Makes the app-wide [`ModalSettings`] available to every dialog without
//! prop drilling. The root component installs the provider once; dialogs
//! rendered outside a provider fall back to the built-in defaults.
//!
//! # Example
//! ```rust,ignore
//! #[component]
//! fn App() -> Element {
//!     use_modal_settings_provider(modal_settings::load_settings);
//!     rsx! { /* ... */ }
//! }
//!
//! #[component]
//! fn SomeDialog() -> Element {
//!     let settings = use_modal_settings();
//!     rsx! { "{settings.close_label}" }
//! }
//! ```

use dioxus::prelude::*;
use crate::stores::modal_settings::ModalSettings;

/// Install the settings provider for the current subtree
pub fn use_modal_settings_provider(init: impl FnOnce() -> ModalSettings) -> Signal<ModalSettings> {
    use_context_provider(|| Signal::new(init()))
}

/// Current settings, or defaults when no provider is installed
pub fn use_modal_settings() -> ModalSettings {
    match try_use_context::<Signal<ModalSettings>>() {
        Some(settings) => settings.read().clone(),
        None => ModalSettings::default(),
    }
}
