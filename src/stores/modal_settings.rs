use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::utils::errors::ModalError;
use crate::utils::modal_style::ModalStyle;

const STORAGE_KEY: &str = "dragmodal_settings";

/// Defaults shared by every dialog in the app
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalSettings {
    /// How long a closing dialog stays mounted for its exit transition
    pub close_timeout_ms: u32,
    /// `max-width` of the draggable box when the caller gives none
    pub content_width: String,
    /// Element hidden from assistive tech while a dialog is open
    pub app_element_id: String,
    pub style: ModalStyle,
    pub close_label: String,
    pub need_more_help_label: String,
}

impl Default for ModalSettings {
    fn default() -> Self {
        Self {
            close_timeout_ms: 300,
            content_width: "600px".to_string(),
            app_element_id: "root".to_string(),
            style: ModalStyle::default(),
            close_label: "Close".to_string(),
            need_more_help_label: "Need more help?".to_string(),
        }
    }
}

/// Load settings from localStorage, falling back to defaults
pub fn load_settings() -> ModalSettings {
    match LocalStorage::get::<ModalSettings>(STORAGE_KEY) {
        Ok(settings) => {
            log::info!("Loaded modal settings from storage");
            settings
        }
        Err(StorageError::KeyNotFound(_)) => {
            log::debug!("No stored modal settings, using defaults");
            ModalSettings::default()
        }
        Err(e) => {
            log::warn!("{}, using defaults", ModalError::InvalidSettings(e.to_string()));
            ModalSettings::default()
        }
    }
}
