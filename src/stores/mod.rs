pub mod modal_settings;
