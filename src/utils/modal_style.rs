//! Inline styles for the overlay and the dialog content node

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// CSS property -> value. Keys may be kebab-case (`background-color`)
/// or camelCase (`backgroundColor`); both render as kebab-case.
pub type StyleMap = BTreeMap<String, String>;

/// Base overlay style of the host; caller overrides win
const OVERLAY_BASE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("inset", "0"),
    ("background-color", "rgba(255, 255, 255, 0.75)"),
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalStyle {
    pub content: StyleMap,
    pub overlay: StyleMap,
}

impl Default for ModalStyle {
    /// Content stays interactive while the transparent overlay lets
    /// clicks through to the page behind the dialog
    fn default() -> Self {
        Self {
            content: style_map(&[("pointer-events", "all")]),
            overlay: style_map(&[
                ("background-color", "rgba(0, 0, 0, 0)"),
                ("pointer-events", "none"),
            ]),
        }
    }
}

impl ModalStyle {
    /// Overlay style: host base merged with the caller's overlay map
    pub fn overlay_css(&self) -> String {
        let mut merged: StyleMap = OVERLAY_BASE
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        for (property, value) in &self.overlay {
            merged.insert(css_property(property), value.clone());
        }
        to_css(&merged)
    }

    pub fn content_css(&self) -> String {
        to_css(&self.content)
    }
}

/// Build a style map from literal pairs
pub fn style_map(pairs: &[(&str, &str)]) -> StyleMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Render a map as a `style` attribute value
pub fn to_css(map: &StyleMap) -> String {
    map.iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(property, value)| format!("{}: {};", css_property(property), value.trim()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `backgroundColor` -> `background-color`; kebab-case passes through
pub fn css_property(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.trim().chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = ModalStyle::default();
        assert_eq!(style.content_css(), "pointer-events: all;");
        assert_eq!(
            style.overlay_css(),
            "background-color: rgba(0, 0, 0, 0); inset: 0; pointer-events: none; position: fixed;"
        );
    }

    #[test]
    fn test_overlay_without_overrides_uses_base() {
        let style = ModalStyle {
            content: StyleMap::new(),
            overlay: StyleMap::new(),
        };
        assert_eq!(
            style.overlay_css(),
            "background-color: rgba(255, 255, 255, 0.75); inset: 0; position: fixed;"
        );
        assert_eq!(style.content_css(), "");
    }

    #[test]
    fn test_css_property_case() {
        assert_eq!(css_property("backgroundColor"), "background-color");
        assert_eq!(css_property("pointer-events"), "pointer-events");
        assert_eq!(css_property("zIndex"), "z-index");
    }

    #[test]
    fn test_camel_case_override_replaces_base() {
        let style = ModalStyle {
            content: style_map(&[("maxHeight", "80vh")]),
            overlay: style_map(&[("backgroundColor", "black")]),
        };
        assert_eq!(style.content_css(), "max-height: 80vh;");
        assert!(style.overlay_css().contains("background-color: black;"));
        assert!(!style.overlay_css().contains("rgba(255, 255, 255, 0.75)"));
    }

    #[test]
    fn test_deserialize_partial_style() {
        let style: ModalStyle =
            serde_json::from_str(r#"{"overlay": {"backgroundColor": "red"}}"#).unwrap();
        assert_eq!(style.content, ModalStyle::default().content);
        assert_eq!(style.overlay.get("backgroundColor").map(String::as_str), Some("red"));
    }
}
