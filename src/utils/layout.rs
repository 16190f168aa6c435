//! Class and inline-style composition for the dialog shell
//!
//! The class names are the contract with the dialog stylesheet, so they
//! are computed here, away from the component, where they can be tested.

/// Join the class names whose flag is set, in order
///
/// ```ignore
/// class_names([("header", true), ("fullScreenHeader", false)]) == "header"
/// ```
pub fn class_names<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = (&'a str, bool)>,
{
    items
        .into_iter()
        .filter(|(name, enabled)| *enabled && !name.is_empty())
        .map(|(name, _)| name)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Layout switches a caller can set on a dialog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutFlags {
    pub gutterless: bool,
    pub wide: bool,
    pub full_screen: bool,
    pub full_height: bool,
}

/// Element used for the dialog title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleTag {
    /// `h2`, used in normal mode
    Heading,
    /// `span`, used in full-screen mode
    Inline,
}

/// Every class the shell needs for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellLayout {
    /// Content node handed to the overlay host
    pub content_class: String,
    /// Draggable box inside the content node
    pub inside_class: String,
    pub header_class: String,
    pub title_tag: TitleTag,
    pub title_class: &'static str,
    pub close_wrapper_class: String,
    pub show_separator: bool,
    pub body_class: String,
    pub footer_class: &'static str,
}

impl ShellLayout {
    pub fn new(flags: LayoutFlags) -> Self {
        let LayoutFlags {
            gutterless,
            wide,
            full_screen,
            full_height,
        } = flags;

        let inner_content_class = if gutterless {
            "gutterless"
        } else {
            "ReactModal__InnerContent"
        };

        Self {
            content_class: class_names([
                ("ReactModal__Content", true),
                ("HelpModalContent", true),
                ("wideContent", wide),
                ("fullScreenModal", full_screen),
                ("normalScreenModal", !full_screen),
            ]),
            inside_class: class_names([
                ("ReactModal__InsideContent", true),
                ("HelpModalInsideContent", true),
                ("fullScreenInside", full_screen),
                ("fullHeight", full_height),
            ]),
            header_class: class_names([
                ("ReactModal__Header", true),
                ("fullScreenHeader", full_screen),
            ]),
            title_tag: if full_screen {
                TitleTag::Inline
            } else {
                TitleTag::Heading
            },
            title_class: if full_screen { "fullScreenTitle" } else { "title" },
            close_wrapper_class: class_names([
                ("fullScreenCloseButton", true),
                ("normalCloseButton", !full_screen),
            ]),
            show_separator: full_screen,
            body_class: class_names([(inner_content_class, true), ("innerContent", true)]),
            footer_class: "ReactModal__Actions footer",
        }
    }
}

/// Inline style for the draggable box
pub fn inside_style(content_width: &str) -> String {
    format!("max-width: {};", content_width.trim())
}

/// Space separated id list for `aria-labelledby`
pub fn labelled_by(modal_id: &str) -> String {
    format!("{} {}", heading_id(modal_id), description_id(modal_id))
}

pub fn heading_id(modal_id: &str) -> String {
    format!("{}-heading", modal_id)
}

pub fn description_id(modal_id: &str) -> String {
    format!("{}-description", modal_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(s: &str) -> Vec<&str> {
        s.split(' ').collect()
    }

    #[test]
    fn test_class_names_skips_disabled_and_empty() {
        assert_eq!(class_names([("a", true), ("b", false), ("c", true)]), "a c");
        assert_eq!(class_names([("", true), ("b", false)]), "");
    }

    #[test]
    fn test_normal_layout() {
        let layout = ShellLayout::new(LayoutFlags::default());

        assert_eq!(
            layout.content_class,
            "ReactModal__Content HelpModalContent normalScreenModal"
        );
        assert_eq!(layout.inside_class, "ReactModal__InsideContent HelpModalInsideContent");
        assert_eq!(layout.header_class, "ReactModal__Header");
        assert_eq!(layout.title_tag, TitleTag::Heading);
        assert_eq!(layout.title_class, "title");
        assert_eq!(layout.close_wrapper_class, "fullScreenCloseButton normalCloseButton");
        assert!(!layout.show_separator);
        assert_eq!(layout.body_class, "ReactModal__InnerContent innerContent");
        assert_eq!(inside_style("400px"), "max-width: 400px;");
    }

    #[test]
    fn test_full_screen_layout() {
        let layout = ShellLayout::new(LayoutFlags {
            full_screen: true,
            ..Default::default()
        });

        assert_eq!(layout.title_tag, TitleTag::Inline);
        assert_eq!(layout.title_class, "fullScreenTitle");
        assert!(layout.show_separator);
        assert_eq!(layout.header_class, "ReactModal__Header fullScreenHeader");
        assert_eq!(layout.close_wrapper_class, "fullScreenCloseButton");
        assert!(classes(&layout.content_class).contains(&"fullScreenModal"));
        assert!(!classes(&layout.content_class).contains(&"normalScreenModal"));
        assert!(classes(&layout.inside_class).contains(&"fullScreenInside"));
    }

    #[test]
    fn test_gutterless_body() {
        let layout = ShellLayout::new(LayoutFlags {
            gutterless: true,
            ..Default::default()
        });

        assert_eq!(layout.body_class, "gutterless innerContent");
    }

    #[test]
    fn test_wide_and_full_height_variants() {
        let layout = ShellLayout::new(LayoutFlags {
            wide: true,
            full_height: true,
            ..Default::default()
        });

        assert!(classes(&layout.content_class).contains(&"wideContent"));
        assert!(classes(&layout.inside_class).contains(&"fullHeight"));
        assert!(!classes(&layout.inside_class).contains(&"fullScreenInside"));
    }

    #[test]
    fn test_aria_ids_are_scoped_to_modal() {
        assert_eq!(heading_id("help"), "help-heading");
        assert_eq!(description_id("help"), "help-description");
        assert_eq!(labelled_by("help"), "help-heading help-description");
    }
}
