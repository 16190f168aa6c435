//! Draggable dialog
//!
//! Header (title + close control), body, and an optional "need more help"
//! footer link, rendered inside [`OverlayHost`]. The box can be moved by
//! dragging it anywhere on the page.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::icons::{CloseIcon, ExternalLinkIcon};
use crate::components::overlay_host::OverlayHost;
use crate::context::modal_context::use_modal_settings;
use crate::hooks::use_draggable;
use crate::utils::layout::{self, LayoutFlags, ShellLayout, TitleTag};
use crate::utils::modal_style::ModalStyle;

/// Which close control the header shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CloseVariant {
    /// Icon button labelled "Close", calls `on_request_close`
    #[default]
    Labelled,
    /// Plain "X", calls `close_controller`
    Glyph,
}

impl CloseVariant {
    /// The handler this variant's close control calls
    pub fn pick<H>(self, on_request_close: H, close_controller: H) -> H {
        match self {
            CloseVariant::Labelled => on_request_close,
            CloseVariant::Glyph => close_controller,
        }
    }
}

#[component]
pub fn Modal(
    #[props(default = false)] is_open: bool,
    title: Element,
    /// Accessible label; also keys the overlay host
    content_label: String,
    /// DOM id of the draggable box
    modal_id: String,
    /// Dismissal requested by the overlay host or the labelled close button
    #[props(default)] on_request_close: EventHandler<()>,
    /// Called by the "X" close control
    #[props(default)] close_controller: EventHandler<()>,
    /// Id of the element that gets `aria-hidden` while open, when
    /// `aria_hide_app` is set. The dialog always renders in place; there
    /// is no separate mount target to resolve.
    #[props(default)] get_app_element: Option<Callback<(), String>>,
    #[props(default = false)] aria_hide_app: bool,
    #[props(default = false)] gutterless: bool,
    #[props(default = false)] wide: bool,
    #[props(default = false)] full_screen: bool,
    #[props(default = false)] full_height: bool,
    /// `max-width` of the box, "600px" unless configured otherwise
    #[props(default)] content_width: Option<String>,
    #[props(default)] style: Option<ModalStyle>,
    /// Shows the footer link when set
    #[props(default)] need_more_help_link: Option<String>,
    #[props(default)] close_variant: CloseVariant,
    #[props(default)] content_ref: EventHandler<Rc<MountedData>>,
    children: Element,
) -> Element {
    let settings = use_modal_settings();
    let mut drag = use_draggable();

    // Closing aborts any drag and detaches the document listeners
    use_effect(use_reactive(&is_open, move |is_open| {
        if !is_open {
            drag.release();
        }
    }));

    let layout = ShellLayout::new(LayoutFlags {
        gutterless,
        wide,
        full_screen,
        full_height,
    });
    let host_style = style.unwrap_or_else(|| settings.style.clone());
    let app_element_id = match get_app_element {
        Some(resolve) => resolve.call(()),
        None => settings.app_element_id.clone(),
    };
    let content_class = layout.content_class.clone();
    let labelled_by = layout::labelled_by(&modal_id);
    let content_width = content_width.unwrap_or_else(|| settings.content_width.clone());

    rsx! {
        OverlayHost {
            key: "{content_label}",
            is_open,
            class: content_class,
            content_label: content_label.clone(),
            labelled_by,
            style: host_style,
            close_timeout_ms: settings.close_timeout_ms,
            should_close_on_overlay_click: false,
            aria_hide_app,
            app_element_id,
            on_after_open: move |_| drag.activate(),
            on_reopen: move |_| drag.activate(),
            on_request_close,
            content_ref,

            DialogShell {
                modal_id,
                title,
                layout,
                content_width,
                close_variant,
                close_label: settings.close_label.clone(),
                need_more_help_label: settings.need_more_help_label.clone(),
                need_more_help_link,
                on_request_close,
                close_controller,
                grabbed: drag.grabbed(),
                on_mounted: move |evt| drag.on_mounted(evt),
                on_mouse_down: move |evt| drag.on_mouse_down(evt),
                {children}
            }
        }
    }
}

/// The draggable box: header, optional separator, body and help footer
#[component]
pub fn DialogShell(
    modal_id: String,
    title: Element,
    layout: ShellLayout,
    content_width: String,
    #[props(default)] close_variant: CloseVariant,
    close_label: String,
    need_more_help_label: String,
    #[props(!optional)] need_more_help_link: Option<String>,
    #[props(default)] on_request_close: EventHandler<()>,
    #[props(default)] close_controller: EventHandler<()>,
    #[props(default = false)] grabbed: bool,
    #[props(default)] on_mounted: EventHandler<MountedEvent>,
    #[props(default)] on_mouse_down: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let inside_style = layout::inside_style(&content_width);
    let heading_id = layout::heading_id(&modal_id);
    let description_id = layout::description_id(&modal_id);
    let close = close_variant.pick(on_request_close, close_controller);

    let title_node = match layout.title_tag {
        TitleTag::Heading => rsx! {
            h2 { id: "{heading_id}", class: "{layout.title_class}", {title} }
        },
        TitleTag::Inline => rsx! {
            span { id: "{heading_id}", class: "{layout.title_class}", {title} }
        },
    };

    let close_control = match close_variant {
        CloseVariant::Labelled => rsx! {
            button {
                r#type: "button",
                class: "closeButton flat-lightGray",
                title: "{close_label}",
                "aria-label": "{close_label}",
                onclick: move |_| close.call(()),
                CloseIcon {}
            }
        },
        CloseVariant::Glyph => rsx! {
            span {
                class: "closeGlyph",
                role: "button",
                tabindex: "0",
                "aria-label": "{close_label}",
                onclick: move |_| close.call(()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        close.call(());
                    }
                },
                "X"
            }
        },
    };

    rsx! {
        div {
            id: "{modal_id}",
            class: "{layout.inside_class}",
            style: "{inside_style}",
            draggable: "true",
            "aria-grabbed": "{grabbed}",
            onmounted: move |evt| on_mounted.call(evt),
            onmousedown: move |evt| on_mouse_down.call(evt),

            // Header
            div {
                class: "{layout.header_class}",
                {title_node}
                div {
                    class: "{layout.close_wrapper_class}",
                    {close_control}
                }
            }

            if layout.show_separator {
                hr {}
            }

            // Body
            div {
                id: "{description_id}",
                class: "{layout.body_class}",
                {children}
            }

            // Footer
            if let Some(link) = need_more_help_link.as_ref() {
                div {
                    class: "{layout.footer_class}",
                    a {
                        href: "{link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "needMoreHelp",
                        "{need_more_help_label}"
                        span {
                            class: "icon customIcon",
                            ExternalLinkIcon {}
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn help_dialog() -> Element {
        rsx! {
            DialogShell {
                modal_id: "modalHelp",
                title: rsx! { "Need a hand?" },
                layout: ShellLayout::new(LayoutFlags::default()),
                content_width: "400px",
                close_label: "Close",
                need_more_help_label: "Need more help?",
                need_more_help_link: Some("/help".to_string()),
                p { "Drag me" }
            }
        }
    }

    fn full_screen_dialog() -> Element {
        rsx! {
            DialogShell {
                modal_id: "modalFull",
                title: rsx! { "Everything" },
                layout: ShellLayout::new(LayoutFlags {
                    full_screen: true,
                    ..LayoutFlags::default()
                }),
                content_width: "600px",
                close_label: "Close",
                need_more_help_label: "Need more help?",
                need_more_help_link: None,
                p { "Body" }
            }
        }
    }

    fn glyph_dialog() -> Element {
        rsx! {
            DialogShell {
                modal_id: "modalDraggable",
                title: rsx! { "My test modal" },
                layout: ShellLayout::new(LayoutFlags::default()),
                content_width: "100%",
                close_variant: CloseVariant::Glyph,
                close_label: "Close",
                need_more_help_label: "Need more help?",
                need_more_help_link: None,
                p { "Dialog with drag and drop repositioning" }
            }
        }
    }

    #[test]
    fn test_help_link_opens_in_new_tab() {
        let html = render(help_dialog);
        assert!(html.contains(r#"href="/help""#), "{html}");
        assert!(html.contains(r#"target="_blank""#), "{html}");
        assert!(html.contains(r#"rel="noopener noreferrer""#), "{html}");
        assert!(html.contains("Need more help?"), "{html}");
    }

    #[test]
    fn test_no_footer_without_help_link() {
        let html = render(full_screen_dialog);
        assert!(!html.contains("needMoreHelp"), "{html}");
        assert!(!html.contains("<a"), "{html}");
    }

    #[test]
    fn test_body_width_comes_from_content_width() {
        let html = render(help_dialog);
        assert!(html.contains("max-width: 400px"), "{html}");
        assert!(html.contains(r#"id="modalHelp-description""#), "{html}");
    }

    #[test]
    fn test_normal_title_is_heading_without_separator() {
        let html = render(help_dialog);
        assert!(html.contains("<h2"), "{html}");
        assert!(html.contains(r#"id="modalHelp-heading""#), "{html}");
        assert!(!html.contains("<hr"), "{html}");
    }

    #[test]
    fn test_full_screen_title_is_inline_with_separator() {
        let html = render(full_screen_dialog);
        assert!(!html.contains("<h2"), "{html}");
        assert!(html.contains("<span"), "{html}");
        assert!(html.contains(r#"id="modalFull-heading""#), "{html}");
        assert!(html.contains("<hr"), "{html}");
    }

    #[test]
    fn test_close_controls_per_variant() {
        let labelled = render(help_dialog);
        assert!(labelled.contains("closeButton"), "{labelled}");
        assert!(labelled.contains(r#"aria-label="Close""#), "{labelled}");

        let glyph = render(glyph_dialog);
        assert!(glyph.contains("closeGlyph"), "{glyph}");
        assert!(!glyph.contains("closeButton"), "{glyph}");
    }

    #[test]
    fn test_close_variant_picks_its_handler() {
        fn request_close(calls: &mut Vec<&'static str>) {
            calls.push("on_request_close");
        }
        fn close_controller(calls: &mut Vec<&'static str>) {
            calls.push("close_controller");
        }
        let handlers: [fn(&mut Vec<&'static str>); 2] = [request_close, close_controller];

        let mut calls = Vec::new();
        CloseVariant::Labelled.pick(handlers[0], handlers[1])(&mut calls);
        CloseVariant::Glyph.pick(handlers[0], handlers[1])(&mut calls);

        assert_eq!(calls, vec!["on_request_close", "close_controller"]);
    }
}
