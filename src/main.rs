#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod context;
mod hooks;
mod stores;
mod utils;

use components::{CloseVariant, Modal};
use context::modal_context::use_modal_settings_provider;
use stores::modal_settings;

const USAGE: &str = r#"Modal {
    title: rsx! { "your title" },
    is_open: false,
    modal_id: "modalDraggable",
    content_label: "my test modal",
    close_variant: CloseVariant::Glyph,
    close_controller: move |_| {},
    p { "Dialog with drag and drop repositioning" }
}"#;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        wasm_logger::init(wasm_logger::Config::new(level));
    }

    log::info!("Starting dragmodal demo");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_modal_settings_provider(modal_settings::load_settings);

    let mut draggable_open = use_signal(|| false);
    let mut help_open = use_signal(|| false);
    let mut full_screen = use_signal(|| false);

    rsx! {
        div {
            class: "App",
            div {
                class: "container",
                p {
                    "To display the modal, click on the open modal button. You can drag the modal in page to any extent"
                }
                pre { "{USAGE}" }

                button {
                    r#type: "button",
                    onclick: move |_| draggable_open.set(true),
                    "Open modal"
                }
                button {
                    r#type: "button",
                    onclick: move |_| help_open.set(true),
                    "Open help modal"
                }
                button {
                    r#type: "button",
                    onclick: move |_| full_screen.toggle(),
                    if full_screen() { "Full screen: on" } else { "Full screen: off" }
                }

                // Mounted only while open, unmounting releases its listeners
                if draggable_open() {
                    Modal {
                        title: rsx! { "My test modal" },
                        is_open: true,
                        modal_id: "modalDraggable",
                        content_label: "my test modal",
                        close_variant: CloseVariant::Glyph,
                        close_controller: move |_| draggable_open.set(false),
                        content_width: "100%",
                        p { "Dialog with drag and drop repositioning" }
                    }
                }

                // Always mounted, driven by is_open
                Modal {
                    title: rsx! { "Need a hand?" },
                    is_open: help_open(),
                    modal_id: "modalHelp",
                    content_label: "help modal",
                    full_screen: full_screen(),
                    need_more_help_link: "/help",
                    on_request_close: move |_| help_open.set(false),
                    p { "Drag this box by any part of it. Press Escape or the close button to dismiss it." }
                }
            }
        }
    }
}
