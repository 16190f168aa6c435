//! Overlay host
//!
//! Backdrop + dialog container with a mount lifecycle: `on_after_open`
//! fires once per closed -> open transition, after the content node is in
//! the document, and a closing dialog stays mounted for
//! `close_timeout_ms` so exit transitions can run.

use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::utils::errors::ModalError;
use crate::utils::layout::class_names;
use crate::utils::modal_style::ModalStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    Closed,
    Open,
    /// Still mounted, waiting out the close transition
    Closing,
}

/// What a change of the `is_open` prop means for the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseChange {
    /// Closed -> Open: render and report `on_after_open` once mounted
    Mount,
    /// Open -> Closing: start the close timer
    BeginClose,
    /// Closing -> Open: cancel the pending unmount
    Reopen,
    Unchanged,
}

impl OverlayPhase {
    pub fn on_open_changed(self, is_open: bool) -> PhaseChange {
        match (self, is_open) {
            (OverlayPhase::Closed, true) => PhaseChange::Mount,
            (OverlayPhase::Open, false) => PhaseChange::BeginClose,
            (OverlayPhase::Closing, true) => PhaseChange::Reopen,
            _ => PhaseChange::Unchanged,
        }
    }

    pub fn is_mounted(self) -> bool {
        self != OverlayPhase::Closed
    }

    fn modifier(self) -> &'static str {
        match self {
            OverlayPhase::Open => "--after-open",
            OverlayPhase::Closing => "--before-close",
            OverlayPhase::Closed => "",
        }
    }
}

/// `base` plus its phase modifier, e.g. `ReactModal__Overlay ReactModal__Overlay--after-open`
pub fn phase_class(extra: &str, base: &str, phase: OverlayPhase) -> String {
    let modified = format!("{}{}", base, phase.modifier());
    class_names([
        (extra, true),
        (modified.as_str(), phase.is_mounted()),
    ])
}

fn set_app_hidden(app_element_id: &str, hidden: bool) -> Result<(), ModalError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ModalError::DomUnavailable)?;
    let element = document
        .get_element_by_id(app_element_id)
        .ok_or_else(|| ModalError::AppElementMissing(app_element_id.to_string()))?;

    if hidden {
        element.set_attribute("aria-hidden", "true").ok();
    } else {
        element.remove_attribute("aria-hidden").ok();
    }
    Ok(())
}

/// Modal container: portal wrapper, overlay, and focusable dialog node
#[component]
pub fn OverlayHost(
    is_open: bool,
    /// Classes for the dialog node; the phase modifier is appended
    class: String,
    /// Accessible name of the dialog
    content_label: String,
    #[props(default)] labelled_by: Option<String>,
    #[props(default)] style: ModalStyle,
    #[props(default = 300)] close_timeout_ms: u32,
    #[props(default = true)] should_close_on_overlay_click: bool,
    #[props(default = true)] should_close_on_esc: bool,
    #[props(default = false)] aria_hide_app: bool,
    #[props(default = "root".to_string())] app_element_id: String,
    #[props(default)] on_after_open: EventHandler<()>,
    /// Opened again while still closing; `on_after_open` does not fire
    /// because the content never left the document
    #[props(default)] on_reopen: EventHandler<()>,
    #[props(default)] on_after_close: EventHandler<()>,
    #[props(default)] on_request_close: EventHandler<()>,
    #[props(default)] content_ref: EventHandler<Rc<MountedData>>,
    children: Element,
) -> Element {
    let mut phase = use_signal(|| OverlayPhase::Closed);
    let mut close_generation = use_signal(|| 0u64);
    let mut open_pending = use_signal(|| false);

    let label_for_effect = content_label.clone();
    use_effect(use_reactive(&is_open, move |is_open| {
        let current = *phase.peek();
        match current.on_open_changed(is_open) {
            PhaseChange::Mount => {
                log::info!("Opening dialog '{}'", label_for_effect);
                open_pending.set(true);
                phase.set(OverlayPhase::Open);
            }
            PhaseChange::Reopen => {
                log::debug!("Dialog '{}' reopened before close finished", label_for_effect);
                *close_generation.write() += 1;
                phase.set(OverlayPhase::Open);
                on_reopen.call(());
            }
            PhaseChange::BeginClose => {
                log::info!("Closing dialog '{}'", label_for_effect);
                if close_timeout_ms == 0 {
                    phase.set(OverlayPhase::Closed);
                    on_after_close.call(());
                    return;
                }

                phase.set(OverlayPhase::Closing);
                let generation = {
                    let mut g = close_generation.write();
                    *g += 1;
                    *g
                };

                spawn(async move {
                    TimeoutFuture::new(close_timeout_ms).await;
                    // A reopen or a newer close owns the phase now
                    if *close_generation.peek() != generation || *phase.peek() != OverlayPhase::Closing {
                        return;
                    }
                    phase.set(OverlayPhase::Closed);
                    on_after_close.call(());
                });
            }
            PhaseChange::Unchanged => {}
        }
    }));

    let app_element_for_effect = app_element_id.clone();
    use_effect(move || {
        let mounted = phase().is_mounted();
        if !aria_hide_app {
            return;
        }
        match set_app_hidden(&app_element_for_effect, mounted) {
            Ok(()) => {}
            Err(e) if e.is_environmental() => log::debug!("{}", e),
            Err(e) => log::warn!("{}", e),
        }
    });

    let current = phase();
    if !current.is_mounted() {
        return rsx! {};
    }

    let overlay_class = phase_class("ReactModal__Overlay", "ReactModal__Overlay", current);
    let content_class = phase_class(&class, "ReactModal__Content", current);
    let overlay_style = style.overlay_css();
    let content_style = style.content_css();

    rsx! {
        div {
            class: "ReactModal__Portal",

            // Overlay
            div {
                class: "{overlay_class}",
                style: "{overlay_style}",
                onclick: move |_| {
                    if should_close_on_overlay_click {
                        on_request_close.call(());
                    }
                },

                // Dialog node
                div {
                    class: "{content_class}",
                    style: "{content_style}",
                    role: "dialog",
                    tabindex: "-1",
                    aria_modal: "true",
                    aria_label: "{content_label}",
                    aria_labelledby: labelled_by.clone(),
                    onclick: move |e| e.stop_propagation(),
                    onkeydown: move |e| {
                        if should_close_on_esc && e.key() == Key::Escape {
                            e.stop_propagation();
                            on_request_close.call(());
                        }
                    },
                    onmounted: move |evt| {
                        let data = evt.data();
                        content_ref.call(data.clone());

                        if *open_pending.peek() {
                            open_pending.set(false);
                            on_after_open.call(());
                        }

                        spawn(async move {
                            if let Err(e) = data.set_focus(true).await {
                                log::debug!("Could not focus dialog: {:?}", e);
                            }
                        });
                    },
                    {children}
                }
            }
        }
    }
}
