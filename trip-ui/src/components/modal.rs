//! Overlay dialog component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ModalProps {
    /// Whether the dialog is shown
    pub open: bool,
    /// Title shown in the dialog header
    pub title: String,
    /// Invoked by the backdrop and the close control
    pub on_close: EventHandler<()>,
    pub children: Element,
}

/// Fixed overlay dialog with a title bar and a content slot.
/// Clicking the backdrop closes it; clicks inside the panel do not.
#[component]
pub fn Modal(props: ModalProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.4); display: flex; justify-content: center; align-items: center; z-index: 100;",
            onclick: move |_| props.on_close.call(()),
            div {
                style: "background: #FFFFFF; border-radius: 8px; padding: 20px; max-width: 680px; width: calc(100% - 32px); max-height: 90vh; overflow-y: auto; box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);",
                onclick: move |evt| evt.stop_propagation(),
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                    h2 {
                        style: "margin: 0; font-size: 18px;",
                        "{props.title}"
                    }
                    button {
                        style: "border: none; background: none; font-size: 18px; cursor: pointer; color: #666;",
                        onclick: move |_| props.on_close.call(()),
                        "\u{00D7}"
                    }
                }
                {props.children}
            }
        }
    }
}
