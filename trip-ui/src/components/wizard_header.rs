//! Wizard step header with title and subtitle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct WizardHeaderProps {
    /// Step title
    pub title: String,
    /// Supporting line under the title
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Header for wizard steps showing title and optional subtitle.
#[component]
pub fn WizardHeader(props: WizardHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
