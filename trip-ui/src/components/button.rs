//! Styled push button component.

use dioxus::prelude::*;

/// Visual style of a Button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Filled primary action
    Primary,
    /// Bordered secondary action
    Outline,
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    pub label: String,
    #[props(default = ButtonVariant::Primary)]
    pub variant: ButtonVariant,
    #[props(default = false)]
    pub disabled: bool,
    /// Stretch to the container width
    #[props(default = false)]
    pub full_width: bool,
    pub onclick: EventHandler<MouseEvent>,
}

/// Push button with primary/outline variants and a disabled state.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let variant_style = match (props.variant, props.disabled) {
        (ButtonVariant::Primary, false) => {
            "background: #1565C0; color: #FFFFFF; border: 1px solid #1565C0; cursor: pointer;"
        }
        (ButtonVariant::Primary, true) => {
            "background: #90CAF9; color: #FFFFFF; border: 1px solid #90CAF9; cursor: default;"
        }
        (ButtonVariant::Outline, false) => {
            "background: #FFFFFF; color: #37474F; border: 1px solid #B0BEC5; cursor: pointer;"
        }
        (ButtonVariant::Outline, true) => {
            "background: #FFFFFF; color: #B0BEC5; border: 1px solid #CFD8DC; cursor: default;"
        }
    };
    let width_style = if props.full_width { "width: 100%;" } else { "" };

    rsx! {
        button {
            style: "padding: 8px 16px; border-radius: 6px; font-size: 14px; font-weight: 600; {width_style} {variant_style}",
            disabled: props.disabled,
            onclick: move |evt| props.onclick.call(evt),
            "{props.label}"
        }
    }
}
