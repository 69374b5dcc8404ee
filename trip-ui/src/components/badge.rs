//! Small pill label component.

use dioxus::prelude::*;

/// Visual style of a Badge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BadgeVariant {
    /// Neutral gray pill
    Secondary,
    /// Transparent with a border
    Outline,
    /// Filled accent blue
    Accent,
}

#[derive(Props, Clone, PartialEq)]
pub struct BadgeProps {
    pub label: String,
    #[props(default = BadgeVariant::Secondary)]
    pub variant: BadgeVariant,
}

/// Inline pill label, styled by variant.
#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let variant_style = match props.variant {
        BadgeVariant::Secondary => {
            "background: #ECEFF1; color: #37474F; border: 1px solid #CFD8DC;"
        }
        BadgeVariant::Outline => {
            "background: transparent; color: #37474F; border: 1px solid #B0BEC5;"
        }
        BadgeVariant::Accent => "background: #1565C0; color: #FFFFFF; border: 1px solid #1565C0;",
    };

    rsx! {
        span {
            style: "display: inline-block; padding: 2px 10px; border-radius: 999px; font-size: 12px; font-weight: 600; {variant_style}",
            "{props.label}"
        }
    }
}
