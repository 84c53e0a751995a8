//=============================================================================
// File: src/components/badge.rs
//=============================================================================
use dioxus::prelude::*;

/// Semantic coloring for a [`Badge`]. The set is closed; anything outside it
/// is unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BadgeTone {
    #[default]
    Default,
    Success,
    Warning,
    Danger,
    Info,
}

impl BadgeTone {
    fn to_style(&self) -> &'static str {
        match self {
            BadgeTone::Default => {
                "background-color: var(--pico-muted-border-color); color: var(--pico-muted-color);"
            }
            BadgeTone::Success => {
                "background-color: color-mix(in srgb, var(--pico-color-green-500), transparent 85%); color: var(--pico-color-green-500);"
            }
            BadgeTone::Warning => {
                "background-color: color-mix(in srgb, var(--pico-color-amber-500), transparent 85%); color: var(--pico-color-amber-500);"
            }
            BadgeTone::Danger => {
                "background-color: color-mix(in srgb, var(--pico-color-red-500), transparent 85%); color: var(--pico-color-red-500);"
            }
            BadgeTone::Info => {
                "background-color: color-mix(in srgb, var(--pico-primary), transparent 90%); color: var(--pico-primary);"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct BadgeProps {
    #[props(default)]
    pub tone: BadgeTone,
    /// Everything else the caller sets lands on the underlying span.
    #[props(extends = span, extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// A rounded inline label whose colors are driven solely by its tone.
#[allow(non_snake_case)]
pub fn Badge(props: BadgeProps) -> Element {
    rsx! {
        span {
            style: "display: inline-flex; align-items: center; border-radius: 9999px; padding: 0.125rem 0.75rem; font-size: 0.75rem; font-weight: 500; {props.tone.to_style()}",
            ..props.attributes,
            {props.children}
        }
    }
}
