//=============================================================================
// File: src/components/copy_button.rs
//=============================================================================
use std::time::Duration;

use dioxus::prelude::*;

use crate::compat;

#[derive(Props, Clone, PartialEq)]
pub struct CopyButtonProps {
    pub text_to_copy: String,
    #[props(default = "Copy".to_string())]
    pub label: String,
    #[props(default = "Copied".to_string())]
    pub copied_label: String,
    #[props(default = false)]
    pub disabled: bool,
}

/// Writes `text_to_copy` to the clipboard and briefly swaps its label as
/// feedback. Clicking with nothing to copy is a no-op.
#[allow(non_snake_case)]
pub fn CopyButton(props: CopyButtonProps) -> Element {
    let mut copied = use_signal(|| false);
    let text_to_copy = props.text_to_copy.clone();

    rsx! {
        button {
            class: "secondary",
            disabled: props.disabled,
            onclick: move |_| {
                let value = text_to_copy.clone();
                if value.is_empty() {
                    return;
                }
                spawn(async move {
                    if compat::clipboard_set(value).await {
                        copied.set(true);
                        compat::sleep(Duration::from_secs(2)).await;
                        copied.set(false);
                    }
                });
            },
            if copied() {
                "{props.copied_label}"
            } else {
                "{props.label}"
            }
        }
    }
}
