//=============================================================================
// File: src/screens/balance.rs
//=============================================================================
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::badge::{Badge, BadgeTone};
use crate::components::pico::{Button, Card};
use crate::Screen;

#[component]
pub fn BalanceScreen() -> Element {
    let default_mint = use_context::<AppState>().default_mint.clone();
    let mut active_screen = use_context::<Signal<Screen>>();

    // `use_resource` runs the server call in the background and re-renders
    // the arms below as it settles.
    let mut balance = use_resource(move || async move { api::wallet_balance().await });

    rsx! {
        match &*balance.read() {
            // The resource is still loading or has not been run yet.
            None => {
                rsx! {
                    Card {
                        h3 { "Balance" }
                        p { "Loading balance..." }
                        progress {} // An indeterminate progress bar
                    }
                }
            }
            // The async task finished successfully.
            Some(Ok(sats)) => {
                rsx! {
                    Card {
                        h3 { "Balance" }
                        p {
                            style: "font-size: 1.5rem;",
                            "{sats} sats"
                        }
                        if let Some(mint) = &default_mint {
                            p {
                                Badge {
                                    tone: BadgeTone::Info,
                                    "{mint}"
                                }
                            }
                        }
                        Button {
                            on_click: move |_| active_screen.set(Screen::Receive),
                            "Receive"
                        }
                    }
                }
            }
            // The async task returned an error.
            Some(Err(e)) => {
                rsx! {
                    Card {
                        h3 { "Error" }
                        p { "Failed to load balance: {e}" }
                        button {
                            onclick: move |_| balance.restart(),
                            "Retry"
                        }
                    }
                }
            }
        }
    }
}
