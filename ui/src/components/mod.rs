//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to defined common UI elements like buttons, badges, and form inputs.

pub mod badge;
pub mod copy_button;
pub mod pico;
pub mod qr_code;
