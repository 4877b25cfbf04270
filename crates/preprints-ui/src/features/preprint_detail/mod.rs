//! Preprint detail page: viewing a preprint and deciding on it.
//!
//! # Design
//! - Keep the page state machine DOM-free so it is testable natively.
//! - Restrict API calls to the view layer through the store trait.
//! - Emit translation keys, never rendered text, from state and logic.

pub mod actions;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
