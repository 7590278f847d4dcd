//! Input mapping: physical keys become [`Action`]s, cursor positions become
//! look offsets.
//!
//! # Invariants
//! - The first cursor position after start or [`MouseTracker::reset`] yields a zero offset.
//! - Movement keys act for as long as they are held; every other action fires once per press.

pub mod action;
mod mouse;
mod state;

pub use action::{Action, binding_for};
pub use mouse::{MouseTracker, scroll_lines};
pub use state::InputState;

pub fn crate_info() -> &'static str {
    "roomview-input v0.1.0"
}
