//! Adapter utilities for the `tilepager` crate.
//!
//! The `tilepager` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides small, framework-neutral helpers commonly
//! needed to bind it to a host:
//!
//! - Pointer-drag tracking with tap/drag separation and momentum projection
//! - Tween-based snap animation helpers (optional; adapter-driven)
//! - A controller wiring both to a [`tilepager::Pager`]
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui
//! bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod gesture;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use gesture::{
    DECELERATION_RATE, DragOutcome, DragTracker, MAX_FLING_VELOCITY, TOUCH_SLOP,
};
pub use tween::{Easing, Tween};
