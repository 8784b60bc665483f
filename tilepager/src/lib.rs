//! A headless paging/carousel engine for snap-scrolling tile rows.
//!
//! For adapter-level utilities (gesture tracking, tween-driven snap
//! animation), see the `tilepager-adapter` crate.
//!
//! This crate focuses on the core arithmetic and state a paging row needs:
//! index ↔ offset mapping over a fixed tile stride, drag tracking, momentum
//! snapping on release, and the buffer-slot remapping that fakes
//! infinite-loop wraparound in carousel mode.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - renderable items (the pager only deals in indexes)
//! - drag translations and a momentum-projected end translation
//! - animation of the reported snaps
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod layout;
mod options;
mod pager;
mod state;
mod types;


pub use layout::TileLayout;
pub use options::{DEFAULT_FLING_DAMPING, OnChangeCallback, PagerOptions};
pub use pager::{CAROUSEL_BUFFER, Pager};
pub use state::PagerSnapshot;
pub use types::{GesturePhase, Indicator, Snap, TileSlot};
