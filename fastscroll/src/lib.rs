//! A headless visible-range resolver for two-level virtual lists.
//!
//! The list is made of flat *group* rows; at most one group is expanded, and its *element*
//! rows are laid out directly beneath it. Given row counts, fixed row heights, the expanded
//! group, the scroll offset and the viewport height, this crate computes which group and
//! element indexes are visible, so a UI layer can render exactly that slice.
//!
//! For host bindings (listener lifecycle, event queueing), see the `fastscroll-adapter` crate.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - row counts and row heights
//! - viewport height
//! - scroll offset
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod fast_scroll;
mod input;
mod layout;
mod options;
mod state;
mod types;
mod visibility;


pub use error::InputError;
pub use fast_scroll::FastScroll;
pub use input::{InputChange, InputField, InputPolicy};
pub use layout::{DerivedLayout, resolve_layout};
pub use options::{FastScrollOptions, OnChangeCallback};
pub use state::GeometryState;
pub use types::{Region, ScrollEdge, Snapshot};
pub use visibility::{classify, clamped_scroll_offset, resolve_visibility};
