//! Host bindings for the `fastscroll` crate.
//!
//! `fastscroll` only does the math. This crate adds the small amount of glue every UI binding
//! needs on top of it:
//!
//! - a [`ScrollHost`] trait describing the scrollbar/container pair a host exposes
//! - listener bookkeeping that registers and tears down each host listener exactly once
//! - a [`Controller`] that measures the viewport, sizes the scrollbar track and delivers
//!   snapshots, queueing events raised by the snapshot listener instead of re-entering
//!
//! It stays framework-agnostic; concrete toolkits implement [`ScrollHost`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod event;
mod host;
mod listeners;

#[cfg(test)]
mod tests;

pub use controller::{Controller, SnapshotListener};
pub use event::{EventSink, HostEvent};
pub use host::{ListenerId, ListenerTarget, ScrollHost};
pub use listeners::Listeners;

pub use fastscroll::{FastScrollOptions, InputChange, InputError, Snapshot};
