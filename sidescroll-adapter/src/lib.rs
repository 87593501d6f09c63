//! Adapter utilities for the `sidescroll` crate.
//!
//! The `sidescroll` crate is UI-agnostic and focuses on the core state and
//! timing math. This crate provides small, framework-neutral helpers commonly
//! needed by hosts:
//!
//! - A named-section registry for decoupled navigation requests
//! - A `Controller` wiring the scroller, the follower, and navigation into
//!   one per-frame drive
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui
//! bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod sections;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use sections::{Section, SectionMap};
