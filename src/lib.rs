//! A headless smooth-scroll engine for horizontal scroll experiences.
//!
//! For adapter-level utilities (section navigation, controller wiring), see
//! the `sidescroll-adapter` crate.
//!
//! This crate focuses on the state and timing math behind a momentum-feel
//! horizontal scroller: a per-frame interpolation loop over an owned
//! `current`/`target` pair, eased programmatic glides, wheel/touch input
//! mapping with nested-pane pass-through, and a scroll-synchronized follower
//! character.
//!
//! It is UI-agnostic. A DOM/GUI layer is expected to provide:
//! - surface geometry (content and viewport widths)
//! - wheel/touch events and a per-frame `tick(now_ms)` call
//! - a write of the returned offset to the real scroll surface
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod follower;
mod glide;
mod input;
mod options;
mod scroller;
mod state;
mod types;


pub use follower::{Follower, screen_offset_x, walk_frame};
pub use glide::{Easing, GlideJob};
pub use input::{InputOutcome, NestedPane};
pub use options::{
    FollowerChangeCallback, FollowerOptions, OnAttachedCallback, OnChangeCallback, ScrollerOptions,
};
pub use scroller::Scroller;
pub use state::{EngineState, FollowerState, ScrollState};
pub use types::{Extent, Facing, FollowerPhase, FollowerVisual, ScrollDirection, ScrollView};
