use crate::{Facing, FollowerPhase, FollowerVisual};

/// A lightweight, serializable snapshot of the scroll pair.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: f64,
    pub target: f64,
    pub is_scrolling: bool,
}

/// A lightweight, serializable snapshot of the follower's derived state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FollowerState {
    pub phase: FollowerPhase,
    pub facing: Facing,
    pub frame: f64,
    pub screen_offset_x: f64,
    pub progress: f64,
    pub visual: FollowerVisual,
}

/// A combined snapshot of scroll + follower state.
///
/// Useful for restoring UI state across frames or sessions without coupling
/// the engine to any specific UI framework.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineState {
    pub scroll: ScrollState,
    pub follower: FollowerState,
}
