/// Horizontal geometry of the scroll surface, in pixels.
///
/// `content` is the full scrollable width, `viewport` the visible width. The
/// scrollable range is `[0, content - viewport]`, empty when the content fits.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub content: f64,
    pub viewport: f64,
}

impl Extent {
    pub fn new(content: f64, viewport: f64) -> Self {
        Self { content, viewport }
    }

    /// Maximum scroll offset. Never negative; a missing or undersized surface
    /// yields `0.0`.
    pub fn max_scroll(&self) -> f64 {
        (self.content - self.viewport).max(0.0)
    }

    /// Clamps an offset into `[0, max_scroll]`.
    pub fn clamp_offset(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_scroll())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// Which way the follower sprite faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    Left,
    Right,
}

/// Lifecycle phase of the follower.
///
/// `Landing` runs a one-shot entry sequence and ignores the scroll stream;
/// the single allowed transition is `Landing -> Attached`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FollowerPhase {
    Landing,
    Attached,
}

/// Which of the follower's visuals is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FollowerVisual {
    Landing,
    Walking,
    Idle,
}

/// A sample of the scroll surface as seen by an observer.
///
/// This is the follower's entire view of the world: the surface's current
/// offset plus its geometry. Observers never get a handle back to the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollView {
    pub offset: f64,
    pub max_scroll: f64,
    pub viewport: f64,
}

impl ScrollView {
    /// Scroll progress in `[0, 1]`. Division by `max_scroll` is guarded: an
    /// unscrollable surface reports `0.0`, never NaN or infinity.
    pub fn progress(&self) -> f64 {
        if self.max_scroll > 0.0 {
            (self.offset / self.max_scroll).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
