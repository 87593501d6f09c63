use alloc::sync::Arc;

use crate::scroller::Scroller;
use crate::{Easing, Extent, Follower};

/// A callback fired when the scroller's state changes.
///
/// The second argument is `is_scrolling`.
pub type OnChangeCallback = Arc<dyn Fn(&Scroller, bool) + Send + Sync>;

/// A callback fired once when the follower finishes its landing sequence.
pub type OnAttachedCallback = Arc<dyn Fn() + Send + Sync>;

/// A callback fired when the follower's derived state changes.
pub type FollowerChangeCallback = Arc<dyn Fn(&Follower) + Send + Sync>;

/// Configuration for [`crate::Scroller`].
///
/// Cheap to clone: the callback is stored in an `Arc` so adapters can tweak a
/// few fields and rebuild without reallocating closures.
#[derive(Clone)]
pub struct ScrollerOptions {
    /// Enables/disables the engine. When disabled, inputs are inert and the
    /// host is expected to fall back to native scrolling.
    pub enabled: bool,

    /// Per-tick interpolation factor toward `target`. Higher is snappier,
    /// lower is smoother. Tuned empirically; there is no "correct" value.
    pub ease: f64,

    /// Glide duration used when callers do not request one explicitly.
    pub default_glide_ms: u64,

    /// Easing curve for glides.
    pub glide_easing: Easing,

    /// Surface geometry applied at construction, if already known.
    pub initial_extent: Option<Extent>,

    /// Scroll offset applied at construction (clamped against the extent).
    pub initial_offset: f64,

    /// Debounced fallback duration for resetting `is_scrolling` after the
    /// last input or glide movement.
    pub is_scrolling_reset_delay_ms: u64,

    /// Optional callback fired when the scroller's internal state changes.
    pub on_change: Option<OnChangeCallback>,
}

impl ScrollerOptions {
    pub fn new() -> Self {
        Self {
            enabled: true,
            ease: 0.12,
            default_glide_ms: 1000,
            glide_easing: Easing::EaseInOutCubic,
            initial_extent: None,
            initial_offset: 0.0,
            is_scrolling_reset_delay_ms: 150,
            on_change: None,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_ease(mut self, ease: f64) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_default_glide_ms(mut self, default_glide_ms: u64) -> Self {
        self.default_glide_ms = default_glide_ms;
        self
    }

    pub fn with_glide_easing(mut self, glide_easing: Easing) -> Self {
        self.glide_easing = glide_easing;
        self
    }

    pub fn with_initial_extent(mut self, initial_extent: Option<Extent>) -> Self {
        self.initial_extent = initial_extent;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: f64) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Scroller, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for ScrollerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ScrollerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollerOptions")
            .field("enabled", &self.enabled)
            .field("ease", &self.ease)
            .field("default_glide_ms", &self.default_glide_ms)
            .field("glide_easing", &self.glide_easing)
            .field("initial_extent", &self.initial_extent)
            .field("initial_offset", &self.initial_offset)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .finish_non_exhaustive()
    }
}

/// Configuration for [`crate::Follower`].
#[derive(Clone)]
pub struct FollowerOptions {
    /// Begin in the `Landing` phase. When `false` the follower attaches to
    /// the scroll stream immediately (no landing callback fires).
    pub start_landing: bool,

    /// Frame count of the walk cycle.
    pub total_frames: f64,

    /// Scroll distance that advances the walk cycle by one frame. Tuned
    /// empirically; there is no "correct" value.
    pub pixels_per_frame: f64,

    /// Rendered size of the follower, px.
    pub follower_size: f64,

    /// Horizontal inset from the viewport edges, px.
    pub edge_padding: f64,

    /// Minimum per-sample movement before `facing` flips. Keeps the sprite
    /// from jittering at rest.
    pub facing_threshold_px: f64,

    /// How long after the last observed movement the walking visual reverts
    /// to idle.
    pub walk_reset_delay_ms: u64,

    /// Fired exactly once, on `Landing -> Attached`.
    pub on_attached: Option<OnAttachedCallback>,

    /// Optional callback fired when the follower's derived state changes.
    pub on_change: Option<FollowerChangeCallback>,
}

impl FollowerOptions {
    pub fn new() -> Self {
        Self {
            start_landing: true,
            total_frames: 60.0,
            pixels_per_frame: 15.0,
            follower_size: 180.0,
            edge_padding: 32.0,
            facing_threshold_px: 0.5,
            walk_reset_delay_ms: 50,
            on_attached: None,
            on_change: None,
        }
    }

    pub fn with_start_landing(mut self, start_landing: bool) -> Self {
        self.start_landing = start_landing;
        self
    }

    pub fn with_total_frames(mut self, total_frames: f64) -> Self {
        self.total_frames = total_frames;
        self
    }

    pub fn with_pixels_per_frame(mut self, pixels_per_frame: f64) -> Self {
        self.pixels_per_frame = pixels_per_frame;
        self
    }

    pub fn with_follower_size(mut self, follower_size: f64) -> Self {
        self.follower_size = follower_size;
        self
    }

    pub fn with_edge_padding(mut self, edge_padding: f64) -> Self {
        self.edge_padding = edge_padding;
        self
    }

    pub fn with_facing_threshold_px(mut self, facing_threshold_px: f64) -> Self {
        self.facing_threshold_px = facing_threshold_px;
        self
    }

    pub fn with_walk_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.walk_reset_delay_ms = delay_ms;
        self
    }

    pub fn with_on_attached(mut self, on_attached: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_attached = on_attached.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Follower) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for FollowerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for FollowerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FollowerOptions")
            .field("start_landing", &self.start_landing)
            .field("total_frames", &self.total_frames)
            .field("pixels_per_frame", &self.pixels_per_frame)
            .field("follower_size", &self.follower_size)
            .field("edge_padding", &self.edge_padding)
            .field("facing_threshold_px", &self.facing_threshold_px)
            .field("walk_reset_delay_ms", &self.walk_reset_delay_ms)
            .finish_non_exhaustive()
    }
}
