/// What the engine decided about an input event.
///
/// `Consumed` means the host must suppress native handling (e.g. call
/// `preventDefault`); `PassThrough` means the event belongs to the platform,
/// e.g. a wheel over a nested scrollable panel or a horizontal-dominant drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputOutcome {
    Consumed,
    PassThrough,
}

impl InputOutcome {
    pub fn is_consumed(&self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// Geometry of a vertically-scrollable ancestor of a wheel event's target.
///
/// The host reports one entry per ancestor with `overflow-y: auto | scroll`
/// between the event target and the scroll surface (exclusive), innermost
/// first. The engine yields to any such pane that can still move in the
/// wheel direction, so nested panels (modal lists etc.) keep native
/// scrolling until they hit their boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NestedPane {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl NestedPane {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    fn can_scroll(&self) -> bool {
        self.scroll_height > self.client_height
    }

    fn at_top(&self) -> bool {
        self.scroll_top <= 0.0
    }

    fn at_bottom(&self) -> bool {
        // Sub-pixel tolerance: browsers report fractional scroll positions.
        (self.scroll_height - self.client_height - self.scroll_top).abs() < 1.0
    }

    /// Whether this pane should receive the wheel delta instead of the
    /// engine.
    pub fn consumes(&self, delta_y: f64) -> bool {
        if !self.can_scroll() {
            return false;
        }
        if delta_y < 0.0 && !self.at_top() {
            return true;
        }
        if delta_y > 0.0 && !self.at_bottom() {
            return true;
        }
        false
    }
}

/// True when any ancestor pane can still scroll in the wheel direction.
pub(crate) fn nested_consumes(panes: &[NestedPane], delta_y: f64) -> bool {
    panes.iter().any(|p| p.consumes(delta_y))
}

/// Rejects non-finite deltas from a misbehaving host.
///
/// Contract: input deltas must be finite. Violations are debug-asserted and
/// ignored in release, in line with the engine's correct-silently posture.
pub(crate) fn finite_or_warn(value: f64, what: &'static str) -> Option<f64> {
    if value.is_finite() {
        return Some(value);
    }
    swarn!(what, "ignoring non-finite input delta");
    debug_assert!(value.is_finite(), "non-finite {what}");
    None
}

/// Tracks an active touch drag and classifies its dominant axis.
///
/// The vertical anchor advances on every consumed move (so vertical deltas
/// are incremental), while the horizontal anchor stays at the initial touch
/// point for the life of the drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct TouchTracker {
    anchor: Option<(f64, f64)>,
}

impl TouchTracker {
    pub(crate) fn start(&mut self, x: f64, y: f64) {
        self.anchor = Some((x, y));
    }

    /// Returns the vertical delta to apply when the drag is
    /// vertical-dominant, `None` when the platform should handle it.
    pub(crate) fn movement(&mut self, x: f64, y: f64) -> Option<f64> {
        let (anchor_x, anchor_y) = self.anchor?;
        let delta_y = anchor_y - y;
        let delta_x = anchor_x - x;
        if delta_y.abs() > delta_x.abs() {
            self.anchor = Some((anchor_x, y));
            Some(delta_y)
        } else {
            None
        }
    }

    pub(crate) fn end(&mut self) {
        self.anchor = None;
    }
}
