use alloc::sync::Arc;
use core::cell::Cell;
use core::cmp;

use crate::glide::GlideJob;
use crate::input::{InputOutcome, NestedPane, TouchTracker, finite_or_warn, nested_consumes};
use crate::{Easing, Extent, ScrollDirection, ScrollState, ScrollView, ScrollerOptions};

/// Once the lerp gap falls below this, `current` lands exactly on `target`.
/// Well under half a pixel, so the settle is invisible on the surface.
const SNAP_EPSILON_PX: f64 = 1e-3;

/// A headless smooth-scroll engine for one horizontal surface.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - The host forwards wheel/touch events and calls [`Scroller::tick`] once
///   per animation frame.
/// - `tick` returns the whole-pixel offset to write to the real surface.
///
/// The scroller is the single owner of the `current`/`target` pair. Every
/// other component only requests `target` changes; `current` moves only
/// inside `tick`. Both values are clamped into `[0, max_scroll]` on every
/// write.
///
/// For section navigation and follower wiring, see the `sidescroll-adapter`
/// crate.
#[derive(Clone, Debug)]
pub struct Scroller {
    options: ScrollerOptions,
    extent: Extent,
    current: f64,
    target: f64,
    glide: Option<GlideJob>,
    is_scrolling: bool,
    scroll_direction: Option<ScrollDirection>,
    last_scroll_event_ms: Option<u64>,
    touch: TouchTracker,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Scroller {
    /// Creates a new scroller from options.
    ///
    /// If `options.initial_extent` and/or `options.initial_offset` are set,
    /// those values are applied (and clamped) immediately.
    pub fn new(options: ScrollerOptions) -> Self {
        debug_assert!(
            options.ease > 0.0 && options.ease <= 1.0,
            "ease must be in (0, 1]"
        );
        let extent = options.initial_extent.unwrap_or_default();
        let offset = extent.clamp_offset(options.initial_offset);
        sdebug!(
            enabled = options.enabled,
            ease = options.ease,
            offset,
            "Scroller::new"
        );
        Self {
            extent,
            current: offset,
            target: offset,
            glide: None,
            is_scrolling: false,
            scroll_direction: None,
            last_scroll_event_ms: None,
            touch: TouchTracker::default(),
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &ScrollerOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ScrollerOptions) {
        let was_enabled = self.options.enabled;
        self.options = options;
        if !self.options.enabled || !was_enabled {
            self.reset_to_initial();
        } else {
            self.current = self.extent.clamp_offset(self.current);
            self.target = self.extent.clamp_offset(self.target);
        }
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ScrollerOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Scroller, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn reset_to_initial(&mut self) {
        self.glide = None;
        self.touch.end();
        let offset = self.extent.clamp_offset(self.options.initial_offset);
        self.current = offset;
        self.target = offset;
        self.is_scrolling = false;
        self.scroll_direction = None;
        self.last_scroll_event_ms = None;
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    /// Enables/disables the engine. Disabling cancels any glide and resets
    /// to the initial offset; the host is expected to fall back to native
    /// scrolling while disabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        self.reset_to_initial();
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.is_scrolling);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if !is_scrolling {
            self.scroll_direction = None;
            self.last_scroll_event_ms = None;
        }
        self.notify();
    }

    /// Marks a scroll movement at `now_ms`, for `is_scrolling` debouncing.
    pub fn notify_scroll_event(&mut self, now_ms: u64) {
        if !self.options.enabled {
            return;
        }
        self.last_scroll_event_ms = Some(now_ms);
        self.set_is_scrolling(true);
    }

    /// Resets `is_scrolling` once the debounce window has elapsed with no
    /// further movement. Called from `tick`; exposed for hosts that pause
    /// the frame loop.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if !self.options.enabled {
            return;
        }
        if !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.is_scrolling_reset_delay_ms {
            self.set_is_scrolling(false);
        }
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Applies new surface geometry. `current` and `target` are re-clamped
    /// immediately so the clamping invariant survives resizes.
    pub fn set_extent(&mut self, extent: Extent) {
        if self.extent == extent {
            return;
        }
        self.batch_update(|s| {
            s.extent = extent;
            let cur = s.extent.clamp_offset(s.current);
            let tgt = s.extent.clamp_offset(s.target);
            s.set_current_clamped(cur);
            s.set_target_clamped(tgt);
            s.notify();
        });
    }

    /// The interpolated position, fractional px.
    pub fn position(&self) -> f64 {
        self.current
    }

    /// The position user input and navigation steer toward.
    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn max_scroll(&self) -> f64 {
        self.extent.max_scroll()
    }

    pub fn progress(&self) -> f64 {
        self.view().progress()
    }

    pub fn clamp_offset(&self, offset: f64) -> f64 {
        self.extent.clamp_offset(offset)
    }

    /// The whole-pixel offset the host writes to the surface.
    pub fn surface_offset(&self) -> u64 {
        // Round half up; valid because offsets are clamped non-negative.
        (self.current.max(0.0) + 0.5) as u64
    }

    /// The surface as an observer (e.g. the follower) sees it.
    pub fn view(&self) -> ScrollView {
        ScrollView {
            offset: self.current,
            max_scroll: self.extent.max_scroll(),
            viewport: self.extent.viewport,
        }
    }

    /// Returns a lightweight snapshot of the scroll pair.
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.current,
            target: self.target,
            is_scrolling: self.is_scrolling,
        }
    }

    /// Restores a previously captured snapshot, re-clamped against the
    /// current extent. Any glide is dropped.
    pub fn restore_scroll_state(&mut self, state: ScrollState, now_ms: u64) {
        self.batch_update(|s| {
            s.glide = None;
            s.set_current_clamped(state.offset);
            s.set_target_clamped(state.target);
            if state.is_scrolling {
                s.notify_scroll_event(now_ms);
            } else {
                s.set_is_scrolling(false);
            }
        });
    }

    fn set_current_clamped(&mut self, offset: f64) {
        let offset = self.extent.clamp_offset(offset);
        if self.current == offset {
            return;
        }
        let prev = self.current;
        self.current = offset;
        self.scroll_direction = match offset.partial_cmp(&prev) {
            Some(cmp::Ordering::Greater) => Some(ScrollDirection::Forward),
            Some(cmp::Ordering::Less) => Some(ScrollDirection::Backward),
            _ => self.scroll_direction,
        };
        self.notify();
    }

    fn set_target_clamped(&mut self, offset: f64) {
        let offset = self.extent.clamp_offset(offset);
        if self.target == offset {
            return;
        }
        self.target = offset;
        self.notify();
    }

    /// Requests a new target position (clamped). The interpolation loop
    /// eases toward it on subsequent ticks.
    pub fn request_target(&mut self, offset: f64) {
        if !self.options.enabled {
            return;
        }
        let Some(offset) = finite_or_warn(offset, "target") else {
            return;
        };
        self.set_target_clamped(offset);
    }

    /// Applies a wheel event.
    ///
    /// Vertical wheel deltas steer the horizontal target. An ancestor pane
    /// that can still scroll in the wheel direction wins instead
    /// (`PassThrough`), so nested panels keep native behavior. Any active
    /// glide is cancelled with `target` synced to `current`, preventing a
    /// jump when the user interrupts a programmatic scroll.
    pub fn wheel(&mut self, delta_y: f64, nested: &[NestedPane], now_ms: u64) -> InputOutcome {
        if !self.options.enabled {
            return InputOutcome::PassThrough;
        }
        let Some(delta) = finite_or_warn(delta_y, "wheel delta") else {
            return InputOutcome::PassThrough;
        };
        if nested_consumes(nested, delta) {
            strace!(delta, "wheel yields to nested pane");
            return InputOutcome::PassThrough;
        }

        self.batch_update(|s| {
            s.interrupt_glide();
            if delta != 0.0 {
                s.set_target_clamped(s.target + delta);
                s.notify_scroll_event(now_ms);
            }
        });

        if delta != 0.0 {
            strace!(delta, target = self.target, "wheel");
            InputOutcome::Consumed
        } else {
            InputOutcome::PassThrough
        }
    }

    /// Begins a touch drag. Cancels any glide so the first move does not
    /// fight an in-flight animation.
    pub fn touch_start(&mut self, x: f64, y: f64) {
        if !self.options.enabled {
            return;
        }
        if finite_or_warn(x, "touch x").is_none() || finite_or_warn(y, "touch y").is_none() {
            return;
        }
        self.batch_update(|s| s.interrupt_glide());
        self.touch.start(x, y);
    }

    /// Applies a touch move. Vertical-dominant drags steer the target;
    /// anything else stays native.
    pub fn touch_move(&mut self, x: f64, y: f64, now_ms: u64) -> InputOutcome {
        if !self.options.enabled {
            return InputOutcome::PassThrough;
        }
        if finite_or_warn(x, "touch x").is_none() || finite_or_warn(y, "touch y").is_none() {
            return InputOutcome::PassThrough;
        }
        let Some(delta) = self.touch.movement(x, y) else {
            return InputOutcome::PassThrough;
        };
        self.batch_update(|s| {
            s.set_target_clamped(s.target + delta);
            s.notify_scroll_event(now_ms);
        });
        strace!(delta, target = self.target, "touch move");
        InputOutcome::Consumed
    }

    pub fn touch_end(&mut self) {
        self.touch.end();
    }

    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    pub fn glide(&self) -> Option<GlideJob> {
        self.glide
    }

    fn interrupt_glide(&mut self) {
        if self.glide.take().is_some() {
            sdebug!(position = self.current, "glide interrupted");
            let cur = self.current;
            self.set_target_clamped(cur);
        }
    }

    /// Cancels an in-flight glide, leaving the surface where it is
    /// (`target` syncs to `current`).
    pub fn cancel_glide(&mut self) {
        self.batch_update(|s| s.interrupt_glide());
    }

    /// Jumps to `offset` synchronously (no animation). Returns the applied
    /// (clamped) offset.
    pub fn scroll_to_offset(&mut self, offset: f64) -> f64 {
        if !self.options.enabled {
            return self.current;
        }
        let Some(offset) = finite_or_warn(offset, "scroll_to offset") else {
            return self.current;
        };
        let applied = self.extent.clamp_offset(offset);
        self.batch_update(|s| {
            s.glide = None;
            s.set_current_clamped(applied);
            s.set_target_clamped(applied);
        });
        applied
    }

    /// Starts an eased glide to `offset` using the options' duration and
    /// easing. Returns the clamped destination.
    pub fn start_glide(&mut self, offset: f64, now_ms: u64) -> f64 {
        let duration = self.options.default_glide_ms;
        let easing = self.options.glide_easing;
        self.start_glide_to(offset, now_ms, duration, easing)
    }

    /// Starts an eased glide to `offset`. Only one glide may be active;
    /// a new one replaces any prior job, departing from `current`.
    pub fn start_glide_to(
        &mut self,
        offset: f64,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> f64 {
        if !self.options.enabled {
            return self.current;
        }
        let Some(offset) = finite_or_warn(offset, "glide offset") else {
            return self.current;
        };
        let to = self.extent.clamp_offset(offset);
        sdebug!(from = self.current, to, duration_ms, "glide start");
        self.glide = Some(GlideJob::new(self.current, to, now_ms, duration_ms, easing));
        self.notify();
        to
    }

    /// Advances the engine by one animation frame.
    ///
    /// With a glide active, `current` follows the job's easing curve; when
    /// the job completes it is cleared and `target` syncs to `current`.
    /// Otherwise `current` eases toward `target` by the configured factor.
    /// Either way at most one transition is applied per tick, and the
    /// returned whole-pixel offset is what the host writes to the surface.
    ///
    /// The host must call this continuously while the surface is mounted,
    /// regardless of input activity, and stop (dropping the scroller or
    /// simply ceasing to call) on unmount; the engine schedules no timers
    /// or frame requests of its own.
    pub fn tick(&mut self, now_ms: u64) -> u64 {
        if !self.options.enabled {
            return self.surface_offset();
        }

        if let Some(job) = self.glide {
            let sampled = job.sample(now_ms);
            self.batch_update(|s| {
                s.set_current_clamped(sampled);
                s.notify_scroll_event(now_ms);
                if job.is_done(now_ms) {
                    s.glide = None;
                    let cur = s.current;
                    s.set_target_clamped(cur);
                    s.set_is_scrolling(false);
                    sdebug!(position = cur, "glide complete");
                }
            });
        } else {
            let gap = self.target - self.current;
            if gap != 0.0 {
                let mut next = self.current + gap * self.options.ease;
                if (self.target - next).abs() < SNAP_EPSILON_PX {
                    next = self.target;
                }
                self.batch_update(|s| {
                    s.set_current_clamped(next);
                    s.notify_scroll_event(now_ms);
                });
            }
            self.update_scrolling(now_ms);
        }

        self.surface_offset()
    }
}
