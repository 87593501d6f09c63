use core::cell::Cell;

use crate::{Facing, FollowerOptions, FollowerPhase, FollowerState, FollowerVisual, ScrollView};

/// Walk-cycle frame for a scroll position.
///
/// The cycle advances one frame per `pixels_per_frame` of scroll and wraps at
/// `total_frames`. Facing left reverses the cycle (`(total - frame) % total`)
/// so the walk runs backward when moving backward.
pub fn walk_frame(offset: f64, facing: Facing, pixels_per_frame: f64, total_frames: f64) -> f64 {
    if pixels_per_frame <= 0.0 || total_frames <= 0.0 {
        return 0.0;
    }
    let frame = (offset / pixels_per_frame) % total_frames;
    match facing {
        Facing::Right => frame,
        Facing::Left => (total_frames - frame) % total_frames,
    }
}

/// Horizontal screen position for a scroll progress: a direct linear map of
/// progress onto the walkable span of the viewport.
pub fn screen_offset_x(progress: f64, viewport: f64, follower_size: f64, edge_padding: f64) -> f64 {
    progress * (viewport - follower_size - 2.0 * edge_padding)
}

/// A secondary animated character synchronized to the scroll stream.
///
/// The follower is a pure consumer: it observes [`ScrollView`] samples and
/// derives its walk frame, facing, and screen position from them. It never
/// writes back to the scroll state.
///
/// Lifecycle is a two-phase machine, `Landing -> Attached`. During `Landing`
/// a one-shot entry animation plays (owned by the renderer) and scroll
/// observations are ignored; [`Follower::complete_landing`] performs the
/// single allowed transition and fires `on_attached` exactly once.
#[derive(Clone, Debug)]
pub struct Follower {
    options: FollowerOptions,
    phase: FollowerPhase,
    facing: Facing,
    frame: f64,
    screen_offset_x: f64,
    progress: f64,
    last_offset: f64,
    is_walking: bool,
    last_walk_event_ms: Option<u64>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Follower {
    pub fn new(options: FollowerOptions) -> Self {
        let phase = if options.start_landing {
            FollowerPhase::Landing
        } else {
            FollowerPhase::Attached
        };
        sdebug!(landing = options.start_landing, "Follower::new");
        Self {
            phase,
            facing: Facing::Right,
            frame: 0.0,
            screen_offset_x: 0.0,
            progress: 0.0,
            last_offset: 0.0,
            is_walking: false,
            last_walk_event_ms: None,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &FollowerOptions {
        &self.options
    }

    pub fn phase(&self) -> FollowerPhase {
        self.phase
    }

    pub fn is_attached(&self) -> bool {
        self.phase == FollowerPhase::Attached
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn frame(&self) -> f64 {
        self.frame
    }

    pub fn screen_offset_x(&self) -> f64 {
        self.screen_offset_x
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_walking(&self) -> bool {
        self.is_walking
    }

    pub fn visual(&self) -> FollowerVisual {
        match self.phase {
            FollowerPhase::Landing => FollowerVisual::Landing,
            FollowerPhase::Attached => {
                if self.is_walking {
                    FollowerVisual::Walking
                } else {
                    FollowerVisual::Idle
                }
            }
        }
    }

    /// Returns a lightweight snapshot of the derived state.
    pub fn state(&self) -> FollowerState {
        FollowerState {
            phase: self.phase,
            facing: self.facing,
            frame: self.frame,
            screen_offset_x: self.screen_offset_x,
            progress: self.progress,
            visual: self.visual(),
        }
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
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

    /// Signals that the landing animation finished.
    ///
    /// Transitions `Landing -> Attached` and fires `on_attached`, exactly
    /// once; repeated completion signals are no-ops.
    pub fn complete_landing(&mut self) {
        if self.phase == FollowerPhase::Attached {
            strace!("landing completion repeated; ignored");
            return;
        }
        sdebug!("landing complete");
        self.phase = FollowerPhase::Attached;
        if let Some(cb) = &self.options.on_attached {
            cb();
        }
        self.notify();
    }

    /// Derives state from an initial sample without entering the walking
    /// visual: the attach-time equivalent of a scroll event that nobody
    /// caused.
    pub fn prime(&mut self, view: ScrollView) {
        if self.phase == FollowerPhase::Landing {
            return;
        }
        self.batch_update(|f| f.derive(view));
    }

    /// Consumes one scroll sample. Call when the surface offset changed.
    ///
    /// Ignored during `Landing`. Otherwise recomputes facing, walk frame,
    /// screen offset, and progress, and (re)starts the walking debounce
    /// window.
    pub fn observe(&mut self, view: ScrollView, now_ms: u64) {
        if self.phase == FollowerPhase::Landing {
            return;
        }
        self.batch_update(|f| {
            f.derive(view);
            f.last_walk_event_ms = Some(now_ms);
            f.set_is_walking(true);
        });
    }

    /// Reverts walking to idle once the debounce window has elapsed with no
    /// further movement. Call once per frame.
    pub fn update_walking(&mut self, now_ms: u64) {
        if !self.is_walking {
            return;
        }
        let Some(last) = self.last_walk_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.walk_reset_delay_ms {
            self.set_is_walking(false);
        }
    }

    fn set_is_walking(&mut self, is_walking: bool) {
        if self.is_walking == is_walking {
            return;
        }
        self.is_walking = is_walking;
        if !is_walking {
            self.last_walk_event_ms = None;
        }
        self.notify();
    }

    fn derive(&mut self, view: ScrollView) {
        let delta = view.offset - self.last_offset;
        if delta.abs() > self.options.facing_threshold_px {
            let facing = if delta > 0.0 {
                Facing::Right
            } else {
                Facing::Left
            };
            if self.facing != facing {
                self.facing = facing;
                self.notify();
            }
        }
        self.last_offset = view.offset;

        let frame = walk_frame(
            view.offset,
            self.facing,
            self.options.pixels_per_frame,
            self.options.total_frames,
        );
        if self.frame != frame {
            self.frame = frame;
            self.notify();
        }

        let progress = view.progress();
        if self.progress != progress {
            self.progress = progress;
            self.notify();
        }

        let offset_x = screen_offset_x(
            progress,
            view.viewport,
            self.options.follower_size,
            self.options.edge_padding,
        );
        if self.screen_offset_x != offset_x {
            self.screen_offset_x = offset_x;
            self.notify();
        }
    }
}
