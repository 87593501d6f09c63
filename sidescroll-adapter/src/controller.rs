use alloc::string::String;

use sidescroll::{
    EngineState, Extent, Follower, FollowerOptions, InputOutcome, NestedPane, ScrollView, Scroller,
    ScrollerOptions,
};

use crate::SectionMap;

/// Glide duration for section navigation. Longer than the engine default so
/// section jumps read as deliberate, cinematic moves.
const NAV_GLIDE_MS: u64 = 1500;

/// A framework-neutral controller that wires a `sidescroll::Scroller` to a
/// follower and a named-section registry.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `wheel` / `touch_*` when input events occur
/// - `navigate` when a navigation affordance fires
/// - `tick(now_ms)` each frame, writing the returned offset to the real
///   scroll surface
///
/// The follower observes the surface through the controller: it is fed a new
/// sample only when the written whole-pixel offset actually changed, the same
/// contract a DOM scroll event gives its listeners.
#[derive(Clone, Debug)]
pub struct Controller {
    scroller: Scroller,
    follower: Follower,
    sections: SectionMap,
    nav_glide_ms: u64,
    last_surface: u64,
}

impl Controller {
    pub fn new(scroller_options: ScrollerOptions, follower_options: FollowerOptions) -> Self {
        let scroller = Scroller::new(scroller_options);
        let mut follower = Follower::new(follower_options);
        let last_surface = scroller.surface_offset();
        // Without a landing sequence the follower syncs to the surface
        // right away.
        if follower.is_attached() {
            follower.prime(surface_view(&scroller, last_surface));
        }
        Self {
            scroller,
            follower,
            sections: SectionMap::new(),
            nav_glide_ms: NAV_GLIDE_MS,
            last_surface,
        }
    }

    pub fn scroller(&self) -> &Scroller {
        &self.scroller
    }

    pub fn scroller_mut(&mut self) -> &mut Scroller {
        &mut self.scroller
    }

    pub fn follower(&self) -> &Follower {
        &self.follower
    }

    pub fn follower_mut(&mut self) -> &mut Follower {
        &mut self.follower
    }

    pub fn sections(&self) -> &SectionMap {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut SectionMap {
        &mut self.sections
    }

    pub fn with_nav_glide_ms(mut self, nav_glide_ms: u64) -> Self {
        self.nav_glide_ms = nav_glide_ms;
        self
    }

    pub fn register_section(&mut self, id: impl Into<String>, offset: f64) {
        self.sections.register(id, offset);
    }

    pub fn set_extent(&mut self, extent: Extent) {
        self.scroller.set_extent(extent);
    }

    pub fn wheel(&mut self, delta_y: f64, nested: &[NestedPane], now_ms: u64) -> InputOutcome {
        self.scroller.wheel(delta_y, nested, now_ms)
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.scroller.touch_start(x, y);
    }

    pub fn touch_move(&mut self, x: f64, y: f64, now_ms: u64) -> InputOutcome {
        self.scroller.touch_move(x, y, now_ms)
    }

    pub fn touch_end(&mut self) {
        self.scroller.touch_end();
    }

    /// Requests navigation to a named section.
    ///
    /// Unknown ids are a logged no-op returning `false`; a missed scroll
    /// beats a crash in presentation code.
    pub fn navigate(&mut self, section_id: &str, now_ms: u64) -> bool {
        let Some(offset) = self.sections.resolve(section_id) else {
            swarn!(section_id, "navigate: unknown section");
            return false;
        };
        let easing = self.scroller.options().glide_easing;
        let nav_glide_ms = self.nav_glide_ms;
        sdebug!(section_id, offset, "navigate");
        self.scroller.start_glide_to(offset, now_ms, nav_glide_ms, easing);
        true
    }

    /// Jumps to a named section with no animation. Unknown ids are a logged
    /// no-op returning `false`.
    pub fn jump_to_section(&mut self, section_id: &str) -> bool {
        let Some(offset) = self.sections.resolve(section_id) else {
            swarn!(section_id, "jump: unknown section");
            return false;
        };
        self.scroller.scroll_to_offset(offset);
        true
    }

    /// Forwards the landing-completion signal and primes the follower with
    /// the current surface position. Idempotent.
    pub fn complete_landing(&mut self) {
        self.follower.complete_landing();
        let view = surface_view(&self.scroller, self.last_surface);
        self.follower.prime(view);
    }

    pub fn is_attached(&self) -> bool {
        self.follower.is_attached()
    }

    /// Advances engine and follower by one frame; returns the whole-pixel
    /// offset to write to the surface.
    pub fn tick(&mut self, now_ms: u64) -> u64 {
        let offset = self.scroller.tick(now_ms);
        if offset != self.last_surface {
            self.last_surface = offset;
            self.follower
                .observe(surface_view(&self.scroller, offset), now_ms);
        }
        self.follower.update_walking(now_ms);
        offset
    }

    pub fn progress(&self) -> f64 {
        self.scroller.progress()
    }

    /// Whole-percent progress for HUD display.
    pub fn progress_percent(&self) -> u32 {
        (self.scroller.progress() * 100.0 + 0.5) as u32
    }

    /// Index of the section currently nearest the viewport.
    pub fn active_section(&self) -> Option<usize> {
        let width = self.scroller.extent().viewport;
        self.sections
            .active_index(self.scroller.position(), width)
    }

    /// Returns a combined snapshot of scroll + follower state.
    pub fn engine_state(&self) -> EngineState {
        EngineState {
            scroll: self.scroller.scroll_state(),
            follower: self.follower.state(),
        }
    }
}

fn surface_view(scroller: &Scroller, surface_offset: u64) -> ScrollView {
    ScrollView {
        offset: surface_offset as f64,
        max_scroll: scroller.max_scroll(),
        viewport: scroller.extent().viewport,
    }
}
