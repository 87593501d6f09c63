use crate::*;

use sidescroll::{
    Extent, Facing, FollowerOptions, FollowerVisual, InputOutcome, ScrollerOptions, walk_frame,
};

fn controller() -> Controller {
    Controller::new(
        ScrollerOptions::new().with_initial_extent(Some(Extent::new(4000.0, 1000.0))),
        FollowerOptions::new().with_start_landing(false),
    )
}

fn landing_controller() -> Controller {
    Controller::new(
        ScrollerOptions::new().with_initial_extent(Some(Extent::new(4000.0, 1000.0))),
        FollowerOptions::new(),
    )
}

#[test]
fn section_map_registers_resolves_and_updates_in_order() {
    let mut m = SectionMap::new();
    assert!(m.is_empty());
    assert_eq!(m.active_index(0.0, 1000.0), None);

    m.register("hero", 0.0);
    m.register("work", 900.0);
    m.register("work", 1200.0); // re-register updates in place
    assert_eq!(m.len(), 2);
    assert_eq!(m.resolve("work"), Some(1200.0));
    assert_eq!(m.resolve("missing"), None);
    assert_eq!(m.get(1).map(|s| s.id.as_str()), Some("work"));
}

#[test]
fn active_section_rounds_to_the_nearest_section() {
    let mut m = SectionMap::new();
    for (i, id) in ["hero", "services", "work", "contact"].iter().enumerate() {
        m.register(*id, i as f64 * 1000.0);
    }

    assert_eq!(m.active_index(0.0, 1000.0), Some(0));
    assert_eq!(m.active_index(1400.0, 1000.0), Some(1));
    assert_eq!(m.active_index(1600.0, 1000.0), Some(2));
    // Offsets past the last section clamp to it.
    assert_eq!(m.active_index(99_000.0, 1000.0), Some(3));
    assert_eq!(m.active_id(2100.0, 1000.0), Some("work"));

    assert_eq!(m.active_index(500.0, 0.0), None);
}

#[test]
fn navigation_glides_to_a_registered_section() {
    let mut c = controller();
    c.register_section("hero", 0.0);
    c.register_section("work", 1200.0);

    assert!(c.navigate("work", 0));
    assert!(c.scroller().is_gliding());

    let mut last = 0u64;
    for now_ms in [0u64, 100, 400, 800, 1200, 1500, 1600] {
        let off = c.tick(now_ms);
        assert!(off >= last);
        last = off;
    }
    assert_eq!(last, 1200);
    assert!(!c.scroller().is_gliding());
    assert_eq!(c.scroller().target(), 1200.0);
}

#[test]
fn unknown_sections_are_a_silent_no_op() {
    let mut c = controller();
    c.register_section("hero", 0.0);

    assert!(!c.navigate("gallery", 0));
    assert!(!c.scroller().is_gliding());
    assert_eq!(c.scroller().position(), 0.0);

    assert!(!c.jump_to_section("gallery"));
    assert_eq!(c.scroller().position(), 0.0);

    assert!(c.jump_to_section("hero"));
}

#[test]
fn wheel_interrupts_navigation_without_a_jump() {
    let mut c = controller();
    c.register_section("work", 1200.0);
    c.navigate("work", 0);
    c.tick(400);
    let at = c.scroller().position();
    assert!(at > 0.0);

    assert_eq!(c.wheel(50.0, &[], 410), InputOutcome::Consumed);
    assert!(!c.scroller().is_gliding());
    assert_eq!(c.scroller().target(), at + 50.0);
    assert_eq!(c.scroller().position(), at);
}

#[test]
fn follower_attaches_after_landing_and_walks_with_the_scroll() {
    let mut c = landing_controller();
    c.register_section("work", 1200.0);
    c.navigate("work", 0);
    c.tick(100);

    // Still landing: the scroll stream is ignored.
    assert_eq!(c.follower().visual(), FollowerVisual::Landing);
    assert_eq!(c.follower().frame(), 0.0);

    c.complete_landing();
    assert!(c.is_attached());
    // Priming picked up the in-flight surface position without walking.
    assert!(c.follower().progress() > 0.0);
    assert_eq!(c.follower().visual(), FollowerVisual::Idle);

    c.tick(200);
    assert_eq!(c.follower().visual(), FollowerVisual::Walking);
    assert_eq!(c.follower().facing(), Facing::Right);

    // Glide finishes; with no further movement the walk debounce lapses.
    c.tick(1500);
    c.tick(1600);
    assert_eq!(c.follower().visual(), FollowerVisual::Idle);
    assert_eq!(c.follower().progress(), 0.4);
}

#[test]
fn follower_faces_backward_and_reverses_the_walk_cycle() {
    let mut c = controller();
    c.scroller_mut().scroll_to_offset(2000.0);
    c.tick(0);
    assert_eq!(c.follower().facing(), Facing::Right);

    c.wheel(-500.0, &[], 10);
    c.tick(26);
    assert_eq!(c.follower().facing(), Facing::Left);

    let surface = c.scroller().surface_offset() as f64;
    assert_eq!(
        c.follower().frame(),
        walk_frame(surface, Facing::Left, 15.0, 60.0)
    );
}

#[test]
fn progress_reporting_matches_the_scroll_position() {
    let mut c = controller();
    for (i, id) in ["hero", "services", "work", "contact"].iter().enumerate() {
        c.register_section(*id, i as f64 * 1000.0);
    }

    c.scroller_mut().scroll_to_offset(1500.0);
    assert_eq!(c.progress(), 0.5);
    assert_eq!(c.progress_percent(), 50);
    assert_eq!(c.active_section(), Some(2));

    c.scroller_mut().scroll_to_offset(3000.0);
    assert_eq!(c.progress_percent(), 100);
    assert_eq!(c.active_section(), Some(3));
}

#[test]
fn nav_glide_duration_is_tunable() {
    let mut c = controller().with_nav_glide_ms(200);
    c.register_section("work", 1200.0);
    c.navigate("work", 0);

    c.tick(100);
    assert!(c.scroller().is_gliding());
    c.tick(200);
    assert!(!c.scroller().is_gliding());
    assert_eq!(c.scroller().position(), 1200.0);
}

#[test]
fn controller_touch_drag_moves_surface_and_follower() {
    let mut c = controller();
    c.touch_start(500.0, 800.0);
    assert_eq!(c.touch_move(500.0, 500.0, 0), InputOutcome::Consumed);
    assert_eq!(c.scroller().target(), 300.0);

    c.tick(16);
    assert_eq!(c.follower().visual(), FollowerVisual::Walking);
    c.touch_end();
}

#[test]
fn extent_resize_flows_through_the_controller() {
    let mut c = controller();
    c.scroller_mut().scroll_to_offset(3000.0);
    c.set_extent(Extent::new(2000.0, 1000.0));
    assert_eq!(c.scroller().position(), 1000.0);
    assert_eq!(c.progress_percent(), 100);
}

#[test]
fn engine_state_snapshot_combines_scroll_and_follower() {
    let mut c = controller();
    c.scroller_mut().scroll_to_offset(750.0);
    c.tick(0);

    let state = c.engine_state();
    assert_eq!(state.scroll.offset, 750.0);
    assert_eq!(state.scroll.target, 750.0);
    assert_eq!(state.follower.progress, 0.25);
    assert_eq!(state.follower.visual, FollowerVisual::Walking);
}
