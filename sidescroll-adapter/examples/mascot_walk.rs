use sidescroll::{Extent, FollowerOptions, ScrollerOptions};
use sidescroll_adapter::Controller;

fn main() {
    // Example: the follower deriving its walk cycle from a vertical drag.
    let mut c = Controller::new(
        ScrollerOptions::new().with_initial_extent(Some(Extent::new(4000.0, 1000.0))),
        FollowerOptions::new().with_start_landing(false),
    );

    c.touch_start(500.0, 800.0);
    let mut now_ms = 0u64;
    for step in 1..=20u64 {
        now_ms += 16;
        c.touch_move(500.0, 800.0 - step as f64 * 30.0, now_ms);
        c.tick(now_ms);
        if step.is_multiple_of(5) {
            let f = c.follower();
            println!(
                "t={now_ms} frame={:.1} facing={:?} x={:.1} visual={:?}",
                f.frame(),
                f.facing(),
                f.screen_offset_x(),
                f.visual()
            );
        }
    }
    c.touch_end();

    // No more input: the lerp settles and the walk debounce lapses.
    for _ in 0..30 {
        now_ms += 16;
        c.tick(now_ms);
    }
    println!(
        "idle again: off={} visual={:?}",
        c.scroller().surface_offset(),
        c.follower().visual()
    );
}
