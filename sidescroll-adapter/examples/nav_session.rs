use sidescroll::{Extent, FollowerOptions, ScrollerOptions};
use sidescroll_adapter::Controller;

fn main() {
    // Example: section navigation driving a cinematic glide, follower in tow.
    //
    // A host would:
    // - register each section's offset once the layout is known
    // - forward navigation requests from its nav UI to navigate()
    // - call tick(now_ms) in a frame loop and write the offset to the surface
    let mut c = Controller::new(
        ScrollerOptions::new().with_initial_extent(Some(Extent::new(8000.0, 1000.0))),
        FollowerOptions::new(),
    );
    let sections = [
        "hero", "services", "work", "gallery", "clients", "about", "team", "contact",
    ];
    for (i, id) in sections.iter().enumerate() {
        c.register_section(*id, i as f64 * 1000.0);
    }

    // The landing sequence gates the follower; the renderer signals its end.
    c.complete_landing();

    c.navigate("work", 0);
    let mut now_ms = 0u64;
    while c.scroller().is_gliding() {
        now_ms += 16;
        let off = c.tick(now_ms);
        if now_ms.is_multiple_of(160) {
            println!(
                "t={now_ms} off={off} progress={}% mascot={:?}",
                c.progress_percent(),
                c.follower().visual()
            );
        }
    }

    println!(
        "done: section={:?} off={}",
        c.active_section(),
        c.scroller().surface_offset()
    );
}
