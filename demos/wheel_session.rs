// Example: a simulated wheel session driving the smooth scroller.
use sidescroll::{Extent, Scroller, ScrollerOptions};

fn main() {
    // A host would:
    // - forward wheel/touch events as they arrive
    // - call tick(now_ms) in a frame loop / timer
    // - write the returned offset to the real scroll surface
    let mut s = Scroller::new(
        ScrollerOptions::new().with_initial_extent(Some(Extent::new(4000.0, 1000.0))),
    );

    // Three wheel notches, then let the lerp settle.
    let mut now_ms = 0u64;
    for _ in 0..3 {
        now_ms += 16;
        s.wheel(120.0, &[], now_ms);
        s.tick(now_ms);
    }

    while s.position() != s.target() {
        now_ms += 16;
        let off = s.tick(now_ms);
        if now_ms.is_multiple_of(80) {
            println!("t={now_ms} off={off} target={}", s.target());
        }
    }

    println!("settled: off={} at t={now_ms}", s.surface_offset());
}
