use tilepager::PagerOptions;
use tilepager_adapter::Controller;

fn main() {
    // Example: a scripted flick driving the pager without any UI objects.
    //
    // An adapter would:
    // - forward pointer events as they arrive
    // - call tick(now_ms) in a frame loop while is_animating()
    // - render tiles at visual_offset(now_ms) instead of the settled offset
    let mut c = Controller::new(PagerOptions::new(5, 300.0, 100.0, 10.0).with_carousel(true));
    println!("start page={} offset={}", c.pager().page(), c.pager().scroll_offset());

    c.pointer_down(220.0, 0);
    for (pos, now_ms) in [(210.0, 16), (195.0, 32), (180.0, 48)] {
        c.pointer_move(pos, now_ms);
        println!("drag t={now_ms} offset={}", c.pager().scroll_offset());
    }

    if let Some(snap) = c.pointer_up(48) {
        println!("released: snap={snap:?} page={}", c.pager().page());
    }

    let mut now_ms = 48u64;
    while c.is_animating() {
        now_ms += 16;
        if let Some(off) = c.tick(now_ms) {
            println!("t={now_ms} visual={off}");
        }
    }

    println!(
        "done: page={} offset={}",
        c.pager().page(),
        c.pager().scroll_offset()
    );
}
