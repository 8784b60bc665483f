// Example: minimal usage — layout queries, an indicator tap, a fling.
use tilepager::{Pager, PagerOptions};

fn main() {
    let mut p = Pager::new(PagerOptions::new(5, 300.0, 100.0, 10.0));
    println!(
        "leading_offset={} stride={} offset={}",
        p.layout().leading_offset(),
        p.layout().stride(),
        p.scroll_offset()
    );

    let snap = p.select_page(2);
    println!("tap page 2: snap={snap:?} page={}", p.page());

    p.drag_changed(-40.0);
    let snap = p.drag_ended(-40.0, -130.0);
    println!("fling: snap={snap:?} page={}", p.page());

    p.for_each_tile(|t| println!("slot={} page={} x={}", t.slot, t.page, t.x));
}
