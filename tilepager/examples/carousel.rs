// Example: carousel wraparound across the buffer regions.
use tilepager::{Pager, PagerOptions};

fn main() {
    let mut p = Pager::new(PagerOptions::new(3, 300.0, 100.0, 10.0).with_carousel(true));
    println!(
        "slots={} buffer={} start slot={} page={}",
        p.slot_count(),
        p.buffer(),
        p.selected_slot(),
        p.page()
    );

    // The padded row: buffer slots alias the opposite boundary.
    p.for_each_tile(|t| println!("slot={} shows page {}", t.slot, t.page));

    // Going "previous" from the first page silently jumps across the row.
    for _ in 0..4 {
        let snap = p.previous_page();
        println!(
            "previous -> slot={} page={} animated={}",
            p.selected_slot(),
            p.page(),
            snap.animated
        );
    }

    p.for_each_indicator(|i| println!("indicator page={} active={}", i.page, i.active));
}
