// Example: a grouped list with one expanded group, scrolled top to bottom.
use fastscroll::{FastScroll, FastScrollOptions, InputChange, Snapshot};

fn main() {
    let opts = FastScrollOptions::new(10_000, 24)
        .with_expanded(Some(42), 500, 18)
        .with_initial_viewport_height(480)
        .with_on_change(Some(|fs: &FastScroll, s: &Snapshot| {
            println!(
                "offset={:>7} region={:?} groups={:?} elements={:?}",
                fs.scroll_offset(),
                fs.region(),
                s.group_range(),
                s.element_range()
            );
        }));
    let mut fs = FastScroll::new(opts);
    println!("track_height={}", fs.track_height());

    let run_start = fs.layout().element_run_start();
    for offset in [0, run_start - 100, run_start + 4_000, fs.max_scroll_offset()] {
        fs.set_scroll_offset_clamped(offset);
    }

    // Collapse and shrink the list in a single resolution.
    fs.apply_changes([InputChange::ExpandedGroup(None), InputChange::GroupCount(15)])
        .expect("lenient input never fails");
    println!("after collapse: track_height={}", fs.track_height());
}
