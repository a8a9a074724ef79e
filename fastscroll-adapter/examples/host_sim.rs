use fastscroll_adapter::{
    Controller, FastScrollOptions, HostEvent, ListenerId, ListenerTarget, ScrollHost,
};

// Example: a simulated host (no UI) showing the listener lifecycle and follow-up events.
#[derive(Default)]
struct SimHost {
    viewport: u32,
    scroll_top: u64,
    next_id: u64,
}

impl ScrollHost for SimHost {
    fn measure_viewport(&self) -> u32 {
        self.viewport
    }

    fn scroll_top(&self) -> u64 {
        self.scroll_top
    }

    fn set_scroll_top(&mut self, offset: u64) {
        self.scroll_top = offset;
    }

    fn resize_track(&mut self, viewport_height: u32, filler_height: u64) {
        println!("track: height={viewport_height} filler={filler_height}");
    }

    fn add_listener(&mut self, target: ListenerTarget) -> ListenerId {
        self.next_id += 1;
        println!("add listener #{} on {target:?}", self.next_id);
        ListenerId(self.next_id)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        println!("remove listener #{}", id.0);
    }
}

fn main() {
    let opts = FastScrollOptions::new(200, 20).with_expanded(Some(3), 40, 16);
    let mut jumped = false;
    let mut c = Controller::new(opts).with_listener(move |s, sink| {
        println!("snapshot groups={:?} elements={:?}", s.group_range(), s.element_range());
        // Jump to the end once, after the first delivery has been rendered.
        if !jumped {
            jumped = true;
            sink.push(HostEvent::ScrollTo(u64::MAX));
        }
    });

    c.mount(SimHost {
        viewport: 300,
        ..SimHost::default()
    });
    c.attach_container(true);

    for delta in [-120, -120, -4_000] {
        let off = c.on_wheel(delta);
        println!("wheel {delta} -> {off}");
    }

    c.destroy();
    c.destroy();
}
