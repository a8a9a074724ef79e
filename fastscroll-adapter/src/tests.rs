use crate::*;

use fastscroll::InputPolicy;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::vec::Vec;

#[derive(Debug, Default)]
struct FakeHost {
    viewport: u32,
    scroll_top: u64,
    track: Option<(u32, u64)>,
    next_id: u64,
    active: Vec<(ListenerId, ListenerTarget)>,
    added: usize,
    removed: usize,
    redraws: usize,
}

impl FakeHost {
    fn with_viewport(viewport: u32) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    fn active_on(&self, target: ListenerTarget) -> usize {
        self.active.iter().filter(|(_, t)| *t == target).count()
    }
}

impl ScrollHost for FakeHost {
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
        self.track = Some((viewport_height, filler_height));
    }

    fn add_listener(&mut self, target: ListenerTarget) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.active.push((id, target));
        self.added += 1;
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        let pos = self
            .active
            .iter()
            .position(|(active, _)| *active == id)
            .expect("listener removed twice or never added");
        self.active.remove(pos);
        self.removed += 1;
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }
}

// 10 groups of 20px, group 5 expanded with 10 elements of 10px: 300px of content.
fn options() -> FastScrollOptions {
    FastScrollOptions::new(10, 20).with_expanded(Some(5), 10, 10)
}

type Recorded = Arc<Mutex<Vec<Snapshot>>>;

fn recording_controller() -> (Controller<FakeHost>, Recorded) {
    let recorded: Recorded = Arc::default();
    let sink = Arc::clone(&recorded);
    let c = Controller::new(options()).with_listener(move |snapshot, _| {
        sink.lock().unwrap().push(*snapshot);
    });
    (c, recorded)
}

fn ready_controller() -> (Controller<FakeHost>, Recorded) {
    let (mut c, recorded) = recording_controller();
    c.mount(FakeHost::with_viewport(50));
    c.attach_container(true);
    (c, recorded)
}

fn host(c: &Controller<FakeHost>) -> &FakeHost {
    c.host().unwrap()
}

#[test]
fn mount_without_container_is_not_ready() {
    let (mut c, recorded) = recording_controller();
    c.mount(FakeHost::with_viewport(50));

    assert!(!c.is_ready());
    assert_eq!(host(&c).active_on(ListenerTarget::Scrollbar), 1);
    assert_eq!(host(&c).active_on(ListenerTarget::Container), 0);
    assert_eq!(host(&c).track, None);
    assert!(recorded.lock().unwrap().is_empty());
}

#[test]
fn attaching_container_measures_and_delivers() {
    let (c, recorded) = ready_controller();

    assert!(c.is_ready());
    assert_eq!(host(&c).track, Some((50, 300)));
    assert_eq!(c.fast_scroll().viewport_height(), 50);
    assert!(host(&c).redraws > 0);

    let recorded = recorded.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].group_range(), 0..2);
    assert_eq!(recorded[0].visible_upper_group_count, 2);
    assert_eq!(recorded[0].element_limit, 0);
}

#[test]
fn container_attached_before_mount_is_registered_on_mount() {
    let (mut c, recorded) = recording_controller();
    c.attach_container(true);
    assert!(!c.is_ready());
    assert!(recorded.lock().unwrap().is_empty());

    c.mount(FakeHost::with_viewport(50));
    assert!(c.is_ready());
    assert_eq!(host(&c).added, 2);
    assert_eq!(host(&c).track, Some((50, 300)));
    assert_eq!(recorded.lock().unwrap().len(), 1);
}

#[test]
fn wheel_moves_scrollbar_and_clamps() {
    let (mut c, _) = ready_controller();

    assert_eq!(c.on_wheel(40), 40);
    assert_eq!(host(&c).scroll_top, 40);
    assert_eq!(c.on_wheel(1000), 250);
    assert_eq!(host(&c).scroll_top, 250);
    assert_eq!(c.on_wheel(-5000), 0);
    assert_eq!(host(&c).scroll_top, 0);
}

#[test]
fn wheel_is_ignored_until_ready() {
    let (mut c, recorded) = recording_controller();
    c.mount(FakeHost::with_viewport(50));

    assert_eq!(c.on_wheel(40), 0);
    assert_eq!(host(&c).scroll_top, 0);
    assert!(recorded.lock().unwrap().is_empty());
}

#[test]
fn scrollbar_scroll_reads_host_position() {
    let (mut c, recorded) = ready_controller();
    c.host_mut().unwrap().scroll_top = 130;
    c.on_scrollbar_scroll();

    assert_eq!(c.fast_scroll().scroll_offset(), 130);
    let last = *recorded.lock().unwrap().last().unwrap();
    assert_eq!(last.element_range(), 1..6);
    assert_eq!(last.group_limit, 0);
}

#[test]
fn changes_resize_the_filler() {
    let (mut c, recorded) = ready_controller();
    c.on_changes([InputChange::ElementCount(20)]).unwrap();

    assert_eq!(host(&c).track, Some((50, 400)));
    assert_eq!(recorded.lock().unwrap().len(), 2);

    c.on_changes([InputChange::ExpandedGroup(None)]).unwrap();
    assert_eq!(host(&c).track, Some((50, 200)));
}

#[test]
fn changes_before_ready_are_applied_without_delivery() {
    let (mut c, recorded) = recording_controller();
    c.mount(FakeHost::with_viewport(50));
    c.on_changes([InputChange::GroupCount(3)]).unwrap();

    assert_eq!(c.fast_scroll().state().group_count, 3);
    assert_eq!(host(&c).track, None);
    assert!(recorded.lock().unwrap().is_empty());
}

#[test]
fn strict_changes_report_the_first_error() {
    let mut c: Controller<FakeHost> =
        Controller::new(options().with_input_policy(InputPolicy::Strict));
    c.mount(FakeHost::with_viewport(50));
    c.attach_container(true);

    let err = c
        .on_changes([InputChange::GroupCount(12), InputChange::ElementHeight(-1)])
        .unwrap_err();
    assert!(matches!(err, InputError::Negative { value: -1, .. }));
    assert_eq!(c.fast_scroll().state().group_count, 12);
    assert_eq!(host(&c).track, Some((50, 340)));
}

#[test]
fn resize_remeasures_viewport() {
    let (mut c, _) = ready_controller();
    c.host_mut().unwrap().viewport = 80;
    c.on_resize();

    assert_eq!(c.fast_scroll().viewport_height(), 80);
    assert_eq!(host(&c).track, Some((80, 300)));
}

#[test]
fn listener_events_are_queued_in_order_without_reentry() {
    let recorded: Recorded = Arc::default();
    let in_listener = Arc::new(AtomicBool::new(false));
    let mut c: Controller<FakeHost> = Controller::new(options());
    {
        let recorded = Arc::clone(&recorded);
        let in_listener = Arc::clone(&in_listener);
        c.set_listener(Some(move |snapshot: &Snapshot, sink: &mut EventSink| {
            assert!(!in_listener.swap(true, Ordering::SeqCst), "listener re-entered");
            let mut recorded = recorded.lock().unwrap();
            if recorded.is_empty() {
                sink.push(HostEvent::ScrollTo(130));
                sink.push(HostEvent::ScrollTo(250));
            }
            recorded.push(*snapshot);
            in_listener.store(false, Ordering::SeqCst);
        }));
    }

    c.mount(FakeHost::with_viewport(50));
    c.attach_container(true);

    let recorded = recorded.lock().unwrap();
    assert_eq!(recorded.len(), 3);
    assert_eq!(recorded[0].group_range(), 0..2);
    assert_eq!(recorded[1].element_range(), 1..6);
    assert_eq!(recorded[2].group_range(), 7..10);
    assert_eq!(recorded[2].visible_lower_group_count, 3);
    assert_eq!(c.fast_scroll().scroll_offset(), 250);
    assert_eq!(host(&c).scroll_top, 250);
    assert_eq!(c.pending_events(), 0);
}

#[test]
fn destroy_is_idempotent() {
    let mut c: Controller<FakeHost> = Controller::new(options());
    c.destroy();

    c.mount(FakeHost::with_viewport(50));
    c.attach_container(true);
    assert_eq!(host(&c).added, 2);

    c.destroy();
    c.destroy();
    assert_eq!(host(&c).removed, 2);
    assert!(host(&c).active.is_empty());

    let h = c.unmount().unwrap();
    assert_eq!(h.removed, 2);
    assert!(c.host().is_none());
    assert!(!c.is_ready());
}

#[test]
fn reattaching_container_replaces_the_wheel_listener() {
    let (mut c, _) = ready_controller();
    c.attach_container(true);

    assert_eq!(host(&c).added, 3);
    assert_eq!(host(&c).removed, 1);
    assert_eq!(host(&c).active_on(ListenerTarget::Container), 1);

    c.attach_container(false);
    assert!(!c.is_ready());
    assert_eq!(host(&c).active_on(ListenerTarget::Container), 0);
    assert_eq!(host(&c).removed, 2);

    c.destroy();
    assert_eq!(host(&c).removed, 3);
    assert!(host(&c).active.is_empty());
}

#[test]
fn remounting_tears_down_the_previous_host() {
    let (mut c, _) = ready_controller();
    c.mount(FakeHost::with_viewport(60));

    assert!(c.is_ready());
    assert_eq!(host(&c).added, 2);
    assert_eq!(host(&c).track, Some((60, 300)));
}

#[test]
fn listeners_teardown_before_attach_is_noop() {
    let mut host = FakeHost::default();
    let mut listeners = Listeners::new();
    listeners.teardown(&mut host);
    assert_eq!(host.removed, 0);

    let first = listeners.attach(&mut host, ListenerTarget::Scrollbar);
    let second = listeners.attach(&mut host, ListenerTarget::Scrollbar);
    assert_ne!(first, second);
    assert_eq!(listeners.get(ListenerTarget::Scrollbar), Some(second));
    assert_eq!(host.removed, 1);

    assert!(listeners.detach(&mut host, ListenerTarget::Scrollbar));
    assert!(!listeners.detach(&mut host, ListenerTarget::Scrollbar));
    assert_eq!(host.removed, 2);
}

#[test]
fn scroll_to_clamps_and_syncs_host() {
    let (mut c, _) = ready_controller();
    assert_eq!(c.scroll_to(10_000), 250);
    assert_eq!(host(&c).scroll_top, 250);
    assert_eq!(c.snapshot().group_range(), 7..10);
}
