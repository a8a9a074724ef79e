use alloc::boxed::Box;
use alloc::collections::VecDeque;
use core::fmt;

use fastscroll::{FastScroll, FastScrollOptions, InputChange, InputError, Snapshot};

use crate::{EventSink, HostEvent, ListenerTarget, Listeners, ScrollHost};

/// Receives every snapshot the controller delivers.
///
/// Follow-up events pushed into the [`EventSink`] are handled after the current delivery
/// returns, in push order.
pub type SnapshotListener = Box<dyn FnMut(&Snapshot, &mut EventSink) + Send>;

/// A framework-neutral controller that binds a [`FastScroll`] engine to a [`ScrollHost`].
///
/// Lifecycle:
/// - `mount(host)` registers the scrollbar listener.
/// - `attach_container(true)` registers the container (wheel) listener; once both are present
///   the controller is ready and starts measuring, sizing the track and delivering snapshots.
/// - `destroy()` unregisters everything; it is idempotent and a no-op before `mount`.
///
/// Adapters forward UI events through `on_scrollbar_scroll`, `on_wheel`, `on_resize` and
/// `on_changes`. Each handled event delivers one snapshot to the listener.
pub struct Controller<H> {
    fs: FastScroll,
    host: Option<H>,
    listeners: Listeners,
    container_attached: bool,
    on_snapshot: Option<SnapshotListener>,
    queue: VecDeque<HostEvent>,
    draining: bool,
}

impl<H: ScrollHost> Controller<H> {
    pub fn new(options: FastScrollOptions) -> Self {
        Self::from_fast_scroll(FastScroll::new(options))
    }

    pub fn from_fast_scroll(fs: FastScroll) -> Self {
        Self {
            fs,
            host: None,
            listeners: Listeners::new(),
            container_attached: false,
            on_snapshot: None,
            queue: VecDeque::new(),
            draining: false,
        }
    }

    pub fn with_listener(
        mut self,
        listener: impl FnMut(&Snapshot, &mut EventSink) + Send + 'static,
    ) -> Self {
        self.on_snapshot = Some(Box::new(listener));
        self
    }

    pub fn set_listener(
        &mut self,
        listener: Option<impl FnMut(&Snapshot, &mut EventSink) + Send + 'static>,
    ) {
        self.on_snapshot = listener.map(|f| Box::new(f) as _);
    }

    pub fn fast_scroll(&self) -> &FastScroll {
        &self.fs
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    pub fn snapshot(&self) -> Snapshot {
        self.fs.snapshot()
    }

    /// Whether the host is mounted and a container is attached.
    pub fn is_ready(&self) -> bool {
        self.host.is_some() && self.container_attached
    }

    /// Takes ownership of the host, registers listeners and, if ready, performs the first
    /// measurement and delivery.
    pub fn mount(&mut self, host: H) {
        if self.host.is_some() {
            self.destroy();
        }
        let host = self.host.insert(host);
        self.listeners.attach(host, ListenerTarget::Scrollbar);
        if self.container_attached {
            self.listeners.attach(host, ListenerTarget::Container);
        }
        adebug!(ready = self.is_ready(), "Controller::mount");
        if self.is_ready() {
            self.remeasure();
            self.deliver();
        }
        self.pump();
    }

    /// Unregisters every listener. Safe to call repeatedly or before `mount`.
    pub fn destroy(&mut self) {
        if let Some(host) = self.host.as_mut() {
            self.listeners.teardown(host);
        }
        self.queue.clear();
    }

    /// Tears down and hands the host back.
    pub fn unmount(&mut self) -> Option<H> {
        self.destroy();
        self.host.take()
    }

    pub fn attach_container(&mut self, attached: bool) {
        self.dispatch(HostEvent::Container(attached));
    }

    pub fn on_scrollbar_scroll(&mut self) {
        self.dispatch(HostEvent::ScrollbarScroll);
    }

    /// Applies a wheel gesture: moves the scrollbar by `delta_y` and resolves.
    ///
    /// Returns the applied (clamped) offset. The host should suppress the wheel event's default
    /// action.
    pub fn on_wheel(&mut self, delta_y: i64) -> u64 {
        self.dispatch(HostEvent::Wheel { delta_y });
        self.fs.scroll_offset()
    }

    pub fn on_resize(&mut self) {
        self.dispatch(HostEvent::Resize);
    }

    /// Programmatically scrolls to `offset` (clamped). Returns the applied offset.
    pub fn scroll_to(&mut self, offset: u64) -> u64 {
        self.dispatch(HostEvent::ScrollTo(offset));
        self.fs.scroll_offset()
    }

    /// Applies new geometry inputs from the host's bindings.
    ///
    /// Under a strict input policy the first invalid value is returned; earlier values in the
    /// same call stay applied.
    pub fn on_changes(
        &mut self,
        changes: impl IntoIterator<Item = InputChange>,
    ) -> Result<(), InputError> {
        let result = self.handle(HostEvent::Changes(changes.into_iter().collect()));
        self.pump();
        result
    }

    fn dispatch(&mut self, event: HostEvent) {
        if let Err(_err) = self.handle(event) {
            awarn!(err = %_err, "host event rejected");
        }
        self.pump();
    }

    fn pump(&mut self) {
        if self.draining {
            return;
        }
        self.draining = true;
        while let Some(event) = self.queue.pop_front() {
            atrace!(?event, pending = self.queue.len(), "handling queued event");
            if let Err(_err) = self.handle(event) {
                awarn!(err = %_err, "queued event rejected");
            }
        }
        self.draining = false;
    }

    fn handle(&mut self, event: HostEvent) -> Result<(), InputError> {
        match event {
            HostEvent::Changes(changes) => {
                let result = self.fs.apply_changes(changes);
                if self.is_ready() {
                    self.remeasure();
                    self.deliver();
                }
                self.redraw();
                result
            }
            HostEvent::ScrollbarScroll => {
                let Some(offset) = self.host.as_ref().map(H::scroll_top) else {
                    return Ok(());
                };
                self.fs.set_scroll_offset(offset);
                self.deliver();
                Ok(())
            }
            HostEvent::Wheel { delta_y } => {
                if !self.is_ready() {
                    return Ok(());
                }
                let Some(host) = self.host.as_mut() else {
                    return Ok(());
                };
                let from = host.scroll_top();
                let mut to = from;
                self.fs.batch_update(|fs| {
                    fs.set_scroll_offset_clamped(from);
                    to = fs.scroll_by(delta_y);
                });
                host.set_scroll_top(to);
                atrace!(delta_y, from, to, "wheel");
                self.deliver();
                Ok(())
            }
            HostEvent::Resize => {
                if self.is_ready() {
                    self.remeasure();
                    self.deliver();
                }
                Ok(())
            }
            HostEvent::Container(attached) => {
                self.container_attached = attached;
                if let Some(host) = self.host.as_mut() {
                    self.listeners.detach(host, ListenerTarget::Container);
                    if attached {
                        self.listeners.attach(host, ListenerTarget::Container);
                    }
                }
                if self.is_ready() {
                    self.remeasure();
                    self.deliver();
                }
                self.redraw();
                Ok(())
            }
            HostEvent::ScrollTo(offset) => {
                self.fs.set_scroll_offset_clamped(offset);
                let applied = self.fs.scroll_offset();
                if let Some(host) = self.host.as_mut() {
                    host.set_scroll_top(applied);
                }
                self.deliver();
                Ok(())
            }
        }
    }

    /// Re-measures the viewport and resizes the scrollbar track and filler.
    fn remeasure(&mut self) {
        let Some(host) = self.host.as_mut() else {
            return;
        };
        let viewport_height = host.measure_viewport();
        self.fs.set_viewport_height(viewport_height);
        host.resize_track(self.fs.viewport_height(), self.fs.track_height());
    }

    fn deliver(&mut self) {
        let snapshot = self.fs.snapshot();
        let mut sink = EventSink::default();
        if let Some(listener) = self.on_snapshot.as_mut() {
            listener(&snapshot, &mut sink);
        }
        if !sink.is_empty() {
            atrace!(queued = sink.len(), "listener queued follow-up events");
            sink.drain_into(&mut self.queue);
        }
        self.redraw();
    }

    fn redraw(&mut self) {
        if let Some(host) = self.host.as_mut() {
            host.request_redraw();
        }
    }

    /// Number of follow-up events waiting to be handled.
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }
}

impl<H: fmt::Debug> fmt::Debug for Controller<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("fs", &self.fs)
            .field("host", &self.host)
            .field("listeners", &self.listeners)
            .field("container_attached", &self.container_attached)
            .field("queue", &self.queue)
            .finish_non_exhaustive()
    }
}
