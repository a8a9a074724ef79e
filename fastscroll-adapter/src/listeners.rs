use crate::{ListenerId, ListenerTarget, ScrollHost};

/// Bookkeeping for the scrollbar and container listener registrations.
///
/// Each target holds at most one registration. Removal happens exactly once per registration:
/// detaching or tearing down something that was never attached is a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listeners {
    scrollbar: Option<ListenerId>,
    container: Option<ListenerId>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, target: ListenerTarget) -> &mut Option<ListenerId> {
        match target {
            ListenerTarget::Scrollbar => &mut self.scrollbar,
            ListenerTarget::Container => &mut self.container,
        }
    }

    pub fn get(&self, target: ListenerTarget) -> Option<ListenerId> {
        match target {
            ListenerTarget::Scrollbar => self.scrollbar,
            ListenerTarget::Container => self.container,
        }
    }

    pub fn is_attached(&self, target: ListenerTarget) -> bool {
        self.get(target).is_some()
    }

    /// Registers a listener on `target`, replacing (and unregistering) any previous one.
    pub fn attach<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        target: ListenerTarget,
    ) -> ListenerId {
        self.detach(host, target);
        let id = host.add_listener(target);
        atrace!(?target, id = id.0, "listener attached");
        *self.slot(target) = Some(id);
        id
    }

    /// Unregisters the listener on `target`. Returns `false` if there was none.
    pub fn detach<H: ScrollHost + ?Sized>(&mut self, host: &mut H, target: ListenerTarget) -> bool {
        let Some(id) = self.slot(target).take() else {
            return false;
        };
        host.remove_listener(id);
        atrace!(?target, id = id.0, "listener detached");
        true
    }

    /// Unregisters every listener. Safe to call repeatedly or before anything was attached.
    pub fn teardown<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        self.detach(host, ListenerTarget::Scrollbar);
        self.detach(host, ListenerTarget::Container);
    }
}
