use alloc::collections::VecDeque;
use alloc::vec::Vec;

use fastscroll::InputChange;

/// Something the host reports to a [`crate::Controller`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostEvent {
    /// New values for some of the geometry inputs.
    Changes(Vec<InputChange>),
    /// The scrollbar moved; the new position is read from the host.
    ScrollbarScroll,
    /// A wheel gesture over the container.
    Wheel { delta_y: i64 },
    /// The viewport may have changed size and must be re-measured.
    Resize,
    /// The content container was attached (`true`) or removed (`false`).
    Container(bool),
    /// Programmatic scroll to an absolute offset.
    ScrollTo(u64),
}

/// Collects events raised while a snapshot is being delivered.
///
/// The controller applies them in push order once the delivery that raised them has returned,
/// so a snapshot listener never re-enters resolution.
#[derive(Clone, Debug, Default)]
pub struct EventSink {
    events: VecDeque<HostEvent>,
}

impl EventSink {
    pub fn push(&mut self, event: HostEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub(crate) fn drain_into(&mut self, queue: &mut VecDeque<HostEvent>) {
        queue.append(&mut self.events);
    }
}
