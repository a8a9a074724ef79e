/// Which host element a listener is registered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListenerTarget {
    /// The scrollbar element; receives `scroll` events.
    Scrollbar,
    /// The external content container; receives `wheel` events.
    Container,
}

/// Opaque handle for a registered host listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerId(pub u64);

/// The UI layer a [`crate::Controller`] drives.
///
/// Implementations wrap whatever the host toolkit provides (DOM elements, a TUI widget, ...):
/// a scrollbar whose track is sized to the viewport and whose filler is sized to the content,
/// and a container that reports its visible height.
pub trait ScrollHost {
    /// Current visible height of the scroll area.
    fn measure_viewport(&self) -> u32;

    /// Current scroll position of the scrollbar.
    fn scroll_top(&self) -> u64;

    fn set_scroll_top(&mut self, offset: u64);

    /// Sizes the scrollbar track to `viewport_height` and its content filler to `filler_height`.
    fn resize_track(&mut self, viewport_height: u32, filler_height: u64);

    fn add_listener(&mut self, target: ListenerTarget) -> ListenerId;

    fn remove_listener(&mut self, id: ListenerId);

    /// Asks the host to re-render the visible slice. Defaults to a no-op.
    fn request_redraw(&mut self) {}
}
