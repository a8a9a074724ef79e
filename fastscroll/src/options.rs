use alloc::sync::Arc;

use crate::fast_scroll::FastScroll;
use crate::{GeometryState, InputPolicy, Snapshot};

/// A callback fired after every resolution with the freshly computed snapshot.
///
/// The engine is passed by shared reference, so the callback cannot mutate geometry while a
/// resolution is in flight. Adapters that need to react with further input should queue it and
/// apply it afterwards.
pub type OnChangeCallback = Arc<dyn Fn(&FastScroll, &Snapshot) + Send + Sync>;

/// Configuration for [`crate::FastScroll`].
///
/// Cheap to clone: the callback is stored in an `Arc`.
#[derive(Clone, Default)]
pub struct FastScrollOptions {
    pub group_count: usize,
    pub group_height: u32,
    pub expanded_group: Option<usize>,
    pub element_count: usize,
    pub element_height: u32,

    /// Viewport height before the host has measured anything.
    pub initial_viewport_height: u32,
    /// Scroll offset before the host reports one. Not clamped until the first scroll update.
    pub initial_offset: u64,

    /// How raw values passed to `FastScroll::apply` are validated.
    pub input_policy: InputPolicy,

    /// When `true`, a resolution whose snapshot equals the last delivered one does not fire
    /// `on_change`. Off by default: every resolution notifies.
    pub dedupe_notifications: bool,

    pub on_change: Option<OnChangeCallback>,
}

impl FastScrollOptions {
    /// Options for `group_count` collapsed groups of `group_height` each.
    pub fn new(group_count: usize, group_height: u32) -> Self {
        Self {
            group_count,
            group_height,
            ..Self::default()
        }
    }

    /// Expands `index` with `element_count` rows of `element_height` underneath.
    pub fn with_expanded(
        mut self,
        index: Option<usize>,
        element_count: usize,
        element_height: u32,
    ) -> Self {
        self.expanded_group = index;
        self.element_count = element_count;
        self.element_height = element_height;
        self
    }

    pub fn with_initial_viewport_height(mut self, viewport_height: u32) -> Self {
        self.initial_viewport_height = viewport_height;
        self
    }

    /// Starts scrolled to `initial_offset`, e.g. a position restored from a previous session.
    pub fn with_initial_offset(mut self, initial_offset: u64) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_input_policy(mut self, input_policy: InputPolicy) -> Self {
        self.input_policy = input_policy;
        self
    }

    pub fn with_dedupe_notifications(mut self, dedupe: bool) -> Self {
        self.dedupe_notifications = dedupe;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&FastScroll, &Snapshot) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub(crate) fn initial_state(&self) -> GeometryState {
        let mut state = GeometryState {
            group_count: self.group_count,
            group_height: self.group_height,
            expanded_group: None,
            element_count: self.element_count,
            element_height: self.element_height,
            scroll_offset: self.initial_offset,
            viewport_height: self.initial_viewport_height,
        };
        state.set_expanded_group(self.expanded_group);
        state
    }
}

impl core::fmt::Debug for FastScrollOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FastScrollOptions")
            .field("group_count", &self.group_count)
            .field("group_height", &self.group_height)
            .field("expanded_group", &self.expanded_group)
            .field("element_count", &self.element_count)
            .field("element_height", &self.element_height)
            .field("initial_viewport_height", &self.initial_viewport_height)
            .field("initial_offset", &self.initial_offset)
            .field("input_policy", &self.input_policy)
            .field("dedupe_notifications", &self.dedupe_notifications)
            .finish_non_exhaustive()
    }
}
