use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{
    DerivedLayout, FastScrollOptions, GeometryState, InputChange, InputError, InputPolicy,
    Region, Snapshot, classify, resolve_layout, resolve_visibility,
};

/// A headless visible-range engine for a two-level (group/element) list.
///
/// Owns exactly one [`GeometryState`] plus the derived layout and the last snapshot. The host
/// drives it by calling setters when its inputs, viewport or scroll position change; every
/// change re-resolves visibility and fires `on_change`.
///
/// The layout is only recomputed when a layout-affecting input changes, so scroll events cost a
/// single visibility resolution.
#[derive(Clone, Debug)]
pub struct FastScroll {
    options: FastScrollOptions,
    state: GeometryState,
    layout: DerivedLayout,
    snapshot: Snapshot,
    last_notified: Option<Snapshot>,

    batch_depth: usize,
    layout_dirty: bool,
    pending: bool,
}

impl FastScroll {
    /// Creates an engine and resolves its initial snapshot.
    ///
    /// Construction does not fire `on_change`.
    pub fn new(options: FastScrollOptions) -> Self {
        let state = options.initial_state();
        let layout = resolve_layout(&state);
        let snapshot = resolve_visibility(&state, &layout);
        fdebug!(
            group_count = state.group_count,
            element_count = state.element_count,
            expanded = ?state.expanded_group,
            "FastScroll::new"
        );
        Self {
            options,
            state,
            layout,
            snapshot,
            last_notified: None,
            batch_depth: 0,
            layout_dirty: false,
            pending: false,
        }
    }

    pub fn options(&self) -> &FastScrollOptions {
        &self.options
    }

    pub fn state(&self) -> &GeometryState {
        &self.state
    }

    pub fn layout(&self) -> &DerivedLayout {
        &self.layout
    }

    /// The snapshot produced by the most recent resolution.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot
    }

    pub fn region(&self) -> Region {
        classify(&self.state, &self.layout)
    }

    /// Height for the content filler (the scrollable track's inner element).
    pub fn track_height(&self) -> u64 {
        self.layout.track_height()
    }

    pub fn viewport_height(&self) -> u32 {
        self.state.viewport_height
    }

    pub fn scroll_offset(&self) -> u64 {
        self.state.scroll_offset
    }

    pub fn max_scroll_offset(&self) -> u64 {
        // Inside a batch the cached layout may lag behind the state.
        let total = if self.layout_dirty {
            resolve_layout(&self.state).total_height
        } else {
            self.layout.total_height
        };
        total.saturating_sub(self.state.viewport_height as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    pub fn input_policy(&self) -> InputPolicy {
        self.options.input_policy
    }

    pub fn set_input_policy(&mut self, input_policy: InputPolicy) {
        self.options.input_policy = input_policy;
    }

    pub fn set_dedupe_notifications(&mut self, dedupe: bool) {
        self.options.dedupe_notifications = dedupe;
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&FastScroll, &Snapshot) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.last_notified = None;
    }

    fn invalidate(&mut self, layout: bool) {
        self.layout_dirty |= layout;
        self.pending = true;
        if self.batch_depth > 0 {
            return;
        }
        self.flush();
    }

    fn flush(&mut self) {
        if self.layout_dirty {
            self.layout = resolve_layout(&self.state);
            self.layout_dirty = false;
        }
        self.snapshot = resolve_visibility(&self.state, &self.layout);
        self.pending = false;
        self.notify();
    }

    fn notify(&mut self) {
        if self.options.dedupe_notifications && self.last_notified == Some(self.snapshot) {
            ftrace!("notification skipped: snapshot unchanged");
            return;
        }
        self.last_notified = Some(self.snapshot);
        if let Some(cb) = self.options.on_change.clone() {
            let snapshot = self.snapshot;
            cb(self, &snapshot);
        }
    }

    /// Re-resolves visibility for the current state and notifies, even if nothing changed.
    ///
    /// Hosts call this for raw scroll events, which may repeat the previous offset.
    pub fn resolve(&mut self) -> Snapshot {
        self.invalidate(false);
        self.snapshot
    }

    /// Coalesces multiple updates into a single resolution and `on_change` notification.
    ///
    /// Batches may nest; only the outermost one resolves.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        self.batch_depth = self.batch_depth.saturating_add(1);

        f(self);

        debug_assert!(self.batch_depth > 0, "batch_depth underflow");
        self.batch_depth = self.batch_depth.saturating_sub(1);

        if self.batch_depth == 0 && self.pending {
            self.flush();
        }
    }

    pub fn set_group_count(&mut self, group_count: usize) {
        if self.state.group_count == group_count {
            return;
        }
        self.state.set_group_count(group_count);
        self.invalidate(true);
    }

    pub fn set_group_height(&mut self, group_height: u32) {
        if self.state.group_height == group_height {
            return;
        }
        self.state.set_group_height(group_height);
        self.invalidate(true);
    }

    /// Expands `index`, or collapses every group with `None`. Out-of-range indexes collapse.
    pub fn set_expanded_group(&mut self, index: Option<usize>) {
        let prev = self.state.expanded_group;
        self.state.set_expanded_group(index);
        if self.state.expanded_group == prev {
            return;
        }
        fdebug!(from = ?prev, to = ?self.state.expanded_group, "set_expanded_group");
        self.invalidate(true);
    }

    pub fn set_element_count(&mut self, element_count: usize) {
        if self.state.element_count == element_count {
            return;
        }
        self.state.set_element_count(element_count);
        self.invalidate(true);
    }

    pub fn set_element_height(&mut self, element_height: u32) {
        if self.state.element_height == element_height {
            return;
        }
        self.state.set_element_height(element_height);
        self.invalidate(true);
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.state.scroll_offset == offset {
            return;
        }
        self.state.set_scroll_offset(offset);
        self.invalidate(false);
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    /// Records a freshly measured viewport height.
    ///
    /// The layout is refreshed too, since it echoes the viewport for sizing the scrollbar track.
    pub fn set_viewport_height(&mut self, viewport_height: u32) {
        if self.state.viewport_height == viewport_height {
            return;
        }
        self.state.set_viewport_height(viewport_height);
        self.invalidate(true);
    }

    pub fn set_viewport_and_scroll(&mut self, viewport_height: u32, offset: u64) {
        self.batch_update(|fs| {
            fs.set_viewport_height(viewport_height);
            fs.set_scroll_offset(offset);
        });
    }

    /// Applies a wheel-style delta to the scroll offset, clamped to the scrollable range.
    ///
    /// Returns the applied offset.
    pub fn scroll_by(&mut self, delta: i64) -> u64 {
        let cur = self.state.scroll_offset;
        let target = if delta >= 0 {
            cur.saturating_add(delta as u64)
        } else {
            cur.saturating_sub(delta.unsigned_abs())
        };
        ftrace!(delta, from = cur, to = target, "scroll_by");
        self.set_scroll_offset_clamped(target);
        self.state.scroll_offset
    }

    /// Replaces the whole geometry state (e.g. when restoring a saved session).
    pub fn restore_state(&mut self, state: GeometryState) {
        self.state = state.normalized();
        self.invalidate(true);
    }

    /// Applies one raw host value under the configured [`InputPolicy`].
    ///
    /// Under `Strict`, an invalid value is rejected and nothing is resolved.
    pub fn apply(&mut self, change: InputChange) -> Result<(), InputError> {
        let field = change.field();
        change.apply_to(&mut self.state, self.options.input_policy)?;
        ftrace!(%field, "apply");
        self.invalidate(field.affects_layout());
        Ok(())
    }

    /// Applies a set of raw host values with a single resolution.
    ///
    /// Changes are applied in [`crate::InputField`] order. Under `Strict`, the first invalid
    /// value stops the batch; changes applied before it are kept and resolved.
    pub fn apply_changes(
        &mut self,
        changes: impl IntoIterator<Item = InputChange>,
    ) -> Result<(), InputError> {
        let mut changes: Vec<InputChange> = changes.into_iter().collect();
        changes.sort_by_key(InputChange::field);

        let mut result = Ok(());
        self.batch_update(|fs| {
            for change in changes {
                if let Err(err) = fs.apply(change) {
                    fwarn!(%err, "rejected input change");
                    result = Err(err);
                    break;
                }
            }
        });
        result
    }
}
