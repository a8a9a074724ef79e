use crate::GeometryState;

/// Quantities derived from a [`GeometryState`]: the content height and the two collapsed-group
/// stacks surrounding the expanded group's element run.
///
/// Vertical layout when a group is expanded:
///
/// ```text
/// 0                 upper_group_height            element_run_end          total_height
/// | groups 0..=exp  | elements 0..element_count   | groups exp+1..count    |
/// ```
///
/// The expanded group itself is the last row of the upper stack. When no group is expanded the
/// upper stack holds every group and there is no element run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedLayout {
    pub total_height: u64,
    pub upper_group_count: usize,
    pub upper_group_height: u64,
    pub lower_group_count: usize,
    pub lower_group_height: u64,
    /// Effective element count: `0` unless a group is expanded.
    pub element_count: usize,
    pub element_run_height: u64,
    pub group_count: usize,
    pub group_height: u32,
    pub element_height: u32,
    pub viewport_height: u32,
    pub expanded_group: Option<usize>,
}

impl DerivedLayout {
    pub fn is_expanded(&self) -> bool {
        self.expanded_group.is_some()
    }

    /// Height for the content filler inside the scrollbar track.
    pub fn track_height(&self) -> u64 {
        self.total_height
    }

    /// Height for the scrollbar track itself (pass-through of the measured viewport).
    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn element_run_start(&self) -> u64 {
        self.upper_group_height
    }

    pub fn element_run_end(&self) -> u64 {
        self.upper_group_height.saturating_add(self.element_run_height)
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_height.saturating_sub(self.viewport_height as u64)
    }

    pub fn all_fits(&self) -> bool {
        self.total_height <= self.viewport_height as u64
    }
}

/// Computes the derived layout for `state`. Total: zero counts or heights yield empty stacks.
pub fn resolve_layout(state: &GeometryState) -> DerivedLayout {
    let expanded_group = state.expanded();
    let group_height = state.group_height as u64;

    let element_count = if expanded_group.is_some() {
        state.element_count
    } else {
        0
    };
    let element_run_height = (state.element_height as u64).saturating_mul(element_count as u64);

    let upper_group_count = match expanded_group {
        Some(i) => i + 1,
        None => state.group_count,
    };
    let lower_group_count = state.group_count - upper_group_count;
    let upper_group_height = group_height.saturating_mul(upper_group_count as u64);
    let lower_group_height = group_height.saturating_mul(lower_group_count as u64);

    let total_height = upper_group_height
        .saturating_add(element_run_height)
        .saturating_add(lower_group_height);

    ftrace!(
        total_height,
        upper_group_count,
        lower_group_count,
        element_count,
        "resolve_layout"
    );

    DerivedLayout {
        total_height,
        upper_group_count,
        upper_group_height,
        lower_group_count,
        lower_group_height,
        element_count,
        element_run_height,
        group_count: state.group_count,
        group_height: state.group_height,
        element_height: state.element_height,
        viewport_height: state.viewport_height,
        expanded_group,
    }
}
