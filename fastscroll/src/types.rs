use core::ops::Range;

use crate::DerivedLayout;

/// Where the viewport sits relative to the scrollable content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollEdge {
    Top,
    Middle,
    Bottom,
}

/// The branch of the visibility resolver that produced a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Region {
    /// The whole content is shorter than (or as tall as) the viewport.
    AllFits,
    /// No group is expanded; only group rows exist.
    Collapsed(ScrollEdge),
    /// One group is expanded and its element run sits between the two group stacks.
    Expanded(ScrollEdge),
}

/// The visible slice of a two-level list for one scroll position.
///
/// Group indexes are always one contiguous run: the tail of the upper stack (ending at the
/// expanded group) followed by the head of the lower stack. `visible_upper_group_count` and
/// `visible_lower_group_count` split `group_limit` between the two stacks, so a renderer can
/// place the element rows between them.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub group_position: usize,
    pub group_limit: usize,
    pub element_position: usize,
    pub element_limit: usize,
    pub visible_upper_group_count: usize,
    pub visible_lower_group_count: usize,
}

impl Snapshot {
    pub fn group_range(&self) -> Range<usize> {
        self.group_position..self.group_position.saturating_add(self.group_limit)
    }

    pub fn element_range(&self) -> Range<usize> {
        self.element_position..self.element_position.saturating_add(self.element_limit)
    }

    /// Visible groups that are rendered above the element run.
    pub fn upper_group_range(&self, layout: &DerivedLayout) -> Range<usize> {
        if !layout.is_expanded() {
            return self.group_range();
        }
        let start = self.group_position;
        start..start.saturating_add(self.visible_upper_group_count)
    }

    /// Visible groups that are rendered below the element run.
    pub fn lower_group_range(&self, layout: &DerivedLayout) -> Range<usize> {
        if !layout.is_expanded() {
            return 0..0;
        }
        let start = self
            .group_position
            .saturating_add(self.visible_upper_group_count);
        start..start.saturating_add(self.visible_lower_group_count)
    }

    pub fn is_empty(&self) -> bool {
        self.group_limit == 0 && self.element_limit == 0
    }
}
