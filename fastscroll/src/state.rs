/// The numeric inputs that define a two-level list's layout and scroll position.
///
/// This is plain data: the resolvers ([`crate::resolve_layout`], [`crate::resolve_visibility`])
/// are pure functions of it. Fields are public so hosts can restore a saved state wholesale; the
/// setters below additionally keep `expanded_group` within `[0, group_count)`.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryState {
    pub group_count: usize,
    /// Height of one group row. `0` means "no groups".
    pub group_height: u32,
    /// Index of the expanded group, `None` when every group is collapsed.
    pub expanded_group: Option<usize>,
    /// Number of element rows under the expanded group.
    pub element_count: usize,
    pub element_height: u32,
    pub scroll_offset: u64,
    pub viewport_height: u32,
}

impl GeometryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the expanded group index if it is valid for the current `group_count`.
    pub fn expanded(&self) -> Option<usize> {
        self.expanded_group.filter(|&i| i < self.group_count)
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded().is_some()
    }

    /// Returns a copy with an out-of-range `expanded_group` reset to `None`.
    pub fn normalized(mut self) -> Self {
        self.expanded_group = self.expanded();
        self
    }

    pub fn set_group_count(&mut self, group_count: usize) {
        self.group_count = group_count;
        self.expanded_group = self.expanded();
    }

    pub fn set_group_height(&mut self, group_height: u32) {
        self.group_height = group_height;
    }

    /// Expands `index`, or collapses every group with `None`.
    ///
    /// An index outside `[0, group_count)` collapses instead.
    pub fn set_expanded_group(&mut self, index: Option<usize>) {
        self.expanded_group = index.filter(|&i| i < self.group_count);
    }

    pub fn set_element_count(&mut self, element_count: usize) {
        self.element_count = element_count;
    }

    pub fn set_element_height(&mut self, element_height: u32) {
        self.element_height = element_height;
    }

    pub fn set_scroll_offset(&mut self, scroll_offset: u64) {
        self.scroll_offset = scroll_offset;
    }

    pub fn set_viewport_height(&mut self, viewport_height: u32) {
        self.viewport_height = viewport_height;
    }
}
