use crate::{DerivedLayout, GeometryState, Region, ScrollEdge, Snapshot};

/// Number of whole rows of `row_height` in `space`. Zero-height rows never fit.
fn rows_in(space: u64, row_height: u32) -> usize {
    if row_height == 0 {
        return 0;
    }
    usize::try_from(space / row_height as u64).unwrap_or(usize::MAX)
}

/// Whole rows that fit into `space`, at least one when there is any space at all, at most
/// `available`.
fn fit(space: u64, row_height: u32, available: usize) -> usize {
    if space == 0 || row_height == 0 || available == 0 {
        return 0;
    }
    rows_in(space, row_height).clamp(1, available)
}

fn span(rows: usize, row_height: u32) -> u64 {
    (rows as u64).saturating_mul(row_height as u64)
}

/// The scroll offset clamped to `[0, total_height - viewport_height]`.
pub fn clamped_scroll_offset(state: &GeometryState, layout: &DerivedLayout) -> u64 {
    let max = layout.total_height.saturating_sub(state.viewport_height as u64);
    state.scroll_offset.min(max)
}

/// Determines which resolution branch applies to `state`.
///
/// Precedence: everything fits, then no group expanded, then a group expanded; the latter two
/// are split by whether the (clamped) offset is at the top, the bottom or in between.
pub fn classify(state: &GeometryState, layout: &DerivedLayout) -> Region {
    let view = state.viewport_height as u64;
    if layout.total_height <= view {
        return Region::AllFits;
    }

    let offset = clamped_scroll_offset(state, layout);
    let edge = if offset == 0 {
        ScrollEdge::Top
    } else if offset + view == layout.total_height {
        ScrollEdge::Bottom
    } else {
        ScrollEdge::Middle
    };

    if layout.is_expanded() {
        Region::Expanded(edge)
    } else {
        Region::Collapsed(edge)
    }
}

/// Resolves the visible group and element ranges for the current scroll position.
///
/// Pure and total: degenerate inputs (zero heights or counts) produce zero-limit ranges, and
/// every reported range lies within its row kind's count.
pub fn resolve_visibility(state: &GeometryState, layout: &DerivedLayout) -> Snapshot {
    let view = state.viewport_height as u64;
    let offset = clamped_scroll_offset(state, layout);
    let region = classify(state, layout);

    let snapshot = match region {
        Region::AllFits => Snapshot {
            group_position: 0,
            group_limit: layout.group_count,
            element_position: 0,
            element_limit: layout.element_count,
            visible_upper_group_count: layout.upper_group_count,
            visible_lower_group_count: layout.lower_group_count,
        },
        Region::Collapsed(edge) => resolve_collapsed(edge, offset, view, layout),
        Region::Expanded(_) => stack_from(offset, view, layout),
    };
    let snapshot = normalize(snapshot);

    ftrace!(
        ?region,
        offset,
        group_position = snapshot.group_position,
        group_limit = snapshot.group_limit,
        element_position = snapshot.element_position,
        element_limit = snapshot.element_limit,
        "resolve_visibility"
    );
    debug_assert!(snapshot.group_range().end <= layout.group_count);
    debug_assert!(snapshot.element_range().end <= layout.element_count);

    snapshot
}

fn resolve_collapsed(edge: ScrollEdge, offset: u64, view: u64, layout: &DerivedLayout) -> Snapshot {
    let max_visible = rows_in(view, layout.group_height);
    let group_position = match edge {
        ScrollEdge::Top => 0,
        ScrollEdge::Bottom => layout
            .group_count
            .saturating_sub(max_visible)
            .saturating_sub(1),
        ScrollEdge::Middle => rows_in(offset, layout.group_height),
    };
    Snapshot {
        group_position,
        group_limit: max_visible,
        element_position: 0,
        element_limit: 0,
        visible_upper_group_count: max_visible,
        visible_lower_group_count: 0,
    }
}

/// Stacks rows downwards from the window's top edge at `offset`.
///
/// A row counts as visible when its bottom edge is inside the window, so the first row may be
/// clipped at the top. Space left over after the element rows goes to the lower stack's head.
///
/// Used for every expanded position, including the bottom edge, so scrolling by one pixel never
/// moves the reported first row backwards.
fn stack_from(offset: u64, view: u64, layout: &DerivedLayout) -> Snapshot {
    let end = offset.saturating_add(view);
    let gh = layout.group_height;
    let eh = layout.element_height;
    let upper_height = layout.upper_group_height;
    let run_end = layout.element_run_end();

    if end <= upper_height {
        let first = rows_in(offset, gh);
        let limit = rows_in(end, gh) - first;
        return Snapshot {
            group_position: first,
            group_limit: limit,
            visible_upper_group_count: limit,
            ..Snapshot::default()
        };
    }

    if offset >= run_end {
        let first = rows_in(offset - run_end, gh);
        let row_top = run_end.saturating_add(span(first, gh));
        let available = layout.lower_group_count.saturating_sub(first);
        let limit = fit(end.saturating_sub(row_top), gh, available);
        return Snapshot {
            group_position: layout.upper_group_count + first,
            group_limit: limit,
            visible_lower_group_count: limit,
            ..Snapshot::default()
        };
    }

    let mut snapshot = Snapshot::default();
    let (element_first, mut cursor) = if offset < upper_height {
        let first = rows_in(offset, gh);
        snapshot.group_position = first;
        snapshot.visible_upper_group_count = layout.upper_group_count - first;
        (0, upper_height)
    } else {
        snapshot.group_position = layout.upper_group_count;
        let first = rows_in(offset - upper_height, eh);
        (first, upper_height.saturating_add(span(first, eh)))
    };

    let available = layout.element_count.saturating_sub(element_first);
    let element_limit = fit(end.saturating_sub(cursor), eh, available);
    snapshot.element_position = element_first;
    snapshot.element_limit = element_limit;
    cursor = cursor.saturating_add(span(element_limit, eh));

    if end > cursor {
        snapshot.visible_lower_group_count = fit(end - cursor, gh, layout.lower_group_count);
    }
    snapshot.group_limit = snapshot.visible_upper_group_count + snapshot.visible_lower_group_count;
    snapshot
}

fn normalize(mut snapshot: Snapshot) -> Snapshot {
    if snapshot.group_limit == 0 {
        snapshot.group_position = 0;
    }
    if snapshot.element_limit == 0 {
        snapshot.element_position = 0;
    }
    snapshot
}
