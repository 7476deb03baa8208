use serde::Serialize;

/// Half-open row range `[start_index, end_index)` into an ordered list.
/// Purely derived from scroll geometry; recomputed on every scroll event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WindowRange {
    pub start_index: usize,
    pub end_index: usize,
}

impl WindowRange {
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }
}

/// Rows that must be materialized for the current viewport, padded by
/// `overscan` rows on both sides so fast scrolling does not flash blank
/// rows. O(1); never touches the backing list.
pub fn window_range(
    total: usize,
    row_height: f32,
    viewport_height: f32,
    scroll_offset: f32,
    overscan: usize,
) -> WindowRange {
    if total == 0 || row_height <= 0.0 {
        return WindowRange {
            start_index: 0,
            end_index: total,
        };
    }

    let scroll = scroll_offset.max(0.0);
    let viewport = viewport_height.max(0.0);

    let first = (scroll / row_height).floor() as usize;
    let last = ((scroll + viewport) / row_height).ceil() as usize;

    let start_index = first.saturating_sub(overscan).min(total);
    let end_index = last.saturating_add(overscan).min(total).max(start_index);

    WindowRange {
        start_index,
        end_index,
    }
}
