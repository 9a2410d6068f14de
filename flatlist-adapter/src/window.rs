use core::cmp;

use flatlist::{Align, ListFrame, ListHost, VirtualRange};

/// A row inside the rendered window.
///
/// Rows in the overscan margin are rendered but reported with `is_visible == false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowSlot {
    pub index: usize,
    /// Start offset in the scroll axis.
    pub start: u64,
    pub size: u32,
    pub is_visible: bool,
}

impl RowSlot {
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.size as u64)
    }
}

/// A windowing host for lists where every row has the same height.
///
/// The window tracks the viewport height and the scroll offset, and yields only the rows that
/// intersect the viewport (plus `overscan` rows on each side). It holds no UI objects; adapters
/// copy `scroll_offset()` into their real scroll container after each pass.
#[derive(Clone, Debug)]
pub struct FixedWindow {
    row_count: usize,
    row_height: u32,
    viewport_height: u32,
    scroll_offset: u64,
    overscan: usize,
    scroll_padding_start: u32,
    scroll_padding_end: u32,
    scroll_to_align: Align,
}

impl FixedWindow {
    pub fn new(row_count: usize, row_height: u32) -> Self {
        Self {
            row_count,
            row_height,
            viewport_height: 0,
            scroll_offset: 0,
            overscan: 1,
            scroll_padding_start: 0,
            scroll_padding_end: 0,
            scroll_to_align: Align::Auto,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_scroll_padding(
        mut self,
        scroll_padding_start: u32,
        scroll_padding_end: u32,
    ) -> Self {
        self.scroll_padding_start = scroll_padding_start;
        self.scroll_padding_end = scroll_padding_end;
        self
    }

    /// Alignment used when the window is driven through [`ListHost::scroll_to_row`].
    pub fn with_scroll_to_align(mut self, align: Align) -> Self {
        self.scroll_to_align = align;
        self
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn row_height(&self) -> u32 {
        self.row_height
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.overscan = overscan;
    }

    pub fn set_row_count(&mut self, row_count: usize) {
        if self.row_count == row_count {
            return;
        }
        self.row_count = row_count;
        self.reclamp();
    }

    pub fn set_row_height(&mut self, row_height: u32) {
        if self.row_height == row_height {
            return;
        }
        self.row_height = row_height;
        self.reclamp();
    }

    pub fn set_viewport_height(&mut self, viewport_height: u32) {
        if self.viewport_height == viewport_height {
            return;
        }
        self.viewport_height = viewport_height;
        self.reclamp();
    }

    /// Applies the geometry of a [`ListFrame`]. The initial scroll index is left to the caller.
    pub fn apply_frame(&mut self, frame: &ListFrame) {
        self.row_count = frame.row_count;
        self.row_height = frame.row_height;
        self.viewport_height = frame.height;
        self.reclamp();
    }

    fn reclamp(&mut self) {
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
    }

    pub fn total_size(&self) -> u64 {
        (self.row_height as u64).saturating_mul(self.row_count as u64)
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_size().saturating_sub(self.viewport_height as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// Applies a scroll offset reported by the UI layer. Returns the applied (clamped) offset.
    pub fn set_scroll_offset_clamped(&mut self, offset: u64) -> u64 {
        self.scroll_offset = self.clamp_scroll_offset(offset);
        self.scroll_offset
    }

    pub fn row_start(&self, index: usize) -> Option<u64> {
        if index >= self.row_count {
            return None;
        }
        Some((self.row_height as u64).saturating_mul(index as u64))
    }

    pub fn row(&self, index: usize) -> Option<RowSlot> {
        let start = self.row_start(index)?;
        Some(RowSlot {
            index,
            start,
            size: self.row_height,
            is_visible: self.is_row_visible(index),
        })
    }

    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        let last = self.row_count.checked_sub(1)?;
        if self.row_height == 0 {
            return Some(0);
        }
        let index = offset / self.row_height as u64;
        Some(cmp::min(index, last as u64) as usize)
    }

    /// Rows that intersect the viewport, including partially visible ones.
    pub fn visible_range(&self) -> VirtualRange {
        let count = self.row_count;
        let view = self.viewport_height as u64;
        let rh = self.row_height as u64;
        if count == 0 || view == 0 || rh == 0 {
            return VirtualRange::default();
        }

        let off = self.clamp_scroll_offset(self.scroll_offset);
        let start = off / rh;
        let end = off.saturating_add(view).div_ceil(rh);

        VirtualRange {
            start_index: cmp::min(start, count as u64) as usize,
            end_index: cmp::min(end, count as u64) as usize,
        }
    }

    /// The visible range extended by `overscan` rows on each side.
    pub fn virtual_range(&self) -> VirtualRange {
        let mut range = self.visible_range();
        if range.is_empty() {
            return range;
        }
        range.start_index = range.start_index.saturating_sub(self.overscan);
        range.end_index = cmp::min(self.row_count, range.end_index.saturating_add(self.overscan));
        range
    }

    pub fn is_row_visible(&self, index: usize) -> bool {
        self.visible_range().contains(index)
    }

    /// Iterates the rows to render for the current scroll offset, in ascending order.
    pub fn for_each_row(&self, mut f: impl FnMut(RowSlot)) {
        let visible = self.visible_range();
        let range = self.virtual_range();
        let rh = self.row_height as u64;
        for index in range.start_index..range.end_index {
            f(RowSlot {
                index,
                start: rh.saturating_mul(index as u64),
                size: self.row_height,
                is_visible: visible.contains(index),
            });
        }
    }

    /// Computes the offset that brings `index` into view with `align`. Out-of-range indexes are
    /// clamped to the last row.
    pub fn scroll_to_row_offset(&self, index: usize, align: Align) -> u64 {
        let Some(last) = self.row_count.checked_sub(1) else {
            return 0;
        };
        let index = index.min(last);
        let size = self.row_height as u64;
        let start = size.saturating_mul(index as u64);
        let end = start.saturating_add(size);

        let sp_start = self.scroll_padding_start as u64;
        let sp_end = self.scroll_padding_end as u64;
        let view = self.viewport_height as u64;

        let target = match align {
            Align::Start => start.saturating_sub(sp_start),
            Align::End => end.saturating_add(sp_end).saturating_sub(view),
            Align::Center => {
                let center = start.saturating_add(size / 2);
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let cur = self.scroll_offset;
                let cur_end = cur.saturating_add(view);
                if start >= cur && end <= cur_end {
                    cur
                } else if start < cur {
                    start.saturating_sub(sp_start)
                } else {
                    end.saturating_add(sp_end).saturating_sub(view)
                }
            }
        };

        self.clamp_scroll_offset(target)
    }

    /// Scrolls to `index` with `align`. Returns the applied (clamped) offset.
    pub fn scroll_to_row_aligned(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_row_offset(index, align);
        vtrace!(index, ?align, offset, "FixedWindow::scroll_to_row_aligned");
        self.scroll_offset = offset;
        offset
    }
}

impl ListHost for FixedWindow {
    fn scroll_to_row(&mut self, index: usize) {
        self.scroll_to_row_aligned(index, self.scroll_to_align);
    }
}
