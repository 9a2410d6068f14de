use flatlist::{Align, FlatList, FlatListOptions, ListFrame, ScrollCommand};

use crate::{FixedWindow, RowSlot};

/// A framework-neutral controller that drives a [`FlatList`] through a [`FixedWindow`].
///
/// This type does not hold any UI objects or items. Adapters drive it by calling:
/// - `set_focused` / `focus_next` / `focus_prev` on keyboard navigation
/// - `on_scroll` when the user scrolls the real container
/// - `render_pass(items, ..)` once per repaint, then copy `window().scroll_offset()` back to the
///   UI scroll container
///
/// The focused row is reported to the focus coordinator while rows are rendered, and the
/// coordinator is flushed after the last row, so a pass issues at most one scroll.
#[derive(Debug)]
pub struct Controller<T, K> {
    list: FlatList<T, K>,
    window: FixedWindow,
    focused: Option<usize>,
    focus_moved: bool,
    synced: bool,
    applied_initial_index: Option<usize>,
}

impl<T, K: PartialEq> Controller<T, K> {
    pub fn new(options: FlatListOptions<T, K>) -> Self {
        let window = FixedWindow::new(0, options.row_height);
        Self::from_parts(FlatList::new(options), window)
    }

    pub fn from_parts(list: FlatList<T, K>, window: FixedWindow) -> Self {
        Self {
            list,
            window,
            focused: None,
            focus_moved: false,
            synced: false,
            applied_initial_index: None,
        }
    }

    pub fn list(&self) -> &FlatList<T, K> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut FlatList<T, K> {
        &mut self.list
    }

    pub fn window(&self) -> &FixedWindow {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut FixedWindow {
        &mut self.window
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Moves keyboard focus. `None` clears it.
    pub fn set_focused(&mut self, index: Option<usize>) {
        if self.focused == index {
            return;
        }
        self.focused = index;
        self.focus_moved = true;
    }

    pub fn focus_next(&mut self, row_count: usize) {
        let Some(last) = row_count.checked_sub(1) else {
            return;
        };
        let next = self.focused.map_or(0, |i| i.saturating_add(1).min(last));
        self.set_focused(Some(next));
    }

    pub fn focus_prev(&mut self, row_count: usize) {
        let Some(last) = row_count.checked_sub(1) else {
            return;
        };
        let prev = self.focused.map_or(last, |i| i.saturating_sub(1).min(last));
        self.set_focused(Some(prev));
    }

    pub fn focus_first(&mut self, row_count: usize) {
        if row_count > 0 {
            self.set_focused(Some(0));
        }
    }

    pub fn focus_last(&mut self, row_count: usize) {
        if let Some(last) = row_count.checked_sub(1) {
            self.set_focused(Some(last));
        }
    }

    /// Call this when the UI reports a user scroll. Returns the applied (clamped) offset.
    pub fn on_scroll(&mut self, scroll_offset: u64) -> u64 {
        self.window.set_scroll_offset_clamped(scroll_offset)
    }

    /// Applies the current frame to the window.
    ///
    /// The initial scroll index is applied on the first sync and again whenever it resolves to a
    /// different row. On the first sync, an unfocused list also takes focus on that row.
    pub fn sync(&mut self, items: &[T]) -> ListFrame {
        let frame = self.list.frame(items);
        self.window.apply_frame(&frame);

        let index = frame.initial_scroll_index;
        if !self.synced || index != self.applied_initial_index {
            if let Some(index) = index {
                self.window.scroll_to_row_aligned(index, Align::Auto);
                if !self.synced && self.focused.is_none() {
                    self.focused = Some(index);
                }
            }
            vdebug!(?index, "Controller: applied initial scroll index");
            self.applied_initial_index = index;
            self.synced = true;
        }
        frame
    }

    /// Runs one render pass: syncs the frame, renders the window's rows, then flushes.
    ///
    /// `render_row` is called once per rendered row, in ascending order. Returns the scroll command
    /// issued to the window, if any.
    pub fn render_pass(
        &mut self,
        items: &[T],
        mut render_row: impl FnMut(RowSlot, &T),
    ) -> Option<ScrollCommand> {
        self.sync(items);

        let focused = self.focused.filter(|&i| i < items.len());
        let moved = core::mem::take(&mut self.focus_moved);
        let mut reported = false;

        let list = &mut self.list;
        self.window.for_each_row(|slot| {
            if focused == Some(slot.index) {
                reported = true;
                // Offscreen reports only follow keyboard moves so user scrolling is not undone.
                if slot.is_visible || moved {
                    list.on_item_focused(Some(slot.index), slot.is_visible);
                }
            }
            if let Some(item) = items.get(slot.index) {
                render_row(slot, item);
            }
        });

        if let Some(index) = focused.filter(|_| moved && !reported) {
            self.list.on_item_focused(Some(index), false);
        }

        let cmd = self.list.flush_into(items.len(), &mut self.window);
        vtrace!(
            ?cmd,
            offset = self.window.scroll_offset(),
            "Controller::render_pass"
        );
        cmd
    }

    /// Forgets focus and the applied initial index, e.g. when the menu closes.
    pub fn reset(&mut self) {
        self.list.reset_focus();
        self.focused = None;
        self.focus_moved = false;
        self.synced = false;
        self.applied_initial_index = None;
    }
}
