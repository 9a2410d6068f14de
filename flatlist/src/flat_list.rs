use crate::focus::{FocusOutcome, FocusPhase, FocusScrollCoordinator};
use crate::host::ListHost;
use crate::resolve::resolve_index;
use crate::{FlatListOptions, FocusState, ScrollCommand, ViewportConstraint};

/// Everything a windowed host needs to lay out one render pass.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListFrame {
    pub height: u32,
    pub width: u32,
    pub row_height: u32,
    pub row_count: usize,
    /// The row to bring into view when the list opens, if the selection is in the collection.
    pub initial_scroll_index: Option<usize>,
}

/// A selectable option list that renders through a windowed host.
///
/// `FlatList` holds no UI objects and never owns the items: every query borrows the caller's
/// collection. Hosts drive it once per render pass:
/// - [`Self::frame`] to size the viewport and find the initial row;
/// - [`Self::on_item_focused`] for each focus/visibility report delivered while painting;
/// - [`Self::flush_into`] once all reports are in, to issue at most one scroll.
///
/// Results of `frame` are pure functions of the options and the items, so hosts may call it on
/// every pass.
#[derive(Debug)]
pub struct FlatList<T, K> {
    options: FlatListOptions<T, K>,
    focus: FocusScrollCoordinator,
}

impl<T, K: PartialEq> FlatList<T, K> {
    pub fn new(options: FlatListOptions<T, K>) -> Self {
        vdebug!(
            max_height = options.max_height,
            row_height = options.row_height,
            "FlatList::new"
        );
        Self {
            options,
            focus: FocusScrollCoordinator::new(),
        }
    }

    pub fn options(&self) -> &FlatListOptions<T, K> {
        &self.options
    }

    /// Replaces the options. Focus bookkeeping is kept.
    pub fn set_options(&mut self, options: FlatListOptions<T, K>) {
        self.options = options;
        vtrace!(
            max_height = self.options.max_height,
            row_height = self.options.row_height,
            "FlatList::set_options"
        );
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut FlatListOptions<T, K>))
    where
        T: Clone,
    {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_selected_value(&mut self, selected_value: Option<T>) {
        self.options.selected_value = selected_value;
    }

    pub fn set_default_value(&mut self, default_value: Option<T>) {
        self.options.default_value = default_value;
    }

    pub fn value_of(&self, item: &T) -> K {
        (self.options.value_getter)(item)
    }

    pub fn viewport(&self, item_count: usize) -> ViewportConstraint {
        self.options.viewport(item_count)
    }

    pub fn height(&self, item_count: usize) -> u32 {
        self.viewport(item_count).height()
    }

    pub fn initial_scroll_index(&self, items: &[T]) -> Option<usize> {
        resolve_index(
            items,
            self.options.selected_value.as_ref(),
            self.options.default_value.as_ref(),
            |item| (self.options.value_getter)(item),
        )
    }

    pub fn frame(&self, items: &[T]) -> ListFrame {
        ListFrame {
            height: self.height(items.len()),
            width: self.options.max_width,
            row_height: self.options.row_height,
            row_count: items.len(),
            initial_scroll_index: self.initial_scroll_index(items),
        }
    }

    pub fn focus(&self) -> &FocusScrollCoordinator {
        &self.focus
    }

    pub fn focus_state(&self) -> FocusState {
        self.focus.state()
    }

    pub fn focus_phase(&self) -> FocusPhase {
        self.focus.phase()
    }

    /// Collect phase: a row reported its focus/visibility.
    pub fn on_item_focused(&mut self, index: Option<usize>, is_visible: bool) -> FocusOutcome {
        self.focus.on_focus_notification(index, is_visible)
    }

    /// Flush phase without a host: returns the command the host should apply.
    pub fn flush(&mut self, item_count: usize) -> Option<ScrollCommand> {
        self.focus.flush(item_count)
    }

    /// Flush phase: issues at most one `scroll_to_row` on `host`.
    pub fn flush_into<H: ListHost + ?Sized>(
        &mut self,
        item_count: usize,
        host: &mut H,
    ) -> Option<ScrollCommand> {
        self.focus.flush_into(item_count, host)
    }

    pub fn reset_focus(&mut self) {
        self.focus.reset();
    }
}
