use crate::*;

use alloc::vec::Vec;

use flatlist::{Align, FlatListOptions, ListHost, OptionValue, ScrollCommand, VirtualRange};

#[derive(Clone, Debug, PartialEq)]
struct Opt {
    value: u32,
}

impl OptionValue for Opt {
    type Value = u32;

    fn value(&self) -> u32 {
        self.value
    }
}

fn items(n: u32) -> Vec<Opt> {
    (0..n).map(|value| Opt { value }).collect()
}

fn range(start_index: usize, end_index: usize) -> VirtualRange {
    VirtualRange {
        start_index,
        end_index,
    }
}

/// 5 rows of 10 visible, overscan 1.
fn controller() -> Controller<Opt, u32> {
    Controller::new(FlatListOptions::<Opt, u32>::new(50, 10))
}

fn rendered(c: &mut Controller<Opt, u32>, items: &[Opt]) -> (Option<ScrollCommand>, Vec<RowSlot>) {
    let mut rows = Vec::new();
    let cmd = c.render_pass(items, |slot, item| {
        assert_eq!(item.value as usize, slot.index);
        rows.push(slot);
    });
    (cmd, rows)
}

#[test]
fn window_ranges_and_overscan() {
    let mut w = FixedWindow::new(100, 10).with_overscan(2);
    w.set_viewport_height(50);
    assert_eq!(w.visible_range(), range(0, 5));
    assert_eq!(w.virtual_range(), range(0, 7));

    w.set_scroll_offset_clamped(55);
    assert_eq!(w.visible_range(), range(5, 11));
    assert_eq!(w.virtual_range(), range(3, 13));
    assert!(w.is_row_visible(10)); // partially visible
    assert!(!w.is_row_visible(11));

    assert_eq!(w.set_scroll_offset_clamped(5_000), 950);
    assert_eq!(w.visible_range(), range(95, 100));
    assert_eq!(w.virtual_range(), range(93, 100));
}

#[test]
fn window_is_empty_without_rows_or_height() {
    let mut w = FixedWindow::new(0, 10);
    w.set_viewport_height(50);
    assert!(w.visible_range().is_empty());
    assert_eq!(w.index_at_offset(0), None);
    assert_eq!(w.scroll_to_row_offset(3, Align::Start), 0);

    let w = FixedWindow::new(10, 10);
    assert!(w.virtual_range().is_empty());

    let mut calls = 0;
    w.for_each_row(|_| calls += 1);
    assert_eq!(calls, 0);
}

#[test]
fn window_scroll_to_row_offsets() {
    let mut w = FixedWindow::new(100, 10).with_scroll_padding(5, 5);
    w.set_viewport_height(50);

    assert_eq!(w.scroll_to_row_offset(20, Align::Start), 195);
    assert_eq!(w.scroll_to_row_offset(20, Align::End), 165);
    assert_eq!(w.scroll_to_row_offset(20, Align::Center), 180);
    assert_eq!(w.scroll_to_row_offset(2, Align::Auto), 0);
    assert_eq!(w.scroll_to_row_offset(20, Align::Auto), 165);
    assert_eq!(w.scroll_to_row_offset(500, Align::Start), 950);

    w.set_scroll_offset_clamped(300);
    assert_eq!(w.scroll_to_row_offset(10, Align::Auto), 95);
    assert_eq!(w.scroll_to_row_offset(32, Align::Auto), 300);
}

#[test]
fn window_as_host_uses_configured_alignment() {
    let mut w = FixedWindow::new(100, 10).with_scroll_to_align(Align::Start);
    w.set_viewport_height(50);
    w.scroll_to_row(40);
    assert_eq!(w.scroll_offset(), 400);

    let mut w = FixedWindow::new(100, 10);
    w.set_viewport_height(50);
    w.scroll_to_row(40);
    assert_eq!(w.scroll_offset(), 360);
}

#[test]
fn window_reclamps_when_geometry_shrinks() {
    let mut w = FixedWindow::new(100, 10);
    w.set_viewport_height(50);
    w.set_scroll_offset_clamped(900);
    w.set_row_count(20);
    assert_eq!(w.scroll_offset(), 150);
    assert_eq!(w.row(19).map(|r| r.end()), Some(200));
    assert_eq!(w.row(20), None);
    assert_eq!(w.index_at_offset(10_000), Some(19));
}

#[test]
fn sync_applies_viewport_and_initial_index() {
    let items = items(100);
    let mut c = Controller::new(
        FlatListOptions::<Opt, u32>::new(50, 10).with_selected_value(Some(Opt { value: 42 })),
    );
    let frame = c.sync(&items);
    assert_eq!(frame.height, 50);
    assert_eq!(frame.initial_scroll_index, Some(42));
    assert_eq!(c.window().viewport_height(), 50);
    assert_eq!(c.window().scroll_offset(), 380);
    assert_eq!(c.focused(), Some(42));

    let (cmd, rows) = rendered(&mut c, &items);
    assert_eq!(cmd, None);
    assert_eq!(rows.first().map(|r| r.index), Some(37));
    assert_eq!(rows.last().map(|r| r.index), Some(43));
    assert_eq!(
        c.list().focus_state().last_visible_focused_index,
        Some(42)
    );

    // The initial index is only re-applied when it resolves to another row.
    c.on_scroll(500);
    c.sync(&items);
    assert_eq!(c.window().scroll_offset(), 500);

    c.list_mut().set_selected_value(Some(Opt { value: 10 }));
    c.sync(&items);
    assert_eq!(c.window().scroll_offset(), 100);
}

#[test]
fn short_lists_shrink_the_viewport() {
    let items = items(3);
    let mut c = controller();
    let (cmd, rows) = rendered(&mut c, &items);
    assert_eq!(cmd, None);
    assert_eq!(c.window().viewport_height(), 30);
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.is_visible));
}

#[test]
fn empty_list_renders_nothing() {
    let items = items(0);
    let mut c = controller();
    c.focus_next(items.len());
    assert_eq!(c.focused(), None);
    let (cmd, rows) = rendered(&mut c, &items);
    assert_eq!(cmd, None);
    assert!(rows.is_empty());
    assert_eq!(c.window().viewport_height(), 0);
}

#[test]
fn keyboard_navigation_scrolls_once_per_offscreen_row() {
    let items = items(100);
    let mut c = controller();
    rendered(&mut c, &items);

    let mut commands = Vec::new();
    for _ in 0..5 {
        c.focus_next(items.len());
        let (cmd, _) = rendered(&mut c, &items);
        commands.extend(cmd);
    }
    // Rows 0..=4 were already on screen.
    assert!(commands.is_empty());
    assert_eq!(c.focused(), Some(4));

    c.focus_next(items.len());
    let (cmd, rows) = rendered(&mut c, &items);
    assert_eq!(cmd, Some(ScrollCommand { index: 5 }));
    assert!(rows.iter().any(|r| r.index == 5 && !r.is_visible));
    assert_eq!(c.window().scroll_offset(), 10);

    // Next pass sees row 5 on screen; nothing more to do.
    let (cmd, rows) = rendered(&mut c, &items);
    assert_eq!(cmd, None);
    assert!(rows.iter().any(|r| r.index == 5 && r.is_visible));
    assert_eq!(
        c.list().focus_state().last_visible_focused_index,
        Some(5)
    );

    c.focus_prev(items.len());
    c.focus_prev(items.len());
    let (cmd, _) = rendered(&mut c, &items);
    assert_eq!(cmd, None);
    assert_eq!(c.focused(), Some(3));
}

#[test]
fn jumping_focus_outside_the_window_scrolls_to_it() {
    let items = items(100);
    let mut c = controller();
    rendered(&mut c, &items);

    c.focus_last(items.len());
    let (cmd, _) = rendered(&mut c, &items);
    assert_eq!(cmd, Some(ScrollCommand { index: 99 }));
    assert_eq!(c.window().scroll_offset(), 950);

    c.focus_first(items.len());
    let (cmd, _) = rendered(&mut c, &items);
    assert_eq!(cmd, Some(ScrollCommand { index: 0 }));
    assert_eq!(c.window().scroll_offset(), 0);
}

#[test]
fn user_scroll_is_not_undone_by_focus() {
    let items = items(100);
    let mut c = controller();
    c.set_focused(Some(2));
    rendered(&mut c, &items);

    c.on_scroll(600);
    let (cmd, rows) = rendered(&mut c, &items);
    assert_eq!(cmd, None);
    assert_eq!(c.window().scroll_offset(), 600);
    assert_eq!(rows.first().map(|r| r.index), Some(59));
}

#[test]
fn focus_beyond_shrunk_list_is_not_reported() {
    let mut c = controller();
    c.set_focused(Some(80));
    let short = items(10);
    let (cmd, _) = rendered(&mut c, &short);
    assert_eq!(cmd, None);
    assert!(!c.list().focus().is_queued());
}

#[test]
fn reset_forgets_focus_and_reapplies_initial_index() {
    let items = items(100);
    let mut c = Controller::new(
        FlatListOptions::<Opt, u32>::new(50, 10).with_default_value(Some(Opt { value: 30 })),
    );
    rendered(&mut c, &items);
    assert_eq!(c.window().scroll_offset(), 260);

    c.on_scroll(0);
    c.reset();
    assert_eq!(c.focused(), None);
    c.sync(&items);
    assert_eq!(c.window().scroll_offset(), 260);
    assert_eq!(c.focused(), Some(30));
}
