/// Picks the row a flush should scroll to.
///
/// A pending offscreen focus wins over the last visible focus. The result is clamped to
/// `0..item_count`; `None` means the host should not scroll at all (it is never coerced to `0`).
pub fn select_target(
    last_visible_focused_index: Option<usize>,
    pending_scroll_index: Option<usize>,
    item_count: usize,
) -> Option<usize> {
    let last = item_count.checked_sub(1)?;
    let target = pending_scroll_index.or(last_visible_focused_index)?;
    if target > last {
        vwarn!(target, item_count, "select_target: clamping out-of-range row");
    }
    Some(target.min(last))
}
