use crate::host::ListHost;
use crate::select::select_target;
use crate::{FocusNotification, FocusState, ScrollCommand};

/// Whether a scroll request is outstanding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FocusPhase {
    Idle,
    Queued,
}

/// What a single focus notification did to the coordinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusOutcome {
    /// The notification carried no row index.
    Ignored,
    /// A visible focus was recorded; any pending request was superseded.
    Recorded,
    /// An offscreen focus was queued for the next flush.
    Queued,
    /// An offscreen focus arrived while another request was already queued.
    Dropped,
}

/// Reconciles row focus reports with the rendered window.
///
/// The coordinator runs a two-phase protocol per render pass:
/// 1. collect: the host reports focus/visibility through [`Self::on_focus_notification`];
/// 2. flush: after all reports for the pass, [`Self::flush`] (or [`Self::flush_into`]) yields at
///    most one [`ScrollCommand`].
///
/// Only the first offscreen focus is kept until it is flushed. Later offscreen reports in the same
/// burst are dropped, so keyboard navigation that outruns the painter cannot make the window
/// oscillate between targets.
///
/// The state is owned by exactly one list instance and is not meant to be shared.
#[derive(Clone, Debug, Default)]
pub struct FocusScrollCoordinator {
    state: FocusState,
}

impl FocusScrollCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a coordinator from a previously captured snapshot.
    pub fn from_state(state: FocusState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> FocusState {
        self.state
    }

    pub fn phase(&self) -> FocusPhase {
        if self.state.is_queued() {
            FocusPhase::Queued
        } else {
            FocusPhase::Idle
        }
    }

    pub fn is_queued(&self) -> bool {
        self.state.is_queued()
    }

    pub fn last_visible_focused_index(&self) -> Option<usize> {
        self.state.last_visible_focused_index
    }

    pub fn pending_scroll_index(&self) -> Option<usize> {
        self.state.pending_scroll_index
    }

    /// Handles a focus/visibility report for one row.
    pub fn on_focus_notification(&mut self, index: Option<usize>, is_visible: bool) -> FocusOutcome {
        let Some(index) = index else {
            return FocusOutcome::Ignored;
        };

        if is_visible {
            vtrace!(
                index,
                superseded = ?self.state.pending_scroll_index,
                "focus: recorded visible focus"
            );
            self.state.last_visible_focused_index = Some(index);
            self.state.pending_scroll_index = None;
            return FocusOutcome::Recorded;
        }

        if self.state.is_queued() {
            vtrace!(
                index,
                pending = ?self.state.pending_scroll_index,
                "focus: dropped offscreen focus, already queued"
            );
            return FocusOutcome::Dropped;
        }

        vtrace!(index, "focus: queued offscreen focus");
        self.state.pending_scroll_index = Some(index);
        FocusOutcome::Queued
    }

    pub fn notify(&mut self, notification: FocusNotification) -> FocusOutcome {
        self.on_focus_notification(notification.index, notification.is_visible)
    }

    /// Ends the collect phase for the current pass.
    ///
    /// When a request is queued, returns the command to issue and goes back to idle. Returns `None`
    /// when idle, or when `item_count == 0` (the request is discarded).
    pub fn flush(&mut self, item_count: usize) -> Option<ScrollCommand> {
        let pending = self.state.pending_scroll_index.take()?;
        let target = select_target(
            self.state.last_visible_focused_index,
            Some(pending),
            item_count,
        );
        vdebug!(pending, item_count, ?target, "focus: flush");
        target.map(|index| ScrollCommand { index })
    }

    /// Like [`Self::flush`], and forwards the command to `host`.
    pub fn flush_into<H: ListHost + ?Sized>(
        &mut self,
        item_count: usize,
        host: &mut H,
    ) -> Option<ScrollCommand> {
        let cmd = self.flush(item_count)?;
        host.scroll_to_row(cmd.index);
        Some(cmd)
    }

    /// Forgets all focus bookkeeping (e.g. when the list is closed).
    pub fn reset(&mut self) {
        self.state = FocusState::default();
    }
}
