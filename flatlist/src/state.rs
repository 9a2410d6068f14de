/// A lightweight, serializable snapshot of a coordinator's focus bookkeeping.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FocusState {
    /// The last row reported as focused while it was inside the viewport.
    pub last_visible_focused_index: Option<usize>,
    /// The first row that became focused while offscreen since the last flush.
    pub pending_scroll_index: Option<usize>,
}

impl FocusState {
    pub fn is_queued(&self) -> bool {
        self.pending_scroll_index.is_some()
    }
}

/// A single row index the host should bring into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCommand {
    pub index: usize,
}

/// A row focus/visibility report delivered by the host.
///
/// `index == None` means no row currently has focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FocusNotification {
    pub index: Option<usize>,
    pub is_visible: bool,
}

impl FocusNotification {
    pub fn visible(index: usize) -> Self {
        Self {
            index: Some(index),
            is_visible: true,
        }
    }

    pub fn offscreen(index: usize) -> Self {
        Self {
            index: Some(index),
            is_visible: false,
        }
    }
}
