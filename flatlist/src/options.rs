use alloc::sync::Arc;

use crate::{OptionValue, ViewportConstraint};

/// Menu height used by hosts that do not provide one.
pub const DEFAULT_MAX_HEIGHT: u32 = 300;

/// Width hint handed to hosts that require one. Most hosts stretch the list to its container.
pub const DEFAULT_MAX_WIDTH: u32 = 500;

/// Extracts the comparable value from an item.
pub type ValueGetter<T, K> = Arc<dyn Fn(&T) -> K + Send + Sync>;

/// Configuration for [`crate::FlatList`].
///
/// This type is cheap to clone when `T` is: the value getter is stored in an `Arc`, so hosts can
/// tweak a field and hand the options back through `FlatList::set_options`.
pub struct FlatListOptions<T, K> {
    /// Upper bound for the viewport height.
    pub max_height: u32,
    /// Fixed height of every row.
    pub row_height: u32,
    pub max_width: u32,
    pub value_getter: ValueGetter<T, K>,
    /// The currently selected item. Takes precedence over `default_value`.
    pub selected_value: Option<T>,
    pub default_value: Option<T>,
}

impl<T: Clone, K> Clone for FlatListOptions<T, K> {
    fn clone(&self) -> Self {
        Self {
            max_height: self.max_height,
            row_height: self.row_height,
            max_width: self.max_width,
            value_getter: Arc::clone(&self.value_getter),
            selected_value: self.selected_value.clone(),
            default_value: self.default_value.clone(),
        }
    }
}

impl<T> FlatListOptions<T, T::Value>
where
    T: OptionValue + 'static,
{
    /// Creates options that identify items by [`OptionValue::value`].
    pub fn new(max_height: u32, row_height: u32) -> Self {
        Self::new_with_value_getter(max_height, row_height, |item: &T| item.value())
    }
}

impl<T, K> FlatListOptions<T, K> {
    /// Creates options with a custom value getter.
    ///
    /// `value_getter(item)` must return the identity used to match the selection against the
    /// item collection. Whole items are never compared.
    pub fn new_with_value_getter(
        max_height: u32,
        row_height: u32,
        value_getter: impl Fn(&T) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            max_height,
            row_height,
            max_width: DEFAULT_MAX_WIDTH,
            value_getter: Arc::new(value_getter),
            selected_value: None,
            default_value: None,
        }
    }

    pub fn with_max_height(mut self, max_height: u32) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn with_row_height(mut self, row_height: u32) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_max_width(mut self, max_width: u32) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn with_value_getter(
        mut self,
        value_getter: impl Fn(&T) -> K + Send + Sync + 'static,
    ) -> Self {
        self.value_getter = Arc::new(value_getter);
        self
    }

    pub fn with_selected_value(mut self, selected_value: Option<T>) -> Self {
        self.selected_value = selected_value;
        self
    }

    pub fn with_default_value(mut self, default_value: Option<T>) -> Self {
        self.default_value = default_value;
        self
    }

    /// The item the list should open on: the selection, else the default.
    pub fn selection(&self) -> Option<&T> {
        self.selected_value.as_ref().or(self.default_value.as_ref())
    }

    pub fn viewport(&self, item_count: usize) -> ViewportConstraint {
        ViewportConstraint::new(self.max_height, self.row_height, item_count)
    }
}

impl<T: core::fmt::Debug, K> core::fmt::Debug for FlatListOptions<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatListOptions")
            .field("max_height", &self.max_height)
            .field("row_height", &self.row_height)
            .field("max_width", &self.max_width)
            .field("selected_value", &self.selected_value)
            .field("default_value", &self.default_value)
            .finish_non_exhaustive()
    }
}
