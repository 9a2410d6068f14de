/// Bound for values produced by a value getter.
///
/// Keys are only ever compared for equality; they are never hashed or ordered.
pub trait SelectionKey: PartialEq {}
impl<T: PartialEq> SelectionKey for T {}

/// An item that carries a comparable `value`.
///
/// This is the default value getter used by [`crate::FlatListOptions::new`]: two items refer to
/// the same option when their values are equal, regardless of the rest of their fields.
pub trait OptionValue {
    type Value: SelectionKey;

    fn value(&self) -> Self::Value;
}
