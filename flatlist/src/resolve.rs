/// Returns the index of the item that should be scrolled into view initially.
///
/// The target is `selected` when present, otherwise `fallback`. Items are matched by comparing
/// `key_of(item)` with `key_of(target)`; the first match wins when keys repeat. Returns `None`
/// when there is no target or nothing matches.
pub fn resolve_index<T, K: PartialEq>(
    items: &[T],
    selected: Option<&T>,
    fallback: Option<&T>,
    key_of: impl Fn(&T) -> K,
) -> Option<usize> {
    let target = selected.or(fallback)?;
    let key = key_of(target);
    resolve_index_by_key(items, &key, key_of)
}

/// Returns the index of the first item whose key equals `key`.
pub fn resolve_index_by_key<T, K: PartialEq>(
    items: &[T],
    key: &K,
    key_of: impl Fn(&T) -> K,
) -> Option<usize> {
    let index = items.iter().position(|item| key_of(item) == *key);
    vtrace!(count = items.len(), ?index, "resolve_index_by_key");
    index
}
