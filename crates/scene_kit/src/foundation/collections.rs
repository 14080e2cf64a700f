//! Slice and vector helpers

use log::warn;

/// Returns `true` if any element of `items` equals `item`.
pub fn contains_item<T: PartialEq>(items: &[T], item: &T) -> bool {
    items.iter().any(|existing| existing == item)
}

/// Append clones of `new_items` to the end of `items`.
///
/// An empty `new_items` is reported as a warning and leaves `items` untouched.
pub fn append_items<T: Clone>(items: &mut Vec<T>, new_items: &[T]) {
    if new_items.is_empty() {
        warn!("New items slice is empty, nothing appended");
        return;
    }
    items.extend_from_slice(new_items);
}

/// Concatenate `parts` into a single vector, preserving order.
pub fn concat_slices<T: Clone>(parts: &[&[T]]) -> Vec<T> {
    let total_len = parts.iter().map(|part| part.len()).sum();
    let mut result = Vec::with_capacity(total_len);
    for part in parts {
        result.extend_from_slice(part);
    }
    result
}
