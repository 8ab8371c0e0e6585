//! Utilities for sorting and rendering sets.

use crate::prelude::*;

/// Whether a character may appear within a path segment of a type name.
fn is_ident(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// The name of a type with every module path stripped, as used in the textual form of a
/// [`Set`](crate::Set).
///
/// Paths are stripped hereditarily, so `alloc::vec::Vec<alloc::string::String>` becomes
/// `Vec<String>`. This is built on [`std::any::type_name`], so the output is best-effort and may
/// differ between compiler versions.
#[must_use]
pub fn type_tag<T: ?Sized>() -> String {
    let name = std::any::type_name::<T>();
    let mut tag = String::with_capacity(name.len());
    let mut segment = String::new();

    for c in name.chars() {
        if is_ident(c) {
            segment.push(c);
        } else if c == ':' {
            // Whatever came before `::` was a module path.
            segment.clear();
        } else {
            tag.push_str(&segment);
            tag.push(c);
            segment.clear();
        }
    }

    tag.push_str(&segment);
    tag
}

/// Stably sorts the indices `0..len` by a comparison between indices, through a bottom-up merge
/// sort.
///
/// Every index is returned exactly once, whatever `cmp` does. A comparison which isn't a strict
/// weak ordering only makes the resulting order unspecified.
pub(crate) fn sort_indices<F: FnMut(usize, usize) -> Ordering>(
    len: usize,
    mut cmp: F,
) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..len).collect();
    let mut buf = vec![0; len];

    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = start.saturating_add(width).min(len);
            let end = mid.saturating_add(width).min(len);

            // Merge `idx[start..mid]` and `idx[mid..end]`. Taking from the right run only when it
            // is strictly smaller keeps the sort stable.
            let (mut i, mut j) = (start, mid);
            for slot in &mut buf[start..end] {
                if j < end && (i >= mid || cmp(idx[j], idx[i]) == Ordering::Less) {
                    *slot = idx[j];
                    j += 1;
                } else {
                    *slot = idx[i];
                    i += 1;
                }
            }

            start = end;
        }

        std::mem::swap(&mut idx, &mut buf);
        width = width.saturating_mul(2);
    }

    idx
}

/// Rearranges a list so that its i-th entry is the `order[i]`-th entry of the original.
fn permute<T: Copy>(list: &mut [T], order: &[usize]) {
    let sorted: SmallVec<T> = order.iter().map(|&i| list[i]).collect();
    list.copy_from_slice(&sorted);
}

/// Stably sorts a list with a comparison function. See [`sort_indices`].
pub(crate) fn stable_sort_by<T: Copy, F>(list: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let order = sort_indices(list.len(), |i, j| cmp(&list[i], &list[j]));
    permute(list, &order);
}

/// Stably sorts a list by a key, computed once per entry. See [`sort_indices`].
pub(crate) fn stable_sort_by_cached_key<T: Copy, K: Ord, F>(list: &mut [T], key: F)
where
    F: FnMut(T) -> K,
{
    let keys: SmallVec<K> = list.iter().copied().map(key).collect();
    let order = sort_indices(list.len(), |i, j| keys[i].cmp(&keys[j]));
    permute(list, &order);
}
