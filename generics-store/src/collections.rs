//! Transformations over slices and hash maps.
//!
//! None of these functions modify their input, a new collection is always returned.
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Apply `f` to every value, in order.
/// ```
/// # use generics_store::collections::slice_map;
/// let output = slice_map(&[1, 2, 3], |x| x * 10);
/// assert_eq!(vec![10, 20, 30], output);
/// ```
pub fn slice_map<X, Y, F>(data: &[X], f: F) -> Vec<Y>
where
    F: FnMut(&X) -> Y,
{
    data.iter().map(f).collect()
}

/// Keep the first occurrence of every value, dropping any later duplicates.
/// The order of the retained values is preserved.
pub fn slice_dedup<T>(data: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(data.len());
    data.iter().filter(|value| seen.insert(*value)).cloned().collect()
}

/// Same as [`slice_dedup`] but two values are considered duplicates if
/// `key_fn` produces the same key for both of them.
/// The first value to produce a key is the one retained.
/// ```
/// # use generics_store::collections::slice_dedup_key;
/// let output = slice_dedup_key(&["apple", "banana", "avocado"], |s| s.chars().next());
/// assert_eq!(vec!["apple", "banana"], output);
/// ```
pub fn slice_dedup_key<T, K, F>(data: &[T], mut key_fn: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::with_capacity(data.len());
    data.iter().filter(|value| seen.insert(key_fn(*value))).cloned().collect()
}

/// Apply `f` to every value in the map, keeping the keys as they are.
pub fn map_map<K, X, Y, F>(data: &HashMap<K, X>, mut f: F) -> HashMap<K, Y>
where
    K: Eq + Hash + Clone,
    F: FnMut(&X) -> Y,
{
    data.iter().map(|(key, value)| (key.clone(), f(value))).collect()
}
