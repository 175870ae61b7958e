//! Ordered keyed collection.
//!
//! [`Collection`] keeps entries in insertion order and addresses them by
//! [`Key`]. Positional entries receive the next free index when pushed, which
//! is always one past the highest index ever stored (until [`Collection::clear`]),
//! so removing an entry never causes a later push to reuse its index. The next
//! index saturates at `usize::MAX`; once that index is taken, a push replaces
//! the value stored there.
//!
//! # Key Preservation
//!
//! | Operation | Keys |
//! |-----------|------|
//! | `filter`, `map`, `slice`, `sort_*` | preserved |
//! | `every`, `merge`, `shift`, `splice` | positional keys renumbered from zero |
//! | `extend` | positional entries appended, named entries inserted |

use indexmap::IndexMap;
use std::cmp::Ordering;

use crate::key::Key;

/// An ordered collection of values addressed by positional or named keys.
///
/// # Example
///
/// ```
/// use kitbag_collection::{Collection, Key};
///
/// let mut items = Collection::new();
/// items.push(123);
/// items.push(456);
/// items.insert("foo", 789);
///
/// assert_eq!(items.len(), 3);
/// assert_eq!(items.get(0), Some(&123));
/// assert_eq!(items.get("foo"), Some(&789));
///
/// items.remove(0);
/// assert_eq!(items.push(1), Key::Index(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<V> {
    entries: IndexMap<Key, V>,
    next_index: usize,
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
            next_index: 0,
        }
    }
}

impl<V> Collection<V> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a positional collection from a sequence of values.
    pub fn from_values<I: IntoIterator<Item = V>>(values: I) -> Self {
        values.into_iter().collect()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Alias of [`len`](Self::len).
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the collection has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a value under the next free index and returns its key.
    pub fn push(&mut self, value: V) -> Key {
        let key = Key::Index(self.next_index);
        self.next_index = self.next_index.saturating_add(1);
        self.entries.insert(key.clone(), value);
        key
    }

    /// Inserts a value under `key`, replacing (in place) any existing entry.
    ///
    /// Returns the previous value if one existed.
    pub fn insert(&mut self, key: impl Into<Key>, value: V) -> Option<V> {
        let key = key.into();
        if let Key::Index(i) = key {
            self.next_index = self.next_index.max(i.saturating_add(1));
        }
        self.entries.insert(key, value)
    }

    /// Adds every entry of `other`: positional entries are pushed, named
    /// entries are inserted.
    pub fn extend(&mut self, other: Collection<V>) {
        for (key, value) in other.entries {
            match key {
                Key::Index(_) => {
                    self.push(value);
                }
                Key::Name(_) => {
                    self.insert(key, value);
                }
            }
        }
    }

    /// Gets the value stored under `key`.
    pub fn get(&self, key: impl Into<Key>) -> Option<&V> {
        self.entries.get(&key.into())
    }

    /// Gets a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut V> {
        self.entries.get_mut(&key.into())
    }

    /// Returns `true` if an entry exists under `key`.
    pub fn has(&self, key: impl Into<Key>) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Removes the entry under `key`, preserving the order of the others.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<V> {
        self.entries.shift_remove(&key.into())
    }

    /// Removes every entry and resets positional numbering.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_index = 0;
    }

    /// Returns the first value.
    pub fn first(&self) -> Option<&V> {
        self.entries.first().map(|(_, v)| v)
    }

    /// Returns the last value.
    pub fn last(&self) -> Option<&V> {
        self.entries.last().map(|(_, v)| v)
    }

    /// Removes and returns the last value.
    pub fn pop(&mut self) -> Option<V> {
        let value = self.entries.pop().map(|(_, v)| v);
        self.next_index = self.max_index().map_or(0, |i| i.saturating_add(1));
        value
    }

    /// Removes and returns the first value, renumbering positional keys.
    pub fn shift(&mut self) -> Option<V> {
        let value = self.entries.shift_remove_index(0).map(|(_, v)| v);
        self.reindex();
        value
    }

    /// Iterates over the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// Iterates over the values in order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    /// Consumes the collection, returning its values in order.
    pub fn into_values(self) -> Vec<V> {
        self.entries.into_values().collect()
    }

    /// Iterates over `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &V)> {
        self.entries.iter()
    }

    /// Iterates over `(key, value)` pairs with mutable values.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Key, &mut V)> {
        self.entries.iter_mut()
    }

    /// Calls `f` for each entry until it returns `false`.
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&Key, &V) -> bool,
    {
        for (key, value) in &self.entries {
            if !f(key, value) {
                break;
            }
        }
        self
    }

    /// Returns `true` if the keys are exactly `0..len` in order.
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(i, key)| *key == Key::Index(i))
    }

    /// Renumbers positional keys from zero, leaving named keys untouched.
    pub fn reindex(&mut self) {
        let entries = std::mem::take(&mut self.entries);
        self.next_index = 0;
        for (key, value) in entries {
            self.append(key, value);
        }
    }

    /// Removes `length` entries starting at position `offset` and inserts the
    /// `replacement` values in their place. `None` removes everything after
    /// `offset`; an `offset` past the end appends.
    ///
    /// Positional keys of both the remaining and the removed entries are
    /// renumbered from zero. Named keys are kept.
    ///
    /// ```
    /// use kitbag_collection::Collection;
    ///
    /// let mut c = Collection::from_values(vec!["a", "b", "c", "d"]);
    /// let removed = c.splice(1, Some(2), vec!["x"]);
    /// assert_eq!(removed.to_vec(), vec!["b", "c"]);
    /// assert_eq!(c.to_vec(), vec!["a", "x", "d"]);
    /// assert!(c.is_list());
    /// ```
    pub fn splice<I>(&mut self, offset: usize, length: Option<usize>, replacement: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let end = length.map_or(usize::MAX, |length| offset.saturating_add(length));
        let entries = std::mem::take(&mut self.entries);
        self.next_index = 0;

        let mut removed = Self::new();
        let mut replacement = Some(replacement);
        for (position, (key, value)) in entries.into_iter().enumerate() {
            if position == offset {
                self.push_all(replacement.take());
            }
            if (offset..end).contains(&position) {
                removed.append(key, value);
            } else {
                self.append(key, value);
            }
        }
        self.push_all(replacement);
        removed
    }

    fn push_all<I: IntoIterator<Item = V>>(&mut self, values: Option<I>) {
        for value in values.into_iter().flatten() {
            self.push(value);
        }
    }

    fn append(&mut self, key: Key, value: V) {
        match key {
            Key::Index(_) => {
                self.push(value);
            }
            Key::Name(_) => {
                self.entries.insert(key, value);
            }
        }
    }

    fn max_index(&self) -> Option<usize> {
        self.entries.keys().filter_map(Key::as_index).max()
    }
}

impl<V: Clone> Collection<V> {
    /// Returns every `step`-th value starting at position `offset`, as a new
    /// positional collection.
    ///
    /// A `step` of zero yields an empty collection.
    pub fn every(&self, step: usize, offset: usize) -> Self {
        if step == 0 {
            return Self::new();
        }
        self.entries
            .values()
            .enumerate()
            .filter(|(position, _)| position % step == offset)
            .map(|(_, v)| v.clone())
            .collect()
    }

    /// Returns the entries for which `predicate` holds, keys preserved.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Key, &V) -> bool,
    {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(k, v)| predicate(k, v))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            next_index: self.next_index,
        }
    }

    /// Returns the entries whose keys are positions `offset..offset+length`,
    /// keys preserved. `None` takes everything after `offset`.
    pub fn slice(&self, offset: usize, length: Option<usize>) -> Self {
        let take = length.unwrap_or(usize::MAX);
        Self {
            entries: self
                .entries
                .iter()
                .skip(offset)
                .take(take)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            next_index: self.next_index,
        }
    }

    /// Returns page `page` (1-based) of `per_page` entries.
    pub fn for_page(&self, page: usize, per_page: usize) -> Self {
        let offset = page.saturating_sub(1).saturating_mul(per_page);
        self.slice(offset, Some(per_page))
    }

    /// Combines two collections: positional keys are renumbered and appended,
    /// named keys from `other` overwrite those in `self`.
    pub fn merge(&self, other: &Collection<V>) -> Self {
        let mut merged = self.clone();
        merged.reindex();
        merged.extend(other.clone());
        merged
    }

    /// Returns a copy sorted with `compare`, keys preserved.
    pub fn sort_by<F>(&self, mut compare: F) -> Self
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        let mut sorted = self.clone();
        sorted.entries.sort_by(|_, a, _, b| compare(a, b));
        sorted
    }

    /// Returns a copy sorted by the key `f` extracts from each value, keys
    /// preserved. The sort is stable.
    pub fn sort_by_key<K, F>(&self, mut f: F) -> Self
    where
        K: Ord,
        F: FnMut(&V) -> K,
    {
        self.sort_by(|a, b| f(a).cmp(&f(b)))
    }

    /// Returns a copy ordered by entry key: positional keys first in
    /// ascending order, then names in lexical order.
    pub fn sort_keys(&self) -> Self {
        let mut sorted = self.clone();
        sorted.entries.sort_keys();
        sorted
    }

    /// Returns a copy ordered by entry key, descending.
    pub fn sort_keys_desc(&self) -> Self {
        let mut sorted = self.clone();
        sorted.entries.sort_by(|a, _, b, _| b.cmp(a));
        sorted
    }

    /// Returns the values as a vector.
    pub fn to_vec(&self) -> Vec<V> {
        self.entries.values().cloned().collect()
    }
}

impl<V> Collection<V> {
    /// Returns a collection with `f` applied to every value, keys preserved.
    pub fn map<U, F>(&self, mut f: F) -> Collection<U>
    where
        F: FnMut(&Key, &V) -> U,
    {
        Collection {
            entries: self
                .entries
                .iter()
                .map(|(k, v)| (k.clone(), f(k, v)))
                .collect(),
            next_index: self.next_index,
        }
    }
}

impl<V: PartialEq> Collection<V> {
    /// Returns `true` if any entry holds `value`.
    pub fn contains(&self, value: &V) -> bool {
        self.entries.values().any(|v| v == value)
    }
}

impl<V: Clone + PartialOrd> Collection<V> {
    /// Returns a copy sorted ascending, keys preserved.
    ///
    /// Incomparable values (such as `NaN`) are treated as equal.
    pub fn sort_asc(&self) -> Self {
        self.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    /// Returns a copy sorted descending, keys preserved.
    pub fn sort_desc(&self) -> Self {
        self.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal))
    }
}

impl<V> FromIterator<V> for Collection<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut collection = Self::new();
        for value in iter {
            collection.push(value);
        }
        collection
    }
}

impl<V> FromIterator<(Key, V)> for Collection<V> {
    fn from_iter<I: IntoIterator<Item = (Key, V)>>(iter: I) -> Self {
        let mut collection = Self::new();
        for (key, value) in iter {
            collection.insert(key, value);
        }
        collection
    }
}

impl<V> From<Vec<V>> for Collection<V> {
    fn from(values: Vec<V>) -> Self {
        values.into_iter().collect()
    }
}

impl<V> IntoIterator for Collection<V> {
    type Item = (Key, V);
    type IntoIter = indexmap::map::IntoIter<Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Collection<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = indexmap::map::Iter<'a, Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
