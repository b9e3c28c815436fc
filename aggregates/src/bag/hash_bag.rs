// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Hash-based bag implementation.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::bag::ranking::Occurrence;
use crate::bag::ranking::Rank;
use crate::bag::ranking::rank;

/// Multiset of keys with their occurrence counts.
///
/// Keys with zero occurrences are never stored. The total number of occurrences always
/// equals the number of keys added minus the number removed.
///
/// See [`crate::bag`] for an overview and the ordering guarantees.
#[derive(Debug, Clone)]
pub struct HashBag<K> {
    counts: IndexMap<K, usize>,
    size: usize,
}

impl<K> Default for HashBag<K> {
    fn default() -> Self {
        Self {
            counts: IndexMap::new(),
            size: 0,
        }
    }
}

impl<K: Eq + Hash> HashBag<K> {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty bag with room for at least `capacity` distinct keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: IndexMap::with_capacity(capacity),
            size: 0,
        }
    }

    /// Counts `items` by the key `key_fn` extracts from each one.
    ///
    /// Each item contributes exactly one occurrence of its key; no per-key collection of
    /// items is built.
    ///
    /// ```
    /// # use aggregates::bag::HashBag;
    /// let bag = HashBag::count_by(1..=10, |n| n % 3);
    /// assert_eq!(bag.occurrences_of(&1), 4);
    /// assert_eq!(bag.size(), 10);
    /// ```
    pub fn count_by<I, F>(items: I, mut key_fn: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> K,
    {
        let mut bag = Self::new();
        for item in items {
            bag.add(key_fn(item));
        }
        bag
    }

    /// Counts `items` by a fallible key extraction.
    ///
    /// The first error returned by `key_fn` is returned unchanged; the counts gathered so far
    /// are discarded.
    pub fn try_count_by<I, F, E>(items: I, mut key_fn: F) -> Result<Self, E>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Result<K, E>,
    {
        let mut bag = Self::new();
        for item in items {
            bag.add(key_fn(item)?);
        }
        Ok(bag)
    }

    /// Returns true if the bag holds no keys.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the total number of occurrences of all keys.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of distinct keys.
    pub fn size_distinct(&self) -> usize {
        self.counts.len()
    }

    /// Returns the number of occurrences of `key`, or zero if it is not in the bag.
    pub fn occurrences_of<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Returns true if `key` occurs at least once.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.contains_key(key)
    }

    /// Adds one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        self.add_occurrences(key, 1);
    }

    /// Adds `count` occurrences of `key`.
    ///
    /// A count of zero is a no-op.
    pub fn add_occurrences(&mut self, key: K, count: usize) {
        if count == 0 {
            return;
        }
        *self.counts.entry(key).or_insert(0) += count;
        self.size += count;
    }

    /// Removes up to `count` occurrences of `key`.
    ///
    /// The key is dropped from the bag once its count reaches zero; adding it again later
    /// discovers it anew. Returns true if any occurrence was removed.
    pub fn remove_occurrences<Q>(&mut self, key: &Q, count: usize) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if count == 0 {
            return false;
        }
        let Some(current) = self.counts.get_mut(key) else {
            return false;
        };
        let removed = count.min(*current);
        *current -= removed;
        if *current == 0 {
            self.counts.shift_remove(key);
        }
        self.size -= removed;
        true
    }

    /// Returns an iterator over distinct keys and their counts, in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(key, count)| (key, *count))
    }

    /// Returns an iterator over distinct keys, in discovery order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.counts.keys()
    }

    /// Returns the `n` keys with the highest counts, highest first.
    ///
    /// The result holds `min(n, size_distinct())` rows. Keys with equal counts are ordered by
    /// discovery, so the result is deterministic for a given insertion sequence. Every
    /// returned count is at least as large as the count of any key left out.
    pub fn top_occurrences(&self, n: usize) -> Vec<Occurrence<K>>
    where
        K: Clone,
    {
        tracing::trace!(
            n,
            distinct = self.size_distinct(),
            "ranking top occurrences"
        );
        rank(self.iter(), n, Rank::Top)
    }

    /// Returns the `n` keys with the lowest counts, lowest first.
    ///
    /// Ties are broken by discovery order, as for [`HashBag::top_occurrences`].
    pub fn bottom_occurrences(&self, n: usize) -> Vec<Occurrence<K>>
    where
        K: Clone,
    {
        tracing::trace!(
            n,
            distinct = self.size_distinct(),
            "ranking bottom occurrences"
        );
        rank(self.iter(), n, Rank::Bottom)
    }

    /// Returns a new bag with the keys whose counts satisfy `predicate`.
    pub fn select_by_occurrences<P>(&self, mut predicate: P) -> Self
    where
        K: Clone,
        P: FnMut(usize) -> bool,
    {
        let mut selected = Self::new();
        for (key, count) in self.iter() {
            if predicate(count) {
                selected.add_occurrences(key.clone(), count);
            }
        }
        selected
    }

    /// Merges another bag into this one.
    ///
    /// Keys new to this bag are discovered in the other bag's order, after all existing keys.
    pub fn merge(&mut self, other: &Self)
    where
        K: Clone,
    {
        for (key, count) in other.iter() {
            self.add_occurrences(key.clone(), count);
        }
    }

    /// Copies the counts into a standard map.
    pub fn to_map(&self) -> HashMap<K, usize>
    where
        K: Clone,
    {
        self.iter()
            .map(|(key, count)| (key.clone(), count))
            .collect()
    }
}

impl<K: Eq + Hash> PartialEq for HashBag<K> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self.size_distinct() == other.size_distinct()
            && self
                .iter()
                .all(|(key, count)| other.occurrences_of(key) == count)
    }
}

impl<K: Eq + Hash> Eq for HashBag<K> {}

impl<K: Eq + Hash> FromIterator<K> for HashBag<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

impl<K: Eq + Hash> Extend<K> for HashBag<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}
