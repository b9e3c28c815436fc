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

use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::bag::HashBag;
use crate::multimap::bucket::Bucket;

/// Multimap whose buckets keep every value in insertion order.
pub type ListMultimap<K, V> = Multimap<K, Vec<V>>;

/// Multimap whose buckets keep each distinct value once.
pub type SetMultimap<K, V> = Multimap<K, HashSet<V>>;

/// Mapping from keys to buckets of values.
///
/// See [`crate::multimap`] for an overview.
#[derive(Debug, Clone)]
pub struct Multimap<K, B> {
    buckets: IndexMap<K, B>,
    size: usize,
}

impl<K, B> Default for Multimap<K, B> {
    fn default() -> Self {
        Self {
            buckets: IndexMap::new(),
            size: 0,
        }
    }
}

impl<K: Eq + Hash, B> Multimap<K, B> {
    /// Creates an empty multimap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty multimap with room for at least `capacity` distinct keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: IndexMap::with_capacity(capacity),
            size: 0,
        }
    }

    /// Returns true if the multimap holds no values.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Returns the total number of values across all buckets.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of distinct keys.
    pub fn size_distinct(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the bucket for `key`, or `None` if no value was stored under it.
    pub fn get<Q>(&self, key: &Q) -> Option<&B>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets.get(key)
    }

    /// Returns true if at least one value is stored under `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets.contains_key(key)
    }

    /// Returns an iterator over keys, in discovery order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.buckets.keys()
    }

    /// Returns an iterator over keys and their buckets, in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &B)> {
        self.buckets.iter()
    }
}

impl<K: Eq + Hash, B: Bucket> Multimap<K, B> {
    /// Groups `items` under every key `keys_fn` produces for them.
    ///
    /// For each (item, key) pair the item is inserted into the key's bucket. The bucket for a
    /// key is created with `empty_bucket` the first time the key is produced, so the factory
    /// decides whether an item produced twice under the same key is recorded once (set
    /// buckets) or twice (list buckets).
    ///
    /// ```
    /// # use std::collections::HashSet;
    /// # use aggregates::multimap::Multimap;
    /// let tags = [("a", vec!["x", "y", "x"]), ("b", vec!["x"])];
    /// let by_tag = Multimap::group_by_each(tags.clone(), |(_, t)| t.clone(), HashSet::new);
    /// assert_eq!(by_tag.bucket_len("x"), 2);
    ///
    /// let listed = Multimap::group_by_each(tags, |(_, t)| t.clone(), Vec::new);
    /// assert_eq!(listed.bucket_len("x"), 3);
    /// ```
    pub fn group_by_each<I, F, KI>(items: I, mut keys_fn: F, empty_bucket: impl Fn() -> B) -> Self
    where
        I: IntoIterator<Item = B::Value>,
        B::Value: Clone,
        F: FnMut(&B::Value) -> KI,
        KI: IntoIterator<Item = K>,
    {
        let mut multimap = Self::new();
        for item in items {
            for key in keys_fn(&item) {
                multimap.put_with(key, item.clone(), &empty_bucket);
            }
        }
        tracing::trace!(
            keys = multimap.size_distinct(),
            values = multimap.size(),
            "grouped items by each key"
        );
        multimap
    }

    /// Groups `items` under every key of a fallible key extraction.
    ///
    /// The first error returned by `keys_fn` is returned unchanged; the groups built so far
    /// are discarded.
    pub fn try_group_by_each<I, F, KI, E>(
        items: I,
        mut keys_fn: F,
        empty_bucket: impl Fn() -> B,
    ) -> Result<Self, E>
    where
        I: IntoIterator<Item = B::Value>,
        B::Value: Clone,
        F: FnMut(&B::Value) -> Result<KI, E>,
        KI: IntoIterator<Item = K>,
    {
        let mut multimap = Self::new();
        for item in items {
            for key in keys_fn(&item)? {
                multimap.put_with(key, item.clone(), &empty_bucket);
            }
        }
        Ok(multimap)
    }

    /// Inserts `value` under `key`, returning true if the key's bucket changed.
    pub fn put(&mut self, key: K, value: B::Value) -> bool
    where
        B: Default,
    {
        self.put_with(key, value, B::default)
    }

    /// Returns the number of values stored under `key`, or zero if there are none.
    pub fn bucket_len<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets.get(key).map_or(0, Bucket::len)
    }

    /// Removes `key` and returns its bucket.
    ///
    /// Values put under the key later start a new bucket, discovered after all existing keys.
    pub fn remove_all<Q>(&mut self, key: &Q) -> Option<B>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let bucket = self.buckets.shift_remove(key)?;
        self.size -= bucket.len();
        Some(bucket)
    }

    /// Returns a bag counting the values stored under each key.
    ///
    /// For a multimap built by [`Multimap::group_by`], this equals the bag built by
    /// [`HashBag::count_by`] with the same key function.
    pub fn count_values(&self) -> HashBag<K>
    where
        K: Clone,
    {
        let mut counts = HashBag::with_capacity(self.size_distinct());
        for (key, bucket) in self.iter() {
            counts.add_occurrences(key.clone(), bucket.len());
        }
        counts
    }

    fn put_with(&mut self, key: K, value: B::Value, empty_bucket: impl FnOnce() -> B) -> bool {
        let inserted = match self.buckets.entry(key) {
            Entry::Occupied(mut entry) => entry.get_mut().insert(value),
            Entry::Vacant(entry) => {
                let mut bucket = empty_bucket();
                let inserted = bucket.insert(value);
                if inserted {
                    entry.insert(bucket);
                }
                inserted
            }
        };
        if inserted {
            self.size += 1;
        }
        inserted
    }
}

impl<K: Eq + Hash, V> Multimap<K, Vec<V>> {
    /// Groups `items` by the key `key_fn` extracts from each one.
    ///
    /// Each item lands in exactly one bucket. Buckets keep the items in the order they were
    /// encountered.
    ///
    /// ```
    /// # use aggregates::multimap::Multimap;
    /// let by_parity = Multimap::group_by(1..=5, |n| n % 2 == 0);
    /// assert_eq!(by_parity.get(&false), Some(&vec![1, 3, 5]));
    /// assert_eq!(by_parity.get(&true), Some(&vec![2, 4]));
    /// ```
    pub fn group_by<I, F>(items: I, mut key_fn: F) -> Self
    where
        I: IntoIterator<Item = V>,
        F: FnMut(&V) -> K,
    {
        let mut multimap = Self::new();
        for item in items {
            let key = key_fn(&item);
            multimap.put(key, item);
        }
        multimap
    }

    /// Groups `items` by a fallible key extraction.
    ///
    /// The first error returned by `key_fn` is returned unchanged; the groups built so far
    /// are discarded.
    pub fn try_group_by<I, F, E>(items: I, mut key_fn: F) -> Result<Self, E>
    where
        I: IntoIterator<Item = V>,
        F: FnMut(&V) -> Result<K, E>,
    {
        let mut multimap = Self::new();
        for item in items {
            let key = key_fn(&item)?;
            multimap.put(key, item);
        }
        Ok(multimap)
    }
}

impl<K: Eq + Hash, B: PartialEq> PartialEq for Multimap<K, B> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self.size_distinct() == other.size_distinct()
            && self
                .iter()
                .all(|(key, bucket)| other.get(key) == Some(bucket))
    }
}

impl<K: Eq + Hash, B: Eq> Eq for Multimap<K, B> {}
