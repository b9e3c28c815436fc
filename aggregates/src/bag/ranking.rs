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

//! Ranking of bag entries by occurrence count.

use std::cmp::Reverse;

/// Result row for occurrence ranking queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Occurrence<K> {
    item: K,
    count: usize,
}

impl<K> Occurrence<K> {
    pub(crate) fn new(item: K, count: usize) -> Self {
        Self { item, count }
    }

    /// Returns the key.
    pub fn item(&self) -> &K {
        &self.item
    }

    /// Returns the number of occurrences of the key.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Consumes the row, returning the key and its count.
    pub fn into_parts(self) -> (K, usize) {
        (self.item, self.count)
    }
}

/// Direction of a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Rank {
    /// Highest counts first.
    Top,
    /// Lowest counts first.
    Bottom,
}

/// Selects the first `n` entries of `entries` ordered by count in the given direction.
///
/// `entries` must be in discovery order. The sort is stable, so entries with equal counts
/// keep their discovery order.
pub(super) fn rank<'a, K, I>(entries: I, n: usize, direction: Rank) -> Vec<Occurrence<K>>
where
    K: Clone + 'a,
    I: IntoIterator<Item = (&'a K, usize)>,
{
    if n == 0 {
        return vec![];
    }
    let mut rows: Vec<(&K, usize)> = entries.into_iter().collect();
    match direction {
        Rank::Top => rows.sort_by_key(|(_, count)| Reverse(*count)),
        Rank::Bottom => rows.sort_by_key(|(_, count)| *count),
    }
    rows.truncate(n);
    rows.into_iter()
        .map(|(item, count)| Occurrence::new(item.clone(), count))
        .collect()
}
