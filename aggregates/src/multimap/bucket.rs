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

use std::collections::BTreeSet;
use std::collections::HashSet;
use std::hash::BuildHasher;
use std::hash::Hash;

/// Collection of values stored under a single multimap key.
///
/// The bucket type decides the duplicate semantics of a multimap: a list bucket records a
/// value every time it is inserted, a set bucket records it once.
pub trait Bucket {
    /// The value type held by the bucket.
    type Value;

    /// Inserts a value, returning true if the bucket changed.
    ///
    /// A bucket that rejects the first value offered under a key is not stored.
    fn insert(&mut self, value: Self::Value) -> bool;

    /// Returns the number of values in the bucket.
    fn len(&self) -> usize;

    /// Returns true if the bucket holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V> Bucket for Vec<V> {
    type Value = V;

    fn insert(&mut self, value: V) -> bool {
        self.push(value);
        true
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<V: Eq + Hash, S: BuildHasher> Bucket for HashSet<V, S> {
    type Value = V;

    fn insert(&mut self, value: V) -> bool {
        HashSet::insert(self, value)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl<V: Ord> Bucket for BTreeSet<V> {
    type Value = V;

    fn insert(&mut self, value: V) -> bool {
        BTreeSet::insert(self, value)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}
