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

//! Multimaps for grouping items by one or more keys.
//!
//! # Overview
//!
//! A [`Multimap`] associates each key with a bucket of values. The bucket type decides what
//! happens when the same value arrives for a key twice:
//!
//! * [`ListMultimap`] (`Vec` buckets) keeps every value in the order it was inserted.
//! * [`SetMultimap`] (`HashSet` buckets) keeps each distinct value once.
//!
//! Any type implementing [`Bucket`] can serve as a bucket, including `BTreeSet` and caller
//! defined collections.
//!
//! Items are grouped with either a single key per item ([`Multimap::group_by`]) or any number
//! of keys per item ([`Multimap::group_by_each`]). Keys iterate in discovery order, and a key
//! is only present while its bucket holds at least one value.
//!
//! # Examples
//!
//! ```
//! # use std::collections::HashSet;
//! # use aggregates::multimap::Multimap;
//! let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
//! let by_initial = Multimap::group_by(words, |w| w.chars().next());
//! assert_eq!(by_initial.get(&Some('b')), Some(&vec!["banana", "blueberry"]));
//!
//! let letters = Multimap::group_by_each(words, |w| w.chars().collect::<Vec<_>>(), HashSet::new);
//! assert_eq!(letters.bucket_len(&'a'), 3);
//! ```

mod bucket;
mod map;

pub use self::bucket::Bucket;
pub use self::map::ListMultimap;
pub use self::map::Multimap;
pub use self::map::SetMultimap;
