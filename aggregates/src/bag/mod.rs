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

//! Bags (multisets) for counting items by key.
//!
//! # Overview
//!
//! A [`HashBag`] maps each distinct key to the number of times it was added. It is the
//! counting counterpart of a [`Multimap`](crate::multimap::Multimap): where a multimap keeps
//! every item that produced a key, a bag keeps only how many did, so building one costs a
//! single hash lookup per item.
//!
//! This implementation provides the following capabilities:
//! * Count the items of a sequence by an extracted key, see [`HashBag::count_by`].
//! * Query the occurrences of any key; absent keys have zero occurrences.
//! * Rank keys by count, see [`HashBag::top_occurrences`] and [`HashBag::bottom_occurrences`].
//! * Merge with another bag, or filter keys by their counts.
//!
//! # Ordering
//!
//! Keys iterate in discovery order, the order in which they were first added. The same order
//! breaks ties when ranking: among keys with equal counts, the one discovered first ranks
//! first. Rankings are therefore reproducible for the same input sequence.
//!
//! # Examples
//!
//! ```
//! # use aggregates::bag::HashBag;
//! let animals = ["cat", "dog", "cat", "bird", "dog", "cat"];
//! let bag = HashBag::count_by(animals, |animal| animal);
//! assert_eq!(bag.occurrences_of(&"cat"), 3);
//! assert_eq!(bag.occurrences_of(&"snake"), 0);
//!
//! let top = bag.top_occurrences(2);
//! assert_eq!(*top[0].item(), "cat");
//! assert_eq!(top[1].count(), 2);
//! ```

mod hash_bag;
mod ranking;

pub use self::hash_bag::HashBag;
pub use self::ranking::Occurrence;
