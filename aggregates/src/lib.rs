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

//! In-memory grouping and aggregation over caller-owned sequences.
//!
//! This crate answers the small set of questions usually asked of a list of records:
//!
//! * How many records fall under each key? See [`bag::HashBag`].
//! * Which records fall under each key, possibly under several keys at once? See
//!   [`multimap::Multimap`].
//! * Which keys are the most (or least) frequent? See [`bag::HashBag::top_occurrences`].
//! * What are the minimum, maximum, sum, average and median of a numeric attribute? See
//!   [`primitive::IntSequence`].
//!
//! Every operation reads its input once and returns a freshly owned result. Items are never
//! mutated, and extraction functions are plain closures. Fallible extraction is supported by
//! the `try_*` variants, which return the extractor's own error unchanged and never expose a
//! partially built result.
//!
//! # Examples
//!
//! ```
//! # use std::collections::HashSet;
//! # use aggregates::bag::HashBag;
//! # use aggregates::multimap::Multimap;
//! # use aggregates::primitive::IntSequence;
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! struct Book {
//!     title: &'static str,
//!     genres: Vec<&'static str>,
//!     pages: i32,
//! }
//!
//! let books = vec![
//!     Book { title: "Dune", genres: vec!["scifi", "classic"], pages: 412 },
//!     Book { title: "Emma", genres: vec!["classic"], pages: 474 },
//!     Book { title: "Hyperion", genres: vec!["scifi"], pages: 482 },
//! ];
//!
//! let genres = HashBag::count_by(books.iter().flat_map(|b| &b.genres), |g| *g);
//! assert_eq!(genres.occurrences_of(&"classic"), 2);
//!
//! let by_genre = Multimap::group_by_each(&books, |b| b.genres.clone(), HashSet::new);
//! assert_eq!(by_genre.bucket_len("scifi"), 2);
//!
//! let pages = IntSequence::collect_int(&books, |b| b.pages);
//! assert_eq!(pages.median().unwrap(), 474.0);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod bag;
pub mod error;
pub mod multimap;
pub mod primitive;

mod assert;
