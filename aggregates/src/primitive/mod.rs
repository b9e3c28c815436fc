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

//! Primitive integer sequences and their summary statistics.
//!
//! # Overview
//!
//! [`IntSequence`] holds `i32` values extracted from a sequence of items, one value per item
//! and in item order. It answers the usual numeric queries without boxing:
//!
//! * `min`, `max`, `average` and `median`, which fail with
//!   [`ErrorKind::EmptySequence`](crate::error::ErrorKind::EmptySequence) on an empty sequence
//!   rather than producing a sentinel or `NaN`.
//! * `sum`, accumulated in `i64` so it does not wrap on large inputs.
//! * Short-circuiting predicate scans: `all_satisfy`, `any_satisfy` and `none_satisfy`.
//! * Conversion to an [`IntSet`] of distinct values.
//!
//! [`IntSummaryStatistics`] gathers count, sum, minimum, maximum and average in a single pass
//! and can be fed value by value.
//!
//! # Examples
//!
//! ```
//! # use aggregates::primitive::IntSequence;
//! let ages = IntSequence::collect_int(["ada:36", "alan:41", "grace:36"], |s| {
//!     s.split(':').nth(1).map_or(0, |age| age.parse().unwrap_or(0))
//! });
//! assert_eq!(ages.max().unwrap(), 41);
//! assert_eq!(ages.sum(), 113);
//! assert_eq!(ages.median().unwrap(), 36.0);
//! assert_eq!(ages.to_set().len(), 2);
//! ```

use std::collections::HashSet;

mod int_sequence;
mod statistics;

pub use self::int_sequence::IntSequence;
pub use self::statistics::IntSummaryStatistics;

/// Set of distinct `i32` values.
pub type IntSet = HashSet<i32>;
