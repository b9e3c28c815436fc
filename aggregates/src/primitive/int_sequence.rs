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

use crate::assert::ensure_non_empty;
use crate::assert::ensure_positive;
use crate::error::Error;
use crate::primitive::IntSet;
use crate::primitive::IntSummaryStatistics;

/// Ordered sequence of `i32` values.
///
/// See [`crate::primitive`] for an overview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntSequence {
    values: Vec<i32>,
}

impl IntSequence {
    /// Extracts one `i32` from each item, keeping the item order.
    pub fn collect_int<I, F>(items: I, int_fn: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> i32,
    {
        Self {
            values: items.into_iter().map(int_fn).collect(),
        }
    }

    /// Extracts one `i32` from each item with a fallible extraction.
    ///
    /// The first error returned by `int_fn` is returned unchanged.
    pub fn try_collect_int<I, F, E>(items: I, int_fn: F) -> Result<Self, E>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Result<i32, E>,
    {
        let values = items
            .into_iter()
            .map(int_fn)
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Self { values })
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the sequence holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at `index`.
    pub fn get(&self, index: usize) -> Option<i32> {
        self.values.get(index).copied()
    }

    /// Returns the values as a slice.
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// Returns an iterator over the values, in order.
    pub fn iter(&self) -> impl Iterator<Item = i32> {
        self.values.iter().copied()
    }

    /// Returns true if `value` is in the sequence.
    pub fn contains(&self, value: i32) -> bool {
        self.values.contains(&value)
    }

    /// Returns the smallest value.
    ///
    /// Fails with [`ErrorKind::EmptySequence`](crate::error::ErrorKind::EmptySequence) if the
    /// sequence is empty.
    pub fn min(&self) -> Result<i32, Error> {
        ensure_non_empty(self.len(), "min")?;
        Ok(self.iter().min().unwrap_or_default())
    }

    /// Returns the largest value.
    ///
    /// Fails with [`ErrorKind::EmptySequence`](crate::error::ErrorKind::EmptySequence) if the
    /// sequence is empty.
    pub fn max(&self) -> Result<i32, Error> {
        ensure_non_empty(self.len(), "max")?;
        Ok(self.iter().max().unwrap_or_default())
    }

    /// Returns the smallest value, or `default` if the sequence is empty.
    pub fn min_if_empty(&self, default: i32) -> i32 {
        self.iter().min().unwrap_or(default)
    }

    /// Returns the largest value, or `default` if the sequence is empty.
    pub fn max_if_empty(&self, default: i32) -> i32 {
        self.iter().max().unwrap_or(default)
    }

    /// Returns the sum of the values, accumulated in `i64`.
    pub fn sum(&self) -> i64 {
        self.iter().map(i64::from).sum()
    }

    /// Returns the arithmetic mean of the values.
    ///
    /// Fails with [`ErrorKind::EmptySequence`](crate::error::ErrorKind::EmptySequence) if the
    /// sequence is empty.
    pub fn average(&self) -> Result<f64, Error> {
        ensure_non_empty(self.len(), "average")?;
        Ok(self.sum() as f64 / self.len() as f64)
    }

    /// Returns the arithmetic mean of the values, or `default` if the sequence is empty.
    pub fn average_if_empty(&self, default: f64) -> f64 {
        self.average().unwrap_or(default)
    }

    /// Returns the median of the values.
    ///
    /// For an odd number of values this is the middle value in sorted order; for an even
    /// number it is the mean of the two middle values. The sequence itself is not reordered.
    ///
    /// Fails with [`ErrorKind::EmptySequence`](crate::error::ErrorKind::EmptySequence) if the
    /// sequence is empty.
    pub fn median(&self) -> Result<f64, Error> {
        ensure_non_empty(self.len(), "median")?;
        let sorted = self.to_sorted_vec();
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            Ok(f64::from(sorted[mid]))
        } else {
            Ok((f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0)
        }
    }

    /// Returns count, sum, minimum, maximum and average in one pass.
    pub fn summary_statistics(&self) -> IntSummaryStatistics {
        self.iter().collect()
    }

    /// Returns true if every value satisfies `predicate`, or if the sequence is empty.
    pub fn all_satisfy(&self, predicate: impl FnMut(i32) -> bool) -> bool {
        self.iter().all(predicate)
    }

    /// Returns true if at least one value satisfies `predicate`.
    ///
    /// An empty sequence never satisfies it.
    pub fn any_satisfy(&self, predicate: impl FnMut(i32) -> bool) -> bool {
        self.iter().any(predicate)
    }

    /// Returns true if no value satisfies `predicate`, or if the sequence is empty.
    pub fn none_satisfy(&self, mut predicate: impl FnMut(i32) -> bool) -> bool {
        !self.iter().any(|value| predicate(value))
    }

    /// Returns the number of values satisfying `predicate`.
    pub fn count(&self, mut predicate: impl FnMut(i32) -> bool) -> usize {
        self.iter().filter(|value| predicate(*value)).count()
    }

    /// Returns the distinct values.
    pub fn to_set(&self) -> IntSet {
        self.iter().collect()
    }

    /// Returns a sorted copy of the values.
    pub fn to_sorted_vec(&self) -> Vec<i32> {
        let mut sorted = self.values.clone();
        sorted.sort_unstable();
        sorted
    }

    /// Splits the sequence into consecutive chunks of `size` values.
    ///
    /// The last chunk holds the remaining values and may be shorter. Fails with
    /// [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument) if `size` is
    /// zero.
    pub fn chunk(&self, size: usize) -> Result<Vec<IntSequence>, Error> {
        ensure_positive("size", size)?;
        Ok(self
            .values
            .chunks(size)
            .map(|chunk| IntSequence::from(chunk.to_vec()))
            .collect())
    }
}

impl From<Vec<i32>> for IntSequence {
    fn from(values: Vec<i32>) -> Self {
        Self { values }
    }
}

impl FromIterator<i32> for IntSequence {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a IntSequence {
    type Item = i32;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, i32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_empty_sequence_statistics() {
        let empty = IntSequence::default();
        for err in [
            empty.min().unwrap_err(),
            empty.max().unwrap_err(),
            empty.average().map(|_| 0).unwrap_err(),
            empty.median().map(|_| 0).unwrap_err(),
        ] {
            assert_eq!(err.kind(), ErrorKind::EmptySequence);
        }
        assert_eq!(empty.sum(), 0);
        assert_eq!(empty.min_if_empty(-1), -1);
        assert_eq!(empty.max_if_empty(7), 7);
        assert_eq!(empty.average_if_empty(0.5), 0.5);
        assert!(empty.to_set().is_empty());
    }

    #[test]
    fn test_predicates_on_empty_sequence() {
        let empty = IntSequence::default();
        assert!(empty.all_satisfy(|_| false));
        assert!(empty.none_satisfy(|_| true));
        assert!(!empty.any_satisfy(|_| true));
        assert_eq!(empty.count(|_| true), 0);
    }

    #[test]
    fn test_predicates_short_circuit() {
        let values = IntSequence::from(vec![1, -1, 2, 3]);
        let mut visited = 0;
        assert!(!values.all_satisfy(|v| {
            visited += 1;
            v > 0
        }));
        assert_eq!(visited, 2);

        visited = 0;
        assert!(values.any_satisfy(|v| {
            visited += 1;
            v < 0
        }));
        assert_eq!(visited, 2);

        visited = 0;
        assert!(!values.none_satisfy(|v| {
            visited += 1;
            v == 1
        }));
        assert_eq!(visited, 1);
    }

    #[test]
    fn test_median_even_and_odd() {
        let even = IntSequence::from(vec![4, 1, 2, 2, 3, 1, 2, 2]);
        assert_eq!(even.median().unwrap(), 2.0);
        assert_eq!(even.as_slice(), &[4, 1, 2, 2, 3, 1, 2, 2]);

        let odd = IntSequence::from(vec![9, 1, 5]);
        assert_eq!(odd.median().unwrap(), 5.0);

        let split = IntSequence::from(vec![1, 2, 3, 4]);
        assert_eq!(split.median().unwrap(), 2.5);

        let single = IntSequence::from(vec![-3]);
        assert_eq!(single.median().unwrap(), -3.0);
    }

    #[test]
    fn test_min_max_sum_average() {
        let values: IntSequence = [i32::MAX, i32::MIN, 5, i32::MAX].into_iter().collect();
        assert_eq!(values.min().unwrap(), i32::MIN);
        assert_eq!(values.max().unwrap(), i32::MAX);
        assert_eq!(values.sum(), i64::from(i32::MAX) + 4);
        assert_eq!(values.len(), 4);
        assert_eq!(values.get(2), Some(5));
        assert_eq!(values.get(4), None);
        assert!(values.contains(5));
        assert!(!values.contains(6));

        let small = IntSequence::from(vec![1, 2, 4]);
        let average = small.average().unwrap();
        assert!((average - 7.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_statistics_agree() {
        let values = IntSequence::from(vec![3, 8, -4, 8]);
        let stats = values.summary_statistics();
        assert_eq!(stats.count(), values.len() as u64);
        assert_eq!(stats.sum(), values.sum());
        assert_eq!(stats.min(), values.min().ok());
        assert_eq!(stats.max(), values.max().ok());
        assert_eq!(stats.average(), values.average().ok());
    }

    #[test]
    fn test_chunk() {
        let values: IntSequence = (1..=5).collect();
        let chunks = values.chunk(2).unwrap();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2].as_slice(), &[5]);

        let err = values.chunk(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_collect_int_keeps_item_order() {
        let words = ["pear", "fig", "banana", "fig", "kiwi"];
        let lengths = IntSequence::collect_int(words, |w| w.len() as i32);
        assert_eq!(lengths.as_slice(), &[4, 3, 6, 3, 4]);
        assert_eq!(lengths.len(), words.len());
        assert_eq!(lengths.get(2), Some(6));
    }

    #[test]
    fn test_try_collect_int() {
        let inputs = ["3", "1", "2", "1"];
        let parsed = IntSequence::try_collect_int(inputs, str::parse::<i32>).unwrap();
        assert_eq!(parsed.as_slice(), &[3, 1, 2, 1]);
        assert_eq!(parsed.to_sorted_vec(), vec![1, 1, 2, 3]);
        assert_eq!((&parsed).into_iter().sum::<i32>(), 7);

        let failed = IntSequence::try_collect_int(["3", "one"], str::parse::<i32>);
        assert!(failed.is_err());
    }
}
