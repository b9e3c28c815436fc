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

/// Single-pass count, sum, minimum, maximum and average of `i32` values.
///
/// The sum is kept in `i64`. Minimum, maximum and average are `None` until the first value
/// is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntSummaryStatistics {
    count: u64,
    sum: i64,
    min: i32,
    max: i32,
}

impl Default for IntSummaryStatistics {
    fn default() -> Self {
        Self {
            count: 0,
            sum: 0,
            min: i32::MAX,
            max: i32::MIN,
        }
    }
}

impl IntSummaryStatistics {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a value.
    pub fn accept(&mut self, value: i32) {
        self.count += 1;
        self.sum += i64::from(value);
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Folds the values recorded by `other` into these statistics.
    pub fn combine(&mut self, other: &Self) {
        self.count += other.count;
        self.sum += other.sum;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Returns the number of values recorded.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the sum of the values recorded, zero if there are none.
    pub fn sum(&self) -> i64 {
        self.sum
    }

    /// Returns the smallest value recorded.
    pub fn min(&self) -> Option<i32> {
        (self.count > 0).then_some(self.min)
    }

    /// Returns the largest value recorded.
    pub fn max(&self) -> Option<i32> {
        (self.count > 0).then_some(self.max)
    }

    /// Returns the arithmetic mean of the values recorded.
    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum as f64 / self.count as f64)
    }
}

impl Extend<i32> for IntSummaryStatistics {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.accept(value);
        }
    }
}

impl FromIterator<i32> for IntSummaryStatistics {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_statistics() {
        let stats = IntSummaryStatistics::new();
        assert_eq!(stats.count(), 0);
        assert_eq!(stats.sum(), 0);
        assert_eq!(stats.min(), None);
        assert_eq!(stats.max(), None);
        assert_eq!(stats.average(), None);
    }

    #[test]
    fn test_accept() {
        let stats: IntSummaryStatistics = [4, -2, 7, 3].into_iter().collect();
        assert_eq!(stats.count(), 4);
        assert_eq!(stats.sum(), 12);
        assert_eq!(stats.min(), Some(-2));
        assert_eq!(stats.max(), Some(7));
        assert_eq!(stats.average(), Some(3.0));
    }

    #[test]
    fn test_sum_does_not_wrap() {
        let stats: IntSummaryStatistics = [i32::MAX, i32::MAX, 2].into_iter().collect();
        assert_eq!(stats.sum(), 2 * i64::from(i32::MAX) + 2);
    }

    #[test]
    fn test_combine() {
        let mut left: IntSummaryStatistics = [5, 9].into_iter().collect();
        let right: IntSummaryStatistics = [1].into_iter().collect();
        left.combine(&right);
        left.combine(&IntSummaryStatistics::new());
        assert_eq!(left.count(), 3);
        assert_eq!(left.sum(), 15);
        assert_eq!(left.min(), Some(1));
        assert_eq!(left.max(), Some(9));
        assert_eq!(left.average(), Some(5.0));
    }
}
