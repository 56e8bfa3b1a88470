//! Ordered, owned history of scalar readings.

use std::fmt;
use std::ops::{Add, Div};

use crate::chain::Chain;

/// A scalar type that can be stored in a [`ReadingList`].
///
/// Averages are summed in the wider [`Reading::Sum`] type and divided there,
/// so integer readings never overflow and still truncate toward zero.
/// `Default` is the zero value returned by queries on an empty list.
pub trait Reading: Copy + PartialEq + PartialOrd + Default + fmt::Display {
    /// Accumulator used by [`ReadingList::average`].
    type Sum: Copy + Default + Add<Output = Self::Sum> + Div<Output = Self::Sum>;

    /// Converts a reading into the accumulator type.
    fn widen(self) -> Self::Sum;

    /// Converts an average back; the mean of readings always fits.
    fn narrow(sum: Self::Sum) -> Self;

    /// Converts a reading count into the divisor.
    fn divisor(count: usize) -> Self::Sum;
}

macro_rules! impl_reading {
    ($($t:ty => $sum:ty),+) => {
        $(
            impl Reading for $t {
                type Sum = $sum;

                fn widen(self) -> $sum {
                    self as $sum
                }

                fn narrow(sum: $sum) -> $t {
                    sum as $t
                }

                fn divisor(count: usize) -> $sum {
                    count as $sum
                }
            }
        )+
    };
}

impl_reading!(i32 => i64, i64 => i128, f32 => f32, f64 => f64);

/// Singly-chained list of readings in insertion order.
///
/// Cloning produces a fully independent deep copy; mutating the copy never
/// touches the source.
pub struct ReadingList<T> {
    chain: Chain<T>,
}

impl<T: Reading> ReadingList<T> {
    /// Creates an empty list.
    pub const fn new() -> ReadingList<T> {
        ReadingList {
            chain: Chain::new(),
        }
    }

    /// Appends `value` at the tail.
    pub fn insert(&mut self, value: T) {
        self.chain.push_back(value);
    }

    /// Returns true if any stored reading equals `value`.
    pub fn contains(&self, value: T) -> bool {
        self.chain.iter().any(|stored| *stored == value)
    }

    /// Sum of all readings divided by their count, or zero when empty.
    pub fn average(&self) -> T {
        if self.chain.is_empty() {
            return T::default();
        }
        let sum = self
            .chain
            .iter()
            .fold(T::Sum::default(), |sum, value| sum + value.widen());
        T::narrow(sum / T::divisor(self.chain.len()))
    }

    /// Removes and returns the smallest reading, or zero when empty.
    ///
    /// Only a strictly smaller value replaces the current candidate, so among
    /// equal minima the earliest inserted one is removed.
    pub fn remove_minimum(&mut self) -> T {
        let mut readings = self.chain.iter().enumerate();
        let Some((_, first)) = readings.next() else {
            return T::default();
        };
        let mut smallest = *first;
        let mut position = 0;
        for (index, value) in readings {
            if *value < smallest {
                smallest = *value;
                position = index;
            }
        }
        self.chain.remove(position).unwrap_or_default()
    }

    /// Number of stored readings.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// True when no readings are stored.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Iterates the readings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.chain.iter()
    }

    /// Snapshot of the stored readings, in insertion order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().copied().collect()
    }
}

impl<T: Reading> Default for ReadingList<T> {
    fn default() -> Self {
        ReadingList::new()
    }
}

impl<T: Reading> Clone for ReadingList<T> {
    fn clone(&self) -> Self {
        ReadingList {
            chain: self.chain.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.chain.clone_from(&source.chain);
    }
}

impl<T: Reading> PartialEq for ReadingList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Reading> FromIterator<T> for ReadingList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ReadingList::new();
        list.extend(iter);
        list
    }
}

impl<T: Reading> Extend<T> for ReadingList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.chain.extend(iter);
    }
}

impl<T: Reading + fmt::Debug> fmt::Debug for ReadingList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.chain, f)
    }
}

/// Renders as `{ a, b, c }`.
impl<T: Reading> fmt::Display for ReadingList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_remove_minimum {
        ($name:ident, $t:ty, $input:expr, $removed:expr, $remaining:expr) => {
            #[test]
            fn $name() {
                let mut list: ReadingList<$t> = $input.into_iter().collect();
                let before = list.len();
                assert_eq!(list.remove_minimum(), $removed);
                assert_eq!(list.len(), before - 1);
                assert_eq!(list.to_vec(), $remaining);
            }
        };
    }

    // Tests for success.

    #[test]
    fn test_insert_for_success() {
        let mut list: ReadingList<i32> = ReadingList::new();
        list.insert(1);
        assert!(!list.is_empty());
    }

    #[test]
    fn test_contains_for_success() {
        let list: ReadingList<f32> = vec![45.3, 42.1].into_iter().collect();
        assert!(list.contains(42.1));
    }

    // Tests for failure.

    #[test]
    fn test_average_empty_for_failure() {
        let list: ReadingList<i32> = ReadingList::new();
        assert_eq!(list.average(), 0);
        let list: ReadingList<f32> = ReadingList::new();
        assert_eq!(list.average(), 0.0);
    }

    #[test]
    fn test_remove_minimum_empty_for_failure() {
        let mut list: ReadingList<f64> = ReadingList::new();
        assert_eq!(list.remove_minimum(), 0.0);
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_contains_for_failure() {
        let list: ReadingList<i32> = vec![80, 85].into_iter().collect();
        assert!(!list.contains(82));
        let empty: ReadingList<i32> = ReadingList::new();
        assert!(!empty.contains(0));
    }

    // Tests for sanity.

    #[test]
    fn test_size_for_sanity() {
        let mut list: ReadingList<i64> = ReadingList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        for i in 0..25 {
            list.insert(i);
            assert_eq!(list.len(), (i + 1) as usize);
            assert!(!list.is_empty());
        }
    }

    #[test]
    fn test_insert_order_for_sanity() {
        let mut list: ReadingList<i32> = ReadingList::new();
        for value in [80, 85, 82, 88] {
            list.insert(value);
        }
        assert_eq!(list.to_vec(), vec![80, 85, 82, 88]);
    }

    #[test]
    fn test_integer_average_for_sanity() {
        let list: ReadingList<i32> = vec![80, 85, 82, 88].into_iter().collect();
        // 335 / 4 truncates to 83.
        assert_eq!(list.average(), 83);

        let list: ReadingList<i32> = vec![-7, -8].into_iter().collect();
        assert_eq!(list.average(), -7);
    }

    #[test]
    fn test_integer_average_extremes_for_sanity() {
        let list: ReadingList<i32> = vec![i32::MAX, i32::MAX].into_iter().collect();
        assert_eq!(list.average(), i32::MAX);
        let list: ReadingList<i32> = vec![i32::MIN, i32::MIN].into_iter().collect();
        assert_eq!(list.average(), i32::MIN);
        let list: ReadingList<i32> = vec![i32::MAX, i32::MAX, 0].into_iter().collect();
        assert_eq!(list.average(), 1_431_655_764);
        let list: ReadingList<i64> = vec![i64::MAX, i64::MAX, i64::MAX].into_iter().collect();
        assert_eq!(list.average(), i64::MAX);
    }

    #[test]
    fn test_float_average_for_sanity() {
        let list: ReadingList<f32> = vec![45.3, 47.8].into_iter().collect();
        assert!((list.average() - 46.55).abs() < 1e-4);
    }

    test_remove_minimum!(
        remove_minimum_middle,
        f32,
        vec![45.3_f32, 42.1, 47.8],
        42.1,
        vec![45.3_f32, 47.8]
    );
    test_remove_minimum!(remove_minimum_head, i32, vec![1, 5, 3], 1, vec![5, 3]);
    test_remove_minimum!(remove_minimum_tail, i32, vec![5, 3, 1], 1, vec![5, 3]);
    test_remove_minimum!(remove_minimum_single, i32, vec![7], 7, Vec::<i32>::new());
    test_remove_minimum!(
        remove_minimum_negative,
        i64,
        vec![0_i64, -3, 4],
        -3,
        vec![0_i64, 4]
    );

    #[test]
    fn test_remove_minimum_duplicates_for_sanity() {
        // the first 2 goes, later duplicates keep their place.
        let mut list: ReadingList<i32> = vec![4, 2, 9, 2, 2].into_iter().collect();
        assert_eq!(list.remove_minimum(), 2);
        assert_eq!(list.to_vec(), vec![4, 9, 2, 2]);
        assert_eq!(list.remove_minimum(), 2);
        assert_eq!(list.to_vec(), vec![4, 9, 2]);
    }

    #[test]
    fn test_remove_minimum_earliest_wins_for_sanity() {
        // -0.0 and 0.0 are equal under PartialOrd, so the earliest one goes.
        let mut list: ReadingList<f64> = vec![1.0, -0.0, 0.0].into_iter().collect();
        let removed = list.remove_minimum();
        assert_eq!(removed, 0.0);
        assert!(removed.is_sign_negative());
        assert!(list.to_vec()[1].is_sign_positive());
    }

    #[test]
    fn test_deep_copy_for_sanity() {
        let mut source: ReadingList<i32> = vec![3, 1, 2].into_iter().collect();
        let mut copy = source.clone();
        assert_eq!(copy, source);

        copy.insert(10);
        copy.remove_minimum();
        assert_eq!(source.to_vec(), vec![3, 1, 2]);
        assert_eq!(copy.to_vec(), vec![3, 2, 10]);

        source.remove_minimum();
        source.insert(0);
        assert_eq!(source.to_vec(), vec![3, 2, 0]);
        assert_eq!(copy.to_vec(), vec![3, 2, 10]);
    }

    #[test]
    fn test_clone_from_for_sanity() {
        let source: ReadingList<f32> = vec![1.5, 2.5].into_iter().collect();
        let mut target: ReadingList<f32> = vec![9.0, 9.0, 9.0].into_iter().collect();
        target.clone_from(&source);
        assert_eq!(target.to_vec(), vec![1.5, 2.5]);
        assert_eq!(target.len(), 2);

        target.insert(3.5);
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn test_display_for_sanity() {
        let list: ReadingList<i32> = vec![80, 85, 82].into_iter().collect();
        assert_eq!(list.to_string(), "{ 80, 85, 82 }");
        let empty: ReadingList<i32> = ReadingList::new();
        assert_eq!(empty.to_string(), "{  }");
    }
}
