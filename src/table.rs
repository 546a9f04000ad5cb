//! Reward tables: the read-only boundary the selector draws rewards from.
//!
//! The selector never inspects a table as a whole; it consumes it purely by
//! random access, `(round, arm) -> reward`.  Lookups are expected to be
//! in-memory, O(1), and side-effect-free.

/// A read-only, rectangular table of rewards addressed by `(round, arm)`.
///
/// `reward(round, arm)` is the scalar the chosen arm *would* observe at the
/// given round.  Returning `None` signals an out-of-bounds lookup, which the
/// selector turns into a run-aborting [`crate::Error::RewardOutOfRange`].
pub trait RewardSource {
    /// Number of rounds the table covers.
    fn rows(&self) -> usize;

    /// Number of arms per round.
    fn arms(&self) -> usize;

    /// Reward at `(round, arm)`, or `None` if either index is out of range.
    fn reward(&self, round: usize, arm: usize) -> Option<f64>;
}

/// Dense row-major in-memory reward table.
///
/// Construction enforces rectangularity, so `reward` is a plain offset
/// lookup.
///
/// # Example
///
/// ```rust
/// use adsel::{DenseTable, RewardSource};
///
/// let t = DenseTable::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
/// assert_eq!(t.rows(), 2);
/// assert_eq!(t.arms(), 2);
/// assert_eq!(t.reward(1, 1), Some(1.0));
/// assert_eq!(t.reward(2, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DenseTable {
    arms: usize,
    values: Vec<f64>,
}

impl DenseTable {
    /// Build a table from row vectors.
    ///
    /// Returns `None` when the input is empty, has an empty first row, or is
    /// ragged (rows of unequal length).  The file loader reports richer
    /// errors for the same conditions; this constructor is the in-memory
    /// path used by tests and embedding callers.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let arms = rows.first()?.len();
        if arms == 0 {
            return None;
        }
        let mut values = Vec::with_capacity(rows.len() * arms);
        for row in &rows {
            if row.len() != arms {
                return None;
            }
            values.extend_from_slice(row);
        }
        Some(Self { arms, values })
    }

    /// Build a table from a flat row-major buffer.
    ///
    /// Returns `None` when `arms == 0` or `values.len()` is not a multiple
    /// of `arms`.
    pub fn from_flat(arms: usize, values: Vec<f64>) -> Option<Self> {
        if arms == 0 || values.len() % arms != 0 {
            return None;
        }
        Some(Self { arms, values })
    }
}

impl RewardSource for DenseTable {
    fn rows(&self) -> usize {
        self.values.len() / self.arms
    }

    fn arms(&self) -> usize {
        self.arms
    }

    fn reward(&self, round: usize, arm: usize) -> Option<f64> {
        if arm >= self.arms {
            return None;
        }
        self.values.get(round * self.arms + arm).copied()
    }
}

impl<S: RewardSource + ?Sized> RewardSource for &S {
    fn rows(&self) -> usize {
        (**self).rows()
    }

    fn arms(&self) -> usize {
        (**self).arms()
    }

    fn reward(&self, round: usize, arm: usize) -> Option<f64> {
        (**self).reward(round, arm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_ragged_and_empty_input() {
        assert!(DenseTable::from_rows(vec![]).is_none());
        assert!(DenseTable::from_rows(vec![vec![]]).is_none());
        assert!(DenseTable::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).is_none());
    }

    #[test]
    fn from_flat_rejects_misaligned_buffers() {
        assert!(DenseTable::from_flat(0, vec![1.0]).is_none());
        assert!(DenseTable::from_flat(2, vec![1.0, 2.0, 3.0]).is_none());
        let t = DenseTable::from_flat(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(t.rows(), 2);
        assert_eq!(t.reward(1, 0), Some(3.0));
    }

    #[test]
    fn out_of_range_lookups_return_none() {
        let t = DenseTable::from_rows(vec![vec![0.5]]).unwrap();
        assert_eq!(t.reward(0, 0), Some(0.5));
        assert_eq!(t.reward(0, 1), None);
        assert_eq!(t.reward(1, 0), None);
    }
}
