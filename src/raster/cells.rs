//! Ordered, duplicate-free cell sequences.

use std::collections::HashSet;

use crate::geometry::GridPoint;

/// Insertion-ordered grid cells with no duplicate addresses.
///
/// Membership is tracked with a structural set keyed on [`GridPoint`], so
/// pushing an already-present cell is a no-op and first-seen order wins.
#[derive(Debug, Clone, Default)]
pub struct CellSequence {
    cells: Vec<GridPoint>,
    seen: HashSet<GridPoint>,
}

impl CellSequence {
    /// Create an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sequence with room for `capacity` cells.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
            seen: HashSet::with_capacity(capacity),
        }
    }

    /// Append `cell` unless already present. Returns whether it was added.
    pub fn push(&mut self, cell: GridPoint) -> bool {
        if self.seen.insert(cell) {
            self.cells.push(cell);
            true
        } else {
            false
        }
    }

    /// Whether `cell` is in the sequence.
    #[must_use]
    pub fn contains(&self, cell: GridPoint) -> bool {
        self.seen.contains(&cell)
    }

    /// Number of distinct cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// First cell, if any.
    #[must_use]
    pub fn first(&self) -> Option<GridPoint> {
        self.cells.first().copied()
    }

    /// Last cell, if any.
    #[must_use]
    pub fn last(&self) -> Option<GridPoint> {
        self.cells.last().copied()
    }

    /// Iterate cells in order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, GridPoint>> {
        self.cells.iter().copied()
    }

    /// Cells as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[GridPoint] {
        &self.cells
    }

    /// The set of cells, ignoring order.
    #[must_use]
    pub fn to_set(&self) -> HashSet<GridPoint> {
        self.seen.clone()
    }

    /// Whether `other` contains every cell of `self`.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.seen.is_subset(&other.seen)
    }

    /// Same cells in reverse order.
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.cells.reverse();
        self
    }

    /// Consecutive cells differ by at most one unit on each axis.
    #[must_use]
    pub fn is_8_connected(&self) -> bool {
        self.cells.windows(2).all(|w| w[0].is_8_adjacent(w[1]))
    }

    /// Consecutive cells differ by exactly one unit on exactly one axis.
    #[must_use]
    pub fn is_4_connected(&self) -> bool {
        self.cells.windows(2).all(|w| w[0].is_4_adjacent(w[1]))
    }
}

impl PartialEq for CellSequence {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for CellSequence {}

impl PartialEq<[GridPoint]> for CellSequence {
    fn eq(&self, other: &[GridPoint]) -> bool {
        self.cells == other
    }
}

impl AsRef<[GridPoint]> for CellSequence {
    fn as_ref(&self) -> &[GridPoint] {
        &self.cells
    }
}

impl Extend<GridPoint> for CellSequence {
    fn extend<I: IntoIterator<Item = GridPoint>>(&mut self, iter: I) {
        for cell in iter {
            self.push(cell);
        }
    }
}

impl FromIterator<GridPoint> for CellSequence {
    fn from_iter<I: IntoIterator<Item = GridPoint>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl IntoIterator for CellSequence {
    type Item = GridPoint;
    type IntoIter = std::vec::IntoIter<GridPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a CellSequence {
    type Item = GridPoint;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, GridPoint>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> GridPoint {
        GridPoint::new(x, y)
    }

    #[test]
    fn test_push_deduplicates_keeping_first_order() {
        let mut seq = CellSequence::new();
        assert!(seq.push(p(0, 0)));
        assert!(seq.push(p(1, 0)));
        assert!(!seq.push(p(0, 0)));
        assert!(seq.push(p(1, 1)));
        assert_eq!(seq.as_slice(), &[p(0, 0), p(1, 0), p(1, 1)]);
    }

    #[test]
    fn test_negative_coordinates_are_distinct() {
        // "-1,1" vs "1,-1" style collisions cannot happen with structural keys
        let seq: CellSequence = [p(-1, 1), p(1, -1), p(-11, 1), p(-1, 11)].into_iter().collect();
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn test_connectivity_checks() {
        let diagonal: CellSequence = [p(0, 0), p(1, 1), p(2, 1)].into_iter().collect();
        assert!(diagonal.is_8_connected());
        assert!(!diagonal.is_4_connected());

        let stair: CellSequence = [p(0, 0), p(1, 0), p(1, 1)].into_iter().collect();
        assert!(stair.is_8_connected());
        assert!(stair.is_4_connected());

        let gap: CellSequence = [p(0, 0), p(2, 0)].into_iter().collect();
        assert!(!gap.is_8_connected());
    }

    #[test]
    fn test_reversed_and_subset() {
        let seq: CellSequence = [p(0, 0), p(1, 0), p(2, 1)].into_iter().collect();
        let rev = seq.clone().reversed();
        assert_eq!(rev.first(), Some(p(2, 1)));
        assert_eq!(rev.last(), Some(p(0, 0)));
        assert_eq!(rev.to_set(), seq.to_set());
        assert!(rev.is_subset_of(&seq));

        let smaller: CellSequence = [p(1, 0)].into_iter().collect();
        assert!(smaller.is_subset_of(&seq));
        assert!(!seq.is_subset_of(&smaller));
    }

    #[test]
    fn test_empty_sequence() {
        let seq = CellSequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.first(), None);
        assert!(seq.is_8_connected());
        assert!(seq.is_4_connected());
    }
}
