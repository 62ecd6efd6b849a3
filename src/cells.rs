//! Cell sequences and the paint capability that consumes them.

use std::collections::{BTreeSet, HashSet};

use crate::geometry::GridPoint;

/// Receiver for rasterized cells.
///
/// The rasterizers push every cell they emit, in order, into a sink. The host
/// decides what painting means (filling a rectangle, collecting, counting).
pub trait CellSink {
    /// Receive one emitted cell.
    fn paint(&mut self, cell: GridPoint);
}

impl<S: CellSink + ?Sized> CellSink for &mut S {
    fn paint(&mut self, cell: GridPoint) {
        (**self).paint(cell);
    }
}

/// Ordered sequence of emitted cells.
///
/// Emission order is kept. Duplicates are kept too: octant boundaries of a
/// circle emit the same cell more than once, which only repaints it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellSequence {
    cells: Vec<GridPoint>,
}

impl CellSequence {
    /// Create an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Create an empty sequence with room for `capacity` cells.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { cells: Vec::with_capacity(capacity) }
    }

    /// Append a cell.
    pub fn push(&mut self, cell: GridPoint) {
        self.cells.push(cell);
    }

    /// Number of emitted cells, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether nothing was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// First emitted cell.
    #[must_use]
    pub fn first(&self) -> Option<GridPoint> {
        self.cells.first().copied()
    }

    /// Last emitted cell.
    #[must_use]
    pub fn last(&self) -> Option<GridPoint> {
        self.cells.last().copied()
    }

    /// Cells in emission order.
    #[must_use]
    pub fn as_slice(&self) -> &[GridPoint] {
        &self.cells
    }

    /// Iterate cells in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, GridPoint> {
        self.cells.iter()
    }

    /// The painted set: distinct cells, order discarded.
    #[must_use]
    pub fn to_set(&self) -> BTreeSet<GridPoint> {
        self.cells.iter().copied().collect()
    }

    /// Copy without repeated cells, keeping the first occurrence of each.
    #[must_use]
    pub fn deduplicated(&self) -> Self {
        let mut seen = HashSet::with_capacity(self.cells.len());
        self.cells.iter().copied().filter(|cell| seen.insert(*cell)).collect()
    }

    /// Replay the sequence into a sink.
    pub fn paint_into<S: CellSink + ?Sized>(&self, sink: &mut S) {
        for &cell in &self.cells {
            sink.paint(cell);
        }
    }

    /// Consume into the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<GridPoint> {
        self.cells
    }
}

impl CellSink for CellSequence {
    fn paint(&mut self, cell: GridPoint) {
        self.push(cell);
    }
}

impl From<Vec<GridPoint>> for CellSequence {
    fn from(cells: Vec<GridPoint>) -> Self {
        Self { cells }
    }
}

impl FromIterator<GridPoint> for CellSequence {
    fn from_iter<I: IntoIterator<Item = GridPoint>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
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
    type Item = &'a GridPoint;
    type IntoIter = std::slice::Iter<'a, GridPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Sink that only counts cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellCounter {
    /// Cells received so far.
    pub count: usize,
}

impl CellSink for CellCounter {
    fn paint(&mut self, _cell: GridPoint) {
        self.count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(points: &[(i32, i32)]) -> CellSequence {
        points.iter().copied().map(GridPoint::from).collect()
    }

    #[test]
    fn test_sequence_keeps_duplicates() {
        let cells = seq(&[(0, 0), (1, 1), (0, 0)]);
        assert_eq!(cells.len(), 3);
        assert_eq!(cells.to_set().len(), 2);
    }

    #[test]
    fn test_deduplicated_keeps_first_occurrence_order() {
        let cells = seq(&[(2, 2), (1, 1), (2, 2), (3, 3), (1, 1)]);
        assert_eq!(cells.deduplicated(), seq(&[(2, 2), (1, 1), (3, 3)]));
    }

    #[test]
    fn test_first_last() {
        let cells = seq(&[(5, 1), (6, 1), (7, 2)]);
        assert_eq!(cells.first(), Some(GridPoint::new(5, 1)));
        assert_eq!(cells.last(), Some(GridPoint::new(7, 2)));
        assert_eq!(CellSequence::new().first(), None);
    }

    #[test]
    fn test_paint_into_counter() {
        let cells = seq(&[(0, 0), (0, 0), (1, 0)]);
        let mut counter = CellCounter::default();
        cells.paint_into(&mut counter);
        assert_eq!(counter.count, 3);
    }

    #[test]
    fn test_sink_through_mut_reference() {
        fn paint_twice<S: CellSink>(mut sink: S, cell: GridPoint) {
            sink.paint(cell);
            sink.paint(cell);
        }

        let mut collected = CellSequence::new();
        paint_twice(&mut collected, GridPoint::new(4, 4));
        assert_eq!(collected.as_slice(), &[GridPoint::new(4, 4), GridPoint::new(4, 4)]);
    }
}
