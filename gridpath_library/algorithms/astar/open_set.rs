//! Open set keyed by (f_cost, insertion sequence)
//!
//! Among cells with equal `f_cost`, the one that entered the open set first
//! is popped first. Entries are never removed in place: when a cell's priority
//! changes the caller pushes a fresh entry under the same sequence number and
//! skips the outdated one on pop.

use gridpath_core::Cell;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    f_cost: u64,
    seq: u64,
    cell: Cell,
}

#[derive(Debug, Default)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

impl OpenSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Reserve the sequence number for a newly discovered cell
    pub(crate) fn next_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    pub(crate) fn push(&mut self, f_cost: u64, seq: u64, cell: Cell) {
        self.heap.push(Reverse(Entry { f_cost, seq, cell }));
    }

    /// Lowest (f_cost, seq) entry as (f_cost, cell)
    pub(crate) fn pop(&mut self) -> Option<(u64, Cell)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.f_cost, entry.cell))
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_lowest_f_cost_first() {
        let mut open = OpenSet::new();
        for (f, cell) in [(5, Cell::new(0, 0)), (2, Cell::new(0, 1)), (9, Cell::new(0, 2))] {
            let seq = open.next_seq();
            open.push(f, seq, cell);
        }

        assert_eq!(open.pop(), Some((2, Cell::new(0, 1))));
        assert_eq!(open.pop(), Some((5, Cell::new(0, 0))));
        assert_eq!(open.pop(), Some((9, Cell::new(0, 2))));
        assert_eq!(open.pop(), None);
    }

    #[test]
    fn test_ties_resolve_by_insertion_order() {
        let mut open = OpenSet::new();
        // Cell coordinates deliberately sort opposite to insertion order
        let cells = [Cell::new(9, 9), Cell::new(5, 5), Cell::new(0, 0)];
        for cell in cells {
            let seq = open.next_seq();
            open.push(4, seq, cell);
        }

        assert_eq!(open.pop(), Some((4, Cell::new(9, 9))));
        assert_eq!(open.pop(), Some((4, Cell::new(5, 5))));
        assert_eq!(open.pop(), Some((4, Cell::new(0, 0))));
    }

    #[test]
    fn test_requeue_keeps_original_sequence() {
        let mut open = OpenSet::new();
        let first = open.next_seq();
        open.push(7, first, Cell::new(1, 1));
        let second = open.next_seq();
        open.push(3, second, Cell::new(2, 2));

        // Lower the first cell to tie with the second; it was inserted earlier
        open.push(3, first, Cell::new(1, 1));
        assert_eq!(open.len(), 3);

        assert_eq!(open.pop(), Some((3, Cell::new(1, 1))));
        assert_eq!(open.pop(), Some((3, Cell::new(2, 2))));
        assert_eq!(open.pop(), Some((7, Cell::new(1, 1))));
    }
}
