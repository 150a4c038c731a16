use std::cmp::Ordering;
use std::collections::BinaryHeap;

use arena_core::{ARENA_CELLS, Position};

/// Outcome of a budgeted search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Steps from the cell after the origin through the reached cell.
    pub path: Vec<Position>,
    /// Node expansions consumed.
    pub ops: u32,
    /// Accumulated traversal cost of `path`.
    pub cost: u32,
    /// `true` when the search stopped without meeting a goal: budget spent,
    /// frontier exhausted, or flee mode (which has no terminal condition).
    pub incomplete: bool,
}

impl SearchResult {
    /// The reached cell, if any step was taken.
    #[inline]
    pub fn last(&self) -> Option<Position> {
        self.path.last().copied()
    }
}

// ---------------------------------------------------------------------------
// Internal node for the priority-queue search
// ---------------------------------------------------------------------------

pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: u32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: NO_PARENT,
            generation: 0,
            open: false,
        }
    }
}

/// Open-list entry. Lower `f` pops first; equal `f` pops in insertion
/// order (`seq`).
#[derive(Clone, Copy)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) g: u32,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Reusable search state for the arena.
///
/// `PathFinder` owns the node array and open list so that repeated searches
/// allocate nothing after the first. Nodes are invalidated lazily by bumping
/// a generation counter, so no result ever depends on an earlier call.
pub struct PathFinder {
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) open: BinaryHeap<NodeRef>,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathFinder {
    /// Create a finder sized for the arena.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default(); ARENA_CELLS],
            generation: 0,
            open: BinaryHeap::new(),
        }
    }

    /// Start a new search generation and return its stamp.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale stamps could collide with the new ones.
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.open.clear();
        self.generation
    }

    /// Walk parent links from `end` back to `start`, returning the steps in
    /// start-to-end order with `start` itself excluded.
    pub(crate) fn reconstruct(&self, start: usize, end: usize) -> Vec<Position> {
        let mut path = Vec::new();
        let mut ci = end;
        while ci != start && ci != NO_PARENT {
            path.push(Position::from_index(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(idx: usize, f: f64, seq: u64) -> NodeRef {
        NodeRef { idx, g: 0, f, seq }
    }

    #[test]
    fn open_list_pops_lowest_f_first() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(1, 5.0, 0));
        heap.push(entry(2, 1.5, 1));
        heap.push(entry(3, 3.0, 2));
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn open_list_ties_pop_in_insertion_order() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(7, 2.0, 3));
        heap.push(entry(8, 2.0, 1));
        heap.push(entry(9, 2.0, 2));
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![8, 9, 7]);
    }

    #[test]
    fn generation_wrap_resets_stamps() {
        let mut pf = PathFinder::new();
        pf.nodes[5].generation = 1;
        pf.generation = u32::MAX;
        assert_eq!(pf.next_generation(), 1);
        assert_eq!(pf.nodes[5].generation, 0);
    }

    #[test]
    fn reconstruct_excludes_start() {
        let mut pf = PathFinder::new();
        let a = Position::new(0, 0).index().unwrap();
        let b = Position::new(1, 1).index().unwrap();
        let c = Position::new(2, 1).index().unwrap();
        pf.nodes[b].parent = a;
        pf.nodes[c].parent = b;
        assert_eq!(
            pf.reconstruct(a, c),
            vec![Position::new(1, 1), Position::new(2, 1)]
        );
        assert!(pf.reconstruct(a, a).is_empty());
    }
}
