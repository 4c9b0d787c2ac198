// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interval coverage tree over a dense index range.
//!
//! [`CoverageTree`] is a static-shape segment tree. Its shape depends only on
//! the number of indices it spans; a sweep changes counts and cached statuses,
//! never the shape. Nodes live in a flat arena and refer to their children by
//! arena index.
//!
//! Ranges are half-open in index space: a node spanning `lo..hi` covers the
//! unit ranges `lo..lo + 1` through `hi - 1..hi`, and leaves span exactly one
//! unit.

use alloc::vec::Vec;
use core::ops::Range;

use crate::error::ConsistencyError;

/// Cached coverage of a tree node's range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Coverage {
    /// No part of the range is covered.
    #[default]
    Empty,
    /// Some, but not all, of the range is covered.
    Partial,
    /// The whole range is covered by at least one insertion at this node.
    Full,
}

#[derive(Clone, Debug)]
struct Node {
    lo: usize,
    hi: usize,
    /// Net insertions of ranges that fully contain `lo..hi` and stopped here.
    count: isize,
    status: Coverage,
    children: Option<(usize, usize)>,
}

impl Node {
    fn new(lo: usize, hi: usize) -> Self {
        Self {
            lo,
            hi,
            count: 0,
            status: Coverage::Empty,
            children: None,
        }
    }

    /// Split point; the left child spans `lo..mid`, the right `mid..hi`.
    fn mid(&self) -> usize {
        (self.lo + self.hi).div_ceil(2)
    }

    fn is_within(&self, range: &Range<usize>) -> bool {
        range.start <= self.lo && self.hi <= range.end
    }
}

/// Segment tree tracking stacked coverage of index ranges.
///
/// Coverage is counted rather than flagged: overlapping ranges stack, and a
/// unit stays covered until every range inserted over it has been removed.
///
/// ```rust
/// use understory_rect_union::{Coverage, CoverageTree};
///
/// let mut tree = CoverageTree::new(5);
/// tree.adjust(1..3, 1);
/// assert_eq!(tree.root_coverage(), Coverage::Partial);
///
/// let mut empty = Vec::new();
/// tree.collect_empty(0..4, &mut empty);
/// assert_eq!(empty, [0..1, 3..4]);
/// ```
#[derive(Clone, Debug)]
pub struct CoverageTree {
    nodes: Vec<Node>,
}

impl CoverageTree {
    /// Builds a tree over the index range `0..count - 1`.
    ///
    /// `count` is the number of distinct coordinates, so the tree has
    /// `count - 1` unit ranges. Fewer than two coordinates yields a single
    /// zero-length root that never reports anything.
    #[must_use]
    pub fn new(count: usize) -> Self {
        let mut tree = Self {
            nodes: Vec::with_capacity(2 * count),
        };
        tree.build(0, count.saturating_sub(1));
        tree
    }

    fn build(&mut self, lo: usize, hi: usize) -> usize {
        let index = self.nodes.len();
        self.nodes.push(Node::new(lo, hi));
        if hi - lo > 1 {
            let mid = self.nodes[index].mid();
            let left = self.build(lo, mid);
            let right = self.build(mid, hi);
            self.nodes[index].children = Some((left, right));
        }
        index
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Cached coverage of the whole index range.
    #[must_use]
    pub fn root_coverage(&self) -> Coverage {
        self.nodes[0].status
    }

    /// Adds `delta` to the coverage of `range`.
    ///
    /// Use `1` to insert a range and `-1` to remove one. Empty ranges are
    /// ignored.
    pub fn adjust(&mut self, range: Range<usize>, delta: isize) {
        if range.is_empty() {
            return;
        }
        self.adjust_at(0, &range, delta);
    }

    fn adjust_at(&mut self, index: usize, range: &Range<usize>, delta: isize) {
        let node = &self.nodes[index];
        if node.is_within(range) {
            self.nodes[index].count += delta;
        } else if let Some((left, right)) = node.children {
            let mid = node.mid();
            if range.start < mid {
                self.adjust_at(left, range, delta);
            }
            if mid < range.end {
                self.adjust_at(right, range, delta);
            }
        }
        self.nodes[index].status = self.computed_status(index);
    }

    /// Status implied by a node's count and its children's cached statuses.
    fn computed_status(&self, index: usize) -> Coverage {
        let node = &self.nodes[index];
        if node.count > 0 {
            return Coverage::Full;
        }
        match node.children {
            Some((left, right))
                if self.nodes[left].status == Coverage::Empty
                    && self.nodes[right].status == Coverage::Empty =>
            {
                Coverage::Empty
            }
            Some(_) => Coverage::Partial,
            None => Coverage::Empty,
        }
    }

    /// Appends the maximal uncovered sub-ranges of `range` to `out`, in
    /// ascending order.
    ///
    /// A run that starts exactly where the last run in `out` ends is merged
    /// into it, so consecutive calls over ascending ranges keep `out` maximal.
    pub fn collect_empty(&self, range: Range<usize>, out: &mut Vec<Range<usize>>) {
        if range.is_empty() {
            return;
        }
        self.collect_empty_at(0, &range, out);
    }

    fn collect_empty_at(&self, index: usize, range: &Range<usize>, out: &mut Vec<Range<usize>>) {
        let node = &self.nodes[index];
        match node.status {
            Coverage::Full => {}
            Coverage::Empty if node.is_within(range) => match out.last_mut() {
                Some(last) if last.end == node.lo => last.end = node.hi,
                _ => out.push(node.lo..node.hi),
            },
            Coverage::Empty | Coverage::Partial => {
                if let Some((left, right)) = node.children {
                    let mid = node.mid();
                    if range.start < mid {
                        self.collect_empty_at(left, range, out);
                    }
                    if mid < range.end {
                        self.collect_empty_at(right, range, out);
                    }
                }
            }
        }
    }

    /// Returns `true` if the unit range `index..index + 1` is covered.
    #[must_use]
    pub fn is_covered(&self, index: usize) -> bool {
        let mut at = 0;
        loop {
            let node = &self.nodes[at];
            if node.count > 0 {
                return true;
            }
            match node.children {
                Some((left, right)) => at = if index < node.mid() { left } else { right },
                None => return false,
            }
        }
    }

    /// Returns `true` if no coverage remains anywhere in the tree.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.nodes.iter().all(|n| n.count == 0)
    }

    /// Checks every cached status against the node counts.
    pub fn verify(&self) -> Result<(), ConsistencyError> {
        for (index, node) in self.nodes.iter().enumerate() {
            if node.count < 0 {
                return Err(ConsistencyError::NegativeCount { node: index });
            }
            if node.status != self.computed_status(index) {
                return Err(ConsistencyError::StatusMismatch { node: index });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn empties(tree: &CoverageTree, range: Range<usize>) -> Vec<Range<usize>> {
        let mut out = Vec::new();
        tree.collect_empty(range, &mut out);
        out
    }

    #[test]
    fn shape_depends_only_on_count() {
        // 6 coordinates, 5 unit leaves, 4 branches.
        let tree = CoverageTree::new(6);
        assert_eq!(tree.node_count(), 9);
        assert_eq!(tree.root_coverage(), Coverage::Empty);
        assert!(tree.is_clear());
        tree.verify().unwrap();
    }

    #[test]
    fn fresh_tree_is_one_empty_run() {
        let tree = CoverageTree::new(6);
        assert_eq!(empties(&tree, 0..5), vec![0..5]);
        assert_eq!(empties(&tree, 1..4), vec![1..4]);
    }

    #[test]
    fn overlapping_inserts_stack() {
        let mut tree = CoverageTree::new(8);
        tree.adjust(0..4, 1);
        tree.adjust(2..6, 1);
        assert_eq!(empties(&tree, 0..7), vec![6..7]);

        tree.adjust(0..4, -1);
        assert_eq!(empties(&tree, 0..7), vec![0..2, 6..7]);
        assert!(tree.is_covered(2));
        assert!(tree.is_covered(5));
        assert!(!tree.is_covered(1));

        tree.adjust(2..6, -1);
        assert_eq!(tree.root_coverage(), Coverage::Empty);
        assert!(tree.is_clear());
        tree.verify().unwrap();
    }

    #[test]
    fn every_unit_range_is_visited_once() {
        for count in 2..12 {
            let units = count - 1;
            for lo in 0..units {
                for hi in lo + 1..=units {
                    let mut tree = CoverageTree::new(count);
                    tree.adjust(lo..hi, 1);
                    tree.verify().unwrap();
                    for unit in 0..units {
                        assert_eq!(
                            tree.is_covered(unit),
                            (lo..hi).contains(&unit),
                            "count {count}, range {lo}..{hi}, unit {unit}"
                        );
                    }
                    let mut expected = Vec::new();
                    if lo > 0 {
                        expected.push(0..lo);
                    }
                    if hi < units {
                        expected.push(hi..units);
                    }
                    assert_eq!(empties(&tree, 0..units), expected);
                }
            }
        }
    }

    #[test]
    fn collect_merges_with_previous_run() {
        let mut tree = CoverageTree::new(10);
        tree.adjust(4..5, 1);
        let mut out = Vec::new();
        tree.collect_empty(0..2, &mut out);
        tree.collect_empty(2..4, &mut out);
        tree.collect_empty(4..9, &mut out);
        assert_eq!(out, vec![0..4, 5..9]);
    }

    #[test]
    fn empty_ranges_are_ignored() {
        let mut tree = CoverageTree::new(4);
        tree.adjust(2..2, 1);
        assert!(tree.is_clear());
        assert!(empties(&tree, 1..1).is_empty());
    }

    #[test]
    fn verify_reports_negative_counts() {
        let mut tree = CoverageTree::new(4);
        tree.adjust(0..3, -1);
        assert_eq!(
            tree.verify(),
            Err(ConsistencyError::NegativeCount { node: 0 })
        );
    }
}
