//! Min-heap entry for the Dijkstra / A* frontiers.

use std::cmp::Ordering;

use crate::node::NodeId;

/// Sentinel cost meaning "not reached" in the flat per-call tables.
///
/// Path costs are summed in `i64`. A simple path has fewer than `u32::MAX`
/// edges of at most `i32::MAX` each, so no real cost gets near this value.
pub(crate) const UNREACHED: i64 = i64::MAX;

/// Frontier entry ordered so that `BinaryHeap` pops the smallest `f` first.
///
/// Equal `f` values pop in push order (`seq`), which makes tie-breaking
/// deterministic.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct NodeRef {
    pub(crate) node: NodeId,
    pub(crate) f: i64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
