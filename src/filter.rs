use crate::bit_set::{BitSet, IterOnes};
use core::fmt::{Debug, Formatter};
use core::iter::FusedIterator;

/// Identifier of one simulated node, valid in `0..NODE_COUNT`.
pub type NodeId = u16;

/// Connectivity filter over the nodes of a simulated network.
///
/// Every node starts out connectable. `deny` marks a node unreachable until
/// the next `clear`. There are no other transitions. Both mutators need the
/// `ftd` or `mtd` feature.
///
/// `NODE_COUNT` is the simulated network size and `BUCKET_COUNT` must be
/// given as `{ bucket_count(NODE_COUNT) }`.
///
/// The filter is deliberately neither `Clone` nor `Copy`, so the denied set
/// always has exactly one owner:
///
/// ```compile_fail
/// use nodeid_filter::SimFilter;
///
/// let filter = SimFilter::new();
/// let copy = filter.clone();
/// ```
pub struct Filter<const NODE_COUNT: usize, const BUCKET_COUNT: usize> {
    denied: BitSet<NODE_COUNT, BUCKET_COUNT>,
}

impl<const NODE_COUNT: usize, const BUCKET_COUNT: usize> Filter<NODE_COUNT, BUCKET_COUNT> {
    /// Creates a filter where every node is connectable.
    ///
    /// # Panics
    /// Panics if `NODE_COUNT == 0` or `BUCKET_COUNT != bucket_count(NODE_COUNT)`.
    ///
    /// # Examples
    /// ```
    /// use nodeid_filter::{Filter, bucket_count};
    ///
    /// let filter = Filter::<4, { bucket_count(4) }>::new();
    /// assert!((0..4).all(|id| filter.is_connectable(id)));
    /// ```
    pub fn new() -> Self {
        Self {
            denied: BitSet::new(),
        }
    }

    /// Returns the simulated network size this filter covers.
    #[inline]
    pub const fn capacity(&self) -> usize {
        NODE_COUNT
    }

    /// Returns whether a connection to `node_id` may proceed.
    ///
    /// # Panics
    /// Panics if `node_id` is outside the simulated network.
    #[inline]
    pub fn is_connectable(&self, node_id: NodeId) -> bool {
        let connectable = !self.denied.is_set(Self::index(node_id));
        tracing::trace!(node_id, connectable, "Checked node connectivity");
        connectable
    }

    /// Denies connections to `node_id` until the filter is cleared.
    ///
    /// Denying an already denied node changes nothing.
    ///
    /// # Panics
    /// Panics if `node_id` is outside the simulated network.
    ///
    /// # Examples
    /// ```
    /// use nodeid_filter::{Filter, bucket_count};
    ///
    /// let mut filter = Filter::<4, { bucket_count(4) }>::new();
    /// filter.deny(2);
    /// assert!(!filter.is_connectable(2));
    /// assert!(filter.is_connectable(3));
    /// ```
    #[cfg(any(feature = "ftd", feature = "mtd"))]
    pub fn deny(&mut self, node_id: NodeId) {
        self.denied.set(Self::index(node_id));
        tracing::debug!(node_id, denied = self.denied.popcount(), "Denied node");
    }

    /// Makes every node connectable again.
    ///
    /// # Examples
    /// ```
    /// use nodeid_filter::{Filter, bucket_count};
    ///
    /// let mut filter = Filter::<4, { bucket_count(4) }>::new();
    /// filter.deny(0);
    /// filter.deny(3);
    /// filter.clear();
    /// assert_eq!(filter.denied_count(), 0);
    /// ```
    #[cfg(any(feature = "ftd", feature = "mtd"))]
    pub fn clear(&mut self) {
        tracing::debug!(denied = self.denied.popcount(), "Clearing node ID filter");
        self.denied.clear();
    }

    /// Returns the number of currently denied nodes.
    #[inline]
    pub fn denied_count(&self) -> usize {
        self.denied.popcount()
    }

    /// Returns the currently denied nodes in ascending order.
    pub fn denied(&self) -> Denied<'_, NODE_COUNT, BUCKET_COUNT> {
        Denied(self.denied.iter_ones())
    }

    fn index(node_id: NodeId) -> usize {
        let idx = usize::from(node_id);
        assert!(
            idx < NODE_COUNT,
            "Node ID {node_id} out of range for network size {NODE_COUNT}"
        );
        idx
    }
}

impl<const NODE_COUNT: usize, const BUCKET_COUNT: usize> Default
    for Filter<NODE_COUNT, BUCKET_COUNT>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const NODE_COUNT: usize, const BUCKET_COUNT: usize> Debug
    for Filter<NODE_COUNT, BUCKET_COUNT>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Filter")
            .field("denied", &self.denied)
            .finish()
    }
}

/// Iterator over the denied nodes of a [`Filter`].
///
/// Returned by [`Filter::denied()`].
#[derive(Clone, Copy)]
pub struct Denied<'filter, const NODE_COUNT: usize, const BUCKET_COUNT: usize>(
    IterOnes<'filter, NODE_COUNT, BUCKET_COUNT>,
);

impl<const NODE_COUNT: usize, const BUCKET_COUNT: usize> Iterator
    for Denied<'_, NODE_COUNT, BUCKET_COUNT>
{
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        // indices never exceed NODE_COUNT, which fits NodeId for any valid filter
        self.0.next().map(|idx| idx as NodeId)
    }
}

impl<const NODE_COUNT: usize, const BUCKET_COUNT: usize> FusedIterator
    for Denied<'_, NODE_COUNT, BUCKET_COUNT>
{
}
