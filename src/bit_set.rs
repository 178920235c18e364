use core::fmt::{Debug, Formatter};
use core::iter::{FusedIterator, Iterator};

/// Computes the number of buckets needed to track `bit_count` indices.
///
/// Inline this call as a const expression into the type annotation generics
/// so the bucket count can never disagree with the bit count.
///
/// # Examples
/// ```
/// use nodeid_filter::bucket_count;
///
/// assert_eq!(bucket_count(4), 1);
/// assert_eq!(bucket_count(16), 2);
/// assert_eq!(bucket_count(33), 5);
/// ```
pub const fn bucket_count(bit_count: usize) -> usize {
    bit_count.div_ceil(8)
}

#[allow(clippy::no_effect)]
#[allow(clippy::unnecessary_operation)]
pub(crate) const fn compile_assert_const_params(bit_count: usize, buckets: usize) {
    // indexing a one-element array with 1 fails const evaluation
    ["BIT_COUNT must be greater than zero."][(bit_count == 0) as usize];
    ["BUCKET_COUNT must match bucket_count(BIT_COUNT)."]
        [(bucket_count(bit_count) != buckets) as usize];
}

pub(crate) fn runtime_assert_const_params(bit_count: usize, buckets: usize) {
    assert_ne!(bit_count, 0, "BIT_COUNT must be greater than zero.");
    assert_eq!(
        bucket_count(bit_count),
        buckets,
        "BUCKET_COUNT must match bucket_count(BIT_COUNT)."
    );
}

/// A fixed-capacity set of indices in `0..BIT_COUNT`.
///
/// `BUCKET_COUNT` is the number of `u8` buckets backing the set and should
/// only be given as `{ bucket_count(BIT_COUNT) }`.
///
/// Every index outside `0..BIT_COUNT` is rejected with a panic, so a bad
/// index can never alias a valid one.
#[derive(PartialEq, Eq, Hash, Clone)]
pub struct BitSet<const BIT_COUNT: usize, const BUCKET_COUNT: usize>(pub(crate) [u8; BUCKET_COUNT]);

impl<const BIT_COUNT: usize, const BUCKET_COUNT: usize> BitSet<BIT_COUNT, BUCKET_COUNT> {
    /// Creates a new set with no index present.
    ///
    /// # Panics
    /// Panics if `BIT_COUNT == 0` or `BUCKET_COUNT != bucket_count(BIT_COUNT)`.
    ///
    /// # Examples
    /// ```
    /// use nodeid_filter::{BitSet, bucket_count};
    ///
    /// let set = BitSet::<16, { bucket_count(16) }>::new();
    /// assert_eq!(set.popcount(), 0);
    /// ```
    pub fn new() -> Self {
        runtime_assert_const_params(BIT_COUNT, BUCKET_COUNT);
        Self([0u8; BUCKET_COUNT])
    }

    /// Creates a new empty set in a `const` context.
    ///
    /// # Compiler Errors
    /// Fails const evaluation if `BIT_COUNT == 0` or `BUCKET_COUNT !=
    /// bucket_count(BIT_COUNT)`.
    ///
    /// # Examples
    /// ```
    /// use nodeid_filter::{BitSet, bucket_count};
    ///
    /// const EMPTY: BitSet<8, { bucket_count(8) }> = BitSet::const_empty();
    /// assert_eq!(EMPTY.popcount(), 0);
    /// ```
    pub const fn const_empty() -> Self {
        compile_assert_const_params(BIT_COUNT, BUCKET_COUNT);
        Self([0u8; BUCKET_COUNT])
    }

    /// Returns the number of indices the set can hold.
    #[inline]
    pub const fn capacity(&self) -> usize {
        BIT_COUNT
    }

    /// Adds `idx` to the set. Adding an index twice is a no-op.
    ///
    /// # Panics
    /// Panics if `idx >= BIT_COUNT`.
    ///
    /// # Examples
    /// ```
    /// use nodeid_filter::{BitSet, bucket_count};
    ///
    /// let mut set = BitSet::<8, { bucket_count(8) }>::new();
    /// set.set(3);
    /// set.set(3);
    /// assert!(set.is_set(3));
    /// assert_eq!(set.popcount(), 1);
    /// ```
    #[inline]
    pub fn set(&mut self, idx: usize) {
        assert!(idx < BIT_COUNT, "Bit index {idx} out of bounds");
        let (group_idx, item_idx) = Self::idxs(idx);
        self.0[group_idx] |= 1 << item_idx;
    }

    /// Removes `idx` from the set.
    ///
    /// # Panics
    /// Panics if `idx >= BIT_COUNT`.
    #[inline]
    pub fn unset(&mut self, idx: usize) {
        assert!(idx < BIT_COUNT, "Bit index {idx} out of bounds");
        let (group_idx, item_idx) = Self::idxs(idx);
        self.0[group_idx] &= !(1 << item_idx);
    }

    /// Removes every index from the set.
    ///
    /// # Examples
    /// ```
    /// use nodeid_filter::{BitSet, bucket_count};
    ///
    /// let mut set = BitSet::<12, { bucket_count(12) }>::new();
    /// set.set(1);
    /// set.set(11);
    /// set.clear();
    /// assert_eq!(set.popcount(), 0);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.0.fill(0);
    }

    /// Returns `true` if `idx` is in the set.
    ///
    /// # Panics
    /// Panics if `idx >= BIT_COUNT`.
    #[inline]
    pub fn is_set(&self, idx: usize) -> bool {
        assert!(idx < BIT_COUNT, "Bit index {idx} out of bounds");
        let (group_idx, item_idx) = Self::idxs(idx);
        self.0[group_idx] & 1 << item_idx != 0
    }

    #[inline]
    fn idxs(idx: usize) -> (usize, usize) {
        (idx / 8, idx % 8)
    }

    /// Returns the number of indices in the set.
    #[inline]
    pub fn popcount(&self) -> usize {
        self.0.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Returns an iterator over the indices in the set, in ascending order.
    ///
    /// Runs in O(max(k, b)) where k is the number of set indices and b the
    /// number of buckets.
    ///
    /// # Examples
    /// ```
    /// use nodeid_filter::{BitSet, bucket_count};
    ///
    /// let mut set = BitSet::<20, { bucket_count(20) }>::new();
    /// set.set(17);
    /// set.set(2);
    /// let mut ones = set.iter_ones();
    /// assert_eq!(ones.next(), Some(2));
    /// assert_eq!(ones.next(), Some(17));
    /// assert_eq!(ones.next(), None);
    /// ```
    #[inline]
    pub fn iter_ones(&self) -> IterOnes<'_, BIT_COUNT, BUCKET_COUNT> {
        IterOnes {
            buckets: &self.0,
            next_idx: 0,
        }
    }
}

impl<const BIT_COUNT: usize, const BUCKET_COUNT: usize> Default
    for BitSet<BIT_COUNT, BUCKET_COUNT>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const BIT_COUNT: usize, const BUCKET_COUNT: usize> Debug for BitSet<BIT_COUNT, BUCKET_COUNT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "LSB -> ")?;
        for i in 0..BIT_COUNT {
            if i % 8 == 0 {
                write!(f, "{i}: ")?;
            }
            write!(f, "{}", if self.is_set(i) { '1' } else { '0' })?;
            if i % 8 == 7 && i < BIT_COUNT - 1 {
                write!(f, " ")?;
            }
        }
        write!(f, " <- MSB")
    }
}

/// Iterator over the indices present in a [`BitSet`], in ascending order.
///
/// Whole empty buckets are skipped at once, so a sparse set costs roughly one
/// step per bucket plus one per present index.
///
/// Returned by [`BitSet::iter_ones()`].
#[derive(Clone, Copy)]
pub struct IterOnes<'set, const BIT_COUNT: usize, const BUCKET_COUNT: usize> {
    buckets: &'set [u8; BUCKET_COUNT],
    // first index not yet inspected; reaches BIT_COUNT once exhausted
    next_idx: usize,
}

impl<const BIT_COUNT: usize, const BUCKET_COUNT: usize> Iterator
    for IterOnes<'_, BIT_COUNT, BUCKET_COUNT>
{
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_idx < BIT_COUNT {
            let (bucket, bit) = (self.next_idx / 8, self.next_idx % 8);
            let pending = self.buckets[bucket] >> bit;
            if pending == 0 {
                self.next_idx = (bucket + 1) * 8;
                continue;
            }
            let idx = self.next_idx + pending.trailing_zeros() as usize;
            if idx >= BIT_COUNT {
                // stray bits past the capacity in the last bucket
                break;
            }
            self.next_idx = idx + 1;
            return Some(idx);
        }
        self.next_idx = BIT_COUNT;
        None
    }
}

impl<const BIT_COUNT: usize, const BUCKET_COUNT: usize> FusedIterator
    for IterOnes<'_, BIT_COUNT, BUCKET_COUNT>
{
}
