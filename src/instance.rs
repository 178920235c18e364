use crate::filter::Filter;

/// One simulated device.
///
/// Owns the node ID filter consulted by its networking stack. The filter is
/// created and dropped together with the instance.
#[cfg_attr(
    not(any(feature = "ftd", feature = "mtd")),
    doc = r#"
A radio-only build hands out the filter for reading only:

```compile_fail,E0599
use nodeid_filter::SimInstance;

let mut instance = SimInstance::new();
instance.node_id_filter_mut().deny(3);
```
"#
)]
#[derive(Debug, Default)]
pub struct Instance<const NODE_COUNT: usize, const BUCKET_COUNT: usize> {
    node_id_filter: Filter<NODE_COUNT, BUCKET_COUNT>,
}

impl<const NODE_COUNT: usize, const BUCKET_COUNT: usize> Instance<NODE_COUNT, BUCKET_COUNT> {
    /// Creates an instance whose filter lets every node connect.
    ///
    /// # Panics
    /// Panics if `NODE_COUNT == 0` or `BUCKET_COUNT != bucket_count(NODE_COUNT)`.
    pub fn new() -> Self {
        Self {
            node_id_filter: Filter::new(),
        }
    }

    /// Returns the node ID filter of this instance.
    #[inline]
    pub fn node_id_filter(&self) -> &Filter<NODE_COUNT, BUCKET_COUNT> {
        &self.node_id_filter
    }

    /// Returns the node ID filter of this instance for mutation.
    #[cfg(any(feature = "ftd", feature = "mtd"))]
    #[inline]
    pub fn node_id_filter_mut(&mut self) -> &mut Filter<NODE_COUNT, BUCKET_COUNT> {
        &mut self.node_id_filter
    }
}
