//! Instance-level entry points used by the simulation driver and the
//! networking stack.
//!
//! `deny` and `clear` exist only with the `ftd` or `mtd` feature. A
//! radio-only build can query the filter but never change it.
#![cfg_attr(
    any(feature = "ftd", feature = "mtd"),
    doc = r#"
# Examples
```
use nodeid_filter::SimInstance;
use nodeid_filter::api;

let mut instance = SimInstance::new();
api::deny(&mut instance, 7);
assert!(!api::is_connectable(&instance, 7));
api::clear(&mut instance);
assert!(api::is_connectable(&instance, 7));
```
"#
)]
#![cfg_attr(
    not(any(feature = "ftd", feature = "mtd")),
    doc = r#"
# Examples
```
use nodeid_filter::SimInstance;
use nodeid_filter::api;

let instance = SimInstance::new();
assert!(api::is_connectable(&instance, 7));
```

Without a device role there is nothing to deny with:

```compile_fail,E0425
use nodeid_filter::SimInstance;
use nodeid_filter::api;

let mut instance = SimInstance::new();
api::deny(&mut instance, 7);
```

```compile_fail,E0425
use nodeid_filter::SimInstance;
use nodeid_filter::api;

let mut instance = SimInstance::new();
api::clear(&mut instance);
```
"#
)]

use crate::filter::NodeId;
use crate::instance::Instance;

/// Returns whether `instance` may connect to `node_id`.
///
/// # Panics
/// Panics if `node_id` is outside the simulated network.
pub fn is_connectable<const NODE_COUNT: usize, const BUCKET_COUNT: usize>(
    instance: &Instance<NODE_COUNT, BUCKET_COUNT>,
    node_id: NodeId,
) -> bool {
    instance.node_id_filter().is_connectable(node_id)
}

/// Denies connections from `instance` to `node_id`.
///
/// # Panics
/// Panics if `node_id` is outside the simulated network.
#[cfg(any(feature = "ftd", feature = "mtd"))]
pub fn deny<const NODE_COUNT: usize, const BUCKET_COUNT: usize>(
    instance: &mut Instance<NODE_COUNT, BUCKET_COUNT>,
    node_id: NodeId,
) {
    instance.node_id_filter_mut().deny(node_id);
}

/// Restores connectivity from `instance` to every node.
#[cfg(any(feature = "ftd", feature = "mtd"))]
pub fn clear<const NODE_COUNT: usize, const BUCKET_COUNT: usize>(
    instance: &mut Instance<NODE_COUNT, BUCKET_COUNT>,
) {
    instance.node_id_filter_mut().clear();
}
