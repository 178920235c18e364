//! A fixed-size node ID connectivity filter for simulated mesh networks.
//! `no_std`, no heap / `alloc`, no `unsafe`.
//!
//! A test driver uses the filter to cut simulated nodes off from each other
//! and so exercise mesh logic under artificial partitions, while the
//! networking stack asks it before every connection attempt.
//!
//! # Features
//!
//! - `simulation` (default): the filter, the owning [`Instance`] and the
//!   [`api`] functions. Without it only [`BitSet`] is built.
//! - `ftd` (default) / `mtd`: device roles. Either one enables `deny` and
//!   `clear`; a radio-only build can query the filter but not change it.
//!
//! Out-of-range node IDs are a caller bug and panic instead of being clamped.
#![cfg_attr(
    all(feature = "simulation", any(feature = "ftd", feature = "mtd")),
    doc = r#"
# Examples
```
use nodeid_filter::{Filter, bucket_count};

const NETWORK_SIZE: usize = 4;
let mut filter = Filter::<NETWORK_SIZE, { bucket_count(NETWORK_SIZE) }>::new();
assert!(filter.is_connectable(2));
filter.deny(2);
assert!(!filter.is_connectable(2));
filter.clear();
assert!(filter.is_connectable(2));
```
"#
)]
#![cfg_attr(
    all(feature = "simulation", not(any(feature = "ftd", feature = "mtd"))),
    doc = r#"
# Examples
```
use nodeid_filter::{Filter, bucket_count};

let filter = Filter::<4, { bucket_count(4) }>::new();
assert!((0..4).all(|id| filter.is_connectable(id)));
```
"#
)]
#![cfg_attr(
    not(feature = "simulation"),
    doc = r#"
# Examples
```
use nodeid_filter::{BitSet, bucket_count};

let mut set = BitSet::<4, { bucket_count(4) }>::new();
set.set(2);
assert!(set.is_set(2));
```
"#
)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

mod bit_set;
#[cfg(feature = "simulation")]
mod filter;
#[cfg(feature = "simulation")]
mod instance;

#[cfg(feature = "simulation")]
pub mod api;

pub use bit_set::{BitSet, IterOnes, bucket_count};
#[cfg(feature = "simulation")]
pub use filter::{Denied, Filter, NodeId};
#[cfg(feature = "simulation")]
pub use instance::Instance;

/// Default number of nodes in a simulated network.
pub const MAX_NETWORK_SIZE: usize = 33;

/// Number of buckets backing a filter of [`MAX_NETWORK_SIZE`] nodes.
pub const MAX_NETWORK_BUCKETS: usize = bucket_count(MAX_NETWORK_SIZE);

/// A [`Filter`] sized for [`MAX_NETWORK_SIZE`] nodes.
#[cfg(feature = "simulation")]
pub type SimFilter = Filter<MAX_NETWORK_SIZE, MAX_NETWORK_BUCKETS>;

/// An [`Instance`] sized for [`MAX_NETWORK_SIZE`] nodes.
#[cfg(feature = "simulation")]
pub type SimInstance = Instance<MAX_NETWORK_SIZE, MAX_NETWORK_BUCKETS>;
