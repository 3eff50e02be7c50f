//! # Memory Management
//!
//! Object pools for allocation-free hot paths.
//!
//! ## Design Philosophy
//!
//! Instances are allocated on first demand and recycled afterwards. Once a
//! pool has seen its peak load:
//! - No heap allocations per checkout
//! - No deallocation churn per return
//! - Predictable, flat latency

mod pool;
mod shared;
mod stats;

pub use pool::ObjectPool;
pub use shared::{Pooled, SharedPool};
pub use stats::PoolStats;
