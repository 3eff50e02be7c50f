//! # RECYCLER Core
//!
//! Generic object pools for code that runs every frame:
//! - Reuse instances instead of allocating per frame
//! - Zero allocation once the pool is warm
//! - No global state, pools are plain owned values
//!
//! ## Architecture Rules
//!
//! 1. **Pool operations never fail** - only config loading returns errors
//! 2. **Single-threaded by default** - [`ObjectPool`] takes `&mut self`
//! 3. **Explicit sharing** - [`SharedPool`] adds a mutex when threads need it
//!
//! ## Example
//!
//! ```rust
//! use recycler_core::{ObjectPool, PoolConfig};
//!
//! let config = PoolConfig::from_toml_str("name = \"hits\"\nmax_idle = 64").unwrap();
//! let mut hits: ObjectPool<Vec<u32>> = ObjectPool::with_config(&config).with_reset(Vec::clear);
//!
//! let mut frame_hits = hits.acquire();
//! frame_hits.push(42);
//! hits.release(frame_hits);
//!
//! assert_eq!(hits.idle_count(), 1);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod memory;

pub use config::PoolConfig;
pub use error::{PoolError, PoolResult};
pub use memory::{ObjectPool, PoolStats, Pooled, SharedPool};
