//! Cache-aside layer in front of the annotation store.
//!
//! ```text
//! AnnotationCache (trait)
//!   ├── RedisCache   - shared ConnectionManager, JSON values, fixed TTL
//!   └── MemoryCache  - in-process fake with the same invalidation semantics
//! ```
//!
//! The cache is advisory: a degraded backend behaves as an always-miss
//! cache. Reads collapse backend errors into a miss inside the provider;
//! write errors surface as [`CacheError`] and callers swallow them.
//!
//! Key scheme: one `annotation:{id}` entry per record plus an
//! `annotations:all` aggregate entry holding the full list. The aggregate
//! is a derived view, so every per-item write or delete drops it.

pub mod error;
pub mod keys;
pub mod providers;
pub mod traits;

pub use error::{CacheError, CacheResult};
pub use providers::memory::MemoryCache;
pub use providers::redis::RedisCache;
pub use traits::AnnotationCache;
