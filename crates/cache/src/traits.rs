//! Cache provider trait definition.

use async_trait::async_trait;

use pointcloud_core::types::AnnotationId;
use pointcloud_db::models::annotation::Annotation;

use crate::error::CacheResult;

/// Cache operations over annotation entries.
///
/// Injected into the handler layer as `Arc<dyn AnnotationCache>` so tests
/// can substitute [`crate::MemoryCache`] without a network dependency.
#[async_trait]
pub trait AnnotationCache: Send + Sync {
    /// Look up a single annotation. A miss and any internal backend error
    /// both return `None` — the cache never fails a read.
    async fn get(&self, id: AnnotationId) -> Option<Annotation>;

    /// Look up the cached full list. `None` means "not cached, ask the
    /// store"; `Some(vec![])` is a valid cached empty list.
    async fn get_all(&self) -> Option<Vec<Annotation>>;

    /// Upsert the entry for one annotation and drop the aggregate list
    /// entry (the list is now stale).
    async fn set(&self, annotation: &Annotation) -> CacheResult<()>;

    /// Overwrite the aggregate list entry.
    async fn set_all(&self, annotations: &[Annotation]) -> CacheResult<()>;

    /// Remove the entry for one annotation and drop the aggregate list
    /// entry.
    async fn delete(&self, id: AnnotationId) -> CacheResult<()>;

    /// Drop the aggregate list entry only; per-item entries survive.
    async fn invalidate_all(&self) -> CacheResult<()>;
}
