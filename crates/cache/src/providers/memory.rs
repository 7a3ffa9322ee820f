//! In-memory cache provider.
//!
//! Process-local fake with the same invalidation semantics as the Redis
//! provider. Backs API tests and cache-less local runs; entries never
//! expire (TTL is a staleness bound for the shared backend, not needed in
//! a single-process fake).

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use pointcloud_core::types::AnnotationId;
use pointcloud_db::models::annotation::Annotation;

use crate::error::CacheResult;
use crate::traits::AnnotationCache;

#[derive(Debug, Default)]
struct Inner {
    items: HashMap<AnnotationId, Annotation>,
    /// `Some(vec![])` is a cached empty list, distinct from `None` (miss).
    all: Option<Vec<Annotation>>,
}

/// In-process annotation cache.
#[derive(Debug, Default)]
pub struct MemoryCache {
    inner: Mutex<Inner>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnnotationCache for MemoryCache {
    async fn get(&self, id: AnnotationId) -> Option<Annotation> {
        self.inner.lock().await.items.get(&id).cloned()
    }

    async fn get_all(&self) -> Option<Vec<Annotation>> {
        self.inner.lock().await.all.clone()
    }

    async fn set(&self, annotation: &Annotation) -> CacheResult<()> {
        let mut inner = self.inner.lock().await;
        inner.items.insert(annotation.id, annotation.clone());
        inner.all = None;
        Ok(())
    }

    async fn set_all(&self, annotations: &[Annotation]) -> CacheResult<()> {
        self.inner.lock().await.all = Some(annotations.to_vec());
        Ok(())
    }

    async fn delete(&self, id: AnnotationId) -> CacheResult<()> {
        let mut inner = self.inner.lock().await;
        inner.items.remove(&id);
        inner.all = None;
        Ok(())
    }

    async fn invalidate_all(&self) -> CacheResult<()> {
        self.inner.lock().await.all = None;
        Ok(())
    }
}
