//! Annotation model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use pointcloud_core::types::{AnnotationId, Timestamp};

/// A row from the `annotations` table: a 3D point with title and
/// description metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Annotation {
    pub id: AnnotationId,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new annotation. The store assigns the id and both
/// timestamps.
#[derive(Debug, Deserialize)]
pub struct CreateAnnotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// DTO for updating an existing annotation.
///
/// Every field is optional: absent fields leave the stored value untouched,
/// present fields (including an empty string) overwrite it.
#[derive(Debug, Deserialize)]
pub struct UpdateAnnotation {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub title: Option<String>,
    pub description: Option<String>,
}
