//! Cache key scheme for annotation entries.

use pointcloud_core::types::AnnotationId;

/// Key holding the cached full annotation list.
pub const ALL_ANNOTATIONS_KEY: &str = "annotations:all";

/// Key for a single cached annotation.
pub fn annotation_key(id: AnnotationId) -> String {
    format!("annotation:{id}")
}
