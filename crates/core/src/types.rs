/// Annotation primary keys are UUIDs assigned by the database.
pub type AnnotationId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
