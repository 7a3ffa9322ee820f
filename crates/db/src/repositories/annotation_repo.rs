//! Repository for the `annotations` table.

use sqlx::PgPool;

use pointcloud_core::types::AnnotationId;

use crate::models::annotation::{Annotation, CreateAnnotation, UpdateAnnotation};

/// Column list for annotation queries.
const COLUMNS: &str = "id, x, y, z, title, description, created_at, updated_at";

/// Provides CRUD operations for annotations.
pub struct AnnotationRepo;

impl AnnotationRepo {
    /// Create a new annotation, returning the stored row. The database
    /// assigns the id and both timestamps.
    pub async fn create(pool: &PgPool, input: &CreateAnnotation) -> Result<Annotation, sqlx::Error> {
        let query = format!(
            "INSERT INTO annotations (x, y, z, title, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Annotation>(&query)
            .bind(input.x)
            .bind(input.y)
            .bind(input.z)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find an annotation by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: AnnotationId,
    ) -> Result<Option<Annotation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM annotations WHERE id = $1");
        sqlx::query_as::<_, Annotation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all annotations, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Annotation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM annotations
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Annotation>(&query).fetch_all(pool).await
    }

    /// Partially update an annotation. Absent fields keep their stored
    /// values; the merge happens in the store, in a single statement.
    ///
    /// Returns `None` when no row matches the id.
    pub async fn update(
        pool: &PgPool,
        id: AnnotationId,
        input: &UpdateAnnotation,
    ) -> Result<Option<Annotation>, sqlx::Error> {
        let query = format!(
            "UPDATE annotations SET
                x = COALESCE($1, x),
                y = COALESCE($2, y),
                z = COALESCE($3, z),
                title = COALESCE($4, title),
                description = COALESCE($5, description),
                updated_at = NOW()
             WHERE id = $6
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Annotation>(&query)
            .bind(input.x)
            .bind(input.y)
            .bind(input.z)
            .bind(input.title.as_deref())
            .bind(input.description.as_deref())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an annotation by its ID. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: AnnotationId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM annotations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
