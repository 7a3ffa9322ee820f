//! Handlers for annotation CRUD.
//!
//! Every operation follows the same cache-aside policy over the store:
//! reads try the cache first and fall back to the database, mutations
//! write through to the database and then refresh or drop the affected
//! cache entries. Cache failures degrade performance, never correctness:
//! they are logged and swallowed, and a request only fails when the store
//! itself fails.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use pointcloud_core::annotation::{validate_description, validate_title};
use pointcloud_core::error::CoreError;
use pointcloud_core::types::AnnotationId;
use pointcloud_db::models::annotation::{CreateAnnotation, UpdateAnnotation};
use pointcloud_db::repositories::AnnotationRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /annotations
///
/// Create a new annotation. The store assigns the id and both timestamps.
pub async fn create_annotation(
    State(state): State<AppState>,
    payload: Result<Json<CreateAnnotation>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(|err| {
        tracing::warn!(error = %err, "Invalid create request");
        AppError::BadRequest(err.body_text())
    })?;

    validate_title(&input.title)?;
    validate_description(&input.description)?;

    let annotation = AnnotationRepo::create(&state.pool, &input).await?;

    // Best effort: populate the per-id entry, which also drops the now
    // stale aggregate list.
    if let Err(err) = state.cache.set(&annotation).await {
        tracing::warn!(id = %annotation.id, error = %err, "Failed to cache created annotation");
    }

    tracing::info!(id = %annotation.id, title = %annotation.title, "Annotation created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: annotation })))
}

/// GET /annotations
///
/// List all annotations, newest first. A cached list (including a cached
/// empty list) is served without touching the store.
pub async fn list_annotations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    if let Some(cached) = state.cache.get_all().await {
        tracing::debug!(count = cached.len(), "Returning cached annotation list");
        return Ok(Json(DataResponse { data: cached }));
    }

    let annotations = AnnotationRepo::list_all(&state.pool).await?;

    if let Err(err) = state.cache.set_all(&annotations).await {
        tracing::warn!(error = %err, "Failed to cache annotation list");
    }

    Ok(Json(DataResponse { data: annotations }))
}

/// GET /annotations/{id}
///
/// Get a single annotation by ID, serving from cache when possible.
pub async fn get_annotation(
    State(state): State<AppState>,
    Path(id): Path<AnnotationId>,
) -> AppResult<impl IntoResponse> {
    if let Some(cached) = state.cache.get(id).await {
        tracing::debug!(%id, "Returning cached annotation");
        return Ok(Json(DataResponse { data: cached }));
    }

    let annotation = AnnotationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "annotation",
            id,
        }))?;

    if let Err(err) = state.cache.set(&annotation).await {
        tracing::warn!(%id, error = %err, "Failed to repopulate annotation cache");
    }

    Ok(Json(DataResponse { data: annotation }))
}

/// PUT/PATCH /annotations/{id}
///
/// Partially update an annotation. Absent fields are left untouched;
/// present fields (including empty strings) overwrite. The merge happens
/// against the store, never against a cached copy.
pub async fn update_annotation(
    State(state): State<AppState>,
    Path(id): Path<AnnotationId>,
    payload: Result<Json<UpdateAnnotation>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(|err| {
        tracing::warn!(error = %err, "Invalid update request");
        AppError::BadRequest(err.body_text())
    })?;

    if let Some(ref title) = input.title {
        validate_title(title)?;
    }
    if let Some(ref description) = input.description {
        validate_description(description)?;
    }

    let annotation = AnnotationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "annotation",
            id,
        }))?;

    // Refresh the per-id entry; this also drops the aggregate list, so a
    // later list cannot serve the pre-update record.
    if let Err(err) = state.cache.set(&annotation).await {
        tracing::warn!(%id, error = %err, "Failed to cache updated annotation");
    }

    tracing::info!(%id, "Annotation updated");

    Ok(Json(DataResponse { data: annotation }))
}

/// DELETE /annotations/{id}
///
/// Hard-delete an annotation. A missing row is a 404, distinguishable
/// from storage failures.
pub async fn delete_annotation(
    State(state): State<AppState>,
    Path(id): Path<AnnotationId>,
) -> AppResult<impl IntoResponse> {
    let deleted = AnnotationRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "annotation",
            id,
        }));
    }

    if let Err(err) = state.cache.delete(id).await {
        tracing::warn!(%id, error = %err, "Failed to remove deleted annotation from cache");
    }

    tracing::info!(%id, "Annotation deleted");

    Ok(StatusCode::NO_CONTENT)
}
