//! Route definitions for annotation CRUD.

use axum::routing::get;
use axum::Router;

use crate::handlers::annotation;
use crate::state::AppState;

/// Annotation routes, nested under `/api/v1`.
///
/// ```text
/// POST   /annotations          create_annotation
/// GET    /annotations          list_annotations
/// GET    /annotations/{id}     get_annotation
/// PUT    /annotations/{id}     update_annotation
/// PATCH  /annotations/{id}     update_annotation
/// DELETE /annotations/{id}     delete_annotation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/annotations",
            get(annotation::list_annotations).post(annotation::create_annotation),
        )
        .route(
            "/annotations/{id}",
            get(annotation::get_annotation)
                .put(annotation::update_annotation)
                .patch(annotation::update_annotation)
                .delete(annotation::delete_annotation),
        )
}
