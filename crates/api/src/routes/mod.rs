pub mod annotation;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree for the handler role.
///
/// ```text
/// /annotations            list_annotations, create_annotation
/// /annotations/{id}       get_annotation, update_annotation (PUT|PATCH),
///                         delete_annotation
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(annotation::router())
}
