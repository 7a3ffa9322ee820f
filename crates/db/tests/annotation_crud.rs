//! Integration tests for annotation repository CRUD operations.
//!
//! Exercises the repository layer against a real database:
//! - Create assigns an id and matching timestamps
//! - Round-trip and list ordering
//! - Partial update semantics (absent vs present-but-empty fields)
//! - Typed not-found results from update and delete

use sqlx::PgPool;
use uuid::Uuid;

use pointcloud_db::models::annotation::{CreateAnnotation, UpdateAnnotation};
use pointcloud_db::repositories::AnnotationRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_annotation(title: &str) -> CreateAnnotation {
    CreateAnnotation {
        x: 1.5,
        y: 2.5,
        z: 3.5,
        title: title.to_string(),
        description: String::new(),
    }
}

fn untouched() -> UpdateAnnotation {
    UpdateAnnotation {
        x: None,
        y: None,
        z: None,
        title: None,
        description: None,
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_assigns_id_and_timestamps(pool: PgPool) {
    let created = AnnotationRepo::create(&pool, &new_annotation("POI"))
        .await
        .unwrap();

    assert!(!created.id.is_nil());
    assert_eq!(created.title, "POI");
    assert_eq!(created.description, "");
    assert_eq!(created.created_at, created.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn create_assigns_unique_ids(pool: PgPool) {
    let a = AnnotationRepo::create(&pool, &new_annotation("first"))
        .await
        .unwrap();
    let b = AnnotationRepo::create(&pool, &new_annotation("second"))
        .await
        .unwrap();

    assert_ne!(a.id, b.id);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn find_by_id_round_trips(pool: PgPool) {
    let created = AnnotationRepo::create(&pool, &new_annotation("Round trip"))
        .await
        .unwrap();

    let found = AnnotationRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("annotation should exist");

    assert_eq!(found, created);
}

#[sqlx::test(migrations = "./migrations")]
async fn find_by_id_missing_returns_none(pool: PgPool) {
    let found = AnnotationRepo::find_by_id(&pool, Uuid::new_v4())
        .await
        .unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn list_all_empty_returns_empty_vec(pool: PgPool) {
    let all = AnnotationRepo::list_all(&pool).await.unwrap();
    assert!(all.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn list_all_orders_newest_first(pool: PgPool) {
    let first = AnnotationRepo::create(&pool, &new_annotation("older"))
        .await
        .unwrap();
    let second = AnnotationRepo::create(&pool, &new_annotation("newer"))
        .await
        .unwrap();

    let all = AnnotationRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, second.id);
    assert_eq!(all[1].id, first.id);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn update_title_only_leaves_coordinates(pool: PgPool) {
    let created = AnnotationRepo::create(&pool, &new_annotation("POI"))
        .await
        .unwrap();

    let updated = AnnotationRepo::update(
        &pool,
        created.id,
        &UpdateAnnotation {
            title: Some("POI2".to_string()),
            ..untouched()
        },
    )
    .await
    .unwrap()
    .expect("annotation should exist");

    assert_eq!(updated.title, "POI2");
    assert_eq!(updated.x, created.x);
    assert_eq!(updated.y, created.y);
    assert_eq!(updated.z, created.z);
    assert_eq!(updated.description, created.description);
    assert!(updated.updated_at >= updated.created_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_present_empty_description_overwrites(pool: PgPool) {
    let created = AnnotationRepo::create(
        &pool,
        &CreateAnnotation {
            description: "something".to_string(),
            ..new_annotation("With description")
        },
    )
    .await
    .unwrap();

    let updated = AnnotationRepo::update(
        &pool,
        created.id,
        &UpdateAnnotation {
            description: Some(String::new()),
            ..untouched()
        },
    )
    .await
    .unwrap()
    .expect("annotation should exist");

    assert_eq!(updated.description, "");
    assert_eq!(updated.title, "With description");
}

#[sqlx::test(migrations = "./migrations")]
async fn update_missing_returns_none(pool: PgPool) {
    let updated = AnnotationRepo::update(
        &pool,
        Uuid::new_v4(),
        &UpdateAnnotation {
            title: Some("nobody".to_string()),
            ..untouched()
        },
    )
    .await
    .unwrap();

    assert!(updated.is_none());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn delete_removes_row(pool: PgPool) {
    let created = AnnotationRepo::create(&pool, &new_annotation("Delete me"))
        .await
        .unwrap();

    assert!(AnnotationRepo::delete(&pool, created.id).await.unwrap());
    assert!(AnnotationRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_missing_returns_false(pool: PgPool) {
    assert!(!AnnotationRepo::delete(&pool, Uuid::new_v4()).await.unwrap());
}
