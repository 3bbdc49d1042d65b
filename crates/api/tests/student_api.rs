//! HTTP-level integration tests for the `/students` resource.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_is_empty, body_json, delete, get, post_json, put_json, send_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_student_returns_201_and_echoes_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/students",
        json!({
            "name": "Kovács Anna",
            "email": "anna@example.com",
            "birthdate": "2005-09-01",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["name"], "Kovács Anna");
    assert_eq!(json["email"], "anna@example.com");
    assert_eq!(json["birthdate"], "2005-09-01");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_get_round_trips(pool: PgPool) {
    let input = json!({
        "name": "Szabó Bence",
        "email": "bence@example.com",
        "birthdate": "2004-12-24",
    });
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/students", input.clone()).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/students/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let mut expected = input;
    expected["id"] = json!(id);
    assert_eq!(body_json(response).await, expected);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_students(pool: PgPool) {
    common::create_student(&pool, "Első Diák").await;
    common::create_student(&pool, "Második Diák").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/students").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["name"], "Első Diák");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_students_empty_is_200(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/students").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_student_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/students/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], 404);
    assert_eq!(json["message"], "A diák nem található.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_non_numeric_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/students/abc").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_name_returns_400_with_details(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/students",
        json!({ "email": "a@example.com", "birthdate": "2001-01-01" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], 400);
    assert_eq!(json["message"], "Validation Error");
    assert!(json["details"]["name"].is_string());
    assert!(json["details"].get("email").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/students",
        json!({ "name": "", "email": "a@example.com", "birthdate": "2001-01-01" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["details"]["name"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_email_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/students",
        json!({ "name": "Anna", "email": "not-an-email", "birthdate": "2001-01-01" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["details"]["email"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bad_birthdate_format_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/students",
        json!({ "name": "Anna", "email": "a@example.com", "birthdate": "2020/01/01" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["details"]["birthdate"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_impossible_birthdate_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/students",
        json!({ "name": "Anna", "email": "a@example.com", "birthdate": "2020-02-30" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Validation Error");
    assert_eq!(json["details"]["birthdate"], "Not a valid calendar date");

    let id = common::create_student(&pool, "Szökőnap").await;
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/students/{id}"),
        json!({ "birthdate": "2021-02-29" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["details"]["birthdate"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_invalid_fields_reported_at_once(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/students", json!({ "email": 12 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let details = body_json(response).await["details"].clone();
    let details = details.as_object().unwrap();
    assert_eq!(details.len(), 3);
    assert!(details.contains_key("name"));
    assert!(details.contains_key("email"));
    assert!(details.contains_key("birthdate"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_object_body_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = send_json(app, "POST", "/students", "[1, 2]".into()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], 400);
    assert_eq!(json["message"], "Bad Request");

    let app = common::build_test_app(pool);
    let response = send_json(app, "POST", "/students", "{ not json".into()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_leaves_other_fields(pool: PgPool) {
    let id = common::create_student(&pool, "Tóth Réka").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/students/{id}"),
        json!({ "email": "reka.uj@example.com" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_is_empty(response).await);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/students/{id}")).await).await;
    assert_eq!(json["name"], "Tóth Réka");
    assert_eq!(json["email"], "reka.uj@example.com");
    assert_eq!(json["birthdate"], "2006-03-14");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_birthdate(pool: PgPool) {
    let id = common::create_student(&pool, "Fekete Ádám").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/students/{id}"),
        json!({ "birthdate": "2007-07-07" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/students/{id}")).await).await;
    assert_eq!(json["birthdate"], "2007-07-07");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_with_invalid_field_returns_400(pool: PgPool) {
    let id = common::create_student(&pool, "Kiss Lili").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/students/{id}"),
        json!({ "email": "nope" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["details"]["email"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_update_on_existing_student_returns_204(pool: PgPool) {
    let id = common::create_student(&pool, "Horváth Ede").await;

    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("/students/{id}"), json!({})).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_student_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/students/999999", json!({ "name": "Senki" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_student_without_enrollments_returns_204(pool: PgPool) {
    let id = common::create_student(&pool, "Varga Noémi").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/students/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/students/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_enrolled_student_returns_409_and_keeps_rows(pool: PgPool) {
    let student_id = common::create_student(&pool, "Molnár Zsófi").await;
    let course_id = common::create_course(&pool, "Irodalom").await;
    let enrollment_id = common::enroll(&pool, student_id, course_id).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/students/{student_id}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["error"], 409);
    assert_eq!(
        json["message"],
        "Ehhez a diákhoz tartoznak beiratkozások ezért nem lehet kitörölni."
    );

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/students/{student_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/enrollments/{enrollment_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_student_returns_204(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/students/999999").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_is_empty(response).await);

    let app = common::build_test_app(pool);
    let response = delete(app, "/students/abc").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
