//! Integration tests for the workout ledger endpoints

mod common;

use axum::http::StatusCode;
use rstest::rstest;
use serde_json::json;
use workout_tracker_backend::config::StorageBackend;

#[rstest]
#[case::sqlite(StorageBackend::Sqlite)]
#[case::memory(StorageBackend::Memory)]
#[tokio::test]
async fn test_calories_from_exercise_rate(#[case] backend: StorageBackend) {
    let app = common::TestApp::new(backend).await;

    let calories = app
        .log_workout(json!({"exercise_name": "Running", "duration_minutes": 30}))
        .await;

    assert_eq!(calories, 300);
}

#[rstest]
#[case::sqlite(StorageBackend::Sqlite)]
#[case::memory(StorageBackend::Memory)]
#[tokio::test]
async fn test_unknown_exercise_uses_default_rate(#[case] backend: StorageBackend) {
    let app = common::TestApp::new(backend).await;

    let calories = app
        .log_workout(json!({"exercise_name": "UnknownExercise", "duration_minutes": 10}))
        .await;

    assert_eq!(calories, 50);
}

#[rstest]
#[case::sqlite(StorageBackend::Sqlite)]
#[case::memory(StorageBackend::Memory)]
#[tokio::test]
async fn test_explicit_calories_kept(#[case] backend: StorageBackend) {
    let app = common::TestApp::new(backend).await;

    let calories = app
        .log_workout(json!({
            "exercise_name": "Running",
            "duration_minutes": 30,
            "calories_burned": 275
        }))
        .await;

    assert_eq!(calories, 275);
}

#[rstest]
#[case::sqlite(StorageBackend::Sqlite)]
#[case::memory(StorageBackend::Memory)]
#[tokio::test]
async fn test_list_newest_first(#[case] backend: StorageBackend) {
    let app = common::TestApp::new(backend).await;
    app.log_workout(json!({"exercise_name": "Running", "duration_minutes": 30}))
        .await;
    app.log_workout(json!({"exercise_name": "Yoga", "duration_minutes": 20}))
        .await;

    let (status, body) = app.get_json("/api/workouts").await;

    assert_eq!(status, StatusCode::OK);
    let workouts = body["workouts"].as_array().unwrap();
    assert_eq!(workouts.len(), 2);
    assert_eq!(workouts[0]["exercise_name"], "Yoga");
    assert_eq!(workouts[1]["exercise_name"], "Running");
    assert!(workouts[0]["timestamp"].is_string());
}

#[rstest]
#[case::missing_name(json!({"duration_minutes": 30}), "Exercise name is required")]
#[case::blank_name(json!({"exercise_name": "  ", "duration_minutes": 30}), "Exercise name is required")]
#[case::missing_duration(json!({"exercise_name": "Running"}), "Duration is required")]
#[case::zero_duration(json!({"exercise_name": "Running", "duration_minutes": 0}), "Duration must be greater than zero")]
#[tokio::test]
async fn test_invalid_workout_rejected(#[case] body: serde_json::Value, #[case] message: &str) {
    let app = common::TestApp::new(StorageBackend::Sqlite).await;

    let (status, response) = app.post_json("/api/workouts", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(response["error"]["message"], message);

    let (_, listed) = app.get_json("/api/workouts").await;
    assert!(listed["workouts"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_json_uses_error_envelope() {
    let app = common::TestApp::new(StorageBackend::Memory).await;

    let (status, body) = app.post("/api/workouts", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body = common::parse(&body);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[rstest]
#[case::sqlite(StorageBackend::Sqlite)]
#[case::memory(StorageBackend::Memory)]
#[tokio::test]
async fn test_delete_workout(#[case] backend: StorageBackend) {
    let app = common::TestApp::new(backend).await;
    let (_, created) = app
        .post_json(
            "/api/workouts",
            &json!({"exercise_name": "Running", "duration_minutes": 30}),
        )
        .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = app.delete(&format!("/api/workouts/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::parse(&body), json!({}));

    let (status, body) = app.delete(&format!("/api/workouts/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(common::parse(&body)["error"]["message"], "Workout not found");

    let (status, _) = app.delete("/api/workouts/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
