//! Integration tests for goals and their automatic progress

mod common;

use axum::http::StatusCode;
use rstest::rstest;
use serde_json::json;
use workout_tracker_backend::config::StorageBackend;

#[rstest]
#[case::sqlite(StorageBackend::Sqlite)]
#[case::memory(StorageBackend::Memory)]
#[tokio::test]
async fn test_calorie_goal_completes(#[case] backend: StorageBackend) {
    let app = common::TestApp::new(backend).await;
    let goal_id = app
        .create_goal(json!({"goal_type": "calorie_burn", "target_value": 500}))
        .await;
    let path = format!("/api/goals/{}", goal_id);

    app.log_workout(json!({
        "exercise_name": "Running",
        "duration_minutes": 30,
        "calories_burned": 300
    }))
    .await;

    let (_, body) = app.get_json(&path).await;
    assert_eq!(body["goal"]["current_value"], 300.0);
    assert_eq!(body["goal"]["is_completed"], false);
    assert_eq!(body["goal"]["progress_percent"], 60.0);

    app.log_workout(json!({
        "exercise_name": "Cycling",
        "duration_minutes": 25,
        "calories_burned": 250
    }))
    .await;

    let (_, body) = app.get_json(&path).await;
    assert_eq!(body["goal"]["current_value"], 550.0);
    assert_eq!(body["goal"]["is_completed"], true);
    assert_eq!(body["goal"]["progress_percent"], 100.0);
}

#[rstest]
#[case::sqlite(StorageBackend::Sqlite)]
#[case::memory(StorageBackend::Memory)]
#[tokio::test]
async fn test_deleting_workout_keeps_goal_progress(#[case] backend: StorageBackend) {
    let app = common::TestApp::new(backend).await;
    let goal_id = app
        .create_goal(json!({"goal_type": "calorie_burn", "target_value": 1000}))
        .await;

    let (_, created) = app
        .post_json(
            "/api/workouts",
            &json!({"exercise_name": "Running", "duration_minutes": 30}),
        )
        .await;
    let workout_id = created["id"].as_i64().unwrap();

    let (status, _) = app.delete(&format!("/api/workouts/{}", workout_id)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get_json(&format!("/api/goals/{}", goal_id)).await;
    assert_eq!(body["goal"]["current_value"], 300.0);
}

#[rstest]
#[case::sqlite(StorageBackend::Sqlite)]
#[case::memory(StorageBackend::Memory)]
#[tokio::test]
async fn test_other_goal_types_not_auto_updated(#[case] backend: StorageBackend) {
    let app = common::TestApp::new(backend).await;
    let goal_id = app
        .create_goal(json!({"goal_type": "workout_frequency", "target_value": 3}))
        .await;

    app.log_workout(json!({"exercise_name": "Running", "duration_minutes": 30}))
        .await;

    let (_, body) = app.get_json(&format!("/api/goals/{}", goal_id)).await;
    assert_eq!(body["goal"]["current_value"], 0.0);
    assert_eq!(body["goal"]["label"], "Weekly Workouts");
}

#[rstest]
#[case::sqlite(StorageBackend::Sqlite)]
#[case::memory(StorageBackend::Memory)]
#[tokio::test]
async fn test_goal_crud(#[case] backend: StorageBackend) {
    let app = common::TestApp::new(backend).await;
    let first = app
        .create_goal(json!({
            "goal_type": "target_weight",
            "target_value": 70,
            "target_date": "2030-12-31"
        }))
        .await;
    let second = app
        .create_goal(json!({"goal_type": "exercise_target", "target_value": 10, "target_date": ""}))
        .await;

    let (status, body) = app.get_json("/api/goals").await;
    assert_eq!(status, StatusCode::OK);
    let goals = body["goals"].as_array().unwrap();
    assert_eq!(goals.len(), 2);
    assert_eq!(goals[0]["id"], second);
    assert_eq!(goals[1]["target_date"], "2030-12-31");
    assert!(goals[0]["target_date"].is_null());

    let path = format!("/api/goals/{}", first);
    let (status, body) = app
        .put(&path, &json!({"current_value": 72.5, "is_completed": true}).to_string())
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::parse(&body), json!({}));

    let (_, body) = app.get_json(&path).await;
    assert_eq!(body["goal"]["current_value"], 72.5);
    assert_eq!(body["goal"]["is_completed"], true);

    let (status, _) = app.delete(&path).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get_json(&path).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Goal not found");
}

#[rstest]
#[case::unknown_type(json!({"goal_type": "weight", "target_value": 10}))]
#[case::missing_type(json!({"target_value": 10}))]
#[case::missing_target(json!({"goal_type": "calorie_burn"}))]
#[case::zero_target(json!({"goal_type": "calorie_burn", "target_value": 0}))]
#[tokio::test]
async fn test_invalid_goal_rejected(#[case] body: serde_json::Value) {
    let app = common::TestApp::new(StorageBackend::Memory).await;

    let (status, response) = app.post_json("/api/goals", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_missing_goal_paths() {
    let app = common::TestApp::new(StorageBackend::Sqlite).await;

    let (status, _) = app.get("/api/goals/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.put("/api/goals/999", r#"{"current_value": 1}"#).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.get_json("/api/goals/not-a-number").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Invalid goal ID");
}
