//! Integration tests for the HTML form page

mod common;

use axum::http::StatusCode;
use calorie_advisor_backend::render::{DisplayMode, INVALID_INPUT_MESSAGE};
use rstest::rstest;

const VALID_FORM: &str =
    "gender=male&age=30&height_cm=180&weight_kg=80&activity_level=moderately_active&goal=lose";

#[tokio::test]
async fn test_form_page_uses_configured_mode() {
    let app = common::TestApp::with_display_mode(DisplayMode::Light);

    let (status, body) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("data-mode=\"light\""));
    assert!(body.contains("Calculate My Calories"));
    assert!(body.contains("to get started!"));
}

#[tokio::test]
async fn test_form_page_mode_query_overrides_default() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/?mode=light").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("data-mode=\"light\""));
    assert!(body.contains("name=\"mode\" value=\"light\""));
}

#[tokio::test]
async fn test_form_submission_renders_results() {
    let app = common::TestApp::new();

    let (status, body) = app.post_form("/", VALID_FORM).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Weight Loss Calorie Target:</strong> 2316 kcal/day"));
    assert!(body.contains("2816 kcal/day (BMR: 1817 kcal/day)"));
    assert!(body.contains("24.7 (Normal)"));
    assert!(body.contains("Aim for a 500 kcal deficit"));
    assert!(body.contains("data-mode=\"dark\""));
}

#[tokio::test]
async fn test_mode_does_not_change_results() {
    let app = common::TestApp::new();

    let (_, dark) = app.post_form("/", &format!("{}&mode=dark", VALID_FORM)).await;
    let (_, light) = app.post_form("/", &format!("{}&mode=light", VALID_FORM)).await;

    let results = |html: &str| {
        let start = html.find("<section id=\"results\">").unwrap();
        let end = html.find("</section>").unwrap();
        html[start..end].to_string()
    };

    assert_eq!(results(&dark), results(&light));
    assert!(light.contains("data-mode=\"light\""));
}

#[tokio::test]
async fn test_out_of_range_submission() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_form(
            "/",
            "gender=female&age=14&height_cm=165&weight_kg=60&activity_level=sedentary&goal=maintain",
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains(INVALID_INPUT_MESSAGE));
    assert!(body.contains("Check: Age (years)"));
    assert!(!body.contains("id=\"results\""));
}

#[rstest]
#[case("gender=male&age=-1&height_cm=180&weight_kg=80&activity_level=sedentary&goal=lose")]
#[case("gender=male&age=14.5&height_cm=180&weight_kg=80&activity_level=sedentary&goal=lose")]
#[case("gender=male&age=30&height_cm=180&weight_kg=&activity_level=sedentary&goal=lose")]
#[case("gender=male&age=99999999999&height_cm=180&weight_kg=80&activity_level=sedentary&goal=lose")]
#[tokio::test]
async fn test_unparseable_submission_renders_invalid_page(#[case] form: &str) {
    let app = common::TestApp::new();

    let (status, body) = app.post_form("/", form).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains(INVALID_INPUT_MESSAGE));
    assert!(body.contains("data-mode=\"dark\""));
    assert!(!body.contains("id=\"results\""));
}

#[tokio::test]
async fn test_unparseable_submission_keeps_query_mode() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post_form(
            "/?mode=light",
            "gender=male&age=-1&height_cm=180&weight_kg=80&activity_level=sedentary&goal=lose",
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains(INVALID_INPUT_MESSAGE));
    assert!(body.contains("data-mode=\"light\""));
}
