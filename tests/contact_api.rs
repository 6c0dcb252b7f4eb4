//! Contact endpoint through the full application.

use axum::http::StatusCode;
use serde_json::json;

mod common;

const VALID: &str = r#"{
    "name": "Maria",
    "phone": "+30 697 827 7120",
    "email": "maria@example.gr",
    "message": "We would like a boat for six on Saturday.",
    "date": "2026-07-04"
}"#;

#[tokio::test]
async fn test_valid_submission_is_accepted() {
    let (app, _public) = common::test_app();

    let response = common::post_json(&app, "/api/contact", VALID).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        common::body_json(response).await,
        json!({"message": "Contact form submitted successfully", "success": true})
    );
}

#[tokio::test]
async fn test_validation_errors_are_bad_requests() {
    let cases = [
        (r#"{"name":"Maria","phone":"6978277120"}"#, "Missing required fields"),
        (
            r#"{"name":null,"phone":"6978277120","message":"Long enough message"}"#,
            "Missing required fields",
        ),
        (
            r#"{"name":" M ","phone":"6978277120","message":"Long enough message"}"#,
            "Name must be at least 2 characters",
        ),
        (
            r#"{"name":"Maria","phone":"12345","message":"Long enough message"}"#,
            "Invalid phone number format",
        ),
        (
            r#"{"name":"Maria","phone":"6978277120","message":"too short"}"#,
            "Message must be at least 10 characters",
        ),
        (
            r#"{"name":"Maria","phone":"6978277120","message":"Long enough message","email":"not-an-email"}"#,
            "Invalid email format",
        ),
    ];

    for (body, expected) in cases {
        // fresh app per case so the rate limiter never interferes
        let (app, _public) = common::test_app();
        let response = common::post_json(&app, "/api/contact", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(common::body_json(response).await, json!({"error": expected}));
    }
}

#[tokio::test]
async fn test_malformed_body_is_internal_error() {
    let (app, _public) = common::test_app();

    let response = common::post_json(&app, "/api/contact", "{not json").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        common::body_json(response).await,
        json!({"error": "Internal server error", "success": false})
    );
}

#[tokio::test]
async fn test_html_form_post_is_accepted() {
    let (app, _public) = common::test_app();

    // Every field the contact page renders, as a browser submits them
    let html = common::body_text(common::get(&app, "/contact").await).await;
    for field in ["name", "phone", "email", "date", "time", "message"] {
        assert!(html.contains(&format!("name=\"{field}\"")), "{field}");
    }
    assert!(html.contains("action=\"/api/contact\""));

    let response = common::post_form(
        &app,
        "/api/contact",
        "name=Maria&phone=%2B30+697+827+7120&email=&date=2026-07-04&time=&message=Long+enough+message",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        common::body_json(response).await,
        json!({"message": "Contact form submitted successfully", "success": true})
    );
}

#[tokio::test]
async fn test_html_form_post_is_validated() {
    let (app, _public) = common::test_app();

    let response = common::post_form(&app, "/api/contact", "name=Maria&phone=12345&message=Long+enough+message").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        common::body_json(response).await,
        json!({"error": "Invalid phone number format"})
    );

    let response = common::post_form(&app, "/api/contact", "name=Maria&phone=6978277120").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        common::body_json(response).await,
        json!({"error": "Missing required fields"})
    );
}

#[tokio::test]
async fn test_get_is_method_not_allowed() {
    let (app, _public) = common::test_app();

    let response = common::get(&app, "/api/contact").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        common::body_json(response).await,
        json!({"error": "Method not allowed"})
    );
}

#[tokio::test]
async fn test_submissions_are_rate_limited() {
    let public = common::public_dir();
    let mut config = common::test_config(&public);
    config.contact.burst_size = 2;
    config.contact.submissions_per_minute = 1;
    let app = rentrib_site::build_app(common::test_state(config));

    for _ in 0..2 {
        let response = common::post_json(&app, "/api/contact", VALID).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
    let response = common::post_json(&app, "/api/contact", VALID).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        common::body_json(response).await,
        json!({"error": "Too many requests", "success": false})
    );

    // GET is not counted against the budget
    let response = common::get(&app, "/api/contact").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let public = common::public_dir();
    let mut config = common::test_config(&public);
    config.security.max_body_size = 64;
    let app = rentrib_site::build_app(common::test_state(config));

    let response = common::post_json(&app, "/api/contact", VALID).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
