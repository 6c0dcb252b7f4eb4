//! HTTP handlers for `/api/contact`.
//!
//! The site's script posts JSON; a plain HTML form post
//! (`application/x-www-form-urlencoded`) is accepted as well.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::contact::ContactForm;
use crate::observability::metrics;

/// Accept a contact form submission.
///
/// Valid submissions are logged; delivery by email or SMS is not wired up.
pub async fn submit(request: Request) -> Response {
    let form = match parse_form(request).await {
        Ok(form) => form,
        Err(response) => return response,
    };

    if let Err(rejection) = form.validate() {
        tracing::info!(reason = %rejection, "Contact form rejected");
        metrics::record_contact("rejected");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": rejection.to_string() })),
        )
            .into_response();
    }

    let submission_id = Uuid::new_v4();
    tracing::info!(
        submission_id = %submission_id,
        name = form.name.as_deref().unwrap_or_default(),
        phone = form.phone.as_deref().unwrap_or_default(),
        email = form.email.as_deref().filter(|e| !e.is_empty()).unwrap_or("Not provided"),
        message = form.message.as_deref().unwrap_or_default(),
        date = form.date.as_deref().filter(|d| !d.is_empty()).unwrap_or("Not specified"),
        time = form.time.as_deref().filter(|t| !t.is_empty()).unwrap_or("Not specified"),
        "New contact form submission"
    );
    metrics::record_contact("accepted");

    (
        StatusCode::OK,
        Json(json!({
            "message": "Contact form submitted successfully",
            "success": true
        })),
    )
        .into_response()
}

/// `GET /api/contact` is not supported.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}

fn is_urlencoded(request: &Request) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"))
}

/// Decode the body as a urlencoded form or, for any other content type, JSON.
///
/// Bodies over the size limit keep their 413; anything that cannot be
/// decoded is answered with 500.
async fn parse_form(request: Request) -> Result<ContactForm, Response> {
    if is_urlencoded(&request) {
        return match Form::<ContactForm>::from_request(request, &()).await {
            Ok(Form(form)) => Ok(form),
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                Err(rejection.into_response())
            }
            Err(rejection) => Err(decode_error(rejection)),
        };
    }

    let body = Bytes::from_request(request, &())
        .await
        .map_err(IntoResponse::into_response)?;
    serde_json::from_slice(&body).map_err(decode_error)
}

fn decode_error(error: impl std::fmt::Display) -> Response {
    tracing::error!(error = %error, "Contact form submission error");
    metrics::record_contact("error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error", "success": false })),
    )
        .into_response()
}
