use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/contact", post(submit_contact))
}

#[derive(Debug, Deserialize)]
struct ContactPayload {
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
}

/// Relay a contact-form submission to the configured inbox.
async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactPayload>,
) -> ApiResult<Json<Value>> {
    let name = payload
        .name
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::MissingFields)?;
    let email = payload
        .email
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::MissingFields)?;
    let message = payload
        .message
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::MissingFields)?;

    state
        .mailer()
        .send_contact(&name, &email, payload.subject.as_deref(), &message)
        .await
        .map_err(|e| ApiError::MailFailed(e.to_string()))?;

    Ok(Json(json!({ "message": "Email sent successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::test_router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn missing_fields_are_a_bad_request() {
        let app = test_router();
        let payload = json!({ "name": "Aditi", "email": "" });
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Missing fields");
    }

    #[tokio::test]
    async fn non_post_is_rejected() {
        let app = test_router();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/contact")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
