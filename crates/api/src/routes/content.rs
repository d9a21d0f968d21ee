use axum::{
    extract::State,
    http::{header, HeaderMap},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use jaipurtv_core::backend::BackendAdapter as _;
use jaipurtv_core::content::model::SiteContent;
use jaipurtv_core::session::Session;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/content", get(read_content).post(write_content))
}

#[derive(Debug, Deserialize)]
struct WritePayload {
    content: Option<SiteContent>,
    message: Option<String>,
    email: Option<String>,
}

/// Serve the stored document as `{content, sha?}`. Reads are public; the
/// web client merges the payload over its bundled defaults.
async fn read_content(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let fetched = state
        .adapter()
        .fetch_document()
        .await
        .map_err(|e| ApiError::ReadFailed(e.to_string()))?
        .ok_or_else(|| ApiError::ReadFailed("content document not found".to_string()))?;

    let mut body = json!({ "content": fetched.document });
    if let Some(sha) = fetched.version {
        body["sha"] = json!(sha);
    }
    Ok(Json(body))
}

/// Persist a full document on behalf of an authenticated editor. The commit
/// is attributed to the editor; the optional `message` becomes the change
/// note.
async fn write_content(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<WritePayload>,
) -> ApiResult<Json<Value>> {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    let identity = state
        .auth()
        .verify_header(authorization)
        .ok_or(ApiError::Unauthorized)?;

    let content = payload.content.ok_or(ApiError::MissingContent)?;

    let editor_email = payload.email.unwrap_or(identity.email);
    let session = Session::with_authorization(
        &editor_email,
        authorization.unwrap_or_default().to_string(),
    );

    let receipt = state
        .adapter()
        .persist_document(&content, &session, payload.message.as_deref())
        .await
        .map_err(|e| ApiError::CommitFailed(e.to_string()))?;

    tracing::info!(editor = %session.editor_email(), "content committed");

    Ok(Json(json!({
        "status": "committed",
        "path": receipt.path,
        "commitUrl": receipt.commit_url,
        "sha": receipt.version,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{basic_header, test_router};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use jaipurtv_core::content::default_content;
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn read_before_any_write_is_a_read_failure() {
        let app = test_router();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/content")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "failed-to-read-content");
    }

    #[tokio::test]
    async fn write_without_credentials_is_unauthorized() {
        let app = test_router();
        let payload = json!({ "content": default_content() });
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/content")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"], "unauthorized");
    }

    #[tokio::test]
    async fn write_without_content_is_a_bad_request() {
        let app = test_router();
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/content")
                    .header("content-type", "application/json")
                    .header("authorization", basic_header())
                    .body(Body::from(json!({ "message": "empty" }).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "missing-content");
    }

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let app = test_router();

        let mut document = default_content();
        document.hero.headline = "Committed over HTTP".to_string();
        let payload = json!({
            "content": document,
            "message": "chore(content): update hero",
        });

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/content")
                    .header("content-type", "application/json")
                    .header("authorization", basic_header())
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "committed");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/content")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["content"]["hero"]["headline"], "Committed over HTTP");
    }

    #[tokio::test]
    async fn wrong_method_is_rejected() {
        let app = test_router();
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/content")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
