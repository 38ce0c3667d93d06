pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::rendercv::handlers;

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // CV API
        .route("/api/v1/cv/build", post(handlers::handle_build))
        .route("/api/v1/cv/document", post(handlers::handle_document))
        .route("/api/v1/cv/assemble", post(handlers::handle_assemble))
        .route("/api/v1/cv/defaults", get(handlers::handle_defaults))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::rendercv::defaults::{default_design, default_settings};

    async fn call(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn sample_profile() -> Value {
        json!({
            "meta": {
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "socials": [{ "network": "GitHub", "username": "ada" }]
            },
            "experience": [
                { "id": "e1", "company": "Analytical Engines", "position": "Programmer",
                  "start_date": "1842-01", "highlights": ["a", "b"] }
            ],
            "education": [
                { "id": "edu1", "institution": "Home", "area": "Mathematics" }
            ],
            "projects": [
                { "id": "p1", "name": "Note G", "highlights": ["Bernoulli numbers"] }
            ],
            "skills": [
                { "label": "Math", "details": "Calculus" }
            ]
        })
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = call(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_build_applies_overrides_and_order() {
        let (status, body) = call(post_json(
            "/api/v1/cv/build",
            json!({
                "profile": sample_profile(),
                "plan": {
                    "bullet_overrides": { "e1": ["x"] },
                    "section_order": ["Skills", "Education"]
                }
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        let sections = body["cv_dict"]["cv"]["sections"].as_object().unwrap();
        let titles: Vec<&String> = sections.keys().collect();
        assert_eq!(titles, vec!["Skills", "Education", "Experience", "Projects"]);
        assert_eq!(sections["Experience"][0]["highlights"], json!(["x"]));
        assert_eq!(body["warnings"], json!([]));
    }

    #[tokio::test]
    async fn test_build_without_plan_selects_everything() {
        let (status, body) =
            call(post_json("/api/v1/cv/build", json!({ "profile": sample_profile() }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cv_dict"]["cv"]["sections"].as_object().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_build_reports_plan_advisories() {
        let (status, body) = call(post_json(
            "/api/v1/cv/build",
            json!({
                "profile": sample_profile(),
                "plan": { "selected_project_ids": ["ghost"] }
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["cv_dict"]["cv"]["sections"].get("Projects").is_none());
        assert_eq!(body["warnings"][0]["kind"], "unknown_entry_id");
        assert_eq!(body["warnings"][0]["subject"], "ghost");
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let mut profile = sample_profile();
        profile["meta"]["name"] = json!("   ");

        let (status, body) =
            call(post_json("/api/v1/cv/build", json!({ "profile": profile }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_profile_is_rejected_by_extractor() {
        let (status, _) = call(post_json(
            "/api/v1/cv/build",
            json!({ "profile": { "meta": {} } }),
        ))
        .await;
        assert!(status.is_client_error(), "Missing meta.name must be a 4xx, got {status}");
    }

    #[tokio::test]
    async fn test_document_merges_defaults_and_overrides() {
        let (status, body) = call(post_json(
            "/api/v1/cv/document",
            json!({
                "profile": sample_profile(),
                "locale": { "language": "german" }
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        let document = &body["document"];
        assert_eq!(document["cv"]["name"], "Ada Lovelace");
        assert_eq!(document["design"], Value::Object(default_design()));
        assert_eq!(document["locale"], json!({ "language": "german" }));
        assert_eq!(document["settings"], Value::Object(default_settings()));
    }

    #[tokio::test]
    async fn test_assemble_passes_cv_through_unchanged() {
        let cv = json!({ "name": "Ada", "sections": { "Skills": [{ "label": "Math", "details": "" }] } });
        let (status, body) = call(post_json(
            "/api/v1/cv/assemble",
            json!({ "cv_dict": { "cv": cv.clone() } }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cv"], cv);
        assert_eq!(body["design"], Value::Object(default_design()));
    }

    #[tokio::test]
    async fn test_defaults_endpoint_exposes_all_blocks() {
        let request = Request::builder()
            .uri("/api/v1/cv/defaults")
            .body(Body::empty())
            .unwrap();
        let (status, body) = call(request).await;

        assert_eq!(status, StatusCode::OK);
        for key in ["design", "locale", "settings"] {
            assert!(body[key].is_object(), "{key} must be an object");
        }
    }
}
