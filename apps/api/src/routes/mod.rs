pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::corpus::handlers as corpus_handlers;
use crate::roadmap::handlers as roadmap_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Roadmap engine
        .route(
            "/api/roadmap/preview/:career",
            get(roadmap_handlers::handle_preview),
        )
        .route(
            "/api/roadmap/generate",
            post(roadmap_handlers::handle_generate),
        )
        .route(
            "/api/roadmap/careers/:career/skills",
            get(roadmap_handlers::handle_career_skills),
        )
        // Career catalog
        .route("/api/careers", get(corpus_handlers::handle_list_careers))
        .route("/api/careers/:name", get(corpus_handlers::handle_get_career))
        // Resource corpus
        .route("/api/resources", get(corpus_handlers::handle_list_resources))
        .route(
            "/api/resources/categories",
            get(corpus_handlers::handle_resource_categories),
        )
        .route(
            "/api/resources/search",
            get(corpus_handlers::handle_search_resources),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::corpus::CorpusStore;
    use crate::models::career::{Career, Resource};
    use crate::roadmap::curated::CuratedCatalog;
    use crate::state::AppState;

    fn make_state() -> AppState {
        let resources = vec![Resource {
            title: "Intro to Programming".to_string(),
            url: "https://example.org/prog".to_string(),
            platform: "Coursera".to_string(),
            duration: "6 weeks".to_string(),
            description: String::new(),
            rating: Some(4.5),
            free: true,
            tags: vec!["programming".to_string()],
            difficulty: Some("beginner".to_string()),
            category: "programming".to_string(),
        }];
        let careers = vec![Career {
            name: "Data Scientist".to_string(),
            category: "Technology".to_string(),
            description: "Analyzes data".to_string(),
            skills: vec!["Statistics".to_string(), "Python Programming".to_string()],
            degree_required: None,
            growth_rate: None,
            avg_salary: None,
        }];
        AppState {
            corpus: Arc::new(CorpusStore::from_records(resources, careers)),
            curated: Arc::new(CuratedCatalog::builtin()),
        }
    }

    async fn get_json(path: &str) -> (StatusCode, Value) {
        let response = build_router(make_state())
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    #[tokio::test]
    async fn test_health_reports_corpus_stats() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "pathforge-api");
        assert_eq!(body["corpus"]["resources"], 1);
        assert_eq!(body["corpus"]["careers"], 1);
    }

    #[tokio::test]
    async fn test_preview_route_unknown_career_returns_200() {
        let (status, body) = get_json("/api/roadmap/preview/Cheese%20Architect").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["career"], "Cheese Architect");
        assert_eq!(body["phases"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_preview_route_passes_user_level() {
        let (status, body) =
            get_json("/api/roadmap/preview/software%20engineer?user_level=advanced").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["career"], "Software Engineer");
        assert_eq!(body["estimated_duration"], "6-12 months");
    }

    #[tokio::test]
    async fn test_generate_route_accepts_post_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/roadmap/generate")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"career_name": "Data Scientist", "completed_topics": ["Statistics"]}"#,
            ))
            .unwrap();
        let response = build_router(make_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["phases"][0]["completion_percentage"], 20);
        assert!(body["overall_completion"].is_number());
    }

    #[tokio::test]
    async fn test_career_route_404_envelope() {
        let (status, body) = get_json("/api/careers/Astronaut").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Astronaut"));
    }

    #[tokio::test]
    async fn test_resources_routes_respond() {
        let (status, body) = get_json("/api/resources?category=programming").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);

        let (status, body) = get_json("/api/resources/categories").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["categories"][0], "programming");

        let (status, body) = get_json("/api/resources/search?query=programming").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_found"], 1);
    }

    #[tokio::test]
    async fn test_search_route_empty_query_is_400() {
        let (status, body) = get_json("/api/resources/search?query=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
