pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interpreter::handlers as chatbot;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Chat assistants
        .route("/api/chatbot", post(chatbot::handle_chat))
        // AI matching
        .route(
            "/api/ai-matching",
            post(matching::handle_process_matching).get(matching::handle_list_matches),
        )
        .route("/api/ai-matching/score", post(matching::handle_score_resumes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::matching::resume_parser::tests::SAMPLE_RESUME;

    const BODY_LIMIT: usize = 1024 * 1024;

    fn app() -> Router {
        build_router(AppState::instant())
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        post_raw(uri, body.to_string()).await
    }

    async fn post_raw(uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
        send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    fn names(body: &Value) -> Vec<&str> {
        body["data"]["candidates"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "jobgenie-api");
        assert_eq!(body["candidates"], 5);
    }

    #[tokio::test]
    async fn test_chat_top_java() {
        let (status, body) =
            post_json("/api/chatbot", json!({ "query": "Show me top 5 Java developers" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["type"], "candidates");
        assert_eq!(names(&body), vec!["Sarah Wilson", "Mike Johnson"]);
        assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn test_chat_python_seattle() {
        let (_, body) =
            post_json("/api/chatbot", json!({ "query": "Find Python developers in Seattle" }))
                .await;
        assert_eq!(names(&body), vec!["Alex Chen"]);
    }

    #[tokio::test]
    async fn test_chat_stats() {
        let (_, body) =
            post_json("/api/chatbot", json!({ "query": "Show me recent stats" })).await;
        let stats = &body["data"]["stats"];
        assert_eq!(stats["totalApplications"], 5);
        assert_eq!(stats["thisWeek"], 1);
        assert_eq!(stats["averageScore"], 88);
    }

    #[tokio::test]
    async fn test_chat_help_has_no_data() {
        let (status, body) = post_json("/api/chatbot", json!({ "query": "hello" })).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.get("data").is_none());
        assert!(!body["response"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chat_routes_to_requested_assistant() {
        let (_, body) = post_json(
            "/api/chatbot",
            json!({ "query": "Rate my resume strength", "assistant": "resume" }),
        )
        .await;
        assert_eq!(body["data"]["type"], "rating");
        assert_eq!(body["data"]["score"], 85);

        let (_, body) = post_json(
            "/api/chatbot",
            json!({ "query": "Find candidates with AWS experience", "assistant": "hiring" }),
        )
        .await;
        assert_eq!(body["response"], "Found 2 candidates with AWS experience:");
    }

    #[tokio::test]
    async fn test_chat_missing_query_is_bad_request() {
        for payload in [json!({}), json!({ "query": "" }), json!({ "query": 42 })] {
            let (status, body) = post_json("/api/chatbot", payload).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({ "success": false, "error": "Query is required" }));
        }
    }

    #[tokio::test]
    async fn test_chat_unknown_assistant_is_bad_request() {
        let (status, _) = post_json(
            "/api/chatbot",
            json!({ "query": "hello", "assistant": "oracle" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_chat_malformed_body_is_server_error() {
        let (status, body) = post_raw("/api/chatbot", "{not json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "success": false, "error": "Failed to process query" })
        );
    }

    #[tokio::test]
    async fn test_process_matching() {
        let (status, body) = post_json("/api/ai-matching", json!({ "jobId": 1 })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["processedCount"], 2);
        assert_eq!(body["modelVersion"], "v2.1.3");
        assert!(body["processingTime"].as_str().unwrap().ends_with('s'));
    }

    #[tokio::test]
    async fn test_process_matching_restricts_to_candidate_ids() {
        let (_, body) = post_json("/api/ai-matching", json!({ "candidateIds": [2] })).await;
        assert_eq!(body["processedCount"], 1);
        assert_eq!(body["results"][0]["candidateName"], "Jane Smith");

        let (_, body) = post_json(
            "/api/ai-matching",
            json!({ "candidateIds": [2], "reprocessAll": true }),
        )
        .await;
        assert_eq!(body["processedCount"], 2);
    }

    #[tokio::test]
    async fn test_process_matching_malformed_body() {
        let (status, body) = post_raw("/api/ai-matching", "oops").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "success": false, "error": "Failed to process AI matching" })
        );
    }

    #[tokio::test]
    async fn test_list_matches_with_threshold() {
        let (status, body) = get("/api/ai-matching?jobId=3&minScore=88").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalCount"], 1);
        assert_eq!(body["results"][0]["jobId"], "3");
        assert_eq!(body["filters"], json!({ "jobId": "3", "minScore": "88" }));
    }

    #[tokio::test]
    async fn test_list_matches_defaults() {
        let (_, body) = get("/api/ai-matching").await;
        assert_eq!(body["totalCount"], 2);
        assert_eq!(body["filters"]["minScore"], "70");
        assert!(body["filters"]["jobId"].is_null());
    }

    #[tokio::test]
    async fn test_score_resumes() {
        let (status, body) = post_json(
            "/api/ai-matching/score",
            json!({
                "resumes": [
                    { "candidateId": 9, "resumeText": "Junior developer, HTML and CSS." },
                    { "candidateId": 1, "candidateName": "John Doe", "resumeText": SAMPLE_RESUME }
                ]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["processedCount"], 2);
        assert_eq!(body["results"][0]["candidateId"], 1);
        assert_eq!(
            body["results"][0]["missingSkills"],
            json!(["GraphQL", "Jest"])
        );
        assert_eq!(body["results"][0]["scores"]["skillsMatch"], 60.0);
    }

    #[tokio::test]
    async fn test_score_resumes_custom_requirements() {
        let (_, body) = post_json(
            "/api/ai-matching/score",
            json!({
                "resumes": [{ "resumeText": "Python and Django developer" }],
                "requirements": { "title": "Backend", "requiredSkills": ["Python", "Django"] }
            }),
        )
        .await;
        assert_eq!(body["results"][0]["scores"]["skillsMatch"], 100.0);
        assert_eq!(body["results"][0]["matchedSkills"], json!(["Python", "Django"]));
    }

    #[tokio::test]
    async fn test_score_resumes_validation() {
        let (status, _) = post_json("/api/ai-matching/score", json!({ "resumes": [] })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = post_json(
            "/api/ai-matching/score",
            json!({ "resumes": [{ "resumeText": "   " }] }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Resume text is required");
    }
}
