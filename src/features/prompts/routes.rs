use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::prompts::{handlers, services::PromptService};

/// Create public routes for prompt generation
pub fn routes(service: Arc<PromptService>) -> Router {
    Router::new()
        .route("/api/prompts/generate", post(handlers::generate_prompt))
        .route("/api/prompts/improve", post(handlers::improve_prompt))
        .route("/api/prompts/analyze", post(handlers::analyze_prompt))
        .route("/api/prompts/templates", get(handlers::list_templates))
        .route("/api/prompts/history", get(handlers::get_history))
        .route("/api/prompts/export/{id}", get(handlers::export_prompt))
        .route("/api/prompts/categories", get(handlers::list_categories))
        .route("/api/prompts/ai-tools", get(handlers::list_ai_tools))
        .route("/api/prompts/output-styles", get(handlers::list_output_styles))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::test_prompt_routes;

    fn server() -> TestServer {
        TestServer::new(test_prompt_routes()).unwrap()
    }

    #[tokio::test]
    async fn test_templates_lists_every_category() {
        let response = server().get("/api/prompts/templates").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        let data = body["data"].as_object().unwrap();
        assert_eq!(data.len(), 5);
        assert_eq!(
            data["image_generation"]["description"],
            "For AI art and image generation"
        );
        assert_eq!(
            data["code_generation"]["placeholders"][2],
            "[REQUIREMENTS]"
        );
    }

    #[tokio::test]
    async fn test_static_lookups() {
        let server = server();

        let categories: Value = server.get("/api/prompts/categories").await.json();
        assert_eq!(categories["data"]["data_analysis"], "Data Analysis");

        let tools: Value = server.get("/api/prompts/ai-tools").await.json();
        assert_eq!(tools["data"].as_object().unwrap().len(), 5);
        assert_eq!(tools["data"]["dalle"], "DALL-E");

        let styles: Value = server.get("/api/prompts/output-styles").await.json();
        assert_eq!(
            styles["data"],
            json!({
                "creative": "Creative",
                "marketing": "Marketing",
                "research": "Research",
                "technical": "Technical"
            })
        );
    }

    #[tokio::test]
    async fn test_analyze_uses_defaults() {
        let response = server()
            .post("/api/prompts/analyze")
            .json(&json!({ "prompt": "Write a poem." }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"]["score"], 60);
        assert_eq!(body["data"]["word_count"], 3);
        assert_eq!(body["data"]["character_count"], 13);
        assert_eq!(
            body["data"]["issues"],
            json!([
                "Too brief - needs more detail",
                "Missing role definition",
                "Poor structure - needs formatting",
                "Needs more detailed instructions"
            ])
        );
    }

    #[tokio::test]
    async fn test_missing_required_field_is_bad_request() {
        let response = server()
            .post("/api/prompts/generate")
            .json(&json!({ "ai_tool": "chatgpt", "output_style": "creative", "category": "marketing" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains("user_input"));
    }

    #[tokio::test]
    async fn test_field_limits_are_validated() {
        let response = server()
            .post("/api/prompts/analyze")
            .json(&json!({ "prompt": "Hello", "ai_tool": "x".repeat(51) }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_export_rejects_unknown_format() {
        let response = server()
            .get("/api/prompts/export/0190b6a0-0000-7000-8000-000000000000")
            .add_query_param("format", "pdf")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid format. Use json or txt");
    }

    #[tokio::test]
    async fn test_export_rejects_malformed_id_with_envelope() {
        let response = server().get("/api/prompts/export/not-a-uuid").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid path parameter"));
    }
}
