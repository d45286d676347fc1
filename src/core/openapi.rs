use utoipa::{Modify, OpenApi};

use crate::features::prompts::{dtos as prompts_dtos, handlers as prompts_handlers};
use crate::shared::prompts::PromptIssue;
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        prompts_handlers::generate_prompt,
        prompts_handlers::improve_prompt,
        prompts_handlers::analyze_prompt,
        prompts_handlers::list_templates,
        prompts_handlers::get_history,
        prompts_handlers::export_prompt,
        prompts_handlers::list_categories,
        prompts_handlers::list_ai_tools,
        prompts_handlers::list_output_styles,
    ),
    components(
        schemas(
            // Shared
            Meta,
            PromptIssue,
            // Prompts
            prompts_dtos::GenerateRequestDto,
            prompts_dtos::ImproveRequestDto,
            prompts_dtos::AnalyzeRequestDto,
            prompts_dtos::ExportQuery,
            prompts_dtos::GenerateResponseDto,
            prompts_dtos::ImproveResponseDto,
            prompts_dtos::AnalyzeResponseDto,
            prompts_dtos::GeneratedPromptResponseDto,
            prompts_dtos::HistoryResponseDto,
            prompts_dtos::TemplateDto,
            ApiResponse<prompts_dtos::GenerateResponseDto>,
            ApiResponse<prompts_dtos::ImproveResponseDto>,
            ApiResponse<prompts_dtos::AnalyzeResponseDto>,
            ApiResponse<prompts_dtos::GeneratedPromptResponseDto>,
            ApiResponse<prompts_dtos::HistoryResponseDto>,
        )
    ),
    tags(
        (name = "prompts", description = "Prompt generation, improvement and analysis"),
    ),
    info(
        title = "Promptcraft API",
        version = "0.1.0",
        description = "API documentation for Promptcraft",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
