use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::prompts::dtos::{
    AnalyzeRequestDto, AnalyzeResponseDto, ExportFormat, ExportQuery, GenerateRequestDto,
    GenerateResponseDto, GeneratedPromptResponseDto, HistoryResponseDto, ImproveRequestDto,
    ImproveResponseDto, TemplateDto,
};
use crate::features::prompts::services::PromptService;
use crate::shared::prompts::catalog;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Generate an optimized prompt from free-form input
#[utoipa::path(
    post,
    path = "/api/prompts/generate",
    request_body = GenerateRequestDto,
    responses(
        (status = 200, description = "Prompt generated successfully", body = ApiResponse<GenerateResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "prompts"
)]
pub async fn generate_prompt(
    State(service): State<Arc<PromptService>>,
    AppJson(dto): AppJson<GenerateRequestDto>,
) -> Result<Json<ApiResponse<GenerateResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let prompt = service.generate(dto).await?;
    Ok(Json(ApiResponse::success(Some(prompt), None, None)))
}

/// Improve an existing prompt
#[utoipa::path(
    post,
    path = "/api/prompts/improve",
    request_body = ImproveRequestDto,
    responses(
        (status = 200, description = "Prompt improved successfully", body = ApiResponse<ImproveResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "prompts"
)]
pub async fn improve_prompt(
    State(service): State<Arc<PromptService>>,
    AppJson(dto): AppJson<ImproveRequestDto>,
) -> Result<Json<ApiResponse<ImproveResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let prompt = service.improve(dto).await?;
    Ok(Json(ApiResponse::success(Some(prompt), None, None)))
}

/// Analyze a prompt without saving it
#[utoipa::path(
    post,
    path = "/api/prompts/analyze",
    request_body = AnalyzeRequestDto,
    responses(
        (status = 200, description = "Prompt analyzed successfully", body = ApiResponse<AnalyzeResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "prompts"
)]
pub async fn analyze_prompt(
    State(service): State<Arc<PromptService>>,
    AppJson(dto): AppJson<AnalyzeRequestDto>,
) -> Result<Json<ApiResponse<AnalyzeResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let analysis = service.analyze(&dto);
    Ok(Json(ApiResponse::success(Some(analysis), None, None)))
}

/// List category templates
#[utoipa::path(
    get,
    path = "/api/prompts/templates",
    responses(
        (status = 200, description = "Templates retrieved successfully", body = ApiResponse<BTreeMap<String, TemplateDto>>)
    ),
    tag = "prompts"
)]
pub async fn list_templates() -> Json<ApiResponse<BTreeMap<String, TemplateDto>>> {
    let templates = catalog::templates()
        .iter()
        .map(|t| (t.category.to_string(), TemplateDto::from(t)))
        .collect();
    Json(ApiResponse::success(Some(templates), None, None))
}

/// List persisted prompts, newest first
#[utoipa::path(
    get,
    path = "/api/prompts/history",
    params(PaginationQuery),
    responses(
        (status = 200, description = "History retrieved successfully", body = ApiResponse<HistoryResponseDto>)
    ),
    tag = "prompts"
)]
pub async fn get_history(
    State(service): State<Arc<PromptService>>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<HistoryResponseDto>>> {
    let history = service.history(&query).await?;
    let total = history.total;
    Ok(Json(ApiResponse::success(
        Some(history),
        None,
        Some(Meta { total }),
    )))
}

/// Export a persisted prompt as JSON or plain text
#[utoipa::path(
    get,
    path = "/api/prompts/export/{id}",
    params(
        ("id" = Uuid, Path, description = "Prompt ID"),
        ExportQuery
    ),
    responses(
        (status = 200, description = "Prompt exported (`format=txt` returns text/plain instead)", body = ApiResponse<GeneratedPromptResponseDto>),
        (status = 400, description = "Unsupported format or malformed id"),
        (status = 404, description = "Prompt not found")
    ),
    tag = "prompts"
)]
pub async fn export_prompt(
    State(service): State<Arc<PromptService>>,
    AppPath(id): AppPath<Uuid>,
    Query(query): Query<ExportQuery>,
) -> Result<Response> {
    let format = query
        .export_format()
        .ok_or_else(|| AppError::BadRequest("Invalid format. Use json or txt".to_string()))?;

    match format {
        ExportFormat::Json => {
            let prompt = service.get_by_id(id).await?;
            Ok(Json(ApiResponse::success(Some(prompt), None, None)).into_response())
        }
        ExportFormat::Txt => {
            let text = service.export_text(id).await?;
            Ok((
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                text,
            )
                .into_response())
        }
    }
}

/// List prompt categories
#[utoipa::path(
    get,
    path = "/api/prompts/categories",
    responses(
        (status = 200, description = "Categories retrieved successfully", body = ApiResponse<BTreeMap<String, String>>)
    ),
    tag = "prompts"
)]
pub async fn list_categories() -> Json<ApiResponse<BTreeMap<String, String>>> {
    let categories = catalog::templates()
        .iter()
        .map(|t| (t.category.to_string(), t.label.to_string()))
        .collect();
    Json(ApiResponse::success(Some(categories), None, None))
}

/// List supported AI tools
#[utoipa::path(
    get,
    path = "/api/prompts/ai-tools",
    responses(
        (status = 200, description = "AI tools retrieved successfully", body = ApiResponse<BTreeMap<String, String>>)
    ),
    tag = "prompts"
)]
pub async fn list_ai_tools() -> Json<ApiResponse<BTreeMap<String, String>>> {
    let tools = catalog::ai_adapters()
        .iter()
        .map(|a| (a.tool.to_string(), a.label.to_string()))
        .collect();
    Json(ApiResponse::success(Some(tools), None, None))
}

/// List output styles
#[utoipa::path(
    get,
    path = "/api/prompts/output-styles",
    responses(
        (status = 200, description = "Output styles retrieved successfully", body = ApiResponse<BTreeMap<String, String>>)
    ),
    tag = "prompts"
)]
pub async fn list_output_styles() -> Json<ApiResponse<BTreeMap<String, String>>> {
    let styles = catalog::output_styles()
        .iter()
        .map(|(key, label)| (key.to_string(), label.to_string()))
        .collect();
    Json(ApiResponse::success(Some(styles), None, None))
}
