use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::prompts::models::GeneratedPrompt;
use crate::shared::prompts::catalog::{PromptTemplate, DEFAULT_AI_TOOL, DEFAULT_CATEGORY};
use crate::shared::prompts::PromptIssue;

fn default_ai_tool() -> String {
    DEFAULT_AI_TOOL.to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

// =============================================================================
// REQUESTS
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenerateRequestDto {
    /// Free-form text describing what the prompt should achieve
    #[validate(length(min = 1, max = 20000))]
    pub user_input: String,

    #[validate(length(min = 1, max = 50))]
    pub ai_tool: String,

    #[validate(length(min = 1, max = 50))]
    pub output_style: String,

    #[validate(length(min = 1, max = 50))]
    pub category: String,

    /// Comma-separated keywords; empty counts as absent
    #[validate(length(max = 20000))]
    pub seo_keywords: Option<String>,

    /// One of generate, improve, analyze, optimize (default: generate)
    #[validate(length(max = 50))]
    pub operation: Option<String>,
}

impl GenerateRequestDto {
    /// Keywords as sent, `None` when absent or empty
    pub fn keywords(&self) -> Option<&str> {
        self.seo_keywords.as_deref().filter(|k| !k.is_empty())
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ImproveRequestDto {
    #[validate(length(min = 1, max = 20000))]
    pub existing_prompt: String,

    #[validate(length(min = 1, max = 50))]
    pub ai_tool: String,

    #[validate(length(min = 1, max = 50))]
    pub output_style: String,

    #[validate(length(min = 1, max = 50))]
    pub category: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AnalyzeRequestDto {
    #[validate(length(min = 1, max = 20000))]
    pub prompt: String,

    #[serde(default = "default_ai_tool")]
    #[validate(length(min = 1, max = 50))]
    pub ai_tool: String,

    #[serde(default = "default_category")]
    #[validate(length(min = 1, max = 50))]
    pub category: String,
}

/// Export format selector
#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
pub struct ExportQuery {
    /// `json` (default) or `txt`
    pub format: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Txt,
}

impl ExportQuery {
    /// Parsed format, `None` when the value is not supported
    pub fn export_format(&self) -> Option<ExportFormat> {
        match self.format.as_deref().unwrap_or("json") {
            "json" => Some(ExportFormat::Json),
            "txt" => Some(ExportFormat::Txt),
            _ => None,
        }
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateResponseDto {
    pub id: Uuid,
    pub generated_prompt: String,
    pub analysis: String,
    pub score: i32,
    /// Description of the category template that was applied
    pub template_used: String,
    pub ai_tool: String,
    pub category: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ImproveResponseDto {
    pub id: Uuid,
    pub generated_prompt: String,
    pub analysis: String,
    pub score: i32,
    /// Issues detected in the original prompt
    pub improvements_made: Vec<PromptIssue>,
    pub ai_tool: String,
    pub category: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponseDto {
    pub analysis: String,
    pub score: i32,
    pub issues: Vec<PromptIssue>,
    pub word_count: usize,
    pub character_count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GeneratedPromptResponseDto {
    pub id: Uuid,
    pub original_input: String,
    pub ai_tool: String,
    pub output_style: String,
    pub category: String,
    pub seo_keywords: Option<String>,
    pub generated_prompt: String,
    pub analysis: String,
    pub score: i32,
    pub created_at: DateTime<Utc>,
}

impl From<GeneratedPrompt> for GeneratedPromptResponseDto {
    fn from(p: GeneratedPrompt) -> Self {
        Self {
            id: p.id,
            original_input: p.original_input,
            ai_tool: p.ai_tool,
            output_style: p.output_style,
            category: p.category,
            seo_keywords: p.seo_keywords,
            generated_prompt: p.generated_prompt,
            analysis: p.analysis,
            score: p.score,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryResponseDto {
    pub prompts: Vec<GeneratedPromptResponseDto>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TemplateDto {
    pub structure: String,
    pub description: String,
    pub placeholders: Vec<String>,
}

impl From<&PromptTemplate> for TemplateDto {
    fn from(t: &PromptTemplate) -> Self {
        Self {
            structure: t.structure.to_string(),
            description: t.description.to_string(),
            placeholders: t.placeholders().into_iter().map(String::from).collect(),
        }
    }
}
