use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted generate or improve result
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct GeneratedPrompt {
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

/// Fields written when a result is persisted
#[derive(Debug, Clone)]
pub struct NewGeneratedPrompt<'a> {
    pub original_input: &'a str,
    pub ai_tool: &'a str,
    pub output_style: &'a str,
    pub category: &'a str,
    pub seo_keywords: Option<&'a str>,
    pub generated_prompt: &'a str,
    pub analysis: &'a str,
    pub score: i32,
}
