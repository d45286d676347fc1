//! Facade bundling composition, analysis and scoring into request results.

use crate::shared::prompts::advisor::{self, Improvement, PromptIssue};
use crate::shared::prompts::analyzer::analysis_text;
use crate::shared::prompts::catalog::{template_for, DEFAULT_OPERATION};
use crate::shared::prompts::composer::{compose, ComposeRequest};
use crate::shared::prompts::scorer::score;
use crate::shared::prompts::word_count;

/// Inputs of a generate call
#[derive(Debug, Clone, Copy)]
pub struct GenerateParams<'a> {
    pub user_input: &'a str,
    pub ai_tool: &'a str,
    pub output_style: &'a str,
    pub category: &'a str,
    pub seo_keywords: Option<&'a str>,
    pub operation: Option<&'a str>,
}

/// Result of a generate call
#[derive(Debug, Clone)]
pub struct Generation {
    pub generated_prompt: String,
    pub analysis: String,
    pub score: i32,
    /// Description of the template that was applied
    pub template_used: &'static str,
}

/// Result of an analyze-only call
#[derive(Debug, Clone)]
pub struct PromptAnalysis {
    pub analysis: String,
    pub score: i32,
    pub issues: Vec<PromptIssue>,
    pub word_count: usize,
    pub character_count: usize,
}

/// Stateless entry point of the prompt engine.
///
/// Holds no data: all lookups go through the static catalog, so a single
/// instance can be shared freely between request handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptEngine;

impl PromptEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compose a prompt, then analyze and score it
    pub fn generate(&self, params: &GenerateParams<'_>) -> Generation {
        let template = template_for(params.category);
        let generated_prompt = compose(&ComposeRequest {
            user_input: params.user_input,
            ai_tool: params.ai_tool,
            output_style: params.output_style,
            category: params.category,
            seo_keywords: params.seo_keywords,
            operation: params.operation.unwrap_or(DEFAULT_OPERATION),
        });

        let analysis = analysis_text(&generated_prompt, params.ai_tool, params.category);
        let score = score(&generated_prompt, params.ai_tool, params.category);

        tracing::debug!(
            "Generated prompt: tool={}, category={}, words={}, score={}",
            params.ai_tool,
            params.category,
            word_count(&generated_prompt),
            score
        );

        Generation {
            generated_prompt,
            analysis,
            score,
            template_used: template.description,
        }
    }

    /// Rewrite an existing prompt to address its detected issues
    pub fn improve(
        &self,
        existing_prompt: &str,
        ai_tool: &str,
        output_style: &str,
        category: &str,
    ) -> Improvement {
        advisor::improve(existing_prompt, ai_tool, output_style, category)
    }

    /// Evaluate a prompt without changing it
    pub fn analyze(&self, prompt: &str, ai_tool: &str, category: &str) -> PromptAnalysis {
        PromptAnalysis {
            analysis: analysis_text(prompt, ai_tool, category),
            score: score(prompt, ai_tool, category),
            issues: advisor::identify_issues(prompt),
            word_count: word_count(prompt),
            character_count: prompt.chars().count(),
        }
    }
}
