//! Issue detection and rewriting for user-supplied prompts.

use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::prompts::catalog::role_definition;
use crate::shared::prompts::scorer::score;
use crate::shared::prompts::word_count;

const OUTPUT_FORMAT_BLOCK: &str =
    "\n\n### OUTPUT FORMAT\nProvide a well-structured, comprehensive response with clear formatting.";
const THOROUGHNESS_REQUEST: &str =
    "\n\nPlease ensure your response is thorough, detailed, and addresses all aspects of the request.";

/// Deficiency detected in an existing prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum PromptIssue {
    #[serde(rename = "Too brief - needs more detail")]
    TooBrief,
    #[serde(rename = "Missing role definition")]
    MissingRole,
    #[serde(rename = "Unclear task definition")]
    UnclearTask,
    #[serde(rename = "Poor structure - needs formatting")]
    PoorStructure,
    #[serde(rename = "Needs more detailed instructions")]
    NeedsDetail,
}

impl PromptIssue {
    pub fn label(&self) -> &'static str {
        match self {
            PromptIssue::TooBrief => "Too brief - needs more detail",
            PromptIssue::MissingRole => "Missing role definition",
            PromptIssue::UnclearTask => "Unclear task definition",
            PromptIssue::PoorStructure => "Poor structure - needs formatting",
            PromptIssue::NeedsDetail => "Needs more detailed instructions",
        }
    }

    /// Bullet confirming the fix; `NeedsDetail` is reported but never fixed
    fn confirmation(&self) -> Option<&'static str> {
        match self {
            PromptIssue::MissingRole => {
                Some("✓ Added clear role definition for better AI understanding")
            }
            PromptIssue::PoorStructure => {
                Some("✓ Improved structure with clear sections and formatting")
            }
            PromptIssue::TooBrief => Some("✓ Enhanced with additional detail and context"),
            PromptIssue::UnclearTask => Some("✓ Clarified task instructions and expectations"),
            PromptIssue::NeedsDetail => None,
        }
    }
}

impl std::fmt::Display for PromptIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of improving an existing prompt
#[derive(Debug, Clone)]
pub struct Improvement {
    pub improved_prompt: String,
    pub analysis: String,
    pub score: i32,
    pub issues: Vec<PromptIssue>,
}

/// Detect every issue of a prompt, in fixed check order
pub fn identify_issues(prompt: &str) -> Vec<PromptIssue> {
    let mut issues = Vec::new();
    let lower = prompt.to_lowercase();

    if word_count(prompt) < 10 {
        issues.push(PromptIssue::TooBrief);
    }

    if !["you are", "role", "expert", "specialist"]
        .iter()
        .any(|w| lower.contains(w))
    {
        issues.push(PromptIssue::MissingRole);
    }

    if !["create", "generate", "write", "task"]
        .iter()
        .any(|w| lower.contains(w))
    {
        issues.push(PromptIssue::UnclearTask);
    }

    if !prompt.contains("###") && !prompt.contains("**") {
        issues.push(PromptIssue::PoorStructure);
    }

    if prompt.matches('.').count() < 2 {
        issues.push(PromptIssue::NeedsDetail);
    }

    issues
}

/// Rewrite a prompt to address the detected issues
pub fn apply_improvements(prompt: &str, issues: &[PromptIssue], output_style: &str) -> String {
    let mut improved = prompt.to_string();

    if issues.contains(&PromptIssue::MissingRole) {
        improved = format!(
            "### ROLE\n{}\n\n### TASK\n{}",
            role_definition(output_style),
            improved
        );
    }

    if issues.contains(&PromptIssue::PoorStructure) {
        if !improved.contains("### TASK") {
            improved = format!("### TASK\n{}", improved);
        }
        improved.push_str(OUTPUT_FORMAT_BLOCK);
    }

    if issues.contains(&PromptIssue::TooBrief) {
        improved.push_str(THOROUGHNESS_REQUEST);
    }

    improved
}

/// Summarize the improvements made between two prompt versions
pub fn summarize_improvements(original: &str, improved: &str, issues: &[PromptIssue]) -> String {
    let mut analysis = vec!["### Improvements Made:".to_string()];

    analysis.extend(
        issues
            .iter()
            .filter_map(PromptIssue::confirmation)
            .map(str::to_string),
    );

    let before = word_count(original);
    let after = word_count(improved);
    if after > before {
        analysis.push(format!(
            "✓ Expanded from {} to {} words (+{})",
            before,
            after,
            after - before
        ));
    }

    analysis.join("\n")
}

/// Detect issues, rewrite, summarize and score an existing prompt
pub fn improve(existing_prompt: &str, ai_tool: &str, output_style: &str, category: &str) -> Improvement {
    let issues = identify_issues(existing_prompt);
    let improved_prompt = apply_improvements(existing_prompt, &issues, output_style);
    let analysis = summarize_improvements(existing_prompt, &improved_prompt, &issues);
    let score = score(&improved_prompt, ai_tool, category);

    tracing::debug!(
        "Improved prompt: issues={}, score={}",
        issues.len(),
        score
    );

    Improvement {
        improved_prompt,
        analysis,
        score,
        issues,
    }
}
