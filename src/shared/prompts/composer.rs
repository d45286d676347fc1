//! Prompt composition: fills a category template for the target AI tool.

use crate::shared::prompts::catalog::{
    adapter_for, component, image_style_modifier, role_definition, task_description,
    template_for, AiAdapter, ComponentKind, PromptTemplate, DEFAULT_OUTPUT_FORMAT,
};

/// Suffix appended to every keyword-based image prompt
pub const IMAGE_PARAMETERS_SUFFIX: &str = " --ar 16:9 --style raw --quality 2";

const TARGET_AUDIENCE_TEXT: &str =
    "The target audience should be considered based on the content goals and context provided.";
const BRAND_CONTEXT_TEXT: &str =
    "Maintain a professional and engaging tone that aligns with the brand voice.";
const CONSTRAINTS_TEXT: &str =
    "Follow best practices and ensure code quality, readability, and maintainability.";
const ANALYSIS_GOALS_TEXT: &str =
    "Provide actionable insights and clear recommendations based on the data.";

/// Inputs of a single composition
#[derive(Debug, Clone, Copy)]
pub struct ComposeRequest<'a> {
    pub user_input: &'a str,
    pub ai_tool: &'a str,
    pub output_style: &'a str,
    pub category: &'a str,
    pub seo_keywords: Option<&'a str>,
    pub operation: &'a str,
}

impl ComposeRequest<'_> {
    /// SEO keywords as supplied, or `None` when absent or empty
    fn keywords(&self) -> Option<&str> {
        self.seo_keywords.filter(|k| !k.is_empty())
    }
}

/// Placeholder tokens understood by the text branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    RoleDefinition,
    TaskDescription,
    Context,
    TargetAudience,
    BrandContext,
    Requirements,
    Constraints,
    DataContext,
    AnalysisGoals,
    SeoKeywords,
    OutputFormat,
    Subject,
    Style,
    Composition,
    Lighting,
    Quality,
    Parameters,
}

impl Placeholder {
    const ALL: [Placeholder; 17] = [
        Placeholder::RoleDefinition,
        Placeholder::TaskDescription,
        Placeholder::Context,
        Placeholder::TargetAudience,
        Placeholder::BrandContext,
        Placeholder::Requirements,
        Placeholder::Constraints,
        Placeholder::DataContext,
        Placeholder::AnalysisGoals,
        Placeholder::SeoKeywords,
        Placeholder::OutputFormat,
        Placeholder::Subject,
        Placeholder::Style,
        Placeholder::Composition,
        Placeholder::Lighting,
        Placeholder::Quality,
        Placeholder::Parameters,
    ];

    fn token(self) -> &'static str {
        match self {
            Placeholder::RoleDefinition => "[ROLE_DEFINITION]",
            Placeholder::TaskDescription => "[TASK_DESCRIPTION]",
            Placeholder::Context => "[CONTEXT]",
            Placeholder::TargetAudience => "[TARGET_AUDIENCE]",
            Placeholder::BrandContext => "[BRAND_CONTEXT]",
            Placeholder::Requirements => "[REQUIREMENTS]",
            Placeholder::Constraints => "[CONSTRAINTS]",
            Placeholder::DataContext => "[DATA_CONTEXT]",
            Placeholder::AnalysisGoals => "[ANALYSIS_GOALS]",
            Placeholder::SeoKeywords => "[SEO_KEYWORDS]",
            Placeholder::OutputFormat => "[OUTPUT_FORMAT]",
            Placeholder::Subject => "[SUBJECT]",
            Placeholder::Style => "[STYLE]",
            Placeholder::Composition => "[COMPOSITION]",
            Placeholder::Lighting => "[LIGHTING]",
            Placeholder::Quality => "[QUALITY]",
            Placeholder::Parameters => "[PARAMETERS]",
        }
    }

    fn fill(self, request: &ComposeRequest<'_>, adapter: &AiAdapter) -> String {
        match self {
            Placeholder::RoleDefinition => {
                section("ROLE", role_definition(request.output_style))
            }
            Placeholder::TaskDescription => {
                section("TASK", task_description(request.operation))
            }
            Placeholder::Context => section("CONTEXT", request.user_input),
            Placeholder::TargetAudience => section("TARGET AUDIENCE", TARGET_AUDIENCE_TEXT),
            Placeholder::BrandContext => section("BRAND CONTEXT", BRAND_CONTEXT_TEXT),
            Placeholder::Requirements => section("REQUIREMENTS", request.user_input),
            Placeholder::Constraints => section("CONSTRAINTS", CONSTRAINTS_TEXT),
            Placeholder::DataContext => section("DATA CONTEXT", request.user_input),
            Placeholder::AnalysisGoals => section("ANALYSIS GOALS", ANALYSIS_GOALS_TEXT),
            Placeholder::SeoKeywords => match request.keywords() {
                Some(keywords) => section(
                    "SEO KEYWORDS",
                    &format!("Naturally incorporate these keywords: {}", keywords),
                ),
                None => String::new(),
            },
            Placeholder::OutputFormat => section(
                "OUTPUT FORMAT",
                component(ComponentKind::OutputFormat, DEFAULT_OUTPUT_FORMAT).unwrap_or_default(),
            ),
            Placeholder::Subject => request.user_input.to_string(),
            Placeholder::Style => image_style_modifier(request.output_style).to_string(),
            Placeholder::Composition => quality_modifier("cinematic"),
            Placeholder::Lighting => quality_modifier("photorealistic"),
            Placeholder::Quality => quality_modifier("high_quality"),
            Placeholder::Parameters => adapter.parameters.join(" "),
        }
    }
}

fn section(heading: &str, body: &str) -> String {
    format!("### {}\n{}", heading, body)
}

fn quality_modifier(variant: &str) -> String {
    component(ComponentKind::QualityModifiers, variant)
        .unwrap_or_default()
        .to_string()
}

/// Compose a prompt for the requested category and AI tool.
///
/// Unknown categories and tools fall back to `content_generation` and
/// `chatgpt`. Keyword-based tools get a comma-separated image prompt; all
/// other tools get the filled section template.
pub fn compose(request: &ComposeRequest<'_>) -> String {
    let template = template_for(request.category);
    let adapter = adapter_for(request.ai_tool);

    if adapter.is_keyword_based() {
        compose_image_prompt(request)
    } else {
        compose_text_prompt(request, template, adapter)
    }
}

/// Fill every placeholder present in the template structure
fn compose_text_prompt(
    request: &ComposeRequest<'_>,
    template: &PromptTemplate,
    adapter: &AiAdapter,
) -> String {
    let mut structure = template.structure.to_string();

    for placeholder in Placeholder::ALL {
        let token = placeholder.token();
        if structure.contains(token) {
            structure = structure.replace(token, &placeholder.fill(request, adapter));
        }
    }

    // An empty trailing [PARAMETERS] leaves a dangling separator
    structure.trim().trim_end_matches(',').trim_end().to_string()
}

fn compose_image_prompt(request: &ComposeRequest<'_>) -> String {
    let related;
    let mut parts = vec![
        request.user_input,
        image_style_modifier(request.output_style),
        component(ComponentKind::QualityModifiers, "high_quality").unwrap_or_default(),
    ];

    if let Some(keywords) = request.keywords() {
        related = format!("related to {}", keywords);
        parts.push(&related);
    }

    format!("{}{}", parts.join(", "), IMAGE_PARAMETERS_SUFFIX)
}
