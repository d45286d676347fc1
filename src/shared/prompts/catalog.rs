//! Static lookup tables for the prompt engine.
//!
//! Templates, reusable components and AI tool adapters are compile-time
//! constants. Every lookup falls back to a designated default key instead of
//! failing, so callers can pass arbitrary user-supplied identifiers.

use crate::shared::validation::find_placeholders;

/// Category used when the requested one is unknown
pub const DEFAULT_CATEGORY: &str = "content_generation";

/// AI tool used when the requested one is unknown
pub const DEFAULT_AI_TOOL: &str = "chatgpt";

/// Role variant used when the requested output style is unknown
pub const DEFAULT_STYLE: &str = "technical";

/// Output format variant used by every text prompt
pub const DEFAULT_OUTPUT_FORMAT: &str = "structured";

/// Task variant used when the requested operation is unknown
pub const DEFAULT_OPERATION: &str = "generate";

/// Image style modifier used when the requested output style is unknown
pub const DEFAULT_IMAGE_STYLE_MODIFIER: &str = "high quality, detailed";

// =============================================================================
// TEMPLATES
// =============================================================================

/// A category skeleton made of bracketed placeholder tokens
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    pub category: &'static str,
    pub label: &'static str,
    pub structure: &'static str,
    pub description: &'static str,
}

impl PromptTemplate {
    /// Placeholder tokens found in the structure, in order of appearance
    pub fn placeholders(&self) -> Vec<&'static str> {
        find_placeholders(self.structure)
    }
}

const TEMPLATES: &[PromptTemplate] = &[
    PromptTemplate {
        category: "content_generation",
        label: "Content Generation",
        structure: "[ROLE_DEFINITION]\n\n[TASK_DESCRIPTION]\n\n[CONTEXT]\n\n[SEO_KEYWORDS]\n\n[OUTPUT_FORMAT]",
        description: "For blog posts, articles, and written content",
    },
    PromptTemplate {
        category: "image_generation",
        label: "Image Generation",
        structure: "[SUBJECT], [STYLE], [COMPOSITION], [LIGHTING], [QUALITY], [PARAMETERS]",
        description: "For AI art and image generation",
    },
    PromptTemplate {
        category: "code_generation",
        label: "Code Generation",
        structure: "[ROLE_DEFINITION]\n\n[TASK_DESCRIPTION]\n\n[REQUIREMENTS]\n\n[CONSTRAINTS]\n\n[OUTPUT_FORMAT]",
        description: "For programming and code-related tasks",
    },
    PromptTemplate {
        category: "data_analysis",
        label: "Data Analysis",
        structure: "[ROLE_DEFINITION]\n\n[TASK_DESCRIPTION]\n\n[DATA_CONTEXT]\n\n[ANALYSIS_GOALS]\n\n[OUTPUT_FORMAT]",
        description: "For data analysis and insights",
    },
    PromptTemplate {
        category: "marketing",
        label: "Marketing",
        structure: "[ROLE_DEFINITION]\n\n[TASK_DESCRIPTION]\n\n[TARGET_AUDIENCE]\n\n[BRAND_CONTEXT]\n\n[SEO_KEYWORDS]\n\n[OUTPUT_FORMAT]",
        description: "For marketing copy and campaigns",
    },
];

/// All templates, in catalog order
pub fn templates() -> &'static [PromptTemplate] {
    TEMPLATES
}

/// Find a template by exact category key
pub fn find_template(category: &str) -> Option<&'static PromptTemplate> {
    TEMPLATES.iter().find(|t| t.category == category)
}

/// Template for a category, falling back to `content_generation`
pub fn template_for(category: &str) -> &'static PromptTemplate {
    find_template(category).unwrap_or_else(|| {
        tracing::debug!(
            "Unknown category '{}', falling back to {}",
            category,
            DEFAULT_CATEGORY
        );
        &TEMPLATES[0]
    })
}

// =============================================================================
// COMPONENTS
// =============================================================================

/// Placeholder families backed by the component library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    RoleDefinition,
    TaskDescription,
    OutputFormat,
    QualityModifiers,
}

struct ComponentEntry {
    kind: ComponentKind,
    variant: &'static str,
    text: &'static str,
}

const COMPONENTS: &[ComponentEntry] = &[
    // Roles, keyed by output style
    ComponentEntry {
        kind: ComponentKind::RoleDefinition,
        variant: "creative",
        text: "You are a creative and imaginative content creator with expertise in storytelling and engaging writing.",
    },
    ComponentEntry {
        kind: ComponentKind::RoleDefinition,
        variant: "technical",
        text: "You are a technical expert and professional writer with deep knowledge in your field.",
    },
    ComponentEntry {
        kind: ComponentKind::RoleDefinition,
        variant: "marketing",
        text: "You are an expert marketing strategist and copywriter with proven success in driving engagement.",
    },
    ComponentEntry {
        kind: ComponentKind::RoleDefinition,
        variant: "research",
        text: "You are a thorough researcher and academic writer with expertise in data analysis and evidence-based writing.",
    },
    ComponentEntry {
        kind: ComponentKind::RoleDefinition,
        variant: "seo",
        text: "You are an expert SEO strategist and content creator with specialization in search engine optimization.",
    },
    // Tasks, keyed by operation
    ComponentEntry {
        kind: ComponentKind::TaskDescription,
        variant: "improve",
        text: "Your task is to analyze and significantly improve the following prompt by enhancing its clarity, structure, and effectiveness.",
    },
    ComponentEntry {
        kind: ComponentKind::TaskDescription,
        variant: "generate",
        text: "Your task is to create comprehensive, high-quality content based on the following requirements.",
    },
    ComponentEntry {
        kind: ComponentKind::TaskDescription,
        variant: "analyze",
        text: "Your task is to thoroughly analyze the given content and provide detailed insights.",
    },
    ComponentEntry {
        kind: ComponentKind::TaskDescription,
        variant: "optimize",
        text: "Your task is to optimize the following content for better performance and engagement.",
    },
    // Output formats
    ComponentEntry {
        kind: ComponentKind::OutputFormat,
        variant: "structured",
        text: "Structure your output with clear headings, subheadings, and organized sections.",
    },
    ComponentEntry {
        kind: ComponentKind::OutputFormat,
        variant: "markdown",
        text: "Format your output using proper Markdown syntax with headers, lists, and emphasis.",
    },
    ComponentEntry {
        kind: ComponentKind::OutputFormat,
        variant: "code",
        text: "Provide your output as clean, well-commented code with proper formatting.",
    },
    ComponentEntry {
        kind: ComponentKind::OutputFormat,
        variant: "list",
        text: "Present your output as a well-organized list with clear bullet points or numbering.",
    },
    // Image quality modifiers
    ComponentEntry {
        kind: ComponentKind::QualityModifiers,
        variant: "high_quality",
        text: "ultra-detailed, high resolution, professional quality",
    },
    ComponentEntry {
        kind: ComponentKind::QualityModifiers,
        variant: "artistic",
        text: "artistic, creative, visually striking",
    },
    ComponentEntry {
        kind: ComponentKind::QualityModifiers,
        variant: "photorealistic",
        text: "photorealistic, lifelike, natural lighting",
    },
    ComponentEntry {
        kind: ComponentKind::QualityModifiers,
        variant: "cinematic",
        text: "cinematic lighting, dramatic composition, film-like quality",
    },
];

/// Filler text for an exact (kind, variant) pair
pub fn component(kind: ComponentKind, variant: &str) -> Option<&'static str> {
    COMPONENTS
        .iter()
        .find(|c| c.kind == kind && c.variant == variant)
        .map(|c| c.text)
}

/// Filler text for a variant, falling back to `fallback` within the same kind
pub fn component_or(kind: ComponentKind, variant: &str, fallback: &str) -> &'static str {
    component(kind, variant)
        .or_else(|| component(kind, fallback))
        .unwrap_or_default()
}

/// Role text for an output style, default `technical`
pub fn role_definition(style: &str) -> &'static str {
    component_or(ComponentKind::RoleDefinition, style, DEFAULT_STYLE)
}

/// Task text for an operation, default `generate`
pub fn task_description(operation: &str) -> &'static str {
    component_or(ComponentKind::TaskDescription, operation, DEFAULT_OPERATION)
}

/// Image style modifiers keyed by output style
const IMAGE_STYLE_MODIFIERS: &[(&str, &str)] = &[
    ("creative", "artistic, imaginative, unique perspective"),
    ("technical", "precise, detailed, technical illustration"),
    ("marketing", "professional, eye-catching, commercial quality"),
    ("research", "scientific, accurate, informative visualization"),
];

/// Image style modifier for an output style, default "high quality, detailed"
pub fn image_style_modifier(style: &str) -> &'static str {
    IMAGE_STYLE_MODIFIERS
        .iter()
        .find(|(key, _)| *key == style)
        .map(|(_, modifier)| *modifier)
        .unwrap_or(DEFAULT_IMAGE_STYLE_MODIFIER)
}

// =============================================================================
// AI TOOL ADAPTERS
// =============================================================================

/// Prompt style family of an AI tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterStyle {
    Conversational,
    Detailed,
    Structured,
    KeywordBased,
    Descriptive,
}

/// Per-tool prompt metadata
#[derive(Debug, Clone, Copy)]
pub struct AiAdapter {
    pub tool: &'static str,
    pub label: &'static str,
    pub style: AdapterStyle,
    /// Advertised prompt length limit of the tool, in characters
    #[allow(dead_code)]
    pub max_length: usize,
    /// Tool accepts a role preamble; composition always emits one for text tools
    #[allow(dead_code)]
    pub supports_roles: bool,
    /// Tool accepts a separate system message; prompts are sent as one block
    #[allow(dead_code)]
    pub supports_system: bool,
    pub parameters: &'static [&'static str],
}

impl AiAdapter {
    /// Image tools that expect comma-separated keywords instead of prose
    pub fn is_keyword_based(&self) -> bool {
        self.style == AdapterStyle::KeywordBased
    }
}

const AI_ADAPTERS: &[AiAdapter] = &[
    AiAdapter {
        tool: "chatgpt",
        label: "ChatGPT (GPT-4)",
        style: AdapterStyle::Conversational,
        max_length: 4000,
        supports_roles: true,
        supports_system: true,
        parameters: &[],
    },
    AiAdapter {
        tool: "claude",
        label: "Claude 3",
        style: AdapterStyle::Detailed,
        max_length: 8000,
        supports_roles: true,
        supports_system: true,
        parameters: &[],
    },
    AiAdapter {
        tool: "gemini",
        label: "Google Gemini",
        style: AdapterStyle::Structured,
        max_length: 3000,
        supports_roles: true,
        supports_system: false,
        parameters: &[],
    },
    AiAdapter {
        tool: "midjourney",
        label: "Midjourney",
        style: AdapterStyle::KeywordBased,
        max_length: 500,
        supports_roles: false,
        supports_system: false,
        parameters: &["--ar", "--style", "--quality", "--chaos", "--seed"],
    },
    AiAdapter {
        tool: "dalle",
        label: "DALL-E",
        style: AdapterStyle::Descriptive,
        max_length: 400,
        supports_roles: false,
        supports_system: false,
        parameters: &[],
    },
];

/// All adapters, in catalog order
pub fn ai_adapters() -> &'static [AiAdapter] {
    AI_ADAPTERS
}

/// Find an adapter by tool id (case-insensitive), without fallback
pub fn find_adapter(tool: &str) -> Option<&'static AiAdapter> {
    let tool = tool.to_lowercase();
    AI_ADAPTERS.iter().find(|a| a.tool == tool)
}

/// Adapter for a tool id, falling back to `chatgpt`
pub fn adapter_for(tool: &str) -> &'static AiAdapter {
    find_adapter(tool).unwrap_or_else(|| {
        tracing::debug!(
            "Unknown AI tool '{}', falling back to {}",
            tool,
            DEFAULT_AI_TOOL
        );
        &AI_ADAPTERS[0]
    })
}

// =============================================================================
// OUTPUT STYLES
// =============================================================================

const OUTPUT_STYLES: &[(&str, &str)] = &[
    ("creative", "Creative"),
    ("technical", "Technical"),
    ("marketing", "Marketing"),
    ("research", "Research"),
];

/// Advertised output styles as (key, label) pairs
pub fn output_styles() -> &'static [(&'static str, &'static str)] {
    OUTPUT_STYLES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::PLACEHOLDER_REGEX;

    #[test]
    fn test_template_fallback_to_content_generation() {
        assert_eq!(template_for("marketing").category, "marketing");
        assert_eq!(template_for("poetry").category, DEFAULT_CATEGORY);
        assert_eq!(template_for("").category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_template_placeholders() {
        let template = template_for("code_generation");
        assert_eq!(
            template.placeholders(),
            vec![
                "[ROLE_DEFINITION]",
                "[TASK_DESCRIPTION]",
                "[REQUIREMENTS]",
                "[CONSTRAINTS]",
                "[OUTPUT_FORMAT]"
            ]
        );
    }

    #[test]
    fn test_adapter_lookup_is_case_insensitive() {
        assert_eq!(adapter_for("MidJourney").tool, "midjourney");
        assert!(adapter_for("MIDJOURNEY").is_keyword_based());
        assert_eq!(adapter_for("Claude").style, AdapterStyle::Detailed);
    }

    #[test]
    fn test_adapter_fallback_to_chatgpt() {
        let adapter = adapter_for("unknown_tool");
        assert_eq!(adapter.tool, DEFAULT_AI_TOOL);
        assert_eq!(adapter.style, AdapterStyle::Conversational);
        assert!(find_adapter("unknown_tool").is_none());
    }

    #[test]
    fn test_adapter_capabilities() {
        let chatgpt = adapter_for("chatgpt");
        assert_eq!(chatgpt.max_length, 4000);
        assert!(chatgpt.supports_roles && chatgpt.supports_system);

        let gemini = adapter_for("gemini");
        assert!(gemini.supports_roles && !gemini.supports_system);

        let midjourney = adapter_for("midjourney");
        assert_eq!(midjourney.max_length, 500);
        assert!(!midjourney.supports_roles && !midjourney.supports_system);
        assert_eq!(midjourney.parameters.len(), 5);
    }

    #[test]
    fn test_component_fallbacks() {
        assert_eq!(role_definition("poet"), role_definition(DEFAULT_STYLE));
        assert!(role_definition("seo").contains("SEO strategist"));
        assert_eq!(task_description("delete"), task_description(DEFAULT_OPERATION));
        assert!(task_description("optimize").starts_with("Your task is to optimize"));
        assert_eq!(image_style_modifier("seo"), DEFAULT_IMAGE_STYLE_MODIFIER);
        assert_eq!(
            component(ComponentKind::QualityModifiers, "high_quality"),
            Some("ultra-detailed, high resolution, professional quality")
        );
        assert_eq!(component(ComponentKind::OutputFormat, "table"), None);
    }

    #[test]
    fn test_no_component_text_contains_placeholder() {
        // Placeholder substitution must stay order-independent
        for entry in COMPONENTS {
            assert!(
                !PLACEHOLDER_REGEX.is_match(entry.text),
                "component {:?}/{} contains a placeholder token",
                entry.kind,
                entry.variant
            );
        }
        for (_, modifier) in IMAGE_STYLE_MODIFIERS {
            assert!(!PLACEHOLDER_REGEX.is_match(modifier));
        }
    }

    #[test]
    fn test_only_midjourney_is_keyword_based() {
        let keyword_based: Vec<_> = ai_adapters()
            .iter()
            .filter(|a| a.is_keyword_based())
            .map(|a| a.tool)
            .collect();
        assert_eq!(keyword_based, vec!["midjourney"]);
    }
}
