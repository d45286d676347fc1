//! Jinja rendering for plain-text exports.
//!
//! Templates live in `templates/` and are embedded at compile time, so the
//! binary does not depend on its working directory.

use minijinja::{Environment, Value};
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;

/// Template name of the plain-text prompt export
pub const PROMPT_EXPORT_TEMPLATE: &str = "exports/prompt.txt";

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();

    if let Err(e) = env.add_template(
        PROMPT_EXPORT_TEMPLATE,
        include_str!("../../templates/exports/prompt.txt.jinja"),
    ) {
        tracing::warn!("Failed to load template {}: {}", PROMPT_EXPORT_TEMPLATE, e);
    }

    env
}

fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render an embedded template with a serializable context
pub fn render_template<S: Serialize>(name: &str, context: S) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(name)
        .map_err(|_| TemplateError::NotFound(name.to_string()))?;

    template
        .render(Value::from_serialize(&context))
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_prompt_export() {
        let text = render_template(
            PROMPT_EXPORT_TEMPLATE,
            json!({
                "generated_prompt": "### TASK\nWrite <docs> & tests",
                "analysis": "✓ Contains specific task instructions",
                "score": 87,
            }),
        )
        .unwrap();

        assert_eq!(
            text,
            "Generated Prompt:\n### TASK\nWrite <docs> & tests\n\n\
             Analysis:\n✓ Contains specific task instructions\n\n\
             Score: 87/100"
        );
    }

    #[test]
    fn test_render_missing_template() {
        let result = render_template("nonexistent.txt", json!({}));
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
    }
}
