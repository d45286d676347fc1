//! Surface-level feedback on a composed prompt.

use crate::shared::prompts::catalog::find_adapter;
use crate::shared::prompts::word_count;

/// Produce feedback bullets for a prompt, in fixed check order.
///
/// Checks are independent substring and length tests; each contributes at
/// most one bullet (the keyword-based tool check may contribute two).
pub fn analyze(prompt: &str, ai_tool: &str, _category: &str) -> Vec<String> {
    let mut points = Vec::new();
    let lower = prompt.to_lowercase();

    if prompt.contains("###") || prompt.contains("**") {
        points.push("✓ Well-structured with clear sections and formatting".to_string());
    }

    let words = word_count(prompt);
    if words > 50 {
        points.push(format!(
            "✓ Comprehensive prompt with {} words for detailed guidance",
            words
        ));
    } else if words < 20 {
        points.push(format!(
            "⚠ Concise prompt with {} words - consider adding more detail",
            words
        ));
    }

    if lower.contains("role") || lower.contains("expert") {
        points.push("✓ Includes clear role definition for better AI understanding".to_string());
    }

    if lower.contains("task") || lower.contains("create") {
        points.push("✓ Contains specific task instructions".to_string());
    }

    if lower.contains("format") || lower.contains("structure") {
        points.push("✓ Specifies desired output format".to_string());
    }

    if find_adapter(ai_tool).is_some_and(|a| a.is_keyword_based()) {
        points.push("✓ Optimized for image generation with descriptive keywords".to_string());
        if prompt.contains("--") {
            points.push("✓ Includes technical parameters for enhanced control".to_string());
        }
    }

    points
}

/// Feedback bullets joined into the stored analysis text
pub fn analysis_text(prompt: &str, ai_tool: &str, category: &str) -> String {
    analyze(prompt, ai_tool, category).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prompt_only_warns_about_length() {
        assert_eq!(
            analyze("", "chatgpt", "content_generation"),
            vec!["⚠ Concise prompt with 0 words - consider adding more detail"]
        );
    }

    #[test]
    fn test_mid_length_prompt_has_no_length_bullet() {
        let prompt = "word ".repeat(30);
        assert!(analyze(&prompt, "chatgpt", "content_generation").is_empty());
        assert_eq!(analysis_text(&prompt, "chatgpt", "content_generation"), "");
    }

    #[test]
    fn test_bullets_follow_check_order() {
        let prompt = format!(
            "### ROLE\nYou are an expert.\n### TASK\nCreate a report in markdown format. {}",
            "detail ".repeat(60)
        );
        let points = analyze(&prompt, "claude", "content_generation");
        assert_eq!(points.len(), 5);
        assert!(points[0].starts_with("✓ Well-structured"));
        assert!(points[1].starts_with("✓ Comprehensive prompt with 74 words"));
        assert!(points[2].starts_with("✓ Includes clear role definition"));
        assert!(points[3].starts_with("✓ Contains specific task instructions"));
        assert!(points[4].starts_with("✓ Specifies desired output format"));
    }

    #[test]
    fn test_keyword_based_tool_bullets() {
        let prompt = "a cat, artistic --ar 16:9";
        let points = analyze(prompt, "MIDJOURNEY", "image_generation");
        assert_eq!(
            points,
            vec![
                "⚠ Concise prompt with 5 words - consider adding more detail",
                "✓ Optimized for image generation with descriptive keywords",
                "✓ Includes technical parameters for enhanced control",
            ]
        );

        let points = analyze("a cat, artistic", "midjourney", "image_generation");
        assert_eq!(points.len(), 2);
        assert!(points[1].starts_with("✓ Optimized for image generation"));
    }

    #[test]
    fn test_unknown_tool_gets_no_image_bullets() {
        let points = analyze("a cat --ar 16:9", "unknown_tool", "image_generation");
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_analysis_text_is_newline_joined() {
        let text = analysis_text("**Role**: create things", "chatgpt", "marketing");
        assert_eq!(
            text,
            "✓ Well-structured with clear sections and formatting\n\
             ⚠ Concise prompt with 3 words - consider adding more detail\n\
             ✓ Includes clear role definition for better AI understanding\n\
             ✓ Contains specific task instructions"
        );
    }
}
