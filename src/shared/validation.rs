use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for bracketed template placeholder tokens
    /// Must be uppercase letters and underscores inside square brackets
    /// - Valid: "[ROLE_DEFINITION]", "[CONTEXT]", "[SEO_KEYWORDS]"
    /// - Invalid: "[role]", "[ROLE DEFINITION]", "ROLE_DEFINITION", "[]"
    pub static ref PLACEHOLDER_REGEX: Regex = Regex::new(r"\[[A-Z][A-Z_]*\]").unwrap();
}

/// Collect the placeholder tokens of a template structure in order of appearance
pub fn find_placeholders(text: &str) -> Vec<&str> {
    PLACEHOLDER_REGEX
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}
