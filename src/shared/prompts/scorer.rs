use crate::shared::prompts::catalog::find_adapter;
use crate::shared::prompts::word_count;

pub const BASE_SCORE: i32 = 60;
pub const MAX_SCORE: i32 = 100;

const SPECIFICITY_WORDS: [&str; 5] = [
    "specific",
    "detailed",
    "comprehensive",
    "professional",
    "expert",
];

/// Heuristic quality score of a prompt.
///
/// All rules are additive on top of `BASE_SCORE`, so only the upper bound
/// needs clamping.
pub fn score(prompt: &str, ai_tool: &str, _category: &str) -> i32 {
    let mut score = BASE_SCORE;

    let words = word_count(prompt);
    if (30..=200).contains(&words) {
        score += 10;
    } else if words > 200 {
        score += 5;
    }

    if prompt.contains("###") {
        score += 15;
    }

    let upper = prompt.to_uppercase();
    if upper.contains("ROLE") {
        score += 10;
    }
    if upper.contains("TASK") {
        score += 10;
    }

    let lower = prompt.to_lowercase();
    score += 2 * SPECIFICITY_WORDS
        .iter()
        .filter(|word| lower.contains(*word))
        .count() as i32;

    if find_adapter(ai_tool).is_some_and(|a| a.is_keyword_based()) && prompt.contains(',') {
        score += 10;
    }

    score.min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::lorem::en::{Paragraph, Words};
    use fake::Fake;

    #[test]
    fn test_empty_prompt_scores_base() {
        assert_eq!(score("", "chatgpt", "content_generation"), BASE_SCORE);
    }

    #[test]
    fn test_all_features_clamp_to_max() {
        // 60 + 10 + 15 + 10 + 10 + 10 = 115
        let mut prompt = String::from(
            "### ROLE TASK specific detailed comprehensive professional expert",
        );
        prompt.push_str(&" filler".repeat(27));
        assert_eq!(word_count(&prompt), 35);
        assert_eq!(score(&prompt, "chatgpt", "content_generation"), MAX_SCORE);
    }

    #[test]
    fn test_length_buckets() {
        let short = "word ".repeat(29);
        let medium = "word ".repeat(30);
        let long = "word ".repeat(201);
        assert_eq!(score(&short, "chatgpt", "marketing"), 60);
        assert_eq!(score(&medium, "chatgpt", "marketing"), 70);
        assert_eq!(score(&long, "chatgpt", "marketing"), 65);
    }

    #[test]
    fn test_specificity_words_count_once_each() {
        assert_eq!(score("detailed detailed detailed", "chatgpt", "marketing"), 62);
        assert_eq!(score("Specific and EXPERT", "chatgpt", "marketing"), 64);
    }

    #[test]
    fn test_role_and_task_are_case_insensitive() {
        assert_eq!(score("your role and task", "claude", "marketing"), 80);
    }

    #[test]
    fn test_keyword_based_comma_bonus() {
        assert_eq!(score("a cat, a hat", "midjourney", "image_generation"), 70);
        assert_eq!(score("a cat a hat", "midjourney", "image_generation"), 60);
        assert_eq!(score("a cat, a hat", "dalle", "image_generation"), 60);
    }

    #[test]
    fn test_score_always_in_range() {
        for _ in 0..50 {
            let words: Vec<String> = Words(1..300).fake();
            let paragraph: String = Paragraph(1..8).fake();
            for text in [words.join(" "), paragraph] {
                for tool in ["chatgpt", "midjourney", "unknown_tool"] {
                    let value = score(&text, tool, "content_generation");
                    assert!((1..=MAX_SCORE).contains(&value), "score {} out of range", value);
                }
            }
        }
    }
}
