//! Prompt engine: template composition and heuristic evaluation.
//!
//! The engine turns free-form user input into a structured prompt for a
//! target AI tool, then grades it with surface-level text heuristics. There
//! is no language model involved; every operation is a pure function over
//! the static tables in [`catalog`].
//!
//! # Usage
//!
//! ```ignore
//! use crate::shared::prompts::{GenerateParams, PromptEngine};
//!
//! let engine = PromptEngine::new();
//! let outcome = engine.generate(&GenerateParams {
//!     user_input: "a cat",
//!     ai_tool: "midjourney",
//!     output_style: "creative",
//!     category: "image_generation",
//!     seo_keywords: None,
//!     operation: None,
//! });
//! assert!(outcome.generated_prompt.ends_with("--quality 2"));
//! ```

pub mod advisor;
pub mod analyzer;
pub mod catalog;
pub mod composer;
pub mod engine;
pub mod scorer;

pub use advisor::{Improvement, PromptIssue};
pub use engine::{GenerateParams, Generation, PromptAnalysis, PromptEngine};

/// Number of whitespace-separated words in a text
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
