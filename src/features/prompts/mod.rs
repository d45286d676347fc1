//! Prompt generation API.
//!
//! | Method | Path | |
//! |---|---|---|
//! | POST | `/api/prompts/generate` | compose, evaluate and store a prompt |
//! | POST | `/api/prompts/improve` | rewrite an existing prompt and store it |
//! | POST | `/api/prompts/analyze` | evaluate only, nothing stored |
//! | GET | `/api/prompts/templates` | category templates |
//! | GET | `/api/prompts/history` | stored prompts, newest first |
//! | GET | `/api/prompts/export/{id}` | stored prompt as JSON or text |
//! | GET | `/api/prompts/categories` | category labels |
//! | GET | `/api/prompts/ai-tools` | AI tool labels |
//! | GET | `/api/prompts/output-styles` | output style labels |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::PromptService;
