pub mod prompt_handler;

pub use prompt_handler::*;
