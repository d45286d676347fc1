pub mod constants;
pub mod prompts;
pub mod render;
#[cfg(test)]
pub mod test_helpers;
pub mod types;
pub mod validation;
