//! Configuration module.
//!
//! Handles loading application settings and the analysis prompt.

mod prompts;
mod settings;

pub use prompts::Prompts;
pub use settings::{GeneralSettings, PromptSettings, Settings, YoutubeSettings};
