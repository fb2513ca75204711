//! Hosted model integration: prompt construction, service client, response parsing

pub mod client;
pub mod parser;
pub mod prompts;

pub use client::{GeminiClient, ModelClient};
pub use parser::{parse_response, AnalysisResult};
pub use prompts::{AnalysisRequest, PromptTemplates};
