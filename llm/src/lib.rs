pub mod client;
pub mod gemini;

pub use client::{GenerativeClient, LlmError, StaticClient};
pub use gemini::GeminiClient;
