//! LLM Provider Relay
//!
//! Forwards chat-completion requests to one of the supported providers,
//! attaching that provider's authentication headers.
//!
//! | provider    | auth headers                                   |
//! |-------------|------------------------------------------------|
//! | `groq`      | `Authorization: Bearer <key>`                  |
//! | `openai`    | `Authorization: Bearer <key>`                  |
//! | `anthropic` | `x-api-key: <key>`, `anthropic-version`        |
//! | `deepseek`  | `Authorization: Bearer <key>`                  |
//!
//! # Environment Variables
//!
//! - `GROQ_API_KEY`, `OPENAI_API_KEY`, `ANTHROPIC_API_KEY`, `DEEPSEEK_API_KEY`
//! - `GROQ_API_URL`, `OPENAI_API_URL`, `ANTHROPIC_API_URL`, `DEEPSEEK_API_URL`
//!   (optional) - endpoint overrides

pub mod client;
pub mod provider;

pub use client::LlmClient;
pub use provider::{AuthScheme, Provider, ProviderSettings, ProviderTable};
