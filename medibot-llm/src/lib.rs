//! Chat-completion clients for medibot.
//!
//! `OpenAiCompatibleClient` speaks the `/chat/completions` wire format
//! shared by OpenAI, Groq, DeepSeek and friends; `GroqClient` is the
//! binding this service actually runs with.

pub mod openai_compatible;

mod groq;

pub use groq::GroqClient;
pub use medibot_core::{ChatLlm, LlmError, LlmRequest, LlmResponse, Message, Role};
pub use openai_compatible::OpenAiCompatibleClient;
