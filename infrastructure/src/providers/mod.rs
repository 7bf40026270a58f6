//! Generative-model provider adapters.

pub mod openai;

pub use openai::OpenAiGateway;
