//! Prompt domain
//!
//! Templates for the two generative calls of the answer pipeline.

mod template;

pub use template::PromptTemplate;
