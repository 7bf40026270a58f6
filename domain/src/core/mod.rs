//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: generative models the desk can call
//! - [`question::Question`]: a validated customer question
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod question;
pub mod string;
