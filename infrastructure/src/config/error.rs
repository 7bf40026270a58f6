//! Configuration errors

use petdesk_application::GatewayError;
use petdesk_domain::ConfigIssue;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Missing API key: set {env_var} or providers.openai.api_key")]
    MissingCredentials { env_var: String },

    #[error("Could not initialize provider: {0}")]
    Provider(#[from] GatewayError),

    #[error("{} configuration error(s)", .0.len())]
    Invalid(Vec<ConfigIssue>),
}
