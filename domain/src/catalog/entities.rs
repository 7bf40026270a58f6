//! Catalog entries

use serde::{Deserialize, Serialize};

/// A discrete category of customer inquiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentDefinition {
    pub id: String,
    pub description: String,
}

/// Static response text associated with an intent id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedAnswerDefinition {
    pub id: String,
    pub text: String,
}
