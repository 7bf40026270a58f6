//! Cross-catalog consistency report.
//!
//! Nothing forces the two catalogs to line up. A question classified to an
//! intent without a prepared answer still gets a (degraded) result, so gaps
//! are reported as warnings rather than refused.

use super::registry::{AnswerCatalog, IntentCatalog};
use crate::config::{ConfigIssue, ConfigIssueCode};

/// List intents without a prepared answer and answers without an intent.
pub fn check_catalog_consistency(
    intents: &IntentCatalog,
    answers: &AnswerCatalog,
) -> Vec<ConfigIssue> {
    let missing = intents
        .iter()
        .filter(|intent| !answers.contains(&intent.id))
        .map(|intent| {
            ConfigIssue::warning(
                ConfigIssueCode::MissingPreparedAnswer {
                    intent_id: intent.id.clone(),
                },
                format!(
                    "intent '{}' ({}) has no prepared answer",
                    intent.id, intent.description
                ),
            )
        });

    let orphans = answers
        .iter()
        .filter(|answer| !intents.contains(&answer.id))
        .map(|answer| {
            ConfigIssue::warning(
                ConfigIssueCode::OrphanPreparedAnswer {
                    answer_id: answer.id.clone(),
                },
                format!("prepared answer '{}' has no matching intent", answer.id),
            )
        });

    missing.chain(orphans).collect()
}
