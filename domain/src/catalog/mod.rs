//! Intent and prepared-answer catalogs
//!
//! Immutable lookup tables loaded once at startup and shared read-only by
//! the classifier and the customizer.

mod consistency;
mod entities;
mod registry;

pub use consistency::check_catalog_consistency;
pub use entities::{IntentDefinition, PreparedAnswerDefinition};
pub use registry::{AnswerCatalog, IntentCatalog};
