//! Intent classification domain

mod entities;
mod parsing;

pub use entities::ClassificationResult;
pub use parsing::{ClassificationRejection, parse_classification};
