//! Per-item scoring rule.

use super::canonical_id::CanonicalId;

/// Name under which item scores are attached to execution records.
pub const SCORE_NAME: &str = "prepared_answer_id";

/// Score a produced prepared-answer id against the label.
///
/// Returns `1` when both ids normalize to the same [`CanonicalId`], `0`
/// otherwise. Never fails, whatever the produced text looks like.
pub fn score_prepared_answer(produced: &str, expected: &CanonicalId) -> u8 {
    u8::from(CanonicalId::parse(produced) == *expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textual_output_matches_numeric_label() {
        assert_eq!(score_prepared_answer("3", &CanonicalId::Numeric(3)), 1);
        assert_eq!(score_prepared_answer(" 03", &CanonicalId::Numeric(3)), 1);
    }

    #[test]
    fn test_mismatch_scores_zero() {
        assert_eq!(score_prepared_answer("2", &CanonicalId::Numeric(3)), 0);
        assert_eq!(score_prepared_answer("3", &CanonicalId::parse("A3")), 0);
    }

    #[test]
    fn test_garbage_output_does_not_fail() {
        assert_eq!(score_prepared_answer("", &CanonicalId::Numeric(0)), 0);
        assert_eq!(score_prepared_answer("not-an-id", &CanonicalId::Numeric(1)), 0);
        assert_eq!(
            score_prepared_answer("refund", &CanonicalId::parse("refund")),
            1
        );
    }
}
