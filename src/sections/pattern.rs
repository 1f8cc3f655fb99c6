//! Pattern section - detects well-known weak substrings.

use secrecy::{ExposeSecret, SecretString};

use crate::patterns::CommonPatterns;
use crate::types::{CriterionId, CriterionResult};

/// Checks the password for common patterns, ignoring case.
///
/// # Returns
/// A `CommonPattern` result that is met when no pattern is found, or an
/// unmet warning naming the first pattern found.
pub fn common_pattern_section(
    password: &SecretString,
    patterns: &CommonPatterns,
) -> CriterionResult {
    match patterns.find_in(password.expose_secret()) {
        Some(found) => CriterionResult::new(
            CriterionId::CommonPattern,
            false,
            format!("Contains common pattern '{}'", found),
        ),
        None => CriterionResult::new(CriterionId::CommonPattern, true, "No common patterns"),
    }
}
