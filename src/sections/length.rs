//! Length section - checks minimum and extended password length.

use secrecy::{ExposeSecret, SecretString};

use crate::config::RuleConfig;
use crate::types::{CriterionId, CriterionResult};

pub const MIN_LENGTH: usize = 8;
pub const EXTENDED_LENGTH: usize = 12;

/// Checks the password length against the variant's targets.
///
/// Length is counted in Unicode code points.
///
/// # Returns
/// - Standard: one `MinLength` result
/// - Extended: `MinLength` then `ExtendedLength`, each reporting the
///   current length when unmet
pub fn length_section(password: &SecretString, config: RuleConfig) -> Vec<CriterionResult> {
    let len = password.expose_secret().chars().count();

    match config {
        RuleConfig::Standard => {
            let met = len >= MIN_LENGTH;
            vec![CriterionResult::new(
                CriterionId::MinLength,
                met,
                format!(
                    "Length: At least {} characters - {}",
                    MIN_LENGTH,
                    if met { "Met" } else { "Not Met" }
                ),
            )]
        }
        RuleConfig::Extended => vec![
            extended_length(CriterionId::MinLength, len, MIN_LENGTH, "At least"),
            extended_length(CriterionId::ExtendedLength, len, EXTENDED_LENGTH, "Extra strength:"),
        ],
    }
}

fn extended_length(id: CriterionId, len: usize, target: usize, prefix: &str) -> CriterionResult {
    let met = len >= target;
    let message = if met {
        format!("{} {} characters", prefix, target)
    } else {
        format!("{} {} characters (currently {})", prefix, target, len)
    };
    CriterionResult::new(id, met, message)
}
