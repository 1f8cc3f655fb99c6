//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use secrecy::{ExposeSecret, SecretString};

use crate::config::RuleConfig;
use crate::types::{CriterionId, CriterionResult};

const STANDARD_SPECIALS: &str = "!@#$%^&*()_+{}[]:;<>,.?~\\/-";
const EXTENDED_SPECIALS: &str = "!@#$%^&*()_+-=[]{};'\"\\|,.<>/?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharClass {
    fn id(self) -> CriterionId {
        match self {
            CharClass::Uppercase => CriterionId::Uppercase,
            CharClass::Lowercase => CriterionId::Lowercase,
            CharClass::Digit => CriterionId::Digit,
            CharClass::Special => CriterionId::Special,
        }
    }

    fn matches(self, c: char, specials: &str) -> bool {
        match self {
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Special => specials.contains(c),
        }
    }

    fn standard_message(self, met: bool) -> String {
        let text = match self {
            CharClass::Uppercase => "Uppercase: At least one uppercase letter",
            CharClass::Lowercase => "Lowercase: At least one lowercase letter",
            CharClass::Digit => "Numbers: At least one number",
            CharClass::Special => "Special Characters: At least one special character",
        };
        format!("{} - {}", text, if met { "Met" } else { "Not Met" })
    }

    fn extended_message(self, met: bool) -> String {
        let name = match self {
            CharClass::Uppercase => "uppercase letters",
            CharClass::Lowercase => "lowercase letters",
            CharClass::Digit => "numbers",
            CharClass::Special => "special characters",
        };
        format!("{} {}", if met { "Contains" } else { "Missing" }, name)
    }
}

const STANDARD_ORDER: [CharClass; 4] = [
    CharClass::Uppercase,
    CharClass::Lowercase,
    CharClass::Digit,
    CharClass::Special,
];

const EXTENDED_ORDER: [CharClass; 4] = [
    CharClass::Lowercase,
    CharClass::Uppercase,
    CharClass::Digit,
    CharClass::Special,
];

/// Checks which character classes the password contains.
///
/// # Returns
/// One result per class, in the variant's display order. Every class is
/// reported whether or not it is present.
pub fn character_variety_section(
    password: &SecretString,
    config: RuleConfig,
) -> Vec<CriterionResult> {
    let pwd = password.expose_secret();
    let (order, specials) = match config {
        RuleConfig::Standard => (STANDARD_ORDER, STANDARD_SPECIALS),
        RuleConfig::Extended => (EXTENDED_ORDER, EXTENDED_SPECIALS),
    };

    order
        .into_iter()
        .map(|class| {
            let met = pwd.chars().any(|c| class.matches(c, specials));
            let message = match config {
                RuleConfig::Standard => class.standard_message(met),
                RuleConfig::Extended => class.extended_message(met),
            };
            CriterionResult::new(class.id(), met, message)
        })
        .collect()
}
