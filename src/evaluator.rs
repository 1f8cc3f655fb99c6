//! Password scorer - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::{ConfigError, RuleConfig};
use crate::patterns::CommonPatterns;
use crate::sections::{character_variety_section, common_pattern_section, length_section};
use crate::types::{CriterionId, CriterionResult, ScoreReport};

/// Delay before a queued evaluation runs, so that fast typing only scores the
/// latest input.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

type Section = fn(&SecretString, RuleConfig, &CommonPatterns) -> Vec<CriterionResult>;

fn length(
    password: &SecretString,
    config: RuleConfig,
    _: &CommonPatterns,
) -> Vec<CriterionResult> {
    length_section(password, config)
}

fn variety(
    password: &SecretString,
    config: RuleConfig,
    _: &CommonPatterns,
) -> Vec<CriterionResult> {
    character_variety_section(password, config)
}

fn pattern(
    password: &SecretString,
    _: RuleConfig,
    patterns: &CommonPatterns,
) -> Vec<CriterionResult> {
    vec![common_pattern_section(password, patterns)]
}

const STANDARD_SECTIONS: &[(&str, Section)] = &[
    ("length", length as Section),
    ("variety", variety as Section),
];

const EXTENDED_SECTIONS: &[(&str, Section)] = &[
    ("length", length as Section),
    ("variety", variety as Section),
    ("pattern", pattern as Section),
];

/// Scores passwords under one rule set.
///
/// Holds no state between calls; the same password always produces the
/// same report.
#[derive(Debug, Clone, Default)]
pub struct PasswordScorer {
    config: RuleConfig,
    patterns: CommonPatterns,
}

impl PasswordScorer {
    pub fn new(config: RuleConfig) -> Self {
        Self {
            config,
            patterns: CommonPatterns::default(),
        }
    }

    /// Replaces the common-pattern list used by the extended rule set.
    pub fn with_patterns(mut self, patterns: CommonPatterns) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn config(&self) -> RuleConfig {
        self.config
    }

    pub fn patterns(&self) -> &CommonPatterns {
        &self.patterns
    }

    /// Evaluates password strength and returns the score with per-criterion feedback.
    ///
    /// Never fails: empty, whitespace-only and non-ASCII input all produce a
    /// full report.
    pub fn evaluate(&self, password: &SecretString) -> ScoreReport {
        let sections = match self.config {
            RuleConfig::Standard => STANDARD_SECTIONS,
            RuleConfig::Extended => EXTENDED_SECTIONS,
        };

        // Orchestrator: execute sections in display order
        let mut criteria = Vec::new();
        for (_section_name, section_fn) in sections {
            let results = section_fn(password, self.config, &self.patterns);

            #[cfg(feature = "tracing")]
            tracing::trace!("section {}: {} criteria", _section_name, results.len());

            criteria.extend(results);
        }

        let score = match self.config {
            RuleConfig::Standard => standard_score(&criteria),
            RuleConfig::Extended => extended_score(&criteria),
        };
        let score = score.clamp(0, i64::from(self.config.max_score())) as u8;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "password evaluated: rule_set={} score={}/{}",
            self.config,
            score,
            self.config.max_score()
        );

        ScoreReport {
            variant: self.config,
            score,
            criteria,
        }
    }

    /// Debounced evaluation that sends the report via channel.
    ///
    /// Waits [`DEBOUNCE`] first. If `token` was cancelled meanwhile (a newer
    /// input superseded this one) nothing is evaluated or sent.
    #[cfg(feature = "async")]
    pub async fn evaluate_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<ScoreReport>,
    ) {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation is about to start...");

        tokio::time::sleep(DEBOUNCE).await;

        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation superseded, skipping");
            return;
        }

        let report = self.evaluate(password);

        if let Err(_e) = tx.send(report).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password score report: {}", _e);
        }
    }
}

/// One point per met criterion.
fn standard_score(criteria: &[CriterionResult]) -> i64 {
    criteria.iter().filter(|c| c.met).count() as i64
}

/// Length bonuses, diversity bonuses, then the common-pattern penalty.
fn extended_score(criteria: &[CriterionResult]) -> i64 {
    let met = |id: CriterionId| criteria.iter().any(|c| c.id == id && c.met);

    let mut score: i64 = 0;
    if met(CriterionId::MinLength) {
        score += 1;
    }
    if met(CriterionId::ExtendedLength) {
        score += 1;
    }

    let char_type_count = [
        CriterionId::Lowercase,
        CriterionId::Uppercase,
        CriterionId::Digit,
        CriterionId::Special,
    ]
    .into_iter()
    .filter(|&id| met(id))
    .count();
    if char_type_count >= 3 {
        score += 1;
    }
    if char_type_count == 4 {
        score += 1;
    }

    let penalized = criteria
        .iter()
        .any(|c| c.id == CriterionId::CommonPattern && !c.met);
    if penalized {
        score = (score - 1).max(0);
    }

    score
}

/// Evaluates `password` under `config` with the built-in pattern list.
pub fn evaluate(password: &SecretString, config: RuleConfig) -> ScoreReport {
    PasswordScorer::new(config).evaluate(password)
}

/// Evaluates `password` under the rule set named `rule_set`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidConfiguration`] for an unrecognized name.
pub fn evaluate_named(
    password: &SecretString,
    rule_set: &str,
) -> Result<ScoreReport, ConfigError> {
    let config: RuleConfig = rule_set.parse()?;
    Ok(evaluate(password, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn ids(report: &ScoreReport) -> Vec<CriterionId> {
        report.criteria.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_standard_empty_password() {
        let report = evaluate(&secret(""), RuleConfig::Standard);
        assert_eq!(report.score, 0);
        assert_eq!(report.criteria.len(), 5);
        assert!(report.criteria.iter().all(|c| !c.met));
        assert_eq!(report.label(), "Very Weak");
    }

    #[test]
    fn test_standard_all_criteria() {
        let report = evaluate(&secret("Abcdefg1!"), RuleConfig::Standard);
        assert_eq!(report.score, 5);
        assert!(report.criteria.iter().all(|c| c.met));
        assert_eq!(report.label(), "Very Strong");
    }

    #[test]
    fn test_standard_messages() {
        let report = evaluate(&secret("abc"), RuleConfig::Standard);
        let messages: Vec<_> = report.criteria.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Length: At least 8 characters - Not Met",
                "Uppercase: At least one uppercase letter - Not Met",
                "Lowercase: At least one lowercase letter - Met",
                "Numbers: At least one number - Not Met",
                "Special Characters: At least one special character - Not Met",
            ]
        );
        assert_eq!(report.score, 1);
    }

    #[test]
    fn test_standard_has_no_pattern_penalty() {
        let report = evaluate(&secret("Password123!"), RuleConfig::Standard);
        assert_eq!(report.score, 5);
        assert!(report.criterion(CriterionId::CommonPattern).is_none());
    }

    #[test]
    fn test_extended_common_pattern_penalty() {
        let report = evaluate(&secret("abc"), RuleConfig::Extended);
        let warning = report.criterion(CriterionId::CommonPattern).unwrap();
        assert!(!warning.met);
        assert_eq!(warning.message, "Contains common pattern 'abc'");
        assert_eq!(report.score, 0);
    }

    #[test]
    fn test_extended_penalty_case_insensitive() {
        let report = evaluate(&secret("xxQWERTYxx"), RuleConfig::Extended);
        assert!(!report.criterion(CriterionId::CommonPattern).unwrap().met);
    }

    #[test]
    fn test_extended_length_only() {
        let report = evaluate(&secret("AAAAAAAAAAAA"), RuleConfig::Extended);
        assert_eq!(report.score, 2);
        assert!(report.criterion(CriterionId::MinLength).unwrap().met);
        assert!(report.criterion(CriterionId::ExtendedLength).unwrap().met);
        assert!(report.criterion(CriterionId::CommonPattern).unwrap().met);
    }

    #[test]
    fn test_extended_full_score() {
        let report = evaluate(&secret("Zebra!9Lamp#Kite"), RuleConfig::Extended);
        assert_eq!(report.score, 4);
        assert_eq!(report.label(), "Strong");
    }

    #[test]
    fn test_extended_diversity_bonus() {
        // three classes, short
        let report = evaluate(&secret("Zeb9"), RuleConfig::Extended);
        assert_eq!(report.score, 1);
        // four classes, short
        let report = evaluate(&secret("Zeb9!"), RuleConfig::Extended);
        assert_eq!(report.score, 2);
    }

    #[test]
    fn test_extended_penalty_after_bonuses() {
        // length 8 + four classes = 3, minus penalty
        let report = evaluate(&secret("Password1!"), RuleConfig::Extended);
        assert_eq!(report.score, 2);
    }

    #[test]
    fn test_extended_order() {
        let report = evaluate(&secret(""), RuleConfig::Extended);
        assert_eq!(
            ids(&report),
            vec![
                CriterionId::MinLength,
                CriterionId::ExtendedLength,
                CriterionId::Lowercase,
                CriterionId::Uppercase,
                CriterionId::Digit,
                CriterionId::Special,
                CriterionId::CommonPattern,
            ]
        );
    }

    #[test]
    fn test_order_stable_across_inputs() {
        let inputs = ["", "a", "abc", "Abcdefg1!", "   ", "😀\u{0}\t", "Zebra!9Lamp#Kite"];
        for config in RuleConfig::ALL {
            let expected = ids(&evaluate(&secret(""), config));
            for input in inputs {
                assert_eq!(ids(&evaluate(&secret(input), config)), expected, "input {:?}", input);
            }
        }
    }

    #[test]
    fn test_score_bounds() {
        let inputs = [
            "",
            " ",
            "\u{0}\u{1}\u{7f}",
            "𝔘𝔫𝔦𝔠𝔬𝔡𝔢",
            "password",
            "Abcdefg1!",
            "VeryStrongPassword123!@#",
            "Zebra!9Lamp#Kite~=|",
        ];
        for config in RuleConfig::ALL {
            for input in inputs {
                let report = evaluate(&secret(input), config);
                assert!(
                    report.score <= config.max_score(),
                    "score {} out of bounds for {:?} under {}",
                    report.score,
                    input,
                    config
                );
            }
        }
    }

    #[test]
    fn test_idempotent() {
        for config in RuleConfig::ALL {
            let pwd = secret("MyPass123!");
            assert_eq!(evaluate(&pwd, config), evaluate(&pwd, config));
        }
    }

    #[test]
    fn test_standard_monotonic_when_criterion_newly_met() {
        let steps = ["a", "aB", "aB3", "aB3!", "aB3!xxxx"];
        let mut previous = 0;
        for step in steps {
            let score = evaluate(&secret(step), RuleConfig::Standard).score;
            assert!(score > previous, "{:?} scored {} after {}", step, score, previous);
            previous = score;
        }
        assert_eq!(previous, 5);
    }

    #[test]
    fn test_whitespace_only() {
        let report = evaluate(&secret("            "), RuleConfig::Extended);
        assert_eq!(report.score, 2);
        let report = evaluate(&secret("            "), RuleConfig::Standard);
        assert_eq!(report.score, 1);
    }

    #[test]
    fn test_custom_patterns() {
        let scorer = PasswordScorer::new(RuleConfig::Extended)
            .with_patterns(CommonPatterns::new(["zebra"]));
        let report = scorer.evaluate(&secret("Zebra!9Lamp#Kite"));
        assert_eq!(report.score, 3);
        // default list no longer applies
        let report = scorer.evaluate(&secret("abc"));
        assert!(report.criterion(CriterionId::CommonPattern).unwrap().met);
    }

    #[test]
    fn test_default_scorer_is_standard() {
        let scorer = PasswordScorer::default();
        assert_eq!(scorer.config(), RuleConfig::Standard);
        assert_eq!(scorer.patterns(), &CommonPatterns::default());
    }

    #[test]
    fn test_evaluate_named() {
        let report = evaluate_named(&secret("AAAAAAAAAAAA"), "extended").unwrap();
        assert_eq!(report.variant, RuleConfig::Extended);
        assert_eq!(report.score, 2);
    }

    #[test]
    fn test_evaluate_named_invalid() {
        let result = evaluate_named(&secret("anything"), "legacy");
        assert_eq!(
            result,
            Err(ConfigError::InvalidConfiguration("legacy".to_string()))
        );
    }

    #[test]
    fn test_scorer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PasswordScorer>();
        assert_send_sync::<ScoreReport>();
    }
}
