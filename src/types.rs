//! Report types produced by the scorer.

use std::fmt;

use crate::config::RuleConfig;
use crate::strength::{strength_color_key, strength_label, ColorKey};

/// Identifies a single scoring criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriterionId {
    /// At least 8 characters.
    MinLength,
    /// At least 12 characters (extended variant only).
    ExtendedLength,
    Uppercase,
    Lowercase,
    Digit,
    Special,
    /// No common pattern found (extended variant only).
    CommonPattern,
}

impl CriterionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionId::MinLength => "min_length",
            CriterionId::ExtendedLength => "extended_length",
            CriterionId::Uppercase => "uppercase",
            CriterionId::Lowercase => "lowercase",
            CriterionId::Digit => "digit",
            CriterionId::Special => "special",
            CriterionId::CommonPattern => "common_pattern",
        }
    }
}

impl fmt::Display for CriterionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one criterion for one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriterionResult {
    pub id: CriterionId,
    pub met: bool,
    pub message: String,
}

impl CriterionResult {
    pub fn new(id: CriterionId, met: bool, message: impl Into<String>) -> Self {
        Self {
            id,
            met,
            message: message.into(),
        }
    }
}

/// Score and ordered feedback for a single evaluation.
///
/// `criteria` is in evaluation order, which is also the display order.
/// For a given variant the sequence of ids never changes; only `met` and
/// `message` depend on the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub variant: RuleConfig,
    pub score: u8,
    pub criteria: Vec<CriterionResult>,
}

impl ScoreReport {
    /// Human-readable strength category for this report's score.
    pub fn label(&self) -> &'static str {
        strength_label(self.score, self.variant)
    }

    /// Display colour token for this report's score.
    pub fn color_key(&self) -> ColorKey {
        strength_color_key(self.score, self.variant)
    }

    /// Looks up the result for a criterion, if the variant evaluates it.
    pub fn criterion(&self, id: CriterionId) -> Option<&CriterionResult> {
        self.criteria.iter().find(|c| c.id == id)
    }

    /// Number of criteria that were met.
    pub fn met_count(&self) -> usize {
        self.criteria.iter().filter(|c| c.met).count()
    }
}
