//! Score to label/colour lookups.
//!
//! Each variant has a threshold table ordered from the highest minimum score
//! down to zero. The first row whose minimum is not above the score wins.

use std::fmt;

use crate::config::RuleConfig;

/// Colour token a presentation layer maps to its own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKey {
    Red,
    Orange,
    Yellow,
    Lime,
    Green,
}

impl ColorKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorKey::Red => "red",
            ColorKey::Orange => "orange",
            ColorKey::Yellow => "yellow",
            ColorKey::Lime => "lime",
            ColorKey::Green => "green",
        }
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Threshold {
    min_score: u8,
    label: &'static str,
    color: ColorKey,
}

const fn row(min_score: u8, label: &'static str, color: ColorKey) -> Threshold {
    Threshold {
        min_score,
        label,
        color,
    }
}

const STANDARD_THRESHOLDS: &[Threshold] = &[
    row(5, "Very Strong", ColorKey::Green),
    row(4, "Strong", ColorKey::Lime),
    row(3, "Moderate", ColorKey::Yellow),
    row(1, "Weak", ColorKey::Orange),
    row(0, "Very Weak", ColorKey::Red),
];

const EXTENDED_THRESHOLDS: &[Threshold] = &[
    row(4, "Strong", ColorKey::Green),
    row(3, "Medium", ColorKey::Yellow),
    row(2, "Weak", ColorKey::Orange),
    row(0, "Very Weak", ColorKey::Red),
];

fn thresholds(config: RuleConfig) -> &'static [Threshold] {
    match config {
        RuleConfig::Standard => STANDARD_THRESHOLDS,
        RuleConfig::Extended => EXTENDED_THRESHOLDS,
    }
}

// Every table ends with a zero row, so any u8 score finds a match.
fn lookup(score: u8, config: RuleConfig) -> &'static Threshold {
    let table = thresholds(config);
    table
        .iter()
        .find(|t| score >= t.min_score)
        .unwrap_or(&table[table.len() - 1])
}

/// Human-readable strength category for `score` under `config`.
pub fn strength_label(score: u8, config: RuleConfig) -> &'static str {
    lookup(score, config).label
}

/// Colour token for `score` under `config`.
pub fn strength_color_key(score: u8, config: RuleConfig) -> ColorKey {
    lookup(score, config).color
}
