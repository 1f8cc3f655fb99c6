//! Rule set selection.
//!
//! A `RuleConfig` names which criteria table the scorer applies. It can be
//! built directly, parsed from a string, or read from the environment.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable selecting the rule set for [`RuleConfig::from_env`].
pub const RULE_SET_ENV: &str = "PWD_RULE_SET";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration: unrecognized rule set '{0}'")]
    InvalidConfiguration(String),
}

/// Rule set variant applied by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RuleConfig {
    /// Five binary criteria, one point each.
    #[default]
    Standard,
    /// Graduated length and diversity bonuses with a common-pattern penalty.
    Extended,
}

impl RuleConfig {
    pub const ALL: [RuleConfig; 2] = [RuleConfig::Standard, RuleConfig::Extended];

    /// Highest score the variant can report.
    pub fn max_score(&self) -> u8 {
        match self {
            RuleConfig::Standard => 5,
            RuleConfig::Extended => 6,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RuleConfig::Standard => "standard",
            RuleConfig::Extended => "extended",
        }
    }

    /// Reads the rule set from `PWD_RULE_SET`.
    ///
    /// Falls back to [`RuleConfig::Standard`] when the variable is unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if the variable is set to
    /// an unrecognized name. It never silently defaults in that case.
    pub fn from_env() -> Result<Self, ConfigError> {
        let Some(value) = std::env::var_os(RULE_SET_ENV) else {
            return Ok(RuleConfig::default());
        };

        let parsed = match value.to_str() {
            Some(name) => name.parse(),
            None => Err(ConfigError::InvalidConfiguration(
                value.to_string_lossy().into_owned(),
            )),
        };
        parsed.inspect_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::warn!("{} rejected: {}", RULE_SET_ENV, _e);
        })
    }
}

impl FromStr for RuleConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        RuleConfig::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::InvalidConfiguration(name.to_string()))
    }
}

impl fmt::Display for RuleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
