//! Password strength scoring library
//!
//! This library scores candidate passwords against a named rule set and
//! returns per-criterion feedback suitable for rendering next to a password
//! field.
//!
//! # Rule sets
//!
//! - `standard`: five binary criteria, score 0..=5
//! - `extended`: length and diversity bonuses with a common-pattern
//!   penalty, score 0..=6
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_RULE_SET`: rule set read by [`RuleConfig::from_env`] (default: `standard`)
//! - `PWD_PATTERNS_PATH`: custom common-pattern file read by
//!   [`CommonPatterns::from_env`] (default: built-in list)
//!
//! # Example
//!
//! ```rust
//! use pwd_scorer::{evaluate, RuleConfig};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdefg1!".to_string().into());
//! let report = evaluate(&password, RuleConfig::Standard);
//!
//! assert_eq!(report.score, 5);
//! assert_eq!(report.label(), "Very Strong");
//! for criterion in &report.criteria {
//!     println!("[{}] {}", if criterion.met { "x" } else { " " }, criterion.message);
//! }
//! ```

// Internal modules
mod config;
mod evaluator;
mod patterns;
mod sections;
mod strength;
mod types;

// Public API
pub use config::{ConfigError, RuleConfig, RULE_SET_ENV};
pub use evaluator::{evaluate, evaluate_named, PasswordScorer};
pub use patterns::{CommonPatterns, PatternsError, PATTERNS_PATH_ENV};
pub use strength::{strength_color_key, strength_label, ColorKey};
pub use types::{CriterionId, CriterionResult, ScoreReport};

#[cfg(feature = "async")]
pub use evaluator::DEBOUNCE;
