//! Common pattern list
//!
//! Holds the substrings the extended rule set penalizes, either the built-in
//! list or one loaded from an external file.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable pointing at a custom pattern file.
pub const PATTERNS_PATH_ENV: &str = "PWD_PATTERNS_PATH";

const DEFAULT_PATTERNS: [&str; 4] = ["123", "abc", "password", "qwerty"];

#[derive(Error, Debug)]
pub enum PatternsError {
    #[error("Pattern file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read pattern file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Pattern file is empty")]
    EmptyFile,
}

/// Ordered, lowercased set of substrings matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonPatterns {
    patterns: Vec<String>,
}

impl Default for CommonPatterns {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl CommonPatterns {
    /// Builds a list from arbitrary patterns.
    ///
    /// Patterns are trimmed and lowercased; blanks and duplicates are dropped
    /// while keeping the first occurrence's position.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list: Vec<String> = Vec::new();
        for p in patterns {
            let p = p.as_ref().trim().to_lowercase();
            if !p.is_empty() && !list.contains(&p) {
                list.push(p);
            }
        }
        Self { patterns: list }
    }

    /// Loads patterns from a file, one per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no non-blank lines
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PatternsError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Pattern list load FAILED: FileNotFound {:?}", path);
            return Err(PatternsError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
        let patterns = Self::new(content.lines());

        if patterns.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Pattern list load FAILED: Empty file {:?}", path);
            return Err(PatternsError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Pattern list loaded: {} patterns from {:?}", patterns.len(), path);

        Ok(patterns)
    }

    /// Loads patterns from `PWD_PATTERNS_PATH`, or the built-in list if unset.
    pub fn from_env() -> Result<Self, PatternsError> {
        match std::env::var_os(PATTERNS_PATH_ENV) {
            Some(path) => Self::from_path(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    /// Returns the first pattern contained in `password`, ignoring case.
    pub fn find_in(&self, password: &str) -> Option<&str> {
        if self.patterns.is_empty() {
            return None;
        }
        let lowered = password.to_lowercase();
        self.patterns
            .iter()
            .find(|p| lowered.contains(p.as_str()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }
}
