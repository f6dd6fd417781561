//! Fantasy team name wrapper for the trade simulator arguments.

use crate::error::{PipelineError, Result};
use std::fmt;
use std::str::FromStr;

/// A non-empty fantasy team name, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TeamName(String);

impl TeamName {
    /// Create a team name, rejecting empty or whitespace-only input.
    pub fn new(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(PipelineError::EmptyTeamName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamName {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
