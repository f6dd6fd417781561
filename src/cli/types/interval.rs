//! Probe interval type for the database wait loop.

use crate::error::{PipelineError, Result};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Delay between database connectivity probes, in seconds.
///
/// Fractional values are accepted (`--interval 0.5`); zero and negative
/// values are rejected at parse time.
///
/// # Examples
///
/// ```rust
/// use bball_pipeline::PollInterval;
///
/// let interval: PollInterval = "2.5".parse().unwrap();
/// assert_eq!(interval.as_duration(), std::time::Duration::from_millis(2500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PollInterval(Duration);

impl PollInterval {
    /// Create an interval from a positive, finite number of seconds.
    pub fn from_secs_f64(secs: f64) -> Result<Self> {
        if !secs.is_finite() || secs <= 0.0 {
            return Err(PipelineError::InvalidInterval {
                value: secs.to_string(),
            });
        }
        Ok(Self(Duration::from_secs_f64(secs)))
    }

    /// Get the interval as a `Duration`.
    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl Default for PollInterval {
    /// One second, matching the original entrypoint's fixed cadence.
    fn default() -> Self {
        Self(Duration::from_secs(1))
    }
}

impl fmt::Display for PollInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_secs_f64())
    }
}

impl FromStr for PollInterval {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self> {
        let secs: f64 = s.parse().map_err(|_| PipelineError::InvalidInterval {
            value: s.to_string(),
        })?;
        Self::from_secs_f64(secs)
    }
}
