//! Transition duration values

use crate::{Result, ZoomError};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationUnit {
    #[default]
    Milliseconds,
    Seconds,
}

impl DurationUnit {
    fn suffix(self) -> &'static str {
        match self {
            DurationUnit::Milliseconds => "ms",
            DurationUnit::Seconds => "s",
        }
    }
}

/// A CSS `<time>` made of a whole number and a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration {
    pub value: u64,
    pub unit: DurationUnit,
}

/// Fallback used when a duration cannot be parsed
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

impl Duration {
    pub const fn from_millis(value: u64) -> Self {
        Self {
            value,
            unit: DurationUnit::Milliseconds,
        }
    }

    pub const fn from_secs(value: u64) -> Self {
        Self {
            value,
            unit: DurationUnit::Seconds,
        }
    }

    pub fn as_millis(&self) -> u64 {
        match self.unit {
            DurationUnit::Milliseconds => self.value,
            DurationUnit::Seconds => self.value.saturating_mul(1000),
        }
    }
}

impl Default for Duration {
    fn default() -> Self {
        DEFAULT_DURATION
    }
}

impl From<u64> for Duration {
    fn from(millis: u64) -> Self {
        Duration::from_millis(millis)
    }
}

impl FromStr for Duration {
    type Err = ZoomError;

    /// Accepts `"1000ms"`, `"1s"` or a bare `"1000"` (milliseconds)
    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        let invalid = || ZoomError::InvalidDuration(s.to_string());

        let digits_end = input
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(input.len());
        let (digits, suffix) = input.split_at(digits_end);

        if digits.is_empty() {
            return Err(invalid());
        }

        let unit = match suffix {
            "" | "ms" => DurationUnit::Milliseconds,
            "s" => DurationUnit::Seconds,
            _ => return Err(invalid()),
        };

        let value = digits.parse().map_err(|_| invalid())?;
        Ok(Duration { value, unit })
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

/// Parse a duration, falling back to [`DEFAULT_DURATION`] with a warning
pub fn parse_duration(input: &str) -> Duration {
    input.parse().unwrap_or_else(|err| {
        tracing::warn!(
            "{}, falling back to default: {}",
            err,
            DEFAULT_DURATION
        );
        DEFAULT_DURATION
    })
}
