use std::fmt;
use std::str::FromStr;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::errors::ConversionError;

// @module: Total duration parsing (M:S notation)

// @const: M:S duration regex, digits only on both sides
static DURATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([0-9]+)\s*:\s*([0-9]+)\s*$").unwrap()
});

/// A playback length written as minutes and seconds.
///
/// Seconds are not required to be below 60: `5:90` means 5 * 60 + 90 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationSpec {
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationSpec {
    pub fn new(minutes: u64, seconds: u64) -> Self {
        DurationSpec { minutes, seconds }
    }

    // @parses: "M:S" into components
    pub fn parse(spec: &str) -> Result<Self, ConversionError> {
        let invalid = || ConversionError::InvalidDurationFormat(spec.to_string());

        let captures = DURATION_REGEX.captures(spec).ok_or_else(invalid)?;
        let minutes: u64 = captures[1].parse().map_err(|_| invalid())?;
        let seconds: u64 = captures[2].parse().map_err(|_| invalid())?;
        minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .ok_or_else(invalid)?;

        Ok(DurationSpec { minutes, seconds })
    }

    /// True when the seconds part is 60 or more and is added without a carry.
    pub fn has_uncarried_seconds(&self) -> bool {
        self.seconds >= 60
    }

    /// Total length in seconds, `minutes * 60 + seconds`.
    pub fn total_seconds(&self) -> f64 {
        self.minutes.saturating_mul(60).saturating_add(self.seconds) as f64
    }
}

impl FromStr for DurationSpec {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DurationSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.minutes, self.seconds)
    }
}

/// Parse an `M:S` duration into total seconds.
pub fn parse_duration(spec: &str) -> Result<f64, ConversionError> {
    DurationSpec::parse(spec).map(|duration| duration.total_seconds())
}
