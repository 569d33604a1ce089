use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GoalDataError;

/// Minute of a goal as written in the source data.
///
/// `"67"` is a regular minute, `"45+2"` is stoppage time added to the 45th
/// minute. The shape is decided once at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Minute {
    Regular { minute: u32 },
    Stoppage { base: u32, extra: u32 },
}

impl Minute {
    pub fn regular(minute: u32) -> Self {
        Minute::Regular { minute }
    }

    pub fn stoppage(base: u32, extra: u32) -> Self {
        Minute::Stoppage { base, extra }
    }

    /// Minute on the regular clock (the base for stoppage time).
    pub fn clock_minute(&self) -> u32 {
        match *self {
            Minute::Regular { minute } => minute,
            Minute::Stoppage { base, .. } => base,
        }
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Minute::Regular { minute } => write!(f, "{}", minute),
            Minute::Stoppage { base, extra } => write!(f, "{}+{}", base, extra),
        }
    }
}

impl FromStr for Minute {
    type Err = GoalDataError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let text = raw.trim();
        let bad = || GoalDataError::BadMinute(raw.to_string());

        match text.split_once('+') {
            Some((base, extra)) => {
                let base = parse_digits(base).ok_or_else(bad)?;
                let extra = parse_digits(extra).ok_or_else(bad)?;
                Ok(Minute::Stoppage { base, extra })
            }
            None => parse_digits(text).map(Minute::regular).ok_or_else(bad),
        }
    }
}

/// ASCII digits only, saturating at `u32::MAX` so that no digit string fails.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(s.bytes().fold(0u32, |acc, b| {
        acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
    }))
}
