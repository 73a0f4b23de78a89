// Event color module

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// A validated hex color token (`#RRGGBB` or `#RGB`), stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventColor(String);

impl EventColor {
    pub const BLUE: &'static str = "#4285F4";
    pub const GREEN: &'static str = "#34A853";
    pub const RED: &'static str = "#EA4335";

    pub fn new(token: impl Into<String>) -> Result<Self, ScheduleError> {
        let token = token.into();
        let digits = token
            .strip_prefix('#')
            .ok_or_else(|| ScheduleError::InvalidColor(token.clone()))?;
        if !(digits.len() == 6 || digits.len() == 3)
            || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(ScheduleError::InvalidColor(token));
        }
        Ok(Self(token.to_ascii_uppercase()))
    }

    /// Default lesson color.
    pub fn blue() -> Self {
        Self(Self::BLUE.to_string())
    }

    pub fn green() -> Self {
        Self(Self::GREEN.to_string())
    }

    pub fn red() -> Self {
        Self(Self::RED.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue channels; short tokens are expanded (`#F57` → `#FF5577`).
    pub fn rgb(&self) -> (u8, u8, u8) {
        let digits = &self.0[1..];
        let channel = |i: usize| -> u8 {
            if digits.len() == 3 {
                let nibble = u8::from_str_radix(&digits[i..i + 1], 16).unwrap_or(0);
                nibble * 17
            } else {
                u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).unwrap_or(0)
            }
        };
        (channel(0), channel(1), channel(2))
    }
}

impl Default for EventColor {
    fn default() -> Self {
        Self::blue()
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for EventColor {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for EventColor {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EventColor> for String {
    fn from(value: EventColor) -> Self {
        value.0
    }
}
