use std::str::FromStr;
use std::time::Duration;

use chrono::{NaiveTime, Timelike};
use derive_more::Display;
use thiserror::Error;

/// The format in which start and end times are written in the register.
pub const DEFAULT_HOUR_FORMAT: &str = "%H:%M";

/// Creates a [`TimeStamp`](crate::time::TimeStamp) from a literal like `time_stamp!(09:15)`,
/// checking the values at compile time.
#[macro_export]
macro_rules! time_stamp {
    ( $hour:literal : $minute:literal ) => {{
        static_assertions::const_assert!($hour < 24);
        static_assertions::const_assert!($minute < 60);

        $crate::time::TimeStamp::new_unchecked($hour, $minute)
    }};
}

#[derive(Debug, Copy, Clone, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{hour:02}:{minute:02}")]
pub struct TimeStamp {
    hour: u8,
    minute: u8,
    second: u8,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidTime {
    #[error("Time is not valid: {hour:02}:{minute:02}")]
    OutOfRange { hour: u8, minute: u8 },
    #[error("\"{input}\" does not match the time format \"{format}\"")]
    Format {
        input: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl TimeStamp {
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidTime> {
        if hour > 23 || minute > 59 {
            return Err(InvalidTime::OutOfRange { hour, minute });
        }

        Ok(Self::new_unchecked(hour, minute))
    }

    #[doc(hidden)]
    #[must_use]
    pub const fn new_unchecked(hour: u8, minute: u8) -> Self {
        Self {
            hour,
            minute,
            second: 0,
        }
    }

    /// Parses a clock time with a `strftime`-like `format` (for example `%H:%M`).
    pub fn parse_with_format(input: &str, format: &str) -> Result<Self, InvalidTime> {
        let time =
            NaiveTime::parse_from_str(input.trim(), format).map_err(|source| InvalidTime::Format {
                input: input.to_string(),
                format: format.to_string(),
                source,
            })?;

        // the values are bounded by 23, 59 and 60 (leap second)
        Ok(Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
        })
    }

    #[must_use]
    fn as_seconds(&self) -> u64 {
        self.hour as u64 * 3600 + self.minute as u64 * 60 + self.second as u64
    }

    /// The time between `self` and `other`, regardless of which one is earlier.
    #[must_use]
    pub fn elapsed(&self, other: &Self) -> Duration {
        Duration::from_secs(self.as_seconds().abs_diff(other.as_seconds()))
    }
}

impl FromStr for TimeStamp {
    type Err = InvalidTime;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::parse_with_format(string, DEFAULT_HOUR_FORMAT)
    }
}
