use core::fmt;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::time::{Month, WeekDay, Year};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
    week_day: WeekDay,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("the day {day} does not exist in {month} {year}")]
    InvalidDay {
        year: Year,
        month: Month,
        day: usize,
    },
    #[error("\"{input}\" is not a day of the month")]
    ParseDayError { input: String },
}

impl Date {
    /// Fails for days that do not exist in the month and for years outside of the
    /// calendar range supported by chrono.
    pub fn new(year: Year, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let invalid = || InvalidDate::InvalidDay { year, month, day };

        if year.number_of_days_in_month(month) < day || day == 0 {
            return Err(invalid());
        }

        // month and day are bounded by 12 and 31 here
        let date = i32::try_from(year.as_usize())
            .ok()
            .and_then(|number| NaiveDate::from_ymd_opt(number, month.as_usize() as u32, day as u32))
            .ok_or_else(invalid)?;

        Ok(Self {
            year,
            month,
            day,
            week_day: WeekDay::from(date.weekday()),
        })
    }

    /// Parses the day of the month from `input` (surrounding whitespace is ignored)
    /// and validates it against `year` and `month`.
    pub fn parse_day(year: Year, month: Month, input: &str) -> Result<Self, InvalidDate> {
        let day = input
            .trim()
            .parse::<usize>()
            .map_err(|_| InvalidDate::ParseDayError {
                input: input.to_string(),
            })?;

        Self::new(year, month, day)
    }

    pub const fn week_day(&self) -> WeekDay {
        self.week_day
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> usize {
        self.day
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.as_usize(),
            self.month.as_usize(),
            self.day
        )
    }
}
