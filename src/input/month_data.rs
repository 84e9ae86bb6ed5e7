use std::ops::RangeInclusive;

use indexmap::IndexMap;
use log::warn;
use serde::Deserialize;
use thiserror::Error;

use crate::input::Activity;

/// The key (compared case-insensitively) holding the fallback activities of a month.
pub const DEFAULT_KEY: &str = "default";

/// Separates the first and last day of a range key like `5-10`.
pub const DAY_RANGE_SEPARATOR: &str = "-";

/// A value in the month object of the data file: either one activity or, for the
/// `default` key, a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DayValue {
    Single(Activity),
    Many(Vec<Activity>),
}

impl DayValue {
    fn into_vec(self) -> Vec<Activity> {
        match self {
            Self::Single(activity) => vec![activity],
            Self::Many(activities) => activities,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthDataError {
    #[error("\"{key}\" is neither a day, a range of days nor \"{}\"", DEFAULT_KEY)]
    InvalidKey { key: String },
    #[error("the day \"{key}\" expects a single activity like [\"ACTIVITY\", \"10:00\", \"16:00\"]")]
    ExpectedSingleActivity { key: String },
}

/// The activities of a single month, with every range key expanded to its days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "IndexMap<String, DayValue>")]
pub struct MonthData {
    days: IndexMap<usize, Activity>,
    defaults: Option<Vec<Activity>>,
}

impl MonthData {
    /// Expands the raw keys of a month. Keys are applied in order, so for overlapping
    /// ranges the later key wins.
    pub fn parse(
        raw: IndexMap<String, DayValue>,
        separator: &str,
    ) -> Result<Self, MonthDataError> {
        let mut result = Self::default();

        for (key, value) in raw {
            if key.trim().eq_ignore_ascii_case(DEFAULT_KEY) {
                result.defaults = Some(value.into_vec());
                continue;
            }

            let DayValue::Single(activity) = value else {
                return Err(MonthDataError::ExpectedSingleActivity { key });
            };

            let days = parse_days(&key, separator)?;
            if days.is_empty() {
                warn!("the range \"{}\" does not contain any day", key);
            }

            for day in days {
                result.days.insert(day, activity.clone());
            }
        }

        Ok(result)
    }

    #[must_use]
    pub fn get(&self, day: usize) -> Option<&Activity> {
        self.days.get(&day)
    }

    /// The fallback activities of this month, if the month has a `default` key.
    #[must_use]
    pub fn defaults(&self) -> Option<&[Activity]> {
        self.defaults.as_deref()
    }

    pub fn days(&self) -> impl Iterator<Item = (usize, &Activity)> + '_ {
        self.days.iter().map(|(day, activity)| (*day, activity))
    }
}

impl TryFrom<IndexMap<String, DayValue>> for MonthData {
    type Error = MonthDataError;

    fn try_from(raw: IndexMap<String, DayValue>) -> Result<Self, Self::Error> {
        Self::parse(raw, DAY_RANGE_SEPARATOR)
    }
}

fn parse_days(key: &str, separator: &str) -> Result<RangeInclusive<usize>, MonthDataError> {
    let parse = |value: &str| {
        value
            .trim()
            .parse::<usize>()
            .map_err(|_| MonthDataError::InvalidKey {
                key: key.to_string(),
            })
    };

    if let Some((start, end)) = key.split_once(separator) {
        Ok(parse(start)?..=parse(end)?)
    } else {
        let day = parse(key)?;
        Ok(day..=day)
    }
}
