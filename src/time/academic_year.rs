use derive_more::Display;
use thiserror::Error;

use crate::time::{Month, Year};

/// An academic year runs from october of the `start` year to september of the `end` year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{start}-{end}")]
pub struct AcademicYear {
    start: Year,
    end: Year,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{input}\" is not an academic year like \"2023{separator}2024\"")]
pub struct InvalidAcademicYear {
    input: String,
    separator: String,
}

impl AcademicYear {
    #[must_use]
    pub const fn new(start: Year, end: Year) -> Self {
        Self { start, end }
    }

    /// Parses an interval like `2023-2024`, where `-` is the `separator`.
    pub fn parse(input: &str, separator: &str) -> Result<Self, InvalidAcademicYear> {
        let error = || InvalidAcademicYear {
            input: input.to_string(),
            separator: separator.to_string(),
        };

        if separator.is_empty() {
            return Err(error());
        }

        let (start, end) = input.split_once(separator).ok_or_else(error)?;
        let start = start.trim().parse().map_err(|_| error())?;
        let end = end.trim().parse().map_err(|_| error())?;

        Ok(Self::new(Year::new(start), Year::new(end)))
    }

    #[must_use]
    pub const fn start(&self) -> Year {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> Year {
        self.end
    }

    /// Returns the calendar year in which `month` falls.
    #[must_use]
    pub const fn year_of(&self, month: Month) -> Year {
        match month {
            Month::October | Month::November | Month::December => self.start,
            _ => self.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse() {
        assert_eq!(
            AcademicYear::parse("2023-2024", "-"),
            Ok(AcademicYear::new(Year::new(2023), Year::new(2024)))
        );
        assert_eq!(
            AcademicYear::parse("2023 / 2024", "/"),
            Ok(AcademicYear::new(Year::new(2023), Year::new(2024)))
        );
        assert!(AcademicYear::parse("2023", "-").is_err());
        assert!(AcademicYear::parse("2023-", "-").is_err());
        assert!(AcademicYear::parse("2023_2024", "-").is_err());
        assert!(AcademicYear::parse("2023-2024", "").is_err());
    }

    #[test]
    fn test_year_of() {
        let academic_year = AcademicYear::parse("2023-2024", "-").unwrap();

        assert_eq!(
            academic_year.year_of(Month::from_name("OTTOBRE").unwrap()),
            Year::new(2023)
        );
        assert_eq!(
            academic_year.year_of(Month::from_name("GENNAIO").unwrap()),
            Year::new(2024)
        );

        for month in Month::months() {
            let expected = if month >= Month::October {
                Year::new(2023)
            } else {
                Year::new(2024)
            };

            assert_eq!(academic_year.year_of(month), expected, "{}", month);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            AcademicYear::new(Year::new(2023), Year::new(2024)).to_string(),
            "2023-2024"
        );
    }
}
