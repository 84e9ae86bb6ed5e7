use log::{debug, trace, warn};
use thiserror::Error;

use crate::chooser::Chooser;
use crate::docx::{Alignment, DocxError, Document, Element};
use crate::input::{Activity, MonthData};
use crate::time::{Date, InvalidTime, Month, TimeStamp, UnknownMonth, WeekDay, WorkingDuration, Year};

/// The table with the year and month in its second row.
pub const HEADER_TABLE: usize = 0;
/// The table with one row per day: day, activity, start, end and duration.
pub const ACTIVITY_TABLE: usize = 1;

const ACTIVITY_CELL: usize = 1;
const START_CELL: usize = 2;
const END_CELL: usize = 3;
const DURATION_CELL: usize = 4;

#[derive(Debug, Error)]
pub enum FillError {
    #[error("the template does not have the expected tables")]
    MissingTemplatePart(#[from] DocxError),
    #[error(transparent)]
    UnknownMonth(#[from] UnknownMonth),
    #[error("invalid time on day {day}")]
    InvalidTime {
        day: usize,
        #[source]
        source: InvalidTime,
    },
    #[error("there is no activity for day {day} and no default activity to choose from")]
    NoDefaultActivity { day: usize },
}

/// Writes the activities of a month into a copy of the register template.
#[derive(Debug, Clone)]
pub struct Filler<'a, C> {
    defaults: &'a [Activity],
    hour_format: &'a str,
    chooser: C,
}

fn write_cell(
    document: &mut Document,
    table: usize,
    row: usize,
    cell: usize,
    text: &str,
    style: Option<&Element>,
) -> Result<(), DocxError> {
    let mut paragraph = document.paragraph_mut(table, row, cell)?;
    paragraph.append_run(text, style);
    paragraph.set_alignment(Alignment::Center);

    Ok(())
}

impl<'a, C: Chooser> Filler<'a, C> {
    /// The `defaults` are used for days of months without an own `default` key.
    pub fn new(defaults: &'a [Activity], hour_format: &'a str, chooser: C) -> Self {
        Self {
            defaults,
            hour_format,
            chooser,
        }
    }

    /// The formatting of the first run in the header table, copied for every new text.
    fn reference_style(document: &Document) -> Result<Option<Element>, DocxError> {
        let style = document
            .table(HEADER_TABLE)?
            .row(0)
            .and_then(|row| row.cell(0))
            .and_then(|cell| cell.paragraphs().next())
            .and_then(|paragraph| paragraph.runs().next())
            .and_then(|run| run.properties())
            .cloned();

        if style.is_none() {
            debug!("the header table has no formatted run, new text will be unformatted");
        }

        Ok(style)
    }

    fn activity_for<'d>(
        &mut self,
        month_data: &'d MonthData,
        day: usize,
    ) -> Result<&'d Activity, FillError>
    where
        'a: 'd,
    {
        if let Some(activity) = month_data.get(day) {
            return Ok(activity);
        }

        let defaults = month_data.defaults().unwrap_or(self.defaults);
        self.chooser
            .choose(defaults)
            .ok_or(FillError::NoDefaultActivity { day })
    }

    /// Fills the header and activity tables of `document` for the month called
    /// `month_name` of `year`. The header shows the name as it is given.
    ///
    /// Rows are processed until the first one whose day does not exist in the month;
    /// sundays are left untouched.
    pub fn fill(
        &mut self,
        document: &mut Document,
        month_data: &MonthData,
        year: Year,
        month_name: &str,
    ) -> Result<(), FillError> {
        let month = Month::from_name(month_name)?;
        let style = Self::reference_style(document)?;
        let rows = document.table(ACTIVITY_TABLE)?.len();

        write_cell(document, HEADER_TABLE, 1, 0, &year.to_string(), style.as_ref())?;
        write_cell(document, HEADER_TABLE, 1, 1, month_name, style.as_ref())?;

        // the first row holds the column titles
        for row in 1..rows {
            let day = document
                .table(ACTIVITY_TABLE)?
                .row(row)
                .and_then(|row| row.cell(0))
                .map(|cell| cell.text())
                .unwrap_or_default();

            let date = match Date::parse_day(year, month, &day) {
                Ok(date) => date,
                Err(error) => {
                    warn!(
                        "row {} of {} {}: {}, not filling the remaining rows",
                        row + 1,
                        month,
                        year,
                        error
                    );
                    break;
                }
            };

            if date.week_day() == WeekDay::Sunday {
                trace!("{} is a sunday", date);
                continue;
            }

            let activity = self.activity_for(month_data, date.day())?;
            let invalid_time = |source| FillError::InvalidTime {
                day: date.day(),
                source,
            };
            let start = TimeStamp::parse_with_format(activity.start(), self.hour_format)
                .map_err(invalid_time)?;
            let end = TimeStamp::parse_with_format(activity.end(), self.hour_format)
                .map_err(invalid_time)?;
            let duration = WorkingDuration::from(start.elapsed(&end)).to_string();

            debug!(
                "{}: {} from {} to {} ({})",
                date,
                activity.action(),
                activity.start(),
                activity.end(),
                duration
            );

            for (cell, text) in [
                (ACTIVITY_CELL, activity.action()),
                (START_CELL, activity.start()),
                (END_CELL, activity.end()),
                (DURATION_CELL, duration.as_str()),
            ] {
                write_cell(document, ACTIVITY_TABLE, row, cell, text, style.as_ref())?;
            }
        }

        Ok(())
    }
}

/// Fills a single month, see [`Filler::fill`].
pub fn fill_month<C: Chooser>(
    document: &mut Document,
    month_data: &MonthData,
    year: Year,
    month_name: &str,
    defaults: &[Activity],
    hour_format: &str,
    chooser: C,
) -> Result<(), FillError> {
    Filler::new(defaults, hour_format, chooser).fill(document, month_data, year, month_name)
}
