//! Tests that a single month is written into the template correctly.

use registro::chooser::FirstChooser;
use registro::docx::{Alignment, Document};
use registro::filler::{fill_month, FillError, Filler};
use registro::input::{default_activities, Activity, MonthData};
use registro::time::{Year, DEFAULT_HOUR_FORMAT};

use pretty_assertions::assert_eq;

mod common;

fn month_data(json: &str) -> MonthData {
    serde_json::from_str(json).expect("month data should be valid")
}

fn fill(
    days: usize,
    data: &MonthData,
    year: usize,
    month: &str,
) -> Result<Document, FillError> {
    let mut document = common::load(&common::template(days));
    let defaults = default_activities();

    fill_month(
        &mut document,
        data,
        Year::new(year),
        month,
        &defaults,
        DEFAULT_HOUR_FORMAT,
        FirstChooser,
    )?;

    Ok(document)
}

#[test]
fn test_ranges_and_default() {
    // november 2023 has 30 days, the 5th, 12th, 19th and 26th are sundays
    let data = month_data(
        r#"{
            "5-7": ["LEZIONE", "09:15", "16:00"],
            "default": ["STUDIO", "10:00", "16:00"]
        }"#,
    );

    let document = fill(31, &data, 2023, "NOVEMBRE").expect("month can be filled");

    assert_eq!(common::header(&document, 0), vec!["2023", "NOVEMBRE"]);

    assert_eq!(
        common::day_row(&document, 1),
        common::filled_row(1, "STUDIO", "10:00", "16:00", "6")
    );
    assert_eq!(common::day_row(&document, 5), common::empty_row(5));
    for day in [6, 7] {
        assert_eq!(
            common::day_row(&document, day),
            common::filled_row(day, "LEZIONE", "09:15", "16:00", "6:45")
        );
    }
    assert_eq!(
        common::day_row(&document, 8),
        common::filled_row(8, "STUDIO", "10:00", "16:00", "6")
    );
    assert_eq!(
        common::day_row(&document, 30),
        common::filled_row(30, "STUDIO", "10:00", "16:00", "6")
    );
    // there is no 31st of november
    assert_eq!(common::day_row(&document, 31), common::empty_row(31));
}

#[test]
fn test_sundays_are_untouched() {
    let data = month_data(r#"{"1-31": ["LEZIONE", "09:00", "13:00"]}"#);

    let document = fill(31, &data, 2023, "OTTOBRE").expect("month can be filled");

    // october 2023 starts on a sunday
    for day in [1, 8, 15, 22, 29] {
        assert_eq!(common::day_row(&document, day), common::empty_row(day));
    }

    for day in [2, 7, 9, 31] {
        assert_eq!(
            common::day_row(&document, day),
            common::filled_row(day, "LEZIONE", "09:00", "13:00", "4")
        );
    }
}

#[test]
fn test_stops_after_the_last_day_of_february() {
    let document = fill(30, &MonthData::default(), 2023, "FEBBRAIO")
        .expect("month can be filled");

    assert_eq!(common::header(&document, 0), vec!["2023", "FEBBRAIO"]);
    assert_eq!(
        common::day_row(&document, 28),
        common::filled_row(28, "ANALISI LETTERATURA", "10:00", "16:00", "6")
    );
    assert_eq!(common::day_row(&document, 29), common::empty_row(29));
    assert_eq!(common::day_row(&document, 30), common::empty_row(30));
}

#[test]
fn test_leap_year_february() {
    let document = fill(30, &MonthData::default(), 2024, "FEBBRAIO")
        .expect("month can be filled");

    // the 29th of february 2024 is a thursday
    assert_eq!(
        common::day_row(&document, 29),
        common::filled_row(29, "ANALISI LETTERATURA", "10:00", "16:00", "6")
    );
    assert_eq!(common::day_row(&document, 30), common::empty_row(30));
}

#[test]
fn test_style_and_alignment() {
    let document = fill(3, &MonthData::default(), 2023, "NOVEMBRE")
        .expect("month can be filled");

    let styled_cell = |text: &str| {
        format!(
            concat!(
                "<w:tc><w:p>",
                r#"<w:pPr><w:jc w:val="center"/></w:pPr>"#,
                r#"<w:r><w:rPr><w:b/><w:sz w:val="20"/></w:rPr><w:t>{}</w:t></w:r>"#,
                "</w:p></w:tc>"
            ),
            text
        )
    };

    let xml = common::document_part(&document);

    // both header cells copy the formatting of the first header cell
    assert!(xml.contains(&styled_cell("2023")), "{}", xml);
    assert!(xml.contains(&styled_cell("NOVEMBRE")), "{}", xml);
    assert!(xml.contains(&styled_cell("ANALISI LETTERATURA")), "{}", xml);
    assert!(xml.contains(&styled_cell("6")), "{}", xml);

    // the template run keeps its formatting, the 1st to 3rd of november 2023
    // are weekdays with four written cells each
    assert_eq!(
        xml.matches(r#"<w:rPr><w:b/><w:sz w:val="20"/></w:rPr>"#).count(),
        1 + 2 + 3 * 4
    );
    assert!(xml.contains(r#"<w:r><w:rPr><w:b/><w:sz w:val="20"/></w:rPr><w:t>ANNO</w:t></w:r>"#));

    let paragraph = document
        .table(0)
        .expect("header table exists")
        .row(1)
        .and_then(|row| row.cell(1))
        .and_then(|cell| cell.paragraphs().next())
        .expect("header cell has a paragraph");
    assert_eq!(paragraph.alignment(), Some(Alignment::Center));
}

#[test]
fn test_month_name_is_written_as_given() {
    let document = fill(2, &MonthData::default(), 2023, "settembre").expect("month can be filled");

    assert_eq!(common::header(&document, 0), vec!["2023", "settembre"]);
    // the 1st of september 2023 is a friday
    assert_eq!(
        common::day_row(&document, 1),
        common::filled_row(1, "ANALISI LETTERATURA", "10:00", "16:00", "6")
    );
}

#[test]
fn test_unknown_month() {
    assert!(matches!(
        fill(2, &MonthData::default(), 2023, "SEPTEMBER"),
        Err(FillError::UnknownMonth(_))
    ));
}

#[test]
fn test_year_out_of_range_fills_no_rows() {
    let document = fill(3, &MonthData::default(), 99_999_999_999_999_999, "OTTOBRE")
        .expect("month can be filled");

    assert_eq!(
        common::header(&document, 0),
        vec!["99999999999999999", "OTTOBRE"]
    );
    for day in 1..=3 {
        assert_eq!(common::day_row(&document, day), common::empty_row(day));
    }
}

#[test]
fn test_month_defaults_take_precedence() {
    let data = month_data(
        r#"{"default": [["SEMINARIO", "14:00", "18:30"], ["STUDIO", "10:00", "16:00"]]}"#,
    );

    let document = fill(2, &data, 2023, "NOVEMBRE").expect("month can be filled");

    assert_eq!(
        common::day_row(&document, 1),
        common::filled_row(1, "SEMINARIO", "14:00", "18:30", "4:30")
    );
}

#[test]
fn test_end_before_start() {
    let data = month_data(r#"{"1": ["NOTTE", "16:00", "10:00"]}"#);

    let document = fill(1, &data, 2023, "NOVEMBRE").expect("month can be filled");

    assert_eq!(
        common::day_row(&document, 1),
        common::filled_row(1, "NOTTE", "16:00", "10:00", "6")
    );
}

#[test]
fn test_custom_hour_format() {
    let data = month_data(r#"{"1": ["LEZIONE", "09.15", "16.00"]}"#);
    let mut document = common::load(&common::template(1));
    let defaults: Vec<Activity> = Vec::new();

    Filler::new(&defaults, "%H.%M", FirstChooser)
        .fill(&mut document, &data, Year::new(2023), "NOVEMBRE")
        .expect("month can be filled");

    assert_eq!(
        common::day_row(&document, 1),
        common::filled_row(1, "LEZIONE", "09.15", "16.00", "6:45")
    );
}

#[test]
fn test_invalid_time() {
    let data = month_data(r#"{"1": ["LEZIONE", "nove", "16:00"]}"#);

    assert!(matches!(
        fill(1, &data, 2023, "NOVEMBRE"),
        Err(FillError::InvalidTime { day: 1, .. })
    ));
}

#[test]
fn test_no_default_activity() {
    let mut document = common::load(&common::template(3));

    let result = fill_month(
        &mut document,
        &MonthData::default(),
        Year::new(2023),
        "NOVEMBRE",
        &[],
        DEFAULT_HOUR_FORMAT,
        FirstChooser,
    );

    assert!(matches!(
        result,
        Err(FillError::NoDefaultActivity { day: 1 })
    ));
}

#[test]
fn test_empty_month_default() {
    let data = month_data(r#"{"default": []}"#);

    assert!(matches!(
        fill(1, &data, 2023, "NOVEMBRE"),
        Err(FillError::NoDefaultActivity { day: 1 })
    ));
}

#[test]
fn test_missing_activity_table() {
    let mut document = common::load(&common::docx("<w:tbl><w:tr><w:tc><w:p/></w:tc></w:tr></w:tbl>"));

    let result = fill_month(
        &mut document,
        &MonthData::default(),
        Year::new(2023),
        "NOVEMBRE",
        &default_activities(),
        DEFAULT_HOUR_FORMAT,
        FirstChooser,
    );

    assert!(matches!(result, Err(FillError::MissingTemplatePart(_))));
}
