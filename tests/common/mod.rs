use std::io::Cursor;

use registro::docx::{Document, Package, DOCUMENT_PART};

const HEADER_TABLE: &str = concat!(
    "<w:tbl>",
    "<w:tr>",
    r#"<w:tc><w:p><w:r><w:rPr><w:b/><w:sz w:val="20"/></w:rPr><w:t>ANNO</w:t></w:r></w:p></w:tc>"#,
    "<w:tc><w:p><w:r><w:rPr><w:b/></w:rPr><w:t>MESE</w:t></w:r></w:p></w:tc>",
    "</w:tr>",
    "<w:tr><w:tc><w:p/></w:tc><w:tc><w:p/></w:tc></w:tr>",
    "</w:tbl>"
);

const ACTIVITY_HEADER_ROW: &str = concat!(
    "<w:tr>",
    "<w:tc><w:p><w:r><w:t>GIORNO</w:t></w:r></w:p></w:tc>",
    "<w:tc><w:p><w:r><w:t>ATTIVITA</w:t></w:r></w:p></w:tc>",
    "<w:tc><w:p><w:r><w:t>INIZIO</w:t></w:r></w:p></w:tc>",
    "<w:tc><w:p><w:r><w:t>FINE</w:t></w:r></w:p></w:tc>",
    "<w:tc><w:p><w:r><w:t>ORE</w:t></w:r></w:p></w:tc>",
    "</w:tr>"
);

fn document_xml(body: &str) -> Vec<u8> {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
            "<w:body>{}",
            r#"<w:sectPr><w:pgSz w:w="11906" w:h="16838"/></w:sectPr>"#,
            "</w:body></w:document>"
        ),
        body
    )
    .into_bytes()
}

#[must_use]
pub fn docx(body: &str) -> Vec<u8> {
    let mut package = Package::default();
    package.set_part("[Content_Types].xml", b"<Types/>".to_vec());
    package.set_part("word/styles.xml", b"<w:styles/>".to_vec());
    package.set_part(DOCUMENT_PART, document_xml(body));

    package
        .write_to(Cursor::new(Vec::new()), &[])
        .expect("package can be written")
        .into_inner()
}

/// A register template with a row for every day in `1..=days`.
#[must_use]
pub fn template(days: usize) -> Vec<u8> {
    let rows: String = (1..=days)
        .map(|day| {
            format!(
                "<w:tr><w:tc><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:tc>{}</w:tr>",
                day,
                "<w:tc><w:p/></w:tc>".repeat(4)
            )
        })
        .collect();

    docx(&format!(
        "{}<w:p/><w:tbl>{}{}</w:tbl>",
        HEADER_TABLE, ACTIVITY_HEADER_ROW, rows
    ))
}

#[must_use]
#[allow(dead_code)]
pub fn load(bytes: &[u8]) -> Document {
    Document::from_bytes(bytes).expect("template is valid")
}

#[must_use]
pub fn row_texts(document: &Document, table: usize, row: usize) -> Vec<String> {
    document
        .table(table)
        .expect("table exists")
        .row(row)
        .expect("row exists")
        .cells()
        .map(|cell| cell.text())
        .collect()
}

/// The texts of the activity table row of `day` in a single month document.
#[must_use]
#[allow(dead_code)]
pub fn day_row(document: &Document, day: usize) -> Vec<String> {
    row_texts(document, 1, day)
}

#[must_use]
#[allow(dead_code)]
pub fn header(document: &Document, table: usize) -> Vec<String> {
    row_texts(document, table, 1)
}

#[must_use]
#[allow(dead_code)]
pub fn empty_row(day: usize) -> Vec<String> {
    vec![day.to_string(), String::new(), String::new(), String::new(), String::new()]
}

#[must_use]
#[allow(dead_code)]
pub fn filled_row(day: usize, action: &str, start: &str, end: &str, duration: &str) -> Vec<String> {
    vec![
        day.to_string(),
        action.to_string(),
        start.to_string(),
        end.to_string(),
        duration.to_string(),
    ]
}

/// The xml of the main document part.
#[must_use]
#[allow(dead_code)]
pub fn document_part(document: &Document) -> String {
    let bytes = document.to_bytes().expect("document can be written");
    let package = Package::from_reader(Cursor::new(bytes)).expect("package is valid");

    String::from_utf8(
        package
            .part(DOCUMENT_PART)
            .expect("document part exists")
            .to_vec(),
    )
    .expect("document part is utf-8")
}
