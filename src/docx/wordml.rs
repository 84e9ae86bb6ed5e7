use crate::docx::Element;

pub(crate) const BODY: &str = "w:body";
pub(crate) const SECTION_PROPERTIES: &str = "w:sectPr";
pub(crate) const TABLE: &str = "w:tbl";
pub(crate) const ROW: &str = "w:tr";
pub(crate) const CELL: &str = "w:tc";
pub(crate) const PARAGRAPH: &str = "w:p";
pub(crate) const PARAGRAPH_PROPERTIES: &str = "w:pPr";
pub(crate) const JUSTIFICATION: &str = "w:jc";
pub(crate) const RUN: &str = "w:r";
pub(crate) const RUN_PROPERTIES: &str = "w:rPr";
pub(crate) const TEXT: &str = "w:t";
pub(crate) const TAB: &str = "w:tab";
pub(crate) const BREAK: &str = "w:br";
pub(crate) const CARRIAGE_RETURN: &str = "w:cr";
pub(crate) const VALUE: &str = "w:val";
pub(crate) const TYPE: &str = "w:type";

/// Children of `w:pPr` that have to come after `w:jc`.
const AFTER_JUSTIFICATION: [&str; 9] = [
    "w:textDirection",
    "w:textAlignment",
    "w:textboxTightWrap",
    "w:outlineLvl",
    "w:divId",
    "w:cnfStyle",
    "w:rPr",
    "w:sectPr",
    "w:pPrChange",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Both,
}

impl Alignment {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Both => "both",
        }
    }

    fn from_value(value: &str) -> Option<Self> {
        match value {
            "left" | "start" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" | "end" => Some(Self::Right),
            "both" => Some(Self::Both),
            _ => None,
        }
    }
}

/// Text of a run like word shows it: tabs and breaks become `\t` and `\n`.
fn collect_run_text(element: &Element, result: &mut String) {
    for child in element.elements() {
        match child.name() {
            TEXT => result.push_str(&child.text()),
            TAB => result.push('\t'),
            BREAK | CARRIAGE_RETURN => result.push('\n'),
            RUN_PROPERTIES | PARAGRAPH_PROPERTIES => {}
            // hyperlinks, smart tags, ...
            _ => collect_run_text(child, result),
        }
    }
}

fn text_element(text: &str) -> Element {
    let element = Element::new(TEXT);

    if text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace) {
        element
            .with_attribute("xml:space", "preserve")
            .with_text(text)
    } else {
        element.with_text(text)
    }
}

/// A paragraph containing only a page break.
pub(crate) fn page_break() -> Element {
    Element::new(PARAGRAPH)
        .with_element(Element::new(RUN).with_element(Element::new(BREAK).with_attribute(TYPE, "page")))
}

#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    element: &'a Element,
}

impl<'a> Table<'a> {
    pub(crate) fn new(element: &'a Element) -> Self {
        Self { element }
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'a>> + 'a {
        self.element.elements_named(ROW).map(|element| Row { element })
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<Row<'a>> {
        self.rows().nth(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows().next().is_none()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    element: &'a Element,
}

impl<'a> Row<'a> {
    pub fn cells(&self) -> impl Iterator<Item = Cell<'a>> + 'a {
        self.element.elements_named(CELL).map(|element| Cell { element })
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Cell<'a>> {
        self.cells().nth(index)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Cell<'a> {
    element: &'a Element,
}

impl<'a> Cell<'a> {
    pub fn paragraphs(&self) -> impl Iterator<Item = Paragraph<'a>> + 'a {
        self.element
            .elements_named(PARAGRAPH)
            .map(|element| Paragraph { element })
    }

    /// The text of all paragraphs, separated by newlines.
    #[must_use]
    pub fn text(&self) -> String {
        self.paragraphs()
            .map(|paragraph| paragraph.text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Paragraph<'a> {
    element: &'a Element,
}

impl<'a> Paragraph<'a> {
    pub fn runs(&self) -> impl Iterator<Item = Run<'a>> + 'a {
        self.element.elements_named(RUN).map(|element| Run { element })
    }

    #[must_use]
    pub fn text(&self) -> String {
        let mut result = String::new();
        collect_run_text(self.element, &mut result);
        result
    }

    #[must_use]
    pub fn alignment(&self) -> Option<Alignment> {
        self.element
            .child(PARAGRAPH_PROPERTIES)?
            .child(JUSTIFICATION)?
            .attribute(VALUE)
            .and_then(Alignment::from_value)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Run<'a> {
    element: &'a Element,
}

impl<'a> Run<'a> {
    #[must_use]
    pub fn text(&self) -> String {
        let mut result = String::new();
        collect_run_text(self.element, &mut result);
        result
    }

    /// The formatting (`w:rPr`) of this run.
    #[must_use]
    pub fn properties(&self) -> Option<&'a Element> {
        self.element.child(RUN_PROPERTIES)
    }
}

#[derive(Debug)]
pub struct ParagraphMut<'a> {
    element: &'a mut Element,
}

impl<'a> ParagraphMut<'a> {
    pub(crate) fn new(element: &'a mut Element) -> Self {
        Self { element }
    }

    /// Appends a run with `text`, formatted with a copy of `properties`.
    pub fn append_run(&mut self, text: &str, properties: Option<&Element>) {
        let mut run = Element::new(RUN);
        if let Some(properties) = properties {
            run.push(properties.clone());
        }
        run.push(text_element(text));

        self.element.push(run);
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        // w:pPr has to be the first child of the paragraph
        if self.element.child(PARAGRAPH_PROPERTIES).is_none() {
            self.element.insert(0, Element::new(PARAGRAPH_PROPERTIES));
        }

        let Some(properties) = self.element.child_mut(PARAGRAPH_PROPERTIES) else {
            return;
        };

        if let Some(justification) = properties.child_mut(JUSTIFICATION) {
            justification.set_attribute(VALUE, alignment.as_str());
            return;
        }

        let index = properties
            .children()
            .iter()
            .position(|node| {
                AFTER_JUSTIFICATION
                    .iter()
                    .any(|name| node.is_element_named(name))
            })
            .unwrap_or(properties.children().len());

        properties.insert(
            index,
            Element::new(JUSTIFICATION).with_attribute(VALUE, alignment.as_str()),
        );
    }

    #[must_use]
    pub fn as_paragraph(&self) -> Paragraph<'_> {
        Paragraph {
            element: &*self.element,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::docx::XmlDocument;

    fn parse(xml: &str) -> Element {
        XmlDocument::parse(xml.as_bytes())
            .expect("xml is valid")
            .root()
            .clone()
    }

    #[test]
    fn test_table_views() {
        let table = parse(concat!(
            "<w:tbl><w:tblPr/>",
            "<w:tr><w:tc><w:p><w:r><w:t>1</w:t></w:r></w:p></w:tc>",
            "<w:tc><w:p><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t></w:r></w:p><w:p><w:r><w:t>c</w:t></w:r></w:p></w:tc></w:tr>",
            "<w:tr><w:tc><w:p/></w:tc></w:tr>",
            "</w:tbl>"
        ));
        let table = Table::new(&table);

        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());

        let row = table.row(0).expect("first row exists");
        assert_eq!(row.cells().count(), 2);
        assert_eq!(row.cell(0).map(|cell| cell.text()), Some("1".to_string()));
        assert_eq!(
            row.cell(1).map(|cell| cell.text()),
            Some("a\tb\nc".to_string())
        );
        assert_eq!(
            table.row(1).and_then(|row| row.cell(0)).map(|cell| cell.text()),
            Some(String::new())
        );
        assert!(table.row(2).is_none());
    }

    #[test]
    fn test_append_run_copies_properties() {
        let reference = parse(r#"<w:r><w:rPr><w:b/><w:sz w:val="20"/></w:rPr><w:t>ANNO</w:t></w:r>"#);
        let properties = Run { element: &reference }.properties();

        let mut paragraph = parse("<w:p/>");
        let mut paragraph_mut = ParagraphMut::new(&mut paragraph);
        paragraph_mut.append_run("2023", properties);
        paragraph_mut.append_run(" padded ", None);
        paragraph_mut.set_alignment(Alignment::Center);

        let view = paragraph_mut.as_paragraph();
        assert_eq!(view.text(), "2023 padded ");
        assert_eq!(view.alignment(), Some(Alignment::Center));

        let runs = view.runs().collect::<Vec<_>>();
        assert_eq!(runs.len(), 2);
        assert_eq!(
            runs[0]
                .properties()
                .and_then(|properties| properties.child("w:sz"))
                .and_then(|size| size.attribute(VALUE)),
            Some("20")
        );
        assert!(runs[1].properties().is_none());

        let xml = String::from_utf8(
            XmlDocument::new(paragraph)
                .to_bytes()
                .expect("xml can be written"),
        )
        .expect("utf-8");
        assert_eq!(
            xml,
            concat!(
                r#"<w:p><w:pPr><w:jc w:val="center"/></w:pPr>"#,
                r#"<w:r><w:rPr><w:b/><w:sz w:val="20"/></w:rPr><w:t>2023</w:t></w:r>"#,
                r#"<w:r><w:t xml:space="preserve"> padded </w:t></w:r></w:p>"#
            )
        );
    }

    #[test]
    fn test_set_alignment_keeps_schema_order() {
        let mut paragraph = parse(
            r#"<w:p><w:pPr><w:spacing w:after="0"/><w:jc w:val="left"/><w:rPr><w:b/></w:rPr></w:pPr></w:p>"#,
        );
        ParagraphMut::new(&mut paragraph).set_alignment(Alignment::Right);
        let properties = paragraph.child(PARAGRAPH_PROPERTIES).expect("pPr exists");
        assert_eq!(properties.position(JUSTIFICATION), Some(1));
        assert_eq!(
            properties.child(JUSTIFICATION).and_then(|jc| jc.attribute(VALUE)),
            Some("right")
        );

        let mut paragraph =
            parse(r#"<w:p><w:pPr><w:spacing w:after="0"/><w:rPr><w:b/></w:rPr></w:pPr></w:p>"#);
        ParagraphMut::new(&mut paragraph).set_alignment(Alignment::Center);
        let properties = paragraph.child(PARAGRAPH_PROPERTIES).expect("pPr exists");
        assert_eq!(properties.position(JUSTIFICATION), Some(1));
        assert_eq!(properties.position(RUN_PROPERTIES), Some(2));
    }

    #[test]
    fn test_page_break() {
        let paragraph = page_break();
        let view = Paragraph {
            element: &paragraph,
        };

        assert_eq!(view.text(), "\n");
    }
}
