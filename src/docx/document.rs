use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read, Seek, Write};
use std::path::Path;

use log::trace;

use crate::docx::{
    page_break, DocxError, Element, Package, ParagraphMut, Table, XmlDocument, BODY, CELL,
    PARAGRAPH, ROW, SECTION_PROPERTIES, TABLE,
};

/// The part of the package holding the main text.
pub const DOCUMENT_PART: &str = "word/document.xml";

fn missing(what: String) -> DocxError {
    DocxError::MissingElement(what)
}

/// A `.docx` file whose main text can be edited.
#[derive(Debug, Clone)]
pub struct Document {
    package: Package,
    xml: XmlDocument,
}

impl Document {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DocxError> {
        let path = path.as_ref();
        trace!("reading document from: {}", path.display());
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocxError> {
        Self::from_reader(Cursor::new(bytes))
    }

    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self, DocxError> {
        let package = Package::from_reader(reader)?;
        let xml = XmlDocument::parse(
            package
                .part(DOCUMENT_PART)
                .ok_or_else(|| DocxError::MissingPart(DOCUMENT_PART.to_string()))?,
        )?;

        let document = Self { package, xml };
        // every other method relies on the body being present
        document.body()?;

        Ok(document)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DocxError> {
        let path = path.as_ref();
        trace!("writing document to: {}", path.display());

        let mut writer = self.write_to(BufWriter::new(File::create(path)?))?;
        writer.flush()?;

        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, DocxError> {
        Ok(self.write_to(Cursor::new(Vec::new()))?.into_inner())
    }

    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<W, DocxError> {
        let xml = self.xml.to_bytes()?;
        self.package.write_to(writer, &[(DOCUMENT_PART, xml.as_slice())])
    }

    fn body(&self) -> Result<&Element, DocxError> {
        self.xml
            .root()
            .child(BODY)
            .ok_or_else(|| missing("body".to_string()))
    }

    fn body_mut(&mut self) -> Result<&mut Element, DocxError> {
        self.xml
            .root_mut()
            .child_mut(BODY)
            .ok_or_else(|| missing("body".to_string()))
    }

    /// The tables directly in the body, nested tables are not included.
    pub fn tables(&self) -> Result<impl Iterator<Item = Table<'_>> + '_, DocxError> {
        Ok(self.body()?.elements_named(TABLE).map(Table::new))
    }

    pub fn table(&self, index: usize) -> Result<Table<'_>, DocxError> {
        self.tables()?
            .nth(index)
            .ok_or_else(|| missing(format!("table {}", index + 1)))
    }

    /// The first paragraph of a table cell, all indices start at zero.
    pub fn paragraph_mut(
        &mut self,
        table: usize,
        row: usize,
        cell: usize,
    ) -> Result<ParagraphMut<'_>, DocxError> {
        let table_element = self
            .body_mut()?
            .elements_named_mut(TABLE)
            .nth(table)
            .ok_or_else(|| missing(format!("table {}", table + 1)))?;

        let row_element = table_element
            .elements_named_mut(ROW)
            .nth(row)
            .ok_or_else(|| missing(format!("row {} in table {}", row + 1, table + 1)))?;

        let cell_element = row_element
            .elements_named_mut(CELL)
            .nth(cell)
            .ok_or_else(|| {
                missing(format!(
                    "cell {} in row {} of table {}",
                    cell + 1,
                    row + 1,
                    table + 1
                ))
            })?;

        let paragraph = cell_element.child_mut(PARAGRAPH).ok_or_else(|| {
            missing(format!(
                "paragraph in cell {} in row {} of table {}",
                cell + 1,
                row + 1,
                table + 1
            ))
        })?;

        Ok(ParagraphMut::new(paragraph))
    }

    /// Adds a paragraph with a page break at the end of the body.
    pub fn add_page_break(&mut self) -> Result<(), DocxError> {
        let body = self.body_mut()?;
        let index = body
            .position(SECTION_PROPERTIES)
            .unwrap_or(body.children().len());
        body.insert(index, page_break());

        Ok(())
    }

    /// Moves the body content of `other` to the end of this body. The section properties
    /// of `other` are dropped, the ones of `self` stay last.
    pub fn append_body(&mut self, mut other: Document) -> Result<(), DocxError> {
        let content = std::mem::take(other.body_mut()?.children_mut())
            .into_iter()
            .filter(|node| !node.is_element_named(SECTION_PROPERTIES));

        let children = self.body_mut()?.children_mut();
        let index = children
            .iter()
            .position(|node| node.is_element_named(SECTION_PROPERTIES))
            .unwrap_or(children.len());

        let tail = children.split_off(index);
        children.extend(content);
        children.extend(tail);

        Ok(())
    }
}
