//! Just enough of the `.docx` format to fill the register: the zip package, the xml
//! tree of `word/document.xml` and typed views over tables, rows, cells and paragraphs.
//!
//! Every other part of the package is carried through untouched.

use std::io;

use thiserror::Error;

mod document;
mod package;
mod wordml;
mod xml;

pub use document::*;
pub use package::*;
pub use wordml::*;
pub use xml::*;

#[derive(Debug, Error)]
pub enum DocxError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),
    #[error(transparent)]
    XmlEncoding(#[from] quick_xml::encoding::EncodingError),
    #[error(transparent)]
    XmlAttribute(#[from] quick_xml::events::attributes::AttrError),
    #[error(transparent)]
    Utf8(#[from] std::str::Utf8Error),
    #[error("unknown xml entity \"&{0};\"")]
    UnknownEntity(String),
    #[error("closing tag without a matching opening tag")]
    UnexpectedEnd,
    #[error("the xml does not have a root element")]
    MissingRoot,
    #[error("the package does not contain \"{0}\"")]
    MissingPart(String),
    #[error("the document has no {0}")]
    MissingElement(String),
}
