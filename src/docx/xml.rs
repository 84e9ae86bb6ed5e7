use std::io::Write;

use quick_xml::escape::resolve_xml_entity;
use quick_xml::events::{BytesEnd, BytesRef, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::docx::DocxError;

#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Comments, processing instructions, CDATA and the like, written back as they were read.
    Other(Event<'static>),
}

impl Node {
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_element_named(&self, name: &str) -> bool {
        self.as_element().is_some_and(|element| element.name() == name)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An xml element. Names are kept with their prefix (`w:tbl`), namespaces are not resolved.
#[derive(Debug, Clone)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.push(element);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, DocxError> {
        let mut element = Self::new(std::str::from_utf8(start.name().as_ref())?);

        for attribute in start.attributes() {
            let attribute = attribute?;
            let key = std::str::from_utf8(attribute.key.as_ref())?.to_string();
            let value = attribute.unescape_value()?.into_owned();
            element.attributes.push((key, value));
        }

        Ok(element)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        if let Some((_, old)) = self.attributes.iter_mut().find(|(name, _)| *name == key) {
            *old = value;
        } else {
            self.attributes.push((key, value));
        }
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn elements_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements().filter(move |element| element.name == name)
    }

    pub fn elements_named_mut<'a>(
        &'a mut self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a mut Element> + 'a {
        self.children
            .iter_mut()
            .filter_map(Node::as_element_mut)
            .filter(move |element| element.name == name)
    }

    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|element| element.name == name)
    }

    #[must_use]
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children
            .iter_mut()
            .filter_map(Node::as_element_mut)
            .find(|element| element.name == name)
    }

    /// Index of the first child element called `name` in [`Element::children`].
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.children
            .iter()
            .position(|node| node.is_element_named(name))
    }

    pub fn push(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    /// Inserts the `element` at `index`, or at the end if `index` is out of bounds.
    pub fn insert(&mut self, index: usize, element: Element) {
        let index = index.min(self.children.len());
        self.children.insert(index, Node::Element(element));
    }

    /// Concatenates all text nodes below this element.
    #[must_use]
    pub fn text(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    fn collect_text(&self, result: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(element) => element.collect_text(result),
                Node::Text(text) => result.push_str(text),
                Node::Other(_) => {}
            }
        }
    }

    fn write<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), DocxError> {
        let start = BytesStart::new(self.name.as_str()).with_attributes(
            self.attributes
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str())),
        );

        if self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        for child in &self.children {
            match child {
                Node::Element(element) => element.write(writer)?,
                Node::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
                Node::Other(event) => writer.write_event(event.clone())?,
            }
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;

        Ok(())
    }
}

/// A parsed xml file: the prolog (declaration, comments) and the root element.
#[derive(Debug, Clone)]
pub struct XmlDocument {
    prolog: Vec<Event<'static>>,
    root: Element,
}

impl XmlDocument {
    #[must_use]
    pub fn new(root: Element) -> Self {
        Self {
            prolog: Vec::new(),
            root,
        }
    }

    pub fn parse(bytes: &[u8]) -> Result<Self, DocxError> {
        let mut reader = Reader::from_reader(bytes);
        let config = reader.config_mut();
        config.expand_empty_elements = true;
        config.trim_text(false);

        let mut buffer = Vec::with_capacity(1024);
        let mut prolog = Vec::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut root = None;

        loop {
            buffer.clear();
            match reader.read_event_into(&mut buffer)? {
                Event::Eof => break,
                Event::Start(start) => stack.push(Element::from_start(&start)?),
                Event::Empty(start) => {
                    let element = Element::from_start(&start)?;
                    close(&mut stack, &mut root, element);
                }
                Event::End(_) => {
                    let element = stack.pop().ok_or(DocxError::UnexpectedEnd)?;
                    close(&mut stack, &mut root, element);
                }
                Event::Text(text) => push_text(&mut stack, &text.xml_content()?),
                Event::GeneralRef(reference) => {
                    push_text(&mut stack, &resolve_reference(&reference)?)
                }
                other => match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Other(other.into_owned())),
                    None => prolog.push(other.into_owned()),
                },
            }
        }

        Ok(Self {
            prolog,
            root: root.ok_or(DocxError::MissingRoot)?,
        })
    }

    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, DocxError> {
        let mut writer = Writer::new(Vec::new());

        for event in &self.prolog {
            writer.write_event(event.clone())?;
        }
        self.root.write(&mut writer)?;

        Ok(writer.into_inner())
    }
}

fn close(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None => *root = Some(element),
    }
}

/// Text outside of the root element is dropped. Consecutive text (split by entity
/// references) is merged into one node.
fn push_text(stack: &mut [Element], text: &str) {
    let Some(parent) = stack.last_mut() else {
        return;
    };

    if let Some(Node::Text(last)) = parent.children.last_mut() {
        last.push_str(text);
    } else {
        parent.children.push(Node::Text(text.to_string()));
    }
}

fn resolve_reference(reference: &BytesRef<'_>) -> Result<String, DocxError> {
    let raw = reference.xml_content()?;
    let unknown = || DocxError::UnknownEntity(raw.to_string());

    if let Some(number) = raw.strip_prefix('#') {
        let code = if let Some(hex) = number.strip_prefix('x') {
            u32::from_str_radix(hex, 16)
        } else {
            number.parse()
        }
        .map_err(|_| unknown())?;

        char::from_u32(code).map(String::from).ok_or_else(unknown)
    } else if let Some(entity) = resolve_xml_entity(&raw) {
        Ok(entity.to_string())
    } else {
        Err(unknown())
    }
}
