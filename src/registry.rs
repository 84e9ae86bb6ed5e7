use std::path::Path;
use std::vec;

use anyhow::Context as _;
use log::info;

use crate::chooser::Chooser;
use crate::docx::{DocxError, Document};
use crate::filler::Filler;
use crate::input::{RegistryData, YearData};
use crate::time::{AcademicYear, Month};
use crate::utils;

/// The raw bytes of the register template, parsed again for every month.
#[derive(Debug, Clone)]
pub struct Template {
    bytes: Vec<u8>,
}

impl Template {
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let bytes = utils::read(path)
            .with_context(|| format!("failed to read the template \"{}\"", path.display()))?;

        let template = Self::from_bytes(bytes);
        // fail early instead of at the first month
        template
            .load()
            .with_context(|| format!("\"{}\" is not a valid document", path.display()))?;

        Ok(template)
    }

    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Returns a fresh document, independent of all previously loaded ones.
    pub fn load(&self) -> Result<Document, DocxError> {
        Document::from_bytes(&self.bytes)
    }
}

pub struct Registry<'a, C> {
    template: &'a Template,
    data: &'a RegistryData,
    year_separator: &'a str,
    filler: Filler<'a, C>,
}

impl<'a, C: Chooser> Registry<'a, C> {
    pub fn new(template: &'a Template, data: &'a RegistryData, filler: Filler<'a, C>) -> Self {
        Self {
            template,
            data,
            year_separator: "-",
            filler,
        }
    }

    /// The separator between the two years of an interval like `2023-2024`.
    #[must_use]
    pub fn year_separator(mut self, year_separator: &'a str) -> Self {
        self.year_separator = year_separator;
        self
    }

    /// Returns an iterator that builds one document per academic year, in the
    /// order in which they appear in the data.
    #[must_use]
    pub fn generate(self) -> Generate<'a, C> {
        Generate {
            years: self.data.years().collect::<Vec<_>>().into_iter(),
            template: self.template,
            year_separator: self.year_separator,
            filler: self.filler,
        }
    }
}

/// Yields `(year interval, document)` for every academic year, see [`Registry::generate`].
pub struct Generate<'a, C> {
    years: vec::IntoIter<(&'a str, &'a YearData)>,
    template: &'a Template,
    year_separator: &'a str,
    filler: Filler<'a, C>,
}

impl<'a, C: Chooser> Generate<'a, C> {
    fn year(&mut self, interval: &str, months: &YearData) -> anyhow::Result<Document> {
        let academic_year = AcademicYear::parse(interval, self.year_separator)?;
        info!("generating the registry for {}", academic_year);

        let mut result: Option<Document> = None;
        for (index, (name, month_data)) in months.iter().enumerate() {
            let month = Month::from_name(name)
                .with_context(|| format!("in the academic year {}", interval))?;
            let year = academic_year.year_of(month);
            info!("filling {} {}", month, year);

            let mut document = self.template.load().context("failed to load the template")?;
            self.filler
                .fill(&mut document, month_data, year, name)
                .with_context(|| format!("failed to fill {} {}", month, year))?;

            if index + 1 < months.len() {
                document.add_page_break()?;
            }

            result = Some(match result.take() {
                Some(mut first) => {
                    first.append_body(document)?;
                    first
                }
                None => document,
            });
        }

        result.ok_or_else(|| anyhow::anyhow!("the academic year {} has no months", interval))
    }
}

impl<'a, C: Chooser> Iterator for Generate<'a, C> {
    type Item = anyhow::Result<(String, Document)>;

    fn next(&mut self) -> Option<Self::Item> {
        let (interval, months) = self.years.next()?;

        Some(
            self.year(interval, months)
                .map(|document| (interval.to_string(), document)),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.years.size_hint()
    }
}
