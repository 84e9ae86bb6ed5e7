use std::io::Read;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::input::MonthData;

/// The months of one academic year, keyed by their italian name, in file order.
pub type YearData = IndexMap<String, MonthData>;

/// The content of the data file: academic year interval (like `2023-2024`) to its months.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RegistryData {
    years: IndexMap<String, YearData>,
}

impl RegistryData {
    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }

    pub fn years(&self) -> impl Iterator<Item = (&str, &YearData)> + '_ {
        self.years
            .iter()
            .map(|(interval, months)| (interval.as_str(), months))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.years.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}
