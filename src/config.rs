use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use thiserror::Error;

use crate::input::{default_activities, Activity, RegistryData};
use crate::time::DEFAULT_HOUR_FORMAT;

pub const DEFAULT_REGISTRY_DIR: &str = "registry_per_year";
pub const DEFAULT_YEAR_PATH_SUFFIX: &str = "registro_dottorato";
pub const DEFAULT_YEAR_SEPARATOR: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("\"{}\" does not exist", path.display())]
    NotFound { path: PathBuf },
}

#[derive(Debug, Clone)]
pub struct Config {
    template: PathBuf,
    data: RegistryData,
    registry_path: PathBuf,
    year_path_suffix: String,
    year_separator: String,
    hour_format: String,
    default_activities: Vec<Activity>,
    seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    workspace: Option<PathBuf>,
    template: PathBuf,
    data: RegistryData,
    registry_path: Option<PathBuf>,
    year_path_suffix: Option<String>,
    year_separator: Option<String>,
    hour_format: Option<String>,
    default_activities: Option<Vec<Activity>>,
    seed: Option<u64>,
}

impl ConfigBuilder {
    fn new(template: PathBuf, data: RegistryData) -> Self {
        Self {
            workspace: None,
            template,
            data,
            registry_path: None,
            year_path_suffix: None,
            year_separator: None,
            hour_format: None,
            default_activities: None,
            seed: None,
        }
    }

    pub fn registry_path(&mut self, registry_path: impl Into<PathBuf>) -> &mut Self {
        self.registry_path = Some(registry_path.into());
        self
    }

    pub fn year_path_suffix(&mut self, year_path_suffix: impl Into<String>) -> &mut Self {
        self.year_path_suffix = Some(year_path_suffix.into());
        self
    }

    pub fn year_separator(&mut self, year_separator: impl Into<String>) -> &mut Self {
        self.year_separator = Some(year_separator.into());
        self
    }

    pub fn hour_format(&mut self, hour_format: impl Into<String>) -> &mut Self {
        self.hour_format = Some(hour_format.into());
        self
    }

    /// Used for the days of months that do not have their own `default`.
    pub fn default_activities(&mut self, default_activities: Vec<Activity>) -> &mut Self {
        self.default_activities = Some(default_activities);
        self
    }

    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// The registry directory is created in the workspace, unless an explicit path is set.
    pub fn workspace(&mut self, workspace: impl Into<PathBuf>) -> &mut Self {
        self.workspace = Some(workspace.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Config {
        let registry_path = self.registry_path.unwrap_or_else(|| {
            if let Some(workspace) = &self.workspace {
                workspace.join(DEFAULT_REGISTRY_DIR)
            } else {
                PathBuf::from(DEFAULT_REGISTRY_DIR)
            }
        });

        Config {
            template: self.template,
            data: self.data,
            registry_path,
            year_path_suffix: self
                .year_path_suffix
                .unwrap_or_else(|| DEFAULT_YEAR_PATH_SUFFIX.to_string()),
            year_separator: self
                .year_separator
                .unwrap_or_else(|| DEFAULT_YEAR_SEPARATOR.to_string()),
            hour_format: self
                .hour_format
                .unwrap_or_else(|| DEFAULT_HOUR_FORMAT.to_string()),
            default_activities: self.default_activities.unwrap_or_else(default_activities),
            seed: self.seed,
        }
    }
}

impl Config {
    /// Checks that both files exist, then parses the data file.
    pub fn try_from_files(
        template: impl AsRef<Path>,
        data: impl AsRef<Path>,
    ) -> anyhow::Result<ConfigBuilder> {
        let (template, data) = (template.as_ref(), data.as_ref());

        for path in [template, data] {
            if !path.exists() {
                return Err(InputError::NotFound {
                    path: path.to_path_buf(),
                }
                .into());
            }
        }

        let registry_data = RegistryData::from_reader(BufReader::new(File::open(data)?))
            .with_context(|| format!("failed to parse \"{}\"", data.display()))?;

        Ok(ConfigBuilder::new(template.to_path_buf(), registry_data))
    }

    pub fn template(&self) -> &Path {
        &self.template
    }

    pub fn data(&self) -> &RegistryData {
        &self.data
    }

    pub fn registry_path(&self) -> &Path {
        &self.registry_path
    }

    pub fn year_path_suffix(&self) -> &str {
        &self.year_path_suffix
    }

    pub fn year_separator(&self) -> &str {
        &self.year_separator
    }

    pub fn hour_format(&self) -> &str {
        &self.hour_format
    }

    pub fn default_activities(&self) -> &[Activity] {
        &self.default_activities
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Where the registry of the academic year `interval` is written to.
    #[must_use]
    pub fn output_path(&self, interval: &str) -> PathBuf {
        self.registry_path
            .join(format!("{}_{}.docx", interval, self.year_path_suffix))
    }
}
