mod utils;

pub mod chooser;
pub mod config;
pub mod docx;
pub mod filler;
pub mod input;
pub mod registry;
pub mod time;

use std::path::PathBuf;

use anyhow::Context as _;
use log::info;

use crate::chooser::RandomChooser;
use crate::config::Config;
use crate::filler::Filler;
use crate::registry::{Registry, Template};

/// Generates the registry of every academic year in the data and writes them to the
/// registry directory. Returns the paths of the written files.
pub fn write_registries(config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let template = Template::open(config.template())?;

    let chooser = match config.seed() {
        Some(seed) => RandomChooser::from_seed(seed),
        None => RandomChooser::from_entropy(),
    };
    let filler = Filler::new(config.default_activities(), config.hour_format(), chooser);
    let registry =
        Registry::new(&template, config.data(), filler).year_separator(config.year_separator());

    utils::create_dir_all(config.registry_path())?;

    let mut written = Vec::with_capacity(config.data().len());
    for result in registry.generate() {
        let (interval, document) = result?;
        let path = config.output_path(&interval);

        let bytes = document
            .to_bytes()
            .with_context(|| format!("failed to serialize the registry for {}", interval))?;
        utils::write(&path, bytes)
            .with_context(|| format!("failed to write \"{}\"", path.display()))?;

        info!("saved the registry for {} to \"{}\"", interval, path.display());
        written.push(path);
    }

    Ok(written)
}
