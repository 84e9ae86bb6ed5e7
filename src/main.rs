use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

use log::{error, info};
use seahorse::{App, Context, Flag, FlagType};

use registro::config::Config;
use registro::write_registries;

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn flags() -> Vec<Flag> {
    vec![
        Flag::new("registry_path", FlagType::String)
            .description(
                "[optional] Output folder. Default: `registry_per_year/` next to the data file",
            )
            .alias("rp"),
        Flag::new("year_path_suffix", FlagType::String)
            .description("[optional] Appended to the year in the file names. Default: `registro_dottorato`")
            .alias("yps"),
        Flag::new("year_separator", FlagType::String)
            .description("[optional] Separator of the academic years, like `2023-2024`. Default: `-`")
            .alias("ys"),
        Flag::new("hour_format", FlagType::String)
            .description("[optional] Format of the start and end times. Default: `%H:%M`")
            .alias("hf"),
        Flag::new("seed", FlagType::Uint)
            .description("[optional] Makes the choice between default activities reproducible."),
    ]
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    let args: Vec<String> = env::args().collect();

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args] <document> <data>", args[0]))
        .action(|context: &Context| {
            if let Err(e) = make(context) {
                error!("{:?}", e);
                ::std::process::exit(1);
            }
        });
    let app = flags().into_iter().fold(app, App::flag);

    app.run(args);
}

mod seahorse_exts {
    use std::path::PathBuf;

    use anyhow::Context as _;
    use seahorse::error::FlagError;
    use seahorse::Context;

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn optional_string_flag(&self, name: &str) -> Option<String> {
            self.context().string_flag(name).ok()
        }

        fn optional_path_flag(&self, name: &str) -> Option<PathBuf> {
            self.optional_string_flag(name).map(PathBuf::from)
        }

        /// Fails if the flag is present, but its value is not a positive integer.
        fn optional_uint_flag(&self, name: &str) -> anyhow::Result<Option<usize>> {
            match self.context().uint_flag(name) {
                Ok(value) => Ok(Some(value)),
                Err(FlagError::NotFound) => Ok(None),
                Err(error) => Err(error)
                    .with_context(|| format!("flag \"{}\" expects a positive integer", name)),
            }
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::ContextExt;

fn build_config(context: &Context) -> anyhow::Result<Config> {
    let [document, data] = context.args.as_slice() else {
        return Err(anyhow::anyhow!(
            "expected the paths to the document and to the data, got {} arguments",
            context.args.len()
        ));
    };

    let mut config = Config::try_from_files(document, data)?;

    let workspace = dunce::canonicalize(data)?
        .parent()
        .ok_or_else(|| anyhow::anyhow!("data should have a parent directory"))?
        .to_path_buf();
    config.workspace(workspace);

    if let Some(registry_path) = context.optional_path_flag("registry_path") {
        config.registry_path(registry_path);
    }

    if let Some(suffix) = context.optional_string_flag("year_path_suffix") {
        config.year_path_suffix(suffix);
    }

    if let Some(separator) = context.optional_string_flag("year_separator") {
        config.year_separator(separator);
    }

    if let Some(format) = context.optional_string_flag("hour_format") {
        config.hour_format(format);
    }

    if let Some(seed) = context.optional_uint_flag("seed")? {
        config.seed(u64::try_from(seed)?);
    }

    let config = config.build();

    info!("finished building config");

    Ok(config)
}

fn make(context: &Context) -> anyhow::Result<()> {
    let config = build_config(context)?;
    let written: Vec<PathBuf> = write_registries(&config)?;

    info!("wrote {} registries", written.len());

    Ok(())
}
