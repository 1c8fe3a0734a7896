use std::path::PathBuf;

use clap::Args;
use glob::glob;
use indicatif::{
    ProgressBar,
    ProgressStyle,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    #[arg(long, default_value_t = false, help = "Display progress bar.")]
    pub progress: bool,
    #[arg(short, long, default_value_t = false, help = "Verbose output.")]
    pub verbose:  bool,
    #[arg(
        long,
        default_value_t = 0,
        help = "Number of threads for table operations (0 uses all cores)."
    )]
    pub threads:  usize,
}

impl UtilsArgs {
    /// Applies thread and logging settings. Must run before the first
    /// table is loaded, Polars reads the thread cap once.
    pub fn setup(&self) -> anyhow::Result<()> {
        if self.threads > 0 {
            std::env::set_var("POLARS_MAX_THREADS", self.threads.to_string());
        }
        init_logger(self.verbose)?;
        Ok(())
    }
}

pub(crate) fn init_logger(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.try_init()?;
    Ok(())
}

pub(crate) fn init_pbar(total: usize) -> anyhow::Result<ProgressBar> {
    let progress_bar = ProgressBar::new(total as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] \
                 {pos}/{len} {msg}",
            )?
            .progress_chars("#>-"),
    );
    progress_bar.set_message("Processing...");
    Ok(progress_bar)
}

pub(crate) fn expand_wildcards(paths: &[String]) -> Vec<PathBuf> {
    let mut expanded = Vec::new();

    for path in paths {
        if path.contains('*') || path.contains('?') {
            match glob(path) {
                Ok(matches) => {
                    expanded.extend(matches.filter_map(Result::ok));
                },
                Err(e) => eprintln!("Error processing wildcard '{path}': {e}"),
            }
        } else {
            expanded.push(PathBuf::from(path));
        }
    }

    expanded
}
