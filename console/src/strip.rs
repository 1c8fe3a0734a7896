use std::path::PathBuf;

use anyhow::bail;
use betaref::prelude::*;
use clap::Args;
use console::style;
use indicatif::ProgressBar;

use crate::utils::{
    expand_wildcards,
    init_pbar,
    UtilsArgs,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct StripArgs {
    #[arg(
        value_parser,
        num_args = 1..,
        required = true,
        help = "Raw series matrix files. Glob patterns are expanded."
    )]
    files: Vec<String>,
}

impl StripArgs {
    pub fn run(&self, utils: &UtilsArgs) -> anyhow::Result<()> {
        let paths = expand_wildcards(&self.files);
        if paths.is_empty() {
            bail!("no input files matched");
        }
        check_files_exist(paths.iter().map(PathBuf::as_path))?;

        let progress_bar = if utils.progress {
            init_pbar(paths.len())?
        } else {
            ProgressBar::hidden()
        };

        for path in &paths {
            let cleaned = cleaned_path(path);
            strip_metadata(path, &cleaned)?;
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        println!("[{}] cleaned {} file(s)", style("V").green(), paths.len());
        Ok(())
    }
}
