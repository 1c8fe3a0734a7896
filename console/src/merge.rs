use std::path::PathBuf;

use anyhow::Context;
use betaref::prelude::*;
use clap::Args;
use console::style;
use indicatif::ProgressBar;
use log::info;

use crate::utils::{
    init_pbar,
    UtilsArgs,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct MergeArgs {
    #[arg(
        short,
        long,
        default_value = "file_list.txt",
        help = "Manifest listing the series matrix files to merge."
    )]
    manifest:   PathBuf,
    #[arg(
        short,
        long,
        default_value = "HumanMethylationSites.txt",
        help = "Probe annotation file (probe,chromosome,position CSV)."
    )]
    annotation: PathBuf,
    #[arg(
        short,
        long,
        default_value = "reference_matrix.txt",
        help = "Path for the merged reference table."
    )]
    output:     PathBuf,
}

impl MergeArgs {
    pub fn run(&self, utils: &UtilsArgs) -> anyhow::Result<()> {
        let manifest = Manifest::from_path(&self.manifest)?;
        check_files_exist(
            manifest
                .paths()
                .chain(std::iter::once(self.annotation.as_path())),
        )?;

        let progress_bar = if utils.progress {
            init_pbar(manifest.len() + manifest.to_clean().len())?
        } else {
            ProgressBar::hidden()
        };

        progress_bar.set_message("Cleaning...");
        let mut newly_cleaned = FileSelections::new();
        for (path, samples) in manifest.to_clean() {
            let cleaned = cleaned_path(path);
            strip_metadata(path, &cleaned)
                .with_context(|| format!("failed to clean {}", path.display()))?;
            newly_cleaned.insert(cleaned, samples.clone());
            progress_bar.inc(1);
        }

        // Already clean files first, then the freshly cleaned ones. The
        // merge below folds in this order, which fixes the column order
        // of the reference table.
        let inputs = merge_entries(manifest.already_clean(), &newly_cleaned);

        progress_bar.set_message("Loading...");
        let mut tables = Vec::with_capacity(inputs.len());
        for (path, samples) in &inputs {
            let matrix = SeriesMatrixReader::new(path)
                .with_samples(samples.clone())
                .finish()
                .with_context(|| format!("failed to load {}", path.display()))?;
            info!(
                "{}: {} probes, {} samples",
                path.display(),
                matrix.height(),
                matrix.sample_names().len()
            );
            tables.push(matrix);
            progress_bar.inc(1);
        }

        progress_bar.set_message("Merging...");
        let merged = BetaMatrix::merge_all(tables)?
            .ok_or_else(|| anyhow::anyhow!("manifest listed no input files"))?;

        progress_bar.set_message("Annotating...");
        let probes = ProbeMap::from_path(&self.annotation)?;
        let annotated = merged.annotate(&probes)?;

        write_reference(&annotated, &self.output)?;
        progress_bar.finish_and_clear();

        println!(
            "[{}] {} probes x {} samples written to {}",
            style("V").green(),
            annotated.height(),
            annotated.sample_names().len(),
            self.output.display()
        );
        Ok(())
    }
}
