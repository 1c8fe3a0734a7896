use std::path::PathBuf;

use anyhow::bail;
use betaref::prelude::*;
use clap::Args;
use console::style;
use itertools::Itertools;

use crate::utils::UtilsArgs;

#[derive(Args, Debug, Clone)]
pub(crate) struct ValidateArgs {
    #[arg(
        short,
        long,
        default_value = "file_list.txt",
        help = "Manifest to check."
    )]
    manifest:   PathBuf,
    #[arg(
        short,
        long,
        default_value = "HumanMethylationSites.txt",
        help = "Probe annotation file to check."
    )]
    annotation: PathBuf,
}

impl ValidateArgs {
    pub fn run(&self, _utils: &UtilsArgs) -> anyhow::Result<()> {
        let manifest = Manifest::from_path(&self.manifest)?;
        println!(
            "Manifest {}: {} file(s), {} still to clean",
            self.manifest.display(),
            manifest.len(),
            manifest.to_clean().len()
        );

        let mut problems = 0usize;
        let entries = manifest
            .to_clean()
            .iter()
            .map(|(path, samples)| (path, samples, "clean"))
            .chain(
                manifest
                    .already_clean()
                    .iter()
                    .map(|(path, samples)| (path, samples, "ready")),
            );
        for (path, samples, state) in entries {
            let exists = check_files_exist([path.as_path()]).is_ok();
            let mark = if exists {
                style("V").green()
            } else {
                style("X").red()
            };
            let selection = if samples.is_empty() {
                "all samples".to_string()
            } else {
                samples.iter().join(", ")
            };
            println!("[{mark}] ({state}) {} [{selection}]", path.display());
            if !exists {
                problems += 1;
            }
        }

        // A cleaning target can shadow another manifest entry.
        for path in manifest.to_clean().keys() {
            let target = cleaned_path(path);
            if manifest.already_clean().contains_key(&target) {
                println!(
                    "[{}] cleaning {} will overwrite listed input {}",
                    style("!").yellow(),
                    path.display(),
                    target.display()
                );
            }
        }

        if check_files_exist([self.annotation.as_path()]).is_ok() {
            println!(
                "[{}] annotation {}",
                style("V").green(),
                self.annotation.display()
            );
        } else {
            println!(
                "[{}] annotation {} missing or empty",
                style("X").red(),
                self.annotation.display()
            );
            problems += 1;
        }

        if problems > 0 {
            bail!("{problems} referenced file(s) missing or empty");
        }
        println!("{}", style("Manifest is valid").green());
        Ok(())
    }
}
