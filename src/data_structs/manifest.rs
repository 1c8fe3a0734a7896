//! Parsing of the input manifest.
//!
//! The manifest is a headerless TSV where every line names one series
//! matrix file and states whether its metadata preamble still has to be
//! stripped:
//!
//! ```text
//! GSE12345_series_matrix.txt	YES	GSM100	GSM101
//! cohort_two.txt	NO
//! ```
//!
//! Field 0 is the file path, field 1 the case-insensitive cleaning flag,
//! and every further field names a sample column to keep. No sample
//! fields means the whole table is used.

use std::path::{
    Path,
    PathBuf,
};

use indexmap::IndexMap;
use log::debug;

use crate::error::{
    BetaRefError,
    Result,
};

/// Sample columns selected for one input file. Empty means keep all.
pub type SampleSelection = Vec<String>;

/// One side of the manifest: file path to selected sample columns.
///
/// [`IndexMap`] keeps manifest order, which later fixes both the merge
/// order and the column order of the final reference table.
pub type FileSelections = IndexMap<PathBuf, SampleSelection>;

/// Parsed manifest, split by the cleaning flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    to_clean: FileSelections,
    already_clean: FileSelections,
}

impl Manifest {
    /// Reads and parses a manifest file.
    ///
    /// A later line for an already-seen path replaces the earlier entry.
    /// Fails with [`BetaRefError::InputFormat`] when the file is missing,
    /// empty, or any line lacks the cleaning flag.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path).map_err(|e| {
            BetaRefError::input_format(path, format!("cannot read manifest: {e}"))
        })?;
        if metadata.len() == 0 {
            return Err(BetaRefError::input_format(path, "manifest is empty"));
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;

        let mut to_clean = FileSelections::new();
        let mut already_clean = FileSelections::new();

        for (idx, record) in reader.records().enumerate() {
            let line = idx + 1;
            let record = record.map_err(|e| {
                BetaRefError::input_format(path, format!("line {line}: {e}"))
            })?;

            let mut fields = record.iter();
            let file = fields
                .next()
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .ok_or_else(|| {
                    BetaRefError::input_format(
                        path,
                        format!("line {line}: missing file path"),
                    )
                })?;
            let flag = fields.next().ok_or_else(|| {
                BetaRefError::input_format(
                    path,
                    format!("line {line}: missing cleaning flag"),
                )
            })?;
            let samples: SampleSelection = fields
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect();

            let entry = PathBuf::from(file);
            if flag.trim().eq_ignore_ascii_case("yes") {
                to_clean.insert(entry, samples);
            } else {
                already_clean.insert(entry, samples);
            }
        }

        if to_clean.is_empty() && already_clean.is_empty() {
            return Err(BetaRefError::input_format(path, "manifest has no entries"));
        }
        debug!(
            "parsed manifest {}: {} to clean, {} already clean",
            path.display(),
            to_clean.len(),
            already_clean.len()
        );

        Ok(Self {
            to_clean,
            already_clean,
        })
    }

    /// Files whose metadata preamble must be stripped first.
    pub fn to_clean(&self) -> &FileSelections {
        &self.to_clean
    }

    /// Files that are already plain tables.
    pub fn already_clean(&self) -> &FileSelections {
        &self.already_clean
    }

    /// Every file path the manifest references, manifest order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.to_clean
            .keys()
            .chain(self.already_clean.keys())
            .map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.to_clean.len() + self.already_clean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Combines two selection maps into a new one.
///
/// Entries of `second` win over `first` on equal paths while the slot of
/// the first occurrence keeps its position. Neither input is modified.
pub fn merge_entries(
    first: &FileSelections,
    second: &FileSelections,
) -> FileSelections {
    let mut merged = first.clone();
    for (path, samples) in second {
        merged.insert(path.clone(), samples.clone());
    }
    merged
}
