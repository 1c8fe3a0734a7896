use std::fs::File;
use std::io::{
    BufRead,
    BufReader,
    Cursor,
};
use std::path::PathBuf;

use itertools::Itertools;
use log::debug;
use polars::prelude::*;

use super::{
    is_table_header,
    METADATA_PREFIX,
};
use crate::data_structs::matrix::{
    BetaMatrix,
    PROBE_ID_COL,
};
use crate::error::{
    BetaRefError,
    Result,
};

/// Spellings treated as missing beta values.
const NULL_MARKERS: &[&str] = &["", "NA", "na", "N/A", "null", "NULL", "NaN"];

/// Reader for one series matrix table, raw or already cleaned.
///
/// The file is scanned for the table header first, so any metadata
/// preamble is skipped without a separate cleaning step. Beta values are
/// rounded and the sample columns optionally narrowed before the result
/// is validated into a [`BetaMatrix`].
///
/// ```no_run
/// use betaref::io::series::SeriesMatrixReader;
///
/// let matrix = SeriesMatrixReader::new("GSE12345_series_matrix.txt")
///     .with_samples(["GSM100", "GSM101"])
///     .finish()?;
/// # Ok::<(), betaref::error::BetaRefError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SeriesMatrixReader {
    path: PathBuf,
    samples: Vec<String>,
    precision: u32,
}

impl SeriesMatrixReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            samples: Vec::new(),
            precision: 4,
        }
    }

    /// Restricts the table to the given sample columns. The probe column
    /// is always kept. An empty selection keeps every column.
    pub fn with_samples<I, S>(mut self, samples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>, {
        self.samples = samples.into_iter().map_into().collect();
        self
    }

    /// Decimal places beta values are rounded to. Defaults to 4. Rounding
    /// is half away from zero.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Reads, rounds, subsets and validates the table.
    pub fn finish(self) -> Result<BetaMatrix> {
        let df = self.read_table()?;
        debug!(
            "read {} rows x {} columns from {}",
            df.height(),
            df.width(),
            self.path.display()
        );
        let rounded = self.round(df)?;
        let subset = self.subset(rounded)?;
        BetaMatrix::try_from_df(subset, &self.path)
    }

    /// Extracts the table block, header line onward, with any interleaved
    /// metadata lines such as `!series_matrix_table_end` removed.
    fn table_block(&self) -> Result<Vec<u8>> {
        let reader = BufReader::new(File::open(&self.path)?);
        let mut block = Vec::new();
        let mut in_table = false;

        for line in reader.lines() {
            let line = line?;
            // GEO exports often come with CRLF endings.
            let line = line.strip_suffix('\r').unwrap_or(&line);
            if !in_table {
                if is_table_header(line) {
                    in_table = true;
                } else {
                    continue;
                }
            } else if line.starts_with(METADATA_PREFIX) {
                continue;
            }
            block.extend_from_slice(line.as_bytes());
            block.push(b'\n');
        }

        if !in_table {
            return Err(BetaRefError::malformed(
                &self.path,
                "no table header line found",
            ));
        }
        Ok(block)
    }

    fn read_table(&self) -> Result<DataFrame> {
        let block = self.table_block()?;
        let null_markers = NULL_MARKERS
            .iter()
            .map(|marker| PlSmallStr::from(*marker))
            .collect_vec();

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .with_parse_options(
                CsvParseOptions::default()
                    .with_separator(b'\t')
                    .with_null_values(Some(NullValues::AllColumns(null_markers)))
                    .with_try_parse_dates(false),
            )
            .into_reader_with_file_handle(Cursor::new(block))
            .finish()?;
        Ok(df)
    }

    /// Rounds every float column. Rounding happens before subsetting so
    /// the stored values do not depend on which samples were selected.
    fn round(&self, df: DataFrame) -> Result<DataFrame> {
        let float_cols = df
            .get_columns()
            .iter()
            .filter(|c| {
                matches!(c.dtype(), DataType::Float32 | DataType::Float64)
            })
            .map(|c| col(c.name().clone()).round(self.precision))
            .collect_vec();
        if float_cols.is_empty() {
            return Ok(df);
        }
        Ok(df.lazy().with_columns(float_cols).collect()?)
    }

    fn subset(&self, df: DataFrame) -> Result<DataFrame> {
        if self.samples.is_empty() {
            return Ok(df);
        }
        for requested in &self.samples {
            if df.get_column_index(requested).is_none() {
                return Err(BetaRefError::MissingColumn {
                    path: self.path.clone(),
                    column: requested.clone(),
                });
            }
        }

        let mut selection = Vec::with_capacity(self.samples.len() + 1);
        // The header check is prefix based, so the probe column may still
        // be absent here. Validation reports that with a clearer error.
        if df.get_column_index(PROBE_ID_COL).is_some() {
            selection.push(PROBE_ID_COL);
        }
        selection.extend(
            self.samples
                .iter()
                .map(String::as_str)
                .filter(|name| *name != PROBE_ID_COL),
        );
        Ok(df.select(selection)?)
    }
}
