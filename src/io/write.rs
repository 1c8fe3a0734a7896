use std::path::Path;

use log::info;
use polars::prelude::*;
use tempfile::NamedTempFile;

use crate::data_structs::matrix::BetaMatrix;
use crate::error::Result;

/// How missing beta values are spelled in the output file.
const NULL_VALUE: &str = "NaN";
/// The leading row-index column has an empty header field.
const INDEX_COL: &str = "";

/// Writes the reference table as TSV.
///
/// A zero-based row index with an empty header name is prepended, missing
/// values become [`NULL_VALUE`]. Fields are written unquoted, which keeps
/// that header cell genuinely empty. The table is written to a temporary
/// file in the target directory first and renamed into place, so a crash
/// mid write never leaves a truncated reference behind.
pub fn write_reference(
    matrix: &BetaMatrix,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    let mut with_index = matrix
        .data()
        .with_row_index(PlSmallStr::from(INDEX_COL), None)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir)?;
    CsvWriter::new(tmp.as_file())
        .include_header(true)
        .with_separator(b'\t')
        .with_null_value(NULL_VALUE.to_string())
        // No cell ever holds a separator or quote, and the default style
        // would quote the index column's empty header name.
        .with_quote_style(QuoteStyle::Never)
        .finish(&mut with_index)?;
    tmp.persist(path).map_err(|e| e.error)?;

    info!(
        "wrote {} probes x {} samples to {}",
        matrix.height(),
        matrix.sample_names().len(),
        path.display()
    );
    Ok(())
}
