//! Reading and cleaning of GEO series matrix files.
//!
//! A series matrix is a TSV export with a metadata preamble of
//! `!`-prefixed lines, followed by the beta-value table. The table starts
//! at the header line whose first field is `ID_REF` and may be terminated
//! by a `!series_matrix_table_end` line.

mod read;
mod strip;

pub use read::SeriesMatrixReader;
pub use strip::{
    cleaned_path,
    strip_metadata,
};

use crate::data_structs::matrix::PROBE_ID_COL;

/// Prefix of every metadata line in a series matrix.
pub const METADATA_PREFIX: &str = "!";
/// The one metadata line that survives cleaning. It carries the GEO
/// sample accessions and doubles as a provenance record.
pub const SAMPLE_ACCESSION_MARKER: &str = "!Sample_geo_accession";

/// True for the header line that opens the beta-value table.
///
/// GEO quotes header fields, so a leading `"` is ignored. The check is
/// prefix based; whether the first column is really named `ID_REF` is
/// verified after parsing.
pub(crate) fn is_table_header(line: &str) -> bool {
    line.strip_prefix('"').unwrap_or(line).starts_with(PROBE_ID_COL)
}
