use std::fs::{
    self,
    File,
};
use std::io::{
    BufRead,
    BufReader,
    BufWriter,
    Write,
};
use std::path::{
    Path,
    PathBuf,
};

use log::debug;

use super::{
    is_table_header,
    SAMPLE_ACCESSION_MARKER,
};
use crate::error::{
    BetaRefError,
    Result,
};

/// Maps a raw series matrix path to the path its cleaned copy is written
/// to: `GSE1_series_matrix.txt` becomes `GSE1_series_matrix_cleaned.txt`,
/// in the same directory.
pub fn cleaned_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let cleaned = match name.strip_suffix(".txt") {
        Some(stem) => format!("{stem}_cleaned.txt"),
        None => format!("{name}_cleaned.txt"),
    };
    path.with_file_name(cleaned)
}

/// Rewrites `src` into `dst` with the metadata preamble removed.
///
/// Kept lines are the sample accession marker, the table header and every
/// line after it. An existing `dst` is deleted first, so rerunning a
/// pipeline never appends to a stale cleaned file. When `src` has no
/// table header at all, no `dst` is left behind and
/// [`BetaRefError::MalformedMatrix`] is returned.
pub fn strip_metadata(src: &Path, dst: &Path) -> Result<()> {
    if dst.exists() {
        fs::remove_file(dst)?;
    }

    let reader = BufReader::new(File::open(src)?);
    let mut writer = BufWriter::new(File::create(dst)?);
    let mut in_table = false;

    for line in reader.lines() {
        let line = line?;
        // Normalizes CRLF input to plain LF output.
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.starts_with(SAMPLE_ACCESSION_MARKER) {
            writeln!(writer, "{line}")?;
        } else if in_table {
            writeln!(writer, "{line}")?;
        } else if is_table_header(line) {
            in_table = true;
            writeln!(writer, "{line}")?;
        }
    }

    if !in_table {
        drop(writer);
        fs::remove_file(dst)?;
        return Err(BetaRefError::malformed(
            src,
            "no table header line found while stripping metadata",
        ));
    }

    writer.flush()?;
    debug!("stripped {} into {}", src.display(), dst.display());
    Ok(())
}
