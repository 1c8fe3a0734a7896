use std::path::Path;

use crate::error::{
    BetaRefError,
    Result,
};

pub mod series;
mod write;

pub use write::write_reference;

/// Checks that every path names a non-empty regular file.
///
/// Run over all manifest inputs before any cleaning or merging starts, so
/// a typo in the manifest aborts the run before hours of work, not after.
/// Fails on the first offender with [`BetaRefError::MissingFile`].
pub fn check_files_exist<'a, I>(paths: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Path>, {
    for path in paths {
        let ok = std::fs::metadata(path)
            .map(|meta| meta.is_file() && meta.len() > 0)
            .unwrap_or(false);
        if !ok {
            return Err(BetaRefError::MissingFile(path.to_path_buf()));
        }
    }
    Ok(())
}
