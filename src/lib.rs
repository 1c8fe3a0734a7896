//! # betaref
//!
//! `betaref` is a Rust library and command-line tool that merges DNA
//! methylation beta-value tables, as exported in the GEO series matrix
//! format, into a single chromosome-annotated reference table.
//!
//! Series matrix files arrive with a metadata preamble of `!`-prefixed
//! lines in front of the actual beta-value table. The crate strips that
//! preamble, loads each table with Polars, rounds the beta values,
//! narrows each file to the samples of interest, outer-joins everything
//! on the probe identifier, and finally attaches chromosome and position
//! from an Illumina-style probe annotation file.
//!
//! If you do not want to use betaref as crate, check out the `betaref`
//! CLI shipped with it.
//!
//! ## Key Features
//!
//! * **Manifest driven**: One TSV manifest ([`Manifest`]) lists all input
//!   files, whether each still needs cleaning and which sample columns to
//!   keep.
//! * **Validated tables**: Every loaded table becomes a [`BetaMatrix`],
//!   which guarantees a unique string probe column in front of numeric
//!   sample columns.
//! * **Lossless merging**: Outer joins keep the union of all probe sets.
//!   A probe missing from one file simply carries nulls in that file's
//!   sample columns, serialized as `NaN`.
//! * **Order-preserving annotation**: Probes without a known genomic
//!   locus are filtered out, everything else stays in merge order.
//!
//! Number of threads to be used can be configured with setting
//! `BETAREF_NUM_THREADS` environment variable.
//!
//! ## Usage
//!
//! ```no_run
//! use betaref::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manifest = Manifest::from_path("file_list.txt")?;
//!     check_files_exist(manifest.paths())?;
//!
//!     let mut tables = Vec::new();
//!     for (path, samples) in manifest.already_clean() {
//!         let matrix = SeriesMatrixReader::new(path)
//!             .with_samples(samples.clone())
//!             .finish()?;
//!         tables.push(matrix);
//!     }
//!
//!     let merged =
//!         BetaMatrix::merge_all(tables)?.ok_or("manifest listed no files")?;
//!     let probes = ProbeMap::from_path("HumanMethylationSites.txt")?;
//!     let annotated = merged.annotate(&probes)?;
//!     write_reference(&annotated, "reference_matrix.txt")?;
//!     Ok(())
//! }
//! ```

#[ctor::ctor]
fn init() {
    if let Ok(n) = std::env::var("BETAREF_NUM_THREADS") {
        std::env::set_var("POLARS_MAX_THREADS", n)
    }
}

pub mod data_structs;
pub mod error;
pub mod io;
pub mod prelude;
pub mod utils;

#[allow(unused_imports)]
use prelude::*;
