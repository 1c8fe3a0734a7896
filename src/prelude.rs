pub use crate::data_structs::annotation::{
    ProbeLocus,
    ProbeMap,
};
pub use crate::data_structs::manifest::{
    merge_entries,
    FileSelections,
    Manifest,
    SampleSelection,
};
pub use crate::data_structs::matrix::{
    BetaMatrix,
    CHR_COL,
    PROBE_ID_COL,
    START_COL,
};
pub use crate::error::BetaRefError;
pub use crate::io::series::{
    cleaned_path,
    strip_metadata,
    SeriesMatrixReader,
};
pub use crate::io::{
    check_files_exist,
    write_reference,
};
