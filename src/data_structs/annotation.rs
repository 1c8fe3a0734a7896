//! Probe-to-locus annotation lookup.

use std::path::Path;

use hashbrown::HashMap;
use log::debug;

use crate::error::{
    BetaRefError,
    Result,
};

/// Genomic location of a single methylation probe.
///
/// Chromosome and position are kept verbatim as text. The reference files
/// mix plain numbers with entries like `MULTI` or empty placeholders, so
/// no numeric interpretation is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeLocus {
    pub chr: String,
    pub start: String,
}

impl ProbeLocus {
    pub fn new(chr: impl Into<String>, start: impl Into<String>) -> Self {
        Self {
            chr: chr.into(),
            start: start.into(),
        }
    }
}

/// In-memory probe annotation, keyed by probe identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeMap {
    probes: HashMap<String, ProbeLocus>,
}

impl ProbeMap {
    /// Loads an annotation file.
    ///
    /// Every line is comma-separated with the probe identifier, chromosome
    /// and position in the first three fields. Extra fields are ignored.
    /// When a probe appears on several lines the last one wins.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;

        let mut probes = HashMap::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                BetaRefError::input_format(path, format!("line {}: {e}", idx + 1))
            })?;
            if record.len() < 3 {
                return Err(BetaRefError::input_format(
                    path,
                    format!(
                        "line {}: expected at least 3 comma-separated fields, got {}",
                        idx + 1,
                        record.len()
                    ),
                ));
            }
            probes.insert(
                record[0].to_owned(),
                ProbeLocus::new(&record[1], &record[2]),
            );
        }

        debug!("loaded {} probe loci from {}", probes.len(), path.display());
        Ok(Self { probes })
    }

    pub fn get(&self, probe_id: &str) -> Option<&ProbeLocus> {
        self.probes.get(probe_id)
    }

    pub fn contains(&self, probe_id: &str) -> bool {
        self.probes.contains_key(probe_id)
    }

    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }
}

impl FromIterator<(String, ProbeLocus)> for ProbeMap {
    fn from_iter<T: IntoIterator<Item = (String, ProbeLocus)>>(iter: T) -> Self {
        Self {
            probes: iter.into_iter().collect(),
        }
    }
}
