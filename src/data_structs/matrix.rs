//! The central beta-value table and the operations that combine them.

use std::path::Path;

use log::{
    debug,
    warn,
};
use polars::prelude::*;

use crate::data_structs::annotation::ProbeMap;
use crate::error::{
    BetaRefError,
    Result,
};
use crate::utils::is_numeric_dtype;

/// Probe identifier column, named as in GEO series matrix headers.
pub const PROBE_ID_COL: &str = "ID_REF";
/// Chromosome column appended by [`BetaMatrix::annotate`].
pub const CHR_COL: &str = "chr";
/// Position column appended by [`BetaMatrix::annotate`].
pub const START_COL: &str = "start";

/// A validated beta-value table.
///
/// Wraps a [`DataFrame`] and upholds these invariants:
///
/// 1. The first column is [`PROBE_ID_COL`] with dtype [`DataType::String`]
///    and no missing or duplicate values.
/// 2. Every other column except [`CHR_COL`] and [`START_COL`] is a numeric
///    sample column. Missing beta values are nulls, never sentinels.
#[derive(Debug, Clone, PartialEq)]
pub struct BetaMatrix {
    data: DataFrame,
}

impl BetaMatrix {
    /// Constructor for operations that cannot break the invariants.
    fn new(data: DataFrame) -> Self {
        Self { data }
    }

    /// Validates a freshly parsed table and wraps it.
    ///
    /// The probe column is moved to the front and cast to
    /// [`DataType::String`] when necessary. `origin` only serves error
    /// reporting. Sample columns that contain no values at all are
    /// tolerated whatever dtype the reader guessed for them.
    pub fn try_from_df(df: DataFrame, origin: &Path) -> Result<Self> {
        let mut df = df;
        let Some(id_idx) = df.get_column_index(PROBE_ID_COL) else {
            return Err(BetaRefError::malformed(
                origin,
                format!("missing {PROBE_ID_COL} column"),
            ));
        };

        if id_idx != 0 {
            let mut order: Vec<PlSmallStr> = Vec::with_capacity(df.width());
            order.push(PROBE_ID_COL.into());
            order.extend(
                df.get_column_names()
                    .into_iter()
                    .filter(|name| name.as_str() != PROBE_ID_COL)
                    .cloned(),
            );
            df = df.select(order)?;
        }

        if df.column(PROBE_ID_COL)?.dtype() != &DataType::String {
            let casted = df.column(PROBE_ID_COL)?.cast(&DataType::String)?;
            df.with_column(casted)?;
        }

        let ids = df.column(PROBE_ID_COL)?;
        if ids.null_count() > 0 {
            return Err(BetaRefError::malformed(
                origin,
                "empty probe identifiers",
            ));
        }
        if ids.n_unique()? != df.height() {
            return Err(BetaRefError::malformed(
                origin,
                "duplicate probe identifiers",
            ));
        }

        for column in df.get_columns().iter().skip(1) {
            let all_null = column.null_count() == column.len();
            if !is_numeric_dtype(column.dtype()) && !all_null {
                return Err(BetaRefError::malformed(
                    origin,
                    format!(
                        "non-numeric sample column {:?}",
                        column.name().as_str()
                    ),
                ));
            }
        }

        Ok(Self::new(df))
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn into_inner(self) -> DataFrame {
        self.data
    }

    pub fn height(&self) -> usize {
        self.data.height()
    }

    pub fn width(&self) -> usize {
        self.data.width()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Names of the sample columns, table order.
    pub fn sample_names(&self) -> Vec<&str> {
        self.data
            .get_column_names_str()
            .into_iter()
            .filter(|name| {
                *name != PROBE_ID_COL && *name != CHR_COL && *name != START_COL
            })
            .collect()
    }

    /// Full outer join with `other` on the probe column.
    ///
    /// The result holds the union of both probe sets. Probes present on
    /// one side only carry nulls in the other side's sample columns.
    /// Neither input is modified beyond being consumed.
    pub fn outer_join(self, other: BetaMatrix) -> Result<BetaMatrix> {
        let overlap = other
            .sample_names()
            .into_iter()
            .filter(|name| self.data.get_column_index(name).is_some())
            .collect::<Vec<_>>();
        if !overlap.is_empty() {
            warn!(
                "sample columns {overlap:?} appear in more than one input, \
                 right-hand copies are kept under a suffixed name"
            );
        }

        let joined = self.data.join(
            &other.data,
            [PROBE_ID_COL],
            [PROBE_ID_COL],
            JoinArgs::new(JoinType::Full)
                .with_coalesce(JoinCoalesce::CoalesceColumns),
        )?;
        Ok(Self::new(joined))
    }

    /// Folds any number of tables into one with repeated outer joins,
    /// left to right. Returns `Ok(None)` for an empty input.
    pub fn merge_all<I>(tables: I) -> Result<Option<BetaMatrix>>
    where
        I: IntoIterator<Item = BetaMatrix>,
    {
        let mut iter = tables.into_iter();
        let Some(first) = iter.next() else {
            return Ok(None);
        };
        let merged = iter.try_fold(first, |acc, next| {
            debug!(
                "merging {} probes into accumulated {}",
                next.height(),
                acc.height()
            );
            acc.outer_join(next)
        })?;
        Ok(Some(merged))
    }

    /// Attaches chromosome and position columns from `probes` and keeps
    /// only annotated rows.
    ///
    /// Row order of the surviving probes is preserved, no join involved.
    pub fn annotate(self, probes: &ProbeMap) -> Result<BetaMatrix> {
        let height = self.height();
        let (chrs, starts) = {
            let ids = self
                .data
                .column(PROBE_ID_COL)?
                .as_materialized_series()
                .str()?;
            let mut chrs: Vec<Option<&str>> = Vec::with_capacity(height);
            let mut starts: Vec<Option<&str>> = Vec::with_capacity(height);
            for id in ids {
                let locus = id.and_then(|probe| probes.get(probe));
                chrs.push(locus.map(|l| l.chr.as_str()));
                starts.push(locus.map(|l| l.start.as_str()));
            }
            (chrs, starts)
        };

        let mut df = self.data;
        df.with_column(Series::new(CHR_COL.into(), chrs))?;
        df.with_column(Series::new(START_COL.into(), starts))?;

        let keep = df.column(CHR_COL)?.as_materialized_series().is_not_null();
        let kept = df.filter(&keep)?;
        let dropped = height - kept.height();
        if dropped > 0 {
            debug!("dropped {dropped} probes without annotation");
        }
        Ok(Self::new(kept))
    }
}
