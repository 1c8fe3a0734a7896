#![allow(dead_code)]

use std::fmt::Write as _;
use std::fs;
use std::path::{
    Path,
    PathBuf,
};

/// One table row: probe identifier plus one beta value per sample.
/// `None` is written as `NA`.
pub type Row = (&'static str, Vec<Option<f64>>);

fn table_lines(samples: &[&str], rows: &[Row], quote: bool) -> String {
    let mut out = String::new();
    let field = |name: &str| {
        if quote {
            format!("\"{name}\"")
        } else {
            name.to_string()
        }
    };

    let header = std::iter::once(field("ID_REF"))
        .chain(samples.iter().map(|s| field(s)))
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header}").unwrap();

    for (probe, values) in rows {
        let values = values
            .iter()
            .map(|v| {
                // Debug formatting keeps the decimal point, so a column of
                // whole numbers still reads back as floats.
                v.map(|v| format!("{v:?}")).unwrap_or_else(|| "NA".to_string())
            })
            .collect::<Vec<_>>()
            .join("\t");
        writeln!(out, "{}\t{values}", field(probe)).unwrap();
    }
    out
}

/// Writes a faithful raw series matrix: metadata preamble, quoted header
/// and probe fields, and the table end marker.
pub fn write_raw_series_matrix(
    dir: &Path,
    name: &str,
    samples: &[&str],
    rows: &[Row],
) -> PathBuf {
    let mut content = String::new();
    writeln!(content, "!Series_title\t\"Methylation profiling by array\"")
        .unwrap();
    writeln!(content, "!Series_platform_id\t\"GPL13534\"").unwrap();
    let accessions = samples
        .iter()
        .map(|s| format!("\"{s}\""))
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(content, "!Sample_geo_accession\t{accessions}").unwrap();
    let tissues = samples
        .iter()
        .map(|_| "\"tissue: whole blood\"")
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(content, "!Sample_characteristics_ch1\t{tissues}").unwrap();
    writeln!(content, "!series_matrix_table_begin").unwrap();
    content.push_str(&table_lines(samples, rows, true));
    writeln!(content, "!series_matrix_table_end").unwrap();

    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Writes a bare beta-value table, the shape of a user-prepared input.
pub fn write_clean_table(
    dir: &Path,
    name: &str,
    samples: &[&str],
    rows: &[Row],
) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, table_lines(samples, rows, false)).unwrap();
    path
}

pub fn write_manifest(dir: &Path, lines: &[String]) -> PathBuf {
    let path = dir.join("file_list.txt");
    fs::write(&path, lines.join("\n") + "\n").unwrap();
    path
}

pub fn write_annotation(
    dir: &Path,
    entries: &[(&str, &str, &str)],
) -> PathBuf {
    let mut content = String::new();
    for (probe, chr, start) in entries {
        writeln!(content, "{probe},{chr},{start}").unwrap();
    }
    let path = dir.join("HumanMethylationSites.txt");
    fs::write(&path, content).unwrap();
    path
}
