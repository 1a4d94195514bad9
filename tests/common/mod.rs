// Dataset and measurement fixtures for integration tests
#![allow(dead_code)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use codebench::config::Config;

pub const HEADER: &str = "project_name,useful_lines_of_code,core,core_size,propagation_cost,\
percent_files_overly_complex,percent_duplicate_uloc,useful_comment_density,\
overall_score,architecture_score,complexity_score,clarity_score,topics";

/// One dataset row.
#[derive(Debug, Clone)]
pub struct Row {
    pub name: String,
    pub uloc: u64,
    pub core: &'static str,
    pub metric: f64,
    pub density: f64,
    pub topics: String,
}

impl Row {
    pub fn new(name: &str, uloc: u64, metric: f64) -> Self {
        Self {
            name: name.to_string(),
            uloc,
            core: "True",
            metric,
            density: metric,
            topics: String::new(),
        }
    }
}

/// Render rows as a dataset CSV. Composite columns scale with `metric`.
pub fn dataset_csv(rows: &[Row]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for r in rows {
        let _ = writeln!(
            out,
            "{},{},{},{m},{m},{m},{m},{d},{o},{a},{c},{l},\"{}\"",
            r.name,
            r.uloc,
            r.core,
            r.topics,
            m = r.metric,
            d = r.density,
            o = r.metric / 2.0,
            a = r.metric / 4.0,
            c = r.metric / 6.0,
            l = r.metric / 12.0,
        );
    }
    out
}

/// Write `rows` as `file` under `dir`.
pub fn write_dataset(dir: &Path, file: &str, rows: &[Row]) -> PathBuf {
    let path = dir.join(file);
    std::fs::write(&path, dataset_csv(rows)).expect("write dataset");
    path
}

/// Default language table reading datasets from `dir`.
pub fn config_for(dir: &Path) -> Config {
    Config {
        dataset_dir: dir.to_path_buf(),
        ..Config::default()
    }
}

/// `n` rows whose metrics run `1..=n`, all at `uloc`.
pub fn ramp(n: usize, uloc: u64) -> Vec<Row> {
    (1..=n)
        .map(|i| Row::new(&format!("project-{i}"), uloc, i as f64))
        .collect()
}

/// Measurement JSON in the native field names.
pub fn measurement_json(uloc: u64, value: f64, density: f64, is_core: bool) -> String {
    format!(
        r#"{{
  "propagation_cost": {value},
  "useful_lines_of_code": {uloc},
  "core_size": {value},
  "percent_files_overly_complex": {value},
  "useful_comment_density": {density},
  "percent_duplicate_uloc": {value},
  "revision_id": "a1b2c3d",
  "is_core": {is_core}
}}"#
    )
}
