//! Benchmark generation.
//!
//! A benchmark summarizes one raw metric over the selected comparison
//! projects as three percentiles (25th, 50th and an upper threshold). Grade
//! percentiles are the A/B/C/D cut points of each composite score over the
//! whole language corpus, so letters mean the same thing for every project
//! size. Benchmark bands are for display; scoring ranks against the full
//! columns kept in the [`SelectionAudit`].

pub mod audit;
pub(crate) mod report;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{Config, LanguageSettings};
use crate::corpus::{self, Case, Composite, Direction, Metric, topics::parse_topics};
use crate::error::{Error, Result};
use crate::select::select;
use crate::stats::percentile;

pub use audit::SelectionAudit;

/// ULOC used when a caller substitutes a default benchmark request.
pub const SAFE_LOC: u64 = 120_000;
/// Language used when a caller substitutes a default benchmark request.
pub const SAFE_LANGUAGE: &str = "Java";

/// Grade cut points, as percentiles of a composite score column.
const GRADE_PERCENTILES: [f64; 4] = [75.0, 50.0, 25.0, 5.0];

/// Three-point percentile summary of one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    #[serde(rename = "measurement_name")]
    pub metric: Metric,
    pub percentile_25: f64,
    pub percentile_50: f64,
    pub upper_threshold: f64,
    pub num_cases: usize,
}

/// Scores strictly above `a` earn an A, above `b` a B, and so on; anything
/// not above `d` is an F.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeThresholds {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradePercentiles {
    pub architecture: GradeThresholds,
    pub complexity: GradeThresholds,
    pub clarity: GradeThresholds,
    pub overall: GradeThresholds,
}

impl GradePercentiles {
    pub fn get(&self, composite: Composite) -> &GradeThresholds {
        match composite {
            Composite::Architecture => &self.architecture,
            Composite::Complexity => &self.complexity,
            Composite::Clarity => &self.clarity,
            Composite::Overall => &self.overall,
        }
    }
}

/// Everything one benchmark run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRun {
    /// Language of the project the run was requested for. Kept even when the
    /// safe default supplied the data.
    pub language: String,
    pub benchmarks: Vec<Benchmark>,
    pub grade_percentiles: GradePercentiles,
    pub audit: SelectionAudit,
}

/// The project a run is benchmarked for.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRequest {
    pub uloc: u64,
    pub language: String,
    pub topics: String,
    pub is_core: bool,
}

impl BenchmarkRequest {
    /// The request substituted when no comparable projects exist for the
    /// real one.
    pub fn safe_default(is_core: bool) -> Self {
        Self {
            uloc: SAFE_LOC,
            language: SAFE_LANGUAGE.to_string(),
            topics: String::new(),
            is_core,
        }
    }
}

/// Look up the benchmark for `metric`.
pub fn find_benchmark(benchmarks: &[Benchmark], metric: Metric) -> Option<&Benchmark> {
    benchmarks.iter().find(|b| b.metric == metric)
}

/// Compute benchmark bands over the selected cases.
///
/// Fails with `NoSimilarCases` on an empty selection. A metric with no values
/// in the selection gets no benchmark.
pub fn generate(cases: &[Case], settings: &LanguageSettings) -> Result<Vec<Benchmark>> {
    if cases.is_empty() {
        return Err(Error::NoSimilarCases);
    }

    let benchmarks = Metric::ALL
        .iter()
        .filter_map(|&metric| {
            let upper = match metric.direction() {
                Direction::LowerIsBetter => settings.upper_threshold,
                Direction::HigherIsBetter => 75.0,
            };
            let benchmark = metric_benchmark(cases, metric, upper);
            if benchmark.is_none() {
                log::warn!("no values for {metric} in {} cases", cases.len());
            }
            benchmark
        })
        .collect();

    Ok(benchmarks)
}

fn metric_benchmark(cases: &[Case], metric: Metric, upper: f64) -> Option<Benchmark> {
    let column = corpus::metric_column(cases, metric);
    Some(Benchmark {
        metric,
        percentile_25: percentile(&column, 25.0)?,
        percentile_50: percentile(&column, 50.0)?,
        upper_threshold: percentile(&column, upper)?,
        num_cases: cases.len(),
    })
}

/// A/B/C/D cut points for every composite over `cases`.
pub fn grade_percentiles(cases: &[Case]) -> Result<GradePercentiles> {
    let thresholds = |composite: Composite| -> Result<GradeThresholds> {
        let column = corpus::composite_column(cases, composite);
        let cut = |p: f64| {
            percentile(&column, p).ok_or_else(|| Error::MissingColumn(format!("{composite}_score")))
        };
        let [a, b, c, d] = GRADE_PERCENTILES;
        Ok(GradeThresholds {
            a: cut(a)?,
            b: cut(b)?,
            c: cut(c)?,
            d: cut(d)?,
        })
    };

    Ok(GradePercentiles {
        architecture: thresholds(Composite::Architecture)?,
        complexity: thresholds(Composite::Complexity)?,
        clarity: thresholds(Composite::Clarity)?,
        overall: thresholds(Composite::Overall)?,
    })
}

/// Language-level driver: loads the corpus, selects comparable projects,
/// records the selection and generates benchmarks.
pub struct BenchmarkGenerator {
    config: Config,
}

impl BenchmarkGenerator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Benchmarks for `request`, loading the language's dataset from disk.
    pub fn get_benchmarks(&self, request: &BenchmarkRequest) -> Result<BenchmarkRun> {
        let entry = self.config.language(&request.language)?;
        let path = self.config.dataset_path(&request.language)?;
        let corpus = corpus::load_cases(&path)?;
        log::info!(
            "benchmarking {} at {} ULOC against {} cases",
            request.language,
            request.uloc,
            corpus.len()
        );
        benchmarks_for_corpus(&corpus, request, &entry.settings)
    }

    /// Like [`get_benchmarks`](Self::get_benchmarks), retrying with
    /// [`BenchmarkRequest::safe_default`] when no comparable projects exist.
    pub fn get_benchmarks_or_default(&self, request: &BenchmarkRequest) -> Result<BenchmarkRun> {
        match self.get_benchmarks(request) {
            Err(e) if e.is_recoverable() => {
                log::warn!("{e}; falling back to {SAFE_LANGUAGE} at {SAFE_LOC} ULOC");
                let mut run =
                    self.get_benchmarks(&BenchmarkRequest::safe_default(request.is_core))?;
                run.language = request.language.clone();
                Ok(run)
            }
            other => other,
        }
    }
}

/// Select, audit and generate over an in-memory corpus. Bands come from the
/// selection, grade cut points from all of `corpus`.
pub fn benchmarks_for_corpus(
    corpus: &[Case],
    request: &BenchmarkRequest,
    settings: &LanguageSettings,
) -> Result<BenchmarkRun> {
    let topics = parse_topics(&request.topics);
    let selection = select(corpus, request.uloc, &topics, request.is_core, settings);
    let audit = SelectionAudit::from_selection(&selection)?;
    if selection.cases.is_empty() {
        log::info!(
            "no similar cases for {} at {} ULOC",
            request.language,
            request.uloc
        );
    }
    let benchmarks = generate(&selection.cases, settings)?;
    let grade_percentiles = grade_percentiles(corpus)?;
    Ok(BenchmarkRun {
        language: request.language.clone(),
        benchmarks,
        grade_percentiles,
        audit,
    })
}

/// Options of the `benchmark` command beyond the request itself.
#[derive(Debug, Clone, Default)]
pub struct RunOptions<'a> {
    pub json: bool,
    /// Print (or embed in JSON) the CSV snapshot of the selected projects.
    pub show_cases: bool,
    /// Write the run to this file so it can be scored later.
    pub save: Option<&'a Path>,
    /// Retry with the default request when no comparable projects exist.
    pub safe_default: bool,
}

pub fn run(config: Config, request: &BenchmarkRequest, opts: &RunOptions) -> Result<()> {
    let generator = BenchmarkGenerator::new(config);
    let run = if opts.safe_default {
        generator.get_benchmarks_or_default(request)?
    } else {
        generator.get_benchmarks(request)?
    };

    if let Some(path) = opts.save {
        save_run(&run, path)?;
    }

    if opts.json {
        report::print_json(&run, request, opts.show_cases)?;
    } else {
        report::print_report(&run, request);
        if opts.show_cases {
            println!();
            print!("{}", run.audit.project_data);
        }
    }

    Ok(())
}

/// Write a run as pretty JSON.
pub fn save_run(run: &BenchmarkRun, path: &Path) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(run)?)?;
    log::info!("saved benchmark run to {}", path.display());
    Ok(())
}

/// Read a run written by [`save_run`].
pub fn load_run(path: &Path) -> Result<BenchmarkRun> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
