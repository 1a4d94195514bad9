//! Scoring a measurement against a benchmark run.
//!
//! Every subscore is a percentile rank of the measurement's raw value within
//! the selected projects' column, scaled to 0–1 (inverted for metrics where
//! lower is better). Composites sum their subscores:
//!
//! - clarity (0–1): comment density
//! - complexity (0–2): overly complex files, duplicate lines
//! - architecture (0–3): propagation cost, core size (full credit when the
//!   design has no core)
//! - overall (0–5): clarity + complexity + architecture
//!
//! Composites are rounded to two decimals once; the letter grade is taken
//! from the rounded value.

pub(crate) mod report;

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::benchmark::{
    Benchmark, BenchmarkGenerator, BenchmarkRequest, BenchmarkRun, GradePercentiles,
    GradeThresholds, SelectionAudit, find_benchmark, load_run,
};
use crate::config::Config;
use crate::corpus::{self, Case, Composite, Direction, Metric};
use crate::error::{Error, Result};
use crate::measurement::Measurement;
use crate::stats::{percentile_of_score, round2};

/// Explanation key for the architecture-type branch.
pub const CORE_EXPLANATION: &str = "core";

/// Letter grade relative to the comparison projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    F,
}

impl Letter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grade `value` by strict comparison against the cut points, best first.
pub fn letter_for(value: f64, t: &GradeThresholds) -> Letter {
    if value > t.a {
        Letter::A
    } else if value > t.b {
        Letter::B
    } else if value > t.c {
        Letter::C
    } else if value > t.d {
        Letter::D
    } else {
        Letter::F
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeScore {
    pub composite: Composite,
    pub value: f64,
    pub grade: Letter,
}

/// Scores for one measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCard {
    /// Clarity, complexity, architecture, overall.
    pub scores: Vec<CompositeScore>,
    /// Keyed by metric name, plus [`CORE_EXPLANATION`].
    pub explanations: BTreeMap<String, String>,
}

/// One stored score row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementScore {
    pub name: String,
    pub grade: Letter,
    pub grade_value: f64,
}

impl ScoreCard {
    pub fn get(&self, composite: Composite) -> Option<&CompositeScore> {
        self.scores.iter().find(|s| s.composite == composite)
    }

    pub fn value(&self, composite: Composite) -> Option<f64> {
        self.get(composite).map(|s| s.value)
    }

    pub fn grade(&self, composite: Composite) -> Option<Letter> {
        self.get(composite).map(|s| s.grade)
    }

    pub fn rows(&self) -> Vec<MeasurementScore> {
        self.scores
            .iter()
            .map(|s| MeasurementScore {
                name: s.composite.to_string(),
                grade: s.grade,
                grade_value: s.value,
            })
            .collect()
    }
}

/// Where the `score` command takes its benchmarks from.
pub enum RunSource<'a> {
    /// A run saved by `benchmark --save`; it must have been requested for
    /// `language`.
    Saved { path: &'a Path, language: &'a str },
    /// A fresh run for the measurement's size and architecture.
    Generate {
        language: &'a str,
        topics: &'a str,
        safe_default: bool,
    },
}

pub fn run(config: Config, measurement_path: &Path, source: RunSource, json: bool) -> Result<()> {
    let measurement = Measurement::from_json_file(measurement_path)?;

    let run = match source {
        RunSource::Saved { path, language } => {
            let run = load_run(path)?;
            if run.language != language {
                return Err(Error::RunLanguage {
                    expected: language.to_string(),
                    found: run.language,
                });
            }
            run
        }
        RunSource::Generate {
            language,
            topics,
            safe_default,
        } => {
            let request = BenchmarkRequest {
                uloc: measurement.useful_lines_of_code,
                language: language.to_string(),
                topics: topics.to_string(),
                is_core: measurement.is_core,
            };
            let generator = BenchmarkGenerator::new(config);
            if safe_default {
                generator.get_benchmarks_or_default(&request)?
            } else {
                generator.get_benchmarks(&request)?
            }
        }
    };

    let card = score_run(&run, &measurement)?;
    let method = run.audit.selection_method;
    let num_projects = run.audit.num_projects;

    if json {
        report::print_json(&card, &measurement, method, num_projects)?;
    } else {
        report::print_report(&card, &measurement, method, num_projects);
    }

    Ok(())
}

/// Score `measurement` against a benchmark run.
pub fn score_run(run: &BenchmarkRun, measurement: &Measurement) -> Result<ScoreCard> {
    score(
        &run.benchmarks,
        &run.audit,
        &run.grade_percentiles,
        measurement,
    )
}

/// Score `measurement` using benchmarks, the selection they came from, and
/// the grade cut points.
pub fn score(
    benchmarks: &[Benchmark],
    audit: &SelectionAudit,
    grades: &GradePercentiles,
    measurement: &Measurement,
) -> Result<ScoreCard> {
    let cases = audit.cases()?;
    let mut scorer = Scorer {
        benchmarks,
        cases: &cases,
        explanations: BTreeMap::new(),
    };

    let clarity = round2(scorer.subscore(measurement, Metric::UsefulCommentDensity));

    let complexity = round2(
        scorer.subscore(measurement, Metric::PercentFilesOverlyComplex)
            + scorer.subscore(measurement, Metric::PercentDuplicateUloc),
    );

    let mut architecture = scorer.subscore(measurement, Metric::PropagationCost);
    if measurement.is_core {
        scorer.explain(
            CORE_EXPLANATION,
            "Core type of architecture is True, measuring core size".to_string(),
        );
        architecture += scorer.subscore(measurement, Metric::CoreSize);
    } else {
        scorer.explain(
            CORE_EXPLANATION,
            "Core type of architecture is False, full credit for core size".to_string(),
        );
        architecture += 1.0;
    }
    let architecture = round2(architecture);

    let overall = round2(clarity + complexity + architecture);

    let scores = [
        (Composite::Clarity, clarity),
        (Composite::Complexity, complexity),
        (Composite::Architecture, architecture),
        (Composite::Overall, overall),
    ]
    .into_iter()
    .map(|(composite, value)| CompositeScore {
        composite,
        value,
        grade: letter_for(value, grades.get(composite)),
    })
    .collect();

    Ok(ScoreCard {
        scores,
        explanations: scorer.explanations,
    })
}

/// Per-call scoring state; the explanation map starts empty every time.
struct Scorer<'a> {
    benchmarks: &'a [Benchmark],
    cases: &'a [Case],
    explanations: BTreeMap<String, String>,
}

impl Scorer<'_> {
    fn explain(&mut self, key: &str, text: String) {
        self.explanations.insert(key.to_string(), text);
    }

    /// 0–1 subscore for one metric. Missing benchmark or reference data
    /// contributes 0 and leaves an explanation.
    fn subscore(&mut self, measurement: &Measurement, metric: Metric) -> f64 {
        if find_benchmark(self.benchmarks, metric).is_none() {
            log::warn!("no benchmark for {metric}, scoring it as 0");
            self.explain(metric.as_str(), format!("No benchmark found for: {metric}"));
            return 0.0;
        }

        let column = corpus::metric_column(self.cases, metric);
        let Some(pct) = percentile_of_score(&column, measurement.value(metric)) else {
            log::warn!("no reference values for {metric}, scoring it as 0");
            self.explain(metric.as_str(), format!("No reference data for: {metric}"));
            return 0.0;
        };

        let score = match metric.direction() {
            Direction::HigherIsBetter => pct / 100.0,
            Direction::LowerIsBetter => (100.0 - pct) / 100.0,
        };
        self.explain(
            metric.as_str(),
            format!("{metric} percentile: {pct:.1} (+{score:.2})"),
        );
        score
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
