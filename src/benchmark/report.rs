use serde::Serialize;

use super::{Benchmark, BenchmarkRequest, BenchmarkRun, GradePercentiles};
use crate::corpus::Composite;
use crate::error::Result;
use crate::report_helpers::{self, format_thousands, humanize};
use crate::select::SelectionMethod;

/// Print the benchmark bands and grade cut points as a table.
pub fn print_report(run: &BenchmarkRun, request: &BenchmarkRequest) {
    let separator = report_helpers::separator(66);

    println!(
        "Benchmarks: {} at {} ULOC",
        request.language,
        format_thousands(request.uloc)
    );
    println!("{separator}");
    println!(
        " Selection:     {} ({} projects)",
        run.audit.selection_method, run.audit.num_projects
    );
    if !request.topics.trim().is_empty() {
        println!(" Topics:        {}", request.topics.trim());
    }
    println!(
        " Architecture:  {}",
        if request.is_core { "core" } else { "no core" }
    );
    println!("{separator}");
    println!(
        " {:<30} {:>8} {:>8} {:>8} {:>6}",
        "Metric", "P25", "P50", "Upper", "Cases"
    );
    println!("{separator}");

    for b in &run.benchmarks {
        println!(
            " {:<30} {:>8.2} {:>8.2} {:>8.2} {:>6}",
            humanize(b.metric.as_str()),
            b.percentile_25,
            b.percentile_50,
            b.upper_threshold,
            b.num_cases,
        );
    }

    println!("{separator}");
    println!();
    println!(" Grade Cut Points (score must exceed)");
    println!("{separator}");
    println!(
        " {:<30} {:>8} {:>8} {:>8} {:>6}",
        "Composite", "A", "B", "C", "D"
    );
    println!("{separator}");
    for composite in Composite::ALL {
        let t = run.grade_percentiles.get(composite);
        println!(
            " {:<30} {:>8.2} {:>8.2} {:>8.2} {:>6.2}",
            humanize(composite.as_str()),
            t.a,
            t.b,
            t.c,
            t.d,
        );
    }
    println!("{separator}");
}

/// JSON-serializable representation of a benchmark run.
#[derive(Serialize)]
struct JsonBenchmarkReport<'a> {
    language: &'a str,
    uloc: u64,
    topics: &'a str,
    is_core: bool,
    selection_method: SelectionMethod,
    num_projects: usize,
    benchmarks: &'a [Benchmark],
    grade_percentiles: &'a GradePercentiles,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_data: Option<&'a str>,
}

/// Serialize the run to pretty-printed JSON and print to stdout. The CSV
/// snapshot of the selected projects is included only on request.
pub fn print_json(run: &BenchmarkRun, request: &BenchmarkRequest, with_cases: bool) -> Result<()> {
    let json = JsonBenchmarkReport {
        language: &request.language,
        uloc: request.uloc,
        topics: &request.topics,
        is_core: request.is_core,
        selection_method: run.audit.selection_method,
        num_projects: run.audit.num_projects,
        benchmarks: &run.benchmarks,
        grade_percentiles: &run.grade_percentiles,
        project_data: with_cases.then_some(run.audit.project_data.as_str()),
    };
    report_helpers::print_json_stdout(&json)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
