use serde::Serialize;

use super::{Letter, ScoreCard};
use crate::error::Result;
use crate::measurement::Measurement;
use crate::report_helpers::{self, format_thousands, humanize};
use crate::select::SelectionMethod;

/// Print the composite scores and the per-metric explanations as a table.
pub fn print_report(
    card: &ScoreCard,
    measurement: &Measurement,
    method: SelectionMethod,
    num_projects: usize,
) {
    let separator = report_helpers::separator(66);

    println!("Code Quality Score");
    println!("{separator}");
    println!(" Revision:      {}", measurement.revision_id);
    println!(
        " Size:          {} ULOC",
        format_thousands(measurement.useful_lines_of_code)
    );
    println!(" Compared with: {num_projects} projects ({method})");
    println!("{separator}");
    println!(" {:<25} {:>8} {:>8}   {:<5}", "Composite", "Score", "Max", "Grade");
    println!("{separator}");

    for s in &card.scores {
        println!(
            " {:<25} {:>8.2} {:>8.0}   {:<5}",
            humanize(s.composite.as_str()),
            s.value,
            s.composite.max_value(),
            s.grade.as_str(),
        );
    }

    println!("{separator}");

    if card.explanations.is_empty() {
        return;
    }

    println!();
    println!(" Explanations");
    println!("{separator}");
    for (key, text) in &card.explanations {
        println!(" {:<30} {text}", humanize(key));
    }
    println!("{separator}");
}

#[derive(Serialize)]
struct JsonComposite<'a> {
    name: &'a str,
    value: f64,
    max: f64,
    grade: Letter,
}

/// JSON-serializable representation of a score card.
#[derive(Serialize)]
struct JsonScoreReport<'a> {
    revision_id: &'a str,
    useful_lines_of_code: u64,
    selection_method: SelectionMethod,
    num_projects: usize,
    scores: Vec<JsonComposite<'a>>,
    explanations: &'a std::collections::BTreeMap<String, String>,
}

/// Serialize the score card to pretty-printed JSON and print to stdout.
pub fn print_json(
    card: &ScoreCard,
    measurement: &Measurement,
    method: SelectionMethod,
    num_projects: usize,
) -> Result<()> {
    let json = JsonScoreReport {
        revision_id: &measurement.revision_id,
        useful_lines_of_code: measurement.useful_lines_of_code,
        selection_method: method,
        num_projects,
        scores: card
            .scores
            .iter()
            .map(|s| JsonComposite {
                name: s.composite.as_str(),
                value: s.value,
                max: s.composite.max_value(),
                grade: s.grade,
            })
            .collect(),
        explanations: &card.explanations,
    };
    report_helpers::print_json_stdout(&json)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
