//! Fixture builders shared by unit tests.

use crate::corpus::Case;

/// A case with every metric and composite set to `value`.
pub fn case(name: &str, uloc: u64, value: f64) -> Case {
    Case {
        project_name: name.to_string(),
        useful_lines_of_code: uloc,
        core: true,
        core_size: Some(value),
        propagation_cost: Some(value),
        percent_files_overly_complex: Some(value),
        percent_duplicate_uloc: Some(value),
        useful_comment_density: Some(value),
        overall_score: Some(value),
        architecture_score: Some(value),
        complexity_score: Some(value),
        clarity_score: Some(value),
        topics: String::new(),
    }
}

/// Same as [`case`] with topic tags.
pub fn case_with_topics(name: &str, uloc: u64, topics: &str) -> Case {
    Case {
        topics: topics.to_string(),
        ..case(name, uloc, 1.0)
    }
}

/// `n` cases whose metric values are `1..=n`, all at the same size.
pub fn ramp(n: usize, uloc: u64) -> Vec<Case> {
    (1..=n)
        .map(|i| case(&format!("p{i}"), uloc, i as f64))
        .collect()
}
