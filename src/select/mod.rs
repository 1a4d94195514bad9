//! Similarity selection: narrow a corpus to the projects most comparable to
//! a target.
//!
//! Tiers are tried in order and the first one that keeps at least
//! `k_nearest` cases wins:
//!
//! 1. topic overlap and similar size,
//! 2. similar size only,
//! 3. the `k_nearest` projects closest in size (always succeeds on a
//!    non-empty corpus).
//!
//! When `use_architecture_filter` is set the corpus is first restricted to
//! cases with the same core/non-core architecture as the target.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::LanguageSettings;
use crate::corpus::Case;
use crate::corpus::topics::informative_topics;

/// Which tier produced a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMethod {
    #[serde(rename = "Topic and Similar Size")]
    TopicAndSimilarSize,
    #[serde(rename = "Similar Size")]
    SimilarSize,
    #[serde(rename = "Nearest Projects")]
    NearestProjects,
}

impl SelectionMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopicAndSimilarSize => "Topic and Similar Size",
            Self::SimilarSize => "Similar Size",
            Self::NearestProjects => "Nearest Projects",
        }
    }
}

impl fmt::Display for SelectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The chosen subset and the tier that chose it.
#[derive(Debug, Clone)]
pub struct SelectionResult {
    pub cases: Vec<Case>,
    pub method: SelectionMethod,
}

/// Select the comparable subset of `corpus` for a target project.
pub fn select(
    corpus: &[Case],
    target_loc: u64,
    target_topics: &BTreeSet<String>,
    target_is_core: bool,
    settings: &LanguageSettings,
) -> SelectionResult {
    let min_cases = settings.k_nearest;

    let pool = if settings.use_architecture_filter {
        filter_architecture(corpus, target_is_core)
    } else {
        corpus.to_vec()
    };

    let topics = informative_topics(target_topics);
    if settings.use_topics && !topics.is_empty() {
        let by_topic = filter_topics(&pool, &topics);
        let by_topic_and_size = filter_size(&by_topic, target_loc, settings.size_tolerance);
        if by_topic_and_size.len() >= min_cases {
            return selected(by_topic_and_size, SelectionMethod::TopicAndSimilarSize);
        }
        log::debug!(
            "topic tier kept {} of {} cases, need {min_cases}",
            by_topic_and_size.len(),
            pool.len()
        );
    }

    let by_size = filter_size(&pool, target_loc, settings.size_tolerance);
    if by_size.len() >= min_cases {
        return selected(by_size, SelectionMethod::SimilarSize);
    }
    log::debug!(
        "size tier kept {} of {} cases, need {min_cases}",
        by_size.len(),
        pool.len()
    );

    selected(
        nearest(&pool, target_loc, min_cases),
        SelectionMethod::NearestProjects,
    )
}

fn selected(cases: Vec<Case>, method: SelectionMethod) -> SelectionResult {
    log::info!("selected {} cases by {method}", cases.len());
    SelectionResult { cases, method }
}

/// Cases whose core/non-core flag matches the target.
pub fn filter_architecture(cases: &[Case], is_core: bool) -> Vec<Case> {
    cases.iter().filter(|c| c.core == is_core).cloned().collect()
}

/// Cases sharing at least one tag with `topics`.
pub fn filter_topics(cases: &[Case], topics: &BTreeSet<String>) -> Vec<Case> {
    cases
        .iter()
        .filter(|c| !c.tags().is_disjoint(topics))
        .cloned()
        .collect()
}

/// Cases whose size lies strictly inside `target_loc ± target_loc * tolerance`.
pub fn filter_size(cases: &[Case], target_loc: u64, tolerance: f64) -> Vec<Case> {
    let target = target_loc as f64;
    let diff = target * tolerance;
    let (low, high) = (target - diff, target + diff);
    cases
        .iter()
        .filter(|c| {
            let size = c.useful_lines_of_code as f64;
            size > low && size < high
        })
        .cloned()
        .collect()
}

/// The `k` cases closest in size to `target_loc`, nearest first. Equal
/// distances keep corpus order.
pub fn nearest(cases: &[Case], target_loc: u64, k: usize) -> Vec<Case> {
    let mut ranked: Vec<&Case> = cases.iter().collect();
    ranked.sort_by_key(|c| c.useful_lines_of_code.abs_diff(target_loc));
    ranked.into_iter().take(k).cloned().collect()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
