//! Topic tag parsing.
//!
//! Topics arrive as loosely formatted strings: a space separated list as
//! shown on a repository page, a comma separated list, or the printed form of
//! a list (`['android', 'sdk']`). All of them normalize to the same set of
//! lowercase tags.

use std::collections::BTreeSet;

/// Tags too generic to say anything about what a project does. They are
/// removed from the target's topics before the topic tier runs.
pub const UNWANTED_TOPICS: &[&str] = &[
    "api",
    "app",
    "application",
    "awesome",
    "c",
    "c-plus-plus",
    "cpp",
    "csharp",
    "c-sharp",
    "dotnet",
    "framework",
    "github",
    "hacktoberfest",
    "java",
    "library",
    "open-source",
    "opensource",
    "sdk",
    "software",
    "tool",
    "tools",
];

/// Split a topic string into a set of lowercase tags. Brackets and quotes are
/// dropped, commas and any whitespace separate tags. Input with no usable
/// tokens yields an empty set.
pub fn parse_topics(raw: &str) -> BTreeSet<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .map(|token| token.trim_matches(|c: char| matches!(c, '[' | ']' | '\'' | '"')))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Remove stoplisted tags.
pub fn informative_topics(topics: &BTreeSet<String>) -> BTreeSet<String> {
    topics
        .iter()
        .filter(|t| !UNWANTED_TOPICS.contains(&t.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "topics_test.rs"]
mod tests;
