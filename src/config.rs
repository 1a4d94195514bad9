//! Language settings and dataset table.
//!
//! The built-in table covers Java, C++, C and C#. A `codebench.toml` file can
//! override any setting or add languages; entries merge over the defaults and
//! keys left out keep their default values.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "codebench.toml";

/// Default directory holding the per-language datasets.
pub const DEFAULT_DATASET_DIR: &str = "resources";

/// Similarity and benchmark settings for one language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageSettings {
    /// Percentile used as the upper band of lower-is-better benchmarks.
    pub upper_threshold: f64,
    /// Half-width of the size window as a fraction of the target ULOC.
    pub size_tolerance: f64,
    /// Minimum number of cases a tier must keep; also the nearest-neighbor count.
    pub k_nearest: usize,
    pub use_topics: bool,
    pub use_architecture_filter: bool,
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self {
            upper_threshold: 75.0,
            size_tolerance: 0.4,
            k_nearest: 25,
            use_topics: true,
            use_architecture_filter: false,
        }
    }
}

impl LanguageSettings {
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !(0.0..=100.0).contains(&self.upper_threshold) {
            return Err(format!(
                "upper_threshold must be within 0-100, got {}",
                self.upper_threshold
            ));
        }
        if self.size_tolerance.is_nan() || self.size_tolerance < 0.0 {
            return Err(format!(
                "size_tolerance must be non-negative, got {}",
                self.size_tolerance
            ));
        }
        if self.k_nearest == 0 {
            return Err("k_nearest must be at least 1".to_string());
        }
        Ok(())
    }
}

/// A supported language: its dataset file and settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageEntry {
    pub dataset: String,
    #[serde(flatten)]
    pub settings: LanguageSettings,
}

/// Resolved configuration: dataset directory plus the language table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub dataset_dir: PathBuf,
    pub languages: BTreeMap<String, LanguageEntry>,
}

impl Default for Config {
    fn default() -> Self {
        let languages = [
            ("Java", "java.csv"),
            ("C++", "cpp.csv"),
            ("C", "c.csv"),
            ("C#", "csharp.csv"),
        ]
        .into_iter()
        .map(|(name, dataset)| {
            (
                name.to_string(),
                LanguageEntry {
                    dataset: dataset.to_string(),
                    settings: LanguageSettings::default(),
                },
            )
        })
        .collect();
        Self {
            dataset_dir: PathBuf::from(DEFAULT_DATASET_DIR),
            languages,
        }
    }
}

/// On-disk shape of a language entry: every key optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LanguageFile {
    dataset: Option<String>,
    upper_threshold: Option<f64>,
    size_tolerance: Option<f64>,
    k_nearest: Option<usize>,
    use_topics: Option<bool>,
    use_architecture_filter: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    dataset_dir: Option<PathBuf>,
    #[serde(default)]
    languages: BTreeMap<String, LanguageFile>,
}

impl Config {
    /// Parse TOML and merge it over the built-in table.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents)
            .map_err(|e| Error::Config(format!("failed to parse {CONFIG_FILE}: {e}")))?;

        let mut config = Config::default();
        if let Some(dir) = file.dataset_dir {
            config.dataset_dir = dir;
        }
        for (name, overrides) in file.languages {
            let entry = config
                .languages
                .entry(name.clone())
                .or_insert_with(|| LanguageEntry {
                    dataset: default_dataset_name(&name),
                    settings: LanguageSettings::default(),
                });
            overrides.apply(entry);
            entry
                .settings
                .validate()
                .map_err(|e| Error::Config(format!("language {name}: {e}")))?;
        }
        Ok(config)
    }

    /// Load the configuration.
    ///
    /// An explicit path must exist and parse. Without one, `codebench.toml`
    /// in the working directory is used when present, else the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let contents = fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("cannot read {}: {e}", path.display()))
            })?;
            log::debug!("loaded config from {}", path.display());
            return Self::from_toml_str(&contents);
        }

        match fs::read_to_string(CONFIG_FILE) {
            Ok(contents) => {
                log::debug!("loaded config from {CONFIG_FILE}");
                Self::from_toml_str(&contents)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => {
                log::warn!("failed to read {CONFIG_FILE}: {e}; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Settings entry for `language`, or `UnsupportedLanguage`.
    pub fn language(&self, language: &str) -> Result<&LanguageEntry> {
        self.languages
            .get(language)
            .ok_or_else(|| Error::UnsupportedLanguage(language.to_string()))
    }

    /// Full path of the dataset for `language`.
    pub fn dataset_path(&self, language: &str) -> Result<PathBuf> {
        let entry = self.language(language)?;
        Ok(self.dataset_dir.join(&entry.dataset))
    }
}

/// Print the supported languages with their datasets and settings.
pub fn print_languages(config: &Config, json: bool) -> Result<()> {
    if json {
        return crate::report_helpers::print_json_stdout(config);
    }

    let separator = crate::report_helpers::separator(72);
    println!("Datasets: {}", config.dataset_dir.display());
    println!("{separator}");
    println!(
        " {:<10} {:<16} {:>6} {:>9} {:>5} {:>7} {:>5}",
        "Language", "Dataset", "Upper", "Tolerance", "K", "Topics", "Arch"
    );
    println!("{separator}");
    for (name, entry) in &config.languages {
        let s = &entry.settings;
        println!(
            " {:<10} {:<16} {:>6.1} {:>9.2} {:>5} {:>7} {:>5}",
            name,
            entry.dataset,
            s.upper_threshold,
            s.size_tolerance,
            s.k_nearest,
            if s.use_topics { "yes" } else { "no" },
            if s.use_architecture_filter { "yes" } else { "no" },
        );
    }
    println!("{separator}");
    Ok(())
}

impl LanguageFile {
    fn apply(self, entry: &mut LanguageEntry) {
        if let Some(dataset) = self.dataset {
            entry.dataset = dataset;
        }
        let s = &mut entry.settings;
        if let Some(v) = self.upper_threshold {
            s.upper_threshold = v;
        }
        if let Some(v) = self.size_tolerance {
            s.size_tolerance = v;
        }
        if let Some(v) = self.k_nearest {
            s.k_nearest = v;
        }
        if let Some(v) = self.use_topics {
            s.use_topics = v;
        }
        if let Some(v) = self.use_architecture_filter {
            s.use_architecture_filter = v;
        }
    }
}

/// `Go` -> `go.csv`, `Objective-C` -> `objective-c.csv`.
fn default_dataset_name(language: &str) -> String {
    format!("{}.csv", language.to_lowercase())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
