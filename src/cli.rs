/// CLI argument definitions for the `cb` command.
///
/// Defines the subcommands and their arguments using the `clap` derive
/// macros; long help text lives in `cli_help`.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::cli_help;

/// Top-level CLI parser: global options plus a subcommand selector.
#[derive(Parser)]
#[command(
    name = "cb",
    version,
    about = "Corpus-relative benchmarks and grades for code-quality measurements"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options accepted by every subcommand.
#[derive(Args)]
pub struct GlobalArgs {
    /// Config file (default: ./codebench.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the per-language datasets (overrides the config)
    #[arg(long, global = true)]
    pub datasets: Option<PathBuf>,

    /// Log selection and benchmark details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate benchmarks from the comparable projects of a language
    #[command(long_about = cli_help::BENCHMARK)]
    Benchmark {
        /// Language of the project (e.g. Java, C++, C, C#)
        language: String,

        /// Useful lines of code of the project
        uloc: u64,

        /// Project topics, comma or space separated
        #[arg(long, default_value = "")]
        topics: String,

        /// The project has no core (hierarchical or multi-core design)
        #[arg(long)]
        no_core: bool,

        /// Show the selected projects as CSV
        #[arg(long)]
        show_cases: bool,

        /// Save the run as JSON for a later `cb score --run`
        #[arg(long)]
        save: Option<PathBuf>,

        /// Fall back to Java at 120,000 ULOC when nothing comparable exists
        #[arg(long)]
        safe_default: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a measurement against comparable projects
    #[command(long_about = cli_help::SCORE)]
    Score {
        /// Language of the measured project
        language: String,

        /// Measurement JSON file
        measurement: PathBuf,

        /// Project topics, comma or space separated
        #[arg(long, default_value = "")]
        topics: String,

        /// Score against a run saved with `cb benchmark --save` for the same language
        #[arg(long, conflicts_with_all = ["topics", "safe_default"])]
        run: Option<PathBuf>,

        /// Fall back to Java at 120,000 ULOC when nothing comparable exists
        #[arg(long)]
        safe_default: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the supported languages and their settings
    Languages {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
