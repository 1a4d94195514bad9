//! Long help text constants for CLI subcommands.

/// Benchmark generation: selection tiers and the bands shown per metric.
pub const BENCHMARK: &str = "\
Generate benchmarks for a project from the language's corpus.

Comparable projects are chosen in tiers, each tier used only when it keeps
at least k_nearest projects (default 25):

  1. Topic and Similar Size  shares a topic and ULOC within +/-40%
  2. Similar Size            ULOC within +/-40%
  3. Nearest Projects        the k_nearest projects closest in ULOC

For every metric the report shows the 25th and 50th percentile and an upper
threshold (75th by default) over the chosen projects, plus the A/B/C/D cut
points of each composite score (its 75th, 50th, 25th and 5th percentile).

Examples:
  cb benchmark Java 48000                         # core architecture
  cb benchmark Java 48000 --topics android,games  # prefer same-topic projects
  cb benchmark C++ 9000 --no-core --json          # machine-readable output
  cb benchmark Java 48000 --save run.json         # keep for later scoring";

/// Scoring a measurement: composite ranges and grading rule.
pub const SCORE: &str = "\
Score a measurement against comparable projects.

The measurement is a JSON file with either the native field names
(propagation_cost, core_size, useful_comment_density, ...) or the analysis
tool's report names (\"Propagation Cost\", \"Core Size\", ...).

Each metric is ranked among the comparable projects (0-1, inverted when
lower is better) and the ranks are summed into composites:

  Clarity       0-1  comment density
  Complexity    0-2  overly complex files, duplicate lines
  Architecture  0-3  propagation cost, core size (full credit without a core)
  Overall       0-5  clarity + complexity + architecture

A composite earns an A when it is strictly above the corpus's 75th
percentile, B above the 50th, C above the 25th, D above the 5th, else F.

Examples:
  cb score Java measurement.json                  # benchmark and score
  cb score Java measurement.json --run run.json   # reuse a saved run
  cb score Java measurement.json --safe-default   # fall back to Java/120k
  cb score Java measurement.json --json           # machine-readable output";
