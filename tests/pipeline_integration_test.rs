// End-to-end tests: dataset on disk -> benchmarks -> score card
mod common;

use codebench::Error;
use codebench::benchmark::{BenchmarkGenerator, BenchmarkRequest, load_run, save_run};
use codebench::corpus::Composite;
use codebench::measurement::Measurement;
use codebench::score::{CORE_EXPLANATION, Letter, score_run};
use codebench::select::SelectionMethod;

use common::{Row, config_for, measurement_json, ramp, write_dataset};

fn request(language: &str, uloc: u64, is_core: bool) -> BenchmarkRequest {
    BenchmarkRequest {
        uloc,
        language: language.to_string(),
        topics: String::new(),
        is_core,
    }
}

fn measurement(uloc: u64, value: f64, density: f64, is_core: bool) -> Measurement {
    Measurement::from_json_str(&measurement_json(uloc, value, density, is_core))
        .expect("valid measurement")
}

#[test]
fn comment_density_rank_in_uniform_corpus() {
    let dir = tempfile::tempdir().unwrap();
    // 30 densities spread evenly over 10..=30; 13 of them lie below 18.4
    let rows: Vec<Row> = (0..30)
        .map(|i| Row {
            density: 10.0 + i as f64 * 20.0 / 29.0,
            ..Row::new(&format!("java-{i}"), 50_000, 5.0)
        })
        .collect();
    write_dataset(dir.path(), "java.csv", &rows);

    let generator = BenchmarkGenerator::new(config_for(dir.path()));
    let run = generator
        .get_benchmarks(&request("Java", 50_000, true))
        .unwrap();
    assert_eq!(run.audit.selection_method, SelectionMethod::SimilarSize);
    assert_eq!(run.audit.num_projects, 30);

    let card = score_run(&run, &measurement(50_000, 5.0, 18.4, true)).unwrap();
    assert_eq!(card.value(Composite::Clarity), Some(0.43));
    assert_eq!(
        card.explanations["useful_comment_density"],
        "useful_comment_density percentile: 43.3 (+0.43)"
    );
}

#[test]
fn non_core_at_sixtieth_percentile_scores_1_40() {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(dir.path(), "java.csv", &ramp(10, 20_000));

    let generator = BenchmarkGenerator::new(config_for(dir.path()));
    let run = generator
        .get_benchmarks(&request("Java", 20_000, false))
        .unwrap();
    assert_eq!(run.audit.selection_method, SelectionMethod::NearestProjects);

    let card = score_run(&run, &measurement(20_000, 6.0, 6.0, false)).unwrap();
    assert_eq!(card.value(Composite::Architecture), Some(1.4));
    assert_eq!(
        card.explanations[CORE_EXPLANATION],
        "Core type of architecture is False, full credit for core size"
    );
}

#[test]
fn unsupported_language_fails_before_reading_data() {
    let dir = tempfile::tempdir().unwrap();
    let generator = BenchmarkGenerator::new(config_for(dir.path()));
    let err = generator
        .get_benchmarks_or_default(&request("Fortran", 10_000, true))
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedLanguage(ref l) if l == "Fortran"));
    assert_eq!(
        err.to_string(),
        "unable to create benchmarks - Fortran is not a supported language"
    );
}

#[test]
fn empty_corpus_falls_back_to_java_default() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("c.csv"),
        format!("{}\n", common::HEADER),
    )
    .unwrap();
    write_dataset(dir.path(), "java.csv", &ramp(12, 120_000));

    let generator = BenchmarkGenerator::new(config_for(dir.path()));
    let err = generator
        .get_benchmarks(&request("C", 8_000, true))
        .unwrap_err();
    assert!(err.is_recoverable());

    let run = generator
        .get_benchmarks_or_default(&request("C", 8_000, true))
        .unwrap();
    assert_eq!(run.audit.num_projects, 12);
}

#[test]
fn topic_tier_is_preferred_when_large_enough() {
    let dir = tempfile::tempdir().unwrap();
    let mut rows = ramp(40, 30_000);
    for row in rows.iter_mut().take(26) {
        row.topics = "['android', 'games']".to_string();
    }
    write_dataset(dir.path(), "java.csv", &rows);

    let generator = BenchmarkGenerator::new(config_for(dir.path()));
    let run = generator
        .get_benchmarks(&BenchmarkRequest {
            topics: "Android".to_string(),
            ..request("Java", 30_000, true)
        })
        .unwrap();
    assert_eq!(
        run.audit.selection_method,
        SelectionMethod::TopicAndSimilarSize
    );
    assert_eq!(run.audit.num_projects, 26);
}

#[test]
fn saved_run_scores_like_a_fresh_one() {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(dir.path(), "csharp.csv", &ramp(10, 5_000));

    let generator = BenchmarkGenerator::new(config_for(dir.path()));
    let run = generator
        .get_benchmarks(&request("C#", 5_000, true))
        .unwrap();
    let path = dir.path().join("run.json");
    save_run(&run, &path).unwrap();
    let loaded = load_run(&path).unwrap();

    let m = measurement(5_000, 3.0, 8.0, true);
    assert_eq!(
        score_run(&loaded, &m).unwrap(),
        score_run(&run, &m).unwrap()
    );
}

#[test]
fn grades_follow_corpus_cut_points() {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(dir.path(), "cpp.csv", &ramp(10, 9_000));

    let generator = BenchmarkGenerator::new(config_for(dir.path()));
    let run = generator
        .get_benchmarks(&request("C++", 9_000, true))
        .unwrap();

    // lowest complexity and duplication, highest density
    let best = score_run(&run, &measurement(9_000, 0.5, 11.0, true)).unwrap();
    assert_eq!(best.grade(Composite::Overall), Some(Letter::A));
    assert_eq!(best.value(Composite::Clarity), Some(1.0));

    let worst = score_run(&run, &measurement(9_000, 11.0, 0.5, true)).unwrap();
    assert_eq!(worst.value(Composite::Overall), Some(0.0));
    assert_eq!(worst.grade(Composite::Overall), Some(Letter::F));
}

#[test]
fn measurement_accepts_analysis_report_fields() {
    let m = Measurement::from_json_str(
        r#"{
            "Files": 200,
            "Core Size": 10.0,
            "Useful Lines of Code (ULOC)": 40000,
            "Useful Comment Density": 12.5,
            "Overly Complex Files": 2.0,
            "Architecture Type": "Hierarchical",
            "Propagation Cost": 14.0,
            "Classes": 180,
            "duplicate_uloc": 800,
            "percent_duplicate_uloc": 2.0
        }"#,
    )
    .unwrap();
    assert!(!m.is_core);
    assert_eq!(m.num_files_in_core, 20);
    assert_eq!(m.useful_lines_of_comments, 5000);
    assert_eq!(m.revision_id, "Not set");
}
