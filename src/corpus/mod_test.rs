use super::*;
use crate::testkit::case;

const LEGACY_DATASET: &str = "\
project_name,useful_lines_of_code_(uloc),core,core_size,propagation_cost,percent_files_overly_complex,percent_duplicate_uloc,useful_comment_density,overall_score,architecture_score,complexity_score,clarity_score,topics,stars
alpha,34516,True,10.2,14.4,1.9,16.15,18.4,3.1,1.4,1.2,0.5,\"['android', 'sdk']\",120
beta,120000.0,False,,22.0,3.0,4.5,12.0,2.2,1.1,0.8,0.3,,7
";

fn write_dataset(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("java.csv");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn load_cases_reads_legacy_headers_and_gaps() {
    let (_dir, path) = write_dataset(LEGACY_DATASET);
    let cases = load_cases(&path).unwrap();
    assert_eq!(cases.len(), 2);

    let alpha = &cases[0];
    assert_eq!(alpha.project_name, "alpha");
    assert_eq!(alpha.useful_lines_of_code, 34516);
    assert!(alpha.core);
    assert_eq!(alpha.value(Metric::UsefulCommentDensity), Some(18.4));
    assert_eq!(alpha.composite(Composite::Architecture), Some(1.4));
    assert!(alpha.tags().contains("android"));

    let beta = &cases[1];
    assert_eq!(beta.useful_lines_of_code, 120000);
    assert!(!beta.core);
    assert_eq!(beta.core_size, None);
    assert!(beta.tags().is_empty());
}

#[test]
fn load_cases_rejects_bad_flag() {
    let (_dir, path) = write_dataset(
        "project_name,useful_lines_of_code,core,core_size,propagation_cost,percent_files_overly_complex,percent_duplicate_uloc,useful_comment_density,overall_score,architecture_score,complexity_score,clarity_score,topics\n\
         x,10,maybe,1,1,1,1,1,1,1,1,1,\n",
    );
    let err = load_cases(&path).unwrap_err();
    assert!(matches!(err, Error::Dataset { .. }), "got {err}");
}

#[test]
fn load_cases_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_cases(&dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, Error::Dataset { .. }));
}

#[test]
fn metric_column_skips_missing_values() {
    let mut cases = vec![case("a", 10, 1.0), case("b", 10, 2.0)];
    cases[1].core_size = None;
    assert_eq!(metric_column(&cases, Metric::CoreSize), vec![1.0]);
    assert_eq!(metric_column(&cases, Metric::PropagationCost), vec![1.0, 2.0]);
}

#[test]
fn snapshot_keeps_topics_last_and_reads_back() {
    let mut a = case("a", 1000, 2.5);
    a.topics = "web, http".to_string();
    let cases = vec![a, case("b", 2000, 3.5)];

    let text = write_snapshot(&cases).unwrap();
    let header = text.lines().next().unwrap();
    assert!(header.starts_with("project_name,useful_lines_of_code,core,"));
    assert!(header.ends_with(",topics"));

    let back = read_snapshot(&text).unwrap();
    assert_eq!(back, cases);
}

#[test]
fn empty_snapshot_reads_back_empty() {
    let text = write_snapshot(&[]).unwrap();
    assert!(read_snapshot(&text).unwrap().is_empty());
}

#[test]
fn metric_directions() {
    assert_eq!(
        Metric::UsefulCommentDensity.direction(),
        Direction::HigherIsBetter
    );
    assert!(
        Metric::ALL[..4]
            .iter()
            .all(|m| m.direction() == Direction::LowerIsBetter)
    );
}

#[test]
fn composite_ranges() {
    let total: f64 = Composite::ALL[..3].iter().map(|c| c.max_value()).sum();
    assert_eq!(total, Composite::Overall.max_value());
}
