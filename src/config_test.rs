use super::*;

#[test]
fn default_table_has_four_languages() {
    let config = Config::default();
    let names: Vec<&str> = config.languages.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["C", "C#", "C++", "Java"]);
    assert_eq!(config.language("C++").unwrap().dataset, "cpp.csv");
    assert_eq!(
        config.dataset_path("C#").unwrap(),
        PathBuf::from("resources").join("csharp.csv")
    );
}

#[test]
fn default_settings() {
    let s = LanguageSettings::default();
    assert_eq!(s.upper_threshold, 75.0);
    assert_eq!(s.size_tolerance, 0.4);
    assert_eq!(s.k_nearest, 25);
    assert!(s.use_topics);
    assert!(!s.use_architecture_filter);
}

#[test]
fn unsupported_language() {
    let err = Config::default().language("Fortran").unwrap_err();
    assert!(matches!(err, Error::UnsupportedLanguage(ref l) if l == "Fortran"));
}

#[test]
fn toml_overrides_merge_over_defaults() {
    let config = Config::from_toml_str(
        r#"
dataset_dir = "data"

[languages.Java]
upper_threshold = 80
use_architecture_filter = true

[languages.Go]
k_nearest = 10
"#,
    )
    .unwrap();

    assert_eq!(config.dataset_dir, PathBuf::from("data"));
    let java = config.language("Java").unwrap();
    assert_eq!(java.dataset, "java.csv");
    assert_eq!(java.settings.upper_threshold, 80.0);
    assert!(java.settings.use_architecture_filter);
    assert_eq!(java.settings.k_nearest, 25);

    let go = config.language("Go").unwrap();
    assert_eq!(go.dataset, "go.csv");
    assert_eq!(go.settings.k_nearest, 10);

    assert!(config.language("C").is_ok());
}

#[test]
fn toml_rejects_invalid_settings() {
    let err = Config::from_toml_str("[languages.Java]\nk_nearest = 0\n").unwrap_err();
    assert!(matches!(err, Error::Config(_)));

    let err = Config::from_toml_str("[languages.C]\nupper_threshold = 140\n").unwrap_err();
    assert!(err.to_string().contains("upper_threshold"));
}

#[test]
fn toml_rejects_unknown_keys() {
    let err = Config::from_toml_str("[languages.Java]\nknearest = 5\n").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn load_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[languages.C]\nsize_tolerance = 0.25\n").unwrap();
    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.language("C").unwrap().settings.size_tolerance, 0.25);
}

#[test]
fn load_explicit_missing_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn print_languages_table_and_json() {
    let config = Config::default();
    print_languages(&config, false).unwrap();
    print_languages(&config, true).unwrap();
}

#[test]
fn config_serializes_flattened_settings() {
    let value = serde_json::to_value(Config::default()).unwrap();
    assert_eq!(value["languages"]["C#"]["dataset"], "csharp.csv");
    assert_eq!(value["languages"]["C#"]["k_nearest"], 25);
}
