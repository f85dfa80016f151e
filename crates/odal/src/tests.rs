use std::fs;

use serde::{Deserialize, Serialize};
use tempfile::tempdir;
use toml::Table;

use crate::{Config, ConfigKind, Error, ErrorKind, extract_diff, merge};

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
struct TestConfig {
    name: String,
    leg: LegConfig,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
struct LegConfig {
    upper: [f64; 3],
    lower: [f64; 3],
    limits: Limits,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
struct Limits {
    min: f64,
    max: f64,
}

impl Config for TestConfig {
    const PATH: &'static str = "test_config.toml";
}

const MAIN: &str = r#"
name = "ers210"

[leg]
upper = [12.8, 0.5, -64.0]
lower = [-18.88, 0.0, -66.0]

[leg.limits]
min = -0.5
max = 2.5
"#;

fn main_config() -> TestConfig {
    toml::from_str(MAIN).unwrap()
}

#[test]
fn diff_contains_only_changes() {
    let main: Table = MAIN.parse().unwrap();
    let changed: Table = r#"
        name = "ers7"

        [leg]
        upper = [12.8, 0.5, -64.0]
        lower = [-11.24, 0.0, -76.07]

        [leg.limits]
        min = -0.5
        max = 2.5
    "#
    .parse()
    .unwrap();

    let diff = extract_diff(&main, &changed);

    assert_eq!(diff["name"].as_str(), Some("ers7"));
    let leg = diff["leg"].as_table().unwrap();
    assert!(!leg.contains_key("upper"));
    assert!(leg.contains_key("lower"));
    // unchanged nested tables are dropped entirely
    assert!(!leg.contains_key("limits"));
}

#[test]
fn merge_replaces_values_and_keeps_the_rest() {
    let main: Table = MAIN.parse().unwrap();
    let overlay: Table = r"
        [leg.limits]
        max = 1.5
    "
    .parse()
    .unwrap();

    let merged = merge(main.clone(), overlay);

    let limits = merged["leg"]["limits"].as_table().unwrap();
    assert_eq!(limits["max"].as_float(), Some(1.5));
    assert_eq!(limits["min"].as_float(), Some(-0.5));
    assert_eq!(merged["name"], main["name"]);
    assert_eq!(merged["leg"]["upper"], main["leg"]["upper"]);
}

#[test]
fn merge_with_diff_restores_changed_table() {
    let main: Table = MAIN.parse().unwrap();
    let mut changed = main.clone();
    changed.insert("name".to_string(), "hind".into());

    let diff = extract_diff(&main, &changed);

    assert_eq!(merge(main, diff), changed);
}

#[test]
fn store_then_load() {
    let dir = tempdir().unwrap();
    let config = main_config();

    config.store(dir.path()).unwrap();

    assert_eq!(TestConfig::load(dir.path()).unwrap(), config);
}

#[test]
fn save_as_overlay_then_load_with_overlay() {
    let dir = tempdir().unwrap();
    let main_dir = dir.path().join("config");
    let overlay_dir = main_dir.join("overlay/ers7");

    fs::create_dir_all(&main_dir).unwrap();
    fs::write(main_dir.join(TestConfig::PATH), MAIN).unwrap();

    let main = TestConfig::load(&main_dir).unwrap();
    let mut modified = main.clone();
    modified.name = "ers7".to_string();
    modified.leg.lower = [-11.24, 0.0, -76.07];

    modified.save_as_overlay(&main, &overlay_dir).unwrap();

    let overlay: Table = fs::read_to_string(overlay_dir.join(TestConfig::PATH))
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(overlay["name"].as_str(), Some("ers7"));
    assert!(!overlay["leg"].as_table().unwrap().contains_key("upper"));
    assert!(!overlay["leg"].as_table().unwrap().contains_key("limits"));

    let loaded = TestConfig::load_with_overlay(&main_dir, &overlay_dir).unwrap();
    assert_eq!(loaded, modified);
}

#[test]
fn missing_overlay_is_reported_as_overlay_load_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(TestConfig::PATH), MAIN).unwrap();

    let result = TestConfig::load_with_overlay(dir.path(), dir.path().join("overlay/none"));

    assert!(matches!(
        result,
        Err(Error {
            kind: ErrorKind::Load {
                config_kind: ConfigKind::Overlay,
                ..
            },
            ..
        })
    ));
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(TestConfig::PATH),
        format!("{MAIN}\n[extra]\nvalue = 1\n"),
    )
    .unwrap();

    assert!(matches!(
        TestConfig::load(dir.path()),
        Err(Error {
            kind: ErrorKind::Deserialize(_),
            ..
        })
    ));
}
