use clap::Parser;
use ir_core::{IndexConfig, QueryMode};
use ir_search::cli::{resolve_config, Args, Mode};
use std::fs;
use tempfile::tempdir;

#[test]
fn flags_override_json_base() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scoring.json");
    fs::write(&path, r#"{ "k": 2.0, "b": 0.1, "positional": false }"#).unwrap();

    let args = Args::try_parse_from([
        "search",
        "collection.txt",
        "--config",
        path.to_str().unwrap(),
        "--b",
        "0.5",
        "--no-bm25",
    ])
    .unwrap();
    let config = args.index_config().unwrap();
    assert_eq!(config, IndexConfig { k: 2.0, b: 0.5, bm25: false, positional: false });
}

#[test]
fn defaults_without_config_or_flags() {
    let args = Args::try_parse_from(["search", "collection.txt"]).unwrap();
    assert_eq!(args.index_config().unwrap(), IndexConfig::default());
    assert_eq!(QueryMode::from(args.mode), QueryMode::Or);
}

#[test]
fn infinite_k_from_command_line() {
    let args = Args::try_parse_from(["search", "c.txt", "--k", "inf", "--mode", "and"]).unwrap();
    let config = args.index_config().unwrap();
    assert_eq!(config.k, f64::INFINITY);
    assert_eq!(config.b, 0.75);
    assert_eq!(args.mode, Mode::And);
}

#[test]
fn unreadable_config_names_the_path() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let err = resolve_config(Some(missing.as_path()), None, None, false, true).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("failed to read config"));
    assert!(msg.contains("missing.json"));
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ k: ").unwrap();
    let err = resolve_config(Some(path.as_path()), Some(1.0), None, false, false).unwrap_err();
    assert!(format!("{err:#}").contains("invalid config"));
}
