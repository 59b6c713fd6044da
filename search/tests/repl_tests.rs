use ir_core::{IndexConfig, QueryMode};
use ir_search::{load_documents, OutputFormat, Session};
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;

const COLLECTION: &str = "first first document\nsecond document document\n\nthird document document third\n";

fn session(dir: &std::path::Path) -> Session {
    let path = dir.join("collection.txt");
    fs::write(&path, COLLECTION).unwrap();
    Session::open(path, IndexConfig::term_frequency(), 1).unwrap()
}

fn run(session: &Session, input: &str) -> String {
    let mut out = Vec::new();
    session.run(Cursor::new(input.to_string()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn blank_lines_are_documents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("c.txt");
    fs::write(&path, COLLECTION).unwrap();
    let docs = load_documents(&path).unwrap();
    assert_eq!(docs.len(), 4);
    assert_eq!(docs[2], "");
}

#[test]
fn missing_collection_is_fatal() {
    let dir = tempdir().unwrap();
    let err = Session::open(dir.path().join("nope.txt"), IndexConfig::default(), 1).err().unwrap();
    assert!(format!("{err:#}").contains("nope.txt"));
}

#[test]
fn empty_collection_is_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();
    let err = Session::open(path, IndexConfig::default(), 1).err().unwrap();
    assert!(err.to_string().contains("empty corpus"));
}

#[test]
fn prompts_and_prints_ranked_records() {
    let dir = tempdir().unwrap();
    let s = session(dir.path());
    let out = run(&s, "2\ndocument\n");
    assert!(out.contains("2 matching records:"));
    assert!(out.contains("Doc id: [2, 2.0]\nDoc id: [4, 2.0]\n"));
}

#[test]
fn blank_count_means_all_and_bad_count_reprompts() {
    let dir = tempdir().unwrap();
    let s = session(dir.path());
    let out = run(&s, "many\n\ndocument first\n");
    assert!(out.contains("Not a number: many"));
    assert!(out.contains("3 matching records:"));
    assert!(out.contains("Doc id: [1, 3.0]"));
}

#[test]
fn reload_swaps_in_new_collection() {
    let dir = tempdir().unwrap();
    let s = session(dir.path());
    assert_eq!(s.num_docs(), 4);
    fs::write(dir.path().join("collection.txt"), "fresh words\nfresh\n").unwrap();
    let out = run(&s, ":reload\n5\nfresh\n");
    assert!(out.contains("Reindexed 2 documents"));
    assert!(out.contains("2 matching records:"));
    assert!(s.search("document", None).is_empty());
}

#[test]
fn and_mode_and_json_output() {
    let dir = tempdir().unwrap();
    let s = session(dir.path()).with_mode(QueryMode::And).with_format(OutputFormat::Json);
    let out = run(&s, "\nfirst document\n");
    assert!(out.contains("1 matching records:"));
    assert!(out.contains(r#"{"doc_id":1,"score":3.0}"#));
}
