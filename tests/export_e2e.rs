// tests/export_e2e.rs
//
// Scenario tests: CSV text → tokenizer → mapper → writer → JSON on disk.
//
use std::fs;

use serde_json::{Value, json};
use tempfile::tempdir;

use sheet_scrape::csv::parse_rows;
use sheet_scrape::error::Error;
use sheet_scrape::params::Params;
use sheet_scrape::runner::{self, RunOutcome};
use sheet_scrape::sheet::build_export;
use sheet_scrape::store::write_export;

const SHEET: &str = "\
Name,Category,Description,Technologies,LiveURL,RepoURL,ImageURL,Features,ResumeURL
Acme App,Web,\"A \"\"great\"\" app\",\"Go, React\",https://a.example,https://repo.example,,\"Fast, Simple\",https://resume.example
";

#[test]
fn sheet_to_json_document() {
    let export = build_export(&parse_rows(SHEET)).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("projects.json");
    write_export(&export, &path).unwrap();

    let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        written,
        json!({
            "resumeUrl": "https://resume.example",
            "projects": [{
                "id": "acme-app",
                "name": "Acme App",
                "category": "Web",
                "description": "A \"great\" app",
                "technologies": ["Go", "React"],
                "liveUrl": "https://a.example",
                "repoUrl": "https://repo.example",
                "imageUrl": "",
                "features": ["Fast", "Simple"]
            }]
        })
    );
}

#[test]
fn output_field_order_is_stable() {
    let export = build_export(&parse_rows(SHEET)).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("projects.json");
    write_export(&export, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    // Indented for diffability, resumeUrl before projects, id leads a record.
    assert!(text.starts_with("{\n  \"resumeUrl\""));
    let id_at = text.find("\"id\"").unwrap();
    let name_at = text.find("\"name\"").unwrap();
    assert!(id_at < name_at);
    assert!(text.ends_with('\n'));
}

#[test]
fn writer_overwrites_unconditionally() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("projects.json");
    fs::write(&path, "stale garbage, not even JSON").unwrap();

    let export = build_export(&parse_rows(SHEET)).unwrap();
    write_export(&export, &path).unwrap();

    let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["projects"][0]["id"], "acme-app");
}

#[test]
fn writer_creates_missing_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a").join("b").join("c").join("projects.json");

    let export = build_export(&parse_rows(SHEET)).unwrap();
    write_export(&export, &path).unwrap();
    assert!(path.is_file());
}

#[test]
fn header_only_sheet_leaves_prior_output_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("projects.json");
    let prior = "{ \"resumeUrl\": \"\", \"projects\": [] }\n";
    fs::write(&path, prior).unwrap();

    // Header only → EmptySheet → the writer never runs.
    let grid = parse_rows("Name,Category,Description\n");
    assert!(matches!(build_export(&grid), Err(Error::EmptySheet)));

    assert_eq!(fs::read_to_string(&path).unwrap(), prior);
}

#[test]
fn run_without_source_is_a_noop() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("projects.json");
    let prior = "{ \"resumeUrl\": \"\", \"projects\": [] }\n";
    fs::write(&path, prior).unwrap();

    let params = Params {
        url: None,
        out: path.clone(),
    };
    match runner::run(&params) {
        Ok(RunOutcome::SkippedNoSource) => {}
        other => panic!("expected SkippedNoSource, got {other:?}"),
    }

    assert_eq!(fs::read_to_string(&path).unwrap(), prior);
}

#[test]
fn quoted_multiline_description_survives_end_to_end() {
    let text = "Name,Description\nApp,\"line one\nline two\"\n";
    let export = build_export(&parse_rows(text)).unwrap();
    assert_eq!(export.projects[0].description, "line one\nline two");

    let dir = tempdir().unwrap();
    let path = dir.path().join("projects.json");
    write_export(&export, &path).unwrap();

    let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["projects"][0]["description"], "line one\nline two");
}
