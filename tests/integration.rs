use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_bscomp")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn displays(records: &[bscomp::CompletionRecord]) -> Vec<&str> {
    records.iter().map(|r| r.display.as_str()).collect()
}

// -- stdout mode --

#[test]
fn stdout_matches_expected_plist() {
    let expected = std::fs::read_to_string(fixture_path("completions.expected.plist")).unwrap();

    let assert = cmd().arg(fixture_path("bridgesupport")).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn progress_and_warnings_go_to_stderr() {
    cmd()
        .arg(fixture_path("bridgesupport"))
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("compiling Foundation.bridgesupport"))
        .stderr(predicate::str::contains("skipping"))
        .stderr(predicate::str::contains("Broken.bridgesupport"))
        .stdout(predicate::str::contains("HiddenClass").not());
}

// -- file mode --

#[test]
fn output_file_is_written() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("nested").join("RubyMotion.plist");

    cmd()
        .arg(fixture_path("bridgesupport"))
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let output = std::fs::read_to_string(&out).unwrap();
    let expected = std::fs::read_to_string(fixture_path("completions.expected.plist")).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn missing_directory_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("BridgeSupport");
    let out = dir.path().join("out.plist");

    cmd()
        .arg(missing.to_str().unwrap())
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input directory not found"));

    assert!(!out.exists());
}

#[test]
fn empty_directory_yields_empty_array() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg(dir.path().to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("<array>\n</array>"));
}

// -- library --

#[test]
fn records_are_sorted_and_merged_across_files() {
    let records = bscomp::collect_records(fixture_path("bridgesupport").as_ref()).unwrap();
    let displays = displays(&records);

    // NSObject and -description appear in both files
    assert_eq!(displays.iter().filter(|d| **d == "NSObject").count(), 1);
    assert_eq!(displays.iter().filter(|d| **d == "description").count(), 1);

    // uppercase keys sort before lowercase ones
    let upper = displays.iter().position(|d| *d == "NSString").unwrap();
    let lower = displays.iter().position(|d| *d == "description").unwrap();
    assert!(upper < lower);
}

#[test]
fn compiled_document_round_trips() {
    let dir = fixture_path("bridgesupport");
    let records = bscomp::collect_records(dir.as_ref()).unwrap();
    let document = bscomp::compile(dir.as_ref()).unwrap();

    let parsed = bscomp::plist::parse(&document).unwrap();
    assert_eq!(parsed, records);
    assert_eq!(bscomp::plist::render(&parsed), document);
}

#[test]
fn multi_keyword_selector_snippet() {
    let records = bscomp::collect_records(fixture_path("bridgesupport").as_ref()).unwrap();
    let record = records
        .iter()
        .find(|r| r.display == "rangeOfString:options:")
        .unwrap();
    assert_eq!(
        record.insert.as_deref(),
        Some("(${1:NSString* searchString}, options:${2:NSStringCompareOptions mask})")
    );
    assert_eq!(record.effective_match(), "rangeOfString");
}

#[test]
fn duplicate_records_from_separate_files_collapse() {
    let dir = TempDir::new().unwrap();
    let xml = "<signatures><constant name='maxValue' declared_type='int'/></signatures>";
    std::fs::write(dir.path().join("A.bridgesupport"), xml).unwrap();
    std::fs::write(dir.path().join("B.bridgesupport"), xml).unwrap();

    let records = bscomp::collect_records(dir.path()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].display, "MaxValue (int)");
    assert_eq!(records[0].effective_match(), "MaxValue");
}

#[test]
fn carriage_return_in_attribute_survives_round_trip() {
    let dir = TempDir::new().unwrap();
    let xml = "<signatures><constant name='kFoo' declared_type='char&#13;x'/></signatures>";
    std::fs::write(dir.path().join("CR.bridgesupport"), xml).unwrap();

    let records = bscomp::collect_records(dir.path()).unwrap();
    assert_eq!(records[0].display, "KFoo (char\rx)");

    let document = bscomp::compile(dir.path()).unwrap();
    assert_eq!(bscomp::plist::parse(&document).unwrap(), records);
}
