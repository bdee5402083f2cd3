use assert_cmd::Command;
use std::io::Write as _;

fn dataset() -> &'static str {
    r#"[
        {
            "Text": "Unbekannte schmierten ein Hakenkreuz an eine Hauswand",
            "ExtractedDistrict": "Mitte",
            "KeywordMatch": ["hakenkreuz"],
            "ExtractedDate": "2024-03-01"
        },
        {
            "Text": "Antisemitische Parole auf einem Schulhof gerufen",
            "ExtractedDistrict": "Pankow",
            "KeywordMatch": ["Antisemitisch"],
            "ExtractedDate": "2024-04-01"
        }
    ]"#
}

fn dataset_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(dataset().as_bytes()).unwrap();
    file
}

#[test]
fn renders_an_svg_frame_to_stdout() {
    let file = dataset_file();
    let output = Command::cargo_bin("schaukasten-cli")
        .unwrap()
        .arg(file.path())
        .arg("--ticks")
        .arg("50")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("<svg"));
    assert!(stdout.contains("<text"));
}

#[test]
fn reads_from_stdin_when_no_path_is_given() {
    let output = Command::cargo_bin("schaukasten-cli")
        .unwrap()
        .arg("--ticks")
        .arg("10")
        .write_stdin(dataset())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().starts_with("<svg"));
}

#[test]
fn facet_listing_respects_filters() {
    let file = dataset_file();
    let output = Command::cargo_bin("schaukasten-cli")
        .unwrap()
        .arg(file.path())
        .args(["--format", "facets", "--district", "Mitte", "--ticks", "0"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let doc: serde_json::Value =
        serde_json::from_slice(&output.stdout).unwrap();
    // The district list ignores its own selection; keywords narrow to Mitte.
    assert_eq!(doc["district"], serde_json::json!(["Mitte", "Pankow"]));
    assert_eq!(doc["keyword"], serde_json::json!(["hakenkreuz"]));
}

#[test]
fn json_dump_lists_placed_glyphs() {
    let file = dataset_file();
    let output = Command::cargo_bin("schaukasten-cli")
        .unwrap()
        .arg(file.path())
        .args(["--format", "json", "--ticks", "20"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["visible"], serde_json::json!(2));
    assert!(doc["nodes"].as_array().unwrap().len() > 0);
}

#[test]
fn unknown_flags_exit_with_usage() {
    let output = Command::cargo_bin("schaukasten-cli")
        .unwrap()
        .arg("--no-such-flag")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr).unwrap().contains("USAGE"));
}

#[test]
fn broken_datasets_fail_cleanly() {
    let output = Command::cargo_bin("schaukasten-cli")
        .unwrap()
        .write_stdin("{\"kein\": \"Array\"}")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}
