use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

mod common;
use common::command::{fixture_path, run_compare, workspace_dir};
use common::file::{JsonSpec, write_generated_product, write_json};

fn compare_fixtures_as_json(dir: &TempDir) -> Result<Value, Box<dyn std::error::Error>> {
    let left = fixture_path("payload1.json");
    let right = fixture_path("payload2.json");

    let output = run_compare(
        dir.path(),
        &[
            "--format",
            "json",
            left.to_str().ok_or("non UTF-8 fixture path")?,
            right.to_str().ok_or("non UTF-8 fixture path")?,
        ],
    )
    .assert()
    .success();

    Ok(serde_json::from_slice(&output.get_output().stdout)?)
}

#[rstest]
fn identical_documents_report_no_differences(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let (left, _) = write_generated_product(workspace_dir.path(), "left.json");
    let right = JsonSpec::new(workspace_dir.path().join("right.json"), left.content.clone());
    write_json(&right);

    let output = run_compare(
        workspace_dir.path(),
        &[left.file_name(), right.file_name()],
    )
    .assert()
    .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let rows = common::rows(&stdout);
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|row| !row.contains(" | ")
        && !row.trim_end().ends_with('<')
        && !row.contains(" > ")));
    assert_eq!(stdout.lines().last(), Some("no differences"));

    Ok(())
}

#[rstest]
fn changed_value_is_shown_side_by_side(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    workspace_dir
        .child("a.json")
        .write_str(r#"{"id": 1, "name": "Product A"}"#)?;
    workspace_dir
        .child("b.json")
        .write_str(r#"{"name": "Product B", "id": 1}"#)?;

    let output = run_compare(workspace_dir.path(), &["a.json", "b.json"])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    assert_eq!(
        common::rows(&stdout),
        vec![
            "1  {                         1  {",
            "2      \"id\": 1,              2      \"id\": 1,",
            "3      \"name\": \"Product A\" | 3      \"name\": \"Product B\"",
            "4  }                         4  }",
        ]
    );
    assert_eq!(
        stdout.lines().last(),
        Some("0 added, 0 removed, 1 modified, 3 unchanged")
    );

    Ok(())
}

#[rstest]
fn inline_format_prints_prefixed_lines(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    workspace_dir.child("a.json").write_str(r#"{"id": 1}"#)?;
    workspace_dir
        .child("b.json")
        .write_str(r#"{"id": 1, "name": "Product A"}"#)?;

    let output = run_compare(
        workspace_dir.path(),
        &["--format", "inline", "a.json", "b.json"],
    )
    .assert()
    .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    assert_eq!(
        common::rows(&stdout),
        vec![
            "--- a.json",
            "+++ b.json",
            " {",
            "-    \"id\": 1",
            "+    \"id\": 1,",
            "+    \"name\": \"Product A\"",
            " }",
        ]
    );

    Ok(())
}

#[rstest]
fn json_format_matches_compare_endpoint_shape(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = compare_fixtures_as_json(&workspace_dir)?;
    let diffs = report["diffs"].as_array().ok_or("missing diffs array")?;

    assert_eq!(diffs.len(), 24);
    assert_eq!(
        diffs[1],
        json!({
            "leftNumber": null,
            "rightNumber": 2,
            "left": "",
            "right": "    \"discount\": {",
            "status": "added"
        })
    );
    assert_eq!(
        diffs[13],
        json!({
            "leftNumber": 10,
            "rightNumber": 14,
            "left": "    \"price\": 129.99,",
            "right": "    \"price\": 119.99,",
            "status": "modified",
            "highlights": [
                {"text": "    \"price\": ", "kind": "unchanged"},
                {"text": "129", "kind": "removed"},
                {"text": "119", "kind": "added"},
                {"text": ".99,", "kind": "unchanged"}
            ]
        })
    );

    Ok(())
}

#[rstest]
fn json_format_numbers_both_sides_contiguously(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = compare_fixtures_as_json(&workspace_dir)?;
    let diffs = report["diffs"].as_array().ok_or("missing diffs array")?;

    let left: Vec<u64> = diffs
        .iter()
        .filter_map(|d| d["leftNumber"].as_u64())
        .collect();
    let right: Vec<u64> = diffs
        .iter()
        .filter_map(|d| d["rightNumber"].as_u64())
        .collect();

    assert_eq!(left, (1..=20).collect::<Vec<_>>());
    assert_eq!(right, (1..=21).collect::<Vec<_>>());
    for diff in diffs {
        let status = diff["status"].as_str().ok_or("missing status")?;
        assert_eq!(status == "added", diff["leftNumber"].is_null());
        assert_eq!(status == "removed", diff["rightNumber"].is_null());
        assert_eq!(status == "modified", diff.get("highlights").is_some());
    }

    Ok(())
}

#[rstest]
fn format_can_be_chosen_through_environment(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    workspace_dir.child("a.json").write_str("[1, 2]")?;
    workspace_dir.child("b.json").write_str("[1, 2]")?;

    let output = run_compare(workspace_dir.path(), &["a.json", "b.json"])
        .env("JDIFF_FORMAT", "json")
        .assert()
        .success();

    let report: Value = serde_json::from_slice(&output.get_output().stdout)?;
    assert_eq!(report["diffs"].as_array().map(Vec::len), Some(4));

    Ok(())
}

#[rstest]
fn custom_indent_changes_the_compared_lines(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    workspace_dir.child("a.json").write_str(r#"{"a": [1]}"#)?;
    workspace_dir.child("b.json").write_str(r#"{"a": [2]}"#)?;

    let output = run_compare(
        workspace_dir.path(),
        &["--format", "inline", "--indent", "1", "a.json", "b.json"],
    )
    .assert()
    .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    assert!(stdout.contains("\n-  1\n+  2\n"));

    Ok(())
}

#[rstest]
fn generated_word_change_is_highlighted(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let (left, mut value) = write_generated_product(workspace_dir.path(), "left.json");
    let old_name = value["name"].as_str().ok_or("missing name")?.to_string();
    let new_name = format!("{old_name}x");
    value["name"] = Value::String(new_name.clone());
    let right = JsonSpec::from_value(workspace_dir.path().join("right.json"), &value);
    write_json(&right);

    let output = run_compare(
        workspace_dir.path(),
        &["--format", "json", left.file_name(), right.file_name()],
    )
    .assert()
    .success();

    let report: Value = serde_json::from_slice(&output.get_output().stdout)?;
    let diffs = report["diffs"].as_array().ok_or("missing diffs array")?;
    let modified: Vec<&Value> = diffs
        .iter()
        .filter(|d| d["status"] == "modified")
        .collect();

    assert_eq!(modified.len(), 1);
    assert!(modified[0]["left"].as_str().unwrap_or_default().contains(&old_name));
    assert!(modified[0]["right"].as_str().unwrap_or_default().contains(&new_name));

    Ok(())
}

#[rstest]
fn exit_code_flag_reports_differences(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    workspace_dir.child("a.json").write_str(r#"{"id": 1}"#)?;
    workspace_dir.child("b.json").write_str(r#"{"id": 2}"#)?;
    workspace_dir.child("c.json").write_str(r#"{ "id" : 1 }"#)?;

    run_compare(workspace_dir.path(), &["--exit-code", "a.json", "b.json"])
        .assert()
        .code(1);
    run_compare(workspace_dir.path(), &["--exit-code", "a.json", "c.json"])
        .assert()
        .success();
    run_compare(workspace_dir.path(), &["a.json", "b.json"])
        .assert()
        .success();

    Ok(())
}

#[rstest]
fn reads_one_side_from_stdin(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    workspace_dir.child("a.json").write_str(r#"{"id": 1}"#)?;

    run_compare(workspace_dir.path(), &["--exit-code", "a.json", "-"])
        .write_stdin(r#"{"id": 1}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("no differences"));

    run_compare(workspace_dir.path(), &["-", "-"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "only one input can be read from stdin",
        ));

    Ok(())
}

#[rstest]
#[case("missing.json", "missing input: missing.json")]
#[case("empty.json", "JSON cannot be empty")]
#[case("broken.json", "Invalid JSON")]
fn invalid_inputs_fail_before_comparing(
    workspace_dir: TempDir,
    #[case] input: &str,
    #[case] message: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    workspace_dir.child("ok.json").write_str("{}")?;
    workspace_dir.child("empty.json").write_str("  \n")?;
    workspace_dir.child("broken.json").write_str(r#"{"id": "#)?;

    run_compare(workspace_dir.path(), &["ok.json", input])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(message));

    Ok(())
}

#[rstest]
fn line_limit_rejects_large_inputs(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    workspace_dir.child("a.json").write_str("[1, 2, 3]")?;
    workspace_dir.child("b.json").write_str("[1]")?;

    run_compare(
        workspace_dir.path(),
        &["--max-lines", "4", "a.json", "b.json"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains(
        "input too large: left input has 5 lines, the limit is 4",
    ));

    run_compare(workspace_dir.path(), &["a.json", "b.json"])
        .env("JDIFF_MAX_LINES", "5")
        .assert()
        .success();

    Ok(())
}

#[rstest]
fn numbers_beyond_float_precision_are_compared_exactly(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    workspace_dir
        .child("a.json")
        .write_str(r#"{"id": 100000000000000000001, "p": 0.10000000000000000001}"#)?;
    workspace_dir
        .child("b.json")
        .write_str(r#"{"id": 100000000000000000002, "p": 0.1}"#)?;

    let output = run_compare(
        workspace_dir.path(),
        &["--exit-code", "--format", "inline", "a.json", "b.json"],
    )
    .assert()
    .code(1);

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    assert_eq!(
        common::rows(&stdout),
        vec![
            "--- a.json",
            "+++ b.json",
            " {",
            "-    \"id\": 100000000000000000001,",
            "+    \"id\": 100000000000000000002,",
            "-    \"p\": 0.10000000000000000001",
            "+    \"p\": 0.1",
            " }",
        ]
    );
    assert_eq!(
        stdout.lines().last(),
        Some("0 added, 0 removed, 2 modified, 2 unchanged")
    );

    Ok(())
}
