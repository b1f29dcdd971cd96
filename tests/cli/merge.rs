use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_merge_prefers_first_non_empty_value() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("common.json", r#"{"a": "", "b": "x"}"#)?;
    test.write_file("common2.json", r#"{"a": "y", "b": "z", "c": ""}"#)?;

    let output = test
        .merge_command()
        .args(["common.json", "common2.json", "-o", "merged.json"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", test.stderr(&output));
    assert_eq!(
        test.stdout(&output),
        "\u{2713} Merged 2 files into merged.json with 3 keys\n"
    );
    assert_eq!(
        test.read_file("merged.json")?,
        "{\n  \"a\": \"y\",\n  \"b\": \"x\",\n  \"c\": \"\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_merge_appends_json_extension_to_output() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("user.json", r#"{"title": "Profile"}"#)?;
    std::fs::create_dir(test.root().join("out"))?;

    let output = test
        .merge_command()
        .args(["user.json", "--output", "out/user-merged"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", test.stderr(&output));
    assert_eq!(
        test.read_file("out/user-merged.json")?,
        "{\n  \"title\": \"Profile\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_merge_without_output_uses_random_name() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.json", r#"{"k": "v"}"#)?;

    let output = test.merge_command().arg("a.json").output()?;

    assert!(output.status.success());
    let merged: Vec<String> = std::fs::read_dir(test.root())?
        .filter_map(|entry| entry.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("merged_i18n_"))
        .collect();
    assert_eq!(merged.len(), 1);
    let name = &merged[0];
    assert_eq!(name.len(), "merged_i18n_".len() + 16 + ".json".len());
    assert!(name.ends_with(".json"));
    assert!(test.stdout(&output).contains(name.as_str()));

    Ok(())
}

#[test]
fn test_merge_rejects_non_json_extension() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.json", "{}")?;
    test.write_file("notes.txt", "{}")?;

    let output = test
        .merge_command()
        .args(["a.json", "notes.txt", "-o", "out.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(test.stderr(&output).contains("Error: notes.txt is not a JSON file"));
    assert!(!test.root().join("out.json").exists());

    Ok(())
}

#[test]
fn test_merge_rejects_missing_file_before_reading_others() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("broken.json", "not json")?;

    let output = test
        .merge_command()
        .args(["broken.json", "missing.json", "-o", "out.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        test.stderr(&output)
            .contains("Error: File missing.json does not exist")
    );
    assert!(!test.root().join("out.json").exists());

    Ok(())
}

#[test]
fn test_merge_fails_on_nested_json_without_output() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("flat.json", r#"{"a": "1"}"#)?;
    test.write_file("nested.json", r#"{"a": {"b": "1"}}"#)?;

    let output = test
        .merge_command()
        .args(["flat.json", "nested.json", "-o", "out.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        test.stderr(&output)
            .starts_with("Error: Failed to parse JSON in file nested.json")
    );
    assert!(!test.root().join("out.json").exists());

    Ok(())
}

#[test]
fn test_merge_requires_at_least_one_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.merge_command().output()?;

    assert!(!output.status.success());

    Ok(())
}

#[test]
fn test_join_i18n_alias() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.json", r#"{"k": ""}"#)?;
    test.write_file("b.json", r#"{"k": "filled"}"#)?;

    let output = test
        .command()
        .args(["join-i18n", "a.json", "b.json", "-o", "ab"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("ab.json")?, "{\n  \"k\": \"filled\"\n}\n");

    Ok(())
}
