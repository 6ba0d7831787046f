use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout_of};

#[test]
fn test_variants_merge_into_one_accessor() -> Result<()> {
    let test = CliTest::with_resources(&["drawable/icon.xml", "drawable-dark/icon.xml"])?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stdout_of(&output));

    assert_eq!(test.list_dir("gen"), vec!["Drawable1.kt", "Res.kt"]);

    let drawable = test.read_file("gen/Drawable1.kt")?;
    assert!(drawable.contains("package app.test.resources"));
    assert!(drawable.contains("\"drawable:icon\""));
    assert!(drawable.contains("ResourceItem(setOf(), \"drawable/icon.xml\")"));
    assert!(drawable.contains("ResourceItem(setOf(ThemeQualifier.DARK), \"drawable-dark/icon.xml\")"));
    assert!(drawable.contains("val Res.drawable.icon: DrawableResource"));

    let res = test.read_file("gen/Res.kt")?;
    assert!(res.contains("object Res {"));
    assert!(res.contains("object drawable"));

    Ok(())
}

#[test]
fn test_groups_split_at_max_size() -> Result<()> {
    let files: Vec<String> = (0..7).map(|n| format!("drawable/icon_{}.xml", n)).collect();
    let refs: Vec<&str> = files.iter().map(String::as_str).collect();
    let test = CliTest::with_resources(&refs)?;

    let mut cmd = test.generate_command();
    cmd.args(["--max-group-size", "3"]);
    let output = cmd.output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stdout_of(&output));

    assert_eq!(
        test.list_dir("gen"),
        vec!["Drawable1.kt", "Drawable2.kt", "Drawable3.kt", "Res.kt"]
    );

    // Chunks keep sorted order across files.
    let first = test.read_file("gen/Drawable1.kt")?;
    let last = test.read_file("gen/Drawable3.kt")?;
    assert!(first.contains("val icon_0:"));
    assert!(last.contains("val icon_6:"));

    Ok(())
}

#[test]
fn test_lexicographic_sort_of_numeric_names() -> Result<()> {
    let test = CliTest::with_resources(&[
        "drawable/icon_105.xml",
        "drawable/icon_1045.xml",
        "drawable/icon_10450.xml",
    ])?;

    let mut cmd = test.generate_command();
    cmd.args(["--max-group-size", "2"]);
    let output = cmd.output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stdout_of(&output));

    // String sort: icon_1045 < icon_10450 < icon_105.
    let first = test.read_file("gen/Drawable1.kt")?;
    let second = test.read_file("gen/Drawable2.kt")?;
    assert!(first.contains("val icon_1045:"));
    assert!(first.contains("val icon_10450:"));
    assert!(second.contains("val icon_105:"));

    Ok(())
}

#[test]
fn test_output_is_deterministic() -> Result<()> {
    let test = CliTest::with_resources(&[
        "drawable/icon.xml",
        "drawable-dark/icon.xml",
        "drawable-fr/banner.png",
        "drawable/banner.png",
        "font/display.ttf",
        "raw/LICENSE",
    ])?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stdout_of(&output));
    let first: Vec<(String, String)> = test
        .list_dir("gen")
        .into_iter()
        .map(|name| {
            let text = test.read_file(&format!("gen/{}", name)).unwrap();
            (name, text)
        })
        .collect();

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stdout_of(&output));
    let second: Vec<(String, String)> = test
        .list_dir("gen")
        .into_iter()
        .map(|name| {
            let text = test.read_file(&format!("gen/{}", name)).unwrap();
            (name, text)
        })
        .collect();

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_unrecognized_file_fails_and_writes_nothing() -> Result<()> {
    let test = CliTest::with_resources(&["drawable/icon.xml", "stuff/readme.txt"])?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("unrecognized-resource"));
    assert!(stdout.contains("stuff/readme.txt"));
    assert!(test.list_dir("gen").is_empty());

    Ok(())
}

#[test]
fn test_duplicate_variant_fails() -> Result<()> {
    let test = CliTest::with_resources(&["drawable/icon.xml", "drawable/icon.png"])?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("duplicate-variant"));
    assert!(stdout.contains("drawable:icon"));
    assert!(test.list_dir("gen").is_empty());

    Ok(())
}

#[test]
fn test_identifier_collision_fails() -> Result<()> {
    let test = CliTest::with_resources(&["drawable/app-icon.png", "drawable/app_icon.png"])?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("identifier-collision"));
    assert!(stdout.contains("app-icon and app_icon both sanitize to drawable:app_icon"));
    assert!(test.list_dir("gen").is_empty());

    Ok(())
}

#[test]
fn test_case_sensitive_names_generate_two_accessors() -> Result<()> {
    let test = CliTest::with_resources(&["drawable/Icon.xml", "drawable/icon.xml"])?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stdout_of(&output));

    let drawable = test.read_file("gen/Drawable1.kt")?;
    assert!(drawable.contains("val Icon: DrawableResource"));
    assert!(drawable.contains("val icon: DrawableResource"));

    Ok(())
}

#[test]
fn test_missing_default_warns_but_emits() -> Result<()> {
    let test = CliTest::with_resources(&["drawable-dark/icon.xml"])?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stdout_of(&output));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("warning: drawable:icon has no default variant"));
    assert_eq!(test.list_dir("gen"), vec!["Drawable1.kt", "Res.kt"]);

    Ok(())
}

#[test]
fn test_missing_default_error_policy_blocks_emission() -> Result<()> {
    let test = CliTest::with_resources(&["drawable-dark/icon.xml"])?;

    let mut cmd = test.generate_command();
    cmd.args(["--missing-default", "error"]);
    let output = cmd.output()?;
    assert_eq!(output.status.code(), Some(1));

    assert!(stdout_of(&output).contains("error: drawable:icon has no default variant"));
    assert!(test.list_dir("gen").is_empty());

    Ok(())
}

#[test]
fn test_locale_only_strings_are_exempt() -> Result<()> {
    let test = CliTest::with_resources(&["string-fr/greeting.txt", "string-de/greeting.txt"])?;

    let mut cmd = test.generate_command();
    cmd.args(["--missing-default", "error"]);
    let output = cmd.output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stdout_of(&output));

    let strings = test.read_file("gen/String1.kt")?;
    assert!(strings.contains("LanguageQualifier(\"de\")"));
    assert!(strings.contains("LanguageQualifier(\"fr\")"));

    Ok(())
}

#[test]
fn test_empty_root_writes_only_res() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("res/.gitkeep", "")?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stdout_of(&output));
    assert_eq!(test.list_dir("gen"), vec!["Res.kt"]);

    Ok(())
}

#[test]
fn test_generate_reads_config_file() -> Result<()> {
    let test = CliTest::with_resources(&["drawable/icon.xml"])?;
    test.write_file(
        ".resgenrc.json",
        r#"{
  "resourceRoots": ["res"],
  "outputDir": "gen",
  "package": "com.example.configured"
}
"#,
    )?;

    let output = test.command().arg("generate").output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stdout_of(&output));

    let drawable = test.read_file("gen/Drawable1.kt")?;
    assert!(drawable.contains("package com.example.configured"));

    Ok(())
}

#[test]
fn test_help_lists_commands() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("generate"));
    assert!(stdout.contains("check"));
    assert!(stdout.contains("init"));

    Ok(())
}
