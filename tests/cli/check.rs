use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout_of};

#[test]
fn test_check_clean_tree() -> Result<()> {
    let test = CliTest::with_resources(&["drawable/icon.xml", "font/display.ttf"])?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stdout_of(&output));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("checked 2 resources from 2 files, no issues found"));

    Ok(())
}

#[test]
fn test_check_reports_all_issues_at_once() -> Result<()> {
    let test = CliTest::with_resources(&[
        "drawable/icon.xml",
        "drawable/icon.png",
        "drawable/app-icon.png",
        "drawable/app_icon.png",
        "stuff/readme.txt",
    ])?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("duplicate-variant"));
    assert!(stdout.contains("identifier-collision"));
    assert!(stdout.contains("unrecognized-resource"));
    assert!(stdout.contains("found 3 errors"));

    Ok(())
}

#[test]
fn test_check_writes_nothing() -> Result<()> {
    let test = CliTest::with_resources(&["drawable/icon.xml"])?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stdout_of(&output));

    assert!(test.list_dir("gen").is_empty());
    assert!(test.list_dir("build").is_empty());

    Ok(())
}
