use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout_of};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stdout_of(&output));

    let config = test.read_file(".resgenrc.json")?;
    assert!(config.contains("\"resourceRoots\""));
    assert!(config.contains("\"maxGroupSize\": 500"));
    assert!(config.contains("\"missingDefault\": \"warn\""));

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".resgenrc.json", "{}\n")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
    assert_eq!(test.read_file(".resgenrc.json")?, "{}\n");

    Ok(())
}

#[test]
fn test_init_then_generate_round_trip() -> Result<()> {
    let test = CliTest::with_resources(&["drawable/icon.xml"])?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stdout_of(&output));

    // The generated config points at the default compose resources root;
    // retarget it at this project's tree.
    let config = test
        .read_file(".resgenrc.json")?
        .replace("src/commonMain/composeResources", "res")
        .replace("build/generated/resgen", "gen");
    test.write_file(".resgenrc.json", &config)?;

    let output = test.command().arg("generate").output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stdout_of(&output));
    assert_eq!(test.list_dir("gen"), vec!["Drawable1.kt", "Res.kt"]);

    Ok(())
}
