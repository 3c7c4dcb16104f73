use std::path::PathBuf;

use pretty_assertions::assert_eq;

use crate::config::{Config, LogLevel, OutputFormat};

#[test]
fn empty_file_uses_defaults() -> anyhow::Result<()> {
    let config: Config = toml::from_str("")?;

    assert_eq!(config, Config::default());
    assert_eq!(config.input, PathBuf::from("data/AllPrintings.json"));
    assert_eq!(config.output, PathBuf::from("data/clean-all-printings.json"));
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.log_level, LogLevel::Info);

    Ok(())
}

#[test]
fn parses_every_field() -> anyhow::Result<()> {
    let config: Config = toml::from_str(
        r#"
            input = "Standard.json"
            output = "out/standard.yaml"
            format = "yaml"
            sections = ["BIG", "OTJ"]
            log_level = "debug"
            log_file = "logs/convert.log"
        "#,
    )?;

    assert_eq!(
        config,
        Config {
            input: PathBuf::from("Standard.json"),
            output: PathBuf::from("out/standard.yaml"),
            format: OutputFormat::Yaml,
            sections: Some(vec!["BIG".to_string(), "OTJ".to_string()]),
            log_level: LogLevel::Debug,
            log_file: Some(PathBuf::from("logs/convert.log")),
        }
    );

    Ok(())
}

#[test]
fn rejects_unknown_keys() {
    assert!(toml::from_str::<Config>("indent = 4").is_err());
}

#[test]
fn missing_file_falls_back_to_defaults() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    let config = Config::load_or_default(dir.path().join("printings.toml"))?;
    assert_eq!(config, Config::default());

    Ok(())
}

#[test]
fn loads_from_disk() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("printings.toml");
    std::fs::write(&path, "format = \"yaml\"\n")?;

    let config = Config::load_or_default(&path)?;
    assert_eq!(config.format, OutputFormat::Yaml);
    assert_eq!(config.output, Config::default().output);

    Ok(())
}

#[test]
fn malformed_file_is_an_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("printings.toml");
    std::fs::write(&path, "format = yaml")?;

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("Parsing config"));

    Ok(())
}

#[test]
fn format_names() {
    assert_eq!(OutputFormat::Json.as_ref(), "json");
    assert_eq!(OutputFormat::Yaml.as_ref(), "yaml");
}
