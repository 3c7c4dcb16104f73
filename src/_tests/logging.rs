use crate::logging::file_appender;

#[test]
fn opens_log_file_in_new_directory() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("logs").join("convert.log");

    file_appender(&path)?;
    assert!(path.exists());

    Ok(())
}

#[test]
fn unwritable_log_path_is_an_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let blocker = dir.path().join("not-a-directory");
    std::fs::write(&blocker, "")?;

    let err = file_appender(&blocker.join("convert.log")).unwrap_err();
    assert!(err.to_string().contains("Opening log file"));

    Ok(())
}
