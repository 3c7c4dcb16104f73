use std::path::Path;

use anyhow::{anyhow, Context};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};

use crate::config::Config;

/// Opens `path` for appending, creating its directory when needed.
pub fn file_appender(path: &Path) -> anyhow::Result<RollingFileAppender> {
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("Invalid log file: {}", path.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .with_context(|| format!("Opening log file: {}", path.display()))
}

/// Installs the global subscriber. The returned guard flushes the log file on drop.
pub fn init(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(config.log_level))
        .pretty()
        .with_ansi(false)
        .with_line_number(true)
        .with_file(true)
        .with_target(false);

    match config.log_file.as_deref() {
        Some(log_file) => {
            let (writer, guard) = tracing_appender::non_blocking(file_appender(log_file)?);
            subscriber.with_writer(writer).init();
            Ok(Some(guard))
        }
        None => {
            subscriber.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}
