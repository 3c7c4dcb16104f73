use std::path::Path;

use anyhow::Context;

use crate::{card::OutputCard, config::OutputFormat, printings::Printings};

pub fn load_printings(path: impl AsRef<Path>) -> anyhow::Result<Printings> {
    let path = path.as_ref();
    let timer = std::time::Instant::now();

    let contents =
        std::fs::read(path).with_context(|| format!("Reading source: {}", path.display()))?;
    let printings: Printings = serde_json::from_slice(&contents)
        .with_context(|| format!("Parsing source: {}", path.display()))?;

    info!(
        "Loaded {} sections from {} in {}ms",
        printings.data.len(),
        path.display(),
        timer.elapsed().as_millis()
    );
    if let Some(meta) = printings.meta.as_ref() {
        info!(
            "Source version {} ({})",
            meta.version.as_deref().unwrap_or("unknown"),
            meta.date.as_deref().unwrap_or("undated")
        );
    }

    Ok(printings)
}

pub fn serialize_cards(cards: &[OutputCard], format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(cards)?,
        OutputFormat::Yaml => serde_yaml::to_string(cards)?,
    })
}

/// Replaces the file at `path` with the serialized cards.
///
/// The whole document is rendered before the file is touched, so a
/// serialization failure leaves any previous output in place.
pub fn write_cards(
    path: impl AsRef<Path>,
    cards: &[OutputCard],
    format: OutputFormat,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let contents = serialize_cards(cards, format)
        .with_context(|| format!("Serializing {} cards", cards.len()))?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Creating output directory: {}", parent.display()))?;
    }

    std::fs::write(path, contents)
        .with_context(|| format!("Writing output: {}", path.display()))?;

    info!(
        "Wrote {} cards to {} as {}",
        cards.len(),
        path.display(),
        format.as_ref()
    );

    Ok(())
}
