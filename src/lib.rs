#[macro_use]
extern crate tracing;

use crate::{card::OutputCard, config::Config};


pub mod card;
pub mod config;
pub mod io;
pub mod logging;
pub mod printings;
pub mod projector;

/// Loads the configured source, projects its cards and writes the cleaned output.
pub fn convert(config: &Config) -> anyhow::Result<Vec<OutputCard>> {
    let timer = std::time::Instant::now();

    let mut printings = io::load_printings(&config.input)?;
    if let Some(sections) = config.sections.as_deref() {
        printings.retain_sections(sections);
        debug!(
            "Kept {} sections holding {} cards",
            printings.data.len(),
            printings.total_cards()
        );
    }

    let cards = projector::run(printings.data);
    io::write_cards(&config.output, &cards, config.format)?;

    info!(
        "Converted {} cards in {}ms",
        cards.len(),
        timer.elapsed().as_millis()
    );

    Ok(cards)
}
