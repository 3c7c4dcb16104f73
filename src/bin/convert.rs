#[macro_use]
extern crate tracing;

use printings::config::{Config, DEFAULT_CONFIG_PATH};

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load_or_default(&config_path)?;

    let _guard = printings::logging::init(&config)?;

    debug!("Using config {:?}", config);

    printings::convert(&config)?;

    Ok(())
}
