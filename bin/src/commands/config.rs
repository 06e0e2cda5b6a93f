//! Defaults file commands.

use anyhow::{Context, Result};
use coatcalc_lib::{ConfigStore, Settings};

/// Load the defaults file, or built-in defaults when it does not exist.
pub(crate) fn load_settings() -> Result<Settings> {
    let store = ConfigStore::with_default_path();
    store
        .load()
        .with_context(|| format!("Invalid defaults file: {}", store.path().display()))
}

/// Print the defaults file path.
pub(crate) fn show_path() -> Result<()> {
    println!("{}", ConfigStore::default_path().display());
    Ok(())
}

/// Print the effective defaults.
pub(crate) fn show_settings() -> Result<()> {
    let store = ConfigStore::with_default_path();
    let settings = load_settings()?;

    if store.exists() {
        println!("# {}", store.path().display());
    } else {
        println!("# {} (not found, built-in defaults)", store.path().display());
    }
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}

/// Write a defaults file with built-in values.
pub(crate) fn init(force: bool) -> Result<()> {
    let store = ConfigStore::with_default_path();
    store
        .save(&Settings::default(), force)
        .context("Failed to create defaults file")?;

    println!("Defaults written to: {}", store.path().display());
    Ok(())
}
