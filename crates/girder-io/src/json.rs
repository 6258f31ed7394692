use anyhow::{Context, Result};
use girder_section::GirderSection;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Reads a JSON record such as `GirderParameters` or `DraftingStyle`.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read JSON file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse JSON file {}", path.display()))
}

pub fn section_to_json(section: &GirderSection) -> Result<String> {
    serde_json::to_string_pretty(section).context("serialize girder section")
}

pub fn write_section_json(section: &GirderSection, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    std::fs::write(path, section_to_json(section)?)
        .with_context(|| format!("write JSON file {}", path.display()))?;
    Ok(())
}
