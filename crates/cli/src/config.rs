use anyhow::{Context, Result};
use orgtree_layout::LayoutOptions;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load layout options from a RON or JSON file, defaults when there is none
///
/// Files ending in `.ron` are read as RON, anything else as JSON. Fields the
/// file leaves out keep their default.
pub fn load_options(path: Option<&Path>) -> Result<LayoutOptions> {
    let Some(path) = path else {
        return Ok(LayoutOptions::default());
    };

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;

    let is_ron = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ron"));
    let options = if is_ron {
        ron::from_str(&contents)
            .with_context(|| format!("invalid RON config {}", path.display()))?
    } else {
        serde_json::from_str(&contents)
            .with_context(|| format!("invalid JSON config {}", path.display()))?
    };

    debug!("Loaded layout options from {}: {options:?}", path.display());
    Ok(options)
}
