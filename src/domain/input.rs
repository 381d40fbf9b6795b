use anyhow::Context;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Parse a JSON document, rejecting blank input.
pub fn parse_json(text: &str) -> anyhow::Result<Value> {
    if text.trim().is_empty() {
        anyhow::bail!("JSON cannot be empty");
    }

    serde_json::from_str(text).map_err(|e| anyhow::anyhow!("Invalid JSON: {e}"))
}

/// Read and parse a JSON document from a file, or from stdin for `-`.
pub fn load_json(path: &Path) -> anyhow::Result<Value> {
    let text = if path == Path::new(STDIN_PATH) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        text
    } else {
        if !path.exists() {
            anyhow::bail!("missing input: {}", path.display());
        }
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    debug!(path = %path.display(), bytes = text.len(), "loaded input");

    parse_json(&text).with_context(|| format!("in {}", path.display()))
}
