use anyhow::Context;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

pub const DEFAULT_INDENT: usize = 4;

/// Turns a structured value into the text lines the comparison works on.
///
/// Implementations must be canonical: values that are structurally equal have to
/// produce identical lines, otherwise reorderings show up as modifications.
pub trait LineSerializer {
    fn serialize_lines<V>(&self, value: &V) -> anyhow::Result<Vec<String>>
    where
        V: Serialize + ?Sized;
}

/// Pretty-printed JSON with object keys in sorted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrettyJson {
    indent: usize,
}

impl PrettyJson {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }
}

impl Default for PrettyJson {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT)
    }
}

impl LineSerializer for PrettyJson {
    fn serialize_lines<V>(&self, value: &V) -> anyhow::Result<Vec<String>>
    where
        V: Serialize + ?Sized,
    {
        // Going through `Value` sorts object keys; numbers keep their source text.
        let canonical = serde_json::to_value(value).context("value is not representable as JSON")?;

        let indent = " ".repeat(self.indent);
        let mut buffer = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(indent.as_bytes()));
        canonical
            .serialize(&mut serializer)
            .context("failed to pretty-print JSON")?;

        let text = String::from_utf8(buffer).context("pretty-printed JSON is not valid UTF-8")?;
        Ok(text.split('\n').map(str::to_string).collect())
    }
}
