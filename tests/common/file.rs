use derive_new::new;
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, new)]
pub struct JsonSpec {
    pub path: PathBuf,
    pub content: String,
}

impl JsonSpec {
    pub fn from_value(path: PathBuf, value: &Value) -> Self {
        let content = serde_json::to_string(value).expect("Failed to serialize JSON fixture");
        Self::new(path, content)
    }

    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .expect("fixture path has no file name")
    }
}

pub fn write_json(spec: &JsonSpec) {
    if let Some(parent) = spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&spec.path, &spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", spec.path, e));
}

/// A product record with generated words, written compactly to `dir/name`.
pub fn write_generated_product(dir: &Path, name: &str) -> (JsonSpec, Value) {
    use fake::{
        Fake,
        faker::lorem::en::{Word, Words},
    };

    let value = serde_json::json!({
        "id": (1..1000).fake::<u32>(),
        "name": Word().fake::<String>(),
        "description": Words(3..6).fake::<Vec<String>>().join(" "),
        "tags": Words(2..4).fake::<Vec<String>>(),
    });

    let spec = JsonSpec::from_value(dir.join(name), &value);
    write_json(&spec);

    (spec, value)
}
